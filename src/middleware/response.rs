use super::MiddlewareError;
use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{self, HeaderValue};
use hyper::{HeaderMap, Response, StatusCode};

/// 응답 분류 결과
///
/// content-type의 본질(`;` 매개변수를 제외한 부분)이 `application/json`이거나
/// `+json` 접미사를 가지면 JSON 응답으로 분류합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Json,
    Other,
}

impl ResponseKind {
    /// 응답의 content-type 헤더로 종류를 판별합니다.
    pub fn of(res: &Response<Full<Bytes>>) -> Self {
        res.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(Self::from_content_type)
            .unwrap_or(Self::Other)
    }

    /// content-type 값으로 종류를 판별합니다.
    pub fn from_content_type(content_type: &str) -> Self {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        if essence == "application/json" {
            return Self::Json;
        }

        match essence.rsplit_once('+') {
            Some((_, suffix)) if suffix == "json" => Self::Json,
            _ => Self::Other,
        }
    }

    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// JSON 응답 생성 인터페이스
///
/// 상태 코드와 헤더를 보존한 채 본문 바이트를 JSON 응답으로 감쌉니다.
pub trait ResponseFactory: Send + Sync {
    fn json(
        &self,
        body: Bytes,
        status: StatusCode,
        headers: HeaderMap,
    ) -> Response<Full<Bytes>>;
}

/// 기본 JSON 응답 생성기
///
/// 상태를 갖지 않으므로 동시 요청 간에 안전하게 공유됩니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResponseFactory;

impl ResponseFactory for JsonResponseFactory {
    fn json(
        &self,
        body: Bytes,
        status: StatusCode,
        headers: HeaderMap,
    ) -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        response
    }
}

/// 미들웨어 에러를 HTTP 응답으로 변환합니다.
pub fn handle_middleware_error(err: MiddlewareError) -> Response<Full<Bytes>> {
    match err {
        // 의도된 단락 응답은 그대로 반환
        MiddlewareError::NotAcceptable(response) => response,
        err => {
            let status = match &err {
                MiddlewareError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };

            Response::builder()
                .status(status)
                .body(Full::new(Bytes::from(err.to_string())))
                .unwrap_or_else(|_| {
                    Response::new(Full::new(Bytes::from("Internal Server Error")))
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_content_types() {
        assert!(ResponseKind::from_content_type("application/json").is_json());
        assert!(ResponseKind::from_content_type("application/json; charset=utf-8").is_json());
        assert!(ResponseKind::from_content_type("APPLICATION/JSON").is_json());
        assert!(ResponseKind::from_content_type("application/problem+json").is_json());
        assert!(ResponseKind::from_content_type("application/vnd.api+json; charset=utf-8").is_json());
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!ResponseKind::from_content_type("text/html").is_json());
        assert!(!ResponseKind::from_content_type("text/json-patch").is_json());
        assert!(!ResponseKind::from_content_type("application/jsonp").is_json());
        assert!(!ResponseKind::from_content_type("").is_json());
    }

    #[test]
    fn test_response_without_content_type_is_other() {
        let response = Response::new(Full::new(Bytes::from("hello")));
        assert_eq!(ResponseKind::of(&response), ResponseKind::Other);
    }

    #[test]
    fn test_factory_preserves_status_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));
        headers.insert("x-request-id", HeaderValue::from_static("abc-123"));

        let response = JsonResponseFactory.json(
            Bytes::from("<h1>missing</h1>"),
            StatusCode::NOT_FOUND,
            headers,
        );

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json",
        );
        assert_eq!(response.headers().get("x-request-id").unwrap(), "abc-123");
    }

    #[test]
    fn test_not_acceptable_error_unwraps_carried_response() {
        let mut carried = Response::new(Full::new(Bytes::from("denied")));
        *carried.status_mut() = StatusCode::NOT_ACCEPTABLE;

        let response = handle_middleware_error(MiddlewareError::NotAcceptable(carried));
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let err = MiddlewareError::Config {
            middleware: "force-json".to_string(),
            message: "bad media type".to_string(),
        };

        let response = handle_middleware_error(err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
