use super::config::AjaxOnlyConfig;
use crate::middleware::{Middleware, MiddlewareError, Request, Response};
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::Full;
use hyper::header::HeaderName;
use hyper::{header, StatusCode};
use serde::Serialize;
use tracing::debug;

/// 406 응답 본문. 필드 선언 순서가 직렬화 순서를 고정합니다.
#[derive(Serialize)]
struct RejectionBody {
    status: &'static str,
    message: &'static str,
}

/// AJAX 전용 미들웨어
///
/// 지정된 헤더가 기대 값과 정확히 일치하지 않는 요청을
/// 406 Not Acceptable로 거부합니다.
pub struct AjaxOnlyMiddleware {
    header: HeaderName,
    value: String,
}

impl AjaxOnlyMiddleware {
    pub fn new(config: AjaxOnlyConfig) -> Result<Self, MiddlewareError> {
        let header = config.header.parse::<HeaderName>().map_err(|e| {
            MiddlewareError::Config {
                middleware: "ajax-only".to_string(),
                message: format!("잘못된 헤더 이름 '{}': {}", config.header, e),
            }
        })?;

        if config.value.is_empty() {
            return Err(MiddlewareError::Config {
                middleware: "ajax-only".to_string(),
                message: "기대하는 헤더 값이 비어 있습니다".to_string(),
            });
        }

        Ok(Self {
            header,
            value: config.value,
        })
    }

    /// 요청이 AJAX 요청인지 검사합니다.
    fn is_ajax(&self, req: &Request) -> bool {
        req.headers()
            .get(&self.header)
            .and_then(|value| value.to_str().ok())
            .map(|value| value == self.value)
            .unwrap_or(false)
    }

    /// 406 Not Acceptable 응답을 생성합니다.
    fn not_acceptable_response(&self) -> Response {
        let body = serde_json::to_vec(&RejectionBody {
            status: "406",
            message: "Not Acceptable",
        })
        .unwrap();

        hyper::Response::builder()
            .status(StatusCode::NOT_ACCEPTABLE)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(body)))
            .unwrap()
    }
}

#[async_trait]
impl Middleware for AjaxOnlyMiddleware {
    fn name(&self) -> &str {
        "ajax-only"
    }

    async fn handle_request(&self, req: Request) -> Result<Request, MiddlewareError> {
        if self.is_ajax(&req) {
            Ok(req)
        } else {
            debug!(header = %self.header, "AJAX 요청이 아니므로 거부");
            Err(MiddlewareError::NotAcceptable(self.not_acceptable_response()))
        }
    }

    async fn handle_response(&self, res: Response) -> Result<Response, MiddlewareError> {
        Ok(res)
    }
}
