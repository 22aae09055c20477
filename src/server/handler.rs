use crate::middleware::{handle_middleware_error, MiddlewareManager};
use async_trait::async_trait;
use http_body_util::BodyExt;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

/// 미들웨어 체인 뒤에서 실제 응답을 만드는 핸들러 인터페이스
#[async_trait]
pub trait ApiHandler: Send + Sync {
    async fn handle(&self, req: Request<Full<Bytes>>) -> Response<Full<Bytes>>;
}

/// 요청 파이프라인
///
/// 요청 미들웨어 체인 → 다운스트림 핸들러 → 응답 미들웨어 체인 순으로
/// 실행하고, 체인 에러는 HTTP 응답으로 변환합니다.
pub struct RequestHandler {
    group: String,
    middleware_manager: MiddlewareManager,
    api_handler: Arc<dyn ApiHandler>,
}

impl RequestHandler {
    pub fn new(
        group: String,
        middleware_manager: MiddlewareManager,
        api_handler: Arc<dyn ApiHandler>,
    ) -> Self {
        Self {
            group,
            middleware_manager,
            api_handler,
        }
    }

    pub async fn handle_request(
        &self,
        req: Request<Full<Bytes>>,
    ) -> Result<Response<Full<Bytes>>, std::convert::Infallible> {
        let request_id = Uuid::new_v4();
        debug!(
            request_id = %request_id,
            method = %req.method(),
            path = %req.uri().path(),
            "요청 수신"
        );

        // 1. 요청 미들웨어 처리
        debug!(request_id = %request_id, group = %self.group, "요청 미들웨어 처리 시작");
        let req = match self.middleware_manager.handle_request(&self.group, req).await {
            Ok(req) => req,
            Err(e) => {
                error!(request_id = %request_id, error = %e, "요청 미들웨어 처리 실패");
                return Ok(handle_middleware_error(e));
            }
        };

        // 2. 다운스트림 핸들러 호출
        let response = self.api_handler.handle(req).await;

        // 3. 응답 미들웨어 처리
        debug!(request_id = %request_id, group = %self.group, "응답 미들웨어 처리 시작");
        match self.middleware_manager.handle_response(&self.group, response).await {
            Ok(response) => {
                debug!(
                    request_id = %request_id,
                    status = %response.status(),
                    "응답 미들웨어 처리 완료"
                );
                Ok(response)
            }
            Err(e) => {
                error!(request_id = %request_id, error = %e, "응답 미들웨어 처리 실패");
                Ok(handle_middleware_error(e))
            }
        }
    }

    /// 수신 본문을 버퍼링한 뒤 파이프라인에 넘깁니다.
    async fn handle_incoming(
        &self,
        req: Request<Incoming>,
    ) -> Result<Response<Full<Bytes>>, std::convert::Infallible> {
        let (parts, body) = req.into_parts();
        let body = match body.collect().await {
            Ok(collected) => Full::new(collected.to_bytes()),
            Err(e) => {
                error!(error = %e, "요청 본문 수신 실패");
                return Ok(Self::bad_request_response());
            }
        };

        self.handle_request(Request::from_parts(parts, body)).await
    }

    fn bad_request_response() -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(Bytes::from("Bad Request")));
        *response.status_mut() = StatusCode::BAD_REQUEST;
        response
    }

    pub async fn handle_connection<I>(&self, io: I) -> super::Result<()>
    where
        I: hyper::rt::Read + hyper::rt::Write + Send + Unpin + 'static,
    {
        http1::Builder::new()
            .serve_connection(io, service_fn(|req| self.handle_incoming(req)))
            .await
            .map_err(|e| e.into())
    }
}
