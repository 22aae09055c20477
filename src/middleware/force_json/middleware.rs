use super::config::ForceJsonConfig;
use crate::middleware::response::{JsonResponseFactory, ResponseFactory, ResponseKind};
use crate::middleware::{Middleware, MiddlewareError, Request, Response};
use async_trait::async_trait;
use http_body_util::BodyExt;
use hyper::header::{self, HeaderValue};
use std::sync::Arc;
use tracing::{debug, instrument};

/// JSON 강제 미들웨어
///
/// 요청 단계에서는 Accept 헤더를 설정된 미디어 타입으로 덮어쓰고,
/// 응답 단계에서는 JSON이 아닌 응답을 주입된 생성기로 다시 감쌉니다.
/// 본문 바이트는 검증 없이 그대로 옮겨집니다.
pub struct ForceJsonMiddleware {
    accept: HeaderValue,
    factory: Arc<dyn ResponseFactory>,
}

impl ForceJsonMiddleware {
    pub fn new(config: ForceJsonConfig) -> Result<Self, MiddlewareError> {
        Self::with_factory(config, Arc::new(JsonResponseFactory))
    }

    /// 응답 생성기를 직접 주입하여 생성합니다.
    pub fn with_factory(
        config: ForceJsonConfig,
        factory: Arc<dyn ResponseFactory>,
    ) -> Result<Self, MiddlewareError> {
        let accept = HeaderValue::from_str(&config.accept).map_err(|e| {
            MiddlewareError::Config {
                middleware: "force-json".to_string(),
                message: format!("잘못된 미디어 타입 '{}': {}", config.accept, e),
            }
        })?;

        Ok(Self { accept, factory })
    }
}

#[async_trait]
impl Middleware for ForceJsonMiddleware {
    fn name(&self) -> &str {
        "force-json"
    }

    #[instrument(skip(self, req))]
    async fn handle_request(&self, mut req: Request) -> Result<Request, MiddlewareError> {
        // 기존 값과 무관하게 덮어쓴다
        req.headers_mut().insert(header::ACCEPT, self.accept.clone());
        Ok(req)
    }

    #[instrument(skip(self, res))]
    async fn handle_response(&self, res: Response) -> Result<Response, MiddlewareError> {
        if ResponseKind::of(&res).is_json() {
            return Ok(res);
        }

        debug!(status = %res.status(), "JSON이 아닌 응답을 변환");
        let (parts, body) = res.into_parts();
        let body = body
            .collect()
            .await
            .map(|collected| collected.to_bytes())
            .unwrap_or_default();

        Ok(self.factory.json(body, parts.status, parts.headers))
    }
}
