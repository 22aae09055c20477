use super::{Middleware, MiddlewareError, Request, Response};
use std::sync::Arc;
use tracing::debug;

/// 미들웨어 체인
///
/// 요청은 등록 순서대로, 응답은 그 역순으로 통과시킵니다.
/// 첫 번째 에러에서 해당 단계를 중단합니다.
#[derive(Default, Clone)]
pub struct MiddlewareChain {
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    pub fn add<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Arc::new(middleware));
    }

    pub fn add_shared(&mut self, middleware: Arc<dyn Middleware>) {
        self.middlewares.push(middleware);
    }

    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }

    pub async fn handle_request(&self, mut request: Request) -> Result<Request, MiddlewareError> {
        for middleware in &self.middlewares {
            debug!(middleware = %middleware.name(), "요청 미들웨어 실행");
            request = middleware.handle_request(request).await?;
        }
        Ok(request)
    }

    pub async fn handle_response(&self, mut response: Response) -> Result<Response, MiddlewareError> {
        // 응답은 역순으로 처리
        for middleware in self.middlewares.iter().rev() {
            debug!(middleware = %middleware.name(), "응답 미들웨어 실행");
            response = middleware.handle_response(response).await?;
        }
        Ok(response)
    }
}
