//! AJAX 전용 미들웨어
//!
//! XMLHttpRequest 표시가 없는 요청을 406 응답으로 거부합니다.

mod config;
mod middleware;

pub use config::AjaxOnlyConfig;
pub use middleware::AjaxOnlyMiddleware;
