//! JSON 강제 미들웨어
//!
//! 요청의 Accept 헤더를 덮어쓰고, JSON이 아닌 응답을
//! 본문을 보존한 JSON 응답으로 변환합니다.

mod config;
mod middleware;

pub use config::ForceJsonConfig;
pub use middleware::ForceJsonMiddleware;
