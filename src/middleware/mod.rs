//! HTTP 미들웨어 서브시스템
//!
//! 요청 단계와 응답 단계로 나뉜 미들웨어 체인을 제공합니다.
//! 요청은 등록 순서대로, 응답은 그 역순으로 처리됩니다.

pub mod ajax_only;
pub mod chain;
pub mod config;
pub mod error;
pub mod force_json;
pub mod manager;
pub mod response;
pub mod traits;

use bytes::Bytes;
use http_body_util::Full;

/// 미들웨어가 다루는 HTTP 요청 타입
pub type Request = hyper::Request<Full<Bytes>>;

/// 미들웨어가 다루는 HTTP 응답 타입
pub type Response = hyper::Response<Full<Bytes>>;

pub use ajax_only::{AjaxOnlyConfig, AjaxOnlyMiddleware};
pub use chain::MiddlewareChain;
pub use config::{MiddlewareConfig, MiddlewareType};
pub use error::MiddlewareError;
pub use force_json::{ForceJsonConfig, ForceJsonMiddleware};
pub use manager::MiddlewareManager;
pub use response::{handle_middleware_error, JsonResponseFactory, ResponseFactory, ResponseKind};
pub use traits::Middleware;
