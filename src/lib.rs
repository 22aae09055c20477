//! AJAX 전용 JSON API를 위한 HTTP 미들웨어 라이브러리입니다.
//!
//! # 주요 기능
//!
//! - AJAX 검증 (`ajax-only`): XMLHttpRequest 표시가 없는 요청을 406으로 거부
//! - JSON 강제 (`force-json`): Accept 헤더 덮어쓰기, 비 JSON 응답을 JSON 응답으로 변환
//! - 설정 기반 미들웨어 체인 구성 및 그룹별 적용
//!
//! # 예제
//!
//! ```
//! use ajax_json_api::middleware::{MiddlewareConfig, MiddlewareManager};
//!
//! let toml = r#"
//!     [middlewares.gate]
//!     middleware_type = "ajax-only"
//!     order = 0
//!
//!     [middlewares.to-json]
//!     middleware_type = "force-json"
//!     order = 1
//! "#;
//!
//! let configs = MiddlewareConfig::from_toml(toml).unwrap();
//! let manager = MiddlewareManager::new(&configs);
//! # let _ = manager;
//! ```
//!
//! # 응답 분류
//!
//! ```
//! use ajax_json_api::middleware::ResponseKind;
//!
//! assert!(ResponseKind::from_content_type("application/json; charset=utf-8").is_json());
//! assert!(ResponseKind::from_content_type("application/problem+json").is_json());
//! assert!(!ResponseKind::from_content_type("text/html").is_json());
//! ```

pub mod logging;
pub mod middleware;
pub mod server;
