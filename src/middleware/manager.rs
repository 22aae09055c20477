use super::config::MiddlewareType;
use super::{Middleware, MiddlewareChain, MiddlewareConfig, MiddlewareError, Request, Response};
use crate::middleware::ajax_only::{AjaxOnlyConfig, AjaxOnlyMiddleware};
use crate::middleware::force_json::{ForceJsonConfig, ForceJsonMiddleware};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// 미들웨어 설정으로부터 미들웨어 인스턴스를 생성합니다.
fn create_middleware(config: &MiddlewareConfig) -> Result<Arc<dyn Middleware>, MiddlewareError> {
    debug!(
        "미들웨어 생성 시작: type={:?}, settings={:?}",
        config.middleware_type, config.settings
    );

    match config.middleware_type {
        MiddlewareType::AjaxOnly => {
            let ajax_config: AjaxOnlyConfig =
                serde_json::from_value(serde_json::to_value(&config.settings)?)?;
            Ok(Arc::new(AjaxOnlyMiddleware::new(ajax_config)?))
        }
        MiddlewareType::ForceJson => {
            let json_config: ForceJsonConfig =
                serde_json::from_value(serde_json::to_value(&config.settings)?)?;
            Ok(Arc::new(ForceJsonMiddleware::new(json_config)?))
        }
    }
}

/// 그룹별 미들웨어 체인을 관리합니다.
///
/// 활성화된 설정을 `(order, 이름)` 순으로 정렬해 그룹마다 하나의 체인을
/// 구성합니다. 생성에 실패한 미들웨어는 기록 후 건너뜁니다.
#[derive(Default, Clone)]
pub struct MiddlewareManager {
    chains: HashMap<String, MiddlewareChain>,
}

impl MiddlewareManager {
    pub fn new(middleware_configs: &HashMap<String, MiddlewareConfig>) -> Self {
        // 정렬을 위해 Vec으로 변환
        let mut ordered_configs: Vec<_> = middleware_configs
            .iter()
            .filter(|(_, config)| config.enabled)
            .collect();
        ordered_configs.sort_by_key(|(name, config)| (config.order, name.as_str()));

        // 미들웨어 생성 및 그룹별 체인에 추가
        let mut chains: HashMap<String, MiddlewareChain> = HashMap::new();
        for (name, config) in ordered_configs {
            match create_middleware(config) {
                Ok(middleware) => {
                    debug!(middleware = %name, group = %config.group, "미들웨어 등록");
                    chains
                        .entry(config.group.clone())
                        .or_default()
                        .add_shared(middleware);
                }
                Err(e) => {
                    error!("미들웨어 생성 실패: {} ({})", e, name);
                    continue;
                }
            }
        }

        for (group, chain) in &chains {
            debug!(group = %group, count = chain.len(), "미들웨어 체인 구성 완료");
        }

        Self { chains }
    }

    /// 그룹의 요청 체인을 실행합니다. 체인이 없는 그룹은 그대로 통과합니다.
    pub async fn handle_request(&self, group: &str, req: Request) -> Result<Request, MiddlewareError> {
        match self.chains.get(group) {
            Some(chain) => chain.handle_request(req).await,
            None => Ok(req),
        }
    }

    /// 그룹의 응답 체인을 실행합니다. 체인이 없는 그룹은 그대로 통과합니다.
    pub async fn handle_response(&self, group: &str, res: Response) -> Result<Response, MiddlewareError> {
        match self.chains.get(group) {
            Some(chain) => chain.handle_response(res).await,
            None => Ok(res),
        }
    }
}
