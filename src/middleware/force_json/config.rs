use serde::{Deserialize, Serialize};

/// JSON 강제 미들웨어 설정
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ForceJsonConfig {
    /// 요청의 Accept 헤더에 기록할 미디어 타입
    #[serde(default = "default_accept")]
    pub accept: String,
}

fn default_accept() -> String {
    "application/json".to_string()
}

impl Default for ForceJsonConfig {
    fn default() -> Self {
        Self {
            accept: default_accept(),
        }
    }
}
