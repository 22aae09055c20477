use serde::{Deserialize, Serialize};

/// AJAX 전용 미들웨어 설정
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AjaxOnlyConfig {
    /// 검사할 요청 헤더 이름
    #[serde(default = "default_header")]
    pub header: String,

    /// 기대하는 헤더 값 (정확히 일치해야 통과)
    #[serde(default = "default_value")]
    pub value: String,
}

fn default_header() -> String {
    "x-requested-with".to_string()
}

fn default_value() -> String {
    "XMLHttpRequest".to_string()
}

impl Default for AjaxOnlyConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            value: default_value(),
        }
    }
}
