use super::Response;

#[derive(Debug, thiserror::Error)]
pub enum MiddlewareError {
    #[error("미들웨어 {middleware} 설정 오류: {message}")]
    Config {
        middleware: String,
        message: String,
    },

    #[error("잘못된 형식: {0}")]
    InvalidFormat(String),

    /// 의도된 단락 응답. 체인을 중단하고 담긴 응답을 그대로 반환합니다.
    #[error("허용되지 않는 요청")]
    NotAcceptable(Response),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
