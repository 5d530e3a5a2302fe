use std::fmt;
use std::num::ParseIntError;

/// 단일 바인딩 파싱 오류. 해당 바인딩만 건너뜁니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// 포트와 호스트 이름 쌍이 없음
    InvalidFormat {
        bind: String,
    },
    /// 포트가 양의 정수가 아님
    InvalidPort {
        bind: String,
        port: String,
        reason: Option<ParseIntError>,
    },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::InvalidFormat { bind } =>
                write!(f, "invalid bind format: {}", bind),
            BindError::InvalidPort { bind, port, reason: Some(reason) } =>
                write!(f, "invalid port {} in binding {}: {}", port, bind, reason),
            BindError::InvalidPort { bind, port, reason: None } =>
                write!(f, "invalid port {} in binding {}: port must be positive", port, bind),
        }
    }
}

impl std::error::Error for BindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BindError::InvalidPort { reason: Some(reason), .. } => Some(reason),
            _ => None,
        }
    }
}
