use std::fmt;

#[derive(Debug)]
pub enum DockerError {
    /// Docker 데몬 연결 실패
    ConnectionError {
        source: bollard::errors::Error,
        context: String,
    },
    /// 컨테이너 목록 조회 실패
    ListContainersError {
        source: bollard::errors::Error,
        context: String,
    },
    /// 이벤트 스트림 오류 (스트림 종료 포함)
    EventStreamError {
        source: Option<bollard::errors::Error>,
        context: String,
    },
    /// 컨테이너 내부 명령 실행 실패
    ExecError {
        container_id: String,
        source: bollard::errors::Error,
        context: String,
    },
}

impl DockerError {
    /// 이벤트 스트림이 에러 없이 닫힌 경우
    pub fn stream_closed() -> Self {
        DockerError::EventStreamError {
            source: None,
            context: "이벤트 스트림이 종료됨".to_string(),
        }
    }
}

impl fmt::Display for DockerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DockerError::ConnectionError { source, context } =>
                write!(f, "Docker 데몬 연결 실패 ({}): {}", context, source),
            DockerError::ListContainersError { source, context } =>
                write!(f, "컨테이너 목록 조회 실패 ({}): {}", context, source),
            DockerError::EventStreamError { source: Some(source), context } =>
                write!(f, "이벤트 스트림 오류 ({}): {}", context, source),
            DockerError::EventStreamError { source: None, context } =>
                write!(f, "이벤트 스트림 오류: {}", context),
            DockerError::ExecError { container_id, source, context } =>
                write!(f, "컨테이너 {} 명령 실행 실패 ({}): {}", container_id, context, source),
        }
    }
}

impl std::error::Error for DockerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DockerError::ConnectionError { source, .. }
            | DockerError::ListContainersError { source, .. }
            | DockerError::ExecError { source, .. } => Some(source),
            DockerError::EventStreamError { source, .. } => {
                source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
            }
        }
    }
}
