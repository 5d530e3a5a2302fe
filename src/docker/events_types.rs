use bollard::models::{EventMessage, EventMessageTypeEnum};

/// 재조정을 유발하는 컨테이너 라이프사이클 이벤트
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerEvent {
    pub container_id: String,
    pub action: String,
}

impl ContainerEvent {
    /// 구독 필터에 포함되는 액션
    pub const WATCHED_ACTIONS: [&'static str; 2] = ["start", "stop"];

    /// 컨테이너 타입 이벤트만 변환합니다.
    pub fn from_message(message: &EventMessage) -> Option<Self> {
        if message.typ != Some(EventMessageTypeEnum::CONTAINER) {
            return None;
        }

        let container_id = message.actor.as_ref()
            .and_then(|actor| actor.id.clone())
            .unwrap_or_else(|| "unknown".to_string());

        Some(Self {
            container_id,
            action: message.action.clone().unwrap_or_default(),
        })
    }
}
