use serde::Deserialize;
use std::env;
use super::SettingsError;

/// 설정 파일이 바뀐 뒤 프록시 컨테이너에서 실행할 리로드 명령
///
/// 환경 변수로는 `{"containerId": "caddy", "workingDir": "/etc/caddy", "command": ["caddy", "reload"]}`
/// 형태의 JSON을 받습니다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotifySettings {
    #[serde(alias = "containerId")]
    pub container_id: String,

    #[serde(default, alias = "workingDir")]
    pub working_dir: String,

    pub command: Vec<String>,
}

impl NotifySettings {
    /// `CADDY_GEN_NOTIFY`가 없거나 비어있으면 알림을 사용하지 않습니다.
    pub fn from_env() -> Result<Option<Self>, SettingsError> {
        match env::var("CADDY_GEN_NOTIFY") {
            Ok(raw) => Self::parse(&raw),
            Err(_) => Ok(None),
        }
    }

    pub fn parse(raw: &str) -> Result<Option<Self>, SettingsError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }

        let settings: Self = serde_json::from_str(raw).map_err(|e| SettingsError::NotifyParseError {
            value: raw.to_string(),
            source: e,
        })?;

        settings.validate()?;
        Ok(Some(settings))
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.container_id.trim().is_empty() {
            return Err(SettingsError::InvalidConfig(
                "리로드 알림 대상 컨테이너가 비어있습니다".to_string(),
            ));
        }
        if self.command.is_empty() {
            return Err(SettingsError::InvalidConfig(
                "리로드 알림 명령이 비어있습니다".to_string(),
            ));
        }
        Ok(())
    }
}
