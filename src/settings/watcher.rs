use serde::Deserialize;
use std::time::Duration;
use super::{SettingsError, parse_env_var};

#[derive(Debug, Clone, Deserialize)]
pub struct WatcherSettings {
    /// 마지막 이벤트 이후 재조정까지 기다리는 시간 (밀리초)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// 이벤트 스트림 오류 후 재구독까지 대기 시간 (초)
    #[serde(default = "default_reconnect_secs")]
    pub reconnect_secs: u64,
}

impl WatcherSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let settings = Self {
            debounce_ms: parse_env_var("CADDY_GEN_DEBOUNCE_MS", default_debounce_ms)?,
            reconnect_secs: parse_env_var("CADDY_GEN_RECONNECT_SECS", default_reconnect_secs)?,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.debounce_ms == 0 {
            return Err(SettingsError::EnvVarInvalid {
                var_name: "CADDY_GEN_DEBOUNCE_MS".to_string(),
                value: self.debounce_ms.to_string(),
                reason: "디바운스 간격은 0보다 커야 합니다".to_string(),
            });
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn reconnect_backoff(&self) -> Duration {
        Duration::from_secs(self.reconnect_secs)
    }
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            reconnect_secs: default_reconnect_secs(),
        }
    }
}

fn default_debounce_ms() -> u64 { 1000 }
fn default_reconnect_secs() -> u64 { 5 }
