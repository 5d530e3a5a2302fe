use serde::Deserialize;
use std::env;
use super::{SettingsError, parse_env_var};
pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Clone, Deserialize)]
pub struct DockerSettings {
    /// 감시할 Docker 네트워크 이름
    #[serde(default = "default_docker_network")]
    pub network: String,

    /// Docker 유닉스 소켓 경로. 없으면 로컬 기본값으로 연결합니다.
    #[serde(default)]
    pub socket: Option<String>,
}

impl DockerSettings {
    pub fn from_env() -> Result<Self> {
        let network = parse_env_var("CADDY_GEN_NETWORK", default_docker_network)?;
        let socket = env::var("CADDY_GEN_DOCKER_SOCKET").ok()
            .filter(|s| !s.trim().is_empty());

        let settings = Self { network, socket };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.network.trim().is_empty() {
            return Err(SettingsError::EnvVarInvalid {
                var_name: "CADDY_GEN_NETWORK".to_string(),
                value: self.network.clone(),
                reason: "네트워크 이름은 비어있을 수 없습니다".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for DockerSettings {
    fn default() -> Self {
        Self {
            network: default_docker_network(),
            socket: None,
        }
    }
}

fn default_docker_network() -> String {
    "gateway".to_string()
}
