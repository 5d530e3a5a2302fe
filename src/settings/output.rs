use serde::Deserialize;
use std::path::PathBuf;
use super::{SettingsError, parse_env_var};

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// 생성된 Caddyfile 경로
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// 라우팅 정보를 담은 컨테이너 라벨 키
    #[serde(default = "default_label")]
    pub label: String,

    /// `@<prefix>-<index>` 매처 이름 접두사
    #[serde(default = "default_matcher_prefix")]
    pub matcher_prefix: String,
}

impl OutputSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let settings = Self {
            path: PathBuf::from(parse_env_var::<String, _>("CADDY_GEN_OUTFILE", || {
                default_output_path().to_string_lossy().into_owned()
            })?),
            label: parse_env_var("CADDY_GEN_LABEL", default_label)?,
            matcher_prefix: parse_env_var("CADDY_GEN_MATCHER_PREFIX", default_matcher_prefix)?,
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.path.as_os_str().is_empty() {
            return Err(SettingsError::EnvVarInvalid {
                var_name: "CADDY_GEN_OUTFILE".to_string(),
                value: String::new(),
                reason: "출력 파일 경로는 비어있을 수 없습니다".to_string(),
            });
        }

        if self.label.trim().is_empty() {
            return Err(SettingsError::EnvVarInvalid {
                var_name: "CADDY_GEN_LABEL".to_string(),
                value: self.label.clone(),
                reason: "라벨 키는 비어있을 수 없습니다".to_string(),
            });
        }

        // Caddy 매처 이름에 쓰이므로 제한된 문자만 허용
        if self.matcher_prefix.is_empty()
            || !self.matcher_prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(SettingsError::EnvVarInvalid {
                var_name: "CADDY_GEN_MATCHER_PREFIX".to_string(),
                value: self.matcher_prefix.clone(),
                reason: "매처 접두사는 영숫자와 -_ 만 포함할 수 있습니다".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            label: default_label(),
            matcher_prefix: default_matcher_prefix(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("docker-sites.caddy")
}

fn default_label() -> String {
    "virtual.bind".to_string()
}

fn default_matcher_prefix() -> String {
    "caddy-gen".to_string()
}
