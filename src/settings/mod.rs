use std::{env, fs, path::Path};
use serde::Deserialize;
use tracing::debug;

pub mod logging;
mod error;
mod docker;
mod notify;
mod output;
mod watcher;

pub use logging::{LogFormat, LogOutput, LogSettings};
pub use docker::DockerSettings;
pub use error::SettingsError;
pub use notify::NotifySettings;
pub use output::OutputSettings;
pub use watcher::WatcherSettings;

pub type Result<T> = std::result::Result<T, SettingsError>;

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_FILE_ENV: &str = "CADDY_GEN_CONFIG_FILE";

/// 시작 시 한 번 만들어지고 이후 변경되지 않는 프로세스 설정
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub docker: DockerSettings,

    #[serde(default)]
    pub output: OutputSettings,

    /// 리로드 알림 설정. 없으면 파일만 갱신합니다.
    #[serde(default)]
    pub notify: Option<NotifySettings>,

    #[serde(default)]
    pub watcher: WatcherSettings,

    #[serde(default)]
    pub logging: LogSettings,
}

impl Settings {
    pub fn load() -> Result<Self> {
        if let Ok(config_path) = env::var(CONFIG_FILE_ENV) {
            Self::from_toml_file(&config_path)
        } else {
            Self::from_env()
        }
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|e| SettingsError::FileError {
            path: path.as_ref().to_string_lossy().to_string(),
            error: e,
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::ParseError { source: e })?;

        debug!(path = %path.as_ref().display(), "설정 파일 로드");
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_env() -> Result<Self> {
        let settings = Self {
            docker: DockerSettings::from_env()?,
            output: OutputSettings::from_env()?,
            notify: NotifySettings::from_env()?,
            watcher: WatcherSettings::from_env()?,
            logging: LogSettings::from_env()?,
        };

        settings.validate()?;
        Ok(settings)
    }

    /// 설정 유효성 검증
    pub fn validate(&self) -> Result<()> {
        self.docker.validate()?;
        self.output.validate()?;
        self.watcher.validate()?;
        if let Some(notify) = &self.notify {
            notify.validate()?;
        }
        Ok(())
    }
}

pub fn parse_env_var<T: std::str::FromStr, F: FnOnce() -> T>(name: &str, default: F) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val.parse().map_err(|e: T::Err| SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: val,
            reason: e.to_string(),
        }),
        Err(env::VarError::NotPresent) => Ok(default()),
        Err(e) => Err(SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: "".to_string(),
            reason: e.to_string(),
        }),
    }
}
