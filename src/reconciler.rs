//! 컨테이너 목록 → 라우팅 항목 → Caddyfile → 파일 비교/기록 → 리로드 알림
//!
//! 한 주기는 항상 처음부터 다시 계산합니다. 이전 주기에서 남기는 상태는
//! 디스크에 기록된 파일뿐입니다.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::caddyfile;
use crate::docker::{DockerClient, DockerError, ROUTABLE_STATUSES};
use crate::routing::{parse_container, RouteEntry};
use crate::settings::Settings;
use crate::watcher::Trigger;

/// 주기를 중단시키는 오류. 디스크의 이전 파일은 그대로 유지됩니다.
#[derive(Debug)]
pub enum ReconcileError {
    ListContainers(DockerError),
    WriteConfig {
        path: String,
        error: std::io::Error,
    },
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListContainers(e) => write!(f, "컨테이너 목록을 가져오지 못함: {}", e),
            Self::WriteConfig { path, error } => write!(f, "설정 파일 {} 기록 실패: {}", path, error),
        }
    }
}

impl std::error::Error for ReconcileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ListContainers(e) => Some(e),
            Self::WriteConfig { error, .. } => Some(error),
        }
    }
}

/// 성공한 주기의 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// 생성된 텍스트가 디스크 파일과 같음
    Unchanged,
    /// 파일을 새로 기록함. `notified`는 리로드 명령 전달 성공 여부
    Updated { notified: bool },
}

pub struct Reconciler {
    client: Arc<dyn DockerClient>,
    settings: Arc<Settings>,
    // 주기끼리 겹치지 않도록 전체 주기 동안 잡고 있는 잠금
    cycle_lock: Mutex<()>,
}

impl Reconciler {
    pub fn new(client: Arc<dyn DockerClient>, settings: Arc<Settings>) -> Self {
        Self {
            client,
            settings,
            cycle_lock: Mutex::new(()),
        }
    }

    /// 한 주기를 실행하고 결과를 로그로만 남깁니다.
    pub async fn reconcile(&self) {
        match self.run_cycle().await {
            Ok(CycleOutcome::Unchanged) => info!("변경 사항 없음, 리로드 알림 생략"),
            Ok(CycleOutcome::Updated { notified }) => {
                debug!(notified, "재조정 주기 완료");
            }
            Err(e) => error!(error = %e, "재조정 주기 중단"),
        }
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn run_cycle(&self) -> Result<CycleOutcome, ReconcileError> {
        let _guard = self.cycle_lock.lock().await;

        let entries = self.collect_entries().await?;
        let rendered = caddyfile::render(&entries, &self.settings.output.matcher_prefix);

        let path = &self.settings.output.path;
        let current = read_baseline(path).await;
        if current == rendered.as_bytes() {
            return Ok(CycleOutcome::Unchanged);
        }

        tokio::fs::write(path, rendered.as_bytes()).await.map_err(|e| ReconcileError::WriteConfig {
            path: path.display().to_string(),
            error: e,
        })?;
        info!(path = %path.display(), routes = entries.len(), "Caddy 설정 파일 기록");

        let notified = self.notify().await;
        Ok(CycleOutcome::Updated { notified })
    }

    async fn collect_entries(&self) -> Result<Vec<RouteEntry>, ReconcileError> {
        let network = &self.settings.docker.network;
        let containers = self.client.list_containers(network, &ROUTABLE_STATUSES).await
            .map_err(ReconcileError::ListContainers)?;

        let entries: Vec<RouteEntry> = containers.iter()
            .flat_map(|container| parse_container(container, &self.settings.output.label, network))
            .collect();

        debug!(containers = containers.len(), routes = entries.len(), "라우팅 항목 수집 완료");
        Ok(entries)
    }

    /// 리로드 명령을 한 번 전달합니다. 실패는 로그만 남기고 재시도하지 않습니다.
    async fn notify(&self) -> bool {
        let Some(notify) = &self.settings.notify else {
            return false;
        };

        info!(
            container = %notify.container_id,
            working_dir = %notify.working_dir,
            command = ?notify.command,
            "리로드 알림 전송"
        );

        match self.client.exec_detached(&notify.container_id, &notify.working_dir, &notify.command).await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, container = %notify.container_id, "리로드 알림 실패");
                false
            }
        }
    }
}

#[async_trait]
impl Trigger for Reconciler {
    async fn fire(&self) {
        self.reconcile().await;
    }
}

// 파일이 없거나 읽을 수 없으면 빈 기준선으로 취급
async fn read_baseline(path: &Path) -> Vec<u8> {
    match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "설정 파일 읽기 실패, 빈 파일로 간주");
            Vec::new()
        }
    }
}
