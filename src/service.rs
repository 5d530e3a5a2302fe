use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::docker::DockerClient;
use crate::reconciler::Reconciler;
use crate::settings::Settings;
use crate::watcher::{Debouncer, EventWatcher};

/// 초기 재조정과 이벤트 감시 루프를 묶은 서비스
pub struct Service {
    reconciler: Arc<Reconciler>,
    watcher: EventWatcher,
}

impl Service {
    pub fn new(client: Arc<dyn DockerClient>, settings: Arc<Settings>) -> Self {
        let reconciler = Arc::new(Reconciler::new(Arc::clone(&client), Arc::clone(&settings)));
        let debouncer = Debouncer::new(settings.watcher.debounce(), reconciler.clone());
        let watcher = EventWatcher::new(client, debouncer, settings.watcher.reconnect_backoff());

        Self { reconciler, watcher }
    }

    /// 시작 시 한 번 재조정한 뒤 종료 토큰이 취소될 때까지 이벤트를 감시합니다.
    pub async fn run(&self, shutdown: CancellationToken) {
        info!("초기 설정 확인");
        self.reconciler.reconcile().await;

        self.watcher.run(shutdown).await;
    }
}
