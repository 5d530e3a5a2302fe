use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use super::Trigger;

/// 이벤트가 몰려올 때 마지막 이벤트 이후 `delay` 동안 조용하면 한 번만 실행합니다.
///
/// 살아있는 타이머는 항상 하나이며 새 이벤트가 오면 이전 타이머를 취소하고
/// 다시 겁니다. 타이머가 만료되면 트리거는 별도 태스크에서 실행되므로
/// 이후의 재무장이 실행 중인 트리거를 취소하지 않습니다.
pub struct Debouncer {
    delay: Duration,
    target: Arc<dyn Trigger>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration, target: Arc<dyn Trigger>) -> Self {
        Self {
            delay,
            target,
            pending: Mutex::new(None),
        }
    }

    /// 타이머를 (재)무장합니다.
    pub async fn call(&self) {
        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let target = Arc::clone(&self.target);
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            debug!(delay_ms = delay.as_millis() as u64, "디바운스 만료, 트리거 실행");
            tokio::spawn(async move { target.fire().await });
        }));
    }

    /// 무장된 타이머가 있으면 취소합니다. 이미 시작된 트리거는 건드리지 않습니다.
    pub async fn cancel(&self) {
        if let Some(previous) = self.pending.lock().await.take() {
            previous.abort();
        }
    }
}
