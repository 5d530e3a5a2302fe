use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use super::Debouncer;
use crate::docker::{DockerClient, DockerError};

/// Docker 이벤트를 구독하고 디바운스된 재조정을 트리거합니다.
pub struct EventWatcher {
    client: Arc<dyn DockerClient>,
    debouncer: Debouncer,
    reconnect_backoff: Duration,
}

impl EventWatcher {
    pub fn new(client: Arc<dyn DockerClient>, debouncer: Debouncer, reconnect_backoff: Duration) -> Self {
        Self {
            client,
            debouncer,
            reconnect_backoff,
        }
    }

    /// 종료 토큰이 취소될 때까지 구독을 유지합니다.
    ///
    /// 스트림 오류나 종료 시 `reconnect_backoff`만큼 기다린 뒤 다시 구독하며
    /// 재시도 횟수에는 제한이 없습니다.
    pub async fn run(&self, shutdown: CancellationToken) {
        info!("Docker 이벤트 대기 중...");

        loop {
            let error = tokio::select! {
                _ = shutdown.cancelled() => break,
                error = self.consume_stream() => error,
            };

            error!(
                error = %error,
                backoff_secs = self.reconnect_backoff.as_secs(),
                "이벤트 수신 오류, 재구독 예정"
            );

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = sleep(self.reconnect_backoff) => {}
            }
        }

        self.debouncer.cancel().await;
        info!("이벤트 감시 종료");
    }

    // 스트림이 끝나거나 오류가 날 때까지 이벤트를 소비
    async fn consume_stream(&self) -> DockerError {
        let mut events = self.client.events();

        while let Some(next) = events.next().await {
            match next {
                Ok(event) => {
                    debug!(
                        container_id = %event.container_id,
                        action = %event.action,
                        "컨테이너 이벤트 수신"
                    );
                    self.debouncer.call().await;
                }
                Err(e) => return e,
            }
        }

        DockerError::stream_closed()
    }
}
