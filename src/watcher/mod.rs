mod debounce;
mod events;

pub use debounce::Debouncer;
pub use events::EventWatcher;

use async_trait::async_trait;

/// 디바운서가 만료될 때 실행하는 작업
#[async_trait]
pub trait Trigger: Send + Sync + 'static {
    async fn fire(&self);
}
