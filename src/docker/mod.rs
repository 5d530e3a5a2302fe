mod events_types;
mod error_types;
pub mod client;
pub mod container;

pub use events_types::ContainerEvent;
pub use error_types::DockerError;
pub use client::{BollardDockerClient, DockerClient};
pub use container::ContainerView;

/// 라우팅 대상이 되는 컨테이너 상태
pub const ROUTABLE_STATUSES: [&str; 3] = ["created", "restarting", "running"];
