// src/docker/client.rs
use async_trait::async_trait;
use bollard::container::ListContainersOptions;
use bollard::exec::{CreateExecOptions, StartExecOptions};
use bollard::system::EventsOptions;
use bollard::{Docker, API_DEFAULT_VERSION};
use futures_util::stream::{BoxStream, StreamExt};
use std::collections::HashMap;
use tracing::{debug, info};

use super::{ContainerEvent, ContainerView, DockerError};
use crate::settings::DockerSettings;

/// Docker 소켓 요청 타임아웃 (초)
const SOCKET_TIMEOUT_SECS: u64 = 120;

/// 재조정 엔진이 사용하는 컨테이너 런타임 계약
#[async_trait]
pub trait DockerClient: Send + Sync {
    /// 네트워크와 상태로 필터링된 컨테이너 목록
    async fn list_containers(&self, network: &str, statuses: &[&str])
        -> Result<Vec<ContainerView>, DockerError>;

    /// 컨테이너 start/stop 이벤트 스트림. 에러 이후 다시 호출해 재구독합니다.
    fn events(&self) -> BoxStream<'static, Result<ContainerEvent, DockerError>>;

    /// 출력을 받지 않고 컨테이너 내부에서 명령을 실행합니다.
    async fn exec_detached(&self, container_id: &str, working_dir: &str, command: &[String])
        -> Result<(), DockerError>;
}

// 실제 Docker 클라이언트 구현
#[derive(Clone)]
pub struct BollardDockerClient(Docker);

impl BollardDockerClient {
    pub fn connect(settings: &DockerSettings) -> Result<Self, DockerError> {
        let docker = match &settings.socket {
            Some(path) => {
                info!(socket = %path, "Docker 소켓에 연결");
                Docker::connect_with_unix(path, SOCKET_TIMEOUT_SECS, API_DEFAULT_VERSION)
            }
            None => Docker::connect_with_local_defaults(),
        }
        .map_err(|e| DockerError::ConnectionError {
            source: e,
            context: "Docker 클라이언트 생성".to_string(),
        })?;

        Ok(Self(docker))
    }

    fn list_filters(network: &str, statuses: &[&str]) -> HashMap<String, Vec<String>> {
        let mut filters = HashMap::new();
        filters.insert("network".to_string(), vec![network.to_string()]);
        filters.insert(
            "status".to_string(),
            statuses.iter().map(|s| s.to_string()).collect(),
        );
        filters
    }

    fn event_filters() -> HashMap<String, Vec<String>> {
        let mut filters = HashMap::new();
        filters.insert("type".to_string(), vec!["container".to_string()]);
        filters.insert(
            "event".to_string(),
            ContainerEvent::WATCHED_ACTIONS.iter().map(|s| s.to_string()).collect(),
        );
        filters
    }
}

#[async_trait]
impl DockerClient for BollardDockerClient {
    async fn list_containers(&self, network: &str, statuses: &[&str])
        -> Result<Vec<ContainerView>, DockerError> {
        let options = Some(ListContainersOptions::<String> {
            all: true,
            filters: Self::list_filters(network, statuses),
            ..Default::default()
        });

        let containers = self.0.list_containers(options).await
            .map_err(|e| DockerError::ListContainersError {
                source: e,
                context: format!("네트워크 {} 컨테이너 조회", network),
            })?;

        debug!(count = containers.len(), network = %network, "컨테이너 목록 조회 성공");
        Ok(containers.iter().map(ContainerView::from).collect())
    }

    fn events(&self) -> BoxStream<'static, Result<ContainerEvent, DockerError>> {
        let options = EventsOptions::<String> {
            filters: Self::event_filters(),
            ..Default::default()
        };

        self.0.events(Some(options))
            .filter_map(|result| async move {
                match result {
                    Ok(message) => ContainerEvent::from_message(&message).map(Ok),
                    Err(e) => Some(Err(DockerError::EventStreamError {
                        source: Some(e),
                        context: "Docker 이벤트 구독".to_string(),
                    })),
                }
            })
            .boxed()
    }

    async fn exec_detached(&self, container_id: &str, working_dir: &str, command: &[String])
        -> Result<(), DockerError> {
        let exec_error = |source, context: &str| DockerError::ExecError {
            container_id: container_id.to_string(),
            source,
            context: context.to_string(),
        };

        let config = CreateExecOptions::<String> {
            cmd: Some(command.to_vec()),
            working_dir: (!working_dir.is_empty()).then(|| working_dir.to_string()),
            attach_stdout: Some(false),
            attach_stderr: Some(false),
            ..Default::default()
        };

        let exec = self.0.create_exec(container_id, config).await
            .map_err(|e| exec_error(e, "exec 생성"))?;

        self.0.start_exec(&exec.id, Some(StartExecOptions { detach: true, ..Default::default() }))
            .await
            .map_err(|e| exec_error(e, "exec 시작"))?;

        Ok(())
    }
}
