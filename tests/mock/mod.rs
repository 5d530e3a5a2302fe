#![allow(dead_code)]

use async_trait::async_trait;
use caddy_gen::docker::{ContainerEvent, ContainerView, DockerClient, DockerError};
use caddy_gen::settings::{NotifySettings, Settings};
use futures_util::stream::{self, BoxStream, StreamExt};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub const NETWORK: &str = "gateway";

// Mock Docker Client
#[derive(Default)]
pub struct MockDockerClient {
    pub containers: Mutex<Vec<ContainerView>>,
    pub fail_list: AtomicBool,
    pub fail_exec: AtomicBool,
    pub list_calls: AtomicUsize,
    pub exec_calls: Mutex<Vec<(String, String, Vec<String>)>>,
    pub subscriptions: AtomicUsize,
    // 구독마다 하나씩 꺼내 쓰는 이벤트 묶음. 비어있으면 끝나지 않는 스트림
    pub event_batches: Mutex<VecDeque<Vec<Result<ContainerEvent, DockerError>>>>,
}

impl MockDockerClient {
    pub fn with_containers(containers: Vec<ContainerView>) -> Self {
        Self {
            containers: Mutex::new(containers),
            ..Default::default()
        }
    }

    pub fn push_events(&self, batch: Vec<Result<ContainerEvent, DockerError>>) {
        self.event_batches.lock().unwrap().push_back(batch);
    }

    pub fn exec_count(&self) -> usize {
        self.exec_calls.lock().unwrap().len()
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DockerClient for MockDockerClient {
    async fn list_containers(&self, network: &str, statuses: &[&str])
        -> Result<Vec<ContainerView>, DockerError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(network, NETWORK);
        assert_eq!(statuses, &["created", "restarting", "running"]);

        if self.fail_list.load(Ordering::SeqCst) {
            return Err(DockerError::ListContainersError {
                source: io_error("daemon unavailable"),
                context: "mock".to_string(),
            });
        }
        Ok(self.containers.lock().unwrap().clone())
    }

    fn events(&self) -> BoxStream<'static, Result<ContainerEvent, DockerError>> {
        self.subscriptions.fetch_add(1, Ordering::SeqCst);
        match self.event_batches.lock().unwrap().pop_front() {
            Some(batch) => stream::iter(batch).boxed(),
            None => stream::pending::<Result<ContainerEvent, DockerError>>().boxed(),
        }
    }

    async fn exec_detached(&self, container_id: &str, working_dir: &str, command: &[String])
        -> Result<(), DockerError> {
        self.exec_calls.lock().unwrap().push((
            container_id.to_string(),
            working_dir.to_string(),
            command.to_vec(),
        ));

        if self.fail_exec.load(Ordering::SeqCst) {
            return Err(DockerError::ExecError {
                container_id: container_id.to_string(),
                source: io_error("no such container"),
                context: "mock".to_string(),
            });
        }
        Ok(())
    }
}

pub fn io_error(message: &str) -> bollard::errors::Error {
    bollard::errors::Error::IOError {
        err: std::io::Error::new(std::io::ErrorKind::Other, message.to_string()),
    }
}

pub fn container(name: &str, bind: &str, ip: &str) -> ContainerView {
    let mut view = ContainerView {
        id: format!("{}-id", name.trim_start_matches('/')),
        name: name.to_string(),
        ..Default::default()
    };
    view.labels.insert("virtual.bind".to_string(), bind.to_string());
    view.networks.insert(NETWORK.to_string(), ip.to_string());
    view
}

pub fn event(action: &str) -> Result<ContainerEvent, DockerError> {
    Ok(ContainerEvent {
        container_id: "abc123".to_string(),
        action: action.to_string(),
    })
}

pub fn test_settings(output: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.docker.network = NETWORK.to_string();
    settings.output.path = output.to_path_buf();
    settings.notify = Some(NotifySettings {
        container_id: "caddy".to_string(),
        working_dir: "/etc/caddy".to_string(),
        command: vec!["caddy".to_string(), "reload".to_string()],
    });
    settings
}
