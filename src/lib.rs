//! caddy_gen은 Docker 컨테이너 라벨로부터 Caddy 리버스 프록시 설정을 생성합니다.
//!
//! # 동작
//!
//! - 감시 네트워크의 컨테이너에서 `virtual.bind` 라벨을 읽어 라우팅 항목을 만듭니다.
//! - 항목을 호스트별로 묶어 Caddyfile 조각으로 렌더링합니다.
//! - 파일 내용이 바뀐 경우에만 기록하고 Caddy 컨테이너에 리로드 명령을 보냅니다.
//! - 컨테이너 start/stop 이벤트를 디바운스해 다시 재조정합니다.
//!
//! # 예제
//!
//! ```
//! use caddy_gen::caddyfile::render;
//! use caddy_gen::docker::ContainerView;
//! use caddy_gen::routing::parse_container;
//!
//! let mut web = ContainerView { name: "/web".to_string(), ..Default::default() };
//! web.labels.insert("virtual.bind".to_string(), "80 example.com".to_string());
//! web.networks.insert("gateway".to_string(), "172.17.0.5".to_string());
//!
//! let entries = parse_container(&web, "virtual.bind", "gateway");
//! let config = render(&entries, "caddy-gen");
//! assert!(config.starts_with("@caddy-gen-0 host example.com\n"));
//! assert!(config.contains("    to 172.17.0.5:80\n"));
//! ```

pub mod caddyfile;
pub mod docker;
pub mod logging;
pub mod reconciler;
pub mod routing;
pub mod service;
pub mod settings;
pub mod signals;
pub mod watcher;
