//! 컨테이너 라우팅 라벨 파서
//!
//! 라벨 형식: `[/path] <port> <host>... [| directive]...`, 바인딩은 `;`로 구분합니다.
//!
//! ```
//! use caddy_gen::docker::ContainerView;
//! use caddy_gen::routing::parse_container;
//!
//! let mut container = ContainerView { name: "/web".to_string(), ..Default::default() };
//! container.labels.insert("virtual.bind".to_string(), "/api 8080 api.example.com | host:tls internal".to_string());
//! container.networks.insert("gateway".to_string(), "172.17.0.5".to_string());
//!
//! let entries = parse_container(&container, "virtual.bind", "gateway");
//! assert_eq!(entries[0].path_matcher, "/api");
//! assert_eq!(entries[0].host_directives, vec!["tls internal"]);
//! assert_eq!(entries[0].upstream(), "172.17.0.5:8080");
//! ```

use tracing::{debug, warn};

use super::{BindError, RouteEntry};
use crate::docker::ContainerView;

const BINDING_SEPARATOR: char = ';';
const DIRECTIVE_SEPARATOR: char = '|';
const HOST_DIRECTIVE_PREFIX: &str = "host:";

/// 컨테이너 하나의 라우팅 라벨을 항목 목록으로 변환합니다.
///
/// 라벨이 없거나 비어있으면 빈 목록을 돌려줍니다. 잘못된 바인딩은 로그를 남기고
/// 건너뛰며 나머지 바인딩 처리에는 영향을 주지 않습니다.
pub fn parse_container(container: &ContainerView, label: &str, network: &str) -> Vec<RouteEntry> {
    let raw = match container.label(label).map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Vec::new(),
    };

    let mut entries = Vec::new();
    for binding in raw.split(BINDING_SEPARATOR).map(str::trim).filter(|b| !b.is_empty()) {
        match parse_binding(binding, container, network) {
            Ok(entry) => {
                debug!(
                    container = %entry.display_name,
                    hosts = %entry.group_key(),
                    port = entry.port,
                    "바인딩 파싱 완료"
                );
                entries.push(entry);
            }
            Err(e) => {
                warn!(
                    container = %container.display_name(),
                    error = %e,
                    "바인딩 파싱 실패, 건너뜀"
                );
            }
        }
    }

    entries
}

/// 바인딩 하나(`bind | directive | ...`)를 파싱합니다.
pub fn parse_binding(binding: &str, container: &ContainerView, network: &str) -> Result<RouteEntry, BindError> {
    let mut clauses = binding.split(DIRECTIVE_SEPARATOR);
    let bind = clauses.next().unwrap_or_default().trim();

    let mut tokens: Vec<&str> = bind.split_whitespace().collect();
    let path_matcher = if bind.starts_with('/') {
        tokens.remove(0).to_string()
    } else {
        String::new()
    };

    let (port, hostnames) = match tokens.split_first() {
        Some((port, hostnames)) if !hostnames.is_empty() => (*port, hostnames),
        _ => return Err(BindError::InvalidFormat { bind: bind.to_string() }),
    };
    let port = parse_port(bind, port)?;

    let (host_directives, proxy_directives) = split_directives(clauses);

    Ok(RouteEntry {
        hostnames: hostnames.iter().map(|h| h.to_string()).collect(),
        port,
        path_matcher,
        display_name: container.display_name().to_string(),
        host_directives,
        proxy_directives,
        target_address: container.address_on(network).to_string(),
    })
}

fn parse_port(bind: &str, port: &str) -> Result<u16, BindError> {
    match port.parse::<u16>() {
        Ok(0) => Err(BindError::InvalidPort {
            bind: bind.to_string(),
            port: port.to_string(),
            reason: None,
        }),
        Ok(port) => Ok(port),
        Err(e) => Err(BindError::InvalidPort {
            bind: bind.to_string(),
            port: port.to_string(),
            reason: Some(e),
        }),
    }
}

// host: 접두사가 붙은 지시어는 handle 블록, 나머지는 reverse_proxy 블록
fn split_directives<'a>(clauses: impl Iterator<Item = &'a str>) -> (Vec<String>, Vec<String>) {
    let mut host_directives = Vec::new();
    let mut proxy_directives = Vec::new();

    // 빈 절도 빈 문자열로 그대로 추가
    for directive in clauses.map(str::trim) {
        match directive.strip_prefix(HOST_DIRECTIVE_PREFIX) {
            Some(rest) => host_directives.push(rest.trim().to_string()),
            None => proxy_directives.push(directive.to_string()),
        }
    }

    (host_directives, proxy_directives)
}
