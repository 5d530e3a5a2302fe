use bollard::models::ContainerSummary;
use std::collections::HashMap;

/// 재조정 주기마다 새로 조회되는 컨테이너의 읽기 전용 뷰
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerView {
    pub id: String,
    /// Docker가 돌려주는 이름 그대로 (`/web` 형태)
    pub name: String,
    pub labels: HashMap<String, String>,
    /// 네트워크 이름 -> IP 주소
    pub networks: HashMap<String, String>,
}

impl ContainerView {
    /// 선행 `/`를 제거한 표시용 이름
    pub fn display_name(&self) -> &str {
        self.name.strip_prefix('/').unwrap_or(&self.name)
    }

    /// 지정된 네트워크의 IP 주소. 연결되어 있지 않으면 빈 문자열입니다.
    pub fn address_on(&self, network: &str) -> &str {
        self.networks.get(network).map(String::as_str).unwrap_or("")
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

impl From<&ContainerSummary> for ContainerView {
    fn from(container: &ContainerSummary) -> Self {
        let id = container.id.clone().unwrap_or_else(|| "unknown".to_string());

        let name = container.names.as_ref()
            .and_then(|names| names.first().cloned())
            .unwrap_or_else(|| id.clone());

        let networks = container.network_settings.as_ref()
            .and_then(|settings| settings.networks.as_ref())
            .map(|networks| {
                networks.iter()
                    .map(|(network, endpoint)| {
                        (network.clone(), endpoint.ip_address.clone().unwrap_or_default())
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id,
            name,
            labels: container.labels.clone().unwrap_or_default(),
            networks,
        }
    }
}
