/// 컨테이너 라벨의 바인딩 하나에서 만들어진 라우팅 항목
///
/// `hostnames`는 항상 비어있지 않습니다. 호스트 이름이 없는 바인딩은
/// 파서에서 거부되어 항목이 생성되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// 라벨에 적힌 순서 그대로의 호스트 이름 (순서가 그룹 키에 영향)
    pub hostnames: Vec<String>,
    pub port: u16,
    /// 빈 문자열이면 모든 경로와 매칭
    pub path_matcher: String,
    pub display_name: String,
    /// `handle` 블록 범위에 들어가는 지시어
    pub host_directives: Vec<String>,
    /// `reverse_proxy` 블록 안에 그대로 들어가는 지시어
    pub proxy_directives: Vec<String>,
    /// 감시 네트워크의 컨테이너 IP. 연결되어 있지 않으면 빈 문자열
    pub target_address: String,
}

impl RouteEntry {
    /// 그룹핑 키: 호스트 이름을 공백 하나로 이은 문자열
    pub fn group_key(&self) -> String {
        self.hostnames.join(" ")
    }

    /// `reverse_proxy` 블록의 `to` 대상
    pub fn upstream(&self) -> String {
        format!("{}:{}", self.target_address, self.port)
    }
}
