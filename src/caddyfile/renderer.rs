use super::group::{group_entries, RouteGroup};
use crate::routing::RouteEntry;

const INDENT: &str = "  ";
const GROUP_SEPARATOR: &str = "\n\n";

/// 라우팅 항목 전체를 Caddyfile 텍스트로 변환합니다.
///
/// 같은 입력에는 항상 바이트 단위로 같은 출력을 냅니다. 항목이 없으면 빈 문자열입니다.
pub fn render(entries: &[RouteEntry], matcher_prefix: &str) -> String {
    group_entries(entries)
        .iter()
        .enumerate()
        .map(|(index, group)| render_group(group, &format!("@{}-{}", matcher_prefix, index)))
        .collect::<Vec<_>>()
        .join(GROUP_SEPARATOR)
}

fn render_group(group: &RouteGroup<'_>, matcher: &str) -> String {
    let mut lines = vec![
        format!("{} host {}", matcher, group.key),
        format!("handle {} {{", matcher),
    ];

    for directive in group.entries.iter().flat_map(|entry| &entry.host_directives) {
        lines.push(format!("{INDENT}{directive}"));
    }

    for entry in &group.entries {
        push_reverse_proxy(&mut lines, entry);
    }

    lines.push("}".to_string());
    lines.join("\n")
}

fn push_reverse_proxy(lines: &mut Vec<String>, entry: &RouteEntry) {
    lines.push(format!("{INDENT}# {}", entry.display_name));

    if entry.path_matcher.is_empty() {
        // 경로가 없으면 공백 하나만 둠 (`reverse_proxy  {`와 Caddy 해석은 같음)
        lines.push(format!("{INDENT}reverse_proxy {{"));
    } else {
        lines.push(format!("{INDENT}reverse_proxy {} {{", entry.path_matcher));
    }

    for directive in &entry.proxy_directives {
        lines.push(format!("{INDENT}{INDENT}{directive}"));
    }

    lines.push(format!("{INDENT}{INDENT}to {}", entry.upstream()));
    lines.push(format!("{INDENT}}}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(hostnames: &[&str], port: u16, path: &str, name: &str) -> RouteEntry {
        RouteEntry {
            hostnames: hostnames.iter().map(|h| h.to_string()).collect(),
            port,
            path_matcher: path.to_string(),
            display_name: name.to_string(),
            host_directives: Vec::new(),
            proxy_directives: Vec::new(),
            target_address: "172.17.0.5".to_string(),
        }
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(render(&[], "caddy-gen"), "");
    }

    #[test]
    fn test_two_groups() {
        let plain = entry(&["example.com"], 80, "", "web");
        let mut api = entry(&["api.example.com"], 8080, "/api", "web");
        api.host_directives.push("tls internal".to_string());

        let expected = "\
@caddy-gen-0 host example.com
handle @caddy-gen-0 {
  # web
  reverse_proxy {
    to 172.17.0.5:80
  }
}

@caddy-gen-1 host api.example.com
handle @caddy-gen-1 {
  tls internal
  # web
  reverse_proxy /api {
    to 172.17.0.5:8080
  }
}";

        assert_eq!(render(&[plain, api], "caddy-gen"), expected);
    }

    #[test]
    fn test_group_collects_directives_of_every_entry() {
        let mut first = entry(&["a.com", "b.com"], 80, "", "one");
        first.host_directives.push("encode gzip".to_string());
        first.proxy_directives.push(r#"header_up Host "upstream""#.to_string());

        let mut second = entry(&["a.com", "b.com"], 9000, "/ws", "two");
        second.host_directives.push("tls internal".to_string());
        second.target_address = String::new();

        let expected = "\
@gen-0 host a.com b.com
handle @gen-0 {
  encode gzip
  tls internal
  # one
  reverse_proxy {
    header_up Host \"upstream\"
    to 172.17.0.5:80
  }
  # two
  reverse_proxy /ws {
    to :9000
  }
}";

        assert_eq!(render(&[first, second], "gen"), expected);
    }

    #[test]
    fn test_empty_directives_render_as_indent_only_lines() {
        let mut web = entry(&["example.com"], 80, "", "web");
        web.host_directives.push(String::new());
        web.proxy_directives.push(String::new());

        let expected = "@caddy-gen-0 host example.com\nhandle @caddy-gen-0 {\n  \n  # web\n  reverse_proxy {\n    \n    to 172.17.0.5:80\n  }\n}";
        assert_eq!(render(&[web], "caddy-gen"), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let entries: Vec<RouteEntry> = (0..20)
            .map(|i| entry(&[&format!("host{}.example.com", i % 7)], 8000 + i, "", "svc"))
            .collect();

        let first = render(&entries, "caddy-gen");
        for _ in 0..10 {
            assert_eq!(render(&entries, "caddy-gen"), first);
        }
        assert!(first.starts_with("@caddy-gen-0 host host0.example.com\n"));
        assert!(!first.ends_with('\n'));
    }
}
