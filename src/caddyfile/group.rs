use std::collections::HashMap;

use crate::routing::RouteEntry;

/// 호스트 이름 목록이 정확히 같은 항목들의 묶음
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup<'a> {
    /// 공백으로 이은 호스트 이름 (순서 구분)
    pub key: String,
    pub entries: Vec<&'a RouteEntry>,
}

/// 항목을 호스트 키로 묶습니다. 그룹 순서는 처음 등장한 순서이며
/// 같은 입력에 대해 항상 같습니다.
pub fn group_entries(entries: &[RouteEntry]) -> Vec<RouteGroup<'_>> {
    let mut groups: Vec<RouteGroup<'_>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let key = entry.group_key();
        match index.get(&key) {
            Some(&position) => groups[position].entries.push(entry),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(RouteGroup { key, entries: vec![entry] });
            }
        }
    }

    groups
}
