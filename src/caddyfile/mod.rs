//! 라우팅 항목을 Caddyfile 조각으로 직렬화합니다.
//!
//! 호스트 그룹마다 `@<prefix>-<n> host ...` 매처와 `handle` 블록을 하나씩 만들고,
//! 그룹 사이는 빈 줄 하나로 구분합니다.

mod group;
mod renderer;

pub use group::{group_entries, RouteGroup};
pub use renderer::render;
