mod entry;
mod error;
pub mod parser;

pub use entry::RouteEntry;
pub use error::BindError;
pub use parser::{parse_binding, parse_container};
