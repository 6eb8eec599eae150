pub mod common;
pub mod hysteria2;
pub mod vless;

pub use common::{explode, explode_sub, ParsedLinks};
