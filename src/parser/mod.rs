pub mod explodes;
pub mod ruleset;

pub use explodes::{explode, explode_sub, ParsedLinks};
pub use ruleset::{normalize_rules, ExclusionSet};
