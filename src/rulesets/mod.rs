pub mod catalog;

pub use catalog::{RuleSource, RULE_SOURCES};
