pub mod config;
pub mod yaml;

// Re-export the compilation entry points
pub use config::group::generate_groups;
pub use config::subexport::{compile, compile_document, generate_rules, ruleset_bindings};
