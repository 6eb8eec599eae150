//! Settings module
//!
//! Run settings loaded from a YAML or TOML file. The listener block of the
//! generated document and the rule-source catalog are not configurable.

pub mod settings_struct;

pub use settings_struct::Settings;
