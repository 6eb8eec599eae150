pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod rulesets;
pub mod settings;
pub mod utils;

// Re-export the main types for easier access
pub use error::{CompileError, FetchError, ParseError, SettingsError};
pub use generator::{compile, compile_document};
pub use models::{resolve_mode, ModeConfig, Node, NodeKind};
pub use parser::{explode, explode_sub};
pub use settings::Settings;
