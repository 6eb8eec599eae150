use thiserror::Error;

/// Failure to turn one share link into a node
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed link `{line}`: {reason}")]
    LinkSyntax { line: String, reason: String },

    /// Not an error for batch callers: free-text input may contain non-link lines.
    #[error("unsupported link scheme: {0}")]
    UnsupportedScheme(String),
}

impl ParseError {
    pub fn syntax(line: &str, reason: impl Into<String>) -> Self {
        ParseError::LinkSyntax {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure to retrieve one remote rule source
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),
}

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("no nodes were parsed from the input")]
    NoNodesParsed,

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
