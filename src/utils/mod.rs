pub mod base64;
pub mod http_std;
pub mod url;

// Re-export common utilities
pub use http_std::{fetch_all, HttpFetcher, RuleFetcher};
