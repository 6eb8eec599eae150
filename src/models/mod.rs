//! Core data models for the application
//!
//! This module contains the primary data structures used throughout the application,
//! separated from the logic that operates on them.
//!
//! # Usage
//!
//! ```rust
//! use link2clash::models::{resolve_mode, Node, NodeKind};
//!
//! let node = Node::new(
//!     "hk-01".to_string(),
//!     "example.com".to_string(),
//!     443,
//!     NodeKind::Hysteria2 {
//!         password: "secret".to_string(),
//!         sni: String::new(),
//!         insecure: false,
//!         obfs: None,
//!         obfs_password: None,
//!     },
//! );
//! assert_eq!(node.kind.as_str(), "Hysteria2");
//!
//! let mode = resolve_mode(6);
//! assert!(mode.mini);
//! ```

pub mod mode;
pub mod node;
pub mod proxy_group_config;
pub mod rule;

pub use mode::{resolve_mode, HealthCheck, ModeConfig, DEFAULT_MODE, MAX_MODE};
pub use node::{Node, NodeKind};
pub use proxy_group_config::{
    BalanceStrategy, HealthCheckParams, ProxyGroupConfig, ProxyGroupConfigs, ProxyGroupType,
};
pub use rule::{Matcher, RuleEntry};
