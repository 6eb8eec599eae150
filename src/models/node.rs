//! Node model definitions
//!
//! A node is one proxy endpoint parsed from a share link. Fields shared by
//! every kind live on [`Node`]; handshake and credential data lives on the
//! [`NodeKind`] variant, so no kind carries fields it does not use.

/// Display name used when a link carries no fragment.
pub const UNKNOWN_NODE_NAME: &str = "unknown";

/// Port assumed when a link authority has none.
pub const DEFAULT_NODE_PORT: u16 = 443;

/// Kind-specific payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// VLESS over REALITY TLS
    RealityTls {
        uuid: String,
        public_key: String,
        short_id: String,
        sni: String,
        fingerprint: String,
        flow: Option<String>,
    },
    /// Hysteria 2 over QUIC
    Hysteria2 {
        password: String,
        sni: String,
        insecure: bool,
        obfs: Option<String>,
        obfs_password: Option<String>,
    },
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::RealityTls { .. } => "RealityTLS",
            NodeKind::Hysteria2 { .. } => "Hysteria2",
        }
    }
}

/// One proxy endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Display name, used verbatim as a group member key
    pub name: String,
    pub server: String,
    pub port: u16,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(name: String, server: String, port: u16, kind: NodeKind) -> Self {
        Self {
            name,
            server,
            port,
            kind,
        }
    }
}
