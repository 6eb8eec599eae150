use url::Url;

use super::common::{link_host, link_remark};
use crate::error::ParseError;
use crate::models::node::DEFAULT_NODE_PORT;
use crate::models::{Node, NodeKind};
use crate::utils::url::{get_url_arg, get_url_arg_opt, url_decode};

/// Parse a `vless://` REALITY link into a node
///
/// Format: `vless://<uuid>@<host>:<port>?sni=..&pbk=..&sid=..&fp=..[&flow=..]#<name>`
pub fn explode_vless(vless: &str) -> Result<Node, ParseError> {
    let url = Url::parse(vless).map_err(|e| ParseError::syntax(vless, e.to_string()))?;

    let host = link_host(&url).ok_or_else(|| ParseError::syntax(vless, "missing host"))?;
    let port = url.port().unwrap_or(DEFAULT_NODE_PORT);

    let kind = NodeKind::RealityTls {
        uuid: url_decode(url.username()),
        public_key: get_url_arg(&url, "pbk"),
        short_id: get_url_arg(&url, "sid"),
        sni: get_url_arg(&url, "sni"),
        fingerprint: get_url_arg(&url, "fp"),
        flow: get_url_arg_opt(&url, "flow"),
    };

    Ok(Node::new(link_remark(&url), host, port, kind))
}
