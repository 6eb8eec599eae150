use log::warn;
use url::Url;

use crate::error::ParseError;
use crate::models::node::UNKNOWN_NODE_NAME;
use crate::models::Node;
use crate::utils::base64::base64_decode;
use crate::utils::url::url_decode;

/// Explode one share link into a node
///
/// Detects the link kind by its scheme prefix and calls the matching parser.
/// Links of any other scheme fail with [`ParseError::UnsupportedScheme`].
pub fn explode(link: &str) -> Result<Node, ParseError> {
    let link = link.trim();
    let lower = link.to_ascii_lowercase();

    if lower.starts_with("vless://") {
        super::vless::explode_vless(link)
    } else if lower.starts_with("hy2://") || lower.starts_with("hysteria2://") {
        super::hysteria2::explode_hysteria2(link)
    } else {
        let scheme = link.split("://").next().unwrap_or_default();
        Err(ParseError::UnsupportedScheme(scheme.to_string()))
    }
}

/// Nodes and per-line failures collected from a batch of links
#[derive(Debug, Default)]
pub struct ParsedLinks {
    pub nodes: Vec<Node>,
    pub errors: Vec<ParseError>,
}

/// Explode every line of `content`
///
/// Blank lines and unsupported schemes are skipped silently. Malformed links
/// are logged and kept in `errors`; processing continues with the next line.
/// Content that is one Base64 blob (subscription format) is decoded first.
pub fn explode_sub(content: &str) -> ParsedLinks {
    let content = content.trim();
    let decoded = if !content.contains("://") {
        base64_decode(content)
    } else {
        None
    };
    let content = decoded.as_deref().unwrap_or(content);

    let mut parsed = ParsedLinks::default();
    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match explode(line) {
            Ok(node) => parsed.nodes.push(node),
            Err(ParseError::UnsupportedScheme(_)) => {}
            Err(e) => {
                warn!("Skipping link: {}", e);
                parsed.errors.push(e);
            }
        }
    }
    parsed
}

/// Host of a link with IPv6 brackets removed, `None` when empty
pub(crate) fn link_host(url: &Url) -> Option<String> {
    url.host_str()
        .map(|h| h.trim_start_matches('[').trim_end_matches(']'))
        .filter(|h| !h.is_empty())
        .map(str::to_string)
}

/// Percent-decoded fragment, or the placeholder name when absent
pub(crate) fn link_remark(url: &Url) -> String {
    match url.fragment().map(url_decode) {
        Some(name) if !name.is_empty() => name,
        _ => UNKNOWN_NODE_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeKind;

    #[test]
    fn test_explode_dispatch() {
        assert!(matches!(
            explode("VLESS://id@h.com:443#a").map(|n| n.kind),
            Ok(NodeKind::RealityTls { .. })
        ));
        assert!(matches!(
            explode("hysteria2://pw@h.com:443#a").map(|n| n.kind),
            Ok(NodeKind::Hysteria2 { .. })
        ));
        assert_eq!(
            explode("vmess://abc"),
            Err(ParseError::UnsupportedScheme("vmess".to_string()))
        );
    }

    #[test]
    fn test_explode_is_deterministic() {
        let link = "vless://uuid@host:443?sni=s.com&pbk=PK&sid=SID&fp=chrome#MyNode";
        assert_eq!(explode(link), explode(link));
    }

    #[test]
    fn test_explode_sub_skips_noise() {
        let parsed = explode_sub(
            "hello there\n\nvless://a@h1.com:443#one\nss://xyz\nvless://a@h2.com:bad#two\nhy2://p@h3.com#three\n",
        );
        let names: Vec<_> = parsed.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["one", "three"]);
        assert_eq!(parsed.errors.len(), 1);
    }

    #[test]
    fn test_explode_sub_base64() {
        // "vless://a@h.com:443#b64"
        let parsed = explode_sub("dmxlc3M6Ly9hQGguY29tOjQ0MyNiNjQ=");
        assert_eq!(parsed.nodes.len(), 1);
        assert_eq!(parsed.nodes[0].name, "b64");
    }
}
