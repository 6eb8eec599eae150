use serde::{Deserialize, Serialize};

use crate::models::{Node, NodeKind, ProxyGroupConfig, ProxyGroupType};

fn is_empty_option_string(s: &Option<String>) -> bool {
    s.as_deref().map_or(true, str::is_empty)
}

/// Represents a complete Clash configuration output
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashYamlOutput {
    // General settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socks_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_lan: Option<bool>,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub external_controller: Option<String>,

    pub proxies: Vec<ClashProxy>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proxy_groups: Vec<ClashProxyGroup>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

impl ClashYamlOutput {
    /// Document carrying the fixed listener and controller settings
    pub fn with_runtime_settings() -> Self {
        Self {
            socks_port: Some(7891),
            allow_lan: Some(true),
            mode: Some("Rule".to_string()),
            log_level: Some("info".to_string()),
            external_controller: Some("127.0.0.1:9090".to_string()),
            ..Default::default()
        }
    }
}

/// Common proxy options that can be used across different proxy types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommonProxyOptions {
    pub name: String,
    pub server: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_cert_verify: Option<bool>,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub sni: Option<String>,
}

impl CommonProxyOptions {
    /// Create a builder for CommonProxyOptions
    pub fn builder(name: String, server: String, port: u16) -> CommonProxyOptionsBuilder {
        CommonProxyOptionsBuilder {
            common: Self {
                name,
                server,
                port,
                udp: None,
                tls: None,
                skip_cert_verify: None,
                sni: None,
            },
        }
    }
}

/// Builder for CommonProxyOptions
pub struct CommonProxyOptionsBuilder {
    common: CommonProxyOptions,
}

impl CommonProxyOptionsBuilder {
    pub fn udp(mut self, value: bool) -> Self {
        self.common.udp = Some(value);
        self
    }

    pub fn tls(mut self, value: bool) -> Self {
        self.common.tls = Some(value);
        self
    }

    pub fn skip_cert_verify(mut self, value: bool) -> Self {
        self.common.skip_cert_verify = Some(value);
        self
    }

    pub fn sni(mut self, value: String) -> Self {
        self.common.sni = Some(value);
        self
    }

    pub fn build(self) -> CommonProxyOptions {
        self.common
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RealityOpts {
    pub public_key: String,
    pub short_id: String,
}

/// Represents a single proxy in Clash configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClashProxy {
    #[serde(rename = "vless", rename_all = "kebab-case")]
    Vless {
        #[serde(flatten)]
        common: CommonProxyOptions,
        uuid: String,
        packet_encoding: String,
        servername: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        flow: Option<String>,
        reality_opts: RealityOpts,
        client_fingerprint: String,
    },
    #[serde(rename = "hysteria2", rename_all = "kebab-case")]
    Hysteria2 {
        #[serde(flatten)]
        common: CommonProxyOptions,
        password: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        obfs: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        obfs_password: Option<String>,
    },
}

impl From<&Node> for ClashProxy {
    fn from(node: &Node) -> Self {
        let builder =
            CommonProxyOptions::builder(node.name.clone(), node.server.clone(), node.port).udp(true);

        match &node.kind {
            NodeKind::RealityTls {
                uuid,
                public_key,
                short_id,
                sni,
                fingerprint,
                flow,
            } => ClashProxy::Vless {
                common: builder.tls(true).skip_cert_verify(true).build(),
                uuid: uuid.clone(),
                packet_encoding: "xudp".to_string(),
                servername: sni.clone(),
                flow: flow.clone(),
                reality_opts: RealityOpts {
                    public_key: public_key.clone(),
                    short_id: short_id.clone(),
                },
                client_fingerprint: fingerprint.clone(),
            },
            NodeKind::Hysteria2 {
                password,
                sni,
                insecure,
                obfs,
                obfs_password,
            } => ClashProxy::Hysteria2 {
                common: builder
                    .skip_cert_verify(*insecure)
                    .sni(sni.clone())
                    .build(),
                password: password.clone(),
                obfs: obfs.clone(),
                obfs_password: obfs_password.clone(),
            },
        }
    }
}

/// Represents a proxy group in Clash configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClashProxyGroup {
    #[serde(rename = "select")]
    Select { name: String, proxies: Vec<String> },
    #[serde(rename = "url-test")]
    UrlTest {
        name: String,
        url: String,
        interval: u32,
        tolerance: u32,
        proxies: Vec<String>,
    },
    #[serde(rename = "fallback")]
    Fallback {
        name: String,
        url: String,
        interval: u32,
        tolerance: u32,
        proxies: Vec<String>,
    },
    #[serde(rename = "load-balance")]
    LoadBalance {
        name: String,
        strategy: String,
        url: String,
        interval: u32,
        tolerance: u32,
        proxies: Vec<String>,
    },
}

impl From<&ProxyGroupConfig> for ClashProxyGroup {
    fn from(group: &ProxyGroupConfig) -> Self {
        let name = group.name.clone();
        let proxies = group.proxies.clone();
        match group.group_type {
            ProxyGroupType::Select => ClashProxyGroup::Select { name, proxies },
            ProxyGroupType::URLTest => ClashProxyGroup::UrlTest {
                name,
                url: group.url.clone(),
                interval: group.interval,
                tolerance: group.tolerance,
                proxies,
            },
            ProxyGroupType::Fallback => ClashProxyGroup::Fallback {
                name,
                url: group.url.clone(),
                interval: group.interval,
                tolerance: group.tolerance,
                proxies,
            },
            ProxyGroupType::LoadBalance => ClashProxyGroup::LoadBalance {
                name,
                strategy: group.strategy_str().to_string(),
                url: group.url.clone(),
                interval: group.interval,
                tolerance: group.tolerance,
                proxies,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthCheckParams;

    #[test]
    fn test_vless_serialization() {
        let node = Node::new(
            "MyNode".to_string(),
            "host".to_string(),
            443,
            NodeKind::RealityTls {
                uuid: "uuid".to_string(),
                public_key: "PK".to_string(),
                short_id: "SID".to_string(),
                sni: "s.com".to_string(),
                fingerprint: "chrome".to_string(),
                flow: None,
            },
        );
        let value = serde_yaml::to_value(ClashProxy::from(&node)).unwrap();

        assert_eq!(value["type"].as_str(), Some("vless"));
        assert_eq!(value["name"].as_str(), Some("MyNode"));
        assert_eq!(value["servername"].as_str(), Some("s.com"));
        assert_eq!(value["packet-encoding"].as_str(), Some("xudp"));
        assert_eq!(value["reality-opts"]["public-key"].as_str(), Some("PK"));
        assert_eq!(value["reality-opts"]["short-id"].as_str(), Some("SID"));
        assert_eq!(value["client-fingerprint"].as_str(), Some("chrome"));
        assert_eq!(value["skip-cert-verify"].as_bool(), Some(true));
        assert!(value.get("flow").is_none());
    }

    #[test]
    fn test_hysteria2_serialization() {
        let node = Node::new(
            "hy".to_string(),
            "h.com".to_string(),
            8443,
            NodeKind::Hysteria2 {
                password: "pw".to_string(),
                sni: String::new(),
                insecure: false,
                obfs: None,
                obfs_password: None,
            },
        );
        let value = serde_yaml::to_value(ClashProxy::from(&node)).unwrap();

        assert_eq!(value["type"].as_str(), Some("hysteria2"));
        assert_eq!(value["port"].as_u64(), Some(8443));
        assert_eq!(value["password"].as_str(), Some("pw"));
        assert_eq!(value["skip-cert-verify"].as_bool(), Some(false));
        assert!(value.get("sni").is_none());
        assert!(value.get("tls").is_none());
    }

    #[test]
    fn test_group_serialization() {
        let params = HealthCheckParams::default();
        let group = ProxyGroupConfig::checked(
            "lb",
            ProxyGroupType::LoadBalance,
            vec!["a".to_string()],
            &params,
        );
        let value = serde_yaml::to_value(ClashProxyGroup::from(&group)).unwrap();
        assert_eq!(value["type"].as_str(), Some("load-balance"));
        assert_eq!(value["strategy"].as_str(), Some("consistent-hashing"));
        assert_eq!(value["interval"].as_u64(), Some(300));

        let group = ProxyGroupConfig::select("s", vec!["DIRECT".to_string()]);
        let value = serde_yaml::to_value(ClashProxyGroup::from(&group)).unwrap();
        assert_eq!(value["type"].as_str(), Some("select"));
        assert!(value.get("url").is_none());
    }
}
