//! Remote rule-list catalog
//!
//! Fixed set of ACL4SSR Clash lists. Names are the keys of the map returned
//! by [`crate::utils::http_std::fetch_all`].

const ACL4SSR_BASE: &str = "https://raw.githubusercontent.com/ACL4SSR/ACL4SSR/master/Clash/";

/// One externally hosted rule list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSource {
    pub name: &'static str,
    path: &'static str,
}

impl RuleSource {
    const fn new(name: &'static str, path: &'static str) -> Self {
        Self { name, path }
    }

    pub fn url(&self) -> String {
        format!("{}{}", ACL4SSR_BASE, self.path)
    }
}

pub const LAN: RuleSource = RuleSource::new("LocalAreaNetwork", "LocalAreaNetwork.list");
pub const BAN_AD: RuleSource = RuleSource::new("BanAD", "BanAD.list");
pub const BAN_PROGRAM_AD: RuleSource = RuleSource::new("BanProgramAD", "BanProgramAD.list");
pub const CHINA_DOMAIN: RuleSource = RuleSource::new("ChinaDomain", "ChinaDomain.list");
pub const CHINA_IP: RuleSource = RuleSource::new("ChinaIp", "ChinaIp.list");
pub const PROXY_LITE: RuleSource = RuleSource::new("ProxyLite", "ProxyLite.list");
pub const APPLE: RuleSource = RuleSource::new("Apple", "Apple.list");
pub const MICROSOFT: RuleSource = RuleSource::new("Microsoft", "Microsoft.list");
pub const GOOGLE: RuleSource = RuleSource::new("GoogleCN", "GoogleCN.list");
pub const TELEGRAM: RuleSource = RuleSource::new("Telegram", "Telegram.list");
pub const NETFLIX: RuleSource = RuleSource::new("Netflix", "Netflix.list");
pub const MEDIA: RuleSource = RuleSource::new("ProxyMedia", "ProxyMedia.list");
pub const STEAM_CN: RuleSource = RuleSource::new("SteamCN", "Ruleset/SteamCN.list");
pub const GAMES: RuleSource = RuleSource::new("ProxyGFWlist", "ProxyGFWlist.list");
pub const ONEDRIVE: RuleSource = RuleSource::new("OneDrive", "OneDrive.list");

/// Every source, fetched together before normalization.
pub const RULE_SOURCES: [RuleSource; 15] = [
    LAN,
    BAN_AD,
    BAN_PROGRAM_AD,
    CHINA_DOMAIN,
    CHINA_IP,
    PROXY_LITE,
    APPLE,
    MICROSOFT,
    GOOGLE,
    TELEGRAM,
    NETFLIX,
    MEDIA,
    STEAM_CN,
    GAMES,
    ONEDRIVE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = RULE_SOURCES.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), RULE_SOURCES.len());
    }

    #[test]
    fn test_url() {
        assert_eq!(
            STEAM_CN.url(),
            "https://raw.githubusercontent.com/ACL4SSR/ACL4SSR/master/Clash/Ruleset/SteamCN.list"
        );
    }
}
