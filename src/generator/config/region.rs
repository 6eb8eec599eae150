//! Region bucketing by node display name
//!
//! A keyword heuristic: names without a known keyword land in `Other`
//! whatever the node's real location.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    HongKong,
    Taiwan,
    Japan,
    Singapore,
    UnitedStates,
    Other,
}

/// Fixed bucket order used for group membership and group output
pub const REGION_ORDER: [Region; 6] = [
    Region::HongKong,
    Region::Taiwan,
    Region::Japan,
    Region::Singapore,
    Region::UnitedStates,
    Region::Other,
];

impl Region {
    pub fn code(&self) -> &'static str {
        match self {
            Region::HongKong => "HK",
            Region::Taiwan => "TW",
            Region::Japan => "JP",
            Region::Singapore => "SG",
            Region::UnitedStates => "US",
            Region::Other => "Other",
        }
    }

    /// Name of the latency-race group holding this bucket
    pub fn group_name(&self) -> &'static str {
        match self {
            Region::HongKong => "🇭🇰 香港节点",
            Region::Taiwan => "🇹🇼 台湾节点",
            Region::Japan => "🇯🇵 日本节点",
            Region::Singapore => "🇸🇬 新加坡节点",
            Region::UnitedStates => "🇺🇸 美国节点",
            Region::Other => "🏳️‍🌈 其他地区",
        }
    }
}

lazy_static! {
    static ref REGION_KEYWORDS: Vec<(Region, Regex)> = [
        (Region::HongKong, r"(?i)(HK|Hong|Kong|香港|🇭🇰)"),
        (Region::Taiwan, r"(?i)(TW|Taiwan|台湾|🇹🇼)"),
        (Region::Japan, r"(?i)(JP|Japan|日本|🇯🇵)"),
        (Region::Singapore, r"(?i)(SG|Singapore|新加坡|🦁|🇸🇬)"),
        (Region::UnitedStates, r"(?i)(US|America|States|美国|🇺🇸)"),
    ]
    .into_iter()
    .map(|(region, pattern)| (region, Regex::new(pattern).unwrap()))
    .collect();
}

/// First region whose keywords appear in `name`
pub fn classify(name: &str) -> Region {
    REGION_KEYWORDS
        .iter()
        .find(|(_, re)| re.is_match(name))
        .map(|(region, _)| *region)
        .unwrap_or(Region::Other)
}

/// Node names per region in [`REGION_ORDER`], input order within a bucket,
/// empty buckets left out
pub fn bucket_nodes(nodes: &[Node]) -> Vec<(Region, Vec<String>)> {
    let regions: Vec<Region> = nodes.iter().map(|n| classify(&n.name)).collect();
    REGION_ORDER
        .iter()
        .map(|region| {
            let names = nodes
                .iter()
                .zip(&regions)
                .filter(|(_, r)| *r == region)
                .map(|(n, _)| n.name.clone())
                .collect::<Vec<_>>();
            (*region, names)
        })
        .filter(|(_, names)| !names.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("🇭🇰 01"), Region::HongKong);
        assert_eq!(classify("hong kong premium"), Region::HongKong);
        assert_eq!(classify("台湾 BGP"), Region::Taiwan);
        assert_eq!(classify("tokyo-jp"), Region::Japan);
        assert_eq!(classify("🦁 lion city"), Region::Singapore);
        assert_eq!(classify("United States"), Region::UnitedStates);
        assert_eq!(classify("frankfurt"), Region::Other);
    }

    #[test]
    fn test_first_match_wins() {
        // matches both HK and US; HK is checked first
        assert_eq!(classify("HK-US relay"), Region::HongKong);
    }
}
