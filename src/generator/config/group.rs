//! Group generation utilities
//!
//! Builds the ordered policy groups for one run: primary selection,
//! health-check groups, optional region groups, feature groups, then the
//! ad-block, direct and catch-all groups.

use log::debug;

use super::region::bucket_nodes;
use crate::models::proxy_group_config::*;
use crate::models::{HealthCheck, HealthCheckParams, ModeConfig, Node};

/// Feature groups present in every non-compact mode
const FEATURE_GROUPS: [&str; 7] = [
    TELEGRAM_GROUP,
    YOUTUBE_GROUP,
    NETFLIX_GROUP,
    MEDIA_GROUP,
    MICROSOFT_GROUP,
    GOOGLE_GROUP,
    APPLE_GROUP,
];

/// Feature groups added by the `full` modes
const FULL_FEATURE_GROUPS: [&str; 3] = [GAMES_GROUP, ONEDRIVE_GROUP, STEAM_GROUP];

/// Health-check group names and types for a discipline, primary first
fn health_check_groups(discipline: HealthCheck) -> Vec<(&'static str, ProxyGroupType)> {
    match discipline {
        HealthCheck::LatencyRace => vec![(AUTO_GROUP, ProxyGroupType::URLTest)],
        HealthCheck::ManualSelect => vec![(AUTO_GROUP, ProxyGroupType::Select)],
        HealthCheck::Failover => vec![(AUTO_GROUP, ProxyGroupType::Fallback)],
        HealthCheck::Combined => vec![
            (AUTO_GROUP, ProxyGroupType::URLTest),
            (FALLBACK_GROUP, ProxyGroupType::Fallback),
            (LOAD_BALANCE_GROUP, ProxyGroupType::LoadBalance),
        ],
    }
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Generate every policy group for `nodes` under `mode`
pub fn generate_groups(
    nodes: &[Node],
    mode: &ModeConfig,
    params: &HealthCheckParams,
) -> ProxyGroupConfigs {
    let node_names: Vec<String> = nodes.iter().map(|n| n.name.clone()).collect();
    let checks = health_check_groups(mode.health_check);
    let regions = if mode.country_groups {
        bucket_nodes(nodes)
    } else {
        Vec::new()
    };
    for (region, members) in &regions {
        debug!("Region {}: {} node(s)", region.code(), members.len());
    }

    let mut groups = ProxyGroupConfigs::new();

    let mut primary: Vec<String> = checks.iter().map(|(name, _)| name.to_string()).collect();
    primary.extend(regions.iter().map(|(r, _)| r.group_name().to_string()));
    primary.extend(node_names.iter().cloned());
    groups.push(ProxyGroupConfig::select(PROXY_GROUP, primary));

    for (name, group_type) in &checks {
        groups.push(ProxyGroupConfig::checked(
            name,
            *group_type,
            node_names.clone(),
            params,
        ));
    }

    for (region, members) in regions {
        groups.push(ProxyGroupConfig::checked(
            region.group_name(),
            ProxyGroupType::URLTest,
            members,
            params,
        ));
    }

    if !mode.mini {
        let feature_members = names(&[PROXY_GROUP, AUTO_GROUP, DIRECT_GROUP]);
        let extra: &[&str] = if mode.full { &FULL_FEATURE_GROUPS } else { &[] };
        for name in FEATURE_GROUPS.iter().chain(extra) {
            groups.push(ProxyGroupConfig::select(name, feature_members.clone()));
        }
    }

    if !mode.no_reject {
        groups.push(ProxyGroupConfig::select(
            REJECT_GROUP,
            names(&[REJECT, DIRECT]),
        ));
    }
    groups.push(ProxyGroupConfig::select(
        DIRECT_GROUP,
        names(&[DIRECT, PROXY_GROUP]),
    ));
    groups.push(ProxyGroupConfig::select(
        FINAL_GROUP,
        names(&[PROXY_GROUP, DIRECT]),
    ));

    groups
}
