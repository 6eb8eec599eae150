//! Generation modes
//!
//! A mode is chosen by a small integer and resolved through a fixed table.
//! The table stays declarative; the one cross-cutting rule (compact modes
//! route Netflix and Google traffic to the primary selection group) is
//! applied once in [`resolve_mode`].

use super::proxy_group_config::{GOOGLE_GROUP, NETFLIX_GROUP, PROXY_GROUP};

/// Mode used for blank or out-of-range selections.
pub const DEFAULT_MODE: i64 = 6;

/// Highest valid selection.
pub const MAX_MODE: i64 = 18;

/// How the health-check groups are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthCheck {
    /// One `url-test` group
    LatencyRace,
    /// One `select` group
    ManualSelect,
    /// One `fallback` group
    Failover,
    /// `url-test`, `fallback` and `load-balance` groups side by side
    Combined,
}

/// Feature flags for one compilation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeConfig {
    pub label: &'static str,
    /// Emit the node list only
    pub provider_only: bool,
    pub mini: bool,
    pub full: bool,
    pub no_reject: bool,
    pub adblock_plus: bool,
    pub health_check: HealthCheck,
    pub country_groups: bool,
    pub target_netflix: String,
    pub target_google: String,
}

struct ModeRow {
    id: i64,
    label: &'static str,
    provider_only: bool,
    mini: bool,
    full: bool,
    no_reject: bool,
    adblock_plus: bool,
    health_check: HealthCheck,
    country_groups: bool,
}

const fn row(id: i64, label: &'static str) -> ModeRow {
    ModeRow {
        id,
        label,
        provider_only: false,
        mini: false,
        full: false,
        no_reject: false,
        adblock_plus: false,
        health_check: HealthCheck::LatencyRace,
        country_groups: false,
    }
}

const fn mini(r: ModeRow) -> ModeRow {
    ModeRow { mini: true, ..r }
}

const fn full(r: ModeRow) -> ModeRow {
    ModeRow { full: true, ..r }
}

const fn adblock_plus(r: ModeRow) -> ModeRow {
    ModeRow {
        adblock_plus: true,
        ..r
    }
}

const fn countries(r: ModeRow) -> ModeRow {
    ModeRow {
        country_groups: true,
        ..r
    }
}

const fn check(r: ModeRow, health_check: HealthCheck) -> ModeRow {
    ModeRow { health_check, ..r }
}

static MODE_TABLE: [ModeRow; 18] = [
    row(1, "ACL4SSR_Online"),
    adblock_plus(row(2, "ACL4SSR_Online_AdblockPlus")),
    countries(row(3, "ACL4SSR_Online_MultiCountry")),
    check(row(4, "ACL4SSR_Online_NoAuto"), HealthCheck::ManualSelect),
    ModeRow {
        no_reject: true,
        ..row(5, "ACL4SSR_Online_NoReject")
    },
    mini(row(6, "ACL4SSR_Online_Mini")),
    mini(adblock_plus(row(7, "ACL4SSR_Online_Mini_AdblockPlus"))),
    mini(check(
        row(8, "ACL4SSR_Online_Mini_NoAuto"),
        HealthCheck::ManualSelect,
    )),
    mini(check(
        row(9, "ACL4SSR_Online_Mini_Fallback"),
        HealthCheck::Failover,
    )),
    mini(check(
        row(10, "ACL4SSR_Online_Mini_MultiMode"),
        HealthCheck::Combined,
    )),
    mini(countries(row(11, "ACL4SSR_Online_Mini_MultiCountry"))),
    full(row(12, "ACL4SSR_Online_Full")),
    full(check(
        row(13, "ACL4SSR_Online_Full_MultiMode"),
        HealthCheck::Combined,
    )),
    full(check(
        row(14, "ACL4SSR_Online_Full_NoAuto"),
        HealthCheck::ManualSelect,
    )),
    full(adblock_plus(row(15, "ACL4SSR_Online_Full_AdblockPlus"))),
    full(row(16, "ACL4SSR_Online_Full_Netflix")),
    full(row(17, "ACL4SSR_Online_Full_Google")),
    ModeRow {
        provider_only: true,
        ..row(18, "Provider")
    },
];

/// Menu entries as `(selection, label)` pairs, in table order.
pub fn mode_labels() -> impl Iterator<Item = (i64, &'static str)> {
    MODE_TABLE.iter().map(|r| (r.id, r.label))
}

/// Resolve a mode selection. Total: anything outside `1..=MAX_MODE`
/// resolves exactly like [`DEFAULT_MODE`].
pub fn resolve_mode(selection: i64) -> ModeConfig {
    let row = MODE_TABLE
        .iter()
        .find(|r| r.id == selection)
        .or_else(|| MODE_TABLE.iter().find(|r| r.id == DEFAULT_MODE))
        .unwrap_or(&MODE_TABLE[0]);

    let mut config = ModeConfig {
        label: row.label,
        provider_only: row.provider_only,
        mini: row.mini,
        full: row.full,
        no_reject: row.no_reject,
        adblock_plus: row.adblock_plus,
        health_check: row.health_check,
        country_groups: row.country_groups,
        target_netflix: NETFLIX_GROUP.to_string(),
        target_google: GOOGLE_GROUP.to_string(),
    };

    if config.mini {
        config.target_netflix = PROXY_GROUP.to_string();
        config.target_google = PROXY_GROUP.to_string();
    }

    config
}
