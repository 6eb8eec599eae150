//! Document compilation
//!
//! Rules are emitted in a fixed order: custom rules, remote lists in the
//! mode's category order, China lists, then the catch-all.

use std::collections::HashMap;

use log::{debug, info};

use super::group::generate_groups;
use crate::error::CompileError;
use crate::generator::yaml::clash::{ClashProxy, ClashProxyGroup, ClashYamlOutput};
use crate::models::proxy_group_config::*;
use crate::models::rule::{catch_all_rule, NO_RESOLVE};
use crate::models::{ModeConfig, Node};
use crate::parser::ruleset::{custom_rule_lines, normalize_rules, ExclusionSet};
use crate::rulesets::catalog::{self, RuleSource, RULE_SOURCES};
use crate::settings::Settings;
use crate::utils::http_std::{fetch_all, RuleFetcher};

/// One remote list routed to one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesetBinding {
    pub source: RuleSource,
    pub target: String,
    pub modifier: Option<&'static str>,
}

impl RulesetBinding {
    fn new(source: RuleSource, target: &str) -> Self {
        Self {
            source,
            target: target.to_string(),
            modifier: None,
        }
    }

    fn no_resolve(mut self) -> Self {
        self.modifier = Some(NO_RESOLVE);
        self
    }
}

/// Remote lists in evaluation order for `mode`
pub fn ruleset_bindings(mode: &ModeConfig) -> Vec<RulesetBinding> {
    let mut bindings = vec![RulesetBinding::new(catalog::LAN, DIRECT_GROUP)];

    if !mode.no_reject {
        bindings.push(RulesetBinding::new(catalog::BAN_AD, REJECT_GROUP));
        if mode.adblock_plus {
            bindings.push(RulesetBinding::new(catalog::BAN_PROGRAM_AD, REJECT_GROUP));
        }
    }

    if mode.mini {
        bindings.extend([
            RulesetBinding::new(catalog::PROXY_LITE, PROXY_GROUP),
            RulesetBinding::new(catalog::GOOGLE, PROXY_GROUP),
            RulesetBinding::new(catalog::TELEGRAM, PROXY_GROUP),
        ]);
    } else {
        bindings.extend([
            RulesetBinding::new(catalog::MICROSOFT, MICROSOFT_GROUP),
            RulesetBinding::new(catalog::APPLE, APPLE_GROUP),
            RulesetBinding::new(catalog::GOOGLE, &mode.target_google),
            RulesetBinding::new(catalog::TELEGRAM, TELEGRAM_GROUP),
            RulesetBinding::new(catalog::NETFLIX, &mode.target_netflix),
        ]);
        if mode.full {
            bindings.extend([
                RulesetBinding::new(catalog::ONEDRIVE, ONEDRIVE_GROUP),
                RulesetBinding::new(catalog::STEAM_CN, STEAM_GROUP),
                RulesetBinding::new(catalog::GAMES, GAMES_GROUP),
            ]);
        }
        bindings.extend([
            RulesetBinding::new(catalog::MEDIA, MEDIA_GROUP),
            RulesetBinding::new(catalog::PROXY_LITE, PROXY_GROUP),
        ]);
    }

    bindings.push(RulesetBinding::new(catalog::CHINA_DOMAIN, DIRECT_GROUP));
    bindings.push(RulesetBinding::new(catalog::CHINA_IP, DIRECT_GROUP).no_resolve());
    bindings
}

/// Build the rules block from custom rules and fetched list bodies
///
/// `fetched` is keyed by source name; missing sources contribute nothing.
pub fn generate_rules(
    mode: &ModeConfig,
    custom_rules: &str,
    fetched: &HashMap<String, String>,
) -> Vec<String> {
    let exclusions = ExclusionSet::from_custom_rules(custom_rules);
    let mut rules = custom_rule_lines(custom_rules);
    if !exclusions.is_empty() {
        debug!(
            "{} custom rule(s), {} excluded pattern(s)",
            rules.len(),
            exclusions.len()
        );
    }

    for binding in ruleset_bindings(mode) {
        let Some(content) = fetched.get(binding.source.name) else {
            continue;
        };
        let entries = normalize_rules(content, &binding.target, binding.modifier, &exclusions);
        debug!("{}: {} rule(s)", binding.source.name, entries.len());
        rules.extend(entries.iter().map(ToString::to_string));
    }

    rules.push(catch_all_rule(FINAL_GROUP));
    rules
}

/// Assemble the whole document without any I/O
pub fn compile_document(
    nodes: &[Node],
    mode: &ModeConfig,
    custom_rules: &str,
    fetched: &HashMap<String, String>,
    settings: &Settings,
) -> Result<String, CompileError> {
    if nodes.is_empty() {
        return Err(CompileError::NoNodesParsed);
    }

    let proxies: Vec<ClashProxy> = nodes.iter().map(ClashProxy::from).collect();

    let output = if mode.provider_only {
        ClashYamlOutput {
            proxies,
            ..Default::default()
        }
    } else {
        let groups = generate_groups(nodes, mode, &settings.health_check);
        ClashYamlOutput {
            proxies,
            proxy_groups: groups.iter().map(ClashProxyGroup::from).collect(),
            rules: generate_rules(mode, custom_rules, fetched),
            ..ClashYamlOutput::with_runtime_settings()
        }
    };

    info!(
        "Generated [{}]: {} proxies, {} groups, {} rules",
        mode.label,
        output.proxies.len(),
        output.proxy_groups.len(),
        output.rules.len()
    );
    Ok(serde_yaml::to_string(&output)?)
}

/// Fetch the rule sources and compile the document
///
/// Fails before any retrieval when `nodes` is empty. Provider-only modes
/// skip retrieval entirely.
pub async fn compile<F: RuleFetcher>(
    nodes: &[Node],
    mode: &ModeConfig,
    custom_rules: &str,
    fetcher: &F,
    settings: &Settings,
) -> Result<String, CompileError> {
    if nodes.is_empty() {
        return Err(CompileError::NoNodesParsed);
    }

    let fetched = if mode.provider_only {
        HashMap::new()
    } else {
        info!("Fetching {} rule sources", RULE_SOURCES.len());
        let fetched = fetch_all(fetcher, &RULE_SOURCES, settings.fetch_timeout).await;
        info!(
            "Fetched {}/{} rule sources",
            fetched.len(),
            RULE_SOURCES.len()
        );
        fetched
    };

    compile_document(nodes, mode, custom_rules, &fetched, settings)
}
