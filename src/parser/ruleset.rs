//! Rule-list normalization
//!
//! Remote lists mix two line shapes: explicit `MATCHER,PATTERN[,...]` lines
//! and bare tokens (a domain suffix, or a CIDR when the token has a `/`).
//! Both are rewritten to point at one destination group.

use std::collections::HashSet;

use crate::models::{Matcher, RuleEntry};

/// Lower-cased patterns taken from user rules; remote rules with the same
/// pattern are dropped so the user rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    patterns: HashSet<String>,
}

impl ExclusionSet {
    /// Collect the second comma field of every custom rule line
    pub fn from_custom_rules(custom_rules: &str) -> Self {
        let patterns = custom_rule_lines(custom_rules)
            .iter()
            .filter_map(|line| line.split(',').nth(1))
            .map(|pattern| pattern.trim().to_lowercase())
            .filter(|pattern| !pattern.is_empty())
            .collect();
        Self { patterns }
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.contains(&pattern.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Custom rule lines as they go into the document: trimmed, blank lines
/// dropped, and a leading YAML list marker removed.
pub fn custom_rule_lines(custom_rules: &str) -> Vec<String> {
    custom_rules
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('-').map(str::trim_start).unwrap_or(line)
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize one raw rule list into entries targeting `target`
///
/// Output order follows input line order. For explicit lines only the
/// second field is kept; the declared matcher and target are discarded.
pub fn normalize_rules(
    content: &str,
    target: &str,
    modifier: Option<&str>,
    exclusions: &ExclusionSet,
) -> Vec<RuleEntry> {
    let mut rules = Vec::new();

    for line in content.lines() {
        let mut line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        if let Some(idx) = line.find('#') {
            line = line[..idx].trim();
        }

        let (matcher, pattern) = if line.contains(',') {
            let pattern = line.split(',').nth(1).unwrap_or_default().trim();
            (Matcher::Passthrough, pattern)
        } else if line.contains('/') {
            (Matcher::IpCidr, line)
        } else {
            (Matcher::DomainSuffix, line)
        };

        if pattern.is_empty() || exclusions.contains(pattern) {
            continue;
        }
        rules.push(RuleEntry::new(matcher, pattern, target, modifier));
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rule::NO_RESOLVE;

    fn render(rules: &[RuleEntry]) -> Vec<String> {
        rules.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_two_line_shapes() {
        let raw = "baidu.com\n192.168.0.0/16\n# comment\nreddit.com,DOMAIN,DIRECT";
        let rules = normalize_rules(raw, "X", Some(NO_RESOLVE), &ExclusionSet::default());
        assert_eq!(
            render(&rules),
            vec![
                "DOMAIN-SUFFIX,baidu.com,X,no-resolve",
                "IP-CIDR,192.168.0.0/16,X,no-resolve",
                "DOMAIN,X,no-resolve",
            ]
        );

        let rules = normalize_rules(raw, "X", None, &ExclusionSet::default());
        assert_eq!(
            render(&rules),
            vec!["DOMAIN-SUFFIX,baidu.com,X", "IP-CIDR,192.168.0.0/16,X", "DOMAIN,X"]
        );
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let raw = "  \n// header\n#another\nexample.org # trailing\n\n  google.com  \n";
        let rules = normalize_rules(raw, "G", None, &ExclusionSet::default());
        assert_eq!(
            render(&rules),
            vec!["DOMAIN-SUFFIX,example.org,G", "DOMAIN-SUFFIX,google.com,G"]
        );
    }

    #[test]
    fn test_explicit_line_without_pattern_is_dropped() {
        let rules = normalize_rules("DOMAIN-SUFFIX,", "G", None, &ExclusionSet::default());
        assert!(rules.is_empty());
    }

    #[test]
    fn test_exclusions_are_case_insensitive() {
        let exclusions = ExclusionSet::from_custom_rules(
            "- DOMAIN-SUFFIX,Example.com,DIRECT\nIP-CIDR,10.0.0.0/8,DIRECT\nMATCH\n",
        );
        assert_eq!(exclusions.len(), 2);
        assert!(!exclusions.is_empty());
        assert!(ExclusionSet::from_custom_rules("\n- \nMATCH,\n").is_empty());

        let raw = "DOMAIN-SUFFIX,EXAMPLE.com\nexample.com\n10.0.0.0/8\nother.com";
        let rules = normalize_rules(raw, "P", None, &exclusions);
        assert_eq!(render(&rules), vec!["DOMAIN-SUFFIX,other.com,P"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = "a.com\nDOMAIN,b.com\n1.1.1.0/24";
        let exclusions = ExclusionSet::from_custom_rules("DOMAIN,b.com,DIRECT");
        assert_eq!(
            normalize_rules(raw, "T", None, &exclusions),
            normalize_rules(raw, "T", None, &exclusions)
        );
    }

    #[test]
    fn test_custom_rule_lines() {
        assert_eq!(
            custom_rule_lines("  - DOMAIN-SUFFIX,baidu.com,DIRECT\n\n-IP-CIDR,1.0.0.0/8,DIRECT \n"),
            vec!["DOMAIN-SUFFIX,baidu.com,DIRECT", "IP-CIDR,1.0.0.0/8,DIRECT"]
        );
    }
}
