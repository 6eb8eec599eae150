use std::fmt;

/// Modifier appended to IP rules so the runtime does not resolve the host first.
pub const NO_RESOLVE: &str = "no-resolve";

/// How a rule pattern is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    DomainSuffix,
    IpCidr,
    /// The pattern is emitted as-is, without a matcher keyword in front
    Passthrough,
}

impl Matcher {
    pub fn as_str(&self) -> &'static str {
        match self {
            Matcher::DomainSuffix => "DOMAIN-SUFFIX",
            Matcher::IpCidr => "IP-CIDR",
            Matcher::Passthrough => "",
        }
    }
}

/// One normalized classification rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub matcher: Matcher,
    pub pattern: String,
    pub target: String,
    pub modifier: Option<String>,
}

impl RuleEntry {
    pub fn new(matcher: Matcher, pattern: &str, target: &str, modifier: Option<&str>) -> Self {
        Self {
            matcher,
            pattern: pattern.to_string(),
            target: target.to_string(),
            modifier: modifier.map(str::to_string),
        }
    }
}

/// Renders `MATCHER,PATTERN,TARGET[,MODIFIER]`.
impl fmt::Display for RuleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matcher != Matcher::Passthrough {
            write!(f, "{},", self.matcher.as_str())?;
        }
        write!(f, "{},{}", self.pattern, self.target)?;
        if let Some(modifier) = &self.modifier {
            write!(f, ",{}", modifier)?;
        }
        Ok(())
    }
}

/// Terminal rule sending everything unmatched to `target`.
pub fn catch_all_rule(target: &str) -> String {
    format!("MATCH,{}", target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let rule = RuleEntry::new(Matcher::IpCidr, "10.0.0.0/8", "DIRECT", Some(NO_RESOLVE));
        assert_eq!(rule.to_string(), "IP-CIDR,10.0.0.0/8,DIRECT,no-resolve");

        let rule = RuleEntry::new(Matcher::Passthrough, "DOMAIN", "X", None);
        assert_eq!(rule.to_string(), "DOMAIN,X");

        assert_eq!(catch_all_rule("Final"), "MATCH,Final");
    }
}
