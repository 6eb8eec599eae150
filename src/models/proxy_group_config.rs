/// Primary node-selection group
pub const PROXY_GROUP: &str = "🚀 节点选择";
/// Latency-race group, also the health-check group for single disciplines
pub const AUTO_GROUP: &str = "♻️ 自动选择";
pub const FALLBACK_GROUP: &str = "🔯 故障转移";
pub const LOAD_BALANCE_GROUP: &str = "⚖️ 负载均衡";

pub const TELEGRAM_GROUP: &str = "📲 电报消息";
pub const YOUTUBE_GROUP: &str = "📹 油管视频";
pub const NETFLIX_GROUP: &str = "🎥 奈飞视频";
pub const MEDIA_GROUP: &str = "🌍 国外媒体";
pub const MICROSOFT_GROUP: &str = "Ⓜ️ 微软服务";
pub const GOOGLE_GROUP: &str = "📢 谷歌服务";
pub const APPLE_GROUP: &str = "🍎 苹果服务";
pub const GAMES_GROUP: &str = "🎮 游戏服务";
pub const ONEDRIVE_GROUP: &str = "☁️ 微软云盘";
pub const STEAM_GROUP: &str = "🚂 Steam";

pub const REJECT_GROUP: &str = "🛑 广告拦截";
pub const DIRECT_GROUP: &str = "🎯 全球直连";
/// Catch-all group for traffic no rule matched
pub const FINAL_GROUP: &str = "🐟 漏网之鱼";

/// Built-in runtime destinations
pub const DIRECT: &str = "DIRECT";
pub const REJECT: &str = "REJECT";

/// Type of proxy group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyGroupType {
    Select,
    URLTest,
    Fallback,
    LoadBalance,
}

impl ProxyGroupType {
    /// Get string representation of the proxy group type
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyGroupType::Select => "select",
            ProxyGroupType::URLTest => "url-test",
            ProxyGroupType::LoadBalance => "load-balance",
            ProxyGroupType::Fallback => "fallback",
        }
    }

    /// Whether the group probes its members
    pub fn is_health_checked(&self) -> bool {
        !matches!(self, ProxyGroupType::Select)
    }
}

/// Load balancing strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStrategy {
    ConsistentHashing,
}

impl BalanceStrategy {
    /// Get string representation of the balance strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceStrategy::ConsistentHashing => "consistent-hashing",
        }
    }
}

/// Probe parameters shared by every health-checked group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheckParams {
    pub url: String,
    pub interval: u32,
    pub tolerance: u32,
}

impl Default for HealthCheckParams {
    fn default() -> Self {
        Self {
            url: "http://www.gstatic.com/generate_204".to_string(),
            interval: 300,
            tolerance: 50,
        }
    }
}

/// Configuration for a proxy group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyGroupConfig {
    /// Name of the proxy group
    pub name: String,
    /// Type of the proxy group
    pub group_type: ProxyGroupType,
    /// Members in order: node names, other groups or built-in destinations
    pub proxies: Vec<String>,
    /// URL for testing
    pub url: String,
    /// Interval in seconds between tests
    pub interval: u32,
    /// Tolerance value for tests
    pub tolerance: u32,
    /// Strategy for load balancing
    pub strategy: BalanceStrategy,
}

impl ProxyGroupConfig {
    /// Create a manual-select group
    pub fn select(name: &str, proxies: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            group_type: ProxyGroupType::Select,
            proxies,
            url: String::new(),
            interval: 0,
            tolerance: 0,
            strategy: BalanceStrategy::ConsistentHashing,
        }
    }

    /// Create a group of `group_type`, carrying probe parameters when the type uses them
    pub fn checked(
        name: &str,
        group_type: ProxyGroupType,
        proxies: Vec<String>,
        params: &HealthCheckParams,
    ) -> Self {
        let mut group = Self::select(name, proxies);
        group.group_type = group_type;
        if group_type.is_health_checked() {
            group.url = params.url.clone();
            group.interval = params.interval;
            group.tolerance = params.tolerance;
        }
        group
    }

    /// Get string representation of the balance strategy
    pub fn strategy_str(&self) -> &'static str {
        self.strategy.as_str()
    }
}

/// A collection of proxy group configurations
pub type ProxyGroupConfigs = Vec<ProxyGroupConfig>;
