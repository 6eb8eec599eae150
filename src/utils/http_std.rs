use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, warn};
use reqwest::{Client, Proxy};

use crate::error::FetchError;
use crate::rulesets::RuleSource;

/// Default timeout for one rule-source retrieval in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;

#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    pub proxy: Option<String>,
}

pub fn parse_proxy(proxy_str: &str) -> ProxyConfig {
    if proxy_str.is_empty() || proxy_str == "NONE" {
        return ProxyConfig { proxy: None };
    }
    ProxyConfig {
        proxy: Some(proxy_str.to_string()),
    }
}

/// Retrieves the raw text of one rule list
pub trait RuleFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>>;
}

/// [`RuleFetcher`] backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(
        proxy_config: &ProxyConfig,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let mut client_builder = Client::builder().timeout(timeout).user_agent(user_agent);

        if let Some(proxy) = &proxy_config.proxy {
            let proxy = Proxy::all(proxy)
                .map_err(|e| FetchError::Client(format!("Failed to set proxy: {}", e)))?;
            client_builder = client_builder.proxy(proxy);
        }

        let client = client_builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl RuleFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Request(format!("Failed to read response body: {}", e)))
    }
}

/// Fetch every source concurrently and wait for all of them.
///
/// Each retrieval gets its own `timeout`. Failed sources are logged and left
/// out of the map, so the result may be smaller than `sources`.
pub async fn fetch_all<F: RuleFetcher>(
    fetcher: &F,
    sources: &[RuleSource],
    timeout: Duration,
) -> HashMap<String, String> {
    let tasks = sources.iter().map(|source| async move {
        let url = source.url();
        let result = match tokio::time::timeout(timeout, fetcher.fetch(&url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(timeout)),
        };
        match result {
            Ok(body) => {
                debug!("Fetched rule source {} ({} bytes)", source.name, body.len());
                Some((source.name.to_string(), body))
            }
            Err(e) => {
                warn!("Skipping rule source {}: {}", source.name, e);
                None
            }
        }
    });

    join_all(tasks).await.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rulesets::catalog::{BAN_AD, LAN, NETFLIX};

    struct MapFetcher {
        bodies: HashMap<String, String>,
        slow: Option<String>,
    }

    impl RuleFetcher for MapFetcher {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            if self.slow.as_deref() == Some(url) {
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
            self.bodies
                .get(url)
                .cloned()
                .ok_or(FetchError::Status(404))
        }
    }

    #[tokio::test]
    async fn test_fetch_all_drops_failures() {
        let fetcher = MapFetcher {
            bodies: HashMap::from([(LAN.url(), "10.0.0.0/8".to_string())]),
            slow: None,
        };

        let result = fetch_all(&fetcher, &[LAN, BAN_AD], Duration::from_secs(1)).await;
        assert_eq!(result.len(), 1);
        assert_eq!(result["LocalAreaNetwork"], "10.0.0.0/8");
    }

    #[tokio::test]
    async fn test_fetch_all_times_out_each_source() {
        let fetcher = MapFetcher {
            bodies: HashMap::from([
                (LAN.url(), "lan".to_string()),
                (NETFLIX.url(), "netflix.com".to_string()),
            ]),
            slow: Some(NETFLIX.url()),
        };

        let result = fetch_all(&fetcher, &[LAN, NETFLIX], Duration::from_millis(100)).await;
        assert_eq!(result.len(), 1);
        assert!(result.contains_key("LocalAreaNetwork"));
    }

    #[test]
    fn test_parse_proxy() {
        assert!(parse_proxy("").proxy.is_none());
        assert!(parse_proxy("NONE").proxy.is_none());
        assert_eq!(
            parse_proxy("socks5://127.0.0.1:1080").proxy.as_deref(),
            Some("socks5://127.0.0.1:1080")
        );
    }
}
