//! Client configuration and region handling.
//!
//! A [`ClientConfig`] is fixed when a service client is built: region,
//! endpoint override, timeouts and retry policy cannot change afterwards.

use crate::profile::ProfileSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Regions ─────────────────────────────────────────────────────────────

/// All standard AWS regions as of 2025.
pub const AWS_REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "af-south-1",
    "ap-east-1",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ca-central-1",
    "ca-west-1",
    "eu-central-1",
    "eu-central-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-south-1",
    "eu-south-2",
    "eu-north-1",
    "il-central-1",
    "me-south-1",
    "me-central-1",
    "sa-east-1",
    // GovCloud
    "us-gov-east-1",
    "us-gov-west-1",
    // China
    "cn-north-1",
    "cn-northwest-1",
];

/// Region used when nothing else is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// An AWS region code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Region {
    name: String,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Regional endpoint for a service endpoint prefix:
    /// `https://{prefix}.{region}.amazonaws.com`, `.com.cn` in China.
    pub fn endpoint(&self, endpoint_prefix: &str) -> String {
        format!(
            "https://{}.{}.{}",
            endpoint_prefix,
            self.name,
            self.dns_suffix()
        )
    }

    /// Check if this is a known AWS region.
    pub fn is_valid(&self) -> bool {
        AWS_REGIONS.contains(&self.name.as_str())
    }

    /// Return the partition for this region (aws, aws-cn, aws-us-gov).
    pub fn partition(&self) -> &'static str {
        if self.name.starts_with("cn-") {
            "aws-cn"
        } else if self.name.starts_with("us-gov-") {
            "aws-us-gov"
        } else {
            "aws"
        }
    }

    fn dns_suffix(&self) -> &'static str {
        match self.partition() {
            "aws-cn" => "amazonaws.com.cn",
            _ => "amazonaws.com",
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Region {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Region {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

// ── Retry Configuration ─────────────────────────────────────────────────

/// Retry configuration following the AWS SDK standard retry mode.
///
/// Applied by [`crate::retry::RetryingTransport`]; the invoker itself sends
/// each call exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts including the first (default: 3).
    pub max_attempts: u32,
    pub mode: RetryMode,
    /// Initial backoff duration in milliseconds (default: 500).
    pub initial_backoff_ms: u64,
    /// Maximum backoff duration in milliseconds (default: 20_000).
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            mode: RetryMode::Standard,
            initial_backoff_ms: 500,
            max_backoff_ms: 20_000,
        }
    }
}

impl RetryConfig {
    /// A single attempt, no retries.
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryMode {
    /// Exponential backoff with full jitter.
    Standard,
    /// Same backoff curve as standard; kept for `AWS_RETRY_MODE=adaptive`.
    Adaptive,
    /// Exponential backoff without jitter.
    Legacy,
}

impl FromStr for RetryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "adaptive" => Ok(Self::Adaptive),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown retry mode '{}'", other)),
        }
    }
}

// ── Client Config ───────────────────────────────────────────────────────

/// Behavioral settings shared by every service client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub region: Region,
    /// Custom endpoint URL override (for LocalStack, proxies, etc.).
    pub endpoint_url: Option<String>,
    pub retry: RetryConfig,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Suffix appended to the User-Agent header.
    pub app_name: Option<String>,
    /// How many recent per-request metric records each client keeps.
    pub metrics_window: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            endpoint_url: None,
            retry: RetryConfig::default(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            app_name: None,
            metrics_window: 50,
        }
    }
}

impl ClientConfig {
    pub fn new(region: impl Into<Region>) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }

    /// Resolve settings from the standard environment variables, then the
    /// active profile in the shared config file.
    ///
    /// Region: `AWS_REGION`, `AWS_DEFAULT_REGION`, profile `region`, then
    /// `us-east-1`. Endpoint: `AWS_ENDPOINT_URL`. Retry: `AWS_MAX_ATTEMPTS`
    /// and `AWS_RETRY_MODE`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        let env_region = env_non_empty("AWS_REGION").or_else(|| env_non_empty("AWS_DEFAULT_REGION"));
        let region = env_region.or_else(|| {
            let profiles = ProfileSet::load_config_file()?;
            profiles.active()?.get("region").map(str::to_string)
        });
        if let Some(region) = region {
            config.region = Region::new(region);
        }

        config.endpoint_url = env_non_empty("AWS_ENDPOINT_URL");

        if let Some(raw) = env_non_empty("AWS_MAX_ATTEMPTS") {
            match raw.parse::<u32>() {
                Ok(n) if n > 0 => config.retry.max_attempts = n,
                _ => log::warn!("Ignoring invalid AWS_MAX_ATTEMPTS '{}'", raw),
            }
        }
        if let Some(raw) = env_non_empty("AWS_RETRY_MODE") {
            match raw.parse::<RetryMode>() {
                Ok(mode) => config.retry.mode = mode,
                Err(e) => log::warn!("Ignoring AWS_RETRY_MODE: {}", e),
            }
        }

        config
    }

    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeouts(mut self, request_secs: u64, connect_secs: u64) -> Self {
        self.request_timeout_secs = request_secs;
        self.connect_timeout_secs = connect_secs;
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_metrics_window(mut self, window: usize) -> Self {
        self.metrics_window = window;
        self
    }

    /// The endpoint for a service: the override when set, otherwise the
    /// regional endpoint.
    pub fn endpoint_for(&self, endpoint_prefix: &str) -> String {
        match self.endpoint_url {
            Some(ref url) => url.trim_end_matches('/').to_string(),
            None => self.region.endpoint(endpoint_prefix),
        }
    }

    /// User-Agent header value.
    pub fn user_agent(&self) -> String {
        let base = format!("awsbind/{} lang/rust", env!("CARGO_PKG_VERSION"));
        match self.app_name {
            Some(ref app) => format!("{} app/{}", base, app),
            None => base,
        }
    }
}

pub(crate) fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "AWS_REGION",
            "AWS_DEFAULT_REGION",
            "AWS_ENDPOINT_URL",
            "AWS_MAX_ATTEMPTS",
            "AWS_RETRY_MODE",
            "AWS_PROFILE",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn commercial_endpoint() {
        let r = Region::new("us-east-1");
        assert_eq!(r.endpoint("guardduty"), "https://guardduty.us-east-1.amazonaws.com");
        assert_eq!(r.endpoint("ce"), "https://ce.us-east-1.amazonaws.com");
    }

    #[test]
    fn china_endpoint_uses_cn_suffix() {
        let r = Region::new("cn-north-1");
        assert_eq!(r.endpoint("guardduty"), "https://guardduty.cn-north-1.amazonaws.com.cn");
        assert_eq!(r.partition(), "aws-cn");
    }

    #[test]
    fn govcloud_partition() {
        let r = Region::new("us-gov-west-1");
        assert_eq!(r.partition(), "aws-us-gov");
        assert_eq!(r.endpoint("guardduty"), "https://guardduty.us-gov-west-1.amazonaws.com");
    }

    #[test]
    fn known_regions() {
        assert!(Region::new("us-east-1").is_valid());
        assert!(Region::new("eu-west-1").is_valid());
        assert!(!Region::new("mars-central-1").is_valid());
    }

    #[test]
    fn endpoint_override_wins() {
        let cfg = ClientConfig::new("eu-west-1").with_endpoint_url("http://localhost:4566/");
        assert_eq!(cfg.endpoint_for("guardduty"), "http://localhost:4566");
        let cfg = ClientConfig::new("eu-west-1");
        assert_eq!(cfg.endpoint_for("guardduty"), "https://guardduty.eu-west-1.amazonaws.com");
    }

    #[test]
    fn user_agent_includes_app_name() {
        let cfg = ClientConfig::default().with_app_name("billing-report");
        let ua = cfg.user_agent();
        assert!(ua.starts_with("awsbind/"));
        assert!(ua.ends_with("app/billing-report"));
    }

    #[test]
    fn retry_mode_parse() {
        assert_eq!("Adaptive".parse::<RetryMode>(), Ok(RetryMode::Adaptive));
        assert!("fast".parse::<RetryMode>().is_err());
    }

    #[test]
    #[serial]
    fn from_env_reads_region_and_retry() {
        clear_env();
        std::env::set_var("AWS_REGION", "eu-central-1");
        std::env::set_var("AWS_MAX_ATTEMPTS", "5");
        std::env::set_var("AWS_RETRY_MODE", "legacy");
        std::env::set_var("AWS_ENDPOINT_URL", "http://localhost:4566");
        let cfg = ClientConfig::from_env();
        clear_env();

        assert_eq!(cfg.region.name(), "eu-central-1");
        assert_eq!(cfg.retry.max_attempts, 5);
        assert_eq!(cfg.retry.mode, RetryMode::Legacy);
        assert_eq!(cfg.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }

    #[test]
    #[serial]
    fn from_env_ignores_bad_max_attempts() {
        clear_env();
        std::env::set_var("AWS_DEFAULT_REGION", "ap-south-1");
        std::env::set_var("AWS_MAX_ATTEMPTS", "zero");
        let cfg = ClientConfig::from_env();
        clear_env();

        assert_eq!(cfg.region.name(), "ap-south-1");
        assert_eq!(cfg.retry.max_attempts, 3);
    }

    #[test]
    fn config_survives_json() {
        let cfg = ClientConfig::new("sa-east-1").with_app_name("x").with_metrics_window(10);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"region\":\"sa-east-1\""));
        let back: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
