use std::env;

pub const SERVICE_URL_ENV: &str = "CAT_WALLET_SERVICE_URL";
pub const TIMEOUT_ENV: &str = "CAT_WALLET_TIMEOUT_MS";
pub const FIXTURES_ENV: &str = "CAT_WALLET_FIXTURES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletServiceConfig {
    pub service_base_url: String,
    pub request_timeout_ms: u64,
    /// Serve built-in fixture data instead of talking to a service.
    pub use_fixtures: bool,
}

impl Default for WalletServiceConfig {
    fn default() -> Self {
        Self {
            service_base_url: "http://127.0.0.1:8710".to_owned(),
            request_timeout_ms: 15_000,
            use_fixtures: false,
        }
    }
}

impl WalletServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unparseable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(url) = lookup(SERVICE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            cfg.service_base_url = url.trim().trim_end_matches('/').to_owned();
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV).and_then(|v| v.trim().parse::<u64>().ok()) {
            cfg.request_timeout_ms = timeout;
        }
        if let Some(flag) = lookup(FIXTURES_ENV) {
            cfg.use_fixtures = matches!(flag.trim(), "1" | "true" | "yes" | "on");
        }
        cfg
    }
}
