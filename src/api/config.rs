//! Client configuration: [CortexConfig] for a local Cortex server.
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use super::error::{ClientError, ClientResult};

/// Default base address of a locally running server.
pub const CORTEX_API_BASE: &str = "http://127.0.0.1:5555";

/// Environment variable overriding [CORTEX_API_BASE].
pub const CORTEX_API_BASE_ENV_VAR: &str = "CORTEX_API_BASE";
/// Environment variable holding a request timeout in whole seconds.
pub const CORTEX_TIMEOUT_ENV_VAR: &str = "CORTEX_TIMEOUT_SECS";
/// Environment variable toggling the single-quote repair fallback.
pub const CORTEX_REPAIR_ENV_VAR: &str = "CORTEX_REPAIR_SINGLE_QUOTES";

/// [crate::Client] relies on this for every API call.
pub trait Config: Clone + Send + Sync {
    fn headers(&self) -> HeaderMap;
    fn url(&self, path: &str) -> String;
    fn api_base(&self) -> &str;
    /// Transport timeout applied to the whole request.
    fn timeout(&self) -> Option<Duration>;
    /// Whether malformed single-quoted JSON is repaired before giving up.
    fn repair_single_quotes(&self) -> bool;
}

#[derive(Clone, Debug)]
pub struct CortexConfig {
    api_base: String,
    timeout: Option<Duration>,
    repair_single_quotes: bool,
}

impl Default for CortexConfig {
    fn default() -> Self {
        Self {
            api_base: CORTEX_API_BASE.to_string(),
            timeout: None,
            repair_single_quotes: true,
        }
    }
}

impl CortexConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads `.env` if present, then reads the `CORTEX_*` variables.
    /// Unset variables keep their defaults.
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();
        let mut config = Self::default();

        if let Ok(api_base) = dotenvy::var(CORTEX_API_BASE_ENV_VAR) {
            crate::trace!("Using api_base from {}", CORTEX_API_BASE_ENV_VAR);
            config = config.with_api_base(api_base);
        }
        if let Ok(secs) = dotenvy::var(CORTEX_TIMEOUT_ENV_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ClientError::InvalidArgument(format!(
                    "{CORTEX_TIMEOUT_ENV_VAR} must be a whole number of seconds, got '{secs}'"
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Ok(flag) = dotenvy::var(CORTEX_REPAIR_ENV_VAR) {
            let enabled = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ClientError::InvalidArgument(format!(
                        "{CORTEX_REPAIR_ENV_VAR} must be a boolean, got '{flag}'"
                    )))
                }
            };
            config = config.with_single_quote_repair(enabled);
        }
        Ok(config)
    }

    /// To use an API base url different from default [CORTEX_API_BASE]
    pub fn with_api_base<S: Into<String>>(mut self, api_base: S) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_single_quote_repair(mut self, enabled: bool) -> Self {
        self.repair_single_quotes = enabled;
        self
    }
}

impl Config for CortexConfig {
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn repair_single_quotes(&self) -> bool {
        self.repair_single_quotes
    }
}
