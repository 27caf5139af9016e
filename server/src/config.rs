//! Site configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSISTANT_API_URL: &str = "https://api.tambo.co";
pub const DEFAULT_PROXY_PREFIX: &str = "/api/assistant";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },
}

/// Where and how `/api/assistant/*` is forwarded.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Upstream base URL, no trailing slash.
    pub upstream: String,
    /// Mount path, leading slash and no trailing slash.
    pub prefix: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("upstream", &self.upstream)
            .field("prefix", &self.prefix)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub assistant: ProxyConfig,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ASSISTANT_API_URL`: default `https://api.tambo.co`
    /// - `ASSISTANT_API_KEY_ENV`: names the env var containing the key
    /// - `ASSISTANT_PROXY_PREFIX`: default `/api/assistant`
    /// - `ASSISTANT_PROXY_TIMEOUT_SECS`: default 60
    /// - `ASSISTANT_PROXY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` does not parse or the key variable
    /// named by `ASSISTANT_API_KEY_ENV` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`], reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let upstream = lookup("ASSISTANT_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ASSISTANT_API_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        let api_key = match lookup("ASSISTANT_API_KEY_ENV") {
            Some(var) => Some(lookup(&var).ok_or(ConfigError::MissingApiKey { var })?),
            None => None,
        };

        let prefix = normalize_prefix(lookup("ASSISTANT_PROXY_PREFIX").as_deref().unwrap_or(DEFAULT_PROXY_PREFIX));
        if prefix.is_empty() {
            return Err(ConfigError::Invalid { var: "ASSISTANT_PROXY_PREFIX", value: "/".into() });
        }

        let timeout_secs = parse_u64(&lookup, "ASSISTANT_PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS);
        let connect_timeout_secs =
            parse_u64(&lookup, "ASSISTANT_PROXY_CONNECT_TIMEOUT_SECS", DEFAULT_PROXY_CONNECT_TIMEOUT_SECS);

        Ok(Self { port, assistant: ProxyConfig { upstream, prefix, api_key, timeout_secs, connect_timeout_secs } })
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

/// `api/assistant/` and `/api/assistant` both become `/api/assistant`.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    format!("/{trimmed}")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
