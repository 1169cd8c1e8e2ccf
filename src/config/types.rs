use serde::{Deserialize, Serialize};

/// Origin used when neither the config file nor the environment names one.
pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend origin without the `/api` suffix, e.g. `https://portfolio.example.com`
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Admin bearer token (obtain with `folio login --save`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_origin() -> String {
    DEFAULT_API_ORIGIN.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            token: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl ApiConfig {
    /// The origin with any trailing slashes removed.
    pub fn normalized_origin(&self) -> &str {
        self.origin.trim_end_matches('/')
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Largest file accepted for upload, in megabytes (default: 200)
    #[serde(default = "default_max_file_mb")]
    pub max_file_mb: u64,
}

fn default_max_file_mb() -> u64 {
    200
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_mb: default_max_file_mb(),
        }
    }
}

impl UploadConfig {
    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_mb.saturating_mul(1024 * 1024)
    }
}
