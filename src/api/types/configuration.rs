use serde::{Deserialize, Serialize};

/// Server-wide settings exposed by `GET /v1/configs`.
///
/// Every field is optional: on update only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Origins allowed by the server's CORS policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_password: Option<String>,
    /// Comma separated hosts that bypass the proxy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_proxy_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_proxy_host_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_peer_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_host_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huggingface_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateConfigurationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Configuration>,
}
