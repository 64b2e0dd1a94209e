use std::collections::HashMap;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::api::error::ClientError;

/// An installed engine variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    pub engine: String,
    /// Variant name as listed by `GET /v1/engines/{name}`, e.g. `linux-amd64-avx2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Variant name as reported by `GET /v1/engines/{name}/default`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub version: String,
}

impl Engine {
    /// The variant name, whichever key the server used for it.
    pub fn variant_name(&self) -> Option<&str> {
        self.variant.as_deref().or(self.name.as_deref())
    }
}

/// `{"variant", "version"}` body used to pick or remove one engine build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineVariantRequest {
    pub variant: String,
    pub version: String,
}

impl EngineVariantRequest {
    pub fn new(variant: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            version: version.into(),
        }
    }
}

/// Body of `POST /v1/engines/{name}/install`. An empty body installs the
/// latest release for the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(build_fn(error = "ClientError"), derive(Debug), default)]
pub struct InstallEngineRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub variant: Option<String>,
    /// `local` or `remote`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub kind: Option<String>,
    /// Base URL for a remote engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl InstallEngineRequest {
    pub fn builder() -> InstallEngineRequestBuilder {
        InstallEngineRequestBuilder::default()
    }
}

/// A published engine release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A downloadable asset of the latest release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_download_url: Option<String>,
}
