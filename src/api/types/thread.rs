use serde::{Deserialize, Serialize};

use super::common::Metadata;

/// A conversation container. A thread exclusively owns its messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Unix timestamp (seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Thread {
    pub fn title(&self) -> Option<&str> {
        self.metadata.as_ref()?.get("title").map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateThreadRequest {
    pub metadata: Metadata,
}

impl CreateThreadRequest {
    /// A thread whose only metadata entry is its `title`.
    pub fn titled<S: Into<String>>(title: S) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert("title".to_string(), title.into());
        Self { metadata }
    }
}
