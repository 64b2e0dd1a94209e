use std::collections::HashMap;

use serde::{
    de::{self, DeserializeOwned},
    Deserialize, Deserializer, Serialize,
};
use serde_json::Value;

/// String metadata attached to threads and messages. Keys are unique; on
/// update the last written value wins.
pub type Metadata = HashMap<String, String>;

/// Generic `{"message": ...}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteObjectResponse {
    pub deleted: bool,
    pub id: String,
    pub object: String,
}

/// `{"metadata": {...}}` body shared by the thread and message patch calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMetadataRequest {
    pub metadata: Metadata,
}

impl UpdateMetadataRequest {
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UpdateMetadataRequest {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            metadata: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Wire shape of list endpoints. Most wrap the items in `{"data": [...]}`,
/// a few return the bare array.
///
/// The branch is picked from the JSON shape before the items are decoded, so
/// an item that fails reports its own error (e.g. "missing field `id`").
#[derive(Debug)]
pub(crate) struct ListPayload<T>(Vec<T>);

impl<T> ListPayload<T> {
    pub(crate) fn into_items(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ListPayload<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = match Value::deserialize(deserializer)? {
            items @ Value::Array(_) => items,
            Value::Object(mut envelope) => envelope
                .remove("data")
                .ok_or_else(|| de::Error::missing_field("data"))?,
            _ => {
                return Err(de::Error::custom(
                    "expected a list or an object with a `data` list",
                ))
            }
        };
        serde_json::from_value(items)
            .map(ListPayload)
            .map_err(de::Error::custom)
    }
}
