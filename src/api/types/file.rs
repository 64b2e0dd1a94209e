use serde::{Deserialize, Serialize};

/// Metadata of an uploaded file. The content itself is fetched separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    pub purpose: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn file_round_trip() {
        let wire = json!({
            "id": "file-abc123",
            "object": "file",
            "purpose": "assistants",
            "filename": "notes.txt",
            "bytes": 120,
            "created_at": 1731503720
        });
        let file: File = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(file.bytes, Some(120));
        assert_eq!(serde_json::to_value(&file).unwrap(), wire);
    }

    #[test]
    fn purpose_is_required() {
        let err = serde_json::from_str::<File>(r#"{"id": "file-1"}"#).unwrap_err();
        assert!(err.to_string().contains("purpose"));
    }
}
