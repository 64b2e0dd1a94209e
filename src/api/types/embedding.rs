use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::api::error::ClientError;

/// Text or token ids to embed. The server tells the shapes apart by structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Text(String),
    TextBatch(Vec<String>),
    Tokens(Vec<u32>),
    TokenBatch(Vec<Vec<u32>>),
}

impl From<String> for EmbeddingInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for EmbeddingInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for EmbeddingInput {
    fn from(v: Vec<String>) -> Self {
        Self::TextBatch(v)
    }
}

impl From<Vec<&str>> for EmbeddingInput {
    fn from(v: Vec<&str>) -> Self {
        Self::TextBatch(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<u32>> for EmbeddingInput {
    fn from(v: Vec<u32>) -> Self {
        Self::Tokens(v)
    }
}

impl<const N: usize> From<[u32; N]> for EmbeddingInput {
    fn from(v: [u32; N]) -> Self {
        Self::Tokens(v.to_vec())
    }
}

impl From<Vec<Vec<u32>>> for EmbeddingInput {
    fn from(v: Vec<Vec<u32>>) -> Self {
        Self::TokenBatch(v)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingFormat {
    #[default]
    Float,
    Base64,
}

/// Body of `POST /embeddings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(build_fn(error = "ClientError"), derive(Debug))]
pub struct CreateEmbeddingRequest {
    /// Falls back to the model the server has loaded when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub model: Option<String>,
    #[builder(setter(into))]
    pub input: EmbeddingInput,
    #[builder(default)]
    pub encoding_format: EncodingFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    pub dimensions: Option<u32>,
}

impl CreateEmbeddingRequest {
    pub fn new<I: Into<EmbeddingInput>>(input: I) -> Self {
        Self {
            model: None,
            input: input.into(),
            encoding_format: EncodingFormat::Float,
            object: None,
            dimensions: None,
        }
    }

    pub fn builder() -> CreateEmbeddingRequestBuilder {
        CreateEmbeddingRequestBuilder::default()
    }
}

/// One embedding vector, positioned by `index` within the request input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    pub index: u32,
    pub embedding: Vec<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn token_input_request_shape() {
        let req = CreateEmbeddingRequest::new([1u32, 2, 3]);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"input": [1, 2, 3], "encoding_format": "float"})
        );
    }

    #[test]
    fn builder_requires_input() {
        let err = CreateEmbeddingRequest::builder().model("m1").build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
    }

    #[test]
    fn builder_defaults_to_float() {
        let req = CreateEmbeddingRequest::builder()
            .input(vec!["a", "b"])
            .dimensions(384)
            .build()
            .unwrap();
        assert_eq!(req.encoding_format, EncodingFormat::Float);
        assert_eq!(req.input, EmbeddingInput::TextBatch(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn input_shapes_decode_by_structure() {
        let cases = [
            (json!("hello"), EmbeddingInput::Text("hello".into())),
            (json!(["a", "b"]), EmbeddingInput::TextBatch(vec!["a".into(), "b".into()])),
            (json!([1, 2]), EmbeddingInput::Tokens(vec![1, 2])),
            (json!([[1], [2, 3]]), EmbeddingInput::TokenBatch(vec![vec![1], vec![2, 3]])),
        ];
        for (wire, expected) in cases {
            assert_eq!(serde_json::from_value::<EmbeddingInput>(wire).unwrap(), expected);
        }
        assert!(serde_json::from_value::<EmbeddingInput>(json!({"text": "x"})).is_err());
    }

    #[test]
    fn embedding_round_trip() {
        let wire = json!({"index": 0, "embedding": [0.5, -0.25], "object": "embedding"});
        let embedding: Embedding = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(embedding.embedding.len(), 2);
        assert_eq!(serde_json::to_value(&embedding).unwrap(), wire);
    }
}
