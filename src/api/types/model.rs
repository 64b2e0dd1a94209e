use std::collections::HashMap;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::api::error::ClientError;

/// Where a model is in its lifecycle on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelState {
    Available,
    Downloading,
    Downloaded,
    Loaded,
    Unloaded,
    /// A state this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// A model known to the server, as listed by `GET /v1/models`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Engine that runs the model, e.g. `llama-cpp`, `onnxruntime`, `openai`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    /// Weight format such as `gguf`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    /// Size on disk in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ModelState>,
    /// Local path or remote reference the model came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Number of layers offloaded to the GPU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx_len: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_parallel: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_threads: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<String>,
}

/// Body of `POST /v1/models/start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(build_fn(error = "ClientError"), derive(Debug))]
pub struct StartModelRequest {
    #[builder(setter(into))]
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub prompt_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub cache_enabled: Option<bool>,
    /// KV cache quantization, e.g. `f16`, `q8_0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub cache_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub ngl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub ctx_len: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub n_parallel: Option<u32>,
    /// Multimodal projector file for vision models.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub mmproj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub llama_model_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option), default)]
    pub model_path: Option<String>,
}

impl StartModelRequest {
    pub fn new<S: Into<String>>(model: S) -> Self {
        Self {
            model: model.into(),
            prompt_template: None,
            cache_enabled: None,
            cache_type: None,
            ngl: None,
            ctx_len: None,
            n_parallel: None,
            mmproj: None,
            llama_model_path: None,
            model_path: None,
        }
    }

    pub fn builder() -> StartModelRequestBuilder {
        StartModelRequestBuilder::default()
    }
}

/// `{"model": id}` body used by `POST /v1/models/stop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRef {
    pub model: String,
}

/// Partial update for `PATCH /v1/models/{id}`. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(build_fn(error = "ClientError"), derive(Debug), default)]
pub struct UpdateModelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub ngl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub ctx_len: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub n_parallel: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub cpu_threads: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub prompt_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub system_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub user_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub ai_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub owned_by: Option<String>,
}

impl UpdateModelRequest {
    pub fn builder() -> UpdateModelRequestBuilder {
        UpdateModelRequestBuilder::default()
    }
}

/// Registers a model served by a remote engine (`POST /v1/models/add`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRemoteModelRequest {
    /// Local id the model will be known by.
    pub model: String,
    /// Remote engine name, e.g. `openai` or `anthropic`.
    pub engine: String,
    /// Model id on the remote provider.
    pub remote_model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference_params: Option<serde_json::Value>,
}

impl AddRemoteModelRequest {
    pub fn new(
        model: impl Into<String>,
        engine: impl Into<String>,
        remote_model: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            engine: engine.into(),
            remote_model: remote_model.into(),
            name: None,
            version: None,
            metadata: None,
            inference_params: None,
        }
    }
}

/// How an imported model file is placed in the model store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportOption {
    Symlink,
    Copy,
}

/// Imports a local GGUF file (`POST /v1/models/import`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportModelRequest {
    pub model: String,
    pub model_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<ImportOption>,
}

impl ImportModelRequest {
    pub fn new(model: impl Into<String>, model_path: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            model_path: model_path.into(),
            name: None,
            option: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportModelResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_path: Option<String>,
}

/// Starts a download (`POST /v1/models/pull`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullModelRequest {
    /// Model handle or Hugging Face reference, e.g. `tinyllama:1b`.
    pub model: String,
    /// Custom id to register the downloaded model under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PullModelRequest {
    pub fn new<S: Into<String>>(model: S) -> Self {
        Self {
            model: model.into(),
            id: None,
            name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullModelResponse {
    pub message: String,
    pub task: Task,
}

/// An asynchronous download running on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub items: Vec<TaskItem>,
}

/// One file of a download task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: String,
    pub download_url: String,
    pub local_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloaded_bytes: Option<u64>,
}

/// Cancels a download (`DELETE /v1/models/pull`). The server reads the
/// camel-cased `taskId` key here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopPullRequest {
    #[serde(rename = "taskId")]
    pub task_id: String,
}

/// `{"source": path}` body for adding or removing a model source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSourceRequest {
    pub source: String,
}
