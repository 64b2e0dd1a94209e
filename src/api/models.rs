use super::{
    client::{join_segments, Client},
    config::Config,
    error::ClientResult,
    types::{
        AddRemoteModelRequest, DeleteObjectResponse, ImportModelRequest, ImportModelResponse,
        MessageResponse, Model, ModelRef, ModelSourceRequest, PullModelRequest,
        PullModelResponse, StartModelRequest, StopPullRequest, UpdateModelRequest,
    },
};

/// Model lifecycle: listing, loading, downloading and registering models.
pub struct Models<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Models<'c, C> {
    pub fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Models known to the server, in the order it lists them.
    pub async fn list(&self) -> ClientResult<Vec<Model>> {
        self.client.get_list("/v1/models").await
    }

    pub async fn get(&self, model_id: &str) -> ClientResult<Model> {
        self.client.get(&model_path(model_id)?).await
    }

    /// Loads a model into its engine.
    pub async fn start(&self, request: StartModelRequest) -> ClientResult<MessageResponse> {
        crate::debug!("starting model {}", request.model);
        self.client.post("/v1/models/start", request).await
    }

    /// Unloads a running model.
    pub async fn stop(&self, model_id: &str) -> ClientResult<MessageResponse> {
        crate::debug!("stopping model {}", model_id);
        let request = ModelRef {
            model: model_id.to_string(),
        };
        self.client.post("/v1/models/stop", request).await
    }

    pub async fn delete(&self, model_id: &str) -> ClientResult<DeleteObjectResponse> {
        self.client.delete(&model_path(model_id)?).await
    }

    pub async fn update(
        &self,
        model_id: &str,
        request: UpdateModelRequest,
    ) -> ClientResult<MessageResponse> {
        self.client.patch(&model_path(model_id)?, request).await
    }

    /// Registers a model served by a remote engine.
    pub async fn add_remote(&self, request: AddRemoteModelRequest) -> ClientResult<MessageResponse> {
        self.client.post("/v1/models/add", request).await
    }

    /// Registers a model file already present on the server's disk.
    pub async fn import(&self, request: ImportModelRequest) -> ClientResult<ImportModelResponse> {
        self.client.post("/v1/models/import", request).await
    }

    /// Starts a background download. The returned task id can be passed to
    /// [Models::stop_pull].
    pub async fn pull(&self, request: PullModelRequest) -> ClientResult<PullModelResponse> {
        crate::debug!("pulling model {}", request.model);
        self.client.post("/v1/models/pull", request).await
    }

    pub async fn stop_pull(&self, task_id: &str) -> ClientResult<MessageResponse> {
        let request = StopPullRequest {
            task_id: task_id.to_string(),
        };
        self.client.delete_with_body("/v1/models/pull", request).await
    }

    pub async fn add_source(&self, source: &str) -> ClientResult<MessageResponse> {
        let request = ModelSourceRequest {
            source: source.to_string(),
        };
        self.client.post("/v1/models/sources", request).await
    }

    pub async fn remove_source(&self, source: &str) -> ClientResult<MessageResponse> {
        let request = ModelSourceRequest {
            source: source.to_string(),
        };
        self.client
            .delete_with_body("/v1/models/sources", request)
            .await
    }
}

fn model_path(model_id: &str) -> ClientResult<String> {
    join_segments("/v1/models", &[model_id])
}
