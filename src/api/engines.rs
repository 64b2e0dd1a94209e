use super::{
    client::{join_segments, Client},
    config::Config,
    error::ClientResult,
    types::{
        Engine, EngineVariantRequest, InstallEngineRequest, MessageResponse, Release,
        ReleaseAsset,
    },
};

/// Management of one inference engine, e.g. `llama-cpp`.
pub struct Engines<'c, C: Config> {
    client: &'c Client<C>,
    engine: String,
}

impl<'c, C: Config> Engines<'c, C> {
    pub fn new(client: &'c Client<C>, engine: &str) -> Self {
        Self {
            client,
            engine: engine.to_string(),
        }
    }

    /// `/v1/engines/{engine}`, followed by `tail`.
    fn path(&self, tail: &[&str]) -> ClientResult<String> {
        let mut segments = vec![self.engine.as_str()];
        segments.extend_from_slice(tail);
        join_segments("/v1/engines", &segments)
    }

    /// Installed variants of this engine.
    pub async fn list_installed(&self) -> ClientResult<Vec<Engine>> {
        self.client.get_list(&self.path(&[])?).await
    }

    pub async fn get_default(&self) -> ClientResult<Engine> {
        self.client.get(&self.path(&["default"])?).await
    }

    pub async fn set_default_variant(
        &self,
        request: EngineVariantRequest,
    ) -> ClientResult<MessageResponse> {
        self.client.post(&self.path(&["default"])?, request).await
    }

    /// Installs a release. `InstallEngineRequest::default()` picks the latest
    /// release matching the host.
    pub async fn install(&self, request: InstallEngineRequest) -> ClientResult<MessageResponse> {
        crate::info!("installing engine {}", self.engine);
        self.client.post(&self.path(&["install"])?, request).await
    }

    pub async fn uninstall(&self, request: EngineVariantRequest) -> ClientResult<MessageResponse> {
        crate::info!(
            "uninstalling {} {} of engine {}",
            request.variant,
            request.version,
            self.engine
        );
        self.client
            .delete_with_body(&self.path(&["install"])?, request)
            .await
    }

    pub async fn load(&self) -> ClientResult<MessageResponse> {
        self.client.post_empty(&self.path(&["load"])?).await
    }

    pub async fn unload(&self) -> ClientResult<MessageResponse> {
        self.client.delete(&self.path(&["load"])?).await
    }

    pub async fn list_releases(&self) -> ClientResult<Vec<Release>> {
        self.client.get_list(&self.path(&["releases"])?).await
    }

    /// Assets of the newest release.
    pub async fn latest_release(&self) -> ClientResult<Vec<ReleaseAsset>> {
        self.client
            .get_list(&self.path(&["releases", "latest"])?)
            .await
    }

    /// Updates the engine to the latest release.
    pub async fn update(&self) -> ClientResult<MessageResponse> {
        self.client.post_empty(&self.path(&["update"])?).await
    }
}
