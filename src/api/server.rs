use super::{
    client::Client,
    config::Config,
    error::ClientResult,
    types::{Configuration, UpdateConfigurationResponse},
};

/// Server configuration and process control.
pub struct Server<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Server<'c, C> {
    pub fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    pub async fn get_configuration(&self) -> ClientResult<Configuration> {
        self.client.get("/v1/configs").await
    }

    /// Only the fields set on `configuration` are sent and changed.
    pub async fn update_configuration(
        &self,
        configuration: Configuration,
    ) -> ClientResult<UpdateConfigurationResponse> {
        self.client.post("/v1/configs", configuration).await
    }

    /// HTTP status of `GET /healthz`. A stopped server is a transport error,
    /// a sick one is a non-200 status.
    pub async fn health(&self) -> ClientResult<u16> {
        self.client.status_of(reqwest::Method::GET, "/healthz").await
    }

    /// Asks the server process to shut down and returns the status it answered with.
    pub async fn terminate(&self) -> ClientResult<u16> {
        crate::info!("requesting server shutdown");
        self.client
            .status_of(reqwest::Method::DELETE, "/processManager/destroy")
            .await
    }
}
