use super::{
    client::Client,
    config::Config,
    error::ClientResult,
    types::{ActivateGpusRequest, ActivateGpusResponse, HardwareInformation},
};

pub struct Hardware<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Hardware<'c, C> {
    pub fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> ClientResult<HardwareInformation> {
        self.client.get("/v1/hardware").await
    }

    /// Enables the GPUs at the given indices. Takes effect the next time a
    /// model is started.
    pub async fn activate_gpus(&self, gpus: Vec<u32>) -> ClientResult<ActivateGpusResponse> {
        crate::debug!("activating gpus {:?}", gpus);
        self.client
            .post("/v1/hardware/activate", ActivateGpusRequest { gpus })
            .await
    }
}
