use super::{
    client::Client,
    config::Config,
    error::ClientResult,
    types::{CreateEmbeddingRequest, Embedding},
};

pub struct Embeddings<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Embeddings<'c, C> {
    pub fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// One embedding per input item, ordered by `index`.
    pub async fn create(&self, request: CreateEmbeddingRequest) -> ClientResult<Vec<Embedding>> {
        self.client.post_list("/embeddings", request).await
    }
}
