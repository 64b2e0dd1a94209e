use super::{
    client::Client,
    config::Config,
    error::{ClientError, ClientResult},
    types::{ChatCompletionRequest, ChatCompletionResponse},
};

pub struct Chat<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Chat<'c, C> {
    pub fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: ChatCompletionRequest) -> ClientResult<ChatCompletionResponse> {
        if request.stream == Some(true) {
            return Err(ClientError::InvalidArgument(
                "streaming chat completions are not supported, unset stream".into(),
            ));
        }
        crate::debug!(
            "chat completion for {} with {} messages",
            request.model,
            request.messages.len()
        );
        self.client.post("/v1/chat/completions", request).await
    }
}
