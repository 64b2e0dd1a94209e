use super::{
    client::{join_segments, Client},
    config::Config,
    error::ClientResult,
    types::{
        CreateMessageRequest, DeleteObjectResponse, ListMessagesQuery, Message,
        UpdateMetadataRequest,
    },
};

/// Messages of a single thread. Obtained through [super::Threads::messages].
pub struct Messages<'c, C: Config> {
    client: &'c Client<C>,
    thread_id: String,
}

impl<'c, C: Config> Messages<'c, C> {
    pub fn new(client: &'c Client<C>, thread_id: &str) -> Self {
        Self {
            client,
            thread_id: thread_id.to_string(),
        }
    }

    /// `/v1/threads/{thread_id}/messages`, followed by `tail`.
    fn path(&self, tail: &[&str]) -> ClientResult<String> {
        let mut segments = vec![self.thread_id.as_str(), "messages"];
        segments.extend_from_slice(tail);
        join_segments("/v1/threads", &segments)
    }

    pub async fn create(&self, request: CreateMessageRequest) -> ClientResult<Message> {
        self.client.post(&self.path(&[])?, request).await
    }

    /// Messages matching `query`, in the order the server returns them.
    pub async fn list(&self, query: &ListMessagesQuery) -> ClientResult<Vec<Message>> {
        self.client
            .get_list_with_query(&self.path(&[])?, query)
            .await
    }

    pub async fn get(&self, message_id: &str) -> ClientResult<Message> {
        self.client.get(&self.path(&[message_id])?).await
    }

    pub async fn delete(&self, message_id: &str) -> ClientResult<DeleteObjectResponse> {
        self.client.delete(&self.path(&[message_id])?).await
    }

    pub async fn update_metadata(
        &self,
        message_id: &str,
        request: UpdateMetadataRequest,
    ) -> ClientResult<Message> {
        self.client
            .patch(&self.path(&[message_id])?, request)
            .await
    }
}
