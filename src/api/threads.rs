use super::{
    client::{join_segments, Client},
    config::Config,
    error::ClientResult,
    types::{CreateThreadRequest, DeleteObjectResponse, Thread, UpdateMetadataRequest},
    Messages,
};

pub struct Threads<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Threads<'c, C> {
    pub fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Messages of the thread `thread_id`.
    pub fn messages(&self, thread_id: &str) -> Messages<'c, C> {
        Messages::new(self.client, thread_id)
    }

    pub async fn create(&self, request: CreateThreadRequest) -> ClientResult<Thread> {
        self.client.post("/v1/threads", request).await
    }

    pub async fn list(&self) -> ClientResult<Vec<Thread>> {
        self.client.get_list("/v1/threads").await
    }

    pub async fn get(&self, thread_id: &str) -> ClientResult<Thread> {
        self.client.get(&thread_path(thread_id)?).await
    }

    /// Deletes the thread together with all of its messages.
    pub async fn delete(&self, thread_id: &str) -> ClientResult<DeleteObjectResponse> {
        self.client.delete(&thread_path(thread_id)?).await
    }

    /// Replaces the thread's metadata and returns the updated thread.
    pub async fn update_metadata(
        &self,
        thread_id: &str,
        request: UpdateMetadataRequest,
    ) -> ClientResult<Thread> {
        self.client.patch(&thread_path(thread_id)?, request).await
    }
}

fn thread_path(thread_id: &str) -> ClientResult<String> {
    join_segments("/v1/threads", &[thread_id])
}
