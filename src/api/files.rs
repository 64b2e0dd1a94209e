use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use super::{
    client::{join_segments, Client},
    config::Config,
    error::{ClientError, ClientResult},
    types::{DeleteObjectResponse, File},
};

#[derive(Serialize)]
struct ContentQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    thread: Option<&'a str>,
}

pub struct Files<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Files<'c, C> {
    pub fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<File>> {
        self.client.get_list("/v1/files").await
    }

    /// Uploads the file at `path` as a multipart form with a `file` part,
    /// named after the path's file name, and a `purpose` text part.
    pub async fn upload<P: AsRef<Path>>(&self, path: P, purpose: &str) -> ClientResult<File> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ClientError::InvalidArgument(format!("{} does not name a file", path.display()))
            })?;
        let contents = tokio::fs::read(path)
            .await
            .map_err(|e| ClientError::file_system("read file", path, e))?;
        crate::debug!("uploading {} ({} bytes)", file_name, contents.len());

        let form = Form::new()
            .part("file", Part::bytes(contents).file_name(file_name))
            .text("purpose", purpose.to_string());
        self.client.post_form("/v1/files", form).await
    }

    pub async fn get(&self, file_id: &str) -> ClientResult<File> {
        self.client.get(&join_segments("/v1/files", &[file_id])?).await
    }

    pub async fn delete(&self, file_id: &str) -> ClientResult<DeleteObjectResponse> {
        self.client
            .delete(&join_segments("/v1/files", &[file_id])?)
            .await
    }

    /// Streams the file's content into `destination` and returns the number
    /// of bytes written. `thread` scopes the lookup to files attached to a thread.
    pub async fn content<P: AsRef<Path>>(
        &self,
        file_id: &str,
        thread: Option<&str>,
        destination: P,
    ) -> ClientResult<u64> {
        self.client
            .download(
                &join_segments("/v1/files", &[file_id, "content"])?,
                &ContentQuery { thread },
                destination.as_ref(),
            )
            .await
    }
}
