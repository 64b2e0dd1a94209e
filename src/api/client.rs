use std::{borrow::Cow, path::Path};

use bytes::Bytes;
use futures::StreamExt;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::error::Category;
use tokio::io::AsyncWriteExt;
use url::Url;

use super::{
    config::{Config, CortexConfig},
    error::{map_deserialization_error, map_serialization_error, ClientError, ClientResult},
    normalize::repair_single_quotes,
    types::ListPayload,
    Chat, Embeddings, Engines, Files, Hardware, Models, Server, Threads,
};

#[derive(Debug, Clone)]
/// Client is a container for config and http_client used to make API calls.
///
/// Every call is a single request/response exchange. Nothing is retried and
/// nothing is cached, so a `Client` can be cloned and shared across tasks.
pub struct Client<C: Config = CortexConfig> {
    http_client: reqwest::Client,
    config: C,
}

impl Default for Client<CortexConfig> {
    fn default() -> Self {
        Self::new()
    }
}

impl Client<CortexConfig> {
    /// Client with default [CortexConfig]
    pub fn new() -> Self {
        Self::with_config(CortexConfig::default())
    }
}

impl<C: Config> Client<C> {
    pub fn with_config(config: C) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    /// Provide your own [client] to make HTTP requests with.
    ///
    /// [client]: reqwest::Client
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    // API groups

    /// Configuration, health and shutdown of the server process.
    pub fn server(&self) -> Server<C> {
        Server::new(self)
    }

    pub fn models(&self) -> Models<C> {
        Models::new(self)
    }

    /// Threads, and through [Threads::messages] the messages they own.
    pub fn threads(&self) -> Threads<C> {
        Threads::new(self)
    }

    pub fn hardware(&self) -> Hardware<C> {
        Hardware::new(self)
    }

    pub fn files(&self) -> Files<C> {
        Files::new(self)
    }

    /// Calls scoped to one engine, e.g. `llama-cpp`.
    pub fn engines<'c>(&'c self, engine: &str) -> Engines<'c, C> {
        Engines::new(self, engine)
    }

    pub fn embeddings(&self) -> Embeddings<C> {
        Embeddings::new(self)
    }

    pub fn chat(&self) -> Chat<C> {
        Chat::new(self)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self
            .http_client
            .request(method, self.config.url(path))
            .headers(self.config.headers());
        match self.config.timeout() {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    fn json_body<I: Serialize>(
        &self,
        builder: reqwest::RequestBuilder,
        request: &I,
    ) -> ClientResult<reqwest::Request> {
        let serialized_request = serde_json::to_string(request).map_err(map_serialization_error)?;
        crate::trace!("Serialized request: {}", serialized_request);
        Ok(builder
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serialized_request)
            .build()?)
    }

    /// Make a GET request to {path} and deserialize the response body
    pub(crate) async fn get<O>(&self, path: &str) -> ClientResult<O>
    where
        O: DeserializeOwned,
    {
        let request = self.request(reqwest::Method::GET, path).build()?;
        self.execute(request).await
    }

    /// Make a GET request to {path} and deserialize a list response
    pub(crate) async fn get_list<T>(&self, path: &str) -> ClientResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let request = self.request(reqwest::Method::GET, path).build()?;
        self.execute_list(request).await
    }

    /// Make a GET request to {path} with query parameters and deserialize a list response
    pub(crate) async fn get_list_with_query<Q, T>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<Vec<T>>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(reqwest::Method::GET, path).query(query).build()?;
        self.execute_list(request).await
    }

    /// Make a POST request to {path} and deserialize a list response
    pub(crate) async fn post_list<I, T>(&self, path: &str, request: I) -> ClientResult<Vec<T>>
    where
        I: Serialize,
        T: DeserializeOwned,
    {
        let request = self.json_body(self.request(reqwest::Method::POST, path), &request)?;
        self.execute_list(request).await
    }

    /// Make a POST request to {path} and deserialize the response body
    pub(crate) async fn post<I, O>(&self, path: &str, request: I) -> ClientResult<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let request = self.json_body(self.request(reqwest::Method::POST, path), &request)?;
        self.execute(request).await
    }

    /// Make a POST request to {path} without a body and deserialize the response body
    pub(crate) async fn post_empty<O>(&self, path: &str) -> ClientResult<O>
    where
        O: DeserializeOwned,
    {
        let request = self.request(reqwest::Method::POST, path).build()?;
        self.execute(request).await
    }

    /// Make a PATCH request to {path} and deserialize the response body
    pub(crate) async fn patch<I, O>(&self, path: &str, request: I) -> ClientResult<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let request = self.json_body(self.request(reqwest::Method::PATCH, path), &request)?;
        self.execute(request).await
    }

    /// Make a DELETE request to {path} and deserialize the response body
    pub(crate) async fn delete<O>(&self, path: &str) -> ClientResult<O>
    where
        O: DeserializeOwned,
    {
        let request = self.request(reqwest::Method::DELETE, path).build()?;
        self.execute(request).await
    }

    /// Make a DELETE request to {path} carrying a JSON body and deserialize the response body
    pub(crate) async fn delete_with_body<I, O>(&self, path: &str, request: I) -> ClientResult<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let request = self.json_body(self.request(reqwest::Method::DELETE, path), &request)?;
        self.execute(request).await
    }

    /// Make a multipart POST request to {path} and deserialize the response body
    pub(crate) async fn post_form<O>(&self, path: &str, form: reqwest::multipart::Form) -> ClientResult<O>
    where
        O: DeserializeOwned,
    {
        let request = self
            .request(reqwest::Method::POST, path)
            .multipart(form)
            .build()?;
        self.execute(request).await
    }

    /// Send a request to {path} and report the HTTP status code, whatever it is.
    /// Only transport failures are errors.
    pub(crate) async fn status_of(&self, method: reqwest::Method, path: &str) -> ClientResult<u16> {
        let request = self.request(method, path).build()?;
        let response = self.http_client.execute(request).await?;
        let status = response.status().as_u16();
        crate::debug!("{} answered {}", path, status);
        Ok(status)
    }

    /// Stream the body of a GET to {path} into `destination`, returning the
    /// number of bytes written. The file is only created once the server has
    /// answered with a success status, and is removed again if the body
    /// cannot be written out completely.
    pub(crate) async fn download<Q>(
        &self,
        path: &str,
        query: &Q,
        destination: &Path,
    ) -> ClientResult<u64>
    where
        Q: Serialize + ?Sized,
    {
        let request = self.request(reqwest::Method::GET, path).query(query).build()?;
        let response = self.http_client.execute(request).await?;

        let status = response.status();
        crate::debug!("GET {} -> {}", path, status);
        if !status.is_success() {
            let body = response.text().await?;
            return Err(status_error(status, body));
        }

        let mut file = tokio::fs::File::create(destination)
            .await
            .map_err(|e| ClientError::file_system("create file", destination, e))?;
        match write_body(response, &mut file, destination).await {
            Ok(written) => {
                crate::debug!("downloaded {} bytes to {}", written, destination.display());
                Ok(written)
            }
            Err(e) => {
                drop(file);
                crate::warn!("download to {} failed: {}", destination.display(), e);
                if let Err(remove) = tokio::fs::remove_file(destination).await {
                    crate::warn!("could not remove {}: {}", destination.display(), remove);
                }
                Err(e)
            }
        }
    }

    /// Execute a HTTP request and return the raw body of a 2xx response.
    async fn execute_raw(&self, request: reqwest::Request) -> ClientResult<Bytes> {
        let target = format!("{} {}", request.method(), request.url());
        let response = self.http_client.execute(request).await?;

        let status = response.status();
        crate::debug!("{} -> {}", target, status);
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(status_error(
                status,
                String::from_utf8_lossy(bytes.as_ref()).into_owned(),
            ));
        }

        Ok(bytes)
    }

    /// Execute a HTTP request and deserialize the response body
    async fn execute<O>(&self, request: reqwest::Request) -> ClientResult<O>
    where
        O: DeserializeOwned,
    {
        let bytes = self.execute_raw(request).await?;
        crate::trace!("Serialized response: {}", String::from_utf8_lossy(bytes.as_ref()));
        self.decode(bytes.as_ref())
    }

    /// Execute a HTTP request and deserialize a list response. Decode
    /// errors name the item type.
    async fn execute_list<T>(&self, request: reqwest::Request) -> ClientResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let bytes = self.execute_raw(request).await?;
        crate::trace!("Serialized response: {}", String::from_utf8_lossy(bytes.as_ref()));
        let items: ListPayload<T> = self.decode_as(bytes.as_ref(), std::any::type_name::<T>())?;
        Ok(items.into_items())
    }

    fn decode<O>(&self, bytes: &[u8]) -> ClientResult<O>
    where
        O: DeserializeOwned,
    {
        self.decode_as(bytes, std::any::type_name::<O>())
    }

    /// Decodes a response body. When the body is not valid JSON and the
    /// config allows it, single-quoted strings are repaired and decoding is
    /// retried once. The error of the last attempt is returned.
    fn decode_as<O>(&self, bytes: &[u8], entity: &'static str) -> ClientResult<O>
    where
        O: DeserializeOwned,
    {
        let err = match serde_json::from_slice::<O>(bytes) {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };
        if err.classify() != Category::Syntax || !self.config.repair_single_quotes() {
            return Err(map_deserialization_error(err, entity, bytes));
        }

        let text = String::from_utf8_lossy(bytes);
        let repaired = match repair_single_quotes(&text) {
            Cow::Owned(repaired) => repaired,
            Cow::Borrowed(_) => return Err(map_deserialization_error(err, entity, bytes)),
        };
        crate::warn!(
            "response for {} is not valid JSON ({}), retrying with single quotes repaired",
            entity,
            err
        );
        serde_json::from_str(&repaired).map_err(|e| map_deserialization_error(e, entity, bytes))
    }
}

async fn write_body(
    response: reqwest::Response,
    file: &mut tokio::fs::File,
    destination: &Path,
) -> ClientResult<u64> {
    let mut written = 0u64;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)
            .await
            .map_err(|e| ClientError::file_system("write file", destination, e))?;
        written += chunk.len() as u64;
    }
    file.flush()
        .await
        .map_err(|e| ClientError::file_system("flush file", destination, e))?;
    Ok(written)
}

/// Appends `segments` to `path`, percent-encoding each one so an id holding
/// `/`, `?` or `#` stays a single path segment.
pub(crate) fn join_segments(path: &str, segments: &[&str]) -> ClientResult<String> {
    let mut url = Url::parse("http://localhost")
        .map_err(|e| ClientError::InvalidArgument(e.to_string()))?;
    url.set_path(path);
    url.path_segments_mut()
        .map_err(|()| ClientError::InvalidArgument(format!("cannot extend path {path}")))?
        .extend(segments.iter().copied());
    Ok(url.path().to_string())
}

fn status_error(status: reqwest::StatusCode, body: String) -> ClientError {
    crate::trace!("error body: {}", body);
    ClientError::Status {
        status: status.as_u16(),
        body,
    }
}
