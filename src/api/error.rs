use derive_builder::UninitializedFieldError;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Underlying error from reqwest: connection refused, timeout, DNS, body read.
    #[error("http error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// The server answered with a non-2xx status. The raw body is kept verbatim.
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// A response could not be decoded into the expected type.
    #[error("failed to decode {entity}: {source}")]
    Decode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
        body: String,
    },
    #[error("failed to serialize api request: {0}")]
    JsonSerialize(serde_json::Error),
    #[error("{operation} failed for '{path}'")]
    FileSystem {
        operation: &'static str,
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Client side rejection, or a builder missing a required field.
    #[error("invalid args: {0}")]
    InvalidArgument(String),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

impl ClientError {
    pub fn file_system(
        operation: &'static str,
        path: impl Into<std::path::PathBuf>,
        err: impl Into<std::io::Error>,
    ) -> Self {
        Self::FileSystem {
            operation,
            path: path.into(),
            source: err.into(),
        }
    }

    /// HTTP status for server-reported failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Reqwest(_))
    }

    /// Parses the body of a [`ClientError::Status`] as the server's usual
    /// `{"message": ...}` error object. `None` if it has another shape.
    pub fn api_error(&self) -> Option<ApiErrorBody> {
        match self {
            Self::Status { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

impl From<UninitializedFieldError> for ClientError {
    fn from(value: UninitializedFieldError) -> Self {
        ClientError::InvalidArgument(value.to_string())
    }
}

/// Error object most endpoints return alongside a 4xx/5xx status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

pub(crate) fn map_deserialization_error(
    e: serde_json::Error,
    entity: &'static str,
    bytes: &[u8],
) -> ClientError {
    let body = String::from_utf8_lossy(bytes).into_owned();
    crate::error!("failed deserialization of {}: {}", entity, body);
    ClientError::Decode {
        entity,
        source: e,
        body,
    }
}

pub(crate) fn map_serialization_error(e: serde_json::Error) -> ClientError {
    crate::error!("failed serialization: {}", e);
    ClientError::JsonSerialize(e)
}
