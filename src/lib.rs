//! # cortex_client
//!
//! Typed async client for the HTTP API of a local Cortex model server.
//!
//! ```no_run
//! use cortex_client::{types::*, Client};
//!
//! # async fn run() -> cortex_client::ClientResult<()> {
//! let client = Client::new();
//!
//! client.models().start(StartModelRequest::new("tinyllama:1b")).await?;
//!
//! let request = ChatCompletionRequest::builder()
//!     .model("tinyllama:1b")
//!     .messages(vec![ChatCompletionMessage::user("hello")])
//!     .build()?;
//! let response = client.chat().create(request).await?;
//! println!("{:?}", response.choices[0].message.content);
//!
//! let thread = client.threads().create(CreateThreadRequest::titled("Demo")).await?;
//! client
//!     .threads()
//!     .messages(&thread.id)
//!     .create(CreateMessageRequest::user("New Message"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Every call is one request/response exchange. Failures come back as
//! [ClientError]: transport problems, non-2xx statuses with the raw body,
//! and decode errors naming the expected type.

#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub mod api;
pub mod logging;

pub use api::{
    client::Client,
    config::{Config, CortexConfig},
    error::{ApiErrorBody, ClientError, ClientResult},
    types,
};
pub use logging::LoggingConfig;
