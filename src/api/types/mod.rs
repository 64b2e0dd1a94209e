//! Request and response shapes of the Cortex HTTP API.
//!
//! Field names are the wire keys. Optional fields are left out of encoded
//! requests when unset and decode to `None` when absent.
mod chat;
mod common;
mod configuration;
mod embedding;
mod engine;
mod file;
mod hardware;
mod message;
mod model;
mod thread;

pub use chat::*;
pub(crate) use common::ListPayload;
pub use common::{DeleteObjectResponse, MessageResponse, Metadata, UpdateMetadataRequest};
pub use configuration::*;
pub use embedding::*;
pub use engine::*;
pub use file::*;
pub use hardware::*;
pub use message::*;
pub use model::*;
pub use thread::*;
