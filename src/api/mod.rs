pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod types;

mod chat;
mod embeddings;
mod engines;
mod files;
mod hardware;
mod messages;
mod models;
mod server;
mod threads;

pub use chat::Chat;
pub use embeddings::Embeddings;
pub use engines::Engines;
pub use files::Files;
pub use hardware::Hardware;
pub use messages::Messages;
pub use models::Models;
pub use server::Server;
pub use threads::Threads;
