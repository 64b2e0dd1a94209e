#![allow(dead_code)]
pub use cortex_client::{types::*, Client, ClientError, CortexConfig};
pub use mockito::{Matcher, ServerGuard};
pub use serde_json::json;
pub use serial_test::serial;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub async fn mock_server() -> ServerGuard {
    mockito::Server::new_async().await
}

/// Client pointed at the mock server.
pub fn client_for(server: &ServerGuard) -> Client {
    Client::with_config(CortexConfig::new().with_api_base(server.url()))
}

/// An address nothing listens on.
pub fn unreachable_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn thread_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "object": "thread",
        "created_at": 1731503720,
        "metadata": {"title": title}
    })
}

pub fn message_json(id: &str, thread_id: &str, text: &str) -> serde_json::Value {
    json!({
        "id": id,
        "object": "thread.message",
        "thread_id": thread_id,
        "role": "user",
        "content": [{"type": "text", "text": {"value": text, "annotations": []}}],
        "status": "completed",
        "created_at": 1731503720
    })
}
