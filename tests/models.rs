mod common;
use common::*;

#[tokio::test]
async fn delete_model() -> TestResult {
    let mut server = mock_server().await;
    let mock = server
        .mock("DELETE", "/v1/models/x")
        .with_body(r#"{"deleted": true, "id": "x", "object": "model"}"#)
        .create_async()
        .await;

    let deleted = client_for(&server).models().delete("x").await?;
    assert!(deleted.deleted);
    assert_eq!(deleted.id, "x");
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn list_and_get_models() -> TestResult {
    let mut server = mock_server().await;
    server
        .mock("GET", "/v1/models")
        .with_body(
            json!({
                "object": "list",
                "data": [
                    {"id": "tinyllama:1b", "engine": "llama-cpp", "state": "loaded"},
                    {"id": "gpt-4o", "engine": "openai", "state": "remote"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/v1/models/tinyllama:1b")
        .with_body(json!({"id": "tinyllama:1b", "ctx_len": 2048}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let models = client.models().list().await?;
    assert_eq!(models.len(), 2);
    assert_eq!(models[0].state, Some(ModelState::Loaded));
    assert_eq!(models[1].state, Some(ModelState::Unknown));

    let model = client.models().get("tinyllama:1b").await?;
    assert_eq!(model.ctx_len, Some(2048));
    assert!(model.engine.is_none());
    Ok(())
}

#[tokio::test]
async fn start_and_stop_model() -> TestResult {
    let mut server = mock_server().await;
    let start = server
        .mock("POST", "/v1/models/start")
        .match_body(Matcher::Json(json!({"model": "tinyllama:1b", "ctx_len": 4096})))
        .with_body(r#"{"message": "Started successfully!"}"#)
        .create_async()
        .await;
    let stop = server
        .mock("POST", "/v1/models/stop")
        .match_body(Matcher::Json(json!({"model": "tinyllama:1b"})))
        .with_body(r#"{"message": "Stopped successfully!"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = StartModelRequest::builder()
        .model("tinyllama:1b")
        .ctx_len(4096u32)
        .build()?;
    let started = client.models().start(request).await?;
    assert_eq!(started.message, "Started successfully!");
    client.models().stop("tinyllama:1b").await?;

    start.assert_async().await;
    stop.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn pull_and_cancel() -> TestResult {
    let mut server = mock_server().await;
    let pull = server
        .mock("POST", "/v1/models/pull")
        .match_body(Matcher::Json(json!({"model": "tinyllama:1b"})))
        .with_body(
            json!({
                "message": "Model start downloading!",
                "task": {
                    "id": "tinyllama:1b",
                    "type": "Model",
                    "items": [{
                        "id": "model.gguf",
                        "download_url": "https://huggingface.co/x/model.gguf",
                        "local_path": "/models/tinyllama/model.gguf",
                        "bytes": 668788096,
                        "downloaded_bytes": 0
                    }]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;
    let cancel = server
        .mock("DELETE", "/v1/models/pull")
        .match_body(Matcher::Json(json!({"taskId": "tinyllama:1b"})))
        .with_body(r#"{"message": "Download stopped"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let pulled = client.models().pull(PullModelRequest::new("tinyllama:1b")).await?;
    assert_eq!(pulled.task.kind, "Model");
    assert_eq!(pulled.task.items[0].bytes, Some(668788096));
    assert_eq!(pulled.task.items[0].checksum, None);

    client.models().stop_pull(&pulled.task.id).await?;
    pull.assert_async().await;
    cancel.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn register_models() -> TestResult {
    let mut server = mock_server().await;
    let add = server
        .mock("POST", "/v1/models/add")
        .match_body(Matcher::Json(json!({
            "model": "gpt-4o",
            "engine": "openai",
            "remote_model": "gpt-4o-2024-08-06"
        })))
        .with_body(r#"{"message": "Model added"}"#)
        .create_async()
        .await;
    let import = server
        .mock("POST", "/v1/models/import")
        .match_body(Matcher::Json(json!({
            "model": "local-model",
            "model_path": "/data/model.gguf",
            "option": "symlink"
        })))
        .with_body(
            json!({
                "message": "Model is imported successfully!",
                "model_handle": "local-model",
                "model_path": "/data/model.gguf"
            })
            .to_string(),
        )
        .create_async()
        .await;
    let source = server
        .mock("POST", "/v1/models/sources")
        .match_body(Matcher::Json(json!({"source": "cortexso/tinyllama"})))
        .with_body(r#"{"message": "Added"}"#)
        .create_async()
        .await;
    let remove_source = server
        .mock("DELETE", "/v1/models/sources")
        .match_body(Matcher::Json(json!({"source": "cortexso/tinyllama"})))
        .with_body(r#"{"message": "Removed"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .models()
        .add_remote(AddRemoteModelRequest::new("gpt-4o", "openai", "gpt-4o-2024-08-06"))
        .await?;

    let mut request = ImportModelRequest::new("local-model", "/data/model.gguf");
    request.option = Some(ImportOption::Symlink);
    let imported = client.models().import(request).await?;
    assert_eq!(imported.model_handle.as_deref(), Some("local-model"));

    client.models().add_source("cortexso/tinyllama").await?;
    client.models().remove_source("cortexso/tinyllama").await?;

    add.assert_async().await;
    import.assert_async().await;
    source.assert_async().await;
    remove_source.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn update_model_sends_only_set_fields() -> TestResult {
    let mut server = mock_server().await;
    let mock = server
        .mock("PATCH", "/v1/models/tinyllama:1b")
        .match_body(Matcher::Json(json!({"name": "Tiny"})))
        .with_body(r#"{"message": "Updated"}"#)
        .create_async()
        .await;

    let request = UpdateModelRequest::builder().name("Tiny").build()?;
    client_for(&server)
        .models()
        .update("tinyllama:1b", request)
        .await?;
    mock.assert_async().await;
    Ok(())
}
