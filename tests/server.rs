mod common;
use common::*;

#[tokio::test]
async fn health_and_terminate_report_status() -> TestResult {
    let mut server = mock_server().await;
    server
        .mock("GET", "/healthz")
        .with_status(200)
        .create_async()
        .await;
    let destroy = server
        .mock("DELETE", "/processManager/destroy")
        .with_status(503)
        .with_body("shutting down")
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.server().health().await?, 200);
    assert_eq!(client.server().terminate().await?, 503);
    destroy.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn configuration_round_trip() -> TestResult {
    let mut server = mock_server().await;
    server
        .mock("GET", "/v1/configs")
        .with_body(
            json!({
                "allowed_origins": ["http://localhost:39281"],
                "cors": true,
                "proxy_url": "",
                "verify_peer_ssl": true,
                "huggingface_token": ""
            })
            .to_string(),
        )
        .create_async()
        .await;
    let update = server
        .mock("POST", "/v1/configs")
        .match_body(Matcher::Json(json!({"cors": false})))
        .with_body(
            json!({"message": "Configuration updated successfully", "config": {"cors": false}})
                .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let config = client.server().get_configuration().await?;
    assert_eq!(config.cors, Some(true));
    assert!(config.github_token.is_none());

    let change = Configuration {
        cors: Some(false),
        ..Default::default()
    };
    let updated = client.server().update_configuration(change).await?;
    assert_eq!(updated.config.and_then(|c| c.cors), Some(false));
    update.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn hardware_and_gpu_activation() -> TestResult {
    let mut server = mock_server().await;
    server
        .mock("GET", "/v1/hardware")
        .with_body(
            json!({
                "cpu": {"arch": "arm64", "cores": 10, "instructions": ["neon"], "model": "Apple M1 Pro"},
                "os": {"name": "macOS", "version": "15.1"},
                "gpus": []
            })
            .to_string(),
        )
        .create_async()
        .await;
    let activate = server
        .mock("POST", "/v1/hardware/activate")
        .match_body(Matcher::Json(json!({"gpus": [0, 1]})))
        .with_body(json!({"message": "The hardware configuration has been activated.", "activated_gpus": [0, 1]}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let hardware = client.hardware().get().await?;
    assert_eq!(hardware.cpu.cores, 10);
    assert_eq!(hardware.gpus, Some(vec![]));
    assert!(hardware.ram.is_none());

    let activated = client.hardware().activate_gpus(vec![0, 1]).await?;
    assert_eq!(activated.activated_gpus, Some(vec![0, 1]));
    activate.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn engine_management() -> TestResult {
    let mut server = mock_server().await;
    server
        .mock("GET", "/v1/engines/llama-cpp")
        .with_body(
            json!([
                {"engine": "llama-cpp", "name": "linux-amd64-avx2", "version": "v0.1.40"},
                {"engine": "llama-cpp", "name": "linux-amd64-noavx", "version": "v0.1.40"}
            ])
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/v1/engines/llama-cpp/default")
        .with_body(json!({"engine": "llama-cpp", "variant": "linux-amd64-avx2", "version": "v0.1.40"}).to_string())
        .create_async()
        .await;
    let set_default = server
        .mock("POST", "/v1/engines/llama-cpp/default")
        .match_body(Matcher::Json(json!({"variant": "linux-amd64-noavx", "version": "v0.1.40"})))
        .with_body(r#"{"message": "Engine set as default successfully"}"#)
        .create_async()
        .await;
    let install = server
        .mock("POST", "/v1/engines/llama-cpp/install")
        .match_body(Matcher::Json(json!({})))
        .with_body(r#"{"message": "Engine starts installing!"}"#)
        .create_async()
        .await;
    let uninstall = server
        .mock("DELETE", "/v1/engines/llama-cpp/install")
        .match_body(Matcher::Json(json!({"variant": "linux-amd64-noavx", "version": "v0.1.40"})))
        .with_body(r#"{"message": "Engine uninstalled successfully!"}"#)
        .create_async()
        .await;
    let load = server
        .mock("POST", "/v1/engines/llama-cpp/load")
        .with_body(r#"{"message": "Engine loaded successfully"}"#)
        .create_async()
        .await;
    let unload = server
        .mock("DELETE", "/v1/engines/llama-cpp/load")
        .with_body(r#"{"message": "Engine unloaded successfully"}"#)
        .create_async()
        .await;
    let update = server
        .mock("POST", "/v1/engines/llama-cpp/update")
        .with_body(r#"{"message": "Engine updated successfully"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let engines = client.engines("llama-cpp");

    let installed = engines.list_installed().await?;
    assert_eq!(installed.len(), 2);
    assert_eq!(installed[1].variant_name(), Some("linux-amd64-noavx"));
    assert_eq!(engines.get_default().await?.variant_name(), Some("linux-amd64-avx2"));

    let variant = EngineVariantRequest::new("linux-amd64-noavx", "v0.1.40");
    engines.set_default_variant(variant.clone()).await?;
    engines.install(InstallEngineRequest::default()).await?;
    engines.uninstall(variant).await?;
    engines.load().await?;
    engines.unload().await?;
    engines.update().await?;

    for mock in [set_default, install, uninstall, load, unload, update] {
        mock.assert_async().await;
    }
    Ok(())
}

#[tokio::test]
async fn engine_releases() -> TestResult {
    let mut server = mock_server().await;
    server
        .mock("GET", "/v1/engines/llama-cpp/releases")
        .with_body(
            json!([
                {"name": "v0.1.40", "draft": false, "prerelease": false, "published_at": "2024-11-20T10:00:00Z"},
                {"name": "v0.1.39", "draft": false, "prerelease": true}
            ])
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/v1/engines/llama-cpp/releases/latest")
        .with_body(
            json!([{
                "name": "cortex.llamacpp-0.1.40-linux-amd64-avx2.tar.gz",
                "size": 42153360,
                "download_count": 1024,
                "browser_download_url": "https://github.com/janhq/cortex.llamacpp/releases/download/v0.1.40/a.tar.gz"
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let releases = client.engines("llama-cpp").list_releases().await?;
    assert_eq!(releases[0].name, "v0.1.40");
    assert_eq!(releases[1].prerelease, Some(true));

    let assets = client.engines("llama-cpp").latest_release().await?;
    assert_eq!(assets[0].size, Some(42153360));
    assert!(assets[0].created_at.is_none());
    Ok(())
}
