mod common;
use common::*;

fn completion_json() -> serde_json::Value {
    json!({
        "id": "chatcmpl-01",
        "object": "chat.completion",
        "created": 1731503720,
        "model": "m1",
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": {"role": "assistant", "content": "Hello! How can I help?"}
        }],
        "usage": {"prompt_tokens": 8, "completion_tokens": 7, "total_tokens": 15},
        "system_fingerprint": "b4070"
    })
}

#[tokio::test]
async fn chat_completion_with_one_choice() -> TestResult {
    let mut server = mock_server().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Json(json!({
            "model": "m1",
            "messages": [{"role": "user", "content": "hello"}],
            "logprobs": false,
            "n": 1,
            "presence_penalty": 0.6,
            "response_format": {"type": "text"},
            "seed": 123
        })))
        .with_body(completion_json().to_string())
        .create_async()
        .await;

    let request = ChatCompletionRequest::builder()
        .model("m1")
        .messages(vec![ChatCompletionMessage::user("hello")])
        .n(1)
        .build()?;
    let response = client_for(&server).chat().create(request).await?;

    assert_eq!(response.choices.len(), 1);
    let choice = &response.choices[0];
    assert_eq!(choice.message.role, Role::Assistant);
    assert!(choice.message.content.is_some());
    let usage = response.usage.expect("usage");
    assert_eq!(usage.prompt_tokens + usage.completion_tokens, usage.total_tokens);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn streaming_chat_is_rejected_before_sending() -> TestResult {
    let mut server = mock_server().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let request = ChatCompletionRequest::builder()
        .model("m1")
        .messages(vec![ChatCompletionMessage::user("hello")])
        .stream(true)
        .build()?;
    let err = client_for(&server).chat().create(request).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn embedding_of_token_ids() -> TestResult {
    let dimensions = 384;
    let vector: Vec<f32> = (0..dimensions).map(|i| i as f32 / 1000.0).collect();
    let mut server = mock_server().await;
    let mock = server
        .mock("POST", "/embeddings")
        .match_body(Matcher::Json(json!({"input": [1, 2, 3], "encoding_format": "float"})))
        .with_body(
            json!({
                "object": "list",
                "model": "nomic-embed-text-v1",
                "data": [{"index": 0, "embedding": vector, "object": "embedding"}],
                "usage": {"prompt_tokens": 3, "total_tokens": 3}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let embeddings = client_for(&server)
        .embeddings()
        .create(CreateEmbeddingRequest::new(vec![1u32, 2, 3]))
        .await?;

    assert_eq!(embeddings.len(), 1);
    assert_eq!(embeddings[0].index, 0);
    assert_eq!(embeddings[0].embedding.len(), dimensions);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn embedding_batch_keeps_order() -> TestResult {
    let mut server = mock_server().await;
    server
        .mock("POST", "/embeddings")
        .match_body(Matcher::PartialJson(json!({"model": "m1", "input": ["a", "b"]})))
        .with_body(
            json!([
                {"index": 0, "embedding": [0.1, 0.2]},
                {"index": 1, "embedding": [0.3, 0.4]}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let request = CreateEmbeddingRequest::builder()
        .model("m1")
        .input(vec!["a", "b"])
        .build()?;
    let embeddings = client_for(&server).embeddings().create(request).await?;
    let indices: Vec<_> = embeddings.iter().map(|e| e.index).collect();
    assert_eq!(indices, [0, 1]);
    assert!(embeddings[1].object.is_none());
    Ok(())
}
