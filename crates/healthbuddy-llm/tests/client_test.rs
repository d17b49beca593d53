use healthbuddy_llm::{ChatClient, ChatRequest, ClientFactory, Message, OpenAIClient, ProviderConfig};
use mockito::Matcher;
use serde_json::json;

fn completion_body(content: serde_json::Value) -> String {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "llama3-70b-8192",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            },
            {
                "index": 1,
                "message": {"role": "assistant", "content": "second choice"},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 12, "completion_tokens": 8, "total_tokens": 20}
    })
    .to_string()
}

#[tokio::test]
async fn test_chat_sends_messages_and_returns_first_choice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::Json(json!({
            "model": "llama3-70b-8192",
            "messages": [
                {"role": "system", "content": "persona"},
                {"role": "user", "content": "Is coffee ok?"}
            ],
            "stream": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(json!("Haan, 1-2 cups theek hai.")))
        .expect(1)
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url("test-key", server.url()).unwrap();
    let request = ChatRequest::new(
        "llama3-70b-8192",
        vec![Message::system("persona"), Message::human("Is coffee ok?")],
    );

    let response = client.chat(request).await.unwrap();

    assert_eq!(response.content.as_deref(), Some("Haan, 1-2 cups theek hai."));
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    assert_eq!(response.usage.unwrap().total_tokens, 20);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_chat_null_content() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(serde_json::Value::Null))
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url("test-key", server.url()).unwrap();
    let response = client
        .chat(ChatRequest::new("m", vec![Message::human("hi")]))
        .await
        .unwrap();

    assert!(response.content.is_none());
}

#[tokio::test]
async fn test_chat_api_error_propagates() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Invalid API Key"}}"#)
        .create_async()
        .await;

    let client = ClientFactory::create_chat_client(
        ProviderConfig::groq("bad-key").with_base_url(server.url()),
    )
    .unwrap();

    let err = client
        .chat(ChatRequest::new("m", vec![Message::human("hi")]))
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("401"));
    assert!(msg.contains("Invalid API Key"));
}

#[tokio::test]
async fn test_chat_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url("test-key", server.url()).unwrap();
    let result = client
        .chat(ChatRequest::new("m", vec![Message::human("hi")]))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_chat_without_choices_keeps_usage() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [],
                "usage": {"prompt_tokens": 40, "completion_tokens": 0, "total_tokens": 40}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = OpenAIClient::with_base_url("test-key", server.url()).unwrap();
    let response = client
        .chat(ChatRequest::new("m", vec![Message::human("hi")]))
        .await
        .unwrap();

    assert!(response.content.is_none());
    assert!(response.finish_reason.is_none());
    let usage = response.usage.unwrap();
    assert_eq!(usage.input_tokens, 40);
    assert_eq!(usage.output_tokens, 0);
}
