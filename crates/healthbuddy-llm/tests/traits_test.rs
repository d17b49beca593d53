use healthbuddy_llm::{ChatRequest, ChatResponse, Message};

#[test]
fn test_chat_request_creation() {
    let messages = vec![Message::system("persona"), Message::human("Hello")];
    let request = ChatRequest::new("llama3-70b-8192", messages.clone());

    assert_eq!(request.model, "llama3-70b-8192");
    assert_eq!(request.messages, messages);
}

#[test]
fn test_chat_response_text() {
    let response = ChatResponse::text("Drink water");

    assert_eq!(response.content.as_deref(), Some("Drink water"));
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    assert!(response.usage.is_none());
}
