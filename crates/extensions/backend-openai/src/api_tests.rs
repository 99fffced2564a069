use super::*;

#[test]
fn test_chat_request_serialize() {
    let request = ChatRequest {
        model: "llama3.2",
        messages: vec![ChatMessage::system("be brief"), ChatMessage::user("hi")],
        temperature: Some(0.2),
        max_tokens: None,
        stream: false,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["model"], "llama3.2");
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["messages"][1]["content"], "hi");
    assert_eq!(json["stream"], false);
    assert!(json.get("max_tokens").is_none());
}

#[test]
fn test_chat_response_text() {
    let json = r#"{
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "Hola"}, "finish_reason": "stop"}
        ],
        "usage": {"prompt_tokens": 5, "completion_tokens": 1, "total_tokens": 6}
    }"#;
    let response: ChatResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.into_text().as_deref(), Some("Hola"));
}

#[test]
fn test_chat_response_without_choices() {
    let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
    assert!(response.into_text().is_none());

    let response: ChatResponse =
        serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
    assert!(response.into_text().is_none());
}

#[test]
fn test_model_list_contains() {
    let list: ModelList = serde_json::from_str(
        r#"{"object": "list", "data": [{"id": "llama3.2", "object": "model"}, {"id": "qwen2.5"}]}"#,
    )
    .unwrap();
    assert!(list.contains("qwen2.5"));
    assert!(!list.contains("gpt-4"));
}
