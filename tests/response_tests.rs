use docsum::ai::response::{ModelResponse, ResponseFormatError, parse_summary};
use serde_json::json;

/// Tests for response-shape parsing. The inference service returns different
/// envelope shapes depending on the model family behind the identifier, and
/// every recognized shape must yield the same summary text.

fn response_from(value: serde_json::Value) -> ModelResponse {
    ModelResponse::new(serde_json::to_vec(&value).unwrap())
}

#[test]
fn test_direct_content_string() {
    let response = response_from(json!({"content": "Hello summary"}));
    assert_eq!(parse_summary(&response).unwrap(), "Hello summary");
}

#[test]
fn test_claude_content_blocks() {
    let response = response_from(json!({
        "content": [{"type": "text", "text": "Hello summary"}]
    }));
    assert_eq!(parse_summary(&response).unwrap(), "Hello summary");
}

#[test]
fn test_multiple_text_blocks_concatenate() {
    let response = response_from(json!({
        "content": [
            {"type": "text", "text": "Part one"},
            {"type": "tool_use", "id": "t1", "name": "noop", "input": {}},
            {"type": "text", "text": " and part two"}
        ]
    }));
    assert_eq!(parse_summary(&response).unwrap(), "Part one and part two");
}

#[test]
fn test_generation_field() {
    let response = response_from(json!({"generation": "Generated text"}));
    assert_eq!(parse_summary(&response).unwrap(), "Generated text");
}

#[test]
fn test_completion_field() {
    let response = response_from(json!({"completion": " Completed text "}));
    assert_eq!(
        parse_summary(&response).unwrap(),
        "Completed text",
        "Surrounding whitespace should be trimmed"
    );
}

#[test]
fn test_output_field() {
    let response = response_from(json!({"output": "Output text"}));
    assert_eq!(parse_summary(&response).unwrap(), "Output text");
}

#[test]
fn test_chat_choices_text() {
    let response = response_from(json!({"choices": [{"text": "Choice text"}]}));
    assert_eq!(parse_summary(&response).unwrap(), "Choice text");
}

#[test]
fn test_chat_choices_message_content() {
    let response = response_from(json!({
        "choices": [{"message": {"role": "assistant", "content": "Message content"}}]
    }));
    assert_eq!(parse_summary(&response).unwrap(), "Message content");
}

#[test]
fn test_chat_choices_message_content_blocks() {
    let response = response_from(json!({
        "choices": [{"message": {"content": [{"type": "text", "text": "Block content"}]}}]
    }));
    assert_eq!(parse_summary(&response).unwrap(), "Block content");
}

#[test]
fn test_chat_choices_empty_text_falls_through_to_message() {
    // Some providers send an empty `text` alongside the real message.
    let response = response_from(json!({
        "choices": [{"text": "", "message": {"content": "Real content"}}]
    }));
    assert_eq!(parse_summary(&response).unwrap(), "Real content");
}

#[test]
fn test_direct_field_probed_before_blocks() {
    // `content` holding an array is not a direct string match, so probing
    // moves on to `generation` before the block matcher ever runs.
    let response = response_from(json!({
        "generation": "direct wins",
        "content": [{"type": "text", "text": "blocks lose"}]
    }));
    assert_eq!(parse_summary(&response).unwrap(), "direct wins");
}

#[test]
fn test_empty_summary_is_valid() {
    let response = response_from(json!({"content": ""}));
    assert_eq!(parse_summary(&response).unwrap(), "");
}

#[test]
fn test_whitespace_only_summary_trims_to_empty() {
    let response = response_from(json!({"content": "   \n\t  "}));
    assert_eq!(parse_summary(&response).unwrap(), "");
}

#[test]
fn test_unrecognized_shape_is_an_error() {
    let response = response_from(json!({"foo": "bar"}));
    let err = parse_summary(&response).unwrap_err();
    assert!(
        matches!(err, ResponseFormatError::UnrecognizedShape),
        "Unexpected error for unknown shape: {err}"
    );
}

#[test]
fn test_content_blocks_without_text_are_unrecognized() {
    let response = response_from(json!({
        "content": [{"type": "tool_use", "id": "t1", "name": "noop", "input": {}}]
    }));
    assert!(matches!(
        parse_summary(&response).unwrap_err(),
        ResponseFormatError::UnrecognizedShape
    ));
}

#[test]
fn test_malformed_body_is_an_error() {
    let response = ModelResponse::new(b"not json at all".to_vec());
    let err = parse_summary(&response).unwrap_err();
    assert!(
        matches!(err, ResponseFormatError::MalformedBody(_)),
        "Unexpected error for malformed body: {err}"
    );
}

#[test]
fn test_non_object_body_is_unrecognized() {
    let response = response_from(json!(["just", "an", "array"]));
    assert!(matches!(
        parse_summary(&response).unwrap_err(),
        ResponseFormatError::UnrecognizedShape
    ));
}
