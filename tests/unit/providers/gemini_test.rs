use std::time::Duration;
use tractree::errors::ProviderError;
use tractree::providers::gemini::{Gemini, GeminiRequest, GeminiResponse};
use tractree::providers::Provider;

#[test]
fn test_gemini_request_builder() {
    let request = GeminiRequest::new("Translate this text to Kannada.")
        .temperature(0.2)
        .max_output_tokens(64);

    let json = serde_json::to_value(&request).expect("Failed to serialize request");

    assert_eq!(json["contents"][0]["role"], "user");
    assert_eq!(json["contents"][0]["parts"][0]["text"], "Translate this text to Kannada.");
    assert_eq!(json["generationConfig"]["maxOutputTokens"], 64);
    assert!((json["generationConfig"]["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    assert_eq!(request.prompt(), Some("Translate this text to Kannada."));
}

#[test]
fn test_gemini_request_withoutSampling_shouldOmitGenerationConfig() {
    let client = Gemini::new("key", "", "gemini-1.5-flash", None);
    let request = client.build_request("Hello");

    let json = serde_json::to_string(&request).unwrap();

    assert!(!json.contains("generationConfig"));
    assert!(json.contains(r#""text":"Hello""#));
}

#[test]
fn test_gemini_extract_text() {
    let body = r#"{
        "candidates": [
            {
                "content": { "role": "model", "parts": [ { "text": "\"ನಮ" }, { "text": "ಸ್ಕಾರ\"" } ] },
                "finishReason": "STOP"
            },
            {
                "content": { "role": "model", "parts": [ { "text": "ignored" } ] }
            }
        ],
        "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 3, "totalTokenCount": 15 }
    }"#;
    let response: GeminiResponse = serde_json::from_str(body).expect("Response should parse");

    assert_eq!(Gemini::extract_text(&response), "\"ನಮಸ್ಕಾರ\"");
    assert_eq!(response.usage_metadata.unwrap().prompt_token_count, 12);
}

#[test]
fn test_gemini_extract_text_withoutCandidates_shouldBeEmpty() {
    let response: GeminiResponse = serde_json::from_str(r#"{ "candidates": [] }"#).unwrap();
    assert_eq!(Gemini::extract_text(&response), "");
}

#[tokio::test]
async fn test_gemini_complete_withUnreachableEndpoint_shouldFail() {
    // Nothing listens on port 1
    let client = Gemini::new("key", "http://127.0.0.1:1", "gemini-1.5-flash", Some(Duration::from_secs(5)));
    let request = client.build_request("Hello");

    let result = client.complete(request).await;

    assert!(matches!(
        result,
        Err(ProviderError::ConnectionError(_)) | Err(ProviderError::RequestFailed(_))
    ));
}
