// GeminiClient against a mock generateContent endpoint.

use lumiere_core::{GenerationRequest, ImagePayload};
use lumiere_error::GenerationErrorKind;
use lumiere_interface::SceneGenerator;
use lumiere_models::{GeminiClient, GeminiConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/test-model:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig::default()
        .with_base_url(server.uri())
        .with_model("test-model");
    GeminiClient::new(config, "test-key").unwrap()
}

fn request(image: Option<ImagePayload>) -> GenerationRequest {
    GenerationRequest {
        instruction: "Describe page 1".to_string(),
        schema: json!({"type": "OBJECT", "properties": {"scene_summary": {"type": "STRING"}}}),
        image,
    }
}

fn candidate_text(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn sends_schema_image_and_key() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{
                "role": "user",
                "parts": [
                    {"text": "Describe page 1"},
                    {"inlineData": {"mimeType": "image/png", "data": "AQID"}}
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {"type": "OBJECT"}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text(
            r#"{"page_number": 1, "scene_summary": "A fox wakes"}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let image = ImagePayload::from_bytes("image/png", &[1, 2, 3]);
    let prompt = client.generate(&request(Some(image))).await?;

    assert_eq!(prompt.page_number().as_deref(), Some("1"));
    assert_eq!(prompt.scene_summary().as_deref(), Some("A fox wakes"));
    Ok(())
}

#[tokio::test]
async fn service_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&request(None))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        GenerationErrorKind::ServiceError {
            status: 500,
            body: "internal".to_string()
        }
    );
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn missing_candidates_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&request(None))
        .await
        .unwrap_err();
    assert_eq!(err.kind, GenerationErrorKind::EmptyResponse);
}

#[tokio::test]
async fn candidate_without_text_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&request(None))
        .await
        .unwrap_err();
    assert_eq!(err.kind, GenerationErrorKind::EmptyResponse);
}

#[tokio::test]
async fn unparseable_text_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text("not json at all")))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&request(None))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::MalformedResponse(_)));
}

#[tokio::test]
async fn wrongly_typed_field_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_text(r#"{"characters": "nobody"}"#)),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(&request(None))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::MalformedResponse(_)));
}

#[tokio::test]
async fn fenced_json_is_tolerated() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text(
            "```json\n{\"extracted_title\": \"Foo\"}\n```",
        )))
        .mount(&server)
        .await;

    let prompt = client_for(&server).generate(&request(None)).await?;
    assert_eq!(prompt.title_hint(), Some("Foo"));
    Ok(())
}

#[tokio::test]
async fn temperature_is_sent_when_configured() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_partial_json(json!({"generationConfig": {"temperature": 0.5}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let config = GeminiConfig::default()
        .with_base_url(server.uri())
        .with_model("test-model")
        .with_temperature(0.5);
    let client = GeminiClient::new(config, "test-key")?;
    client.generate(&request(None)).await?;
    Ok(())
}

#[test]
fn missing_api_key_is_reported() {
    let config: GeminiConfig = serde_json::from_value(json!({
        "api_key_env": "LUMIERE_TEST_KEY_THAT_IS_NEVER_SET"
    }))
    .unwrap();
    let err = GeminiClient::from_env(config).unwrap_err();
    assert_eq!(
        err.kind,
        GenerationErrorKind::MissingApiKey("LUMIERE_TEST_KEY_THAT_IS_NEVER_SET".to_string())
    );
}
