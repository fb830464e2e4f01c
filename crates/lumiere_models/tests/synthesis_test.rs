use lumiere_core::StructuredPrompt;
use lumiere_error::SynthesisErrorKind;
use lumiere_interface::VideoSynthesizer;
use lumiere_models::{
    ConfiguredSynthesizer, HttpSynthesizer, SimulatedSynthesizer, SynthesisConfig,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn prompt(summary: &str) -> StructuredPrompt {
    StructuredPrompt::builder()
        .scene_summary(summary)
        .build()
        .unwrap()
}

#[tokio::test]
async fn simulated_reference_is_deterministic() -> anyhow::Result<()> {
    let synth = SimulatedSynthesizer::new("https://videos.example/");
    let a = synth.synthesize(&prompt("dawn")).await?;
    let b = synth.synthesize(&prompt("dawn")).await?;
    let c = synth.synthesize(&prompt("dusk")).await?;

    assert_eq!(a, b);
    assert_ne!(a, c);

    let name = a
        .strip_prefix("https://videos.example/")
        .and_then(|rest| rest.strip_suffix(".mp4"))
        .unwrap();
    assert_eq!(name.len(), 16);
    assert!(name.chars().all(|c| c.is_ascii_hexdigit()));
    Ok(())
}

#[tokio::test]
async fn http_backend_returns_video_url() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/render"))
        .and(body_partial_json(json!({"scene_summary": "dawn"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"videoUrl": "https://cdn/x.mp4"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let synth = HttpSynthesizer::new(format!("{}/render", server.uri()), Duration::from_secs(5))?;
    assert_eq!(synth.synthesize(&prompt("dawn")).await?, "https://cdn/x.mp4");
    Ok(())
}

#[tokio::test]
async fn http_backend_reports_service_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .mount(&server)
        .await;

    let synth = HttpSynthesizer::new(server.uri(), Duration::from_secs(5))?;
    let err = synth.synthesize(&prompt("dawn")).await.unwrap_err();
    assert_eq!(
        err.kind,
        SynthesisErrorKind::ServiceError {
            status: 503,
            body: "busy".to_string()
        }
    );
    Ok(())
}

#[tokio::test]
async fn http_backend_requires_video_url() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "queued"})))
        .mount(&server)
        .await;

    let synth = HttpSynthesizer::new(server.uri(), Duration::from_secs(5))?;
    let err = synth.synthesize(&prompt("dawn")).await.unwrap_err();
    assert!(matches!(err.kind, SynthesisErrorKind::InvalidResponse(_)));
    Ok(())
}

#[test]
fn configured_backend_follows_config() {
    let simulated = ConfiguredSynthesizer::from_config(&SynthesisConfig::default()).unwrap();
    assert_eq!(simulated.backend_name(), "simulated");

    let http = ConfiguredSynthesizer::from_config(&SynthesisConfig::http("http://localhost:9"))
        .unwrap();
    assert_eq!(http.backend_name(), "http");

    let missing: SynthesisConfig = serde_json::from_value(json!({"backend": "http"})).unwrap();
    assert!(ConfiguredSynthesizer::from_config(&missing).is_err());
}
