// The pipeline wired to a real GeminiClient talking to a mock service.

use lumiere_core::{Project, SceneId, apply_patch};
use lumiere_error::{GenerationErrorKind, LumiereErrorKind};
use lumiere_models::{GeminiClient, GeminiConfig, SimulatedSynthesizer};
use lumiere_pipeline::{Pipeline, SceneRequest};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pipeline_for(server: &MockServer) -> anyhow::Result<Pipeline<GeminiClient, SimulatedSynthesizer>> {
    let config = GeminiConfig::default()
        .with_base_url(server.uri())
        .with_model("test-model");
    let client = GeminiClient::new(config, "test-key")?;
    Ok(Pipeline::new(client, SimulatedSynthesizer::new("https://videos.test")))
}

fn illustration() -> lumiere_core::ImagePayload {
    lumiere_core::ImagePayload::from_bytes("image/jpeg", &[0xFF, 0xD8, 0xFF])
}

#[tokio::test]
async fn http_500_surfaces_as_service_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream failure"))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server)?;
    let project = Project::new("Fox", "Ada");
    let project = apply_patch(&project, pipeline.ingest(&project, "s.txt", b"Page1")?.patch);

    let err = pipeline
        .generate_scene(
            &project,
            SceneId::Cover,
            SceneRequest::default().with_illustration(illustration()),
        )
        .await
        .unwrap_err();

    match err.kind() {
        LumiereErrorKind::Generation(e) => assert_eq!(
            e.kind,
            GenerationErrorKind::ServiceError {
                status: 500,
                body: "upstream failure".to_string()
            }
        ),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!project.scenes[&SceneId::Cover].is_completed());
    Ok(())
}

#[tokio::test]
async fn cover_title_flows_into_project_name() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"scene_summary\": \"Opening\", \"extracted_title\": \"Foo\"}"}]}
            }]
        })))
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server)?;
    let project = Project::new("Draft", "Ada");
    let project = apply_patch(&project, pipeline.ingest(&project, "s.txt", b"Page1")?.patch);

    let patch = pipeline
        .generate_scene(
            &project,
            SceneId::Cover,
            SceneRequest::default().with_illustration(illustration()),
        )
        .await?;
    let project = apply_patch(&project, patch);

    assert_eq!(project.name, "Foo");
    assert_eq!(project.author, "Ada");
    Ok(())
}
