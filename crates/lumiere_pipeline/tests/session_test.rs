// ProjectSession: commits, transient phases and navigation.

mod test_utils;

use lumiere_core::SceneId;
use lumiere_error::{GenerationErrorKind, LumiereErrorKind, PipelineErrorKind};
use lumiere_models::SimulatedSynthesizer;
use lumiere_pipeline::{Pipeline, ProjectSession, ScenePhase, SceneRequest};
use lumiere_storage::{FileProjectStore, InMemoryProjectStore, ProjectLibrary};
use tempfile::TempDir;
use test_utils::{StubGenerator, StubResponse, cover_prompt, illustration};

type Session = ProjectSession<InMemoryProjectStore, StubGenerator, SimulatedSynthesizer>;

async fn open_session(generator: StubGenerator) -> anyhow::Result<Session> {
    let library = ProjectLibrary::new(InMemoryProjectStore::new());
    let project = library.create("Fox", "Ada").await?;
    let pipeline = Pipeline::new(generator, SimulatedSynthesizer::new("https://videos.test"));
    Ok(ProjectSession::open(library, pipeline, &project.id).await?)
}

fn with_image() -> SceneRequest {
    SceneRequest::default().with_illustration(illustration())
}

#[tokio::test]
async fn open_unknown_project_fails() {
    let library = ProjectLibrary::new(InMemoryProjectStore::new());
    let pipeline = Pipeline::new(StubGenerator::echo(), SimulatedSynthesizer::new("v"));
    let result = ProjectSession::open(library, pipeline, "nope").await;
    let err = match result {
        Ok(_) => panic!("opening a missing project should fail"),
        Err(e) => e,
    };
    assert!(matches!(
        err.kind(),
        LumiereErrorKind::Pipeline(e) if matches!(e.kind, PipelineErrorKind::ProjectNotFound(_))
    ));
}

#[tokio::test]
async fn fresh_project_is_not_ingested() -> anyhow::Result<()> {
    let session = open_session(StubGenerator::echo()).await?;
    assert_eq!(session.phase(&SceneId::Cover), ScenePhase::NotIngested);
    assert!(session.active().is_none());
    assert!(session.navigation().is_err());
    Ok(())
}

#[tokio::test]
async fn ingest_persists_pending_scenes() -> anyhow::Result<()> {
    let mut session = open_session(StubGenerator::echo()).await?;
    let cover_error = session.ingest_bytes("story.txt", b"Page1\n\nPage2").await?;
    assert!(cover_error.is_none());

    assert_eq!(session.active(), Some(SceneId::Cover));
    assert_eq!(session.phase(&SceneId::Page(1)), ScenePhase::Pending);

    let stored = session.library().get(&session.project().id).await?;
    assert_eq!(stored.total_pages, 2);
    assert_eq!(stored.scenes.len(), 4);
    Ok(())
}

#[tokio::test]
async fn ingest_path_reads_document() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("fox.md");
    tokio::fs::write(&path, "# The Fox\n\nThe fox woke.\n\nThe fox ran.").await?;

    let mut session = open_session(StubGenerator::echo()).await?;
    session.ingest_path(&path).await?;
    assert_eq!(session.project().total_pages, 3);
    Ok(())
}

#[tokio::test]
async fn ingest_path_rejects_unsupported_extension() -> anyhow::Result<()> {
    let mut session = open_session(StubGenerator::echo()).await?;
    let err = session.ingest_path("/does/not/exist.odt").await.unwrap_err();
    assert!(matches!(err.kind(), LumiereErrorKind::Ingest(_)));
    assert!(!session.project().is_ingested());
    Ok(())
}

#[tokio::test]
async fn generate_commits_and_advances() -> anyhow::Result<()> {
    let mut session = open_session(StubGenerator::fixed(cover_prompt("Foo", "Bar"))).await?;
    session.ingest_bytes("story.txt", b"Page1\n\nPage2").await?;

    session.generate(SceneId::Cover, with_image()).await?;

    assert_eq!(session.phase(&SceneId::Cover), ScenePhase::Completed);
    assert_eq!(session.active(), Some(SceneId::Page(1)));
    assert_eq!(session.project().name, "Foo");

    let stored = session.library().get(&session.project().id).await?;
    assert_eq!(stored.name, "Foo");
    assert!(stored.scenes[&SceneId::Cover].is_completed());
    Ok(())
}

#[tokio::test]
async fn missing_illustration_marks_failed_and_keeps_pending() -> anyhow::Result<()> {
    let mut session = open_session(StubGenerator::echo()).await?;
    session.ingest_bytes("story.txt", b"Page1\n\nPage2").await?;
    session.generate(SceneId::Cover, with_image()).await?;

    let err = session
        .generate(SceneId::Page(1), SceneRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        LumiereErrorKind::Pipeline(e) if matches!(e.kind, PipelineErrorKind::MissingIllustration(_))
    ));
    assert_eq!(session.phase(&SceneId::Page(1)), ScenePhase::Failed);
    assert!(!session.project().scenes[&SceneId::Page(1)].is_completed());

    // A later success clears the failure.
    session.generate(SceneId::Page(1), with_image()).await?;
    assert_eq!(session.phase(&SceneId::Page(1)), ScenePhase::Completed);
    Ok(())
}

#[tokio::test]
async fn unknown_scene_is_rejected_without_a_phase() -> anyhow::Result<()> {
    let mut session = open_session(StubGenerator::echo()).await?;
    session.ingest_bytes("story.txt", b"Page1\n\nPage2").await?;

    let err = session
        .generate(SceneId::Page(9), with_image())
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        LumiereErrorKind::Pipeline(e) if matches!(e.kind, PipelineErrorKind::UnknownScene(_))
    ));
    assert_ne!(session.phase(&SceneId::Page(9)), ScenePhase::Failed);
    assert_eq!(session.phase(&SceneId::Cover), ScenePhase::Pending);
    Ok(())
}

#[tokio::test]
async fn generate_before_ingest_leaves_phase_not_ingested() -> anyhow::Result<()> {
    let mut session = open_session(StubGenerator::echo()).await?;

    let err = session
        .generate(SceneId::Cover, with_image())
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        LumiereErrorKind::Pipeline(e) if matches!(e.kind, PipelineErrorKind::NotIngested)
    ));
    assert_eq!(session.phase(&SceneId::Cover), ScenePhase::NotIngested);
    Ok(())
}

#[tokio::test]
async fn service_error_leaves_store_untouched() -> anyhow::Result<()> {
    let mut session = open_session(StubGenerator::sequence(vec![
        StubResponse::Success(cover_prompt("Foo", "Bar")),
        StubResponse::Error(GenerationErrorKind::ServiceError {
            status: 500,
            body: "boom".to_string(),
        }),
    ]))
    .await?;
    session.ingest_bytes("story.txt", b"Page1").await?;
    session.generate(SceneId::Cover, with_image()).await?;
    let before = session.library().get(&session.project().id).await?;

    let err = session.generate(SceneId::Page(1), with_image()).await.unwrap_err();
    assert!(matches!(err.kind(), LumiereErrorKind::Generation(e) if e.status() == Some(500)));

    let after = session.library().get(&session.project().id).await?;
    assert_eq!(after, before);
    assert_eq!(session.project(), &before);
    assert_eq!(session.phase(&SceneId::Page(1)), ScenePhase::Failed);
    Ok(())
}

#[tokio::test]
async fn select_respects_gate_and_reviewing() -> anyhow::Result<()> {
    let mut session = open_session(StubGenerator::echo()).await?;
    session.ingest_bytes("story.txt", b"Page1\n\nPage2").await?;

    assert!(session.select(SceneId::Page(2)).is_err());
    assert!(session.select(SceneId::Page(7)).is_err());

    session.generate(SceneId::Cover, with_image()).await?;
    session.select(SceneId::Cover)?;
    assert!(session.reviewing());
    assert_eq!(session.active(), Some(SceneId::Cover));

    session.set_reviewing(false);
    assert_eq!(session.active(), Some(SceneId::Page(1)));
    Ok(())
}

#[tokio::test]
async fn regenerating_while_reviewing_returns_to_current() -> anyhow::Result<()> {
    let mut session = open_session(StubGenerator::echo()).await?;
    session.ingest_bytes("story.txt", b"Page1\n\nPage2").await?;
    session.generate(SceneId::Cover, with_image()).await?;
    session.generate(SceneId::Page(1), with_image()).await?;

    session.select(SceneId::Cover)?;
    session
        .generate(SceneId::Cover, SceneRequest::default().with_feedback("warmer"))
        .await?;
    assert!(!session.reviewing());
    assert_eq!(session.active(), Some(SceneId::Page(2)));
    Ok(())
}

#[tokio::test]
async fn full_walkthrough_with_file_store() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let library = ProjectLibrary::new(FileProjectStore::new(dir.path()));
    let project = library.create("", "").await?;
    let pipeline = Pipeline::new(StubGenerator::echo(), SimulatedSynthesizer::new("v"));
    let mut session = ProjectSession::open(library, pipeline, &project.id).await?;

    session.ingest_bytes("moon.txt", b"One\n\nTwo\n\nThree").await?;
    assert_eq!(session.project().name, "moon");
    assert_eq!(session.project().author, "Unknown");

    while let Some(scene) = session.active() {
        if session.project().scenes[&scene].is_completed() {
            break;
        }
        let request = if scene == SceneId::End {
            SceneRequest::default()
        } else {
            with_image()
        };
        session.generate(scene, request).await?;
    }

    let nav = session.navigation()?;
    assert!(nav.is_finished());
    assert_eq!(session.project().completed_count(), 5);

    let reopened = ProjectLibrary::new(FileProjectStore::new(dir.path()))
        .get(&project.id)
        .await?;
    assert_eq!(&reopened, session.project());
    Ok(())
}
