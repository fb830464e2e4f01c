//! Ingestion and generation command handlers.

use super::{CliLibrary, CliPipeline};
use lumiere::{
    ImagePayload, IngestError, IngestErrorKind, LumiereResult, ProjectSession, ScenePhase,
    SceneId, SceneRequest, apply_patch, ingest_document, mime_for_extension, read_document,
};
use std::path::Path;
use tracing::debug;

/// Ingest a document, generating the cover when the document carries one.
pub async fn ingest(
    library: CliLibrary,
    pipeline: CliPipeline,
    id: &str,
    file: &Path,
) -> LumiereResult<()> {
    let mut session = ProjectSession::open(library, pipeline, id).await?;
    let cover_error = session.ingest_path(file).await?;

    let project = session.project();
    println!(
        "Ingested {} pages into {} ({})",
        project.total_pages, project.name, project.id
    );
    match cover_error {
        Some(e) => eprintln!("Cover was not generated: {}", e),
        None if session.phase(&SceneId::Cover) == ScenePhase::Completed => {
            println!("Cover generated from the document's cover image")
        }
        None => {}
    }
    Ok(())
}

/// Ingest a document that cannot carry a cover, without any model service.
pub async fn ingest_text(library: &CliLibrary, id: &str, file: &Path) -> LumiereResult<()> {
    let project = library.get(id).await?;
    let (filename, bytes) = read_document(file).await?;
    let ingestion = ingest_document(&project, &filename, &bytes)?;
    let project = apply_patch(&project, ingestion.patch);
    library.put(&project).await?;

    println!(
        "Ingested {} pages into {} ({})",
        project.total_pages, project.name, project.id
    );
    Ok(())
}

/// Generate or regenerate one scene and print its video reference.
pub async fn generate(
    library: CliLibrary,
    pipeline: CliPipeline,
    id: &str,
    scene_id: SceneId,
    illustration: Option<&Path>,
    feedback: Option<String>,
) -> LumiereResult<()> {
    let mut request = SceneRequest::default();
    if let Some(path) = illustration {
        request = request.with_illustration(read_illustration(path).await?);
    }
    if let Some(feedback) = feedback {
        request = request.with_feedback(feedback);
    }

    let mut session = ProjectSession::open(library, pipeline, id).await?;
    session.generate(scene_id, request).await?;

    if let Some(url) = session
        .project()
        .scene(&scene_id)
        .and_then(|scene| scene.video_url())
    {
        println!("{}: {}", scene_id, url);
    }
    match session.navigation()? {
        nav if nav.is_finished() => println!("All scenes completed."),
        nav => println!("Next: {}", nav.current()),
    }
    Ok(())
}

async fn read_illustration(path: &Path) -> LumiereResult<ImagePayload> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let mime_type = mime_for_extension(extension).ok_or_else(|| {
        IngestError::new(IngestErrorKind::UnsupportedFormat(extension.to_string()))
    })?;

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        IngestError::new(IngestErrorKind::Read(format!("{}: {}", path.display(), e)))
    })?;
    debug!(mime_type, size = bytes.len(), "Loaded illustration");
    Ok(ImagePayload::from_bytes(mime_type, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere::{FileProjectStore, ProjectLibrary};
    use tempfile::TempDir;

    #[tokio::test]
    async fn text_ingest_saves_pending_scenes() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let library = ProjectLibrary::new(FileProjectStore::new(dir.path().join("projects")));
        let project = library.create("", "").await?;

        let file = dir.path().join("The Fox.txt");
        tokio::fs::write(&file, "The fox woke.\n\nThe fox ran.").await?;
        ingest_text(&library, &project.id, &file).await?;

        let stored = library.get(&project.id).await?;
        assert_eq!(stored.total_pages, 2);
        assert_eq!(stored.scenes.len(), 4);
        assert_eq!(stored.name, "The Fox");
        assert_eq!(stored.author, "Unknown");
        assert!(stored.scenes.values().all(|scene| !scene.is_completed()));
        Ok(())
    }
}
