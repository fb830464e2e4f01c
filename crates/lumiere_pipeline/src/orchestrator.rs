//! Pipeline orchestration.

use crate::PromptBuilder;
use derive_setters::Setters;
use lumiere_core::{
    ImagePayload, Navigation, Project, ProjectPatch, Scene, SceneId, apply_patch, nav_items,
};
use lumiere_error::{LumiereError, LumiereResult, PipelineError, PipelineErrorKind};
use lumiere_interface::{SceneGenerator, VideoSynthesizer};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Author recorded when neither the project nor the cover names one.
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Inputs for generating one scene.
///
/// # Examples
///
/// ```
/// use lumiere_pipeline::SceneRequest;
///
/// let request = SceneRequest::default().with_feedback("Make it brighter");
/// assert!(request.illustration.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Setters)]
#[setters(prefix = "with_", strip_option, into)]
pub struct SceneRequest {
    /// Uploaded illustration; required for the first generation of cover and page scenes
    pub illustration: Option<ImagePayload>,
    /// User feedback for a regeneration
    pub feedback: Option<String>,
}

/// Output of the ingest stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingestion {
    /// Story text, page count, fresh scene map and derived defaults
    pub patch: ProjectPatch,
    /// Cover illustration found in the document
    pub cover_image: Option<ImagePayload>,
}

/// Output of [`Pipeline::ingest_and_prepare`].
#[derive(Debug)]
pub struct PreparedProject {
    /// The ingested project, with the cover completed when that succeeded
    pub project: Project,
    /// Why automatic cover generation failed, if it was attempted and did
    pub cover_error: Option<LumiereError>,
}

/// Drives scenes from document to video.
///
/// The pipeline holds no project state. Each stage takes the current project and
/// returns a [`ProjectPatch`]; the caller decides when to apply and persist it.
#[derive(Debug, Clone)]
pub struct Pipeline<G, V> {
    generator: G,
    synthesizer: V,
}

impl<G: SceneGenerator, V: VideoSynthesizer> Pipeline<G, V> {
    /// Creates a pipeline from its two external collaborators.
    pub fn new(generator: G, synthesizer: V) -> Self {
        Self {
            generator,
            synthesizer,
        }
    }

    /// The scene generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// The video synthesizer.
    pub fn synthesizer(&self) -> &V {
        &self.synthesizer
    }

    /// Ingests a document into a patch for `project`.
    ///
    /// Never generates; see [`ingest_document`].
    ///
    /// # Errors
    ///
    /// Propagates ingestion errors (`UnsupportedFormat`, `EmptyDocument`, `Parse`).
    pub fn ingest(&self, project: &Project, filename: &str, bytes: &[u8]) -> LumiereResult<Ingestion> {
        ingest_document(project, filename, bytes)
    }

    /// Generates or regenerates one scene.
    ///
    /// Runs prompt building, generation and synthesis in order and returns a patch
    /// replacing the scene with its completed version. Completing the cover also
    /// adopts a non-blank extracted title and author.
    ///
    /// # Errors
    ///
    /// - `NotIngested` if the project has no pages
    /// - `UnknownScene` if the id is not one of the project's scenes
    /// - `SceneNotReachable` if an earlier scene is still pending
    /// - `MissingIllustration` for a first cover or page generation without an image
    /// - any generation or synthesis error, unchanged
    ///
    /// No patch is produced on error.
    #[instrument(skip(self, project, request), fields(project_id = %project.id, scene = %scene_id))]
    pub async fn generate_scene(
        &self,
        project: &Project,
        scene_id: SceneId,
        request: SceneRequest,
    ) -> LumiereResult<ProjectPatch> {
        let nav = Navigation::compute(project.total_pages, &project.scenes)?;
        if !nav.contains(&scene_id) {
            return Err(PipelineError::new(PipelineErrorKind::UnknownScene(scene_id.to_string())).into());
        }
        nav.check_reachable(&scene_id)?;

        let existing = project.scene(&scene_id);
        let regenerating = existing.is_some_and(Scene::is_completed);
        if scene_id.requires_illustration() && !regenerating && request.illustration.is_none() {
            return Err(PipelineError::new(PipelineErrorKind::MissingIllustration(
                scene_id.to_string(),
            ))
            .into());
        }

        let generation_request = PromptBuilder::build(
            project,
            scene_id,
            request.feedback.as_deref(),
            request.illustration.as_ref(),
        );
        debug!(
            regenerating,
            provider = self.generator.provider_name(),
            model = self.generator.model_name(),
            "Requesting structured prompt"
        );
        let prompt = self.generator.generate(&generation_request).await?;

        debug!(backend = self.synthesizer.backend_name(), "Synthesizing video");
        let video_url = self.synthesizer.synthesize(&prompt).await?;

        let title = prompt.title_hint().map(str::to_string);
        let author = prompt.author_hint().map(str::to_string);

        let scene = existing
            .cloned()
            .unwrap_or_else(|| Scene::pending(None))
            .complete(prompt, video_url);
        let mut patch = ProjectPatch::replace_scene(project, scene_id, scene);

        if scene_id == SceneId::Cover {
            if let Some(title) = title {
                patch = patch.with_name(title);
            }
            if let Some(author) = author {
                patch = patch.with_author(author);
            }
        }

        info!(regenerating, "Scene completed");
        Ok(patch)
    }

    /// Ingests a document and, when it carries a cover illustration, generates the
    /// cover scene.
    ///
    /// # Errors
    ///
    /// Only ingestion failures are errors. A failed cover generation is reported in
    /// [`PreparedProject::cover_error`] and leaves the ingested project intact.
    #[instrument(skip(self, project, bytes), fields(project_id = %project.id))]
    pub async fn ingest_and_prepare(
        &self,
        project: &Project,
        filename: &str,
        bytes: &[u8],
    ) -> LumiereResult<PreparedProject> {
        let ingestion = self.ingest(project, filename, bytes)?;
        Ok(self.prepare(project, ingestion).await)
    }

    /// Applies an ingestion and attempts the cover scene when an image is available.
    pub async fn prepare(&self, project: &Project, ingestion: Ingestion) -> PreparedProject {
        let Ingestion { patch, cover_image } = ingestion;
        let ingested = apply_patch(project, patch);

        let Some(cover) = cover_image else {
            return PreparedProject {
                project: ingested,
                cover_error: None,
            };
        };

        let request = SceneRequest::default().with_illustration(cover);
        match self.generate_scene(&ingested, SceneId::Cover, request).await {
            Ok(cover_patch) => PreparedProject {
                project: apply_patch(&ingested, cover_patch),
                cover_error: None,
            },
            Err(e) => {
                warn!(error = %e, "Cover generation failed; project stays ingested");
                PreparedProject {
                    project: ingested,
                    cover_error: Some(e),
                }
            }
        }
    }
}

/// Ingests a document into a patch for `project` without calling any service.
///
/// A blank project name falls back to the file stem and a blank author to
/// "Unknown". Callers that have no generator, or a document with no cover, can
/// apply the patch directly.
///
/// # Errors
///
/// Propagates ingestion errors (`UnsupportedFormat`, `EmptyDocument`, `Parse`).
#[instrument(skip(project, bytes), fields(project_id = %project.id, size = bytes.len()))]
pub fn ingest_document(project: &Project, filename: &str, bytes: &[u8]) -> LumiereResult<Ingestion> {
    let document = lumiere_ingest::ingest_bytes(filename, bytes)?;
    let total_pages = document.total_pages();

    let mut scenes: BTreeMap<SceneId, Scene> = nav_items(total_pages)
        .into_iter()
        .map(|id| (id, Scene::pending(None)))
        .collect();
    for (index, text) in document.pages().iter().enumerate() {
        scenes.insert(
            SceneId::Page(index as u32 + 1),
            Scene::pending(Some(text.clone())),
        );
    }

    let mut patch = ProjectPatch::default()
        .with_story_text(document.story_text().clone())
        .with_total_pages(total_pages)
        .with_scenes(scenes);

    if project.name.trim().is_empty()
        && let Some(stem) = Path::new(filename).file_stem().and_then(|s| s.to_str())
    {
        patch = patch.with_name(stem);
    }
    if project.author.trim().is_empty() {
        patch = patch.with_author(UNKNOWN_AUTHOR);
    }

    info!(total_pages, has_cover = document.cover_image().is_some(), "Ingested document");
    Ok(Ingestion {
        patch,
        cover_image: document.cover_image().clone(),
    })
}
