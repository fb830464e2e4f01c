//! Stateful driver over one project.

use crate::{Pipeline, PreparedProject, ScenePhase, SceneRequest};
use lumiere_core::{Navigation, Project, SceneId, apply_patch};
use lumiere_error::{LumiereError, LumiereResult, PipelineError, PipelineErrorKind};
use lumiere_interface::{ProjectStore, SceneGenerator, VideoSynthesizer};
use lumiere_storage::ProjectLibrary;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Holds one open project, its active scene and transient scene phases.
///
/// Every successful step applies a complete patch and saves the project through the
/// library before the session's copy changes. A failed step marks the scene `Failed`
/// and leaves both copies untouched.
pub struct ProjectSession<S, G, V> {
    library: ProjectLibrary<S>,
    pipeline: Pipeline<G, V>,
    project: Project,
    active: Option<SceneId>,
    reviewing: bool,
    phases: HashMap<SceneId, ScenePhase>,
}

impl<S, G, V> ProjectSession<S, G, V>
where
    S: ProjectStore,
    G: SceneGenerator,
    V: VideoSynthesizer,
{
    /// Opens a stored project.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` if the library has no project with this id.
    pub async fn open(
        library: ProjectLibrary<S>,
        pipeline: Pipeline<G, V>,
        project_id: &str,
    ) -> LumiereResult<Self> {
        let project = library.get(project_id).await?;
        Ok(Self {
            library,
            pipeline,
            project,
            active: None,
            reviewing: false,
            phases: HashMap::new(),
        })
    }

    /// The session's copy of the project.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The project library.
    pub fn library(&self) -> &ProjectLibrary<S> {
        &self.library
    }

    /// Current navigation state.
    pub fn navigation(&self) -> LumiereResult<Navigation> {
        Ok(Navigation::compute(
            self.project.total_pages,
            &self.project.scenes,
        )?)
    }

    /// The scene on screen, or `None` before ingestion.
    pub fn active(&self) -> Option<SceneId> {
        let nav = self.navigation().ok()?;
        Some(nav.resolve_active(self.active, self.reviewing, &self.project.scenes))
    }

    /// Whether the user is looking back at a completed scene.
    pub fn reviewing(&self) -> bool {
        self.reviewing
    }

    /// Keeps (or releases) the active scene while it is completed.
    pub fn set_reviewing(&mut self, reviewing: bool) {
        self.reviewing = reviewing;
    }

    /// Lifecycle phase of a scene, including transient phases.
    pub fn phase(&self, scene_id: &SceneId) -> ScenePhase {
        match self.phases.get(scene_id) {
            Some(phase) if phase.is_transient() => *phase,
            _ => ScenePhase::persisted(&self.project, scene_id),
        }
    }

    /// Opens a scene.
    ///
    /// Selecting a completed scene starts reviewing it.
    ///
    /// # Errors
    ///
    /// Returns `NotIngested`, `UnknownScene` or `SceneNotReachable`.
    pub fn select(&mut self, scene_id: SceneId) -> LumiereResult<()> {
        let nav = self.navigation()?;
        if !nav.contains(&scene_id) {
            return Err(PipelineError::new(PipelineErrorKind::UnknownScene(scene_id.to_string())).into());
        }
        nav.check_reachable(&scene_id)?;

        self.reviewing = self
            .project
            .scene(&scene_id)
            .is_some_and(|scene| scene.is_completed());
        self.active = Some(scene_id);
        Ok(())
    }

    /// Reads a document from disk and ingests it.
    ///
    /// Returns the cover generation failure, if there was one. The extension is
    /// checked before the file is read.
    #[instrument(skip(self, path), fields(project_id = %self.project.id, path = %path.as_ref().display()))]
    pub async fn ingest_path(&mut self, path: impl AsRef<Path>) -> LumiereResult<Option<LumiereError>> {
        let (filename, bytes) = lumiere_ingest::read_document(path).await?;
        self.ingest_bytes(&filename, &bytes).await
    }

    /// Ingests an in-memory document and generates the cover when one was found.
    ///
    /// Returns the cover generation failure, if there was one; the project is
    /// ingested and saved either way.
    pub async fn ingest_bytes(&mut self, filename: &str, bytes: &[u8]) -> LumiereResult<Option<LumiereError>> {
        let PreparedProject {
            project,
            cover_error,
        } = self
            .pipeline
            .ingest_and_prepare(&self.project, filename, bytes)
            .await?;

        self.library.put(&project).await?;
        self.project = project;
        self.phases.clear();
        self.active = None;
        self.reviewing = false;

        if let Some(e) = &cover_error {
            self.phases.insert(SceneId::Cover, ScenePhase::Failed);
            warn!(error = %e, "Cover was not generated");
        }
        info!(total_pages = self.project.total_pages, "Project ingested");
        Ok(cover_error)
    }

    /// Generates or regenerates one scene and commits the result.
    ///
    /// On success the scene is saved, marked `Completed`, and the active scene
    /// advances. On failure the scene is marked `Failed` and the error is returned.
    /// Ids that are not scenes of this project are rejected without recording a phase.
    #[instrument(skip(self, request), fields(project_id = %self.project.id, scene = %scene_id))]
    pub async fn generate(&mut self, scene_id: SceneId, request: SceneRequest) -> LumiereResult<()> {
        let nav = self.navigation()?;
        if !nav.contains(&scene_id) {
            return Err(PipelineError::new(PipelineErrorKind::UnknownScene(scene_id.to_string())).into());
        }
        self.phases.insert(scene_id, ScenePhase::Generating);

        let committed = self.commit_scene(scene_id, request).await;
        match committed {
            Ok(()) => {
                self.phases.insert(scene_id, ScenePhase::Completed);
                self.reviewing = false;
                self.active = self.active();
                Ok(())
            }
            Err(e) => {
                self.phases.insert(scene_id, ScenePhase::Failed);
                warn!(error = %e, "Scene generation failed");
                Err(e)
            }
        }
    }

    async fn commit_scene(&mut self, scene_id: SceneId, request: SceneRequest) -> LumiereResult<()> {
        let patch = self
            .pipeline
            .generate_scene(&self.project, scene_id, request)
            .await?;
        let updated = apply_patch(&self.project, patch);
        self.library.put(&updated).await?;
        self.project = updated;
        Ok(())
    }
}
