//! Whole-project operations.

use lumiere_core::Project;
use lumiere_error::{LumiereResult, PipelineError, PipelineErrorKind};
use lumiere_interface::ProjectStore;

/// Store key holding the project collection.
pub const PROJECTS_KEY: &str = "projects";

/// Dashboard-level access to the project collection.
///
/// Every operation loads the collection, changes it and saves it back; the store is
/// the only holder of project state.
///
/// # Example
///
/// ```
/// use lumiere_storage::{InMemoryProjectStore, ProjectLibrary};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let library = ProjectLibrary::new(InMemoryProjectStore::new());
/// let project = library.create("The Fox", "Ada").await?;
/// assert_eq!(library.get(&project.id).await?.name, "The Fox");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ProjectLibrary<S> {
    store: S,
}

impl<S: ProjectStore> ProjectLibrary<S> {
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All projects, newest first.
    pub async fn list(&self) -> Vec<Project> {
        self.store.load(PROJECTS_KEY).await
    }

    /// Looks up one project.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` if no project has this id.
    pub async fn get(&self, id: &str) -> LumiereResult<Project> {
        self.list()
            .await
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PipelineError::new(PipelineErrorKind::ProjectNotFound(id.to_string())).into())
    }

    /// Creates and stores an empty project.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, name: &str, author: &str) -> LumiereResult<Project> {
        let project = Project::new(name.trim(), author.trim());
        let mut projects = self.list().await;
        projects.insert(0, project.clone());
        self.store.save(PROJECTS_KEY, &projects).await?;
        tracing::info!(project_id = %project.id, "Created project");
        Ok(project)
    }

    /// Inserts or replaces a project by id.
    ///
    /// An existing project keeps its position; a new one goes first.
    #[tracing::instrument(skip(self, project), fields(project_id = %project.id))]
    pub async fn put(&self, project: &Project) -> LumiereResult<()> {
        let mut projects = self.list().await;
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => projects.insert(0, project.clone()),
        }
        self.store.save(PROJECTS_KEY, &projects).await
    }

    /// Deletes a project and all of its scenes.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` if no project has this id.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> LumiereResult<()> {
        let mut projects = self.list().await;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(PipelineError::new(PipelineErrorKind::ProjectNotFound(id.to_string())).into());
        }
        self.store.save(PROJECTS_KEY, &projects).await?;
        tracing::info!(project_id = %id, "Deleted project");
        Ok(())
    }
}
