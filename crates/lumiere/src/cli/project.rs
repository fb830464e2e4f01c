//! Project management command handlers.

use super::CliLibrary;
use lumiere::{LumiereResult, Navigation, PipelineError, PipelineErrorKind, Project, SceneId};

/// Create a project and print its id.
pub async fn create(library: &CliLibrary, name: &str, author: &str) -> LumiereResult<()> {
    let project = library.create(name, author).await?;
    println!("{}", project.id);
    Ok(())
}

/// List all projects.
pub async fn list(library: &CliLibrary) -> LumiereResult<()> {
    let projects = library.list().await;
    if projects.is_empty() {
        println!("No projects.");
        return Ok(());
    }

    println!("{:<38} {:<24} {:<20} {:>8}", "ID", "NAME", "AUTHOR", "DONE");
    println!("{:-<93}", "");
    for project in &projects {
        println!(
            "{:<38} {:<24} {:<20} {:>8}",
            project.id,
            display_or_dash(&project.name),
            display_or_dash(&project.author),
            progress(project)
        );
    }
    println!("Total: {} projects", projects.len());
    Ok(())
}

/// Delete a project.
pub async fn delete(library: &CliLibrary, id: &str) -> LumiereResult<()> {
    library.delete(id).await?;
    println!("Deleted {}", id);
    Ok(())
}

/// Print the navigation table.
pub async fn status(library: &CliLibrary, id: &str) -> LumiereResult<()> {
    let project = library.get(id).await?;
    println!(
        "{} by {} ({})",
        display_or_dash(&project.name),
        display_or_dash(&project.author),
        project.id
    );

    if !project.is_ingested() {
        println!("No document ingested yet.");
        return Ok(());
    }

    let nav = Navigation::compute(project.total_pages, &project.scenes)?;
    for scene_id in nav.items() {
        let marker = if !nav.is_finished() && nav.current() == scene_id {
            ">"
        } else {
            " "
        };
        let status = project
            .scene(scene_id)
            .map(|scene| scene.status().to_string())
            .unwrap_or_else(|| "pending".to_string());
        let lock = if nav.is_reachable(scene_id) { "" } else { "locked" };
        println!("{} {:<6} {:<10} {}", marker, scene_id, status, lock);
    }
    println!("{}", progress(&project));
    Ok(())
}

/// Print a completed scene's structured prompt.
pub async fn prompt(library: &CliLibrary, id: &str, scene_id: SceneId) -> LumiereResult<()> {
    let project = library.get(id).await?;
    let prompt = project
        .scene(&scene_id)
        .and_then(|scene| scene.prompt())
        .ok_or_else(|| {
            PipelineError::new(PipelineErrorKind::SceneNotGenerated(scene_id.to_string()))
        })?;
    println!("{}", prompt.to_pretty_json()?);
    Ok(())
}

fn progress(project: &Project) -> String {
    format!(
        "{}/{}",
        project.completed_count(),
        project.nav_items().len()
    )
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}
