//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the lumiere binary.

mod commands;
mod project;
mod scene;

pub use commands::{Cli, Commands};

use lumiere::{
    ConfiguredSynthesizer, DocumentFormat, FileProjectStore, GeminiClient, LumiereConfig,
    LumiereResult, Pipeline, ProjectLibrary,
};
use std::path::Path;

type CliLibrary = ProjectLibrary<FileProjectStore>;
type CliPipeline = Pipeline<GeminiClient, ConfiguredSynthesizer>;

fn open_library(config: &LumiereConfig) -> CliLibrary {
    ProjectLibrary::new(FileProjectStore::new(config.storage().resolved_dir()))
}

fn build_pipeline(config: &LumiereConfig) -> LumiereResult<CliPipeline> {
    let generator = GeminiClient::from_env(config.generation().clone())?;
    let synthesizer = ConfiguredSynthesizer::from_config(config.synthesis())?;
    Ok(Pipeline::new(generator, synthesizer))
}

/// Whether ingesting `file` may generate a cover, and so needs the generator.
fn may_carry_cover(file: &Path) -> LumiereResult<bool> {
    let filename = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    Ok(DocumentFormat::from_filename(filename)?.has_cover())
}

/// Runs one command.
pub async fn dispatch(command: Commands, config: &LumiereConfig) -> LumiereResult<()> {
    let library = open_library(config);
    match command {
        Commands::New { name, author } => project::create(&library, &name, &author).await,
        Commands::List => project::list(&library).await,
        Commands::Delete { id } => project::delete(&library, &id).await,
        Commands::Status { id } => project::status(&library, &id).await,
        Commands::Prompt { id, scene } => project::prompt(&library, &id, scene).await,
        Commands::Ingest { id, file } => {
            if may_carry_cover(&file)? {
                let pipeline = build_pipeline(config)?;
                scene::ingest(library, pipeline, &id, &file).await
            } else {
                scene::ingest_text(&library, &id, &file).await
            }
        }
        Commands::Generate {
            id,
            scene,
            illustration,
            feedback,
        } => {
            let pipeline = build_pipeline(config)?;
            scene::generate(library, pipeline, &id, scene, illustration.as_deref(), feedback).await
        }
    }
}
