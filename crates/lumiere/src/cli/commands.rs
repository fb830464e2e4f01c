//! CLI command definitions.

use clap::{Parser, Subcommand};
use lumiere::SceneId;
use std::path::PathBuf;

/// Lumiere - turn illustrated story documents into animated scenes
#[derive(Parser, Debug)]
#[command(name = "lumiere")]
#[command(about = "Turn illustrated story documents into animated scenes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file applied over the default sources
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty project
    New {
        /// Project name; defaults to the document's file name on ingest
        #[arg(long, default_value = "")]
        name: String,

        /// Author; defaults to "Unknown" on ingest
        #[arg(long, default_value = "")]
        author: String,
    },

    /// List all projects, newest first
    List,

    /// Delete a project and all of its scenes
    Delete {
        /// Project id
        id: String,
    },

    /// Load a story document (.txt, .md or .pdf) into a project
    Ingest {
        /// Project id
        id: String,

        /// Path to the document
        file: PathBuf,
    },

    /// Show every scene with its status
    Status {
        /// Project id
        id: String,
    },

    /// Generate or regenerate one scene
    Generate {
        /// Project id
        id: String,

        /// Scene: "cover", a page number, or "end"
        scene: SceneId,

        /// Illustration for the scene (required for a first cover or page generation)
        #[arg(long)]
        illustration: Option<PathBuf>,

        /// What to change when regenerating
        #[arg(long)]
        feedback: Option<String>,
    },

    /// Print a completed scene's structured prompt as JSON
    Prompt {
        /// Project id
        id: String,

        /// Scene: "cover", a page number, or "end"
        scene: SceneId,
    },
}
