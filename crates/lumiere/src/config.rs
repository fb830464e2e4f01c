//! Layered configuration.

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use lumiere_error::{ConfigError, LumiereError, LumiereResult};
use lumiere_models::{GeminiConfig, SynthesisConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../lumiere.toml");

fn default_storage_dir() -> String {
    "~/.local/share/lumiere/projects".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Project persistence settings (`[storage]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StorageConfig {
    /// Directory holding the project collection; a leading `~` means the home directory
    #[serde(default = "default_storage_dir")]
    dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

impl StorageConfig {
    /// The storage directory with `~` expanded.
    ///
    /// The path is returned unchanged when no home directory is known.
    pub fn resolved_dir(&self) -> PathBuf {
        expand_home(&self.dir)
    }
}

fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Log output settings (`[logging]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable logs
    #[serde(default)]
    json: bool,
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            level: default_log_level(),
        }
    }
}

/// Complete Lumiere configuration.
///
/// # Example
///
/// ```no_run
/// use lumiere::LumiereConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = LumiereConfig::load(None)?;
/// println!("model: {}", config.generation().model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct LumiereConfig {
    /// Generation service settings
    #[serde(default)]
    generation: GeminiConfig,
    /// Video synthesis settings
    #[serde(default)]
    synthesis: SynthesisConfig,
    /// Persistence settings
    #[serde(default)]
    storage: StorageConfig,
    /// Log output settings
    #[serde(default)]
    logging: LoggingConfig,
}

impl LumiereConfig {
    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the bundled file does not parse.
    pub fn bundled() -> LumiereResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Bundled defaults overridden by one file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file is missing or cannot be parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> LumiereResult<Self> {
        debug!("Loading configuration from file");
        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Loads configuration with precedence (later sources override earlier):
    ///
    /// 1. Bundled defaults (`lumiere.toml` shipped with the crate)
    /// 2. `~/.config/lumiere/lumiere.toml`
    /// 3. `./lumiere.toml`
    /// 4. `explicit`, when given
    ///
    /// Sources 2 and 3 are skipped when absent; an explicit file must exist.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a present source cannot be read or parsed.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> LumiereResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/lumiere/lumiere.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("lumiere").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> LumiereResult<Self> {
        builder
            .build()
            .map_err(|e| {
                LumiereError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                LumiereError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
