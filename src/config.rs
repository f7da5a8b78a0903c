use crate::analyzer::VersionerOptions;
use crate::domain::{BuildMetadata, MajorMinor, PreReleaseIdentifier, VersionPart};
use crate::error::{MinVerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory and
/// the user config directory
pub const CONFIG_FILE_NAME: &str = "minver.toml";

/// Phase used when none (or an empty one) is configured
pub const DEFAULT_PRE_RELEASE_PHASE: &str = "alpha";

/// Represents the complete configuration for git-minver.
///
/// Top-level settings apply to every project; `[projects.<name>]` tables
/// override them for one sub-project.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(flatten)]
    pub settings: Settings,

    #[serde(default)]
    pub projects: BTreeMap<String, Settings>,
}

/// Raw, unvalidated calculation settings.
///
/// Every field is optional so layers (defaults, file, project, command line)
/// can be merged before validation.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_major_minor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_metadata: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_increment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_pre_release_phase: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<String>,
}

impl Settings {
    /// Layer `overrides` on top of `self`; set fields in `overrides` win
    pub fn merge(&self, overrides: &Settings) -> Settings {
        Settings {
            tag_prefix: overrides.tag_prefix.clone().or_else(|| self.tag_prefix.clone()),
            minimum_major_minor: overrides
                .minimum_major_minor
                .clone()
                .or_else(|| self.minimum_major_minor.clone()),
            build_metadata: overrides
                .build_metadata
                .clone()
                .or_else(|| self.build_metadata.clone()),
            auto_increment: overrides
                .auto_increment
                .clone()
                .or_else(|| self.auto_increment.clone()),
            default_pre_release_phase: overrides
                .default_pre_release_phase
                .clone()
                .or_else(|| self.default_pre_release_phase.clone()),
            verbosity: overrides.verbosity.clone().or_else(|| self.verbosity.clone()),
        }
    }

    /// Validate into calculation options, applying defaults for unset fields
    ///
    /// # Returns
    /// * `Ok(VersionerOptions)` - All values valid
    /// * `Err` - The first invalid value, before any history is read
    pub fn resolve(&self) -> Result<VersionerOptions> {
        let minimum_major_minor = match self.minimum_major_minor.as_deref() {
            Some(text) if !text.trim().is_empty() => text.trim().parse::<MajorMinor>()?,
            _ => MajorMinor::default(),
        };

        let build_metadata = BuildMetadata::parse(self.build_metadata.as_deref().unwrap_or(""))
            .map_err(|e| MinVerError::config(format!("Invalid build metadata: {}", e)))?;

        let auto_increment = match self.auto_increment.as_deref() {
            Some(text) if !text.trim().is_empty() => text.trim().parse::<VersionPart>()?,
            _ => VersionPart::default(),
        };

        let phase = match self.default_pre_release_phase.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => DEFAULT_PRE_RELEASE_PHASE,
        };
        let default_pre_release_phase = PreReleaseIdentifier::parse(phase).map_err(|e| {
            MinVerError::config(format!("Invalid default pre-release phase: {}", e))
        })?;

        Ok(VersionerOptions {
            tag_prefix: self.tag_prefix.clone().unwrap_or_default(),
            minimum_major_minor,
            build_metadata,
            auto_increment,
            default_pre_release_phase,
        })
    }
}

impl Config {
    /// Settings for a project: top level, then the project's table on top
    ///
    /// # Returns
    /// * `Ok(Settings)` - Merged settings
    /// * `Err` - If `project` names a table that does not exist
    pub fn settings_for(&self, project: Option<&str>) -> Result<Settings> {
        match project {
            None => Ok(self.settings.clone()),
            Some(name) => self
                .projects
                .get(name)
                .map(|overrides| self.settings.merge(overrides))
                .ok_or_else(|| {
                    MinVerError::config(format!(
                        "Project '{}' is not configured (known: {})",
                        name,
                        self.project_names().join(", ")
                    ))
                }),
        }
    }

    pub fn project_names(&self) -> Vec<String> {
        self.projects.keys().cloned().collect()
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `minver.toml` in `work_dir`
/// 3. `minver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `work_dir` - Directory searched for a project-local file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, work_dir: &Path) -> Result<Config> {
    let local = work_dir.join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
