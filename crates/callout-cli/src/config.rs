//! Configuration file loading for the CLI
//!
//! This module finds and loads the TOML configuration file from various
//! locations (explicit path, local directory, system directory) and layers
//! the command-line overrides on top of it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use callout::{CalloutError, config::AppConfig, glyph::Preset};

use crate::Args;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for CalloutError {
    fn from(err: ConfigError) -> Self {
        CalloutError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (callout/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CalloutError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("callout/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "callout", "callout") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Apply the command-line overrides to a loaded configuration.
///
/// A preset given on the command line replaces the file's preset; glyph
/// overrides then apply on top of whichever preset is active.
///
/// # Errors
///
/// Returns [`CalloutError::Glyph`] for an unknown preset name.
pub fn apply_overrides(config: &mut AppConfig, args: &Args) -> Result<(), CalloutError> {
    if let Some(width) = args.width {
        config.layout_mut().set_width(width);
    }

    let preset = match &args.preset {
        Some(name) => Some(name.parse::<Preset>()?),
        None if args.unicode => Some(Preset::Unicode),
        None => None,
    };

    let style = config.style_mut();
    if let Some(preset) = preset {
        style.set_preset(preset);
    }
    if let Some(corner) = &args.corner {
        style.set_corner(corner.as_str());
    }
    if let Some(straight) = &args.straight {
        style.set_straight(straight.as_str());
    }
    if let Some(ranges) = &args.ranges {
        style.set_range(ranges.as_str());
    }
    if let Some(joint) = &args.joint {
        style.set_joint(joint.as_str());
    }

    if args.strict {
        config.input_mut().set_strict(true);
    }

    debug!(config:?; "Configuration resolved");
    Ok(())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CalloutError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
