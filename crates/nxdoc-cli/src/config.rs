//! Configuration file loading for the CLI
//!
//! This module finds and loads the TOML configuration from an explicit path,
//! the local `nxdoc/` directory or the platform configuration directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use nxdoc::{NxdocError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

impl From<ConfigError> for NxdocError {
    fn from(err: ConfigError) -> Self {
        NxdocError::Config(err.to_string())
    }
}

/// Find and load configuration
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (nxdoc/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or is invalid
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, NxdocError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("nxdoc/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("org", "nexusformat", "nxdoc") {
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

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, NxdocError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.render().indent_width() == 0 {
        return Err(ConfigError::Validation(
            "render.indent_width must be at least 1".to_string(),
        ));
    }
    if config.schema().namespace().trim().is_empty() {
        return Err(ConfigError::Validation(
            "schema.namespace must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let file = config_file("[render]\ngenerator = \"utils/nxdl2rst.py\"\n");

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.render().generator(), "utils/nxdl2rst.py");
        assert_eq!(config.render().indent_width(), 2);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = load_config(Some("/nonexistent/nxdoc.toml")).unwrap_err();

        assert!(matches!(err, NxdocError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let file = config_file("[render\n");

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_zero_indent_is_rejected() {
        let file = config_file("[render]\nindent_width = 0\n");

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("indent_width"));
    }
}
