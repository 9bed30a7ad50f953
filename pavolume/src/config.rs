//! Configuration loading and format template resolution

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Built-in output template: bare percentage
pub const DEFAULT_FORMAT: &str = "%s";

/// Optional file configuration from `$XDG_CONFIG_HOME/pavolume/config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Default output template, overridable per invocation
    pub format: Option<String>,
    /// Explicit server address; `None` defers to the client library's
    /// default server resolution
    pub server: Option<String>,
}

/// Load the configuration file if one exists. A missing file is not an
/// error; a malformed one is.
pub fn load() -> Result<FileConfig> {
    match config_file_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(FileConfig::default()),
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pavolume").join("config.toml"))
}

fn load_from(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), "loaded configuration file");
    Ok(config)
}

/// Format template resolution, priority order:
/// 1. Command-line argument / `PAVOLUME_FORMAT` (merged by the CLI parser,
///    flag over environment)
/// 2. Config file `format` key
/// 3. Built-in default
pub fn resolve_format(cli_arg: Option<&str>, file: &FileConfig) -> String {
    if let Some(format) = cli_arg {
        return format.to_string();
    }
    if let Some(format) = file.format.as_deref() {
        return format.to_string();
    }
    DEFAULT_FORMAT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn cli_argument_wins() {
        let file = FileConfig {
            format: Some("file %s".to_string()),
            server: None,
        };
        assert_eq!(resolve_format(Some("cli %s"), &file), "cli %s");
    }

    #[test]
    fn file_format_beats_default() {
        let file = FileConfig {
            format: Some("file %s".to_string()),
            server: None,
        };
        assert_eq!(resolve_format(None, &file), "file %s");
    }

    #[test]
    fn falls_back_to_builtin_default() {
        assert_eq!(resolve_format(None, &FileConfig::default()), DEFAULT_FORMAT);
    }

    #[test]
    fn load_from_parses_both_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"vol %s\"\nserver = \"unix:/tmp/pulse\"").unwrap();

        let config = load_from(file.path()).unwrap();
        assert_eq!(config.format.as_deref(), Some("vol %s"));
        assert_eq!(config.server.as_deref(), Some("unix:/tmp/pulse"));
    }

    #[test]
    fn load_from_accepts_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = load_from(file.path()).unwrap();
        assert!(config.format.is_none());
        assert!(config.server.is_none());
    }

    #[test]
    fn load_from_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = ").unwrap();

        match load_from(file.path()) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }
}
