//! Configuration file discovery and initialisation.
//!
//! # Configuration File Format
//!
//! ```toml
//! [source]
//! strategy = "api"
//! api_url = "https://dblp.org/search/publ/api"
//! toc_base_url = "https://dblp.org/db/conf"
//! max_results = 1000
//! max_subpage = 5
//!
//! [pacing]
//! min_delay_ms = 500
//! max_delay_ms = 1500
//!
//! [http]
//! timeout_secs = 30
//! connect_timeout_secs = 10
//! max_retries = 3
//!
//! [logging]
//! level = "warn"
//! format = "text"
//! ```

use std::path::{Path, PathBuf};

use super::{Config, ConfigError};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "paper-hunter.toml";

/// `<config_dir>/paper-hunter/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("paper-hunter").join("config.toml"))
}

/// First existing config file: `./paper-hunter.toml`, then the user config dir
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    default_config_path().filter(|path| path.is_file())
}

/// Parse a TOML file directly, without environment overrides
pub fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Write the default configuration to `path`, creating parent directories
pub fn write_default_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.display().to_string()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(&Config::default())?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default_config(&path, false).unwrap();
        let loaded = read_config_file(&path).unwrap();
        assert_eq!(loaded, Config::default());

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[pacing]"));
        assert!(text.contains("strategy = \"api\""));
    }

    #[test]
    fn test_write_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(matches!(
            write_default_config(&path, false),
            Err(ConfigError::AlreadyExists(_))
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_default_config(&path, true).unwrap();
        assert_eq!(read_config_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_read_nonexistent() {
        let result = read_config_file(Path::new("/nonexistent/paper-hunter.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_read_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.toml");
        std::fs::write(&path, "invalid = toml = content").unwrap();

        assert!(matches!(read_config_file(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("paper-hunter/config.toml"));
        }
    }
}
