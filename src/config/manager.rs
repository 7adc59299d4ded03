use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::paths;
use crate::translation::DEFAULT_ENDPOINT;

/// Settings in the `[service]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Base URL of the translation API.
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
}

impl ServiceConfig {
    /// Gets the API key, preferring the named environment variable over the
    /// literal key.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/translate/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Values given on the command line or through `TRANSLATE_API_KEY`.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

/// Settings handed to the translation client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
}

/// Merges command line values over the config file over built-in defaults.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| config_file.service.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let api_key = options
        .api_key
        .clone()
        .filter(|key| !key.is_empty())
        .or_else(|| config_file.service.get_api_key());

    ResolvedConfig { endpoint, api_key }
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `$XDG_CONFIG_HOME/translate/config.toml`
    /// or `~/.config/translate/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the config file. A missing file yields the defaults; an
    /// unreadable or malformed one is an error.
    pub fn load(&self) -> Result<ConfigFile> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.config_path.display(), "no config file, using defaults");
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read config file: {}", self.config_path.display())
                });
            }
        };

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    #[test]
    fn test_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(
            manager.config_path(),
            "[service]\nendpoint = \"http://localhost:9000\"\napi_key = \"abc\"\n",
        )
        .unwrap();

        let loaded = manager.load().unwrap();

        assert_eq!(
            loaded.service.endpoint,
            Some("http://localhost:9000".to_string())
        );
        assert_eq!(loaded.service.api_key, Some("abc".to_string()));
        assert_eq!(loaded.service.api_key_env, None);
    }

    #[test]
    fn test_load_nonexistent_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let loaded = manager.load().unwrap();
        assert!(loaded.service.endpoint.is_none());
        assert!(loaded.service.api_key.is_none());
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[service\nendpoint = ").unwrap();

        let result = manager.load();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse config file")
        );
    }

    #[test]
    fn test_load_rejects_unknown_service_keys() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[service]\nendpont = \"typo\"\n").unwrap();

        assert!(manager.load().is_err());
    }

    #[test]
    #[serial]
    fn test_service_get_api_key_from_env() {
        // SAFETY: serialized with the other env-mutating tests
        unsafe {
            std::env::set_var("TRANSLATE_TEST_API_KEY", "env-key");
        }

        let service = ServiceConfig {
            endpoint: None,
            api_key: Some("file-key".to_string()),
            api_key_env: Some("TRANSLATE_TEST_API_KEY".to_string()),
        };
        assert_eq!(service.get_api_key(), Some("env-key".to_string()));

        unsafe {
            std::env::remove_var("TRANSLATE_TEST_API_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_service_get_api_key_fallback() {
        unsafe {
            std::env::remove_var("TRANSLATE_TEST_MISSING_KEY");
        }

        let service = ServiceConfig {
            endpoint: None,
            api_key: Some("file-key".to_string()),
            api_key_env: Some("TRANSLATE_TEST_MISSING_KEY".to_string()),
        };
        assert_eq!(service.get_api_key(), Some("file-key".to_string()));
    }

    #[test]
    fn test_resolve_config_defaults() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default());
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.api_key, None);
    }

    #[test]
    fn test_resolve_config_falls_back_to_file() {
        let config = ConfigFile {
            service: ServiceConfig {
                endpoint: Some("http://file.local".to_string()),
                api_key: Some("file-key".to_string()),
                api_key_env: None,
            },
        };

        let resolved = resolve_config(&ResolveOptions::default(), &config);
        assert_eq!(resolved.endpoint, "http://file.local");
        assert_eq!(resolved.api_key, Some("file-key".to_string()));
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let config = ConfigFile {
            service: ServiceConfig {
                endpoint: Some("http://file.local".to_string()),
                api_key: Some("file-key".to_string()),
                api_key_env: None,
            },
        };
        let options = ResolveOptions {
            endpoint: Some("http://cli.local".to_string()),
            api_key: Some("cli-key".to_string()),
        };

        let resolved = resolve_config(&options, &config);
        assert_eq!(resolved.endpoint, "http://cli.local");
        assert_eq!(resolved.api_key, Some("cli-key".to_string()));
    }

    #[test]
    fn test_resolve_config_empty_cli_key_is_ignored() {
        let config = ConfigFile {
            service: ServiceConfig {
                endpoint: None,
                api_key: Some("file-key".to_string()),
                api_key_env: None,
            },
        };
        let options = ResolveOptions {
            endpoint: None,
            api_key: Some(String::new()),
        };

        let resolved = resolve_config(&options, &config);
        assert_eq!(resolved.api_key, Some("file-key".to_string()));
    }
}
