use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{API_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, SESSION_FILE_ENV, SESSION_FILE_NAME};
use crate::errors::{RevostayError, RevostayResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_dir() -> RevostayResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME))
            .ok_or_else(|| RevostayError::system_error("locating home directory", "no home directory for current user"))
    }

    pub fn config_path() -> RevostayResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn load() -> RevostayResult<Config> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            log::debug!("📋 Loading config from: {}", path.display());
            Self::load_from(&path)?
        } else {
            Config::default()
        };

        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    pub fn load_from(path: &Path) -> RevostayResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| RevostayError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| RevostayError::toml_error(&e, &content))?;
        Ok(config)
    }

    fn apply_env_overrides(config: &mut Config) {
        if let Ok(base_url) = env::var(API_URL_ENV) {
            if !base_url.trim().is_empty() {
                log::debug!("🔧 Using API base URL from {}", API_URL_ENV);
                config.api.base_url = base_url;
            }
        }

        if let Ok(session_file) = env::var(SESSION_FILE_ENV) {
            if !session_file.trim().is_empty() {
                config.session.path = Some(session_file);
            }
        }
    }

    pub fn session_path(config: &Config) -> RevostayResult<PathBuf> {
        match &config.session.path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(Self::config_dir()?.join(SESSION_FILE_NAME)),
        }
    }

    pub fn create_sample_config() -> RevostayResult<PathBuf> {
        let sample_config = r#"# RevoStay console configuration

[api]
# Address of the RevoStay backend
base_url = "http://localhost:2509"

# Seconds to wait for a backend response
timeout_secs = 30

[polling]
# Seconds between booking refreshes in `revostay watch`
interval_secs = 30

[session]
# Where the login session is kept (defaults to ~/revostay/session.json)
# path = "/home/user/revostay/session.json"
"#;
        let config_dir = Self::config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Err(RevostayError::config_error(
                "configuration file already exists",
                Some(&config_path.display().to_string()),
                Some("Edit the existing file or remove it before running 'revostay init'"),
            ));
        }

        fs::create_dir_all(&config_dir)?;
        fs::write(&config_path, sample_config)?;
        Ok(config_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let base_url = config.api.base_url.trim();
        if base_url.is_empty() {
            errors.push("api.base_url must not be empty".to_string());
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(format!("api.base_url must start with http:// or https://: {}", base_url));
        }

        if config.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than zero".to_string());
        }

        if config.polling.interval_secs == 0 {
            errors.push("polling.interval_secs must be greater than zero".to_string());
        }

        if let Some(path) = &config.session.path {
            if path.trim().is_empty() {
                errors.push("session.path must not be empty when set".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
