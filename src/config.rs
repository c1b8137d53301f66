use merge::Merge;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use log::{debug, info};

use crate::client::ClientConfig;
use crate::constants::*;
use crate::error::ConfigError;

#[derive(Serialize, Deserialize, Merge, Clone, Debug, PartialEq)]
pub struct GeneralConfig {
    pub base_url: Option<String>,
}

#[derive(Serialize, Deserialize, Merge, Clone, PartialEq)]
pub struct PorkbunConfig {
    pub api_key: Option<String>,
    pub secret_api_key: Option<String>,
}

/// Optional on-disk form of [`ClientConfig`].
///
/// ```toml
/// [general]
/// base_url = "https://api.porkbun.com/api/json/v3"
///
/// [porkbun]
/// api_key = "pk1_..."
/// secret_api_key = "sk1_..."
/// ```
#[derive(Serialize, Deserialize, Merge, Clone, Debug, PartialEq)]
pub struct Config {
    pub general: Option<GeneralConfig>,
    pub porkbun: Option<PorkbunConfig>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            base_url: Some(DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Default for PorkbunConfig {
    fn default() -> Self {
        PorkbunConfig {
            api_key: Some(DEFAULT_NOT_SET.to_string()),
            secret_api_key: Some(DEFAULT_NOT_SET.to_string()),
        }
    }
}

impl std::fmt::Debug for PorkbunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PorkbunConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("secret_api_key", &self.secret_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            general: Some(GeneralConfig::default()),
            porkbun: Some(PorkbunConfig::default()),
        }
    }
}

impl Config {
    /// Loads the config from the platform config folder.
    pub fn load() -> Result<Config, ConfigError> {
        Config::load_from(&Config::default_path()?)
    }

    pub fn load_from(filepath: &Path) -> Result<Config, ConfigError> {
        debug!("Loading config from {}.", filepath.display());
        let config_file = fs::File::open(filepath).map_err(|source| ConfigError::Io {
            path: filepath.to_path_buf(),
            source,
        })?;

        let mut reader = BufReader::new(config_file);
        let mut contents = String::new();

        reader
            .read_to_string(&mut contents)
            .map_err(|source| ConfigError::Io {
                path: filepath.to_path_buf(),
                source,
            })?;

        Config::from_toml_str(&contents)
    }

    /// Parses TOML, filling anything left out from [`Config::default`].
    pub fn from_toml_str(contents: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str::<Config>(contents)?.merge_custom(Config::default()))
    }

    /// Writes a default config with `NOT_SET` placeholders for the keys.
    pub fn write_default(filepath: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string(&Config::default())?;
        let io_error = |source: std::io::Error| ConfigError::Io {
            path: filepath.to_path_buf(),
            source,
        };

        if let Some(dir) = filepath.parent() {
            fs::create_dir_all(dir).map_err(io_error)?;
        }
        let mut config_file = fs::File::create(filepath).map_err(io_error)?;
        config_file.write_all(contents.as_bytes()).map_err(io_error)?;

        info!("Default configuration file created at {}.", filepath.display());
        Ok(())
    }

    /// `<config dir>/porkbun-api/config.toml`, or `~/.porkbun-api/config.toml`
    /// when the platform has no config folder.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = match dirs::config_dir() {
            Some(dir) => dir.join(Path::new(CONFIG_FOLDER_NAME)),
            None => dirs::home_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join(format!(".{}", CONFIG_FOLDER_NAME)),
        };

        Ok(dir.join(CONFIG_FILE_NAME))
    }

    /// Builds the client config, failing on keys that were never filled in.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let porkbun = self.porkbun.as_ref().ok_or(ConfigError::NotSet("porkbun"))?;
        let api_key = configured(&porkbun.api_key, "porkbun.api_key")?;
        let secret_api_key = configured(&porkbun.secret_api_key, "porkbun.secret_api_key")?;

        let config = ClientConfig::new(api_key, secret_api_key);
        match self.general.as_ref().and_then(|g| g.base_url.as_ref()) {
            Some(base_url) => Ok(config.with_base_url(base_url.as_str())),
            None => Ok(config),
        }
    }

    /// Custom merge for the Config object and its children.
    fn merge_custom(mut self, other: Config) -> Self {
        self.merge(other.clone());

        if let (Some(general), Some(other_general)) = (self.general.as_mut(), other.general) {
            general.merge(other_general);
        }
        if let (Some(porkbun), Some(other_porkbun)) = (self.porkbun.as_mut(), other.porkbun) {
            porkbun.merge(other_porkbun);
        }

        self
    }
}

fn configured<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, ConfigError> {
    match value.as_deref() {
        Some(value) if !value.is_empty() && value != DEFAULT_NOT_SET => Ok(value),
        _ => Err(ConfigError::NotSet(name)),
    }
}
