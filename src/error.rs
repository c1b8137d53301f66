use std::path::PathBuf;

use thiserror::Error;

use crate::constants::{API_ERROR_PREFIX, AUTH_FAILED_MESSAGE};

pub type Result<T, E = PorkbunError> = std::result::Result<T, E>;

/// Failure of a single API call.
///
/// Every operation either returns the parsed response or exactly one of
/// these. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PorkbunError {
    /// The API answered 403. The remote body is discarded.
    #[error("{}", AUTH_FAILED_MESSAGE)]
    Auth,

    /// Any other remote or transport failure.
    #[error("{message}")]
    Api { message: String, status: Option<u16> },

    /// Rejected locally, before any request was made.
    #[error("{message}")]
    Validation { message: String },
}

impl PorkbunError {
    /// Builds an [`PorkbunError::Api`], prefixing the detail the same way for every source.
    pub(crate) fn api(detail: impl AsRef<str>, status: Option<u16>) -> Self {
        PorkbunError::Api {
            message: format!("{}{}", API_ERROR_PREFIX, detail.as_ref()),
            status,
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        PorkbunError::Validation {
            message: message.into(),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            PorkbunError::Auth => Some(403),
            PorkbunError::Api { status, .. } => *status,
            PorkbunError::Validation { .. } => None,
        }
    }

    /// Stable label for the kind of failure.
    pub fn code(&self) -> &'static str {
        match self {
            PorkbunError::Auth => "AUTH_ERROR",
            PorkbunError::Api { .. } => "API_ERROR",
            PorkbunError::Validation { .. } => "VALIDATION_ERROR",
        }
    }
}

/// Failure while loading or writing the optional config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot determine the config folder or home directory")]
    NoConfigDir,

    #[error("unable to access config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse config file, is it valid TOML? {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unable to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("config value `{0}` is not set")]
    NotSet(&'static str),
}
