pub const DEFAULT_BASE_URL: &str = "https://api.porkbun.com/api/json/v3";

/// Porkbun rejects anything shorter, so it is checked before sending.
pub const MIN_TTL: u32 = 600;

pub const AUTH_FAILED_MESSAGE: &str =
    "Authentication failed. Check your API keys or 2FA requirements.";
pub const TTL_TOO_LOW_MESSAGE: &str = "TTL must be at least 600 seconds";
pub const API_ERROR_PREFIX: &str = "API Error: ";

pub const CONFIG_FOLDER_NAME: &str = "porkbun-api";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_NOT_SET: &str = "NOT_SET";
