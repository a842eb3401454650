use std::path::PathBuf;
use std::time::Duration;

/// Default Gemini model used for video analysis.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Default Gemini REST endpoint.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default HTTP timeout for a single analysis request (5 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidInteger { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Settings for the Gemini-backed video-analysis capability.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            api_base: DEFAULT_API_BASE.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Diagnostic log settings. Only consulted by the binary at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.into(),
            file: None,
            dir: None,
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub gemini: GeminiConfig,
    pub log: LogConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// - `GEMINI_API_KEY` (optional) — credential for video analysis; checked per call
    /// - `GEMINI_MODEL` (optional, default `gemini-2.5-pro`)
    /// - `GEMINI_API_BASE` (optional) — REST endpoint override
    /// - `GEMINI_TIMEOUT_SECS` (optional, default 300)
    /// - `YOUTUBE_TRANSCRIPT_LOG_LEVEL` (optional, default `info`)
    /// - `YOUTUBE_TRANSCRIPT_LOG_FILE` (optional) — explicit log file
    /// - `YOUTUBE_TRANSCRIPT_LOG_DIR` (optional) — directory for a timestamped log file
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = match non_empty("GEMINI_TIMEOUT_SECS") {
            Some(val) => match val.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidInteger {
                        var: "GEMINI_TIMEOUT_SECS",
                        value: val,
                    })
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let model = match lookup("GEMINI_MODEL") {
            Some(m) if m.trim().is_empty() => return Err(ConfigError::Empty { var: "GEMINI_MODEL" }),
            Some(m) => m.trim().to_string(),
            None => DEFAULT_MODEL.to_string(),
        };

        let gemini = GeminiConfig {
            api_key: non_empty("GEMINI_API_KEY"),
            model,
            api_base: non_empty("GEMINI_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        };

        let log = LogConfig {
            level: non_empty("YOUTUBE_TRANSCRIPT_LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            file: non_empty("YOUTUBE_TRANSCRIPT_LOG_FILE").map(PathBuf::from),
            dir: non_empty("YOUTUBE_TRANSCRIPT_LOG_DIR").map(PathBuf::from),
        };

        Ok(Self { gemini, log })
    }
}
