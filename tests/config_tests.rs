use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use ask_youtube_transcript::config::{ConfigError, LogConfig, ServerConfig, DEFAULT_API_BASE, DEFAULT_MODEL};
use ask_youtube_transcript::logging::resolve_log_file;

fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_when_environment_is_empty() {
    let config = load(&[]).unwrap();

    assert_eq!(config.gemini.api_key, None);
    assert_eq!(config.gemini.model, DEFAULT_MODEL);
    assert_eq!(config.gemini.api_base, DEFAULT_API_BASE);
    assert_eq!(config.gemini.timeout, Duration::from_secs(300));
    assert_eq!(config.log, LogConfig::default());
    assert_eq!(config.log.level, "info");
}

#[test]
fn reads_all_variables() {
    let config = load(&[
        ("GEMINI_API_KEY", "secret"),
        ("GEMINI_MODEL", "gemini-2.5-flash"),
        ("GEMINI_API_BASE", "http://localhost:9000/v1beta/"),
        ("GEMINI_TIMEOUT_SECS", "12"),
        ("YOUTUBE_TRANSCRIPT_LOG_LEVEL", "debug"),
        ("YOUTUBE_TRANSCRIPT_LOG_FILE", "/tmp/server.log"),
        ("YOUTUBE_TRANSCRIPT_LOG_DIR", "/tmp/logs"),
    ])
    .unwrap();

    assert_eq!(config.gemini.api_key.as_deref(), Some("secret"));
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert_eq!(config.gemini.api_base, "http://localhost:9000/v1beta");
    assert_eq!(config.gemini.timeout, Duration::from_secs(12));
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log.file, Some(PathBuf::from("/tmp/server.log")));
    assert_eq!(config.log.dir, Some(PathBuf::from("/tmp/logs")));
}

#[test]
fn blank_api_key_counts_as_unset() {
    let config = load(&[("GEMINI_API_KEY", "   ")]).unwrap();
    assert_eq!(config.gemini.api_key, None);
}

#[test]
fn api_key_is_redacted_in_debug_output() {
    let config = load(&[("GEMINI_API_KEY", "super-secret-key")]).unwrap();
    let printed = format!("{config:?}");

    assert!(!printed.contains("super-secret-key"));
    assert!(printed.contains("<set>"));
}

#[test]
fn invalid_timeout_is_rejected() {
    for bad in ["abc", "-5", "0"] {
        let err = load(&[("GEMINI_TIMEOUT_SECS", bad)]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidInteger { var: "GEMINI_TIMEOUT_SECS", .. }),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn empty_model_is_rejected() {
    let err = load(&[("GEMINI_MODEL", "")]).unwrap_err();
    assert!(matches!(err, ConfigError::Empty { var: "GEMINI_MODEL" }));
}

#[test]
fn explicit_log_file_wins_over_directory() {
    let config = LogConfig {
        level: "info".into(),
        file: Some(PathBuf::from("/var/log/a.log")),
        dir: Some(PathBuf::from("/var/log/dir")),
    };
    assert_eq!(
        resolve_log_file(&config, "20250101-120000"),
        Some(PathBuf::from("/var/log/a.log"))
    );
}

#[test]
fn log_directory_gets_timestamped_file() {
    let tmp = tempfile::tempdir().unwrap();
    let config = LogConfig {
        level: "info".into(),
        file: None,
        dir: Some(tmp.path().to_path_buf()),
    };
    assert_eq!(
        resolve_log_file(&config, "20250101-120000"),
        Some(tmp.path().join("ask-youtube-transcript-20250101-120000.log"))
    );
}

#[test]
fn no_log_file_by_default() {
    assert_eq!(resolve_log_file(&LogConfig::default(), "20250101-120000"), None);
}
