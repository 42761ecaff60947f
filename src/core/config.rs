//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.termfolio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TermfolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub content_file: Option<String>,
    pub mouse: Option<bool>,
    pub alt_screen: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub content: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<LevelFilter>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "termfolio.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Portfolio file; `None` means the built-in sample.
    pub content_file: Option<PathBuf>,
    pub mouse: bool,
    pub alt_screen: bool,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Deferred Log
// ============================================================================

/// Log records from loading and resolving the config. The log file's path
/// comes out of that same config, so these are held and replayed once the
/// logger is running.
#[derive(Debug, Default)]
pub struct DeferredLog {
    records: Vec<(Level, String)>,
}

impl DeferredLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: Level, message: impl Into<String>) {
        self.records.push((level, message.into()));
    }

    pub fn records(&self) -> &[(Level, String)] {
        &self.records
    }

    /// Send every held record to the installed logger, oldest first.
    pub fn replay(self) {
        for (level, message) in self.records {
            log::log!(level, "{message}");
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.termfolio/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".termfolio"))
}

/// Returns the path to `~/.termfolio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.termfolio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TermfolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(log: &mut DeferredLog) -> Result<TermfolioConfig, ConfigError> {
    load_config_at(config_path(), log)
}

fn load_config_at(
    path: Option<PathBuf>,
    log: &mut DeferredLog,
) -> Result<TermfolioConfig, ConfigError> {
    let Some(path) = path else {
        log.push(
            Level::Warn,
            "Could not determine home directory, using default config",
        );
        return Ok(TermfolioConfig::default());
    };

    if !path.exists() {
        log.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(&path, log);
        return Ok(TermfolioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TermfolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    log.push(Level::Info, format!("Loaded config from {}", path.display()));
    log.push(Level::Debug, format!("Config: {config:?}"));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, log: &mut DeferredLog) {
    let default_content = r#"# termfolio configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# content_file = "portfolio.toml"   # Relative to ~/.termfolio/; or TERMFOLIO_CONTENT
# mouse = true                      # Hover and click on tabs
# alt_screen = true                 # Restore the previous screen on exit

# [logging]
# file = "termfolio.log"            # Relative to ~/.termfolio/; or TERMFOLIO_LOG_FILE
# level = "info"                    # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            log.push(Level::Warn, format!("Failed to create config directory: {e}"));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        log.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &TermfolioConfig,
    cli: &CliOverrides,
    log: &mut DeferredLog,
) -> ResolvedConfig {
    resolve_with(config, cli, config_dir().as_deref(), |key| std::env::var(key).ok(), log)
}

/// Resolution with an explicit config directory and environment lookup.
///
/// Paths from the config file are relative to `base`; paths from env vars
/// and CLI flags are used as given.
fn resolve_with(
    config: &TermfolioConfig,
    cli: &CliOverrides,
    base: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
    log: &mut DeferredLog,
) -> ResolvedConfig {
    let from_file = |file: &String| match base {
        Some(dir) => dir.join(file),
        None => PathBuf::from(file),
    };

    // Content: CLI → env → config → built-in
    let content_file = cli
        .content
        .clone()
        .or_else(|| env("TERMFOLIO_CONTENT").map(PathBuf::from))
        .or_else(|| config.general.content_file.as_ref().map(from_file));

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("TERMFOLIO_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.logging.file.as_ref().map(from_file))
        .unwrap_or_else(|| from_file(&DEFAULT_LOG_FILE.to_string()));

    // Log level: CLI → env → config → default
    let log_level = cli.log_level.unwrap_or_else(|| {
        env("TERMFOLIO_LOG_LEVEL")
            .or_else(|| config.logging.level.clone())
            .map(|level| parse_level(&level, log))
            .unwrap_or(DEFAULT_LOG_LEVEL)
    });

    ResolvedConfig {
        content_file,
        mouse: config.general.mouse.unwrap_or(true),
        alt_screen: config.general.alt_screen.unwrap_or(true),
        log_file,
        log_level,
    }
}

fn parse_level(level: &str, log: &mut DeferredLog) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        log.push(
            Level::Warn,
            format!("Unknown log level '{level}', using {DEFAULT_LOG_LEVEL}"),
        );
        DEFAULT_LOG_LEVEL
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = TermfolioConfig::default();
        assert!(config.general.content_file.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = TermfolioConfig::default();
        let resolved = resolve_with(
            &config,
            &CliOverrides::default(),
            Some(Path::new("/home/ada/.termfolio")),
            no_env,
            &mut DeferredLog::new(),
        );
        assert_eq!(resolved.content_file, None);
        assert!(resolved.mouse);
        assert!(resolved.alt_screen);
        assert_eq!(
            resolved.log_file,
            PathBuf::from("/home/ada/.termfolio/termfolio.log")
        );
        assert_eq!(resolved.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TermfolioConfig {
            general: GeneralConfig {
                content_file: Some("me.toml".to_string()),
                mouse: Some(false),
                alt_screen: Some(false),
            },
            logging: LoggingConfig {
                file: Some("/var/log/termfolio.log".to_string()),
                level: Some("debug".to_string()),
            },
        };
        let resolved = resolve_with(
            &config,
            &CliOverrides::default(),
            Some(Path::new("/home/ada/.termfolio")),
            no_env,
            &mut DeferredLog::new(),
        );
        assert_eq!(
            resolved.content_file,
            Some(PathBuf::from("/home/ada/.termfolio/me.toml"))
        );
        assert!(!resolved.mouse);
        assert!(!resolved.alt_screen);
        // Absolute paths survive the join
        assert_eq!(resolved.log_file, PathBuf::from("/var/log/termfolio.log"));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_resolve_env_wins_over_config() {
        let config = TermfolioConfig {
            general: GeneralConfig {
                content_file: Some("me.toml".to_string()),
                ..Default::default()
            },
            logging: LoggingConfig {
                level: Some("debug".to_string()),
                ..Default::default()
            },
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("TERMFOLIO_CONTENT", "other.toml"),
            ("TERMFOLIO_LOG_LEVEL", "warn"),
        ]);
        let resolved = resolve_with(
            &config,
            &CliOverrides::default(),
            None,
            |key| env.get(key).map(|v| v.to_string()),
            &mut DeferredLog::new(),
        );
        assert_eq!(resolved.content_file, Some(PathBuf::from("other.toml")));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = TermfolioConfig {
            general: GeneralConfig {
                content_file: Some("me.toml".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            content: Some(PathBuf::from("cli.toml")),
            log_file: Some(PathBuf::from("cli.log")),
            log_level: Some(LevelFilter::Trace),
        };
        let resolved = resolve_with(
            &config,
            &cli,
            None,
            |_| Some("env.toml".to_string()),
            &mut DeferredLog::new(),
        );
        assert_eq!(resolved.content_file, Some(PathBuf::from("cli.toml")));
        assert_eq!(resolved.log_file, PathBuf::from("cli.log"));
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_unknown_level_falls_back_to_default() {
        let mut log = DeferredLog::new();
        assert_eq!(parse_level("OFF", &mut log), LevelFilter::Off);
        assert!(log.records().is_empty());
        assert_eq!(parse_level("chatty", &mut log), DEFAULT_LOG_LEVEL);
        let (level, message) = &log.records()[0];
        assert_eq!(*level, Level::Warn);
        assert!(message.contains("'chatty'"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[general]
mouse = false
"#;
        let config: TermfolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.mouse, Some(false));
        assert!(config.general.content_file.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
content_file = "portfolio.toml"
alt_screen = false

[logging]
file = "debug.log"
level = "trace"
"#;
        let config: TermfolioConfig = toml::from_str(toml_str).unwrap();
        let again: TermfolioConfig =
            toml::from_str(&toml::to_string(&config).unwrap()).unwrap();
        assert_eq!(again.general.content_file.as_deref(), Some("portfolio.toml"));
        assert_eq!(again.general.alt_screen, Some(false));
        assert_eq!(again.logging.file.as_deref(), Some("debug.log"));
        assert_eq!(again.logging.level.as_deref(), Some("trace"));
    }

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("termfolio-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_generated_default_is_all_comments() {
        let dir = temp_dir();
        let path = dir.join("config.toml");
        generate_default_config(&path, &mut DeferredLog::new());

        let contents = fs::read_to_string(&path).unwrap();
        let config: TermfolioConfig = toml::from_str(&contents).unwrap();
        assert!(config.general.content_file.is_none());
        assert!(config.general.mouse.is_none());
        assert!(config.logging.level.is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_config_is_generated_and_noted() {
        let dir = temp_dir();
        let path = dir.join("config.toml");
        let mut log = DeferredLog::new();

        let config = load_config_at(Some(path.clone()), &mut log).unwrap();
        assert!(config.general.content_file.is_none());
        assert!(path.exists());
        assert_eq!(log.records().len(), 1);
        assert_eq!(log.records()[0].0, Level::Info);
        assert!(log.records()[0].1.starts_with("No config file found"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_existing_config_load_is_noted() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general]\nmouse = false\n").unwrap();
        let mut log = DeferredLog::new();

        let config = load_config_at(Some(path), &mut log).unwrap();
        assert_eq!(config.general.mouse, Some(false));
        assert!(log.records()[0].1.starts_with("Loaded config from"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_no_home_directory_is_noted() {
        let mut log = DeferredLog::new();
        assert!(load_config_at(None, &mut log).is_ok());
        assert_eq!(log.records()[0].0, Level::Warn);
    }
}
