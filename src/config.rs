//! Configuration for the terminal client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/timesouk/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::locale::Lang;
use crate::router::Page;
use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark", "light", "desert", "oasis"
    pub theme: String,

    /// Interface language code: "en" or "ar"
    pub language: String,

    /// Slug of the page shown at startup
    pub landing: String,

    /// Redraw tick interval in milliseconds
    pub tick_ms: u64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default tracing filter level ("error", "warn", "info", "debug", "trace")
    pub level: String,
    /// Also write logs to rotating daily files
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            language: "en".to_string(),
            landing: "home".to_string(),
            tick_ms: 200,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every field optional so partial files work
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    theme: Option<String>,
    language: Option<String>,
    landing: Option<String>,
    tick_ms: Option<u64>,
    logging: Option<FileLogging>,
}

#[derive(Debug, Default, Deserialize)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
}

impl Config {
    /// Path of the user config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("timesouk").join("config.toml"))
    }

    /// Load config with env > file > default precedence
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Config::default();

        let theme = std::env::var("TIMESOUK_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let language = std::env::var("TIMESOUK_LANG")
            .ok()
            .or(file.language)
            .unwrap_or(defaults.language);

        let landing = std::env::var("TIMESOUK_LANDING")
            .ok()
            .or(file.landing)
            .unwrap_or(defaults.landing);

        let tick_ms = std::env::var("TIMESOUK_TICK_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.tick_ms)
            .unwrap_or(defaults.tick_ms);

        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.logging.level),
            file_enabled: std::env::var("TIMESOUK_LOG_FILE")
                .map(|v| v == "1" || v.to_lowercase() == "true")
                .ok()
                .or(file_logging.file_enabled)
                .unwrap_or(defaults.logging.file_enabled),
            file_dir: std::env::var("TIMESOUK_LOG_DIR")
                .ok()
                .or(file_logging.file_dir)
                .map(PathBuf::from)
                .unwrap_or(defaults.logging.file_dir),
        };

        Config {
            theme,
            language,
            landing,
            tick_ms,
            logging,
        }
    }

    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return FileConfig::default();
        };
        match toml::from_str(&contents) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("Warning: ignoring malformed config {}: {}", path.display(), e);
                FileConfig::default()
            }
        }
    }

    /// Write a commented config template on first run so users can discover
    /// the options. Existing files are never touched.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(&path, Config::default().to_toml());
    }

    /// Serialize to the config file format. Round-trips through `FileConfig`
    /// (guarded by a test below).
    pub fn to_toml(&self) -> String {
        format!(
            r#"# timesouk configuration
# Delete a line to fall back to the built-in default.

# Color theme: "dark", "light", "desert", "oasis"
theme = "{theme}"

# Interface language: "en" or "ar"
language = "{language}"

# Page shown at startup (e.g. "home", "services", "projects")
landing = "{landing}"

# Redraw tick in milliseconds
tick_ms = {tick_ms}

[logging]
# Default log filter level; RUST_LOG overrides this
level = "{level}"
# Write logs to rotating daily files as well
file_enabled = {file_enabled}
file_dir = "{file_dir}"
"#,
            theme = self.theme,
            language = self.language,
            landing = self.landing,
            tick_ms = self.tick_ms,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
        )
    }

    /// Landing slug resolved through the router's total parser; unknown
    /// slugs land on the not-found page rather than failing startup
    pub fn landing_page(&self) -> Page {
        Page::from_slug(&self.landing)
    }

    pub fn lang(&self) -> Lang {
        Lang::from_code(&self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Catches template syntax drift: the generated file must parse back
    #[test]
    fn default_config_round_trips() {
        let config = Config::default();
        let toml_str = config.to_toml();

        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );

        let file = parsed.unwrap();
        assert_eq!(file.theme.as_deref(), Some("dark"));
        assert_eq!(file.language.as_deref(), Some("en"));
        assert_eq!(file.landing.as_deref(), Some("home"));
        assert_eq!(file.tick_ms, Some(200));
        let logging = file.logging.expect("logging section present");
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.file_enabled, Some(false));
    }

    #[test]
    fn landing_page_uses_total_slug_parser() {
        let mut config = Config::default();
        assert_eq!(config.landing_page(), Page::Home);

        config.landing = "projects".to_string();
        assert_eq!(config.landing_page(), Page::Projects);

        config.landing = "definitely-not-a-page".to_string();
        assert_eq!(config.landing_page(), Page::NotFound);
    }

    #[test]
    fn language_defaults_to_english() {
        let config = Config::default();
        assert_eq!(config.lang(), Lang::En);
    }
}
