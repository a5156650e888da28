//! Configuration management

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_AUTH_PREFIX, DEFAULT_LOG_LEVEL, DEFAULT_PUBLIC_PATHS, DEFAULT_REDIRECT, ENV_PREFIX,
    ENV_SELECTOR,
};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AccessConfig {
    pub guard: GuardSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    pub telemetry: TelemetrySettings,
}

/// Route guard rules that do not depend on the session
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GuardSettings {
    pub auth_prefix: String,
    pub public_paths: Vec<String>,
    pub default_redirect: String,
    /// When set, unauthenticated navigation also asks for a redirect here
    #[serde(default)]
    pub unauthenticated_redirect: Option<String>,
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self {
            auth_prefix: DEFAULT_AUTH_PREFIX.to_string(),
            public_paths: DEFAULT_PUBLIC_PATHS.iter().map(|p| p.to_string()).collect(),
            default_redirect: DEFAULT_REDIRECT.to_string(),
            unauthenticated_redirect: None,
        }
    }
}

/// Optional JSON files replacing the built-in catalogs
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogSettings {
    #[serde(default)]
    pub menu_path: Option<PathBuf>,
    #[serde(default)]
    pub routes_path: Option<PathBuf>,
    #[serde(default)]
    pub pos_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Pretty,
            log_dir: None,
        }
    }
}

impl AccessConfig {
    /// Layers `<dir>/default`, `<dir>/<ACCESS_ENV>` and `ACCESS_*` environment
    /// variables over the built-in defaults.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var(ENV_SELECTOR).unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("guard.auth_prefix", DEFAULT_AUTH_PREFIX)?
            .set_default("guard.public_paths", DEFAULT_PUBLIC_PATHS.to_vec())?
            .set_default("guard.default_redirect", DEFAULT_REDIRECT)?
            .set_default("telemetry.level", DEFAULT_LOG_LEVEL)?
            .set_default("telemetry.format", "pretty")?
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(&env)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("guard.public_paths")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let cfg = AccessConfig::load_from(Path::new("no-such-config-dir")).unwrap();
        assert_eq!(cfg.guard.auth_prefix, "/auth");
        assert_eq!(cfg.guard.default_redirect, "/dashboard");
        assert!(cfg.guard.public_paths.contains(&"/pos".to_string()));
        assert!(cfg.catalog.menu_path.is_none());
    }

    #[test]
    fn test_default_guard_settings_match_constants() {
        let guard = GuardSettings::default();
        assert_eq!(guard.public_paths, vec!["/", "/dashboard", "/pos"]);
        assert!(guard.unauthenticated_redirect.is_none());
    }

    #[test]
    fn test_log_format_parses_lowercase() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
    }
}
