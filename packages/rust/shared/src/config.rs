//! Application configuration for readcache.
//!
//! User config lives at `~/.config/readcache/config.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReadcacheError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Config directory name under `~/.config`.
const CONFIG_DIR_NAME: &str = "readcache";

/// Default cache file name, matching what the feed reader expects to read.
const CACHE_FILE_NAME: &str = "tmp-rendered.txt";

// ---------------------------------------------------------------------------
// Config structs (matching config.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Cache file settings.
    #[serde(default)]
    pub cache: CacheSection,

    /// HTTP fetch settings.
    #[serde(default)]
    pub fetch: FetchSection,
}

/// `[cache]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSection {
    /// Directory holding the cache file. `None` means `~/.config/readcache`.
    /// A leading `~/` is expanded against the user's home directory.
    #[serde(default)]
    pub dir: Option<String>,

    /// Name of the cache file inside the cache directory.
    #[serde(default = "default_cache_file_name")]
    pub file_name: String,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            dir: None,
            file_name: default_cache_file_name(),
        }
    }
}

fn default_cache_file_name() -> String {
    CACHE_FILE_NAME.into()
}

/// `[fetch]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSection {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header. `None` means the built-in `readcache/<version>`.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Maximum redirect hops to follow.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl Default for FetchSection {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            max_redirects: default_max_redirects(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
fn default_max_redirects() -> usize {
    5
}

// ---------------------------------------------------------------------------
// Runtime configs (merged from config file + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime cache configuration with the cache directory fully resolved.
///
/// The default path is resolved here, at call time, from the user's home
/// directory — never baked into a function signature as a literal default.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Resolved directory holding the cache file.
    pub dir: PathBuf,
    /// Cache file name inside `dir`.
    pub file_name: String,
}

impl CacheConfig {
    /// Resolve the cache config from the application config.
    pub fn resolve(config: &AppConfig) -> Result<Self> {
        let dir = match &config.cache.dir {
            Some(dir) => expand_home(dir)?,
            None => config_dir()?,
        };
        Ok(Self {
            dir,
            file_name: config.cache.file_name.clone(),
        })
    }

    /// Full path to the cache file.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Runtime fetch configuration.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header, `None` for the built-in default.
    pub user_agent: Option<String>,
    /// Maximum redirect hops.
    pub max_redirects: usize,
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            timeout_secs: config.fetch.timeout_secs,
            user_agent: config.fetch.user_agent.clone(),
            max_redirects: config.fetch.max_redirects,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.config/readcache/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ReadcacheError::config("could not determine home directory"))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.config/readcache/config.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ReadcacheError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        ReadcacheError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Expand `~` or a leading `~/` against the user's home directory.
fn expand_home(path: &str) -> Result<PathBuf> {
    if path == "~" || path.starts_with("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| ReadcacheError::config("could not determine home directory"))?;
        let rest = path.trim_start_matches('~').trim_start_matches('/');
        if rest.is_empty() {
            Ok(home)
        } else {
            Ok(home.join(rest))
        }
    } else {
        Ok(PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("file_name"));
        assert!(toml_str.contains("timeout_secs"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.cache.file_name, "tmp-rendered.txt");
        assert_eq!(parsed.fetch.timeout_secs, 30);
        assert_eq!(parsed.fetch.max_redirects, 5);
    }

    #[test]
    fn config_with_overrides() {
        let toml_str = r#"
[cache]
dir = "/tmp/readcache"
file_name = "article.txt"

[fetch]
timeout_secs = 10
user_agent = "feedreader/2.0"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.cache.dir.as_deref(), Some("/tmp/readcache"));
        assert_eq!(config.cache.file_name, "article.txt");
        assert_eq!(config.fetch.timeout_secs, 10);
        assert_eq!(config.fetch.user_agent.as_deref(), Some("feedreader/2.0"));
    }

    #[test]
    fn cache_config_resolves_explicit_dir() {
        let mut config = AppConfig::default();
        config.cache.dir = Some("/tmp/readcache".into());
        let cache = CacheConfig::resolve(&config).expect("resolve");
        assert_eq!(cache.dir, PathBuf::from("/tmp/readcache"));
        assert_eq!(
            cache.file_path(),
            PathBuf::from("/tmp/readcache/tmp-rendered.txt")
        );
    }

    #[test]
    fn cache_config_expands_tilde() {
        let mut config = AppConfig::default();
        config.cache.dir = Some("~/articles".into());
        let cache = CacheConfig::resolve(&config).expect("resolve");
        assert!(!cache.dir.to_string_lossy().contains('~'));
        assert!(cache.dir.ends_with("articles"));
    }

    #[test]
    fn cache_config_expands_bare_tilde_to_home() {
        let mut config = AppConfig::default();
        config.cache.dir = Some("~".into());
        let cache = CacheConfig::resolve(&config).expect("resolve");
        assert_eq!(cache.dir, dirs::home_dir().expect("home dir"));
        assert!(!cache.dir.to_string_lossy().contains('~'));
    }

    #[test]
    fn cache_config_default_is_under_home() {
        let config = AppConfig::default();
        let cache = CacheConfig::resolve(&config).expect("resolve");
        assert!(cache.dir.ends_with(".config/readcache"));
        assert_eq!(cache.file_name, "tmp-rendered.txt");
    }

    #[test]
    fn fetch_config_from_app_config() {
        let app = AppConfig::default();
        let fetch = FetchConfig::from(&app);
        assert_eq!(fetch.timeout_secs, 30);
        assert_eq!(fetch.max_redirects, 5);
        assert!(fetch.user_agent.is_none());
    }
}
