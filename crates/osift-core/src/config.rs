use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Retry policy parameters (optional section in config.toml).
///
/// The defaults match the tool's original behaviour: a large attempt budget
/// with a short fixed delay, so a flaky onion circuit eventually gets through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of fetch attempts (including the first).
    pub max_attempts: u32,
    /// Fixed delay in seconds between attempts.
    pub delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5000,
            delay_secs: 2,
        }
    }
}

/// Global configuration loaded from `~/.config/osift/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsiftConfig {
    /// Default directory downloads are staged into.
    pub download_dir: PathBuf,
    /// SOCKS proxy URL the fetcher routes through (None = direct connection).
    /// The default targets a local Tor daemon.
    #[serde(default = "default_proxy")]
    pub proxy: Option<String>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

fn default_proxy() -> Option<String> {
    Some("socks5h://127.0.0.1:9050".to_string())
}

impl Default for OsiftConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("./downloads"),
            proxy: default_proxy(),
            retry: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("osift")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OsiftConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = OsiftConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: OsiftConfig = toml::from_str(&data)?;
    Ok(cfg)
}
