//! Configuration file handling.
//!
//! Defaults live in `~/.config/autoslug/config.toml` (created on first run).
//! CLI list flags extend the configured lists; CLI scalar flags override.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::ext;

/// Global configuration loaded from `~/.config/autoslug/config.toml`.
/// Extensions are stored with their leading dot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoslugConfig {
    /// Extensions recognized on top of the built-in MIME-style list.
    #[serde(default = "default_ok_exts")]
    pub ok_exts: Vec<String>,
    /// Extensions whose stems use underscores instead of dashes.
    #[serde(default = "default_no_dash_exts")]
    pub no_dash_exts: Vec<String>,
    /// Extensions skipped entirely.
    #[serde(default)]
    pub ignore_exts: Vec<String>,
    /// Stems skipped entirely (matched against the name minus extension).
    #[serde(default = "default_ignore_stems")]
    pub ignore_stems: Vec<String>,
    /// Glob patterns skipped entirely.
    #[serde(default = "default_ignore_globs")]
    pub ignore_globs: Vec<String>,
    /// Leading affixes preserved verbatim.
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
    /// Trailing affixes (before the extension) preserved verbatim.
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
    /// Extension canonicalization applied to recognized extensions.
    #[serde(default = "default_ext_map")]
    pub ext_map: BTreeMap<String, String>,
    /// Stem length budget (excluding extension).
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Zero-pad numeric name prefixes to this many digits.
    #[serde(default)]
    pub num_digits: Option<u32>,
    /// Warn when a resulting path exceeds this many characters.
    #[serde(default)]
    pub warn_limit: Option<usize>,
    /// Fail when a resulting path exceeds this many characters.
    #[serde(default)]
    pub error_limit: Option<usize>,
}

fn default_ok_exts() -> Vec<String> {
    ext::DEFAULT_OK_EXTS.iter().map(|s| s.to_string()).collect()
}

fn default_no_dash_exts() -> Vec<String> {
    ext::DEFAULT_NO_DASH_EXTS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_ignore_stems() -> Vec<String> {
    vec!["README".to_string(), "LICENSE".to_string()]
}

fn default_ignore_globs() -> Vec<String> {
    vec![
        ".git".to_string(),
        ".DS_Store".to_string(),
        "__pycache__".to_string(),
    ]
}

fn default_prefixes() -> Vec<String> {
    vec!["_".to_string(), ".".to_string()]
}

fn default_suffixes() -> Vec<String> {
    vec!["_".to_string()]
}

fn default_ext_map() -> BTreeMap<String, String> {
    [(".yml".to_string(), ".yaml".to_string())]
        .into_iter()
        .collect()
}

impl Default for AutoslugConfig {
    fn default() -> Self {
        Self {
            ok_exts: default_ok_exts(),
            no_dash_exts: default_no_dash_exts(),
            ignore_exts: Vec::new(),
            ignore_stems: default_ignore_stems(),
            ignore_globs: default_ignore_globs(),
            prefixes: default_prefixes(),
            suffixes: default_suffixes(),
            ext_map: default_ext_map(),
            max_length: None,
            num_digits: None,
            warn_limit: None,
            error_limit: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("autoslug")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AutoslugConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AutoslugConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: AutoslugConfig = toml::from_str(&data)?;
    Ok(cfg)
}
