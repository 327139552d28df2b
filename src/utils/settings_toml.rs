//! Load `.sumpool.toml` from the working directory (CLI only). Library callers build a
//! [`PoolConfig`](crate::PoolConfig) directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::utils::config::PackagePaths;
use crate::{HashAlgorithm, Opts};

#[derive(Debug, Default, Deserialize)]
pub struct SettingsToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    workers: Option<i64>,
    algorithm: Option<HashAlgorithm>,
    verbose: Option<bool>,
    list: Option<String>,
}

/// Parse settings from a TOML string. Unknown keys are ignored.
pub fn parse_settings_toml(s: &str) -> std::result::Result<SettingsToml, toml::de::Error> {
    toml::from_str(s)
}

/// Load the settings file from `dir`. `Ok(None)` when there is no file; an error when it exists
/// but cannot be read or parsed (the caller decides whether that is fatal).
pub fn load_settings_toml(dir: &Path) -> Result<Option<SettingsToml>> {
    let path = dir.join(PackagePaths::get().settings_filename());
    if !path.is_file() {
        return Ok(None);
    }
    let s = std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let file = parse_settings_toml(&s).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(file))
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($section:expr, $opts:expr, $field:ident) => {
        if let Some(v) = $section.$field {
            $opts.$field = v;
        }
    };
}

/// Apply file settings to opts (only fields present in the file). Call before applying CLI flags.
pub fn apply_file_to_settings(file: &SettingsToml, opts: &mut Opts) {
    let section = &file.settings;
    if let Some(n) = section.workers {
        opts.workers = Some(n);
    }
    apply_file_opt!(section, opts, algorithm);
    apply_file_opt!(section, opts, verbose);
    if let Some(ref p) = section.list {
        opts.list = Some(PathBuf::from(p));
    }
}
