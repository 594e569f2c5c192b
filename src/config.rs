//! Plugin configuration: a small TOML document loaded by the host's
//! persistence mechanism, patched in place when fields from newer plugin
//! versions are missing.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::io;
use std::path::Path;
use std::fs;
use thiserror::Error;
use toml_edit::{value, DocumentMut};
use tracing::{debug, warn};

/// Version history:
/// 1.0.0: rename by grid and biome
/// 1.1.0: add rename by nearest monument and by owner name
pub const VERSION: &str = "1.1.0";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config deserialization error")]
    Parse(#[from] toml::de::Error),

    #[error("config serialization error")]
    Serialize(#[from] toml::ser::Error),

    #[error("config document error")]
    Document(#[from] toml_edit::TomlError),

    #[error("config version {0} too new to be loaded")]
    TooNew(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub version: String,
    pub rename_by_grid: bool,
    pub rename_by_biome: bool,
    pub rename_by_landmark: bool,
    pub rename_by_player: bool,
    pub bag_name_format: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            version: VERSION.to_owned(),
            rename_by_grid: true,
            rename_by_biome: true,
            rename_by_landmark: false,
            rename_by_player: false,
            bag_name_format: "{grid} - {biome}".to_owned(),
        }
    }
}

impl Config {
    /// Loads the config from `path`, creating it with defaults when missing.
    ///
    /// A file written by an older plugin version is upgraded in place:
    /// fields it does not have yet are filled from defaults (fields already
    /// present are never touched) and the original file is backed up before
    /// being rewritten. Re-loading an already-current file is a no-op.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let str = fs::read_to_string(path).unwrap_or_default();
        if str.trim().is_empty() {
            let config = Config::default();
            config.save(path)?;
            return Ok(config);
        }

        let mut doc = str.parse::<DocumentMut>()?;
        let stored = doc
            .get("version")
            .and_then(|item| item.as_str())
            .unwrap_or("0.0.0")
            .to_owned();

        let mut migrated = false;
        match compare_versions(&stored, VERSION) {
            Ordering::Greater => return Err(ConfigError::TooNew(stored)),
            Ordering::Less => {
                warn!("config version {stored} is out of date, updating to {VERSION}");
                if compare_versions(&stored, "1.0.0") == Ordering::Less {
                    // Nothing predates 1.0.0; start over from defaults.
                    doc = DocumentMut::new();
                }
                doc["version"] = value(VERSION);
                migrated = true;
            }
            Ordering::Equal => {}
        }

        fix_missing(&mut doc);

        let patched = doc.to_string();
        if str != patched {
            if migrated {
                make_backup(path)?;
            }
            fs::write(path, &patched)?;
            debug!("wrote updated config to {}", path.display());
        }

        Ok(toml::from_str(&patched)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Inserts defaults for any missing field, leaving present fields untouched.
/// Safe to run repeatedly.
fn fix_missing(doc: &mut DocumentMut) {
    let defaults = Config::default();
    doc.entry("version")
        .or_insert_with(|| value(defaults.version.as_str()));
    doc.entry("rename_by_grid")
        .or_insert_with(|| value(defaults.rename_by_grid));
    doc.entry("rename_by_biome")
        .or_insert_with(|| value(defaults.rename_by_biome));
    doc.entry("rename_by_landmark")
        .or_insert_with(|| value(defaults.rename_by_landmark));
    doc.entry("rename_by_player")
        .or_insert_with(|| value(defaults.rename_by_player));
    doc.entry("bag_name_format")
        .or_insert_with(|| value(defaults.bag_name_format.as_str()));
}

fn make_backup(path: &Path) -> io::Result<()> {
    let mut backup_path = path.with_extension("bak");
    if backup_path.exists() {
        let mut num = 1;
        loop {
            backup_path = path.with_extension(format!("bak.{}", num));
            if !backup_path.exists() {
                break;
            }
            num += 1;
        }
    }
    fs::copy(path, backup_path)?;
    Ok(())
}

/// Compares dotted version strings by numeric components; missing or
/// malformed components count as zero.
fn compare_versions(a: &str, b: &str) -> Ordering {
    let component = |s: &str, i: usize| -> u64 {
        s.split('.')
            .nth(i)
            .and_then(|part| part.trim().parse().ok())
            .unwrap_or(0)
    };
    let len = a.split('.').count().max(b.split('.').count());
    for i in 0..len {
        match component(a, i).cmp(&component(b, i)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}
