//! Module lock data model and on-disk store.
//!
//! The lock file records the approved state of every fetched module as a map
//! keyed by module key, unlike the host record which is a flat list. Keys stay
//! in `BTreeMap` order so successive writes diff cleanly in version control.
use crate::error::Error;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Conventional lock file name at the project root.
pub const LOCK_FILE_NAME: &str = ".terraform.module.hcl";

/// One fetched module reference with its approved content fingerprint.
///
/// Field names on the wire follow the host tool's PascalCase convention so
/// lock entries line up with modules.json when read side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Dir")]
    pub dir: String,
    #[serde(rename = "Hash")]
    pub hash: String,
}

/// A keyed set of module entries.
///
/// Lookup by key never depends on insertion order; the configuration root
/// (empty key) is never a member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSet {
    #[serde(rename = "Modules")]
    pub modules: BTreeMap<String, ModuleEntry>,
}

impl ModuleSet {
    pub fn insert(&mut self, entry: ModuleEntry) {
        self.modules.insert(entry.key.clone(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&ModuleEntry> {
        self.modules.get(key)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Path of the lock file under a project root.
pub fn lock_path(root: &Path) -> PathBuf {
    root.join(LOCK_FILE_NAME)
}

/// Load the approved baseline set from the lock file.
///
/// A missing file is reported as [`Error::LockMissing`] so `init` can branch
/// on it; everything else is `Corrupt` or `Io`.
pub fn read(root: &Path) -> Result<ModuleSet, Error> {
    let path = lock_path(root);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::LockMissing { path })
        }
        Err(err) => return Err(Error::Io { path, source: err }),
    };
    serde_json::from_slice(&bytes).map_err(|err| Error::Corrupt { path, source: err })
}

/// Persist a new baseline set.
///
/// Writes to a sibling temp file and renames it into place so a crash
/// mid-write cannot leave a truncated lock behind a previously valid one.
pub fn write(root: &Path, set: &ModuleSet) -> Result<()> {
    let path = lock_path(root);
    let mut text = serde_json::to_string_pretty(set).context("serialize module lock")?;
    text.push('\n');
    let tmp = root.join(format!("{LOCK_FILE_NAME}.tmp"));
    fs::write(&tmp, text.as_bytes()).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, &path).with_context(|| format!("publish {}", path.display()))?;
    Ok(())
}
