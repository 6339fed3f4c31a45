//! Reader for the host tool's module instantiation record.
//!
//! `terraform init` materializes every module it fetches under
//! `.terraform/modules/` and enumerates them in modules.json as a flat list.
//! This module converts that list into a keyed [`ModuleSet`], dropping the
//! configuration root and anything authored locally, and fingerprints each
//! surviving entry.
use crate::error::Error;
use crate::fingerprint;
use crate::lock::{ModuleEntry, ModuleSet};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Host record location relative to the project root.
pub const MODULES_RECORD_REL: &str = ".terraform/modules/modules.json";

const MANAGED_CACHE_DIR: &str = ".terraform";

#[derive(Debug, Deserialize)]
struct HostRecord {
    #[serde(rename = "Modules")]
    modules: Vec<HostModule>,
}

/// One entry of the host record. `Hash` is absent here; the record predates
/// any fingerprinting.
#[derive(Debug, Deserialize)]
struct HostModule {
    #[serde(rename = "Key")]
    key: String,
    #[serde(rename = "Source", default)]
    source: String,
    #[serde(rename = "Version", default)]
    version: String,
    #[serde(rename = "Dir")]
    dir: String,
}

/// Build the current module set from the host record, fingerprinting every
/// fetched module directory.
pub fn read_current_set(root: &Path) -> Result<ModuleSet, Error> {
    if !root.join(MANAGED_CACHE_DIR).is_dir() {
        return Err(Error::NotInitialized {
            root: root.to_path_buf(),
        });
    }

    let path = root.join(MODULES_RECORD_REL);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotInitialized {
                root: root.to_path_buf(),
            })
        }
        Err(err) => return Err(Error::Io { path, source: err }),
    };
    let record: HostRecord =
        serde_json::from_slice(&bytes).map_err(|err| Error::Corrupt { path, source: err })?;

    let mut set = ModuleSet::default();
    for module in record.modules {
        if module.key.is_empty() {
            // The configuration root lists itself with an empty key.
            continue;
        }
        if !is_fetched(&module.dir) {
            tracing::info!(key = %module.key, dir = %module.dir, "skipping locally sourced module");
            continue;
        }
        let hash = fingerprint::hash_dir(&root.join(&module.dir)).map_err(|err| Error::Hashing {
            key: module.key.clone(),
            reason: format!("{err:#}"),
        })?;
        tracing::debug!(key = %module.key, %hash, "fingerprinted module");
        set.insert(ModuleEntry {
            key: module.key,
            source: module.source,
            version: module.version,
            dir: module.dir,
            hash,
        });
    }
    Ok(set)
}

/// Fetched modules always reside under the managed `.terraform/` cache;
/// anything else was authored in the configuration itself.
fn is_fetched(dir: &str) -> bool {
    Path::new(dir)
        .components()
        .next()
        .is_some_and(|first| first.as_os_str() == MANAGED_CACHE_DIR)
}
