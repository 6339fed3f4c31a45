//! Deterministic content fingerprints for module directories.
//!
//! The digest covers entry names and file contents over a sorted recursive
//! walk, so two trees with identical content hash identically regardless of
//! directory-listing order or when they were fetched.
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Hash a directory subtree into a lowercase hex sha256 digest.
pub fn hash_dir(path: &Path) -> Result<String> {
    let mut hasher = Sha256::new();
    hash_path(&mut hasher, path, path)?;
    Ok(format!("{:x}", hasher.finalize()))
}

fn hash_path(hasher: &mut Sha256, root: &Path, path: &Path) -> Result<()> {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let meta = fs::symlink_metadata(path).with_context(|| format!("inspect {}", path.display()))?;
    let file_type = meta.file_type();
    if file_type.is_symlink() {
        // Hash the link text, not the target content.
        hasher.update(b"symlink:");
        hasher.update(rel.to_string_lossy().as_bytes());
        let target = fs::read_link(path).with_context(|| format!("read {}", path.display()))?;
        hasher.update(target.to_string_lossy().as_bytes());
        return Ok(());
    }
    if file_type.is_dir() {
        hasher.update(b"dir:");
        hasher.update(rel.to_string_lossy().as_bytes());
        let mut entries: Vec<_> = fs::read_dir(path)
            .with_context(|| format!("read {}", path.display()))?
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("read {}", path.display()))?;
        entries.sort_by_key(|entry| entry.file_name());
        for entry in entries {
            hash_path(hasher, root, &entry.path())?;
        }
        return Ok(());
    }
    if file_type.is_file() {
        hasher.update(b"file:");
        hasher.update(rel.to_string_lossy().as_bytes());
        let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        hasher.update(&bytes);
    }
    Ok(())
}
