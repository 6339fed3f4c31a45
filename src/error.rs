//! Error kinds surfaced by the lock workflow.
//!
//! Commands bubble these through `anyhow`; the variants exist so callers can
//! branch on the condition (missing lock vs corrupt lock) instead of matching
//! on message text.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// `terraform init` has not produced a `.terraform` directory or a
    /// modules.json record under the project root.
    #[error("terraform has not been initialized under {}", root.display())]
    NotInitialized { root: PathBuf },

    /// The lock file does not exist yet.
    #[error("module lock file {} not found; run `tflock init` first", path.display())]
    LockMissing { path: PathBuf },

    /// A JSON document exists but does not parse into the expected shape.
    #[error("could not parse {}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An I/O failure other than a missing file.
    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fingerprinting a module directory failed.
    #[error("could not fingerprint module {key}: {reason}")]
    Hashing { key: String, reason: String },

    /// `init` found an existing lock file it refuses to overwrite.
    #[error("module lock file {} already exists", path.display())]
    AlreadyInitialized { path: PathBuf },

    /// `check` found modules that drifted from the lock file.
    #[error("non matching or missing modules found in the configuration")]
    Mismatch,

    /// The operator declined the proposed lock file changes.
    #[error("changes not accepted")]
    NotApproved,
}
