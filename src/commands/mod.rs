//! Operation flows behind the CLI subcommands.
mod check;
mod init;
mod upgrade;

pub use check::run as check;
pub use init::run as init;
pub use upgrade::run as upgrade;

use crate::error::Error;
use crate::lock::{self, ModuleSet};
use crate::manifest;
use std::path::Path;

/// Load the current and baseline sets for an operation that requires an
/// existing lock file.
fn load_sets(root: &Path) -> Result<(ModuleSet, ModuleSet), Error> {
    let current = manifest::read_current_set(root)?;
    let baseline = lock::read(root)?;
    Ok((current, baseline))
}
