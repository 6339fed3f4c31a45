//! `tflock check`: verify the configuration against the lock file.
use crate::error::Error;
use crate::reconcile;
use crate::report;
use anyhow::Result;
use std::path::Path;

pub fn run(root: &Path) -> Result<()> {
    let (current, baseline) = super::load_sets(root)?;
    let outcome = reconcile::classify(&current, &baseline);

    if !outcome.updated.is_empty() {
        report::print_bucket(
            "Modules that do not match the lock file:",
            &outcome.updated,
        );
        println!("You may wish to update the lock file using `tflock upgrade`.");
    }
    if !outcome.added.is_empty() {
        report::print_bucket(
            "Modules not found in the lock file:",
            &outcome.added,
        );
        println!("You may wish to add these modules using `tflock upgrade`.");
    }
    // Baseline entries with no counterpart in the configuration are not a
    // check failure; the next upgrade drops them.
    for key in &outcome.removed {
        tracing::debug!(%key, "locked module absent from the configuration");
    }

    if outcome.has_changes() {
        return Err(Error::Mismatch.into());
    }
    println!("All modules match the lock file.");
    Ok(())
}
