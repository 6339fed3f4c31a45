//! `tflock upgrade`: reconcile and, behind the approval gate, replace the
//! lock file with the current configuration state.
use crate::approve::Approver;
use crate::error::Error;
use crate::lock;
use crate::reconcile::{self, Classification};
use crate::report;
use anyhow::Result;
use std::path::Path;

pub fn run(root: &Path, approver: &dyn Approver) -> Result<()> {
    let (current, baseline) = super::load_sets(root)?;
    let outcome = reconcile::classify(&current, &baseline);

    if !outcome.has_changes() {
        println!("No changes to the module lock file.");
        return Ok(());
    }

    present(&outcome);
    if !approver.approve()? {
        tracing::info!("operator rejected the proposed lock file changes");
        return Err(Error::NotApproved.into());
    }

    let proposed = reconcile::proposed_baseline(&current);
    lock::write(root, &proposed)?;
    println!("Updated {}", lock::lock_path(root).display());
    Ok(())
}

fn present(outcome: &Classification) {
    report::print_bucket("Modules to update in the lock file:", &outcome.updated);
    report::print_bucket("Modules to add to the lock file:", &outcome.added);
    println!(
        "{} to update, {} to add, {} unchanged.",
        outcome.updated.len(),
        outcome.added.len(),
        outcome.unchanged.len()
    );
}
