//! `tflock init`: record the first approved baseline.
use crate::error::Error;
use crate::lock;
use crate::manifest;
use crate::report;
use anyhow::Result;
use std::path::Path;

pub fn run(root: &Path) -> Result<()> {
    let lock_path = lock::lock_path(root);
    if lock_path.exists() {
        return Err(Error::AlreadyInitialized { path: lock_path }.into());
    }

    let current = manifest::read_current_set(root)?;
    if current.is_empty() {
        println!("No fetched modules found; nothing to lock.");
        return Ok(());
    }

    lock::write(root, &current)?;
    println!(
        "Locked {} module(s) to {}",
        current.len(),
        lock_path.display()
    );
    report::print_bucket("Locked modules:", &current.modules);
    Ok(())
}
