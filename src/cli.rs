//! CLI argument types for the lock workflow.
//!
//! The project root is resolved once from `--source` (or the working
//! directory) and threaded into every operation as a parameter; no command
//! reads ambient global state.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tflock",
    version,
    about = "Lock and verify content hashes of fetched Terraform modules",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Project root containing the Terraform configuration (defaults to the
    /// current directory)
    #[arg(long, short = 's', global = true, value_name = "DIR")]
    pub source: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the module lock file from the initialized configuration
    Init,
    /// Verify that fetched modules still match the lock file
    Check,
    /// Reconcile the lock file with the current configuration
    Upgrade(UpgradeArgs),
}

#[derive(Parser, Debug)]
pub struct UpgradeArgs {
    /// Persist the new lock file without interactive confirmation
    #[arg(long)]
    pub auto_approve: bool,
}

/// Resolve the project root the operation runs against.
pub fn resolve_root(source: Option<PathBuf>) -> Result<PathBuf> {
    match source {
        Some(path) => Ok(path),
        None => std::env::current_dir().context("resolve current working directory"),
    }
}
