//! `tflock` entry point: argument parsing, tracing setup, and exit codes.
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod approve;
mod cli;
mod commands;
mod error;
mod fingerprint;
mod lock;
mod manifest;
mod reconcile;
mod report;
#[cfg(test)]
mod testutil;

use approve::{Approver, AutoApprover, InteractiveApprover};
use cli::{Command, RootArgs};

fn main() {
    let args = RootArgs::parse();
    init_tracing();
    if let Err(err) = run(args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: RootArgs) -> anyhow::Result<()> {
    let root = cli::resolve_root(args.source)?;
    match args.command {
        Command::Init => commands::init(&root),
        Command::Check => commands::check(&root),
        Command::Upgrade(upgrade) => {
            let approver: Box<dyn Approver> = if upgrade.auto_approve {
                Box::new(AutoApprover)
            } else {
                Box::new(InteractiveApprover)
            };
            commands::upgrade(&root, approver.as_ref())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
