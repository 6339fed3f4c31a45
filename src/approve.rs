//! Approval gate for lock file updates.
//!
//! The interactive path is the only blocking point in the whole tool: one
//! line of operator input, no timeout. Rejection is an expected outcome, not
//! an error, so callers can distinguish it from I/O failures.
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Tokens accepted as confirmation, matched exactly and case-sensitively.
const AFFIRMATIVE: &[&str] = &["yes", "y", "Yes", "Y"];

/// Decides whether proposed lock file changes may be persisted.
pub trait Approver {
    fn approve(&self) -> Result<bool>;
}

/// Used by `upgrade --auto-approve`: accepts without interaction.
pub struct AutoApprover;

impl Approver for AutoApprover {
    fn approve(&self) -> Result<bool> {
        Ok(true)
    }
}

/// Blocks on a single line of stdin. Empty input and end-of-input reject.
pub struct InteractiveApprover;

impl Approver for InteractiveApprover {
    fn approve(&self) -> Result<bool> {
        print!("Accept these changes and update the lock file? Only 'yes' or 'y' accepts: ");
        io::stdout().flush().context("flush approval prompt")?;
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("read approval response")?;
        if read == 0 {
            return Ok(false);
        }
        Ok(is_affirmative(line.trim_end_matches(['\r', '\n'])))
    }
}

fn is_affirmative(input: &str) -> bool {
    AFFIRMATIVE.contains(&input)
}
