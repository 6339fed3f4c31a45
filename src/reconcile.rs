//! Classification of the current module set against the recorded baseline.
//!
//! Every key in the current set lands in exactly one bucket. Baseline keys
//! that vanished from the configuration are tracked separately: they never
//! fail a check and they are dropped from the proposed baseline on upgrade,
//! because the new baseline always fully replaces the old one.
use crate::lock::{ModuleEntry, ModuleSet};
use std::collections::BTreeMap;

/// Outcome of reconciling the current set against the baseline.
#[derive(Debug, Default)]
pub struct Classification {
    /// Present in the baseline with identical hash and version.
    pub unchanged: BTreeMap<String, ModuleEntry>,
    /// Present in the baseline but hash or version drifted.
    pub updated: BTreeMap<String, ModuleEntry>,
    /// Absent from the baseline.
    pub added: BTreeMap<String, ModuleEntry>,
    /// Baseline keys absent from the current configuration.
    pub removed: Vec<String>,
}

impl Classification {
    /// True when persisting the proposed baseline would change the lock file.
    pub fn has_changes(&self) -> bool {
        !self.updated.is_empty() || !self.added.is_empty()
    }
}

/// Partition the current set relative to the baseline.
pub fn classify(current: &ModuleSet, baseline: &ModuleSet) -> Classification {
    let mut outcome = Classification::default();
    for (key, entry) in &current.modules {
        let bucket = match baseline.get(key) {
            None => &mut outcome.added,
            Some(locked) if locked.hash == entry.hash && locked.version == entry.version => {
                &mut outcome.unchanged
            }
            Some(_) => &mut outcome.updated,
        };
        bucket.insert(key.clone(), entry.clone());
    }
    for key in baseline.modules.keys() {
        if current.get(key).is_none() {
            outcome.removed.push(key.clone());
        }
    }
    outcome
}

/// The record that becomes the new baseline on approval: an exact copy of the
/// current set. Stale baseline entries are not merged in.
pub fn proposed_baseline(current: &ModuleSet) -> ModuleSet {
    current.clone()
}
