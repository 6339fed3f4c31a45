//! Human-readable tables for reconciliation summaries.
use crate::lock::ModuleEntry;
use std::collections::BTreeMap;

const HASH_PREVIEW_LEN: usize = 12;

/// Render a keyed bucket of modules as an aligned table.
pub fn render_table(modules: &BTreeMap<String, ModuleEntry>) -> String {
    let mut key_width = "KEY".len();
    let mut version_width = "VERSION".len();
    for entry in modules.values() {
        key_width = key_width.max(entry.key.len());
        version_width = version_width.max(entry.version.len());
    }
    let hash_width = HASH_PREVIEW_LEN;

    let mut out = String::new();
    out.push_str(&format!(
        "  {:key_width$}  {:version_width$}  {:hash_width$}  SOURCE\n",
        "KEY", "VERSION", "HASH"
    ));
    for entry in modules.values() {
        out.push_str(&format!(
            "  {:key_width$}  {:version_width$}  {:hash_width$}  {}\n",
            entry.key,
            entry.version,
            hash_preview(&entry.hash),
            entry.source
        ));
    }
    out
}

/// Print a bucket under a heading, skipping empty buckets entirely.
pub fn print_bucket(heading: &str, modules: &BTreeMap<String, ModuleEntry>) {
    if modules.is_empty() {
        return;
    }
    println!("{heading}");
    print!("{}", render_table(modules));
}

fn hash_preview(hash: &str) -> &str {
    if hash.len() > HASH_PREVIEW_LEN {
        &hash[..HASH_PREVIEW_LEN]
    } else {
        hash
    }
}
