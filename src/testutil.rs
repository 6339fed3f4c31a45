//! Shared fixture builders for unit tests: synthetic project roots with an
//! initialized `.terraform` cache and a host modules.json record.
use std::fs;
use std::path::Path;

/// Lay out a project root with the given fetched modules, each materialized
/// as a single `main.tf` with the given content. The record also carries the
/// empty-key configuration root, which readers must drop.
pub fn seed_project(root: &Path, modules: &[(&str, &str, &str)]) {
    let mut records = vec![String::from(r#"{"Key": "", "Source": "", "Dir": "."}"#)];
    for (key, version, content) in modules {
        let dir = format!(".terraform/modules/{key}");
        write_file(&root.join(&dir).join("main.tf"), content);
        records.push(format!(
            r#"{{"Key": "{key}", "Source": "registry.example.com/acme/{key}/azurerm", "Version": "{version}", "Dir": "{dir}"}}"#
        ));
    }
    let record = format!(r#"{{"Modules": [{}]}}"#, records.join(", "));
    write_file(&root.join(".terraform/modules/modules.json"), &record);
}

/// Rewrite a fetched module's content to simulate drift after locking.
pub fn mutate_module(root: &Path, key: &str, content: &str) {
    write_file(
        &root.join(".terraform/modules").join(key).join("main.tf"),
        content,
    );
}

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(path, contents.as_bytes()).expect("write file");
}
