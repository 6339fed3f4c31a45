//! Shared test infrastructure for integration tests: synthetic Terraform
//! project roots and a runner for the tflock binary.
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

pub const LOCK_FILE_NAME: &str = ".terraform.module.hcl";

/// Lay out a project root with the given fetched modules, each a single
/// `main.tf`, plus the host modules.json record including the empty-key
/// configuration root and one locally sourced module.
pub fn seed_project(root: &Path, modules: &[(&str, &str, &str)]) {
    let mut records = vec![
        String::from(r#"{"Key": "", "Source": "", "Dir": "."}"#),
        String::from(r#"{"Key": "local_net", "Source": "./modules/net", "Dir": "modules/net"}"#),
    ];
    write_file(&root.join("modules/net/main.tf"), "locally authored\n");
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

/// Run the tflock binary against a project root, optionally feeding stdin.
pub fn run_tflock(root: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let bin = env!("CARGO_BIN_EXE_tflock");
    let mut command = Command::new(bin);
    command
        .args(args)
        .arg("--source")
        .arg(root)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = command.spawn().expect("spawn tflock");
    if let Some(input) = stdin {
        child
            .stdin
            .as_mut()
            .expect("child stdin")
            .write_all(input.as_bytes())
            .expect("write stdin");
    }
    drop(child.stdin.take());
    child.wait_with_output().expect("wait for tflock")
}

pub fn lock_bytes(root: &Path) -> Vec<u8> {
    fs::read(root.join(LOCK_FILE_NAME)).expect("read lock file")
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(path, contents.as_bytes()).expect("write file");
}
