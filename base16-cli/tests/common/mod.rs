//! Local upstream repositories for driving the binary without network.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) {
    let out = Command::new("git")
        .args([
            "-c",
            "user.name=base16 tests",
            "-c",
            "user.email=tests@example.invalid",
            "-c",
            "init.defaultBranch=master",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("spawn git");
    assert!(
        out.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

fn init_repo(dir: &Path, files: &[(&str, String)]) -> String {
    std::fs::create_dir_all(dir).expect("mkdir repo");
    git(dir, &["init", "-q"]);
    for (rel, body) in files {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("mkdir");
        }
        std::fs::write(&path, body).expect("write fixture file");
    }
    git(dir, &["add", "-A"]);
    git(dir, &["commit", "-q", "-m", "fixture"]);
    dir.to_string_lossy().into_owned()
}

fn ocean_yaml() -> String {
    let mut yaml = String::from("scheme: \"Ocean\"\nauthor: \"Chris Kempson\"\n");
    for i in 0..16 {
        let color = if i == 0 { "2b303b" } else { "111111" };
        yaml.push_str(&format!("base{i:02X}: \"{color}\"\n"));
    }
    yaml
}

/// One scheme family (`ocean`) and one template family (`i3`).
pub struct Upstream {
    pub dir: TempDir,
    pub cache: PathBuf,
    pub schemes_source: String,
    pub templates_source: String,
}

pub fn upstream() -> Upstream {
    let dir = TempDir::new().expect("tempdir");
    let root = dir.path();

    let ocean = init_repo(&root.join("up/ocean"), &[("ocean.yaml", ocean_yaml())]);
    let i3 = init_repo(
        &root.join("up/i3"),
        &[
            (
                "templates/config.yaml",
                "default:\n  output: themes\n  extension: .config\n".to_owned(),
            ),
            (
                "templates/default.mustache",
                "set $base00 #{{base00-hex}}\n".to_owned(),
            ),
        ],
    );
    let schemes_source = init_repo(
        &root.join("up/schemes-source"),
        &[("list.yaml", format!("ocean: {ocean}\n"))],
    );
    let templates_source = init_repo(
        &root.join("up/templates-source"),
        &[("list.yaml", format!("i3: {i3}\n"))],
    );

    let cache = root.join("cache");
    std::fs::create_dir_all(&cache).expect("mkdir cache");
    Upstream {
        dir,
        cache,
        schemes_source,
        templates_source,
    }
}

impl Upstream {
    /// The binary with cache and sources pointed at this upstream.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("base16-builder"));
        cmd.arg("--cache-dir")
            .arg(&self.cache)
            .arg("--schemes-source")
            .arg(&self.schemes_source)
            .arg("--templates-source")
            .arg(&self.templates_source)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}
