//! Throwaway local git repositories for mirror and pipeline tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use base16_core::palette::base_keys;

/// Run git in `dir` with a fixed identity, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
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
        status.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&status.stderr)
    );
}

/// Write `files` into `dir` (creating parents) and commit them.
pub fn commit(dir: &Path, files: &[(&str, &str)]) {
    for (rel, body) in files {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("mkdir");
        }
        std::fs::write(&path, body).expect("write fixture file");
    }
    git(dir, &["add", "-A"]);
    git(dir, &["commit", "-q", "-m", "fixture"]);
}

/// Create a repository at `dir` holding `files`; returns its URL (the path).
pub fn init_repo(dir: &Path, files: &[(&str, &str)]) -> String {
    std::fs::create_dir_all(dir).expect("mkdir repo");
    git(dir, &["init", "-q"]);
    commit(dir, files);
    dir.to_string_lossy().into_owned()
}

/// A scheme file whose `base00` is `base00` and every other base `111111`.
pub fn scheme_yaml(name: &str, base00: &str) -> String {
    let mut yaml = format!("scheme: \"{name}\"\nauthor: \"Fixture Author\"\n");
    for key in base_keys() {
        let color = if key == "base00" { base00 } else { "111111" };
        yaml.push_str(&format!("{key}: \"{color}\"\n"));
    }
    yaml
}

/// Upstream repositories for one scheme family and one or more template families.
pub struct Upstream {
    pub schemes_source: String,
    pub templates_source: String,
    pub scheme_family: PathBuf,
}

/// `solarflare` scheme family with `solarflare`, `solarflare-light` and
/// `ocean` schemes; template families `i3` and `vim`.
pub fn standard_upstream(root: &Path) -> Upstream {
    let scheme_family = root.join("up/solarflare-family");
    let solarflare = scheme_yaml("Solarflare", "002b36");
    let light = scheme_yaml("Solarflare Light", "fdf6e3");
    let ocean = scheme_yaml("Ocean", "2b303b");
    let solarflare_url = init_repo(
        &scheme_family,
        &[
            ("solarflare.yaml", solarflare.as_str()),
            ("solarflare-light.yaml", light.as_str()),
            ("ocean.yaml", ocean.as_str()),
            ("README.md", "not a scheme"),
        ],
    );
    let list = format!("solarflare: {solarflare_url}\n");
    let schemes_source = init_repo(&root.join("up/schemes-source"), &[("list.yaml", list.as_str())]);

    let i3_url = init_repo(
        &root.join("up/i3"),
        &[
            (
                "templates/config.yaml",
                "config:\n  output: \".\"\n  extension: \".config\"\n",
            ),
            ("templates/config.mustache", "set $base00 #{{base00-hex}}\n"),
        ],
    );
    let vim_url = init_repo(
        &root.join("up/vim"),
        &[
            (
                "templates/config.yml",
                "default:\n  output: colors\n  extension: .vim\n",
            ),
            (
                "templates/default.mustache",
                "\" {{scheme-name}}\nhi Normal guibg=#{{base00-hex}}\n",
            ),
        ],
    );
    let list = format!("i3: {i3_url}\nvim: {vim_url}\n");
    let templates_source = init_repo(&root.join("up/templates-source"), &[("list.yml", list.as_str())]);

    Upstream {
        schemes_source,
        templates_source,
        scheme_family,
    }
}
