//! Scheme-file parsing and variable derivation, read from real files on disk.

use assert_fs::prelude::*;
use base16_core::{
    palette::{base_keys, slug_from_path, Palette},
    CoreError,
};
use predicates::prelude::*;
use rstest::rstest;

const SOLARFLARE: &str = r#"scheme: "Solarflare"
author: "X"
base00: "002b36"
base01: "073642"
base02: "586e75"
base03: "657b83"
base04: "839496"
base05: "93a1a1"
base06: "eee8d5"
base07: "fdf6e3"
base08: "dc322f"
base09: "cb4b16"
base0A: "b58900"
base0B: "859900"
base0C: "2aa198"
base0D: "268bd2"
base0E: "6c71c4"
base0F: "cb4b16"
"#;

fn write_scheme(dir: &assert_fs::TempDir, file: &str, body: &str) -> std::path::PathBuf {
    let child = dir.child(file);
    child.write_str(body).expect("write scheme");
    child.path().to_path_buf()
}

// ---------------------------------------------------------------------------
// 1. Channel derivation
// ---------------------------------------------------------------------------

#[test]
fn every_channel_matches_its_hex_substring() {
    let dir = assert_fs::TempDir::new().unwrap();
    let path = write_scheme(&dir, "solarflare.yaml", SOLARFLARE);
    let palette = Palette::from_path(&path).expect("parse");
    let vars = palette.variables();

    for key in base_keys() {
        let hex = &vars[&format!("{key}-hex")];
        for (i, ch) in ["r", "g", "b"].iter().enumerate() {
            let sub = &vars[&format!("{key}-hex-{ch}")];
            assert_eq!(sub, &hex[i * 2..i * 2 + 2]);

            let rgb: u32 = vars[&format!("{key}-hex-rgb-{ch}")].parse().unwrap();
            assert!(rgb <= 255);
            assert_eq!(rgb, u32::from_str_radix(sub, 16).unwrap());

            let dec: f64 = vars[&format!("{key}-hex-dec-{ch}")].parse().unwrap();
            assert_eq!(dec, f64::from(rgb) / 255.0);
        }
    }
}

#[rstest]
#[case("000000", "0", "0.0")]
#[case("ffffff", "255", "1.0")]
#[case("FFFFFF", "255", "1.0")]
#[case("800000", "128", "0.5019607843137255")]
fn red_channel_encodings(#[case] hex: &str, #[case] rgb: &str, #[case] dec: &str) {
    let dir = assert_fs::TempDir::new().unwrap();
    let body = SOLARFLARE.replace("\"002b36\"", &format!("\"{hex}\""));
    let path = write_scheme(&dir, "s.yaml", &body);
    let palette = Palette::from_path(&path).unwrap();
    let vars = palette.variables();
    assert_eq!(vars["base00-hex"], hex);
    assert_eq!(vars["base00-hex-rgb-r"], rgb);
    assert_eq!(vars["base00-hex-dec-r"], dec);
}

// ---------------------------------------------------------------------------
// 2. Metadata and slug
// ---------------------------------------------------------------------------

#[test]
fn metadata_variables() {
    let dir = assert_fs::TempDir::new().unwrap();
    let path = write_scheme(&dir, "Solar Flare.yml", SOLARFLARE);
    let palette = Palette::from_path(&path).unwrap();
    assert_eq!(palette.name(), "Solarflare");
    assert_eq!(palette.author(), "X");
    assert_eq!(palette.slug(), "solar flare");
    assert_eq!(palette.variables()["scheme-slug"], "solar flare");
    assert_eq!(palette.variables()["scheme-name"], "Solarflare");
    assert_eq!(palette.variables()["scheme-author"], "X");
    assert_eq!(palette.bases().len(), 16);
}

#[rstest]
#[case("ocean.yaml", "ocean")]
#[case("OneDark.yaml", "onedark")]
#[case("Gruvbox Dark Hard.yml", "gruvbox dark hard")]
fn slug_cases(#[case] file: &str, #[case] slug: &str) {
    let path = std::path::Path::new("/any/dir").join(file);
    assert_eq!(slug_from_path(&path), slug);
    assert_eq!(slug_from_path(&path), slug_from_path(&path));
}

// ---------------------------------------------------------------------------
// 3. Errors carry the file path
// ---------------------------------------------------------------------------

#[test]
fn missing_author_names_file_and_key() {
    let dir = assert_fs::TempDir::new().unwrap();
    let body = SOLARFLARE.replace("author: \"X\"\n", "");
    let path = write_scheme(&dir, "noauthor.yaml", &body);
    let err = Palette::from_path(&path).unwrap_err();
    assert!(matches!(err, CoreError::MissingKey { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(predicate::str::contains("noauthor.yaml").eval(&msg));
    assert!(predicate::str::contains("author").eval(&msg));
}

#[test]
fn corrupt_yaml_is_parse_error() {
    let dir = assert_fs::TempDir::new().unwrap();
    let path = write_scheme(&dir, "broken.yaml", ": : corrupt : yaml : !!!\n  - [unclosed");
    let err = Palette::from_path(&path).unwrap_err();
    assert!(matches!(err, CoreError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn list_instead_of_mapping_is_parse_error() {
    let dir = assert_fs::TempDir::new().unwrap();
    let path = write_scheme(&dir, "list.yaml", "- a\n- b\n");
    let err = Palette::from_path(&path).unwrap_err();
    assert!(matches!(err, CoreError::Parse { .. }), "got: {err}");
}

#[test]
fn nested_value_is_parse_error() {
    let dir = assert_fs::TempDir::new().unwrap();
    let body = SOLARFLARE.replace("scheme: \"Solarflare\"", "scheme: [a, b]");
    let path = write_scheme(&dir, "nested.yaml", &body);
    let err = Palette::from_path(&path).unwrap_err();
    assert!(matches!(err, CoreError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("nested.yaml"));
}

#[rstest]
#[case::float_like("2e3440")]
#[case::exponent("123e45")]
#[case::leading_zeros("080808")]
#[case::all_digits("000000")]
fn unquoted_colors_keep_their_literal_text(#[case] color: &str) {
    let dir = assert_fs::TempDir::new().unwrap();
    let body = SOLARFLARE.replace("base00: \"002b36\"", &format!("base00: {color}"));
    let path = write_scheme(&dir, "nord.yaml", &body);
    let palette = Palette::from_path(&path).unwrap();
    assert_eq!(palette.bases()[0].hex(), color);
    assert_eq!(palette.variables()["base00-hex"], color);
}
