use std::path::{Path, PathBuf};

use base16_core::{palette::base_keys, FamilyName, Palette, TemplateUnit};
use base16_renderer::{Renderer, TemplateContext};
use tempfile::TempDir;

fn palette_at(dir: &Path, file: &str, name: &str) -> Palette {
    let colors = [
        "002b36", "073642", "586e75", "657b83", "839496", "93a1a1", "eee8d5", "fdf6e3",
        "dc322f", "cb4b16", "b58900", "859900", "2aa198", "268bd2", "6c71c4", "d33682",
    ];
    let mut yaml = format!("scheme: \"{name}\"\nauthor: \"Ethan <e@x.org>\"\n");
    for (key, color) in base_keys().zip(colors) {
        yaml.push_str(&format!("{key}: \"{color}\"\n"));
    }
    let path = dir.join(file);
    std::fs::write(&path, yaml).expect("write palette");
    Palette::from_path(&path).expect("parse palette")
}

fn templates_dir(root: &Path) -> PathBuf {
    let dir = root.join("i3").join("templates");
    std::fs::create_dir_all(&dir).expect("mkdir templates");
    dir
}

fn unit_with_body(root: &Path, name: &str, body: &str) -> TemplateUnit {
    let dir = templates_dir(root);
    let body_path = dir.join(format!("{name}.mustache"));
    std::fs::write(&body_path, body).expect("write body");
    TemplateUnit {
        family: FamilyName::from("i3"),
        name: name.to_owned(),
        body_path,
        output_dir: ".".to_owned(),
        extension: ".config".to_owned(),
    }
}

#[test]
fn solarflare_i3_example() {
    let tmp = TempDir::new().unwrap();
    let palette = palette_at(tmp.path(), "solarflare.yaml", "Solarflare");
    let unit = unit_with_body(
        tmp.path(),
        "config",
        "set $base00 #{{base00-hex}}\nset $base0F #{{base0F-hex}}\n",
    );

    let out = Renderer::new().render(&unit, &palette).unwrap();
    assert_eq!(out.file_name, "base16-solarflare.config");
    assert!(out.text.contains("set $base00 #002b36"));
    assert!(out.text.contains("set $base0F #d33682"));
}

#[test]
fn every_derived_variable_resolves() {
    let tmp = TempDir::new().unwrap();
    let palette = palette_at(tmp.path(), "solarflare.yaml", "Solarflare");
    let mut body = String::new();
    for key in palette.variables().keys() {
        body.push_str(&format!("{key}={{{{{key}}}}}\n"));
    }
    let unit = unit_with_body(tmp.path(), "all", &body);

    let out = Renderer::new().render(&unit, &palette).unwrap();
    for (key, value) in palette.variables() {
        // Values here contain no characters that HTML escaping would touch,
        // except the author's angle brackets.
        if key == "scheme-author" {
            continue;
        }
        assert!(
            out.text.contains(&format!("{key}={value}\n")),
            "missing {key}={value}"
        );
    }
}

#[test]
fn url_characters_in_author_and_name_survive_escaping() {
    let tmp = TempDir::new().unwrap();
    let mut yaml = String::from("scheme: \"A=B `x`\"\nauthor: \"Me (https://x.io/?a=b)\"\n");
    for key in base_keys() {
        yaml.push_str(&format!("{key}: \"002b36\"\n"));
    }
    let path = tmp.path().join("urls.yaml");
    std::fs::write(&path, yaml).unwrap();
    let palette = Palette::from_path(&path).unwrap();
    let unit = unit_with_body(tmp.path(), "header", "{{scheme-author}}|{{scheme-name}}");

    let out = Renderer::new().render(&unit, &palette).unwrap();
    assert_eq!(out.text, "Me (https://x.io/?a=b)|A=B `x`");
}

#[test]
fn double_braces_escape_and_triple_braces_do_not() {
    let tmp = TempDir::new().unwrap();
    let palette = palette_at(tmp.path(), "solarflare.yaml", "Solarflare");
    let unit = unit_with_body(
        tmp.path(),
        "author",
        "{{scheme-author}}|{{{scheme-author}}}",
    );

    let out = Renderer::new().render(&unit, &palette).unwrap();
    assert_eq!(out.text, "Ethan &lt;e@x.org&gt;|Ethan <e@x.org>");
}

#[test]
fn partials_resolve_from_the_body_directory() {
    let tmp = TempDir::new().unwrap();
    let palette = palette_at(tmp.path(), "solarflare.yaml", "Solarflare");
    let dir = templates_dir(tmp.path());
    std::fs::write(dir.join("header.mustache"), "# {{scheme-name}} by base16\n").unwrap();
    let unit = unit_with_body(tmp.path(), "main", "{{> header}}bg={{base00-hex}}\n");

    let out = Renderer::new().render(&unit, &palette).unwrap();
    assert_eq!(out.text, "# Solarflare by base16\nbg=002b36\n");
}

#[test]
fn unknown_partial_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let palette = palette_at(tmp.path(), "solarflare.yaml", "Solarflare");
    let unit = unit_with_body(tmp.path(), "main", "{{> nowhere}}");
    assert!(Renderer::new().render(&unit, &palette).is_err());
}

#[test]
fn unclosed_tag_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let palette = palette_at(tmp.path(), "solarflare.yaml", "Solarflare");
    let unit = unit_with_body(tmp.path(), "main", "{{base00-hex");
    assert!(Renderer::new().render(&unit, &palette).is_err());
}

#[test]
fn context_exposes_palette_variables() {
    let tmp = TempDir::new().unwrap();
    let palette = palette_at(tmp.path(), "Solar Flare.yaml", "Solar Flare");
    let ctx = TemplateContext::from_palette(&palette);
    assert_eq!(ctx.get("scheme-slug"), Some("solar flare"));
    assert_eq!(ctx.get("base08-hex-r"), Some("dc"));
    assert_eq!(ctx.len(), palette.variables().len());
    assert!(!ctx.is_empty());
}

#[test]
fn rendering_twice_is_identical() {
    let tmp = TempDir::new().unwrap();
    let palette = palette_at(tmp.path(), "solarflare.yaml", "Solarflare");
    let unit = unit_with_body(tmp.path(), "main", "{{base05-hex-dec-g}}");
    let renderer = Renderer::new();
    let first = renderer.render(&unit, &palette).unwrap();
    let second = renderer.render(&unit, &palette).unwrap();
    assert_eq!(first, second);
}
