#![allow(unused)]
//! CLI integration harness.
//!
//! # What this covers
//!
//! - **Config layering**: `--config` points at a TOML file whose
//!   `[[taxonomy]]` tables replace the built-in vocabulary and whose
//!   `[output]` section changes rendering.
//! - **Rendering**: plain output is one item per line, `--json` emits
//!   `serde_json` values. Snapshots are inline.
//! - **Errors**: an invalid vocabulary in config surfaces as an error from
//!   `cli::run`, not a panic.
//!
//! # Running
//!
//! ```sh
//! cargo test --test cli_harness
//! ```

mod common;
use common::*;

use clap::Parser;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use themefilter::cli::{run, Cli};

/// Run the CLI with `args` against a config file containing `config`.
fn run_with_config(config: &str, args: &[&str]) -> anyhow::Result<String> {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, config);
    let path = path.to_string_lossy().into_owned();

    let mut argv = vec!["themefilter", "--config", path.as_str()];
    argv.extend_from_slice(args);
    run(&Cli::try_parse_from(argv)?)
}

fn run_builtin(args: &[&str]) -> String {
    run_with_config("", args).expect("cli run")
}

#[test]
fn terms_plain() {
    assert_snapshot!(run_builtin(&["terms", "color:blue some text feature:video"]), @"blue,video");
}

#[test]
fn terms_json() {
    assert_snapshot!(
        run_builtin(&["--json", "terms", "style:modern color:red subject:art"]),
        @r#"["red","modern","art"]"#
    );
}

#[test]
fn strip_removes_invalid_tokens_too() {
    assert_snapshot!(run_builtin(&["strip", "bogus:term nice theme"]), @"nice theme");
}

#[test]
fn filter_for_unknown_term_is_empty() {
    assert_eq!(run_builtin(&["filter", "plaid"]), "");
    assert_eq!(run_builtin(&["--json", "filter", "plaid"]), r#""""#);
}

#[test]
fn sort_plain() {
    assert_snapshot!(run_builtin(&["sort", "video", "nope", "blue"]), @r"
    blue
    video
    ");
}

#[test]
fn parse_json() {
    assert_snapshot!(
        run_builtin(&["--json", "parse", "color: blue bogus:term"]),
        @r#"[{"taxonomy":"color","term":"blue","valid":true},{"taxonomy":"bogus","term":"term","valid":false}]"#
    );
}

#[test]
fn taxonomy_lists_terms() {
    assert_snapshot!(run_builtin(&["taxonomy", "layout"]), @r"
    fixed-layout
    fluid-layout
    responsive-layout
    ");
    assert_eq!(run_builtin(&["taxonomy", "flavour"]), "");
}

#[test]
fn subjects_json_has_every_subject() {
    let out = run_builtin(&["--json", "subjects"]);
    let subjects: Vec<String> = serde_json::from_str(&out).unwrap();
    assert_eq!(subjects.len(), 38);
    assert_eq!(subjects[0], "announcement");
}

#[test]
fn custom_vocabulary_from_config() {
    let out = run_with_config(
        CUSTOM_VOCABULARY_TOML,
        &["terms", "mood:retro era:modern era:retro color:blue mood:calm"],
    )
    .unwrap();
    // era:modern < mood:calm < mood:retro; era:retro is not canonical.
    // Separator comes from [output].
    assert_eq!(out, "modern;calm;retro");

    let out = run_with_config(CUSTOM_VOCABULARY_TOML, &["filter", "retro"]).unwrap();
    assert_eq!(out, "mood:retro");

    let out = run_with_config(CUSTOM_VOCABULARY_TOML, &["subjects"]).unwrap();
    assert_eq!(out, "");
}

#[test]
fn json_can_be_enabled_from_config() {
    let out = run_with_config("[output]\njson = true\n", &["strip", "color:blue hi"]).unwrap();
    assert_eq!(out, r#""hi""#);
}

#[test]
fn invalid_config_vocabulary_is_an_error() {
    let err = run_with_config(
        "[[taxonomy]]\nname = \"color\"\nterms = [\"sky blue\"]\n",
        &["subjects"],
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("sky blue"), "{err:#}");
}
