//! Static inputs and config helpers used across harnesses.

use std::path::PathBuf;
use themefilter::Vocabulary;

/// Search-box inputs paired with their expected sorted filter terms and
/// stripped text against the built-in vocabulary.
pub const SEARCH_INPUTS: &[(&str, &str, &str)] = &[
    ("color:blue some text feature:video", "blue,video", "some text"),
    ("bogus:term", "", ""),
    ("color:blue nice theme", "blue", "nice theme"),
    ("bogus:term nice theme", "", "nice theme"),
    ("minimal blog subject:blog", "blog", "minimal blog"),
    ("layout: fluid-layout column:two-columns", "two-columns,fluid-layout", ""),
    ("style:dark color:dark dark", "dark", "dark"),
    ("color:video", "", ""),
    ("", "", ""),
];

/// A small replacement vocabulary, declared in `config.toml` form.
pub const CUSTOM_VOCABULARY_TOML: &str = r#"
[output]
separator = ";"

[[taxonomy]]
name  = "mood"
terms = ["calm", "loud", "retro"]

[[taxonomy]]
name  = "era"
terms = ["retro", "modern"]
"#;

/// Every `taxonomy:term` pair the built-in vocabulary declares.
pub fn builtin_filters() -> Vec<String> {
    Vocabulary::builtin()
        .taxonomies()
        .iter()
        .flat_map(|t| t.terms.iter().map(move |term| format!("{}:{}", t.name, term)))
        .collect()
}

/// Write `contents` to `config.toml` inside `dir` and return its path.
pub fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("write fixture config");
    path
}
