//! themefilter — theme search filters.
//!
//! Thin command-line layer over [`themefilter_core`]. The library half exists
//! so integration tests can drive [`cli::run`] without spawning a process.

pub mod cli;

pub use themefilter_core::{
    config, ConfigError, FilterParser, FilterToken, Taxonomy, TermIndex, Vocabulary,
    VocabularyError,
};
