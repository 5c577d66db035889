//! themefilter-core — theme search filter library.
//!
//! Search-box input mixes free text with `taxonomy:term` filters such as
//! `color:blue` or `feature: custom-header`. This crate validates those
//! filters against a controlled vocabulary, produces canonical sorted filter
//! lists, and strips filters back out to recover the plain search text.
//!
//! # Architecture
//!
//! ```text
//! Config ──► Vocabulary ──► TermIndex ──► FilterParser
//! ```
//!
//! The term index is built once when a [`FilterParser`] is constructed and is
//! immutable afterwards.

pub mod config;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;
pub mod vocabulary;

pub use error::{ConfigError, VocabularyError};
pub use index::TermIndex;
pub use parser::FilterParser;
pub use types::{FilterToken, Taxonomy};
pub use vocabulary::Vocabulary;
