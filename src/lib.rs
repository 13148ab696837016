//! Builtin registration catalog extractor.
//!
//! This crate scans a C source file for the `lex_add_builtins` registration
//! routine and collects the builtins registered inside it, grouped by the
//! single-line category comments that precede them.
//!
//! The binary `builtindoc` prints the resulting catalog as markdown.

pub mod extract;
pub mod model;
pub mod render;
