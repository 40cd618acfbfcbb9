//! Core text processing modules
//!
//! Contains the caption normalization logic applied between translation
//! output and display.

pub mod text_normalizer;
