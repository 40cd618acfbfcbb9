//! Livecap Utility Library
//!
//! Caption text normalization and working-set trimming support for the
//! live caption translation pipeline.

pub mod config;
pub mod core;
pub mod error;
pub mod memory;
pub mod utils;

pub use crate::config::Config;
pub use crate::core::text_normalizer::{
    is_cj_char, is_hangul_char, replace_newlines, shorten_display_sentence, LONG_THRESHOLD,
    MEDIUM_THRESHOLD, PUNC_COMMA, PUNC_EOS, SHORT_THRESHOLD, VERY_LONG_THRESHOLD,
};
pub use crate::error::{LivecapError, LivecapResult};
pub use crate::memory::{MemoryReducer, MemoryWatchdog, TrimAction};
pub use crate::utils::fuzzy::{levenshtein_distance, similarity};
pub use crate::utils::url::normalize_url;
