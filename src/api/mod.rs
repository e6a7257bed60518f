//! VexTab Preview WASM API
//!
//! This module provides the JavaScript-facing API for the preview extension.
//! It includes shared utilities for serialization, error handling, and
//! console logging, plus the preprocessing entry points the host calls on
//! every edit and cursor move.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `preview`: Preprocessing and cursor-mapping operations

pub mod helpers;
pub mod preview;

// Re-export the public API surface
pub use preview::{is_short_tab_file, is_vextab_file, map_cursor, preprocess_source};
