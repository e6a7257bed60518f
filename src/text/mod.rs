//! Text positions for the preview
//!
//! This module provides pure text-position types with no knowledge of
//! VexTab notation. The preview host reports caret positions in these
//! terms and gets them back translated into the rewritten source.
//!
//! ## Modules
//!
//! - `cursor`: Caret locations (line/column pairs)

pub mod cursor;

// Re-exports for convenience
pub use cursor::CursorLocation;
