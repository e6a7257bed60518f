//! VexTab Preview WASM Module
//!
//! This is the WASM module for the VexTab preview extension.
//! It provides the short-form (.tab) preprocessor that rewrites abbreviated
//! notation into the explicit VexTab grammar the renderer understands,
//! along with the cursor position map the preview needs to keep
//! highlighting in sync after the rewrite.

pub mod text;
pub mod preprocess;
pub mod api;

// Re-export commonly used types
pub use text::cursor::CursorLocation;
pub use preprocess::map::SourceMap;
pub use preprocess::{preprocess, PreprocessResult};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("VexTab preview WASM module initialized");
}
