//! Preprocessing API for the preview host
//!
//! The host calls [`preprocess_source`] with the full buffer on every
//! (debounced) edit, keeps the returned map alongside the rewritten text,
//! and calls [`map_cursor`] on every cursor move to translate the caret
//! into rewritten-source coordinates for highlighting.

use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};

use crate::api::helpers::{deserialize, serialize};
use crate::preprocess;
use crate::preprocess::map::SourceMap;
use crate::text::cursor::CursorLocation;
use crate::{wasm_info, wasm_log};

/// Result payload handed to the host: rewritten text plus the cursor map
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PreprocessPayload {
    /// The text the renderer consumes
    pub text: String,
    /// Opaque map to pass back through `mapCursor`
    pub map: SourceMap,
}

/// Rewrite a source buffer for rendering.
///
/// # Parameters
/// - `source`: the complete buffer text (never partial)
/// - `file_name`: the document's file name, if it has one
///
/// # Returns
/// JavaScript object with `text` (the rewritten source) and `map` (the
/// cursor translation table for `mapCursor`). Non-short-form files come
/// back unchanged with an identity map.
#[wasm_bindgen(js_name = preprocessSource)]
pub fn preprocess_source(source: &str, file_name: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!(
        "preprocessSource called: file_name={:?}, {} bytes",
        file_name,
        source.len()
    );

    let result = preprocess::preprocess(source, file_name.as_deref());
    wasm_log!("  mapped {} input lines", result.map.line_count());

    let payload = PreprocessPayload {
        text: result.text,
        map: result.map,
    };
    serialize(&payload, "Failed to serialize preprocess result")
}

/// Translate a cursor from original-buffer to rewritten-source coordinates.
///
/// # Parameters
/// - `map_js`: the `map` object from a previous `preprocessSource` call
/// - `cursor_js`: `{ line, column }`, line 1-indexed, column 0-indexed
///
/// # Returns
/// The translated `{ line, column }` object. Out-of-range cursors come
/// back unchanged.
#[wasm_bindgen(js_name = mapCursor)]
pub fn map_cursor(map_js: JsValue, cursor_js: JsValue) -> Result<JsValue, JsValue> {
    let map: SourceMap = deserialize(map_js, "Failed to deserialize source map")?;
    let cursor: CursorLocation = deserialize(cursor_js, "Failed to deserialize cursor")?;

    let mapped = map.map_cursor(cursor);
    serialize(&mapped, "Failed to serialize mapped cursor")
}

/// Check whether a file name marks a short-form (.tab) document.
///
/// Exposed so the host's gating decision and the preprocessor's cannot
/// drift apart.
#[wasm_bindgen(js_name = isShortTabFile)]
pub fn is_short_tab_file(file_name: Option<String>) -> bool {
    preprocess::is_short_tab_file(file_name.as_deref())
}

/// Check whether a file name is any VexTab document the preview handles
/// (.vt, .vextab, or .tab).
#[wasm_bindgen(js_name = isVexTabFile)]
pub fn is_vextab_file(file_name: Option<String>) -> bool {
    preprocess::is_vextab_file(file_name.as_deref())
}
