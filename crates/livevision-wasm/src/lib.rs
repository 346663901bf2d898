//! LiveVision WASM - WebAssembly bindings for LiveVision
//!
//! This crate exposes the livevision-core tensor transforms to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - The `Tensor` handle shared with JavaScript
//! - `transform` - The `Transforms` host object and bound transform operations
//! - `logging` - Browser console logging macros
//!
//! # Usage
//!
//! ```typescript
//! import init, { Tensor, Transforms } from '@livevision/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = new Tensor(pixels, [3, 100, 200]);
//! const T = new Transforms();
//! const cropped = T.centerCrop(150, 80)(image);
//! console.log(cropped.shape); // [3, 80, 150]
//! ```

use wasm_bindgen::prelude::*;

mod logging;
mod transform;
mod types;

// Re-export public types
pub use transform::{JsCenterCrop, JsTransforms};
pub use types::JsTensor;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::console_log!("LiveVision WASM {} loaded", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
