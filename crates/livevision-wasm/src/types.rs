//! WASM-compatible tensor handle.
//!
//! This module provides the JavaScript-facing `Tensor` class that wraps the
//! core tensor. Every handle returned to JavaScript, including crop results,
//! is one of these.

use livevision_core::{Tensor, TensorView};
use wasm_bindgen::prelude::*;

/// A tensor handle for JavaScript.
///
/// # Memory Management
///
/// Element storage lives in WASM memory and is reference counted. Views
/// created by `narrow` or by transforms share that storage, so freeing the
/// source handle does not invalidate its views. `data()` copies the viewed
/// elements out to a `Float32Array`.
///
/// The `free()` method can be called to explicitly release the handle, but this
/// is optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen(js_name = Tensor)]
#[derive(Debug)]
pub struct JsTensor {
    inner: Tensor,
}

#[wasm_bindgen(js_class = Tensor)]
impl JsTensor {
    /// Create a tensor from row-major data and a shape.
    ///
    /// # Arguments
    /// * `data` - Element values in row-major order
    /// * `shape` - Dimension sizes, outermost first (e.g. `[3, H, W]`)
    ///
    /// # Errors
    /// Returns an error if the shape's element count differs from `data.length`
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Result<JsTensor, JsValue> {
        Tensor::from_shape_vec(&shape, data)
            .map(JsTensor::from_tensor)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Dimension sizes, outermost first
    #[wasm_bindgen(getter)]
    pub fn shape(&self) -> Vec<usize> {
        self.inner.shape().to_vec()
    }

    /// Number of dimensions
    #[wasm_bindgen(getter)]
    pub fn rank(&self) -> usize {
        self.inner.rank()
    }

    /// Total number of elements
    #[wasm_bindgen(getter)]
    pub fn numel(&self) -> usize {
        self.inner.numel()
    }

    /// Returns the viewed elements as a Float32Array in row-major order.
    ///
    /// Note: This creates a copy, even when the tensor is a view.
    pub fn data(&self) -> Vec<f32> {
        self.inner.to_vec()
    }

    /// Restrict dimension `dim` to `[start, start + length)` without copying.
    ///
    /// # Errors
    /// Returns an error if `dim` is past the rank or the range does not fit
    pub fn narrow(&self, dim: usize, start: i32, length: i32) -> Result<JsTensor, JsValue> {
        self.inner
            .narrow(dim, start.into(), length.into())
            .map(JsTensor::from_tensor)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns true if the elements both handles view overlap in memory.
    #[wasm_bindgen(js_name = sharesStorage)]
    pub fn shares_storage(&self, other: &JsTensor) -> bool {
        self.inner.shares_storage(&other.inner)
    }

    /// Explicitly free this handle.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    /// Storage shared with other live handles is kept alive.
    pub fn free(self) {
        // Dropping self releases this reference
    }
}

impl JsTensor {
    /// Wrap a core tensor for return to JavaScript.
    pub(crate) fn from_tensor(inner: Tensor) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped core tensor.
    pub(crate) fn tensor(&self) -> &Tensor {
        &self.inner
    }
}
