//! Reference-counted `f32` tensor backed by `ndarray`.

use ndarray::{ArcArray, Axis, IxDyn, Slice};

use super::{check_narrow, TensorView};
use crate::error::TensorError;

/// A strided, reference-counted `f32` tensor of arbitrary rank.
///
/// Cloning a `Tensor` clones the handle, not the elements. Views created with
/// [`TensorView::narrow`] share the same allocation as their source.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: ArcArray<f32, IxDyn>,
}

impl Tensor {
    /// Build a tensor from row-major data and a shape.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] if the shape's element count
    /// differs from `data.len()`.
    pub fn from_shape_vec(shape: &[usize], data: Vec<f32>) -> Result<Self, TensorError> {
        let mismatch = |actual| TensorError::ShapeMismatch {
            shape: shape.to_vec(),
            expected: shape.iter().product(),
            actual,
        };

        let actual = data.len();
        if shape.iter().product::<usize>() != actual {
            return Err(mismatch(actual));
        }

        ArcArray::from_shape_vec(IxDyn(shape), data)
            .map(Self::from_array)
            .map_err(|_| mismatch(actual))
    }

    /// Create a zero-filled tensor.
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_array(ArcArray::zeros(IxDyn(shape)))
    }

    /// Wrap an existing shared array.
    pub fn from_array(data: ArcArray<f32, IxDyn>) -> Self {
        Self { data }
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> &ArcArray<f32, IxDyn> {
        &self.data
    }

    /// Total number of elements in the view.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Returns true if any dimension has size zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at a full multi-dimensional index, if in bounds.
    pub fn get(&self, index: &[usize]) -> Option<f32> {
        self.data.get(index).copied()
    }

    /// Copy the viewed elements out in logical row-major order.
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    /// Returns true if the elements the two tensors view overlap in memory.
    ///
    /// A non-empty view produced by `narrow` always overlaps its source.
    /// Two disjoint narrows of the same tensor do not overlap, even though
    /// they come from one allocation.
    pub fn shares_storage(&self, other: &Tensor) -> bool {
        match (self.byte_span(), other.byte_span()) {
            (Some((a_lo, a_hi)), Some((b_lo, b_hi))) => a_lo < b_hi && b_lo < a_hi,
            _ => false,
        }
    }

    /// Half-open byte range covered by the view's elements.
    fn byte_span(&self) -> Option<(usize, usize)> {
        if self.data.is_empty() {
            return None;
        }

        let (mut lo, mut hi) = (0isize, 0isize);
        for (&dim, &stride) in self.data.shape().iter().zip(self.data.strides()) {
            let reach = (dim as isize - 1) * stride;
            if reach < 0 {
                lo += reach;
            } else {
                hi += reach;
            }
        }

        let elem = std::mem::size_of::<f32>() as isize;
        let base = self.data.as_ptr() as isize;
        Some(((base + lo * elem) as usize, (base + (hi + 1) * elem) as usize))
    }
}

impl TensorView for Tensor {
    fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    fn narrow(&self, dim: usize, start: i64, length: i64) -> Result<Self, TensorError> {
        let (start, end) = check_narrow(self.shape(), dim, start, length)?;

        let mut data = self.data.clone();
        data.slice_axis_inplace(Axis(dim), Slice::from(start..end));
        Ok(Self { data })
    }
}

impl From<ArcArray<f32, IxDyn>> for Tensor {
    fn from(data: ArcArray<f32, IxDyn>) -> Self {
        Self::from_array(data)
    }
}
