//! Center cropping of image tensors.
//!
//! The crop works on the two trailing dimensions of a tensor, interpreted as
//! `[..., H, W]`. Any number of leading dimensions (channels, batch) is kept
//! untouched. The result is a view into the source tensor; no element data
//! is copied.
//!
//! # Size Resolution
//!
//! | requested width | requested height | effective (height, width)  |
//! |-----------------|------------------|----------------------------|
//! | unspecified     | any              | `(min(H, W), min(H, W))`   |
//! | `w`             | unspecified      | `(w, w)`                   |
//! | `w`             | `h`              | `(h, w)`                   |
//!
//! Offsets are `(H - h) / 2` and `(W - w) / 2`, truncated toward zero.
//! Crop sizes larger than the image are not padded; they produce a negative
//! offset and the narrow request fails with an out-of-range error.
//!
//! # Example
//!
//! ```ignore
//! let image = Tensor::zeros(&[3, 100, 200]);
//! let crop = CenterCrop::new(CropSize::square(50));
//! let cropped = crop.apply(&image)?;
//! assert_eq!(cropped.shape(), &[3, 50, 50]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TensorError, TransformError};
use crate::tensor::TensorView;

/// Requested output size of a center crop.
///
/// `None` means the dimension is inferred from the image at crop time.
/// Values are not validated here; zero or negative sizes are passed through
/// and rejected by the narrow operation when the crop runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropSize {
    /// Requested width in pixels
    pub width: Option<i64>,
    /// Requested height in pixels
    pub height: Option<i64>,
}

impl CropSize {
    /// Square crop with side `min(H, W)`.
    pub fn auto() -> Self {
        Self::default()
    }

    /// Square crop with the given side.
    pub fn square(side: i64) -> Self {
        Self {
            width: Some(side),
            height: None,
        }
    }

    /// Crop to an explicit width and height.
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Build from positional `(width, height)` numeric arguments.
    ///
    /// Missing arguments stay unspecified and anything past the second is
    /// ignored. Fractional values are truncated toward zero.
    pub fn from_args(args: &[f64]) -> Self {
        Self {
            width: args.first().map(|&v| v as i64),
            height: args.get(1).map(|&v| v as i64),
        }
    }

    /// Effective `(height, width)` of the crop for an image of the given size.
    ///
    /// An unspecified width always yields the largest centered square,
    /// regardless of any requested height.
    pub fn resolve(&self, image: ImageSize) -> (i64, i64) {
        match (self.width, self.height) {
            (None, _) => {
                let side = image.width.min(image.height) as i64;
                (side, side)
            }
            (Some(width), None) => (width, width),
            (Some(width), Some(height)) => (height, width),
        }
    }
}

/// Spatial size of an image tensor, read from its trailing two dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: usize,
    pub height: usize,
}

impl ImageSize {
    /// Read `(H, W)` from a `[..., H, W]` shape.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InsufficientRank`] for shapes with fewer than
    /// two dimensions.
    pub fn from_shape(shape: &[usize]) -> Result<Self, TensorError> {
        match shape {
            [.., height, width] => Ok(Self {
                width: *width,
                height: *height,
            }),
            _ => Err(TensorError::InsufficientRank {
                required: 2,
                rank: shape.len(),
            }),
        }
    }
}

/// Crop region in pixels. Offsets may be negative when the crop is larger
/// than the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub top: i64,
    pub left: i64,
    pub height: i64,
    pub width: i64,
}

impl CropRect {
    /// Center a crop of the resolved size inside the image.
    pub fn centered(image: ImageSize, size: CropSize) -> Self {
        let (height, width) = size.resolve(image);
        Self {
            top: centered_offset(image.height, height),
            left: centered_offset(image.width, width),
            height,
            width,
        }
    }
}

/// `(outer - inner) / 2`, truncated toward zero.
///
/// Computed in `i128` so requested sizes near the `i64` limits cannot
/// overflow; such crops are then rejected by `narrow`.
fn centered_offset(outer: usize, inner: i64) -> i64 {
    let offset = (outer as i128 - i128::from(inner)) / 2;
    i64::try_from(offset).unwrap_or(if offset < 0 { i64::MIN } else { i64::MAX })
}

/// Center crop a `[..., H, W]` tensor.
///
/// Narrows the height axis, then the width axis. The returned tensor is a
/// view sharing storage with `tensor`.
///
/// # Errors
///
/// - [`TensorError::InsufficientRank`] if the tensor has fewer than two dims
/// - [`TensorError::SliceOutOfRange`] if the crop does not fit in the image
pub fn center_crop<T: TensorView>(tensor: &T, size: CropSize) -> Result<T, TensorError> {
    let image = ImageSize::from_shape(tensor.shape())?;
    let rect = CropRect::centered(image, size);

    let rank = tensor.rank();
    tensor
        .narrow(rank - 2, rect.top, rect.height)?
        .narrow(rank - 1, rect.left, rect.width)
}

/// A center crop bound to a fixed [`CropSize`].
///
/// The size is captured once at construction and never changes, so the same
/// operation can be applied to any number of tensors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CenterCrop {
    size: CropSize,
}

impl CenterCrop {
    pub fn new(size: CropSize) -> Self {
        Self { size }
    }

    /// Bind positional `(width, height)` arguments. See [`CropSize::from_args`].
    pub fn from_args(args: &[f64]) -> Self {
        Self::new(CropSize::from_args(args))
    }

    /// The bound crop size.
    pub fn size(&self) -> CropSize {
        self.size
    }

    /// Crop region this operation would use for a tensor of the given shape.
    pub fn rect_for(&self, shape: &[usize]) -> Result<CropRect, TensorError> {
        ImageSize::from_shape(shape).map(|image| CropRect::centered(image, self.size))
    }

    /// Crop a single tensor.
    pub fn apply<T: TensorView>(&self, tensor: &T) -> Result<T, TensorError> {
        center_crop(tensor, self.size)
    }

    /// Crop with a runtime argument list, which must hold exactly one tensor.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::ArgumentCount`] without touching any tensor
    /// when `args.len() != 1`.
    pub fn invoke<T: TensorView>(&self, args: &[&T]) -> Result<T, TransformError> {
        Self::check_arity(args.len())?;
        Ok(self.apply(args[0])?)
    }

    /// Check a runtime argument count: exactly one tensor is accepted.
    pub fn check_arity(count: usize) -> Result<(), TransformError> {
        match count {
            1 => Ok(()),
            actual => Err(TransformError::ArgumentCount {
                expected: 1,
                actual,
            }),
        }
    }
}

impl From<CropSize> for CenterCrop {
    fn from(size: CropSize) -> Self {
        Self::new(size)
    }
}

impl fmt::Display for CenterCrop {
    /// Renders as `CenterCrop(width, height)`, with `-1` for unspecified.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CenterCrop({}, {})",
            self.size.width.unwrap_or(-1),
            self.size.height.unwrap_or(-1)
        )
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
