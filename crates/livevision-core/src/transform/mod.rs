//! Tensor transforms for image preprocessing.
//!
//! Each transform is built in two steps: a factory binds the parameters once,
//! and the resulting operation is applied to any number of tensors.
//!
//! # Layout
//!
//! Image tensors are laid out as `[..., H, W]`. The last dimension is the
//! width, the second-to-last the height, and any leading dimensions are
//! carried through unchanged.

mod crop;
mod registry;

pub use crop::{center_crop, CenterCrop, CropRect, CropSize, ImageSize};
pub use registry::TransformKind;
