//! LiveVision Core - Tensor vision transforms
//!
//! This crate provides the native side of the LiveVision transforms: a
//! reference-counted tensor type with zero-copy views, and the center-crop
//! transform built on top of it.

pub mod error;
pub mod tensor;
pub mod transform;

pub use error::{TensorError, TransformError};
pub use tensor::{Tensor, TensorView};
pub use transform::{center_crop, CenterCrop, CropRect, CropSize, ImageSize, TransformKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_through_registry() {
        let kind = TransformKind::from_name("centerCrop").unwrap();
        let crop = kind.build(&[]);
        let image = Tensor::zeros(&[3, 100, 200]);

        let out = crop.invoke(&[&image]).unwrap();
        assert_eq!(out.shape(), &[3, 100, 100]);
        assert!(out.shares_storage(&image));
    }
}
