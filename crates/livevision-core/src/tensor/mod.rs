//! Tensor storage and the view operations transforms are built on.
//!
//! Transforms never touch element data directly. They only read a tensor's
//! shape and derive new views with [`TensorView::narrow`], so any strided,
//! reference-counted tensor type can be plugged in by implementing the trait.
//!
//! # Ownership
//!
//! A view produced by `narrow` aliases the storage of its source. The storage
//! stays alive for as long as either the source or any view derived from it
//! is reachable.

mod array;

pub use array::Tensor;

use crate::error::TensorError;

/// The tensor operations consumed by the transforms.
pub trait TensorView: Sized {
    /// Ordered dimension sizes, outermost first.
    fn shape(&self) -> &[usize];

    /// Number of dimensions.
    fn rank(&self) -> usize {
        self.shape().len()
    }

    /// Restrict dimension `dim` to `[start, start + length)` without copying.
    ///
    /// # Errors
    ///
    /// - [`TensorError::DimensionOutOfRange`] if `dim >= rank`
    /// - [`TensorError::SliceOutOfRange`] if `start < 0`, `length < 0` or the
    ///   range ends past the dimension size
    fn narrow(&self, dim: usize, start: i64, length: i64) -> Result<Self, TensorError>;
}

/// Check a narrow request against a shape.
///
/// Shared by `TensorView` implementations so they all reject the same
/// requests with the same errors. Returns the validated `(start, end)` range.
pub fn check_narrow(
    shape: &[usize],
    dim: usize,
    start: i64,
    length: i64,
) -> Result<(usize, usize), TensorError> {
    let rank = shape.len();
    let size = *shape
        .get(dim)
        .ok_or(TensorError::DimensionOutOfRange { dim, rank })?;

    let out_of_range = || TensorError::SliceOutOfRange {
        dim,
        start,
        length,
        size,
    };

    if start < 0 || length < 0 {
        return Err(out_of_range());
    }
    let end = start.checked_add(length).ok_or_else(out_of_range)?;
    if end > size as i64 {
        return Err(out_of_range());
    }

    Ok((start as usize, end as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_narrow_valid() {
        assert_eq!(check_narrow(&[3, 100, 200], 2, 50, 100), Ok((50, 150)));
        assert_eq!(check_narrow(&[3, 100, 200], 0, 0, 3), Ok((0, 3)));
    }

    #[test]
    fn test_check_narrow_empty_range() {
        assert_eq!(check_narrow(&[4, 4], 1, 4, 0), Ok((4, 4)));
    }

    #[test]
    fn test_check_narrow_bad_dim() {
        assert_eq!(
            check_narrow(&[4, 4], 2, 0, 1),
            Err(TensorError::DimensionOutOfRange { dim: 2, rank: 2 })
        );
    }

    #[test]
    fn test_check_narrow_negative_start() {
        let err = check_narrow(&[3, 100, 200], 1, -25, 150).unwrap_err();
        assert!(matches!(err, TensorError::SliceOutOfRange { start: -25, .. }));
    }

    #[test]
    fn test_check_narrow_negative_length() {
        assert!(check_narrow(&[10], 0, 2, -1).is_err());
    }

    #[test]
    fn test_check_narrow_past_end() {
        assert!(check_narrow(&[10], 0, 5, 6).is_err());
        assert!(check_narrow(&[10], 0, i64::MAX, 1).is_err());
    }
}
