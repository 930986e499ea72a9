//! Element trait for mapping Rust types to DType

use super::DType;
use super::complex::{Complex64, Complex128};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Trait for types that can be elements of a sparsekit buffer
///
/// This trait connects Rust's type system to sparsekit's runtime dtype
/// system. It's implemented for the six supported element kinds.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck)
/// - `PartialEq` - Exact equality for verification
/// - `Display` - Diagnostic rendering on comparison failure
pub trait Element:
    Copy + Send + Sync + Pod + Zeroable + PartialEq + fmt::Display + 'static
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Zero value
    fn zero() -> Self;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Element for i32 {
    const DTYPE: DType = DType::I32;

    #[inline]
    fn zero() -> Self {
        0
    }
}

impl Element for u64 {
    const DTYPE: DType = DType::U64;

    #[inline]
    fn zero() -> Self {
        0
    }
}

impl Element for Complex64 {
    const DTYPE: DType = DType::Complex64;

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }
}

impl Element for Complex128 {
    const DTYPE: DType = DType::Complex128;

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }
}
