//! Data type system for sparsekit buffers
//!
//! This module provides the `DType` enum representing all supported element
//! types, the `Element` trait connecting Rust types to it, and the complex
//! number types used for complex-valued matrices.

pub mod complex;
mod element;

pub use complex::{Complex64, Complex128};
pub use element::Element;

use std::fmt;

/// Data types supported by sparsekit buffers
///
/// This enum represents the element type of a buffer at runtime. Using an
/// enum (rather than only generics) allows descriptors to carry type-erased
/// value storage with a runtime tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DType {
    /// 64-bit floating point
    F64,
    /// 32-bit floating point
    F32,
    /// 32-bit signed integer (index and integer-valued buffers)
    I32,
    /// 64-bit unsigned integer (size-valued buffers)
    U64,
    /// 64-bit complex (two f32: re, im)
    Complex64,
    /// 128-bit complex (two f64: re, im)
    Complex128,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::Complex128 => 16,
            Self::F64 | Self::U64 | Self::Complex64 => 8,
            Self::F32 | Self::I32 => 4,
        }
    }

    /// Returns true if this is a real floating point type
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F64 | Self::F32)
    }

    /// Returns true if this is a complex number type
    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128)
    }

    /// Returns true if this is an integer type (signed or size-valued)
    #[inline]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::I32 | Self::U64)
    }

    /// Returns the underlying float type for complex types
    ///
    /// Returns None for non-complex types.
    #[inline]
    pub const fn complex_component_dtype(self) -> Option<Self> {
        match self {
            Self::Complex64 => Some(Self::F32),
            Self::Complex128 => Some(Self::F64),
            _ => None,
        }
    }

    /// Short name for display (e.g., "f32", "c128")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::Complex64 => "c64",
            Self::Complex128 => "c128",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
