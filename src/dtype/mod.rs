//! Data type system for redacc
//!
//! This module provides the `DType` enum naming the floating-point formats a
//! reduction can run in, along with the [`Element`] trait that maps Rust types
//! onto it.

mod element;

pub use element::Element;

use std::fmt;

/// Floating-point formats supported by the reduction kernels
///
/// `F64` is the reference precision. Every other variant is a *narrow*
/// precision: sample buffers are rounded into it before being reduced, and
/// the result is compared against the `F64` reference.
///
/// # Discriminant Values
///
/// The discriminant values are stable: F64=0, F32=1, F16=2, BF16=3.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point (reference precision)
    F64 = 0,
    /// 32-bit floating point (default narrow precision)
    #[default]
    F32 = 1,
    /// 16-bit floating point (IEEE 754), requires the `f16` feature
    F16 = 2,
    /// 16-bit brain floating point, requires the `f16` feature
    BF16 = 3,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 => 8,
            Self::F32 => 4,
            Self::F16 | Self::BF16 => 2,
        }
    }

    /// Returns true if values in this dtype lose precision relative to `F64`
    #[inline]
    pub const fn is_narrow(self) -> bool {
        !matches!(self, Self::F64)
    }

    /// Unit roundoff (half the distance from 1.0 to the next representable value)
    ///
    /// This is the `u` in the classic error bounds: sequential summation of N
    /// terms is bounded by roughly `(N - 1) * u * sum(|x|)`, pairwise summation
    /// by `ceil(log2 N) * u * sum(|x|)`.
    pub const fn unit_roundoff(self) -> f64 {
        match self {
            Self::F64 => f64::EPSILON / 2.0,
            Self::F32 => f32::EPSILON as f64 / 2.0,
            // 10 explicit mantissa bits
            Self::F16 => 1.0 / 2048.0,
            // 7 explicit mantissa bits
            Self::BF16 => 1.0 / 256.0,
        }
    }

    /// Short name for display
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::F16 => "f16",
            Self::BF16 => "bf16",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
