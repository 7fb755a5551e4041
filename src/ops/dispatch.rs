//! DType dispatch utilities
//!
//! This module provides the `dispatch_float!` macro for runtime type dispatch:
//! it converts a [`DType`](crate::dtype::DType) value into a concrete
//! [`Element`](crate::dtype::Element) type so generic kernels can be called
//! from code that only knows the dtype at runtime (e.g. a comparator whose
//! narrow precision comes from configuration).
//!
//! # Usage
//!
//! ```ignore
//! fn my_operation(dtype: DType, samples: &[f64]) -> Result<f64> {
//!     dispatch_float!(dtype, T => {
//!         let narrow: Vec<T> = cast_narrow::<T>(samples);
//!         Ok(sequential_sum(&narrow)?.to_f64())
//!     }, "my_operation")
//! }
//! ```
//!
//! ## Supported Types
//!
//! - `F64` -> `f64`
//! - `F32` -> `f32`
//! - `F16` -> `half::f16` (requires "f16" feature)
//! - `BF16` -> `half::bf16` (requires "f16" feature)
//!
//! Without the "f16" feature, `F16`/`BF16` return `Error::UnsupportedDType`
//! from the enclosing function.

/// Internal helper macro to dispatch types requiring the "f16" feature.
/// Parameterized by type to avoid duplicating macro for F16 vs BF16.
#[macro_export]
#[doc(hidden)]
macro_rules! dispatch_f16_type {
    ($T:ident, $body:block, $dtype:expr, $error_op:expr, $type:ty) => {{
        #[cfg(feature = "f16")]
        {
            type $T = $type;
            $body
        }
        #[cfg(not(feature = "f16"))]
        {
            return Err($crate::error::Error::unsupported_dtype($dtype, $error_op));
        }
    }};
}

/// Macro for runtime dtype dispatch to typed operations.
///
/// Evaluates `$body` with `$T` bound to the Rust type matching `$dtype`. The
/// body's value is the value of the whole macro.
#[macro_export]
macro_rules! dispatch_float {
    ($dtype:expr, $T:ident => $body:block, $error_op:expr) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::dtype::DType::F16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, $error_op, half::f16)
            }
            $crate::dtype::DType::BF16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, $error_op, half::bf16)
            }
        }
    };
}
