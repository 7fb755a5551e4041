//! Precision casts between the f64 reference and narrow element types

use crate::dtype::Element;

/// Round every value of `buffer` to `T` (round-to-nearest-even).
///
/// No error is signalled: the precision loss is the point. Values outside
/// the range of `T` become infinities, NaN stays NaN.
pub fn cast_narrow<T: Element>(buffer: &[f64]) -> Vec<T> {
    buffer.iter().map(|&v| T::from_f64(v)).collect()
}

/// Widen every value of `values` to f64. Exact for every supported type.
pub fn widen<T: Element>(values: &[T]) -> Vec<f64> {
    values.iter().map(|&v| v.to_f64()).collect()
}
