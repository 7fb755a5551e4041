//! Reduction operations
//!
//! This module holds the numerical kernels the comparator is built from:
//!
//! ```text
//! ops
//!   ├── cast      cast_narrow, widen           (f64 <-> narrow element types)
//!   ├── reduce    sequential_sum, tree_sum,    (single-threaded kernels)
//!   │             compensated_sum, dot_product,
//!   │             absolute_error
//!   ├── parallel  par_tree_sum, par_tree_dot   (rayon, bit-identical to tree)
//!   └── dispatch  dispatch_float!              (runtime DType -> Element type)
//! ```
//!
//! Every kernel is generic over [`Element`](crate::dtype::Element) and
//! accumulates in the precision of its input.

pub mod cast;
#[macro_use]
pub mod dispatch;
pub mod parallel;
pub mod reduce;

pub use cast::{cast_narrow, widen};
pub use parallel::{ParallelismConfig, par_tree_dot, par_tree_sum};
pub use reduce::{
    KahanAccumulator, ReduceStrategy, absolute_error, compensated_sum, dot_product, reduce,
    sequential_sum, tree_sum,
};
