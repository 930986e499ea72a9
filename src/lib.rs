//! # sparsekit
//!
//! **Host-side core of a sparse math library: dtypes, context handle,
//! descriptors, and numerical verification.**
//!
//! sparsekit provides the pieces of a GPU sparse math library that live on
//! the host: the runtime dtype system, the library context handle, sparse
//! matrix descriptor records, and a verification engine that validates
//! accelerator-computed buffers against host reference buffers.
//!
//! ## The verification engine
//!
//! Two comparison regimes over equal-shaped column-major buffers:
//!
//! - **Exact** ([`verify::unit_check`]): bit-exact equality, with NaN
//!   references requiring NaN candidates.
//! - **Tolerance** ([`verify::near_check`]): per-element tolerance derived
//!   from the reference magnitude with a `10 * epsilon` floor, for results
//!   that legitimately differ between host and accelerator execution.
//!
//! Both are generic over the element kind; a single scan algorithm is
//! parameterized by per-kind predicates instead of being written once per
//! type.
//!
//! ## Quick Start
//!
//! ```
//! use sparsekit::prelude::*;
//!
//! let host = [1.0f32, 2.0, 3.0, 4.0];
//! let device = [1.0f32, 2.0, 3.0, 4.0];
//!
//! let reference = MatrixRef::from_column_major(&host, 2, 2)?;
//! let candidate = MatrixRef::from_column_major(&device, 2, 2)?;
//! unit_check(&reference, &candidate)?;
//! # Ok::<(), sparsekit::error::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod descriptor;
pub mod dtype;
pub mod error;
pub mod verify;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{Context, LayerMode, PointerMode, StreamId};
    pub use crate::descriptor::{HybMat, HybPartition, IndexBase, MatDescr, MatrixType, ValBuffer};
    pub use crate::dtype::{Complex64, Complex128, DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::verify::{
        AssertReporter, CheckReporter, MatrixRef, Mismatch, StandaloneReporter, near_check,
        near_check_with, unit_check, unit_check_with,
    };
}
