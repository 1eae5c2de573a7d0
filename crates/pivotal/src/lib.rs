//! # Pivotal
//!
//! Solve square linear systems `A·x = b` by Gaussian elimination with
//! partial pivoting.
//!
//! ## Modules
//!
//! - **core**: `Matrix`, `LinearSystem`, input layouts, errors, random systems
//! - **linalg**: the elimination itself, reporters, residual checks
//! - **io**: JSON and CSV systems, solution reports
//!
//! ```
//! use pivotal::linalg::solve;
//!
//! let x = solve(&[vec![2.0, 8.0], vec![5.0, 5.0]], &[45.0, 345.0])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(x, vec![84.5, -15.5]);
//!
//! // A singular system is not an error, it has no unique solution.
//! assert_eq!(solve(&[vec![1.0, 2.0], vec![2.0, 4.0]], &[3.0, 6.0]).unwrap(), None);
//! ```

/// Validated input types.
pub use pivotal_core as core;

/// Gaussian elimination.
pub use pivotal_linalg as linalg;

/// I/O utilities.
pub use pivotal_io as io;
