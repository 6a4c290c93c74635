//! # ergoflo
//!
//! Success/failure containers with railroading pipelines.
//!
//! ## Overview
//!
//! This library lets chains of fallible functions short-circuit on failure
//! without branching at every step. It includes:
//!
//! - **Containers**: [`Maybe`](container::Maybe) (`Some`/`Nothing`), plus the
//!   standard `Option` and `Result`, unified by the
//!   [`Unwrap`](container::Unwrap) capability
//! - **Flows**: `flow!` and `try_flow!` compose unary functions left to right;
//!   [`Pipeline`](compose::Pipeline) builds the same at runtime
//! - **Propagation**: [`checked`](propagate::checked) and the `#[checked]`
//!   attribute turn a returned failure container into a raised error, keeping
//!   the original error value intact through every guarded frame
//!
//! ## Feature Flags
//!
//! - `container`: `Maybe`, `Unwrap`, `NothingError`, `Fault`
//! - `compose`: `flow!`, `try_flow!`, `Pipeline`, `TryPipeline`
//! - `propagate`: `guard`, `checked`, `try_checked`
//! - `derive`: the `#[checked]` attribute
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ergoflo::prelude::*;
//!
//! #[derive(Debug, PartialEq, thiserror::Error)]
//! #[error("{0}")]
//! struct ValueError(&'static str);
//!
//! fn foo() -> Result<i32, ValueError> {
//!     Err(ValueError("oops"))
//! }
//!
//! #[checked(error = Fault)]
//! fn bar() -> Maybe<i32> {
//!     Maybe::Some(foo()?)
//! }
//!
//! let fault = bar().unwrap_err();
//! assert_eq!(fault.downcast_ref::<ValueError>(), Some(&ValueError("oops")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets `#[checked]` expansions name `::ergoflo` inside this crate too.
#[cfg(feature = "derive")]
extern crate self as ergoflo;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, functions, and macros.
///
/// # Usage
///
/// ```rust
/// use ergoflo::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "propagate")]
    pub use crate::propagate::*;
}

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "propagate")]
pub mod propagate;
