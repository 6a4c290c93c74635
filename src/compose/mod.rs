//! Function composition utilities.
//!
//! This module builds pipelines: single functions made out of a sequence of
//! unary functions, each one's output becoming the next one's input.
//!
//! # Overview
//!
//! - [`flow!`]: compose functions left-to-right (data flow style)
//! - [`try_flow!`]: compose fallible functions, stopping at the first error
//! - [`Pipeline`] / [`TryPipeline`]: the same, with stages collected at runtime
//!
//! # Helper Functions
//!
//! - [`identity`]: the empty flow
//! - [`succeed`]: the empty fallible flow
//!
//! # Examples
//!
//! ## Flow
//!
//! ```
//! use ergoflo::flow;
//!
//! fn add_two(x: i32) -> i32 { x + 2 }
//!
//! // flow!(f, g)(x) = g(f(x))
//! assert_eq!(flow!(add_two, add_two)(0), 4);
//! ```
//!
//! ## Railroading
//!
//! ```
//! use ergoflo::container::{Fault, Maybe, Unwrap};
//! use ergoflo::propagate::{checked, try_checked};
//! use ergoflo::try_flow;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("negative input: {0}")]
//! struct NegativeInput(i64);
//!
//! let non_negative = checked(|x: i64| if x < 0 { Err(NegativeInput(x)) } else { Ok(x) });
//! let root = try_checked(|x: Result<i64, NegativeInput>| -> Result<Maybe<f64>, Fault> {
//!     #[allow(clippy::cast_precision_loss)]
//!     let value = x.try_unwrap()? as f64;
//!     Ok(Maybe::Some(value.sqrt()))
//! });
//!
//! // The first stage raises its own error type; `?` turns it into a `Fault`.
//! let safe_root = try_flow!(
//!     |x: i64| non_negative(x).map_err(Fault::from),
//!     root,
//! );
//!
//! assert_eq!(safe_root(16).unwrap(), Maybe::Some(4.0));
//! let fault = safe_root(-4).unwrap_err();
//! assert_eq!(fault.to_string(), "negative input: -4");
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `flow!(f, flow!(g, h)) == flow!(flow!(f, g), h)`
//! - **Left Identity**: `flow!(identity, f) == f`
//! - **Right Identity**: `flow!(f, identity) == f`
//! - **Short circuit**: once a stage of `try_flow!` returns `Err`, no later
//!   stage runs

mod flow_macro;
mod pipeline;
mod try_flow_macro;
mod utils;

pub use pipeline::{Pipeline, Stage, TryPipeline, TryStage};
pub use utils::{identity, succeed};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::flow;
pub use crate::try_flow;
