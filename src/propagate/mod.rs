//! Failure propagation for container-returning functions.
//!
//! A guarded function returns its success container untouched and raises the
//! error of a failure container. Guarded functions compose: a guarded stage
//! that unwraps the output of another guarded stage with `?` forwards the
//! original error value, so a failure deep in a call chain reaches the
//! outermost caller with its type and contents intact.
//!
//! # Overview
//!
//! - [`guard`]: dispatch a single container value
//! - [`checked`]: guard a function that returns a container
//! - [`try_checked`]: guard a function that returns a container and may itself raise
//! - `#[checked]`: the attribute form for `fn` items (feature `derive`)
//!
//! # Examples
//!
//! ```rust
//! use ergoflo::container::{Maybe, NothingError};
//! use ergoflo::propagate::checked;
//!
//! let lookup = checked(|key: &str| match key {
//!     "answer" => Maybe::Some(42),
//!     _ => Maybe::Nothing,
//! });
//!
//! assert_eq!(lookup("answer"), Ok(Maybe::Some(42)));
//! assert_eq!(lookup("question"), Err(NothingError));
//! ```
//!
//! # Railroading
//!
//! ```rust
//! use ergoflo::container::{Fault, Maybe, Unwrap};
//! use ergoflo::propagate::try_checked;
//!
//! #[derive(Debug, PartialEq, thiserror::Error)]
//! #[error("{0}")]
//! struct ValueError(&'static str);
//!
//! fn foo(_: ()) -> Result<i32, ValueError> {
//!     Err(ValueError("oops"))
//! }
//!
//! let bar = try_checked(|(): ()| -> Result<Maybe<i32>, Fault> {
//!     Ok(Maybe::Some(foo(()).try_unwrap()?))
//! });
//!
//! let fault = bar(()).unwrap_err();
//! assert_eq!(fault.downcast_ref::<ValueError>(), Some(&ValueError("oops")));
//! assert_eq!(fault.to_string(), "oops");
//! ```

use crate::container::Unwrap;

#[cfg(feature = "derive")]
pub use ergoflo_derive::checked;

/// Returns a success container unchanged, or raises a failure's error.
///
/// The failure's error is converted into `E` with [`From`]. When `E` is the
/// container's own error type the conversion is the identity and the error
/// value is returned exactly as the container carried it.
///
/// # Errors
///
/// Returns the unwrapped error of a failure container, converted into `E`.
///
/// # Examples
///
/// ```rust
/// use ergoflo::container::{Fault, Maybe, NothingError};
/// use ergoflo::propagate::guard;
///
/// assert_eq!(guard::<_, NothingError>(Maybe::Some(1)), Ok(Maybe::Some(1)));
/// assert_eq!(guard::<_, NothingError>(Maybe::<i32>::Nothing), Err(NothingError));
///
/// let fault = guard::<_, Fault>(Maybe::<i32>::Nothing).unwrap_err();
/// assert!(fault.is::<NothingError>());
/// ```
#[inline]
pub fn guard<C, E>(container: C) -> Result<C, E>
where
    C: Unwrap,
    E: From<C::Error>,
{
    container.check().map_err(|error| {
        tracing::trace!(
            container = std::any::type_name::<C>(),
            "guarded function returned a failure container; raising its error"
        );
        E::from(error)
    })
}

/// Guards a function that returns a container.
///
/// The returned function calls `function` and passes its output through
/// [`guard`]: `Ok(container)` for a success container, `Err(error)` with the
/// container's own error type for a failure.
///
/// Building the guarded function does not call `function`.
///
/// # Examples
///
/// ```rust
/// use ergoflo::propagate::checked;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct RuntimeError(u32);
///
/// let fail = checked(|code: u32| -> Result<u32, RuntimeError> { Err(RuntimeError(code)) });
/// assert_eq!(fail(0), Err(RuntimeError(0)));
///
/// let succeed = checked(|x: u32| -> Result<u32, RuntimeError> { Ok(x + 1) });
/// assert_eq!(succeed(1), Ok(Ok(2)));
/// ```
pub fn checked<A, C, F>(function: F) -> impl Fn(A) -> Result<C, C::Error>
where
    F: Fn(A) -> C,
    C: Unwrap,
{
    move |input: A| -> Result<C, C::Error> { guard(function(input)) }
}

/// Guards a function that returns a container and may raise on its own.
///
/// An `Err` returned directly by `function` is passed through unchanged. A
/// failure container is unwrapped and its error converted into `E`.
///
/// # Examples
///
/// ```rust
/// use ergoflo::container::{Maybe, NothingError};
/// use ergoflo::propagate::{checked, try_checked};
///
/// let foo = checked(|(): ()| Maybe::Some(3));
/// let bar = try_checked(|(): ()| -> Result<Result<i32, NothingError>, NothingError> {
///     Ok(Ok(foo(())?.try_unwrap()?))
/// });
///
/// assert_eq!(bar(()), Ok(Ok(3)));
/// ```
pub fn try_checked<A, C, E, F>(function: F) -> impl Fn(A) -> Result<C, E>
where
    F: Fn(A) -> Result<C, E>,
    C: Unwrap,
    E: From<C::Error>,
{
    move |input: A| -> Result<C, E> { guard(function(input)?) }
}
