//! Error types raised by containers.
//!
//! - [`NothingError`]: raised when an empty optional container is unwrapped.
//! - [`Fault`]: a single error channel able to carry any error value while
//!   keeping its concrete type recoverable.

/// The error raised by unwrapping an empty optional container.
///
/// Produced by [`Maybe::try_unwrap`](super::Maybe::try_unwrap) on `Nothing`
/// and by [`Unwrap::try_unwrap`](super::Unwrap::try_unwrap) on `None`.
///
/// # Examples
///
/// ```rust
/// use ergoflo::container::{Maybe, NothingError};
///
/// let error = Maybe::<i32>::Nothing.try_unwrap().unwrap_err();
/// assert_eq!(error, NothingError);
/// assert_eq!(error.to_string(), "called `try_unwrap` on a `Nothing` value");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("called `try_unwrap` on a `Nothing` value")]
pub struct NothingError;

/// A boxed error that remembers its concrete type.
///
/// `Fault` lets a guarded function raise errors of several unrelated types
/// through one return type. Any `Error + Send + Sync + 'static` converts into
/// a `Fault` with `?`, and the original value is recovered unchanged with
/// `downcast_ref` or `downcast`.
///
/// # Examples
///
/// ```rust
/// use ergoflo::container::{Fault, NothingError};
///
/// #[derive(Debug, PartialEq, thiserror::Error)]
/// #[error("{0}")]
/// struct ValueError(String);
///
/// fn parse(input: &str) -> Result<i32, Fault> {
///     if input.is_empty() {
///         return Err(ValueError("empty input".to_string()).into());
///     }
///     let value: Option<i32> = input.parse().ok();
///     Ok(value.ok_or(NothingError)?)
/// }
///
/// let fault = parse("").unwrap_err();
/// assert_eq!(fault.downcast_ref::<ValueError>(), Some(&ValueError("empty input".to_string())));
///
/// let fault = parse("abc").unwrap_err();
/// assert!(fault.is::<NothingError>());
/// ```
pub type Fault = anyhow::Error;

static_assertions::assert_impl_all!(NothingError: Send, Sync, std::error::Error);
