//! Success/failure containers.
//!
//! This module provides the container side of ergoflo: the [`Maybe`] type,
//! the errors containers raise, and the [`Unwrap`] capability that the
//! propagation layer dispatches on.
//!
//! # Overview
//!
//! | Container | Success | Failure | Raised error |
//! |-----------|---------|---------|--------------|
//! | [`Maybe<T>`] | `Some(T)` | `Nothing` | [`NothingError`] |
//! | [`Option<T>`] | `Some(T)` | `None` | [`NothingError`] |
//! | [`Result<T, E>`] | `Ok(T)` | `Err(E)` | `E`, exactly as carried |
//!
//! # Examples
//!
//! ```rust
//! use ergoflo::container::{Maybe, NothingError, Unwrap};
//!
//! fn describe<C: Unwrap>(container: &C) -> &'static str {
//!     if container.is_success() { "success" } else { "failure" }
//! }
//!
//! assert_eq!(describe(&Maybe::Some(1)), "success");
//! assert_eq!(describe(&Maybe::<i32>::Nothing), "failure");
//! assert_eq!(describe(&Ok::<i32, String>(1)), "success");
//! assert_eq!(describe(&None::<i32>), "failure");
//!
//! // Err carries its own error and unwrapping hands it back untouched.
//! let failed: Result<i32, String> = Err("boom".to_string());
//! assert_eq!(Unwrap::try_unwrap(failed), Err("boom".to_string()));
//! assert_eq!(Unwrap::try_unwrap(None::<i32>), Err(NothingError));
//! ```

mod error;
mod maybe;

pub use error::{Fault, NothingError};
pub use maybe::Maybe;

/// The capability shared by every success/failure container.
///
/// A container is in exactly one of two states. In the success state
/// [`try_unwrap`](Unwrap::try_unwrap) yields the contained value; in the
/// failure state it yields the container's error, which callers raise with
/// `?`.
///
/// # Laws
///
/// - `container.is_success() == container.try_unwrap().is_ok()`
/// - `container.is_failure() == !container.is_success()`
/// - `container.check()` is `Ok(container)` exactly when `is_success()` holds,
///   and otherwise the same error `try_unwrap` would return
pub trait Unwrap: Sized {
    /// The value held by the success variant.
    type Value;

    /// The error produced by unwrapping the failure variant.
    type Error;

    /// Returns `true` if the container is in its success state.
    fn is_success(&self) -> bool;

    /// Returns `true` if the container is in its failure state.
    #[inline]
    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Extracts the success value or returns the failure's error.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when the container is in its failure state.
    fn try_unwrap(self) -> Result<Self::Value, Self::Error>;

    /// Keeps a success container whole, or unwraps a failure into its error.
    ///
    /// This is the dispatch [`guard`](crate::propagate::guard) is built on:
    /// the success container is returned as-is, never its inner value.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when the container is in its failure state.
    fn check(self) -> Result<Self, Self::Error>;
}

impl<T> Unwrap for Maybe<T> {
    type Value = T;
    type Error = NothingError;

    #[inline]
    fn is_success(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn try_unwrap(self) -> Result<T, NothingError> {
        self.ok_or(NothingError)
    }

    #[inline]
    fn check(self) -> Result<Self, NothingError> {
        match self {
            Self::Some(value) => Ok(Self::Some(value)),
            Self::Nothing => Err(NothingError),
        }
    }
}

impl<T> Unwrap for Option<T> {
    type Value = T;
    type Error = NothingError;

    #[inline]
    fn is_success(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn try_unwrap(self) -> Result<T, NothingError> {
        self.ok_or(NothingError)
    }

    #[inline]
    fn check(self) -> Result<Self, NothingError> {
        match self {
            Some(value) => Ok(Some(value)),
            None => Err(NothingError),
        }
    }
}

impl<T, E> Unwrap for Result<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn try_unwrap(self) -> Result<T, E> {
        self
    }

    #[inline]
    fn check(self) -> Result<Self, E> {
        match self {
            Ok(value) => Ok(Ok(value)),
            Err(error) => Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_unwrap_returns_carried_error() {
        let container: Result<i32, &str> = Err("carried");
        assert!(container.is_failure());
        assert_eq!(Unwrap::try_unwrap(container), Err("carried"));
    }

    #[test]
    fn test_option_unwrap_raises_nothing_error() {
        assert_eq!(Unwrap::try_unwrap(Some(5)), Ok(5));
        assert_eq!(Unwrap::try_unwrap(None::<u8>), Err(NothingError));
    }

    #[test]
    fn test_maybe_trait_and_inherent_unwrap_agree() {
        let some = Maybe::Some("x");
        assert_eq!(Unwrap::try_unwrap(some), some.try_unwrap());
        assert!(Unwrap::is_success(&some));
    }

    #[test]
    fn test_check_keeps_success_container_whole() {
        assert_eq!(Maybe::Some(3).check(), Ok(Maybe::Some(3)));
        assert_eq!(Ok::<i32, String>(3).check(), Ok(Ok(3)));
        assert_eq!(Some(3).check(), Ok(Some(3)));
    }

    #[test]
    fn test_check_unwraps_failure_into_error() {
        assert_eq!(Maybe::<i32>::Nothing.check(), Err(NothingError));
        assert_eq!(Err::<i32, &str>("e").check(), Err("e"));
    }
}
