//! Maybe type - an optional value.
//!
//! This module provides the `Maybe<T>` type, which represents either a
//! present value `Some(T)` or an absent one, `Nothing`. It is the optional
//! container understood by [`checked`](crate::propagate::checked) and the
//! `#[checked]` attribute: `Nothing` is the failure variant.
//!
//! `Maybe<T>` converts losslessly to and from [`Option<T>`], so it can be used
//! wherever the standard library's optional type is expected.
//!
//! # Examples
//!
//! ```rust
//! use ergoflo::container::{Maybe, NothingError};
//!
//! let present: Maybe<i32> = Maybe::Some(3);
//! let absent: Maybe<i32> = Maybe::Nothing;
//!
//! assert_eq!(present.try_unwrap(), Ok(3));
//! assert_eq!(absent.try_unwrap(), Err(NothingError));
//! ```

use super::NothingError;

/// An optional value: either `Some(T)` or `Nothing`.
///
/// Unlike [`Option::unwrap`], extracting the value from a `Maybe` never
/// panics. [`Maybe::try_unwrap`] returns the missing value as a
/// [`NothingError`], which callers propagate with `?`.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use ergoflo::container::Maybe;
///
/// let value = Maybe::Some(20).map(|x| x + 1);
/// assert_eq!(value, Maybe::Some(21));
///
/// let empty: Maybe<i32> = Maybe::Nothing;
/// assert_eq!(empty.map(|x| x + 1), Maybe::Nothing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoflo::container::Maybe;
    ///
    /// assert!(Maybe::Some(1).is_some());
    /// assert!(!Maybe::<i32>::Nothing.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoflo::container::Maybe;
    ///
    /// assert!(Maybe::<i32>::Nothing.is_nothing());
    /// assert!(!Maybe::Some(1).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Extracts the contained value, or reports its absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`NothingError`] if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoflo::container::{Maybe, NothingError};
    ///
    /// fn first_even(values: &[i32]) -> Result<i32, NothingError> {
    ///     let found: Maybe<i32> = values.iter().copied().find(|x| x % 2 == 0).into();
    ///     found.try_unwrap()
    /// }
    ///
    /// assert_eq!(first_even(&[1, 4, 5]), Ok(4));
    /// assert_eq!(first_even(&[1, 3]), Err(NothingError));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, NothingError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::Nothing => Err(NothingError),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value or computes one from `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoflo::container::Maybe;
    ///
    /// let empty: Maybe<String> = Maybe::Nothing;
    /// assert_eq!(empty.unwrap_or_else(|| "fallback".to_string()), "fallback");
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::Nothing => function(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies `function` to the contained value, leaving `Nothing` untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that may itself produce `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoflo::container::Maybe;
    ///
    /// fn half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::Some(x / 2) } else { Maybe::Nothing }
    /// }
    ///
    /// assert_eq!(Maybe::Some(8).and_then(half).and_then(half), Maybe::Some(2));
    /// assert_eq!(Maybe::Some(6).and_then(half).and_then(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns `self` if it holds a value, otherwise the result of `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::Nothing => function(),
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::Nothing,
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into a [`Result`], mapping `Nothing` to `Err(error)`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` if this is `Nothing`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::Nothing => Err(error),
        }
    }

    /// Converts into a [`Result`], computing the error for `Nothing` lazily.
    ///
    /// # Errors
    ///
    /// Returns `Err(function())` if this is `Nothing`.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::Nothing => Err(function()),
        }
    }

    /// Converts into the standard library's [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
