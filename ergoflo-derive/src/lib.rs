//! Procedural macros for ergoflo.
//!
//! This crate provides the `#[checked]` attribute, the declarative form of
//! `ergoflo::propagate::checked`. Use it through the `ergoflo` crate
//! (`ergoflo::propagate::checked` or `ergoflo::prelude::*`), which re-exports
//! it next to the function of the same name.
//!
//! # Example
//!
//! ```rust,ignore
//! use ergoflo::prelude::*;
//!
//! #[checked]
//! fn foo() -> Maybe<i32> {
//!     Maybe::Some(3)
//! }
//!
//! #[checked]
//! fn bar() -> Result<i32, NothingError> {
//!     Ok(foo()?.try_unwrap()?)
//! }
//!
//! assert_eq!(bar(), Ok(Ok(3)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod checked;

use proc_macro::TokenStream;

/// Guards a function that returns a success/failure container.
///
/// The annotated function keeps its parameters, but its return type changes
/// from the container `C` to `Result<C, E>`:
///
/// - a success container (`Some`, `Ok`) is returned as `Ok(container)`,
///   unchanged
/// - a failure container (`Nothing`, `None`, `Err`) is unwrapped and its error
///   returned as `Err`, converted into `E`
///
/// Inside the body, `?` raises any error convertible into `E`, and
/// `return value` returns the container `value` as usual.
///
/// # Arguments
///
/// - `#[checked]`: `E` is the container's own error,
///   `<C as ergoflo::container::Unwrap>::Error`
/// - `#[checked(error = Type)]`: `E` is `Type`, which must implement
///   `From` for the container's error (for example `ergoflo::container::Fault`)
///
/// # Example
///
/// ```rust,ignore
/// use ergoflo::prelude::*;
///
/// #[derive(Debug, PartialEq, thiserror::Error)]
/// #[error("{0}")]
/// struct ValueError(&'static str);
///
/// fn foo() -> Result<i32, ValueError> {
///     Err(ValueError("oops"))
/// }
///
/// #[checked(error = Fault)]
/// fn bar() -> Maybe<i32> {
///     Maybe::Some(foo()?)
/// }
///
/// let fault = bar().unwrap_err();
/// assert_eq!(fault.downcast_ref::<ValueError>(), Some(&ValueError("oops")));
/// ```
///
/// # Methods
///
/// ```rust,ignore
/// use ergoflo::prelude::*;
///
/// struct Holder<T> {
///     value: Maybe<T>,
/// }
///
/// impl<T: Clone> Holder<T> {
///     #[checked]
///     fn get_value(&self) -> Maybe<T> {
///         self.value.clone()
///     }
/// }
///
/// let holder: Holder<i32> = Holder { value: Maybe::Nothing };
/// let value = holder.get_value().map_or(3, |found| found.unwrap_or(0));
/// assert_eq!(value, 3);
/// ```
///
/// # Restrictions
///
/// - `async fn` is not supported
/// - the function must declare a return type
#[proc_macro_attribute]
pub fn checked(attribute: TokenStream, item: TokenStream) -> TokenStream {
    checked::checked_impl(attribute, item)
}
