//! The `try_flow!` macro for composing fallible functions.
//!
//! This module provides the [`try_flow!`] macro, the short-circuiting
//! counterpart of [`flow!`](crate::flow!).

/// Composes fallible functions from left to right, stopping at the first error.
///
/// Every stage returns a [`Result`]. `try_flow!(f, g, h)(x)` runs `f(x)`; on
/// `Ok(v)` it continues with `g(v)`, and so on. The first `Err` is returned
/// immediately and no later stage runs.
///
/// Guarded functions from [`checked`](crate::propagate::checked) slot in
/// directly: a success container is handed to the next stage whole, and a
/// failure container becomes the error the whole flow returns.
///
/// Each error travels to the end of the flow through `?`, so an earlier
/// stage's error is converted into the last stage's error type with [`From`].
/// With a shared error type the conversion is the identity and the error
/// value arrives unchanged.
///
/// # Syntax
///
/// - `try_flow!()` - Wraps its input in `Ok`
/// - `try_flow!(f)` - Returns `f` unchanged
/// - `try_flow!(f, g, ...)` - Chains any number of fallible functions
///
/// # Examples
///
/// ## Railroading through guarded stages
///
/// ```
/// use ergoflo::container::{Maybe, NothingError};
/// use ergoflo::propagate::checked;
/// use ergoflo::try_flow;
///
/// let parse = checked(|input: &str| Maybe::from(input.parse::<i32>().ok()));
/// let halve = checked(|number: Maybe<i32>| match number {
///     Maybe::Some(value) if value % 2 == 0 => Maybe::Some(value / 2),
///     _ => Maybe::Nothing,
/// });
///
/// let parse_and_halve = try_flow!(parse, halve);
///
/// assert_eq!(parse_and_halve("42"), Ok(Maybe::Some(21)));
/// assert_eq!(parse_and_halve("41"), Err(NothingError));
/// assert_eq!(parse_and_halve("forty-two"), Err(NothingError));
/// ```
///
/// ## Errors converge into the final error type
///
/// ```
/// use ergoflo::container::Fault;
/// use ergoflo::try_flow;
///
/// let parse = |input: &str| input.parse::<u8>();
/// let describe = |value: u8| -> Result<String, Fault> { Ok(format!("byte {value}")) };
///
/// let parse_byte = try_flow!(parse, describe);
///
/// assert_eq!(parse_byte("7").unwrap(), "byte 7");
/// assert!(parse_byte("700").unwrap_err().is::<std::num::ParseIntError>());
/// ```
#[macro_export]
macro_rules! try_flow {
    // No functions: wrap the input in `Ok`
    () => {
        $crate::compose::succeed
    };

    // Single function: returned as-is
    ($function:expr $(,)?) => {
        $function
    };

    // Two or more functions: stop at the first `Err`
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::try_flow!($($remaining_functions),+);
        move |input| remaining(first(input)?)
    }};
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    #[test]
    fn test_try_flow_empty_wraps_in_ok() {
        let unchanged = try_flow!();
        let result: Result<i32, String> = unchanged(3);
        assert_eq!(result, Ok(3));
    }

    #[test]
    fn test_try_flow_chains_successes() {
        let add_one = |x: i32| -> Result<i32, String> { Ok(x + 1) };
        let double = |x: i32| -> Result<i32, String> { Ok(x * 2) };
        assert_eq!(try_flow!(add_one, double)(5), Ok(12));
    }

    #[test]
    fn test_try_flow_stops_at_first_error() {
        let later_calls = Cell::new(0);
        let fail = |_: i32| -> Result<i32, String> { Err("stage one".to_string()) };
        let count = |x: i32| -> Result<i32, String> {
            later_calls.set(later_calls.get() + 1);
            Ok(x)
        };

        let flowed = try_flow!(fail, count, count);

        assert_eq!(flowed(1), Err("stage one".to_string()));
        assert_eq!(later_calls.get(), 0);
    }
}
