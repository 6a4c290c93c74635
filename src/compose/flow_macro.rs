//! The `flow!` macro for left-to-right function composition.
//!
//! This module provides the [`flow!`] macro which builds a single function
//! out of a sequence of unary functions, applied in the order written.

/// Composes functions from left to right into a single function.
///
/// `flow!(f, g, h)(x)` is equivalent to `h(g(f(x)))`.
///
/// Nothing is evaluated when the flow is built; the stages run each time the
/// resulting function is called. A flow can therefore be stored, passed
/// around, and called any number of times. There is no memoization: every
/// call runs every stage again.
///
/// A flow never looks at what a stage returns. A stage returning a
/// [`Maybe`](crate::container::Maybe) or [`Result`] hands that container to
/// the next stage like any other value. To stop at the first failure, use
/// [`try_flow!`](crate::try_flow!).
///
/// # Syntax
///
/// - `flow!()` - The identity function
/// - `flow!(f)` - Returns `f` unchanged
/// - `flow!(f, g)` - Returns `|x| g(f(x))`
/// - `flow!(f, g, h, ...)` - Composes any number of functions
///
/// # Laws
///
/// - **Identity**: `flow!(f)(x) == f(x)` and `flow!()(x) == x`
/// - **Associativity**: `flow!(f, g, h) == flow!(flow!(f, g), h) == flow!(f, flow!(g, h))`
///
/// # Examples
///
/// ## Basic flow
///
/// ```
/// use ergoflo::flow;
///
/// fn add_two(x: i32) -> i32 { x + 2 }
///
/// let add_four = flow!(add_two, add_two);
/// assert_eq!(add_four(0), 4);
/// ```
///
/// ## Types change along the flow
///
/// ```
/// use ergoflo::flow;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digits = flow!(to_string, get_length);
/// assert_eq!(digits(12345), 5);
/// ```
///
/// ## Containers are ordinary values
///
/// ```
/// use ergoflo::flow;
///
/// #[derive(Debug, PartialEq)]
/// struct RuntimeError(&'static str);
///
/// fn add_two(x: i32) -> i32 { x + 2 }
/// fn fail(_: i32) -> Result<i32, RuntimeError> { Err(RuntimeError("oops")) }
///
/// assert_eq!(flow!(add_two, fail)(3), Err(RuntimeError("oops")));
/// assert_eq!(flow!(add_two, Ok::<i32, RuntimeError>)(3), Ok(5));
/// ```
///
/// ## Identity flow
///
/// ```
/// use ergoflo::flow;
///
/// let unchanged = flow!();
/// assert_eq!(unchanged("as is"), "as is");
/// ```
#[macro_export]
macro_rules! flow {
    // No functions: the identity flow
    () => {
        $crate::compose::identity
    };

    // Single function: returned as-is
    ($function:expr $(,)?) => {
        $function
    };

    // Two or more functions: run the first, then flow the rest
    // flow!(f, g, h, ...) = flow!(g, h, ...) after f
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::flow!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
