//! Helper functions backing the empty flows.
//!
//! - [`identity`]: what `flow!()` evaluates to
//! - [`succeed`]: what `try_flow!()` evaluates to

/// Returns the value unchanged.
///
/// The identity function is the unit element of flow composition:
/// - `flow!(identity, f)` is equivalent to `f`
/// - `flow!(f, identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use ergoflo::compose::identity;
/// use ergoflo::flow;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(flow!(identity, double)(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Wraps the value in `Ok`.
///
/// This is the unit element of fallible flows: `try_flow!(succeed, f)` and
/// `try_flow!(f, succeed)` both behave like `f`.
///
/// # Errors
///
/// Never returns an error; the error type is chosen by the caller.
///
/// # Examples
///
/// ```
/// use ergoflo::compose::succeed;
///
/// let result: Result<&str, String> = succeed("ready");
/// assert_eq!(result, Ok("ready"));
/// ```
#[inline]
pub const fn succeed<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_succeed_never_fails() {
        let result: Result<Vec<u8>, ()> = succeed(vec![1, 2]);
        assert_eq!(result, Ok(vec![1, 2]));
    }
}
