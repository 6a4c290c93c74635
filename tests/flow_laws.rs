#![cfg(feature = "compose")]
//! Property-based tests for flow composition laws.
//!
//! ## Flow Laws
//! - **Identity**: `flow!(f)(x) == f(x)` and `flow!()(x) == x`
//! - **Associativity**: `flow!(f, g, h) == flow!(flow!(f, g), h) == flow!(f, flow!(g, h))`
//! - **Unit**: `flow!(identity, f) == f == flow!(f, identity)`
//!
//! ## Fallible Flow Laws
//! - **Associativity**: as above, for `try_flow!`
//! - **Short circuit**: no stage after a failing stage is ever called
//!
//! Using proptest, we generate random inputs to verify these laws across a
//! wide range of values.

use std::cell::Cell;

use ergoflo::compose::{Pipeline, identity, succeed};
use ergoflo::{flow, try_flow};
use proptest::prelude::*;

// =============================================================================
// Flow Laws
// =============================================================================

proptest! {
    /// Identity: flow!(f)(x) == f(x)
    #[test]
    fn prop_flow_single_is_function(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);

        prop_assert_eq!(flow!(function)(x), function(x));
    }

    /// Identity: flow!()(x) == x
    #[test]
    fn prop_flow_empty_is_identity(x in any::<i64>()) {
        let unchanged = flow!();
        prop_assert_eq!(unchanged(x), x);
    }

    /// Unit: flow!(identity, f)(x) == f(x) == flow!(f, identity)(x)
    #[test]
    fn prop_flow_identity_is_unit(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_sub(11);

        prop_assert_eq!(flow!(identity, function)(x), function(x));
        prop_assert_eq!(flow!(function, identity)(x), function(x));
    }

    /// Associativity: flow!(f, g, h) == flow!(flow!(f, g), h) == flow!(f, flow!(g, h))
    #[test]
    fn prop_flow_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(2);
        let function2 = |n: i32| n.wrapping_mul(5);
        let function3 = |n: i32| n.wrapping_sub(7);

        let flat = flow!(function1, function2, function3);
        let left_grouped = flow!(flow!(function1, function2), function3);
        let right_grouped = flow!(function1, flow!(function2, function3));

        prop_assert_eq!(flat(x), left_grouped(x));
        prop_assert_eq!(flat(x), right_grouped(x));
        prop_assert_eq!(flat(x), function3(function2(function1(x))));
    }

    /// A runtime Pipeline agrees with the equivalent flow!
    #[test]
    fn prop_pipeline_matches_flow(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(2);
        let function2 = |n: i32| n.wrapping_mul(5);

        let pipeline = Pipeline::new().then(function1).then(function2);

        prop_assert_eq!(pipeline.run(x), flow!(function1, function2)(x));
    }
}

// =============================================================================
// Fallible Flow Laws
// =============================================================================

fn checked_add(offset: i32) -> impl Fn(i32) -> Result<i32, String> + Copy {
    move |n: i32| n.checked_add(offset).ok_or_else(|| format!("overflow adding {offset}"))
}

proptest! {
    /// Associativity holds for fallible flows, including which error surfaces.
    #[test]
    fn prop_try_flow_associativity(x in any::<i32>()) {
        let function1 = checked_add(i32::MAX / 2);
        let function2 = checked_add(i32::MAX / 3);
        let function3 = checked_add(-5);

        let flat = try_flow!(function1, function2, function3);
        let left_grouped = try_flow!(try_flow!(function1, function2), function3);
        let right_grouped = try_flow!(function1, try_flow!(function2, function3));

        prop_assert_eq!(flat(x), left_grouped(x));
        prop_assert_eq!(flat(x), right_grouped(x));
    }

    /// Unit: succeed is neutral on both sides of a fallible flow.
    #[test]
    fn prop_try_flow_succeed_is_unit(x in any::<i32>()) {
        let function = checked_add(1_000);

        prop_assert_eq!(try_flow!(succeed::<i32, String>, function)(x), function(x));
        prop_assert_eq!(try_flow!(function, succeed::<i32, String>)(x), function(x));
    }

    /// Short circuit: a stage after the first failure is never called.
    #[test]
    fn prop_try_flow_short_circuits(x in any::<i32>(), threshold in any::<i32>()) {
        let later_calls = Cell::new(0);
        let gate = |n: i32| if n < threshold { Ok(n) } else { Err(n) };
        let observe = |n: i32| -> Result<i32, i32> {
            later_calls.set(later_calls.get() + 1);
            Ok(n)
        };

        let result = try_flow!(gate, observe, observe)(x);

        if x < threshold {
            prop_assert_eq!(result, Ok(x));
            prop_assert_eq!(later_calls.get(), 2);
        } else {
            prop_assert_eq!(result, Err(x));
            prop_assert_eq!(later_calls.get(), 0);
        }
    }
}
