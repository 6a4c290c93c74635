#![cfg(feature = "serde")]

//! Integration tests for serde support in ergoflo.

use ergoflo::container::Maybe;
use rstest::rstest;

#[rstest]
fn test_maybe_json_roundtrip() {
    let present: Maybe<i32> = Maybe::Some(42);
    let absent: Maybe<i32> = Maybe::Nothing;

    let present_json = serde_json::to_string(&present).unwrap();
    let absent_json = serde_json::to_string(&absent).unwrap();

    let restored_present: Maybe<i32> = serde_json::from_str(&present_json).unwrap();
    let restored_absent: Maybe<i32> = serde_json::from_str(&absent_json).unwrap();

    assert_eq!(present, restored_present);
    assert_eq!(absent, restored_absent);
}

#[rstest]
#[case(Maybe::Some(7), r#"{"Some":7}"#)]
#[case(Maybe::Nothing, r#""Nothing""#)]
fn test_maybe_json_shape(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&maybe).unwrap(), expected);
}

#[rstest]
fn test_maybe_nested_in_struct() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Profile {
        name: String,
        nickname: Maybe<String>,
    }

    let profile = Profile {
        name: "ada".to_string(),
        nickname: Maybe::Nothing,
    };

    let json = serde_json::to_string(&profile).unwrap();
    let restored: Profile = serde_json::from_str(&json).unwrap();

    assert_eq!(profile, restored);
}

#[rstest]
fn test_maybe_rejects_unknown_variant() {
    let result: Result<Maybe<i32>, _> = serde_json::from_str(r#"{"Just":1}"#);
    assert!(result.is_err());
}
