//! Integration tests for compose! and the runtime compose functions.

#![cfg(feature = "compose")]

use fnutils::compose;
use fnutils::compose::{Step, TryStep, identity, try_compose};
use rstest::rstest;

#[rstest]
fn compose_macro_applies_rightmost_first() {
    let trim = |text: &str| text.trim().to_string();
    let shout = |text: String| text.to_uppercase();
    let exclaim = |text: String| text + "!";

    let announce = compose!(exclaim, shout, trim);
    assert_eq!(announce("  hello "), "HELLO!");
}

#[rstest]
fn compose_macro_with_identity_on_either_side() {
    let negate = |x: i32| -x;

    assert_eq!(compose!(identity, negate)(4), -4);
    assert_eq!(compose!(negate, identity)(4), -4);
}

#[rstest]
fn compose_macro_accepts_trailing_comma() {
    let increment = |x: u8| x + 1;
    assert_eq!(compose!(increment, increment,)(1), 3);
}

#[rstest]
fn runtime_compose_applies_last_step_first() {
    let steps: Vec<Step<'_, String>> = vec![
        Box::new(|text: String| format!("<{text}>")),
        Box::new(|text: String| text.repeat(2)),
    ];
    let wrapped = compose::compose(steps);

    assert_eq!(wrapped("ab".to_string()), "<abab>");
}

#[rstest]
fn try_compose_stops_before_outer_steps() {
    let steps: Vec<TryStep<'_, u32, &str>> = vec![
        Box::new(|x: u32| x.checked_add(1).ok_or("overflow")),
        Box::new(|x: u32| x.checked_mul(2).ok_or("overflow")),
    ];
    let checked = try_compose(steps);

    assert_eq!(checked(3), Ok(7));
    assert_eq!(checked(u32::MAX), Err("overflow"));
}
