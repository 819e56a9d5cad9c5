use common::{Code, ErrorCode};
use std::fmt::{Debug, Display};

/// Asserts that a service response matches the expected outcome.
///
/// Successful responses are compared by value; failures are compared by
/// their [`Code`] so tests stay independent of error message wording.
pub fn assert_response<T, E>(got: Result<T, E>, want: Result<T, Code>)
where
    T: PartialEq + Debug,
    E: ErrorCode + Display + Debug,
{
    match (got, want) {
        (Ok(got), Ok(want)) => assert_eq!(got, want),
        (Err(got), Err(want)) => assert_eq!(got.code(), want, "error was: {got}"),
        (Ok(got), Err(want)) => panic!("left: {got:?}\nright: {want:?}"),
        (Err(got), Ok(want)) => panic!("left: {got}\nright: {want:?}"),
    }
}
