//! Purpose: Round-trip verification primitive for JSON-convertible typed values.
//! Exports: `verify_roundtrip`, `verify_decoded`, `verify_fixture_roundtrip`, `assert_roundtrip`.
//! Role: The assertion core consumed by protocol test suites.
//! Invariants: A forward mismatch short-circuits before the reparse stage runs.
//! Invariants: No I/O (fixture variant aside) and no input mutation; all state is call-scoped.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, ErrorKind, Stage};
use crate::fixture;

/// Verify that `value` converts to `expected` and that the converted JSON
/// survives a dump/parse round-trip.
///
/// Stage 1 checks the forward conversion; stage 2 dumps the converted value
/// all the way out to text, parses it back, and compares again. Each stage
/// reports under its own label so forward-conversion bugs stay
/// distinguishable from textual round-trip bugs.
pub fn verify_roundtrip<T: Serialize>(expected: &Value, value: &T) -> Result<(), Error> {
    let actual = serde_json::to_value(value).map_err(|err| {
        Error::new(ErrorKind::Serialize)
            .with_message("typed value did not convert to a JSON value")
            .with_source(err)
    })?;
    if *expected != actual {
        return Err(mismatch(Stage::Forward, expected, &actual));
    }

    let text = actual.to_string();
    let reparsed: Value = serde_json::from_str(&text).map_err(|err| {
        Error::new(ErrorKind::Parse)
            .with_message("dumped JSON text failed to reparse")
            .with_source(err)
    })?;
    if *expected != reparsed {
        return Err(mismatch(Stage::Reparse, expected, &reparsed));
    }
    Ok(())
}

/// Decode `expected` into `T`, then verify the decoded value round-trips
/// back to `expected`. Exercises the decode direction the way consuming
/// suites do: fixture JSON in, typed value out, JSON back.
pub fn verify_decoded<T>(expected: &Value) -> Result<T, Error>
where
    T: Serialize + DeserializeOwned,
{
    let decoded: T = serde_json::from_value(expected.clone()).map_err(|err| {
        Error::new(ErrorKind::Parse)
            .with_message("expected JSON did not decode into the typed value")
            .with_source(err)
    })?;
    verify_roundtrip(expected, &decoded)?;
    Ok(decoded)
}

/// Resolve a fixture, slurp it, parse it as the expected JSON, and verify
/// `value` round-trips against it.
pub fn verify_fixture_roundtrip<T: Serialize>(
    sub_path_under_root: &str,
    file_name: &str,
    value: &T,
) -> Result<(), Error> {
    let path = fixture::resolve_fixture_path(sub_path_under_root, file_name)?;
    let text = fixture::slurp(&path)?;
    let expected: Value = serde_json::from_str(&text).map_err(|err| {
        Error::new(ErrorKind::Parse)
            .with_message("fixture is not valid JSON")
            .with_path(&path)
            .with_source(err)
    })?;
    verify_roundtrip(&expected, value)
}

/// Panic with the labeled diagnostic on any verification failure. This is
/// the test-harness integration point; whether a failed assertion is fatal
/// to the run is the harness's policy, not this crate's.
#[track_caller]
pub fn assert_roundtrip<T: Serialize>(expected: &Value, value: &T) {
    if let Err(err) = verify_roundtrip(expected, value) {
        panic!("json roundtrip failed: {err}");
    }
}

fn mismatch(stage: Stage, expected: &Value, actual: &Value) -> Error {
    Error::new(ErrorKind::Mismatch)
        .with_stage(stage)
        .with_message(format!("expected {expected}, got {actual}"))
}
