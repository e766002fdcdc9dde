//! The adapter driver: parse, coerce, call, shape, write, in that order.
//! The first error short-circuits every remaining stage and takes the
//! envelope path; there are no retries and no backward transitions.

use std::io::{Read, Write};

use extdata_core::io;
use extdata_types::{Query, Result};
use serde_json::Value;

/// Run one adapter invocation end to end and return the process exit code.
///
/// The handler owns coercion, the provider call, and shaping; it is only
/// reached when the input parsed, so a malformed query can never trigger a
/// provider call. Exactly one JSON object is written either way.
pub fn run_adapter<R, W, F>(reader: &mut R, writer: &mut W, handler: F) -> i32
where
    R: Read,
    W: Write,
    F: FnOnce(&Query) -> Result<Value>,
{
    let outcome = io::read_query(reader).and_then(|query| handler(&query));
    let written = match &outcome {
        Ok(payload) => io::write_payload(writer, payload),
        Err(error) => io::write_error(writer, error),
    };
    if written.is_err() || outcome.is_err() { 1 } else { 0 }
}
