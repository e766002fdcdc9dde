//! Query input and response output. One invocation consumes exactly one
//! JSON object from the input stream and produces exactly one JSON object
//! on the output stream, newline-terminated and flushed.

use std::io::{Read, Write};

use extdata_types::{Error, Query, Result};
use serde_json::{Value, json};

/// Consume the entire input stream as UTF-8 and decode one query object.
pub fn read_query<R: Read>(reader: &mut R) -> Result<Query> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::Input(format!("Failed to read input: {}", e)))?;
    input.parse()
}

/// Serialize one success payload followed by a newline, then flush.
pub fn write_payload<W: Write>(writer: &mut W, payload: &Value) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, payload).map_err(std::io::Error::from)?;
    writeln!(writer)?;
    writer.flush()
}

/// Serialize the error envelope followed by a newline, then flush.
pub fn write_error<W: Write>(writer: &mut W, error: &Error) -> std::io::Result<()> {
    write_payload(writer, &json!({ "error": error.to_string() }))
}
