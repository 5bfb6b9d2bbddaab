//! Byte-stable JSON writer
//!
//! Output stability is a contract, not cosmetics: downstream tooling
//! diffs the emitted documents. Object keys are emitted alphabetically
//! (serde_json's default map is ordered), indentation is four spaces,
//! and every document ends with a trailing newline.

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// Serialize `value` to `writer` with sorted keys, 4-space indentation
/// and a trailing newline.
pub fn dump_json<T, W>(value: &T, writer: &mut W) -> Result<()>
where
    T: Serialize,
    W: Write,
{
    // Round-trip through Value so object keys come out sorted
    // regardless of struct field order.
    let value = serde_json::to_value(value)?;
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
    value.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Serialize `value` to an owned string using the same formatting
/// policy as [`dump_json`].
pub fn dump_json_string<T: Serialize>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    dump_json(value, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
