//! JSON formatter, minifier and validator

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::ToolError;

fn parse(input: &str) -> Result<Value, ToolError> {
    serde_json::from_str(input).map_err(|_| ToolError::InvalidJson)
}

/// Pretty-print with `indent` spaces. Zero indent minifies; blank input gives
/// empty output.
pub fn format(input: &str, indent: usize) -> Result<String, ToolError> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    if indent == 0 {
        return minify(input);
    }

    let value = parse(input)?;
    let spaces = " ".repeat(indent);
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(spaces.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|_| ToolError::InvalidJson)?;

    String::from_utf8(out).map_err(|_| ToolError::InvalidJson)
}

pub fn minify(input: &str) -> Result<String, ToolError> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let value = parse(input)?;
    serde_json::to_string(&value).map_err(|_| ToolError::InvalidJson)
}

/// Check that the input is JSON, reporting where it is not
pub fn validate(input: &str) -> Result<(), ToolError> {
    if input.trim().is_empty() {
        return Err(ToolError::EmptyJson);
    }
    serde_json::from_str::<Value>(input)
        .map(|_| ())
        .map_err(|e| ToolError::JsonSyntax(e.to_string()))
}
