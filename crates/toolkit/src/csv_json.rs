//! CSV to JSON and back
//!
//! The CSV reader is deliberately simple: rows are lines, cells are split on
//! the delimiter, and one pair of surrounding quotes is stripped. Quoted
//! delimiters are not understood. The writer quotes cells per RFC 4180.

use serde_json::{Map, Value};

use crate::error::ToolError;

#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    pub delimiter: char,
    /// Use the first row as field names. Otherwise fields are Column1, Column2, ...
    pub has_header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
        }
    }
}

/// Parse a delimiter name or character (`,`, `;`, `tab`, `\t`, `|`)
pub fn parse_delimiter(raw: &str) -> Option<char> {
    match raw {
        "tab" | "\\t" | "\t" => Some('\t'),
        "comma" => Some(','),
        "semicolon" => Some(';'),
        "pipe" => Some('|'),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        }
    }
}

fn clean_cell(cell: &str) -> String {
    let cell = cell.trim();
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    let cell = cell.strip_suffix('"').unwrap_or(cell);
    cell.to_string()
}

/// CSV text to a pretty JSON array of objects, fields in header order
pub fn csv_to_json(input: &str, options: &CsvOptions) -> Result<String, ToolError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ToolError::CsvToJson("No data found in CSV".to_string()));
    }

    let rows: Vec<Vec<String>> = input
        .lines()
        .map(|line| line.split(options.delimiter).map(clean_cell).collect())
        .collect();

    let (headers, body) = if options.has_header {
        (rows[0].clone(), &rows[1..])
    } else {
        let width = rows[0].len();
        ((1..=width).map(|i| format!("Column{}", i)).collect(), &rows[..])
    };

    let records: Vec<Value> = body
        .iter()
        .map(|row| {
            let mut object = Map::new();
            for (header, cell) in headers.iter().zip(row) {
                object.insert(header.clone(), Value::String(cell.clone()));
            }
            Value::Object(object)
        })
        .collect();

    serde_json::to_string_pretty(&records).map_err(|e| ToolError::CsvToJson(e.to_string()))
}

/// JSON array of objects (or a single object) to CSV.
/// The header is the union of keys in first-seen order.
pub fn json_to_csv(input: &str, delimiter: char) -> Result<String, ToolError> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| ToolError::JsonToCsv(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => {
            return Err(ToolError::JsonToCsv(
                "expected an array of objects".to_string(),
            ))
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Object(map) => records.push(map),
            _ => {
                return Err(ToolError::JsonToCsv(
                    "every array element must be an object".to_string(),
                ))
            }
        }
    }

    let mut headers: Vec<String> = Vec::new();
    for record in &records {
        for key in record.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let separator = delimiter.to_string();
    let mut lines = vec![headers
        .iter()
        .map(|h| quote(h, delimiter))
        .collect::<Vec<_>>()
        .join(&separator)];
    for record in &records {
        let line = headers
            .iter()
            .map(|h| quote(&cell_text(record.get(h)), delimiter))
            .collect::<Vec<_>>()
            .join(&separator);
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn quote(cell: &str, delimiter: char) -> String {
    if cell.contains(delimiter) || cell.contains(['"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
