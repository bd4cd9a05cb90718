//! Errors reported by the leaf tools

use thiserror::Error;

/// A tool failure. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("Invalid input for Base64 decoding")]
    InvalidBase64,

    #[error("Error generating hash")]
    UnknownHashAlgorithm(String),

    #[error("Minimum value cannot be greater than maximum value")]
    InvertedRange,

    #[error("Cannot generate more unique numbers than available in the range")]
    RangeTooSmall,

    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Invalid JSON: {0}")]
    JsonSyntax(String),

    #[error("Please enter JSON to validate")]
    EmptyJson,

    #[error("Failed to convert CSV to JSON: {0}")]
    CsvToJson(String),

    #[error("Failed to convert JSON to CSV: {0}")]
    JsonToCsv(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("Unknown unit category: {0}")]
    UnknownCategory(String),

    #[error("Unknown {category} unit: {unit}")]
    UnknownUnit { category: String, unit: String },

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid timestamp")]
    InvalidTimestamp,

    #[error("Invalid date")]
    InvalidDate,

    #[error("{0}")]
    InvalidRegex(String),

    #[error("Invalid regular expression flag '{0}'")]
    InvalidFlag(char),

    #[error("The sticky flag 'y' is not supported")]
    StickyFlag,

    #[error("Birth date cannot be in the future")]
    FutureBirthDate,

    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),
}
