//! Toolkit - the leaf tools behind ToolsJet
//!
//! Every tool is a plain function from input to output. Randomized tools take
//! the RNG as a parameter, and clock-dependent ones take "now", so callers
//! and tests decide where randomness and time come from. Failures are
//! reported as [`ToolError`], whose message is what the user sees.

pub mod age;
pub mod case;
pub mod color;
pub mod csv_json;
pub mod currency;
pub mod debounce;
pub mod diff;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod ids;
pub mod json_format;
pub mod lorem;
pub mod password;
pub mod random;
pub mod regex_tester;
pub mod strength;
pub mod timestamp;
pub mod unit;
pub mod word_count;

pub use debounce::Debouncer;
pub use error::ToolError;
