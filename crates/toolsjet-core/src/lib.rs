//! ToolsJet Core - Shared functionality for all ToolsJet tools
//!
//! A collection of small, single-purpose utilities behind one front door.

pub mod config;
pub mod format;
pub mod logging;
pub mod paths;

pub use config::Config;
pub use paths::Paths;
