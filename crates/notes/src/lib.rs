//! Notes - titled plain-text notes kept in one JSON file
//!
//! The whole list is loaded when the store opens and rewritten after every
//! change. Newest notes come first.

pub mod note;
pub mod store;

pub use note::Note;
pub use store::{NoteError, NoteStore};
