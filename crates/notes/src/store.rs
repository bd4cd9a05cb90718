//! Note storage
//!
//! All notes live in one JSON array. The file is read once on open and
//! rewritten in full on each create, update or delete. The in-memory list
//! only changes once that write has succeeded.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::note::Note;

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("'{0}' matches more than one note, use more of the id")]
    Ambiguous(String),
}

/// File name used when exporting on the given day
pub fn export_file_name(date: NaiveDate) -> String {
    format!("notes_{}.json", date.format("%Y-%m-%d"))
}

/// Whole-list note store
pub struct NoteStore {
    path: PathBuf,
    notes: Vec<Note>,
}

impl NoteStore {
    /// Open the store at `path`.
    ///
    /// A missing or empty file gives an empty list. A file that can't be read
    /// or parsed is logged and also gives an empty list; it is replaced on
    /// the next save.
    pub fn open(path: &Path) -> Self {
        let notes = match Self::read(path) {
            Ok(notes) => notes,
            Err(e) => {
                tracing::warn!("Ignoring saved notes: {:#}", e);
                Vec::new()
            }
        };
        tracing::debug!("Loaded {} notes from {}", notes.len(), path.display());

        Self {
            path: path.to_path_buf(),
            notes,
        }
    }

    fn read(path: &Path) -> Result<Vec<Note>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read notes: {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse notes: {}", path.display()))
    }

    /// Write `notes` to disk, then make them the current list
    fn commit(&mut self, notes: Vec<Note>) -> Result<()> {
        Self::write(&self.path, &notes)?;
        self.notes = notes;
        Ok(())
    }

    fn write(path: &Path, notes: &[Note]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create notes directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string(notes).context("Failed to serialize notes")?;
        fs::write(path, content).with_context(|| format!("Failed to write notes: {}", path.display()))?;

        tracing::debug!("Saved {} notes", notes.len());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All notes, newest first
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The note shown by default (the first one)
    pub fn first(&self) -> Option<&Note> {
        self.notes.first()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Look up a note by full id or by an unambiguous id prefix
    pub fn find(&self, key: &str) -> Result<&Note, NoteError> {
        if let Some(note) = self.get(key) {
            return Ok(note);
        }

        let mut candidates = self.notes.iter().filter(|n| {
            n.id.starts_with(key) || n.id.strip_prefix("note_").is_some_and(|rest| rest.starts_with(key))
        });
        match (candidates.next(), candidates.next()) {
            (Some(note), None) if !key.is_empty() => Ok(note),
            (Some(_), Some(_)) => Err(NoteError::Ambiguous(key.to_string())),
            _ => Err(NoteError::NotFound(key.to_string())),
        }
    }

    /// Add a note at the front of the list
    pub fn create(&mut self, title: &str, content: &str) -> Result<Note> {
        let note = Note::new(title, content);
        let mut notes = Vec::with_capacity(self.notes.len() + 1);
        notes.push(note.clone());
        notes.extend(self.notes.iter().cloned());
        self.commit(notes)?;

        tracing::info!("Created note {}", note.id);
        Ok(note)
    }

    /// Replace a note's title and content
    pub fn update(&mut self, id: &str, title: &str, content: &str) -> Result<Note> {
        let mut notes = self.notes.clone();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NoteError::NotFound(id.to_string()))?;
        note.edit(title, content);
        let note = note.clone();
        self.commit(notes)?;

        tracing::info!("Updated note {}", note.id);
        Ok(note)
    }

    /// Remove a note and return it
    pub fn delete(&mut self, id: &str) -> Result<Note> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| NoteError::NotFound(id.to_string()))?;
        let mut notes = self.notes.clone();
        let note = notes.remove(index);
        self.commit(notes)?;

        tracing::info!("Deleted note {}", note.id);
        Ok(note)
    }

    /// Notes whose title or content contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let query = query.trim().to_lowercase();
        self.notes.iter().filter(|n| n.matches(&query)).collect()
    }

    /// All notes as a pretty-printed JSON array
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.notes).context("Failed to serialize notes")
    }

    /// Write an export file into `dir` and return its path
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

        let path = dir.join(export_file_name(Utc::now().date_naive()));
        fs::write(&path, self.export_json()?)
            .with_context(|| format!("Failed to write export: {}", path.display()))?;

        Ok(path)
    }
}
