//! Shell state: which tool is open, what is being searched, which section shows

use thiserror::Error;

use crate::registry::{self, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Tools,
    About,
    Contact,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Tools => "tools",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "home" => Some(Section::Home),
            "tools" => Some(Section::Tools),
            "about" => Some(Section::About),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

#[derive(Debug, Default)]
pub struct Shell {
    selected: Option<&'static Tool>,
    query: String,
    section: Section,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&'static Tool> {
        self.selected
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Open a tool by id. Clears the search query.
    pub fn select(&mut self, id: &str) -> Result<&'static Tool, ShellError> {
        let tool = registry::find(id).ok_or_else(|| ShellError::UnknownTool(id.to_string()))?;
        tracing::debug!(tool = tool.id, "Tool selected");
        self.selected = Some(tool);
        self.query.clear();
        Ok(tool)
    }

    /// Close the open tool and return to the home section
    pub fn go_home(&mut self) {
        self.selected = None;
        self.section = Section::Home;
    }

    pub fn navigate(&mut self, section: Section) {
        self.selected = None;
        self.section = section;
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Tools matching the current query
    pub fn visible_tools(&self) -> Vec<&'static Tool> {
        registry::search(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_clears_query() {
        let mut shell = Shell::new();
        shell.set_query("note");
        assert_eq!(shell.visible_tools().len(), 1);

        let tool = shell.select("note-taker").unwrap();
        assert_eq!(tool.name, "Note Taker");
        assert_eq!(shell.query(), "");
        assert_eq!(shell.selected().map(|t| t.id), Some("note-taker"));
    }

    #[test]
    fn test_select_unknown_leaves_state() {
        let mut shell = Shell::new();
        shell.select("word-counter").unwrap();
        shell.set_query("hash");

        let err = shell.select("nope").unwrap_err();
        assert_eq!(err, ShellError::UnknownTool("nope".to_string()));
        assert_eq!(err.to_string(), "Unknown tool: nope");
        assert_eq!(shell.selected().map(|t| t.id), Some("word-counter"));
        assert_eq!(shell.query(), "hash");
    }

    #[test]
    fn test_go_home() {
        let mut shell = Shell::new();
        shell.navigate(Section::About);
        shell.select("uuid-generator").unwrap();

        shell.go_home();
        assert!(shell.selected().is_none());
        assert_eq!(shell.section(), Section::Home);
    }

    #[test]
    fn test_navigate_clears_selection() {
        let mut shell = Shell::new();
        shell.select("hash-generator").unwrap();

        shell.navigate(Section::Contact);
        assert!(shell.selected().is_none());
        assert_eq!(shell.section(), Section::Contact);
    }

    #[test]
    fn test_section_names() {
        for section in [Section::Home, Section::Tools, Section::About, Section::Contact] {
            assert_eq!(Section::from_str(section.as_str()), Some(section));
        }
        assert_eq!(Section::from_str("blog"), None);
    }
}
