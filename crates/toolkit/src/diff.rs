//! Set-based text comparison
//!
//! Each line (or word) of A is either unchanged or removed depending on
//! whether it occurs anywhere in B, and each one of B missing from A is added.
//! Order within each group follows the input. This is not a minimal edit
//! script.

use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    #[default]
    Line,
    Word,
}

impl DiffMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffMode::Line => "line",
            DiffMode::Word => "word",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "line" | "lines" => Some(DiffMode::Line),
            "word" | "words" => Some(DiffMode::Word),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub unchanged: Vec<String>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.unchanged.is_empty()
    }

    /// Whether A and B contain the same lines or words
    pub fn is_identical(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Unified-style text: removed, then added, then unchanged
    pub fn render(&self) -> String {
        let mut out = vec!["--- Text A".to_string(), "+++ Text B".to_string()];
        out.extend(self.removed.iter().map(|l| format!("- {}", l)));
        out.extend(self.added.iter().map(|l| format!("+ {}", l)));
        out.extend(self.unchanged.iter().map(|l| format!("  {}", l)));
        out.join("\n")
    }
}

pub fn diff(a: &str, b: &str, mode: DiffMode) -> DiffResult {
    if a.trim().is_empty() || b.trim().is_empty() {
        return DiffResult::default();
    }

    let (left, right): (Vec<&str>, Vec<&str>) = match mode {
        DiffMode::Line => (a.split('\n').collect(), b.split('\n').collect()),
        DiffMode::Word => (a.split_whitespace().collect(), b.split_whitespace().collect()),
    };

    let in_left: HashSet<&str> = left.iter().copied().collect();
    let in_right: HashSet<&str> = right.iter().copied().collect();

    let mut result = DiffResult::default();
    for item in &left {
        if in_right.contains(item) {
            result.unchanged.push(item.to_string());
        } else {
            result.removed.push(item.to_string());
        }
    }
    result.added = right
        .iter()
        .filter(|item| !in_left.contains(*item))
        .map(|item| item.to_string())
        .collect();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_side_gives_nothing() {
        assert!(diff("", "a", DiffMode::Line).is_empty());
        assert!(diff("a", "  \n", DiffMode::Word).is_empty());
    }

    #[test]
    fn test_line_diff() {
        let result = diff("one\ntwo\nthree", "one\nthree\nfour", DiffMode::Line);
        assert_eq!(result.unchanged, vec!["one", "three"]);
        assert_eq!(result.removed, vec!["two"]);
        assert_eq!(result.added, vec!["four"]);
        assert!(!result.is_identical());
    }

    #[test]
    fn test_word_diff() {
        let result = diff("the quick brown fox", "the slow brown dog", DiffMode::Word);
        assert_eq!(result.unchanged, vec!["the", "brown"]);
        assert_eq!(result.removed, vec!["quick", "fox"]);
        assert_eq!(result.added, vec!["slow", "dog"]);
    }

    #[test]
    fn test_identical() {
        let result = diff("a\nb", "b\na", DiffMode::Line);
        assert!(result.is_identical());
        assert_eq!(result.unchanged.len(), 2);
    }

    #[test]
    fn test_render() {
        let result = diff("keep\nold", "keep\nnew", DiffMode::Line);
        assert_eq!(result.render(), "--- Text A\n+++ Text B\n- old\n+ new\n  keep");
    }
}
