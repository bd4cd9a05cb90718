//! Regex tester
//!
//! Takes a pattern and JavaScript-style flags. `g` finds every match instead
//! of the first, `i`, `m` and `s` map onto the matching regex options, and
//! `u` is accepted as-is because matching is always Unicode-aware. The sticky
//! flag `y` has no equivalent and is rejected.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    pub global: bool,
    pub case_insensitive: bool,
    pub multiline: bool,
    pub dot_all: bool,
    pub unicode: bool,
}

impl RegexFlags {
    pub fn parse(flags: &str) -> Result<Self, ToolError> {
        let mut parsed = Self::default();
        for flag in flags.chars() {
            let slot = match flag {
                'g' => &mut parsed.global,
                'i' => &mut parsed.case_insensitive,
                'm' => &mut parsed.multiline,
                's' => &mut parsed.dot_all,
                'u' => &mut parsed.unicode,
                'y' => return Err(ToolError::StickyFlag),
                other => return Err(ToolError::InvalidFlag(other)),
            };
            if *slot {
                return Err(ToolError::InvalidFlag(flag));
            }
            *slot = true;
        }
        Ok(parsed)
    }

    fn build(&self, pattern: &str) -> Result<Regex, ToolError> {
        RegexBuilder::new(pattern)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multiline)
            .dot_matches_new_line(self.dot_all)
            .build()
            .map_err(|e| ToolError::InvalidRegex(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegexMatch {
    pub text: String,
    /// Byte offsets into the test string
    pub start: usize,
    pub end: usize,
    /// Capture groups 1.., `None` where a group did not take part
    pub groups: Vec<Option<String>>,
}

/// All matches (with `g`) or the first match of `pattern` in `haystack`.
/// An empty pattern matches nothing.
pub fn find_matches(pattern: &str, flags: &str, haystack: &str) -> Result<Vec<RegexMatch>, ToolError> {
    let flags = RegexFlags::parse(flags)?;
    if pattern.is_empty() {
        return Ok(Vec::new());
    }
    let regex = flags.build(pattern)?;

    let limit = if flags.global { usize::MAX } else { 1 };
    let matches = regex
        .captures_iter(haystack)
        .take(limit)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(RegexMatch {
                text: whole.as_str().to_string(),
                start: whole.start(),
                end: whole.end(),
                groups: caps
                    .iter()
                    .skip(1)
                    .map(|g| g.map(|m| m.as_str().to_string()))
                    .collect(),
            })
        })
        .collect();

    Ok(matches)
}

/// Wrap every match in `open` and `close`, whatever the `g` flag says
pub fn highlight(
    pattern: &str,
    flags: &str,
    haystack: &str,
    open: &str,
    close: &str,
) -> Result<String, ToolError> {
    let flags = RegexFlags::parse(flags)?;
    if pattern.is_empty() {
        return Ok(haystack.to_string());
    }
    let regex = flags.build(pattern)?;

    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for m in regex.find_iter(haystack) {
        out.push_str(&haystack[last..m.start()]);
        out.push_str(open);
        out.push_str(m.as_str());
        out.push_str(close);
        last = m.end();
    }
    out.push_str(&haystack[last..]);
    Ok(out)
}
