//! Text case conversion

use std::fmt;

/// Target case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
    Alternating,
    Inverse,
}

impl Case {
    pub const ALL: [Case; 10] = [
        Case::Upper,
        Case::Lower,
        Case::Title,
        Case::Sentence,
        Case::Camel,
        Case::Pascal,
        Case::Snake,
        Case::Kebab,
        Case::Alternating,
        Case::Inverse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Upper => "upper",
            Case::Lower => "lower",
            Case::Title => "title",
            Case::Sentence => "sentence",
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
            Case::Kebab => "kebab",
            Case::Alternating => "alternating",
            Case::Inverse => "inverse",
        }
    }

    /// Display name, written in the case itself
    pub fn label(&self) -> &'static str {
        match self {
            Case::Upper => "UPPERCASE",
            Case::Lower => "lowercase",
            Case::Title => "Title Case",
            Case::Sentence => "Sentence case",
            Case::Camel => "camelCase",
            Case::Pascal => "PascalCase",
            Case::Snake => "snake_case",
            Case::Kebab => "kebab-case",
            Case::Alternating => "aLtErNaTiNg CaSe",
            Case::Inverse => "iNVERSE cASE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "upper" | "uppercase" => Some(Case::Upper),
            "lower" | "lowercase" => Some(Case::Lower),
            "title" => Some(Case::Title),
            "sentence" => Some(Case::Sentence),
            "camel" | "camelcase" => Some(Case::Camel),
            "pascal" | "pascalcase" => Some(Case::Pascal),
            "snake" | "snake_case" => Some(Case::Snake),
            "kebab" | "kebab-case" => Some(Case::Kebab),
            "alternating" | "alt" => Some(Case::Alternating),
            "inverse" | "invert" => Some(Case::Inverse),
            _ => None,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn convert(text: &str, case: Case) -> String {
    match case {
        Case::Upper => text.to_uppercase(),
        Case::Lower => text.to_lowercase(),
        Case::Title => title_case(text),
        Case::Sentence => {
            let mut chars = text.chars();
            match chars.next() {
                Some(first) => {
                    let rest = chars.as_str().to_lowercase();
                    first.to_uppercase().chain(rest.chars()).collect()
                }
                None => String::new(),
            }
        }
        Case::Camel => join_capitalized(text, false),
        Case::Pascal => join_capitalized(text, true),
        Case::Snake => split_words(text).join("_"),
        Case::Kebab => split_words(text).join("-"),
        Case::Alternating => text
            .chars()
            .enumerate()
            .flat_map(|(i, c)| -> Box<dyn Iterator<Item = char>> {
                if i % 2 == 0 {
                    Box::new(c.to_lowercase())
                } else {
                    Box::new(c.to_uppercase())
                }
            })
            .collect(),
        Case::Inverse => text
            .chars()
            .flat_map(|c| -> Box<dyn Iterator<Item = char>> {
                if c.is_lowercase() {
                    Box::new(c.to_uppercase())
                } else {
                    Box::new(c.to_lowercase())
                }
            })
            .collect(),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Capitalize each whitespace-separated token from its first word character on
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_token_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_token_start = true;
            out.push(c);
        } else if at_token_start && is_word_char(c) {
            at_token_start = false;
            out.extend(c.to_uppercase());
        } else if at_token_start {
            out.push(c);
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Upper-case every word start and capital letter, then drop whitespace.
/// The very first character is lower-cased unless `capitalize_first`.
fn join_capitalized(text: &str, capitalize_first: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for (i, c) in text.chars().enumerate() {
        let word_start = is_word_char(c) && !prev.is_some_and(is_word_char);
        if word_start || c.is_uppercase() {
            if i == 0 && !capitalize_first {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else if !c.is_whitespace() {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

/// Lower-cased words, split on non-word characters and inner capitals
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if !is_word_char(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else {
            if c.is_uppercase() && prev.is_some_and(is_word_char) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.extend(c.to_lowercase());
        }
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_lower() {
        assert_eq!(convert("Hello World", Case::Upper), "HELLO WORLD");
        assert_eq!(convert("Hello World", Case::Lower), "hello world");
    }

    #[test]
    fn test_title() {
        assert_eq!(convert("hELLO wORLD", Case::Title), "Hello World");
        assert_eq!(convert("(quoted) text", Case::Title), "(Quoted) Text");
    }

    #[test]
    fn test_sentence() {
        assert_eq!(convert("hELLO World. BYE", Case::Sentence), "Hello world. bye");
        assert_eq!(convert("", Case::Sentence), "");
    }

    #[test]
    fn test_camel_and_pascal() {
        assert_eq!(convert("hello world", Case::Camel), "helloWorld");
        assert_eq!(convert("Hello big world", Case::Camel), "helloBigWorld");
        assert_eq!(convert("hello world", Case::Pascal), "HelloWorld");
    }

    #[test]
    fn test_snake_and_kebab() {
        assert_eq!(convert("Hello World", Case::Snake), "hello_world");
        assert_eq!(convert("helloWorld again", Case::Snake), "hello_world_again");
        assert_eq!(convert("  Hello,  World! ", Case::Kebab), "hello-world");
    }

    #[test]
    fn test_alternating_and_inverse() {
        assert_eq!(convert("abcdef", Case::Alternating), "aBcDeF");
        assert_eq!(convert("Hello World 1", Case::Inverse), "hELLO wORLD 1");
    }

    #[test]
    fn test_from_str() {
        for case in Case::ALL {
            assert_eq!(Case::from_str(case.as_str()), Some(case));
        }
        assert_eq!(Case::from_str("UPPERCASE"), Some(Case::Upper));
        assert_eq!(Case::from_str("shouting"), None);
    }
}
