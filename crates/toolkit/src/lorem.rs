//! Lorem ipsum placeholder text

use rand::seq::SliceRandom;
use rand::Rng;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum", "at", "vero", "eos", "accusamus", "accusantium",
    "doloremque", "laudantium", "totam", "rem", "aperiam", "eaque", "ipsa", "quae", "ab", "illo",
    "inventore", "veritatis", "et", "quasi", "architecto", "beatae", "vitae", "dicta", "sunt",
    "explicabo", "nemo", "ipsam", "voluptatem", "quia", "voluptas", "aspernatur", "aut", "odit",
    "fugit", "sed", "quia", "consequuntur", "magni", "dolores", "ratione", "sequi", "nesciunt",
    "neque", "porro", "quisquam", "dolorem", "adipisci", "numquam", "eius", "modi", "tempora",
    "incidunt", "magnam", "quaerat",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoremUnit {
    Words,
    Sentences,
    Paragraphs,
}

impl LoremUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoremUnit::Words => "words",
            LoremUnit::Sentences => "sentences",
            LoremUnit::Paragraphs => "paragraphs",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "words" | "word" | "w" => Some(LoremUnit::Words),
            "sentences" | "sentence" | "s" => Some(LoremUnit::Sentences),
            "paragraphs" | "paragraph" | "p" => Some(LoremUnit::Paragraphs),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoremOptions {
    pub unit: LoremUnit,
    pub count: usize,
    /// Open the text with "Lorem"
    pub start_with_lorem: bool,
}

impl Default for LoremOptions {
    fn default() -> Self {
        Self {
            unit: LoremUnit::Paragraphs,
            count: 3,
            start_with_lorem: true,
        }
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, options: &LoremOptions) -> String {
    let mut lead = options.start_with_lorem;

    match options.unit {
        LoremUnit::Words => words(rng, options.count, lead),
        LoremUnit::Sentences => (0..options.count)
            .map(|_| sentence(rng, std::mem::take(&mut lead)))
            .collect::<Vec<_>>()
            .join(" "),
        LoremUnit::Paragraphs => (0..options.count)
            .map(|_| {
                let sentences = rng.gen_range(3..=6);
                (0..sentences)
                    .map(|_| sentence(rng, std::mem::take(&mut lead)))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn words<R: Rng + ?Sized>(rng: &mut R, count: usize, lead: bool) -> String {
    let mut out: Vec<&str> = Vec::with_capacity(count);
    if lead && count > 0 {
        out.push("Lorem");
    }
    while out.len() < count {
        out.push(WORDS.choose(rng).copied().unwrap_or("lorem"));
    }
    out.join(" ")
}

/// 8 to 17 words, capitalized, ending with a period
fn sentence<R: Rng + ?Sized>(rng: &mut R, lead: bool) -> String {
    let count = rng.gen_range(8..=17);
    let text = words(rng, count, lead);

    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
