//! The tool registry
//!
//! One static list of every tool the shell knows about, in display order.
//! Tools that need platform media support or a third-party service are listed
//! but not available in this build.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Text,
    Security,
    Developer,
    Calculator,
    Generator,
    Image,
    Utility,
    Design,
    Converter,
    Downloader,
    Productivity,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Text => "Text",
            Category::Security => "Security",
            Category::Developer => "Developer",
            Category::Calculator => "Calculator",
            Category::Generator => "Generator",
            Category::Image => "Image",
            Category::Utility => "Utility",
            Category::Design => "Design",
            Category::Converter => "Converter",
            Category::Downloader => "Downloader",
            Category::Productivity => "Productivity",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub available: bool,
}

impl Tool {
    const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: Category,
        available: bool,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            available,
        }
    }

    /// Whether this tool matches a lower-cased search query
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty()
            || self.name.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.category.as_str().to_lowercase().contains(query)
    }
}

/// All ToolsJet tools, in display order
pub const TOOLS: &[Tool] = &[
    Tool::new("word-counter", "Word Counter", "Count words, characters, and paragraphs in your text", Category::Text, true),
    Tool::new("password-generator", "Password Generator", "Generate secure passwords with custom options", Category::Security, true),
    Tool::new("text-case-converter", "Text Case Converter", "Convert text to different cases (upper, lower, title)", Category::Text, true),
    Tool::new("base64-converter", "Base64 Encoder/Decoder", "Encode and decode Base64 strings", Category::Developer, true),
    Tool::new("age-calculator", "Age Calculator", "Calculate age in years, months, days, and more", Category::Calculator, true),
    Tool::new("random-number-picker", "Random Number Picker", "Generate random numbers within specified ranges", Category::Generator, true),
    Tool::new("qr-code-generator", "QR Code Generator", "Generate QR codes for text, URLs, and more", Category::Generator, false),
    Tool::new("image-compressor", "Image Compressor", "Compress images while maintaining quality", Category::Image, false),
    Tool::new("url-shortener", "URL Shortener", "Create short, shareable links from long URLs", Category::Utility, false),
    Tool::new("color-picker", "Color Picker", "Pick colors and get values in different formats", Category::Design, true),
    Tool::new("unit-converter", "Unit Converter", "Convert between different units of measurement", Category::Calculator, true),
    Tool::new("json-formatter", "JSON Formatter", "Format, minify, and validate JSON data", Category::Developer, true),
    Tool::new("hash-generator", "Hash Generator", "Generate cryptographic hashes (SHA-1, SHA-256, SHA-512)", Category::Security, true),
    Tool::new("lorem-generator", "Lorem Ipsum Generator", "Generate placeholder text for designs and layouts", Category::Text, true),
    Tool::new("markdown-preview", "Markdown Preview", "Write and preview Markdown in real-time", Category::Developer, false),
    Tool::new("timestamp-converter", "Timestamp Converter", "Convert between timestamps and human-readable dates", Category::Utility, true),
    Tool::new("pdf-to-word", "PDF to Word Converter", "Convert PDF files to Word documents", Category::Converter, false),
    Tool::new("youtube-thumbnail", "YouTube Thumbnail Downloader", "Download YouTube video thumbnails", Category::Downloader, false),
    Tool::new("currency-converter", "Currency Converter", "Convert between world currencies", Category::Calculator, true),
    Tool::new("regex-tester", "Regex Tester", "Test and debug regular expressions", Category::Developer, true),
    Tool::new("code-beautifier", "Code Beautifier", "Format and beautify code in various languages", Category::Developer, false),
    Tool::new("csv-to-json", "CSV to JSON Converter", "Convert CSV data to JSON format", Category::Converter, true),
    Tool::new("password-strength-checker", "Password Strength Checker", "Check how strong your password is", Category::Security, true),
    Tool::new("diff-checker", "Diff Checker", "Compare two texts and find the differences", Category::Text, true),
    Tool::new("text-translator", "Text Translator", "Translate text between different languages", Category::Text, false),
    Tool::new("pomodoro-timer", "Pomodoro Timer", "Boost productivity with timed work sessions", Category::Productivity, true),
    Tool::new("note-taker", "Note Taker", "Create, edit, and organize your notes", Category::Productivity, true),
    Tool::new("html-entity-encoder", "HTML Entity Encoder", "Convert text to HTML entities and vice versa", Category::Developer, false),
    Tool::new("image-to-base64", "Image to Base64", "Convert images to Base64 encoded strings", Category::Converter, false),
    Tool::new("uuid-generator", "UUID Generator", "Generate random UUIDs/GUIDs", Category::Generator, true),
    Tool::new("cron-expression-generator", "Cron Expression Generator", "Create and validate cron expressions", Category::Developer, false),
    Tool::new("css-minifier", "CSS Minifier", "Minify CSS code to reduce file size", Category::Developer, false),
    Tool::new("js-minifier", "JavaScript Minifier", "Minify JavaScript code to reduce file size", Category::Developer, false),
    Tool::new("sql-formatter", "SQL Formatter", "Format SQL queries for better readability", Category::Developer, false),
    Tool::new("xml-formatter", "XML Formatter", "Format XML documents for better readability", Category::Developer, false),
    Tool::new("yaml-validator", "YAML Validator", "Validate and format YAML documents", Category::Developer, false),
    Tool::new("jwt-decoder", "JWT Decoder", "Decode and verify JSON Web Tokens", Category::Developer, false),
    Tool::new("url-parser", "URL Parser", "Parse and analyze URL components", Category::Developer, false),
    Tool::new("text-diff", "Text Diff Visualizer", "Visualize differences between text snippets", Category::Developer, false),
    Tool::new("error-lookup", "HTTP Error Lookup", "Look up HTTP status codes and error messages", Category::Developer, false),
];

pub fn find(id: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|t| t.id == id)
}

/// Tools matching a search query, in registry order
pub fn search(query: &str) -> Vec<&'static Tool> {
    let query = query.trim().to_lowercase();
    TOOLS.iter().filter(|t| t.matches(&query)).collect()
}

/// Categories of `tools` in first-appearance order
pub fn categories(tools: &[&Tool]) -> Vec<Category> {
    let mut seen = Vec::new();
    for tool in tools {
        if !seen.contains(&tool.category) {
            seen.push(tool.category);
        }
    }
    seen
}
