//! Password generator

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to confuse with each other
pub const SIMILAR: &str = "il1Lo0O";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            exclude_similar: false,
        }
    }
}

impl PasswordOptions {
    /// Characters a password may be drawn from
    pub fn charset(&self) -> Vec<char> {
        let groups = [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.numbers, DIGITS),
            (self.symbols, SYMBOLS),
        ];

        groups
            .iter()
            .filter(|(enabled, _)| *enabled)
            .flat_map(|(_, chars)| chars.chars())
            .filter(|c| !(self.exclude_similar && SIMILAR.contains(*c)))
            .collect()
    }
}

/// Generate a password. An empty character pool gives an empty password.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, options: &PasswordOptions) -> String {
    let charset = options.charset();
    (0..options.length)
        .filter_map(|_| charset.choose(rng).copied())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuickRating {
    Weak,
    Medium,
    Strong,
}

impl QuickRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuickRating::Weak => "Weak",
            QuickRating::Medium => "Medium",
            QuickRating::Strong => "Strong",
        }
    }
}

/// One point each for length >= 8, length >= 12, lower, upper, digit, symbol
pub fn quick_rating(password: &str) -> QuickRating {
    let length = password.chars().count();
    let checks = [
        length >= 8,
        length >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];

    match checks.iter().filter(|&&passed| passed).count() {
        0..=2 => QuickRating::Weak,
        3..=4 => QuickRating::Medium,
        _ => QuickRating::Strong,
    }
}
