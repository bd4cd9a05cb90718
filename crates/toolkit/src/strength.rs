//! Password strength checker

use serde::Serialize;

const LABELS: [&str; 6] = ["Very Weak", "Weak", "Fair", "Good", "Strong", "Very Strong"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Strength {
    /// 0 to 5
    pub score: u8,
    pub label: &'static str,
    pub feedback: Vec<String>,
}

pub fn check(password: &str) -> Strength {
    if password.is_empty() {
        return Strength {
            score: 0,
            label: "None",
            feedback: Vec::new(),
        };
    }

    let traits = Traits::of(password);
    let score = traits.score();

    let mut feedback = traits.feedback();
    if score >= 4 {
        feedback.truncate(1);
    }

    Strength {
        score,
        label: LABELS[score as usize],
        feedback,
    }
}

struct Traits {
    length: usize,
    lower: bool,
    upper: bool,
    digit: bool,
    symbol: bool,
    only_letters: bool,
    only_digits: bool,
    triple_repeat: bool,
    says_password: bool,
    has_123: bool,
}

impl Traits {
    fn of(password: &str) -> Self {
        let chars: Vec<char> = password.chars().collect();
        Self {
            length: chars.len(),
            lower: chars.iter().any(|c| c.is_ascii_lowercase()),
            upper: chars.iter().any(|c| c.is_ascii_uppercase()),
            digit: chars.iter().any(|c| c.is_ascii_digit()),
            symbol: chars.iter().any(|c| !c.is_ascii_alphanumeric()),
            only_letters: chars.iter().all(|c| c.is_ascii_alphabetic()),
            only_digits: chars.iter().all(|c| c.is_ascii_digit()),
            triple_repeat: chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]),
            says_password: password.to_lowercase().contains("password"),
            has_123: password.contains("123"),
        }
    }

    fn score(&self) -> u8 {
        let gains = [
            self.length >= 8,
            self.length >= 12,
            self.lower,
            self.upper,
            self.digit,
            self.symbol,
        ];
        let penalties = [
            self.triple_repeat,
            self.only_letters || self.only_digits,
            self.says_password || self.has_123,
        ];

        let count = |checks: &[bool]| checks.iter().filter(|&&c| c).count() as i32;
        (count(&gains) - count(&penalties)).clamp(0, 5) as u8
    }

    fn feedback(&self) -> Vec<String> {
        let rules = [
            (self.length < 8, "Add more characters (at least 8 characters recommended)"),
            (!self.lower, "Add lowercase letters"),
            (!self.upper, "Add uppercase letters"),
            (!self.digit, "Add numbers"),
            (!self.symbol, "Add special characters (e.g., !@#$%^&*)"),
            (self.triple_repeat, "Avoid repeated characters (e.g., \"aaa\")"),
            (self.only_letters, "Avoid using only letters"),
            (self.only_digits, "Avoid using only numbers"),
            (self.says_password, "Avoid using the word \"password\""),
            (self.has_123, "Avoid common sequences like \"123\""),
        ];

        rules
            .iter()
            .filter(|(applies, _)| *applies)
            .map(|(_, message)| message.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let strength = check("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.label, "None");
        assert!(strength.feedback.is_empty());
    }

    #[test]
    fn test_weak_password() {
        let strength = check("password");
        // length 8, lower; minus only letters, minus "password"
        assert_eq!(strength.score, 0);
        assert_eq!(strength.label, "Very Weak");
        assert!(strength.feedback.contains(&"Avoid using the word \"password\"".to_string()));
        assert!(strength.feedback.contains(&"Avoid using only letters".to_string()));
    }

    #[test]
    fn test_only_digits() {
        let strength = check("1111");
        assert_eq!(strength.score, 0);
        assert!(strength.feedback.contains(&"Avoid repeated characters (e.g., \"aaa\")".to_string()));
        assert!(strength.feedback.contains(&"Avoid using only numbers".to_string()));
    }

    #[test]
    fn test_good() {
        // length 8, lower, digit
        let strength = check("abcdefg9");
        assert_eq!(strength.score, 3);
        assert_eq!(strength.label, "Good");
    }

    #[test]
    fn test_strong_limits_feedback() {
        let strength = check("Tr0ub4dor&3xyz");
        assert_eq!(strength.score, 5);
        assert_eq!(strength.label, "Very Strong");
        assert!(strength.feedback.is_empty());

        // length 12+, lower, upper, digit; no symbol
        let strength = check("Tr0ub4dorxyz3");
        assert_eq!(strength.score, 5);
        assert_eq!(strength.feedback, vec!["Add special characters (e.g., !@#$%^&*)"]);
    }
}
