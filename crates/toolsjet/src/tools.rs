//! In-process runners for the leaf tools
//!
//! Each runner takes already-read input and returns the text to print, so the
//! CLI, the live mode and the tests share one code path.

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, Utc};
use rand::Rng;
use toolkit::case::{self, Case};
use toolkit::csv_json::{self, CsvOptions};
use toolkit::currency::{self, RateSource};
use toolkit::diff::{self, DiffMode};
use toolkit::lorem::{self, LoremOptions};
use toolkit::password::{self, PasswordOptions};
use toolkit::unit::{self, UnitCategory};
use toolkit::{age, color, encoding, hash, ids, json_format, random, regex_tester, strength, timestamp, word_count};
use toolkit::ToolError;

pub fn count_words(text: &str, json: bool) -> Result<String> {
    let stats = word_count::count(text);
    if json {
        return Ok(serde_json::to_string_pretty(&stats)?);
    }

    Ok([
        format!("Characters:            {}", stats.characters),
        format!("Characters (no space): {}", stats.characters_no_spaces),
        format!("Words:                 {}", stats.words),
        format!("Sentences:             {}", stats.sentences),
        format!("Paragraphs:            {}", stats.paragraphs),
        format!("Reading time:          {} min", stats.reading_time_minutes),
    ]
    .join("\n"))
}

/// One case, or every case as a labelled list
pub fn convert_case(text: &str, target: Option<Case>) -> String {
    match target {
        Some(target) => case::convert(text, target),
        None => Case::ALL
            .iter()
            .map(|&c| format!("{:<16} {}", c.label(), case::convert(text, c)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn lorem_text<R: Rng + ?Sized>(rng: &mut R, options: &LoremOptions) -> String {
    lorem::generate(rng, options)
}

pub fn diff_texts(a: &str, b: &str, mode: DiffMode) -> String {
    let result = diff::diff(a, b, mode);
    if result.is_empty() {
        return "Nothing to compare".to_string();
    }
    if result.is_identical() {
        return "No differences".to_string();
    }
    result.render()
}

pub fn passwords<R: Rng + ?Sized>(rng: &mut R, options: &PasswordOptions, count: usize) -> String {
    (0..count)
        .map(|_| {
            let generated = password::generate(rng, options);
            let rating = password::quick_rating(&generated);
            format!("{}  ({})", generated, rating.as_str())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn check_strength(candidate: &str) -> String {
    let result = strength::check(candidate);
    let mut lines = vec![format!("Strength: {} ({}/5)", result.label, result.score)];
    lines.extend(result.feedback.iter().map(|f| format!("  - {}", f)));
    lines.join("\n")
}

pub fn hashes(text: &str, algorithm: Option<&str>) -> Result<String> {
    if let Some(algorithm) = algorithm {
        return Ok(hash::hash_named(text, algorithm)?);
    }

    Ok(hash::all_hashes(text)
        .iter()
        .map(|(alg, digest)| format!("{:<14} {}", alg.as_str(), digest))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn random_numbers<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    quantity: usize,
    allow_duplicates: bool,
) -> Result<String> {
    let numbers = random::pick(rng, min, max, quantity, allow_duplicates)?;
    Ok(numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", "))
}

pub fn uuids(count: usize, options: ids::UuidOptions) -> String {
    ids::generate(count, options).join("\n")
}

pub fn base64(text: &str, decode: bool) -> Result<String> {
    if decode {
        Ok(encoding::decode(text)?)
    } else {
        Ok(encoding::encode(text))
    }
}

pub fn convert_unit(category: &str, value: &str, from: &str, to: &str) -> Result<String> {
    let category =
        UnitCategory::from_str(category).ok_or_else(|| ToolError::UnknownCategory(category.to_string()))?;
    let value = unit::parse_value(value)?;
    let result = unit::convert(category, value, from, to)?;

    let from = category.unit(from)?;
    let to = category.unit(to)?;
    Ok(format!(
        "{} {} = {} {}",
        unit::format_value(value),
        from.name,
        unit::format_value(result),
        to.name
    ))
}

/// Every unit of a category, or every category when none is given
pub fn list_units(category: Option<&str>) -> Result<String> {
    let categories = match category {
        Some(name) => vec![UnitCategory::from_str(name).ok_or_else(|| ToolError::UnknownCategory(name.to_string()))?],
        None => UnitCategory::ALL.to_vec(),
    };

    let mut lines = Vec::new();
    for category in categories {
        lines.push(format!("{}:", category.as_str()));
        for u in category.units() {
            lines.push(format!("  {:<14} {:<18} {}", u.id, u.name, u.symbol));
        }
    }
    Ok(lines.join("\n"))
}

pub fn convert_currency(source: &dyn RateSource, amount: &str, from: &str, to: &str) -> Result<String> {
    let amount = unit::parse_value(amount)?;
    let converted = currency::convert(source, amount, from, to)?;
    let rate = currency::exchange_rate(source, from, to)?;
    let (from, to) = (from.to_uppercase(), to.to_uppercase());

    Ok(format!(
        "{:.2} {} = {:.2} {}\n1 {} = {:.4} {}",
        amount, from, converted, to, from, rate, to
    ))
}

/// Show an instant in every notation. Digits are read as a Unix timestamp,
/// anything else as a date-time; no input means now.
pub fn timestamps(input: Option<&str>, now: DateTime<Utc>) -> Result<String> {
    let date = match input.map(str::trim).filter(|s| !s.is_empty()) {
        None => now,
        Some(raw) if raw.chars().all(|c| c.is_ascii_digit()) => timestamp::parse_timestamp(raw)?,
        Some(raw) => timestamp::parse_datetime(raw)?,
    };

    let formats = timestamp::formats(&date, &now);
    Ok([
        format!("ISO 8601:     {}", formats.iso),
        format!("UTC:          {}", formats.utc),
        format!("Local:        {}", formats.local),
        format!("Unix (s):     {}", formats.timestamp),
        format!("Unix (ms):    {}", formats.timestamp_ms),
        format!("Date:         {}", formats.date),
        format!("Time:         {}", formats.time),
        format!("Relative:     {}", formats.relative),
    ]
    .join("\n"))
}

pub fn csv_to_json(input: &str, options: &CsvOptions) -> Result<String> {
    Ok(csv_json::csv_to_json(input, options)?)
}

pub fn json_to_csv(input: &str, delimiter: char) -> Result<String> {
    Ok(csv_json::json_to_csv(input, delimiter)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonAction {
    Format(usize),
    Minify,
    Validate,
}

pub fn json(input: &str, action: JsonAction) -> Result<String> {
    match action {
        JsonAction::Format(indent) => Ok(json_format::format(input, indent)?),
        JsonAction::Minify => Ok(json_format::minify(input)?),
        JsonAction::Validate => {
            json_format::validate(input)?;
            Ok("Valid JSON".to_string())
        }
    }
}

/// Matches with their offsets and groups, then the highlighted haystack
pub fn regex_report(pattern: &str, flags: &str, haystack: &str) -> Result<String> {
    let matches = regex_tester::find_matches(pattern, flags, haystack)?;
    if matches.is_empty() {
        return Ok("No matches".to_string());
    }

    let mut lines = vec![format!("{} match(es)", matches.len())];
    for (i, m) in matches.iter().enumerate() {
        lines.push(format!("{:>3}. {:?} at {}..{}", i + 1, m.text, m.start, m.end));
        for (g, group) in m.groups.iter().enumerate() {
            let shown = group.as_deref().unwrap_or("(no match)");
            lines.push(format!("       ${} = {:?}", g + 1, shown));
        }
    }
    lines.push(String::new());
    lines.push(regex_tester::highlight(pattern, flags, haystack, "[", "]")?);
    Ok(lines.join("\n"))
}

pub fn describe_age(birth: &str, today: NaiveDate) -> Result<String> {
    let birth = age::parse_date(birth)?;
    let age = age::calculate(birth, today)?;

    Ok([
        format!("Age:            {} years, {} months, {} days", age.years, age.months, age.days),
        format!("Total months:   {}", age.total_months),
        format!("Total weeks:    {}", age.total_weeks),
        format!("Total days:     {}", age.total_days),
        format!("Total hours:    {}", age.total_hours),
        format!("Total minutes:  {}", age.total_minutes),
        format!("Total seconds:  {}", age.total_seconds),
        format!(
            "Next birthday:  {} (in {} days)",
            age.next_birthday.format("%Y-%m-%d"),
            age.days_until_birthday
        ),
        format!("Zodiac sign:    {}", age.zodiac),
    ]
    .join("\n"))
}

pub fn colors(hex: &str) -> Result<String> {
    let formats = color::formats(hex)?;
    Ok([
        format!("HEX   {}", formats.hex),
        format!("RGB   {}", formats.rgb),
        format!("RGBA  {}", formats.rgba),
        format!("HSL   {}", formats.hsl),
        format!("HSLA  {}", formats.hsla),
    ]
    .join("\n"))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use toolkit::currency::StaticRates;

    #[test]
    fn test_count_words() {
        let out = count_words("One two. Three!", false).unwrap();
        assert!(out.contains("Words:                 3"));
        assert!(out.contains("Sentences:             2"));

        let json = count_words("a b", true).unwrap();
        assert!(json.contains("\"words\": 2"));
    }

    #[test]
    fn test_convert_case() {
        assert_eq!(convert_case("hello world", Some(Case::Snake)), "hello_world");
        let all = convert_case("hello world", None);
        assert_eq!(all.lines().count(), Case::ALL.len());
        assert!(all.contains("HELLO WORLD"));
    }

    #[test]
    fn test_diff_texts() {
        assert_eq!(diff_texts("", "b", DiffMode::Line), "Nothing to compare");
        assert_eq!(diff_texts("a\nb", "a\nb", DiffMode::Line), "No differences");
        let out = diff_texts("a\nb", "a\nc", DiffMode::Line);
        assert!(out.contains("- b"));
        assert!(out.contains("+ c"));
        assert!(out.contains("  a"));
    }

    #[test]
    fn test_passwords() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = passwords(&mut rng, &PasswordOptions::default(), 3);
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|l| l.ends_with(')')));
    }

    #[test]
    fn test_check_strength() {
        assert!(check_strength("abc").starts_with("Strength: "));
        assert!(check_strength("").starts_with("Strength: None (0/5)"));
    }

    #[test]
    fn test_hashes() {
        let all = hashes("abc", None).unwrap();
        assert_eq!(all.lines().count(), 5);
        assert!(all.contains("a9993e364706816aba3e25717850c26c9cd0d89d"));

        assert_eq!(
            hashes("abc", Some("sha1")).unwrap(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(hashes("abc", Some("md5")).unwrap_err().to_string(), "Error generating hash");
        assert_eq!(hashes("  ", None).unwrap(), "");
    }

    #[test]
    fn test_random_numbers() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = random_numbers(&mut rng, 1, 3, 3, false).unwrap();
        let mut numbers: Vec<i64> = out.split(", ").map(|n| n.parse().unwrap()).collect();
        numbers.sort();
        assert_eq!(numbers, vec![1, 2, 3]);

        assert!(random_numbers(&mut rng, 5, 1, 1, false).is_err());
    }

    #[test]
    fn test_base64() {
        assert_eq!(base64("hi", false).unwrap(), "aGk=");
        assert_eq!(base64("aGk=", true).unwrap(), "hi");
        assert_eq!(
            base64("!!!", true).unwrap_err().to_string(),
            "Invalid input for Base64 decoding"
        );
    }

    #[test]
    fn test_convert_unit() {
        assert_eq!(convert_unit("length", "1", "km", "m").unwrap(), "1 Kilometer = 1000 Meter");
        assert_eq!(
            convert_unit("temperature", "100", "celsius", "fahrenheit").unwrap(),
            "100 Celsius = 212 Fahrenheit"
        );
        assert_eq!(
            convert_unit("speed", "1", "a", "b").unwrap_err().to_string(),
            "Unknown unit category: speed"
        );
    }

    #[test]
    fn test_list_units() {
        let out = list_units(Some("area")).unwrap();
        assert!(out.starts_with("area:"));
        assert!(out.contains("hectare"));
        assert!(list_units(None).unwrap().contains("temperature:"));
    }

    #[test]
    fn test_convert_currency() {
        let out = convert_currency(&StaticRates, "100", "usd", "eur").unwrap();
        assert!(out.starts_with("100.00 USD = 91.00 EUR"));
        assert!(convert_currency(&StaticRates, "1", "usd", "xyz").is_err());
    }

    #[test]
    fn test_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let out = timestamps(Some("1704067200"), now).unwrap();
        assert!(out.contains("ISO 8601:     2024-01-01T00:00:00.000Z"));
        assert!(out.contains("Unix (ms):    1704067200000"));

        let out = timestamps(Some("2024-01-01T00:00:00Z"), now).unwrap();
        assert!(out.contains("Unix (s):     1704067200"));

        let out = timestamps(None, now).unwrap();
        assert!(out.contains("Unix (s):     1704067200"));

        assert!(timestamps(Some("not a date"), now).is_err());
    }

    #[test]
    fn test_csv_json() {
        let json = csv_to_json("name,age\nAda,36", &CsvOptions::default()).unwrap();
        assert!(json.contains("\"name\": \"Ada\""));

        let csv = json_to_csv(r#"[{"name":"Ada","age":36}]"#, ',').unwrap();
        assert_eq!(csv, "name,age\nAda,36");
    }

    #[test]
    fn test_json_actions() {
        assert_eq!(json(r#"{ "a" : 1 }"#, JsonAction::Minify).unwrap(), r#"{"a":1}"#);
        assert_eq!(json("[1]", JsonAction::Validate).unwrap(), "Valid JSON");
        assert_eq!(json("{", JsonAction::Format(2)).unwrap_err().to_string(), "Invalid JSON format");
    }

    #[test]
    fn test_regex_report() {
        let out = regex_report(r"(\d)", "g", "a1b2").unwrap();
        assert!(out.starts_with("2 match(es)"));
        assert!(out.contains("$1 = \"1\""));
        assert!(out.ends_with("a[1]b[2]"));
        assert_eq!(regex_report("z", "g", "abc").unwrap(), "No matches");
    }

    #[test]
    fn test_age() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let out = describe_age("1990-05-15", today).unwrap();
        assert!(out.contains("33 years, 9 months, 24 days"));
        assert!(out.contains("Zodiac sign:    Taurus"));
        assert!(describe_age("2030-01-01", today).is_err());
    }

    #[test]
    fn test_colors() {
        let out = colors("#ff0000").unwrap();
        assert!(out.contains("HEX   #FF0000"));
        assert!(out.contains("HSL   hsl(0, 100%, 50%)"));
    }
}
