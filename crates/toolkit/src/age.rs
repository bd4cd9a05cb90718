//! Age calculator

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::error::ToolError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: i32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
    pub total_weeks: i64,
    pub total_months: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub total_seconds: i64,
    pub next_birthday: NaiveDate,
    pub days_until_birthday: i64,
    pub zodiac: &'static str,
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(raw: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ToolError::InvalidDate)
}

pub fn calculate(birth: NaiveDate, today: NaiveDate) -> Result<Age, ToolError> {
    if birth > today {
        return Err(ToolError::FutureBirthDate);
    }

    let months_elapsed = months_between(birth, today);
    let anniversary = add_months(birth, months_elapsed);
    let years = (months_elapsed / 12) as i32;
    let months = months_elapsed % 12;
    let days = (today - anniversary).num_days() as u32;

    let total_days = (today - birth).num_days();
    let total_hours = total_days * 24;

    let mut next_birthday = birthday_in(birth, today.year());
    if next_birthday < today {
        next_birthday = birthday_in(birth, today.year() + 1);
    }

    Ok(Age {
        years,
        months,
        days,
        total_days,
        total_weeks: total_days / 7,
        total_months: months_elapsed as i64,
        total_hours,
        total_minutes: total_hours * 60,
        total_seconds: total_hours * 3600,
        next_birthday,
        days_until_birthday: (next_birthday - today).num_days(),
        zodiac: zodiac_sign(birth.month(), birth.day()),
    })
}

/// Whole months from `birth` to `today`, counting a month-end birth date as
/// reached on the last day of shorter months
fn months_between(birth: NaiveDate, today: NaiveDate) -> u32 {
    let estimate = (today.year() - birth.year()) * 12 + today.month() as i32 - birth.month() as i32;
    let estimate = estimate.max(0) as u32;
    if add_months(birth, estimate) > today {
        estimate.saturating_sub(1)
    } else {
        estimate
    }
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// The birthday in `year`. Feb 29 falls on Mar 1 in common years.
fn birthday_in(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}

/// Western zodiac sign for a month (1-12) and day
pub fn zodiac_sign(month: u32, day: u32) -> &'static str {
    // Per month: last day of the earlier sign, the earlier sign, the later sign
    const CUSPS: [(u32, &str, &str); 12] = [
        (19, "Capricorn", "Aquarius"),
        (18, "Aquarius", "Pisces"),
        (20, "Pisces", "Aries"),
        (19, "Aries", "Taurus"),
        (20, "Taurus", "Gemini"),
        (20, "Gemini", "Cancer"),
        (22, "Cancer", "Leo"),
        (22, "Leo", "Virgo"),
        (22, "Virgo", "Libra"),
        (22, "Libra", "Scorpio"),
        (21, "Scorpio", "Sagittarius"),
        (21, "Sagittarius", "Capricorn"),
    ];

    match CUSPS.get(month.wrapping_sub(1) as usize) {
        Some(&(last_day, before, after)) => {
            if day <= last_day {
                before
            } else {
                after
            }
        }
        None => "",
    }
}
