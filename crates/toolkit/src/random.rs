//! Random number picker

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};

use crate::error::ToolError;

/// Number of past draws kept
pub const HISTORY_LIMIT: usize = 10;

/// Draw `quantity` integers from `min..=max`
pub fn pick<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    quantity: usize,
    allow_duplicates: bool,
) -> Result<Vec<i64>, ToolError> {
    if min > max {
        return Err(ToolError::InvertedRange);
    }

    if allow_duplicates {
        return Ok((0..quantity).map(|_| rng.gen_range(min..=max)).collect());
    }

    let span = (max as i128) - (min as i128) + 1;
    if quantity as i128 > span {
        return Err(ToolError::RangeTooSmall);
    }

    match usize::try_from(span) {
        Ok(span) => Ok(rand::seq::index::sample(rng, span, quantity)
            .into_iter()
            .map(|offset| (min as i128 + offset as i128) as i64)
            .collect()),
        // Wider than usize: collisions are all but impossible, just retry them
        Err(_) => {
            let mut seen = HashSet::with_capacity(quantity);
            let mut numbers = Vec::with_capacity(quantity);
            while numbers.len() < quantity {
                let n = rng.gen_range(min..=max);
                if seen.insert(n) {
                    numbers.push(n);
                }
            }
            Ok(numbers)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draw {
    pub numbers: Vec<i64>,
    pub at: DateTime<Utc>,
}

/// Picker that remembers the last few draws, newest first
#[derive(Debug, Default)]
pub struct RandomPicker {
    history: VecDeque<Draw>,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: i64,
        max: i64,
        quantity: usize,
        allow_duplicates: bool,
    ) -> Result<Vec<i64>, ToolError> {
        let numbers = pick(rng, min, max, quantity, allow_duplicates)?;

        self.history.push_front(Draw {
            numbers: numbers.clone(),
            at: Utc::now(),
        });
        self.history.truncate(HISTORY_LIMIT);

        Ok(numbers)
    }

    pub fn history(&self) -> impl Iterator<Item = &Draw> {
        self.history.iter()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
