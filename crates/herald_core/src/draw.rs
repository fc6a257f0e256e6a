//! Lottery draw records that ground article generation.

use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Smallest valid ball number.
pub const LOTTO_MIN: u8 = 1;
/// Largest valid ball number.
pub const LOTTO_MAX: u8 = 45;
/// Main numbers per draw.
pub const LOTTO_PER_SET: usize = 6;

/// One weekly Lotto 6/45 draw, in the wire format of the published dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Draw {
    /// Draw round number
    #[serde(rename = "drwNo")]
    round: u32,
    /// Draw date (`YYYY-MM-DD`)
    #[serde(rename = "drwNoDate")]
    date: String,
    #[serde(rename = "drwtNo1")]
    #[getter(skip)]
    n1: u8,
    #[serde(rename = "drwtNo2")]
    #[getter(skip)]
    n2: u8,
    #[serde(rename = "drwtNo3")]
    #[getter(skip)]
    n3: u8,
    #[serde(rename = "drwtNo4")]
    #[getter(skip)]
    n4: u8,
    #[serde(rename = "drwtNo5")]
    #[getter(skip)]
    n5: u8,
    #[serde(rename = "drwtNo6")]
    #[getter(skip)]
    n6: u8,
    /// Bonus number
    #[serde(rename = "bnusNo")]
    bonus: u8,
    /// Number of first-prize winners
    #[serde(rename = "firstPrzwnerCo", default)]
    first_prize_winners: u32,
}

impl Draw {
    /// Creates a draw record.
    pub fn new(
        round: u32,
        date: impl Into<String>,
        numbers: [u8; LOTTO_PER_SET],
        bonus: u8,
        first_prize_winners: u32,
    ) -> Self {
        let [n1, n2, n3, n4, n5, n6] = numbers;
        Self {
            round,
            date: date.into(),
            n1,
            n2,
            n3,
            n4,
            n5,
            n6,
            bonus,
            first_prize_winners,
        }
    }

    /// The six main numbers in draw order.
    pub fn numbers(&self) -> [u8; LOTTO_PER_SET] {
        [self.n1, self.n2, self.n3, self.n4, self.n5, self.n6]
    }

    /// Integrity violations for this draw alone.
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        let numbers = self.numbers();

        for n in numbers {
            if !(LOTTO_MIN..=LOTTO_MAX).contains(&n) {
                violations.push(format!(
                    "Round {}: number {} out of range {}-{}",
                    self.round, n, LOTTO_MIN, LOTTO_MAX
                ));
            }
        }

        if !(LOTTO_MIN..=LOTTO_MAX).contains(&self.bonus) {
            violations.push(format!(
                "Round {}: bonus {} out of range {}-{}",
                self.round, self.bonus, LOTTO_MIN, LOTTO_MAX
            ));
        }

        if numbers.iter().collect::<HashSet<_>>().len() != LOTTO_PER_SET {
            let joined = numbers
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(",");
            violations.push(format!(
                "Round {}: duplicate numbers found in {}",
                self.round, joined
            ));
        }

        if self.date.len() != 10 || NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            violations.push(format!(
                "Round {}: invalid date format \"{}\"",
                self.round, self.date
            ));
        }

        violations
    }
}

/// The full draw history, newest draw first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrawDataset {
    #[serde(default)]
    draws: Vec<Draw>,
}

impl DrawDataset {
    /// Creates a dataset, ordering draws newest first.
    pub fn new(mut draws: Vec<Draw>) -> Self {
        draws.sort_by(|a, b| b.round.cmp(&a.round));
        Self { draws }
    }

    /// All draws, newest first.
    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    /// The most recent draw.
    pub fn latest(&self) -> Option<&Draw> {
        self.draws.first()
    }

    /// Up to `count` most recent draws.
    pub fn recent(&self, count: usize) -> &[Draw] {
        &self.draws[..count.min(self.draws.len())]
    }

    /// Number of draws.
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    /// True when the dataset holds no draws.
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Restores newest-first ordering after deserialization.
    pub fn normalized(self) -> Self {
        Self::new(self.draws)
    }

    /// Checks every draw and the round sequence.
    ///
    /// Returns human-readable violations; empty means the dataset is sound.
    ///
    /// # Examples
    ///
    /// ```
    /// use herald_core::{Draw, DrawDataset};
    ///
    /// let dataset = DrawDataset::new(vec![
    ///     Draw::new(2, "2002-12-14", [9, 13, 21, 25, 32, 42], 2, 2),
    ///     Draw::new(1, "2002-12-07", [10, 23, 29, 33, 37, 40], 16, 0),
    /// ]);
    /// assert!(dataset.validate().is_empty());
    /// ```
    pub fn validate(&self) -> Vec<String> {
        if self.draws.is_empty() {
            return vec!["No draws found".to_string()];
        }

        let mut violations: Vec<String> = self.draws.iter().flat_map(Draw::violations).collect();

        let mut rounds: Vec<u32> = self.draws.iter().map(|d| d.round).collect();
        rounds.sort_unstable();
        for pair in rounds.windows(2) {
            if pair[1] != pair[0] + 1 {
                violations.push(format!(
                    "Missing round(s) between {} and {}",
                    pair[0], pair[1]
                ));
            }
        }

        violations
    }
}
