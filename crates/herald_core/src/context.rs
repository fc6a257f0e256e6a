//! Variable bindings produced by one topic selection.

use crate::Bindings;
use derive_builder::Builder;
use derive_getters::Getters;

/// Values a topic's templates are rendered against.
///
/// Computed fresh for every run from the latest draw data; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into))]
pub struct SelectionContext {
    /// Latest draw round
    round: u32,
    /// Six main numbers of the latest draw
    numbers: Vec<u8>,
    /// Bonus number of the latest draw
    bonus: u8,
    /// Round following the latest one
    next_round: u32,
    /// How many recent draws a topic should consider
    #[builder(default = "20")]
    recent_count: u32,
    /// Calendar year of the run
    year: i32,
    /// `start ~ end` span covered by the five newest draws
    date_range: String,
    /// Number of draws in the dataset
    total_draws: usize,
    /// Randomly chosen focus number among the latest six
    target_number: u8,
}

impl SelectionContext {
    /// Creates a new builder for `SelectionContext`.
    pub fn builder() -> SelectionContextBuilder {
        SelectionContextBuilder::default()
    }

    /// Main numbers joined as `a, b, c, d, e, f`.
    pub fn numbers_joined(&self) -> String {
        self.numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Placeholder bindings for template rendering.
    pub fn bindings(&self) -> Bindings {
        let mut bindings = Bindings::new();
        bindings.insert("round".into(), self.round.to_string());
        bindings.insert("numbers".into(), self.numbers_joined());
        bindings.insert("bonus".into(), self.bonus.to_string());
        bindings.insert("nextRound".into(), self.next_round.to_string());
        bindings.insert("recentCount".into(), self.recent_count.to_string());
        bindings.insert("year".into(), self.year.to_string());
        bindings.insert("dateRange".into(), self.date_range.clone());
        bindings.insert("totalDraws".into(), self.total_draws.to_string());
        bindings.insert("targetNumber".into(), self.target_number.to_string());
        bindings
    }
}
