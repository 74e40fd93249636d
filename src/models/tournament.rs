//! Tournament and Category.

use crate::models::error::EngineError;
use crate::models::player::{Division, Surface};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Tour category of an event.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Grand Slam")]
    GrandSlam,
    #[serde(rename = "ATP Finals")]
    AtpFinals,
    #[serde(rename = "WTA Finals")]
    WtaFinals,
    #[serde(rename = "Masters 1000")]
    Masters1000,
    #[serde(rename = "WTA 1000")]
    Wta1000,
    #[serde(rename = "ATP 500")]
    Atp500,
    #[serde(rename = "WTA 500")]
    Wta500,
    #[serde(rename = "ATP 250")]
    Atp250,
    #[serde(rename = "WTA 250")]
    Wta250,
}

impl Category {
    /// Division a category is branded for, if any. Grand Slams host both tours.
    pub fn affiliation(&self) -> Option<Division> {
        use Category::*;
        match self {
            AtpFinals | Masters1000 | Atp500 | Atp250 => Some(Division::Atp),
            WtaFinals | Wta1000 | Wta500 | Wta250 => Some(Division::Wta),
            GrandSlam => None,
        }
    }
}

/// A tournament: fixed date range, surface and prize pool. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub location: String,
    pub start_date: NaiveDate,
    /// Inclusive; never before `start_date`.
    pub end_date: NaiveDate,
    pub surface: Surface,
    /// Total prize pool, non-negative.
    pub prize_money: f64,
    pub category: Category,
    /// Stadium capacity, when known (drives simulated attendance).
    pub capacity: Option<u32>,
    /// Explicit tour division. When None it is derived from name and category.
    pub division: Option<Division>,
}

impl Tournament {
    /// Create a tournament, validating the date range and prize pool.
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        surface: Surface,
        prize_money: f64,
        category: Category,
    ) -> Result<Self, EngineError> {
        if end_date < start_date {
            return Err(EngineError::InvalidDateRange);
        }
        // Also rejects NaN.
        if !(prize_money >= 0.0) {
            return Err(EngineError::NegativePrizePool);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location: String::new(),
            start_date,
            end_date,
            surface,
            prize_money,
            category,
            capacity: None,
            division: None,
        })
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_division(mut self, division: Division) -> Self {
        self.division = Some(division);
        self
    }

    /// Number of calendar days the event spans, both ends included.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Tour division whose players are eligible.
    ///
    /// Explicit division first, then the category's branding, then an "ATP"/"WTA"
    /// marker in the name; Grand Slams with no marker seed from the ATP pool.
    pub fn division(&self) -> Division {
        if let Some(d) = self.division {
            return d;
        }
        if let Some(d) = self.category.affiliation() {
            return d;
        }
        if self.name.contains("WTA") {
            Division::Wta
        } else {
            Division::Atp
        }
    }
}
