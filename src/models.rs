use std::fmt;

use sea_orm::FromQueryResult;
use serde::Serialize;

/// Q1 row. Budget and revenue are both reported (non-zero) for every match.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct PlotMatch {
    pub title: String,
    pub release_year: Option<i32>,
    pub budget: i64,
    pub revenue: i64,
    /// `revenue / budget`; `None` only for a zero budget.
    pub roi_ratio: Option<f64>,
}

/// Q2 row.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct TitleMatch {
    pub title: String,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,
}

/// Q3 row. `actor_1` always has the lower person id of the pair.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct ActorPair {
    pub actor_1: String,
    pub actor_2: String,
    pub movies_together: i64,
    pub avg_rating: Option<f64>,
}

/// Q4 row.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct DirectorRevenue {
    pub director_name: String,
    pub movies_directed: i64,
    pub total_revenue: i64,
}

/// Q5 row. `genre_1` always has the lower genre id of the pair.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct GenrePair {
    pub genre_1: String,
    pub genre_2: String,
    pub movie_count: i64,
    pub avg_revenue: f64,
}

/// Whole currency units, displayed as `$1,234,567`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub struct Money(pub i64);

impl Money {
    pub fn from_average(value: f64) -> Self {
        Money(value.round() as i64)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if self.0 < 0 {
            write!(f, "-${grouped}")
        } else {
            write!(f, "${grouped}")
        }
    }
}
