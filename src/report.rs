//! Plain-text rendering of query results.

use std::fmt::Write;

use crate::models::{ActorPair, DirectorRevenue, GenrePair, Money, PlotMatch, TitleMatch};

const RULE_WIDTH: usize = 60;

/// A row that can be laid out as a table line.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl Tabular for PlotMatch {
    const HEADERS: &'static [&'static str] = &["title", "year", "budget", "revenue", "roi"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            optional(self.release_year),
            Money(self.budget).to_string(),
            Money(self.revenue).to_string(),
            self.roi_ratio.map(|r| format!("{r:.2}")).unwrap_or_else(dash),
        ]
    }
}

impl Tabular for TitleMatch {
    const HEADERS: &'static [&'static str] = &["title", "popularity", "vote_average", "vote_count"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.popularity.map(|p| format!("{p:.3}")).unwrap_or_else(dash),
            self.vote_average.map(|v| format!("{v:.1}")).unwrap_or_else(dash),
            optional(self.vote_count),
        ]
    }
}

impl Tabular for ActorPair {
    const HEADERS: &'static [&'static str] =
        &["actor_1", "actor_2", "movies_together", "avg_rating"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.actor_1.clone(),
            self.actor_2.clone(),
            self.movies_together.to_string(),
            self.avg_rating.map(|r| format!("{r:.2}")).unwrap_or_else(dash),
        ]
    }
}

impl Tabular for DirectorRevenue {
    const HEADERS: &'static [&'static str] = &["director", "movies_directed", "total_revenue"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.director_name.clone(),
            self.movies_directed.to_string(),
            Money(self.total_revenue).to_string(),
        ]
    }
}

impl Tabular for GenrePair {
    const HEADERS: &'static [&'static str] = &["genre_1", "genre_2", "movie_count", "avg_revenue"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.genre_1.clone(),
            self.genre_2.clone(),
            self.movie_count.to_string(),
            Money::from_average(self.avg_revenue).to_string(),
        ]
    }
}

pub fn render<T: Tabular>(title: &str, rows: &[T]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{rule}\n{title}\n{rule}");

    if rows.is_empty() {
        let _ = writeln!(out, "No results found.");
        return out;
    }

    let cells: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();
    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers: Vec<String> = T::HEADERS.iter().map(|h| h.to_string()).collect();
    write_line(&mut out, &headers, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(&mut out, &separator, &widths);
    for row in &cells {
        write_line(&mut out, row, &widths);
    }

    let _ = writeln!(out, "\nTotal results: {}", rows.len());
    out
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> =
        cells.iter().zip(widths).map(|(cell, width)| format!("{cell:<width$}")).collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(dash)
}

fn dash() -> String {
    "-".to_string()
}
