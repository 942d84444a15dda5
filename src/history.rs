//! Statistics across many rounds: time-period filtering, averages and the
//! recent-versus-older scoring trend.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::round::{RoundRecord, StrokesGainedBreakdown};
use crate::stats;

/// Rounds played on or after `today - days`. `None` keeps every round.
pub fn filter_by_time_period<'a>(
    rounds: impl IntoIterator<Item = &'a RoundRecord>,
    days: Option<u32>,
    today: NaiveDate,
) -> Vec<&'a RoundRecord> {
    let cutoff = days.and_then(|days| today.checked_sub_days(Days::new(u64::from(days))));
    rounds
        .into_iter()
        .filter(|round| cutoff.map_or(true, |cutoff| round.date >= cutoff))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub rounds: u32,
    /// Rounds with at least one scored hole
    pub scored_rounds: u32,
    /// One decimal, over scored rounds
    pub average_score: Option<f64>,
    /// Older-half average minus recent-half average. Positive is improving.
    pub score_trend: Option<f64>,
    pub holes_played: u32,
    pub fairways_hit: u32,
    pub fairways_total: u32,
    pub greens_in_regulation: u32,
    pub total_putts: u32,
    pub strokes_gained: StrokesGainedBreakdown,
}

impl HistorySummary {
    pub fn fairway_percentage(&self) -> u32 {
        stats::fairway_percentage(self.fairways_hit, self.fairways_total)
    }

    pub fn gir_percentage(&self) -> u32 {
        stats::gir_percentage(self.greens_in_regulation, self.holes_played)
    }

    pub fn average_putts(&self) -> f64 {
        stats::average_putts(self.total_putts, self.holes_played)
    }

    pub fn strokes_gained_per_round(&self) -> StrokesGainedBreakdown {
        if self.rounds == 0 {
            return StrokesGainedBreakdown::default();
        }
        self.strokes_gained / f64::from(self.rounds)
    }
}

fn mean_score(scores: &[(NaiveDate, u32)]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let total: f64 = scores.iter().map(|&(_, score)| f64::from(score)).sum();
    Some(total / scores.len() as f64)
}

/// Splits scored rounds newest-first at the halfway point.
fn score_trend(mut scores: Vec<(NaiveDate, u32)>) -> Option<f64> {
    scores.sort_by(|a, b| b.0.cmp(&a.0));
    let (recent, older) = scores.split_at(scores.len() / 2);
    let recent = mean_score(recent)?;
    let older = mean_score(older)?;
    Some(stats::round_to_tenth(older - recent))
}

pub fn summarize_history<'a>(rounds: impl IntoIterator<Item = &'a RoundRecord>) -> HistorySummary {
    let mut history = HistorySummary {
        rounds: 0,
        scored_rounds: 0,
        average_score: None,
        score_trend: None,
        holes_played: 0,
        fairways_hit: 0,
        fairways_total: 0,
        greens_in_regulation: 0,
        total_putts: 0,
        strokes_gained: StrokesGainedBreakdown::default(),
    };
    let mut scores = Vec::new();

    for round in rounds {
        let summary = round.summary();
        history.rounds += 1;
        history.holes_played += summary.holes_played;
        history.fairways_hit += summary.fairways_hit;
        history.fairways_total += summary.fairways_total;
        history.greens_in_regulation += summary.greens_in_regulation;
        history.total_putts += summary.total_putts;
        history.strokes_gained += summary.strokes_gained;
        if summary.holes_played > 0 {
            scores.push((round.date, summary.total_score));
        }
    }

    history.scored_rounds = scores.len() as u32;
    history.average_score = mean_score(&scores).map(stats::round_to_tenth);
    history.score_trend = score_trend(scores);
    log::debug!(
        "[HISTORY] {} rounds, {} scored",
        history.rounds,
        history.scored_rounds
    );
    history
}
