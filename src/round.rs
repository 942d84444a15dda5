use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div};
use std::path::Path;

use crate::error::{RecordError, Result};
use crate::shot::{Direction, Outcome, ShotObservation, ShotType};
use crate::stats;

/// A stored shot row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotRecord {
    pub shot_number: u32,
    #[serde(default)]
    pub club_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shot_type: ShotType,
    /// Yards
    #[serde(default)]
    pub distance_to_target: Option<f64>,
    /// Yards actually hit
    #[serde(default)]
    pub shot_distance: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub outcome: Outcome,
    #[serde(default)]
    pub successful_strike: Option<bool>,
    #[serde(default)]
    pub direction: Option<Direction>,
    /// Feet, putts only
    #[serde(default)]
    pub putt_length: Option<f64>,
}

/// Legacy rows store missing labels and counts as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ShotRecord {
    /// Putts are measured by `putt_length` when one was recorded.
    pub fn observation(&self, par: u8) -> ShotObservation {
        let distance = match self.shot_type {
            ShotType::Putt => self
                .putt_length
                .filter(|feet| *feet > 0.0)
                .or(self.distance_to_target),
            _ => self.distance_to_target,
        };
        ShotObservation::new(self.shot_type, distance, self.outcome, par)
    }

    pub fn strokes_gained(&self, par: u8) -> f64 {
        self.observation(par).strokes_gained()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleRecord {
    pub hole_number: u8,
    pub par: u8,
    /// Yards
    #[serde(default)]
    pub distance: Option<u32>,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub fairway_hit: Option<bool>,
    #[serde(default)]
    pub green_in_regulation: Option<bool>,
    #[serde(default)]
    pub num_putts: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_penalties: u32,
    #[serde(default)]
    pub shots: Vec<ShotRecord>,
}

impl HoleRecord {
    pub fn strokes_gained(&self) -> f64 {
        self.shots.iter().map(|s| s.strokes_gained(self.par)).sum()
    }

    pub fn breakdown(&self) -> StrokesGainedBreakdown {
        let mut breakdown = StrokesGainedBreakdown::default();
        for shot in &self.shots {
            breakdown.record(shot.shot_type, shot.strokes_gained(self.par));
        }
        breakdown
    }

    pub fn relative_to_par(&self) -> Option<i32> {
        let score = i32::try_from(self.score?).ok()?;
        score.checked_sub(i32::from(self.par))
    }

    /// Par 3s have no fairway to hit.
    pub fn has_fairway(&self) -> bool {
        self.par >= 4
    }

    fn validate(&self) -> Result<()> {
        if self.hole_number == 0 {
            return Err(RecordError::InvalidHole {
                hole: self.hole_number,
                reason: "hole numbers start at 1".to_string(),
            });
        }
        if self.par == 0 {
            return Err(RecordError::InvalidHole {
                hole: self.hole_number,
                reason: "par must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub course_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tee_box: Option<String>,
    #[serde(default)]
    pub holes: Vec<HoleRecord>,
}

impl RoundRecord {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let round: RoundRecord = serde_json::from_str(json)?;
        for hole in &round.holes {
            hole.validate()?;
        }
        log::debug!(
            "[ROUND] Loaded {} on {} ({} holes)",
            round.course_name,
            round.date,
            round.holes.len()
        );
        Ok(round)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Every shot in play order with its strokes gained.
    pub fn shot_results(&self) -> impl Iterator<Item = (&HoleRecord, &ShotRecord, f64)> + '_ {
        self.holes.iter().flat_map(|hole| {
            hole.shots
                .iter()
                .map(move |shot| (hole, shot, shot.strokes_gained(hole.par)))
        })
    }

    pub fn breakdown(&self) -> StrokesGainedBreakdown {
        self.holes.iter().map(HoleRecord::breakdown).sum()
    }

    pub fn summary(&self) -> RoundSummary {
        let mut summary = RoundSummary {
            course_name: self.course_name.clone(),
            date: self.date,
            holes_played: 0,
            total_score: 0,
            par_played: 0,
            fairways_hit: 0,
            fairways_total: 0,
            greens_in_regulation: 0,
            total_putts: 0,
            penalties: 0,
            strokes_gained: StrokesGainedBreakdown::default(),
        };

        for hole in &self.holes {
            // Only scored holes feed per-hole ratios
            if let Some(score) = hole.score {
                summary.holes_played += 1;
                summary.total_score += score;
                summary.par_played += u32::from(hole.par);
                if hole.green_in_regulation == Some(true) {
                    summary.greens_in_regulation += 1;
                }
                summary.total_putts += hole.num_putts.unwrap_or(0);
            }
            if hole.has_fairway() {
                if let Some(hit) = hole.fairway_hit {
                    summary.fairways_total += 1;
                    if hit {
                        summary.fairways_hit += 1;
                    }
                }
            }
            summary.penalties += hole.num_penalties;
        }

        summary.strokes_gained = self.breakdown();
        summary
    }
}

/// Strokes gained split by part of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokesGainedBreakdown {
    pub off_tee: f64,
    pub approach: f64,
    pub around_green: f64,
    pub putting: f64,
    pub total: f64,
}

impl StrokesGainedBreakdown {
    pub fn record(&mut self, shot_type: ShotType, strokes_gained: f64) {
        match shot_type {
            ShotType::Tee => self.off_tee += strokes_gained,
            ShotType::Approach => self.approach += strokes_gained,
            ShotType::Chip | ShotType::Bunker => self.around_green += strokes_gained,
            ShotType::Putt => self.putting += strokes_gained,
            ShotType::Unknown => {}
        }
        self.total += strokes_gained;
    }
}

impl Add for StrokesGainedBreakdown {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            off_tee: self.off_tee + rhs.off_tee,
            approach: self.approach + rhs.approach,
            around_green: self.around_green + rhs.around_green,
            putting: self.putting + rhs.putting,
            total: self.total + rhs.total,
        }
    }
}

impl AddAssign for StrokesGainedBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Div<f64> for StrokesGainedBreakdown {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            off_tee: self.off_tee / rhs,
            approach: self.approach / rhs,
            around_green: self.around_green / rhs,
            putting: self.putting / rhs,
            total: self.total / rhs,
        }
    }
}

impl Sum for StrokesGainedBreakdown {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub course_name: String,
    pub date: NaiveDate,
    pub holes_played: u32,
    pub total_score: u32,
    pub par_played: u32,
    pub fairways_hit: u32,
    pub fairways_total: u32,
    pub greens_in_regulation: u32,
    pub total_putts: u32,
    pub penalties: u32,
    pub strokes_gained: StrokesGainedBreakdown,
}

impl RoundSummary {
    pub fn relative_to_par(&self) -> Option<i32> {
        if self.holes_played == 0 {
            return None;
        }
        let score = i32::try_from(self.total_score).ok()?;
        let par = i32::try_from(self.par_played).ok()?;
        score.checked_sub(par)
    }

    pub fn fairway_percentage(&self) -> u32 {
        stats::fairway_percentage(self.fairways_hit, self.fairways_total)
    }

    pub fn gir_percentage(&self) -> u32 {
        stats::gir_percentage(self.greens_in_regulation, self.holes_played)
    }

    pub fn average_putts(&self) -> f64 {
        stats::average_putts(self.total_putts, self.holes_played)
    }
}
