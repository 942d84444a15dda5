use serde::{Deserialize, Serialize};

use crate::strokes_gained::calculate_strokes_gained;

/// Kind of stroke being played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotType {
    Tee,
    Approach,
    Chip,
    Bunker,
    Putt,
    /// Any label the engine does not know. Scores as neutral.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ShotType {
    pub fn from_label(label: &str) -> Self {
        match label {
            "tee" => ShotType::Tee,
            "approach" => ShotType::Approach,
            "chip" => ShotType::Chip,
            "bunker" => ShotType::Bunker,
            "putt" => ShotType::Putt,
            _ => ShotType::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShotType::Tee => "tee",
            ShotType::Approach => "approach",
            ShotType::Chip => "chip",
            ShotType::Bunker => "bunker",
            ShotType::Putt => "putt",
            ShotType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ShotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Result of a stroke as recorded by the player.
///
/// For approach shots the same label also names the lie the shot was played
/// from, so `fairway` selects both the source table and the next lie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Fairway,
    Rough,
    Bunker,
    Sand,
    Green,
    Hazard,
    #[serde(rename = "ob")]
    OutOfBounds,
    Recovery,
    Holed,
    Good,
    Poor,
    Miss,
    #[default]
    #[serde(other)]
    Other,
}

impl Outcome {
    pub fn from_label(label: &str) -> Self {
        match label {
            "fairway" => Outcome::Fairway,
            "rough" => Outcome::Rough,
            "bunker" => Outcome::Bunker,
            "sand" => Outcome::Sand,
            "green" => Outcome::Green,
            "hazard" => Outcome::Hazard,
            "ob" => Outcome::OutOfBounds,
            "recovery" => Outcome::Recovery,
            "holed" => Outcome::Holed,
            "good" => Outcome::Good,
            "poor" => Outcome::Poor,
            "miss" => Outcome::Miss,
            _ => Outcome::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Fairway => "fairway",
            Outcome::Rough => "rough",
            Outcome::Bunker => "bunker",
            Outcome::Sand => "sand",
            Outcome::Green => "green",
            Outcome::Hazard => "hazard",
            Outcome::OutOfBounds => "ob",
            Outcome::Recovery => "recovery",
            Outcome::Holed => "holed",
            Outcome::Good => "good",
            Outcome::Poor => "poor",
            Outcome::Miss => "miss",
            Outcome::Other => "other",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Where a shot finished relative to the target line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Center,
    Right,
    Long,
    Short,
    Target,
    #[serde(other)]
    Other,
}

/// One stroke as fed to the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotObservation {
    pub shot_type: ShotType,
    /// Yards for full swings, feet for putts
    pub distance_to_target: Option<f64>,
    pub outcome: Outcome,
    /// Not used by the current formula
    pub par: u8,
}

impl ShotObservation {
    pub fn new(shot_type: ShotType, distance_to_target: Option<f64>, outcome: Outcome, par: u8) -> Self {
        Self {
            shot_type,
            distance_to_target,
            outcome,
            par,
        }
    }

    pub fn strokes_gained(&self) -> f64 {
        calculate_strokes_gained(self.shot_type, self.distance_to_target, self.outcome, self.par)
    }
}
