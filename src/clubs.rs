use serde::Serialize;
use std::collections::BTreeMap;

use crate::round::RoundRecord;
use crate::shot::{Direction, Outcome};

/// Per-club figures across one or more rounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubStats {
    pub club_name: String,
    pub total_shots: u32,
    /// Yards, over shots with a recorded distance
    pub average_distance: Option<f64>,
    pub min_distance: Option<f64>,
    pub max_distance: Option<f64>,
    /// Percent of shots with a recorded strike flag that were struck well
    pub accuracy: Option<f64>,
    pub strokes_gained: f64,
    /// Percent of all shots finishing in each direction
    pub dispersion: Dispersion,
    /// Percent of all shots per outcome label. Putters use `holed`,
    /// `acceptable` and `bad`.
    pub outcomes: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Dispersion {
    pub left: f64,
    pub center: f64,
    pub right: f64,
    pub long: f64,
    pub short: f64,
    pub target: f64,
}

impl Dispersion {
    fn slot(&mut self, direction: Direction) -> Option<&mut f64> {
        match direction {
            Direction::Left => Some(&mut self.left),
            Direction::Center => Some(&mut self.center),
            Direction::Right => Some(&mut self.right),
            Direction::Long => Some(&mut self.long),
            Direction::Short => Some(&mut self.short),
            Direction::Target => Some(&mut self.target),
            Direction::Other => None,
        }
    }

    fn as_percent_of(self, total: u32) -> Self {
        Self {
            left: percent_of(self.left, total),
            center: percent_of(self.center, total),
            right: percent_of(self.right, total),
            long: percent_of(self.long, total),
            short: percent_of(self.short, total),
            target: percent_of(self.target, total),
        }
    }
}

fn is_putter(club_name: &str) -> bool {
    club_name.eq_ignore_ascii_case("putter")
}

fn putting_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Holed => "holed",
        Outcome::Good | Outcome::Green | Outcome::Fairway => "acceptable",
        _ => "bad",
    }
}

fn percent_of(count: f64, total: u32) -> f64 {
    count / f64::from(total) * 100.0
}

#[derive(Default)]
struct Tally {
    shots: u32,
    distances: Vec<f64>,
    strikes: u32,
    successful: u32,
    strokes_gained: f64,
    directions: Dispersion,
    outcomes: BTreeMap<String, u32>,
}

impl Tally {
    fn finish(self, club_name: String) -> ClubStats {
        let (average_distance, min_distance, max_distance) = if self.distances.is_empty() {
            (None, None, None)
        } else {
            let total: f64 = self.distances.iter().sum();
            (
                Some(total / self.distances.len() as f64),
                self.distances.iter().copied().reduce(f64::min),
                self.distances.iter().copied().reduce(f64::max),
            )
        };
        let accuracy = if self.strikes == 0 {
            None
        } else {
            Some(f64::from(self.successful) / f64::from(self.strikes) * 100.0)
        };

        let (dispersion, outcomes) = if self.shots == 0 {
            (Dispersion::default(), BTreeMap::new())
        } else {
            let outcomes = self
                .outcomes
                .into_iter()
                .map(|(label, count)| (label, percent_of(f64::from(count), self.shots)))
                .collect();
            (self.directions.as_percent_of(self.shots), outcomes)
        };

        ClubStats {
            club_name,
            total_shots: self.shots,
            average_distance,
            min_distance,
            max_distance,
            accuracy,
            strokes_gained: self.strokes_gained,
            dispersion,
            outcomes,
        }
    }
}

/// Groups every shot with a club name, sorted by club.
pub fn club_stats<'a>(rounds: impl IntoIterator<Item = &'a RoundRecord>) -> Vec<ClubStats> {
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();

    for round in rounds {
        for (_, shot, strokes_gained) in round.shot_results() {
            let Some(club) = shot.club_name.as_deref() else {
                continue;
            };
            let putter = is_putter(club);
            let tally = tallies.entry(club.to_string()).or_default();
            tally.shots += 1;
            tally.strokes_gained += strokes_gained;
            if let Some(distance) = shot.shot_distance.filter(|d| *d > 0.0) {
                tally.distances.push(distance);
            }
            if let Some(success) = shot.successful_strike {
                tally.strikes += 1;
                if success {
                    tally.successful += 1;
                }
            }
            if let Some(direction) = shot.direction {
                if let Some(count) = tally.directions.slot(direction) {
                    *count += 1.0;
                }
            }
            let label = if putter {
                putting_outcome(shot.outcome)
            } else {
                shot.outcome.as_str()
            };
            *tally.outcomes.entry(label.to_string()).or_default() += 1;
        }
    }

    log::debug!("[CLUBS] Aggregated {} clubs", tallies.len());
    tallies
        .into_iter()
        .map(|(club, tally)| tally.finish(club))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::{HoleRecord, ShotRecord};
    use crate::shot::{Direction, Outcome, ShotType};
    use chrono::NaiveDate;

    fn club_shot(club: Option<&str>, distance: Option<f64>, success: Option<bool>) -> ShotRecord {
        ShotRecord {
            shot_number: 1,
            club_name: club.map(str::to_string),
            shot_type: ShotType::Tee,
            distance_to_target: Some(350.0),
            shot_distance: distance,
            outcome: Outcome::OutOfBounds,
            successful_strike: success,
            direction: None,
            putt_length: None,
        }
    }

    fn round_with(shots: Vec<ShotRecord>) -> RoundRecord {
        RoundRecord {
            course_name: "Range".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
            tee_box: None,
            holes: vec![HoleRecord {
                hole_number: 1,
                par: 4,
                distance: Some(350),
                score: None,
                fairway_hit: None,
                green_in_regulation: None,
                num_putts: None,
                num_penalties: 0,
                shots,
            }],
        }
    }

    #[test]
    fn groups_by_club_and_skips_unnamed() {
        let round = round_with(vec![
            club_shot(Some("Driver"), Some(250.0), Some(true)),
            club_shot(Some("Driver"), Some(230.0), Some(false)),
            club_shot(Some("3 Wood"), Some(0.0), None),
            club_shot(None, Some(200.0), Some(true)),
        ]);
        let stats = club_stats([&round]);
        assert_eq!(stats.len(), 2);

        let wood = &stats[0];
        assert_eq!(wood.club_name, "3 Wood");
        assert_eq!(wood.total_shots, 1);
        assert_eq!(wood.average_distance, None);
        assert_eq!(wood.accuracy, None);

        let driver = &stats[1];
        assert_eq!(driver.club_name, "Driver");
        assert_eq!(driver.total_shots, 2);
        assert_eq!(driver.average_distance, Some(240.0));
        assert_eq!(driver.min_distance, Some(230.0));
        assert_eq!(driver.max_distance, Some(250.0));
        assert_eq!(driver.accuracy, Some(50.0));
        assert_eq!(driver.strokes_gained, -4.0);
    }

    #[test]
    fn dispersion_and_outcomes_are_shares_of_all_shots() {
        let aimed = |direction: Option<Direction>, outcome: Outcome| ShotRecord {
            direction,
            outcome,
            ..club_shot(Some("7 Iron"), Some(160.0), Some(true))
        };
        let round = round_with(vec![
            aimed(Some(Direction::Left), Outcome::Rough),
            aimed(Some(Direction::Center), Outcome::Green),
            aimed(Some(Direction::Center), Outcome::Green),
            aimed(None, Outcome::Bunker),
        ]);
        let stats = club_stats([&round]);
        let iron = &stats[0];
        assert_eq!(iron.dispersion.left, 25.0);
        assert_eq!(iron.dispersion.center, 50.0);
        assert_eq!(iron.dispersion.right, 0.0);
        assert_eq!(iron.outcomes["green"], 50.0);
        assert_eq!(iron.outcomes["rough"], 25.0);
        assert_eq!(iron.outcomes["bunker"], 25.0);
        assert!(!iron.outcomes.contains_key("fairway"));
    }

    #[test]
    fn putter_outcomes_use_putting_terms() {
        let putt = |outcome: Outcome| ShotRecord {
            shot_type: ShotType::Putt,
            outcome,
            ..club_shot(Some("Putter"), None, None)
        };
        let round = round_with(vec![
            putt(Outcome::Good),
            putt(Outcome::Holed),
            putt(Outcome::Poor),
            putt(Outcome::Holed),
        ]);
        let stats = club_stats([&round]);
        let putter = &stats[0];
        assert_eq!(putter.outcomes.len(), 3);
        assert_eq!(putter.outcomes["holed"], 50.0);
        assert_eq!(putter.outcomes["acceptable"], 25.0);
        assert_eq!(putter.outcomes["bad"], 25.0);
        assert_eq!(putter.dispersion, Dispersion::default());
    }

    #[test]
    fn accumulates_across_rounds() {
        let first = round_with(vec![club_shot(Some("Driver"), Some(260.0), Some(true))]);
        let second = round_with(vec![club_shot(Some("Driver"), Some(240.0), Some(true))]);
        let stats = club_stats(vec![&first, &second]);
        assert_eq!(stats[0].total_shots, 2);
        assert_eq!(stats[0].average_distance, Some(250.0));
        assert_eq!(stats[0].accuracy, Some(100.0));
    }
}
