//! Per-shot strokes gained against the baseline tables.
//!
//! No post-shot distance is recorded, so the distance left after a stroke is
//! estimated from fixed ratios of the starting distance.

use crate::baseline::{lookup_expected_strokes, Lie};
use crate::shot::{Outcome, ShotType};

/// Fraction of the hole still left after a tee shot.
const TEE_REMAINING_RATIO: f64 = 0.7;
/// Fraction of the distance still left after an approach that misses the green.
const APPROACH_REMAINING_RATIO: f64 = 0.5;
/// Yards of approach distance to feet of first putt.
const APPROACH_PUTT_RATIO: f64 = 0.3;
const APPROACH_MAX_PUTT_FEET: f64 = 90.0;
/// Yards of chip distance to feet of first putt.
const CHIP_PUTT_RATIO: f64 = 3.0;
const CHIP_MAX_PUTT_FEET: f64 = 60.0;
/// Shortest distance the short-game tables are consulted at.
const SHORT_GAME_MIN_YARDS: f64 = 20.0;
const DRIVEN_GREEN_PUTT_FEET: f64 = 20.0;
const GOOD_LAG_FEET: f64 = 2.0;
const POOR_LAG_FEET: f64 = 5.0;

const HAZARD_PENALTY: f64 = -1.0;
/// Stroke and distance
const OUT_OF_BOUNDS_PENALTY: f64 = -2.0;
const SHORT_GAME_MISS: f64 = -0.5;
const NEUTRAL: f64 = 0.0;

/// Strokes gained (positive) or lost (negative) by a single shot.
///
/// `distance_to_target` is yards for full swings and feet for putts. A
/// missing, zero or NaN distance scores as neutral, as does any shot type or
/// outcome without a rule. This never fails: malformed input degrades to a
/// defined number. `_par` is accepted for callers but not used.
pub fn calculate_strokes_gained(
    shot_type: ShotType,
    distance_to_target: Option<f64>,
    outcome: Outcome,
    _par: u8,
) -> f64 {
    let distance = match distance_to_target {
        Some(d) if d != 0.0 && !d.is_nan() => d,
        _ => return NEUTRAL,
    };

    match shot_type {
        ShotType::Tee => tee_shot(distance, outcome),
        ShotType::Approach => approach_shot(distance, outcome),
        ShotType::Chip => short_game_shot(Lie::Recovery, distance, outcome),
        ShotType::Bunker => short_game_shot(Lie::Sand, distance, outcome),
        ShotType::Putt => putt(distance, outcome),
        ShotType::Unknown => {
            log::debug!("[SG] No rule for shot type, scoring as neutral");
            NEUTRAL
        }
    }
}

/// Expected strokes saved by moving from `before` to `after_lie` at
/// `after_distance`, net of the stroke just played.
fn gained(before: f64, after_lie: Lie, after_distance: f64) -> f64 {
    before - lookup_expected_strokes(after_lie, after_distance) - 1.0
}

fn tee_shot(distance: f64, outcome: Outcome) -> f64 {
    let before = lookup_expected_strokes(Lie::Tee, distance);
    let remaining = distance * TEE_REMAINING_RATIO;

    match outcome {
        Outcome::Fairway => gained(before, Lie::Fairway, remaining),
        Outcome::Rough => gained(before, Lie::Rough, remaining),
        Outcome::Bunker => gained(before, Lie::Sand, remaining),
        Outcome::Green => gained(before, Lie::Green, DRIVEN_GREEN_PUTT_FEET),
        Outcome::Hazard => HAZARD_PENALTY,
        Outcome::OutOfBounds => OUT_OF_BOUNDS_PENALTY,
        other => unrecognized(ShotType::Tee, other),
    }
}

/// The outcome label doubles as the lie the approach was played from.
fn approach_source(outcome: Outcome) -> Lie {
    match outcome {
        Outcome::Rough => Lie::Rough,
        Outcome::Bunker | Outcome::Sand => Lie::Sand,
        Outcome::Recovery => Lie::Recovery,
        _ => Lie::Fairway,
    }
}

fn approach_shot(distance: f64, outcome: Outcome) -> f64 {
    let before = lookup_expected_strokes(approach_source(outcome), distance);
    let remaining = distance * APPROACH_REMAINING_RATIO;

    match outcome {
        Outcome::Green => {
            let putt_feet = APPROACH_MAX_PUTT_FEET.min(distance * APPROACH_PUTT_RATIO);
            gained(before, Lie::Green, putt_feet)
        }
        Outcome::Fairway => gained(before, Lie::Fairway, remaining),
        Outcome::Rough => gained(before, Lie::Rough, remaining),
        Outcome::Bunker | Outcome::Sand => gained(before, Lie::Sand, remaining),
        Outcome::Hazard => HAZARD_PENALTY,
        Outcome::OutOfBounds => OUT_OF_BOUNDS_PENALTY,
        other => unrecognized(ShotType::Approach, other),
    }
}

/// Chips (from recovery) and greenside bunker shots (from sand).
fn short_game_shot(source: Lie, distance: f64, outcome: Outcome) -> f64 {
    let before = lookup_expected_strokes(source, distance.max(SHORT_GAME_MIN_YARDS));

    match outcome {
        Outcome::Green => {
            let putt_feet = (distance * CHIP_PUTT_RATIO).min(CHIP_MAX_PUTT_FEET);
            gained(before, Lie::Green, putt_feet)
        }
        Outcome::Holed => before - 1.0,
        // Anything short of the green is a miss
        _ => SHORT_GAME_MISS,
    }
}

fn putt(distance: f64, outcome: Outcome) -> f64 {
    let before = lookup_expected_strokes(Lie::Green, distance);

    match outcome {
        Outcome::Holed => before - 1.0,
        Outcome::Good => gained(before, Lie::Green, GOOD_LAG_FEET),
        Outcome::Poor => gained(before, Lie::Green, POOR_LAG_FEET),
        other => unrecognized(ShotType::Putt, other),
    }
}

fn unrecognized(shot_type: ShotType, outcome: Outcome) -> f64 {
    log::debug!(
        "[SG] No rule for {} shot with outcome '{}', scoring as neutral",
        shot_type,
        outcome
    );
    NEUTRAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn sg(shot_type: &str, distance: Option<f64>, outcome: &str) -> f64 {
        calculate_strokes_gained(
            ShotType::from_label(shot_type),
            distance,
            Outcome::from_label(outcome),
            4,
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn tee_to_fairway_uses_seventy_percent_remaining() {
        // tee[400] - fairway[280] - 1
        assert_close(sg("tee", Some(400.0), "fairway"), 3.99 - 3.69 - 1.0);
    }

    #[test]
    fn tee_to_rough_and_bunker() {
        // 300 * 0.7 = 210 floors to 200
        assert_close(sg("tee", Some(300.0), "rough"), 3.71 - 3.42 - 1.0);
        assert_close(sg("tee", Some(300.0), "bunker"), 3.71 - 3.55 - 1.0);
    }

    #[test]
    fn tee_to_green_assumes_twenty_foot_putt() {
        assert_close(sg("tee", Some(300.0), "green"), 3.71 - 1.87 - 1.0);
    }

    #[test]
    fn tee_penalties_ignore_distance() {
        assert_eq!(sg("tee", Some(350.0), "ob"), -2.0);
        assert_eq!(sg("tee", Some(520.0), "ob"), -2.0);
        assert_eq!(sg("tee", Some(350.0), "hazard"), -1.0);
    }

    #[test]
    fn tee_does_not_accept_sand_label() {
        assert_eq!(sg("tee", Some(350.0), "sand"), 0.0);
        assert_eq!(sg("tee", Some(350.0), "recovery"), 0.0);
    }

    #[test]
    fn approach_to_green_from_default_fairway() {
        // fairway[150 -> 140] - green[45 ft -> 40] - 1
        assert_close(sg("approach", Some(150.0), "green"), 2.91 - 2.06 - 1.0);
    }

    #[test]
    fn approach_putt_is_capped_at_ninety_feet() {
        // 400 * 0.3 = 120 ft, capped to 90
        assert_close(sg("approach", Some(400.0), "green"), 4.11 - 2.40 - 1.0);
    }

    #[test]
    fn approach_source_follows_outcome_label() {
        // rough[150 -> 140] - rough[75 -> 60] - 1
        assert_close(sg("approach", Some(150.0), "rough"), 3.15 - 2.91 - 1.0);
        // sand[150 -> 140] - sand[75 -> 60] - 1
        assert_close(sg("approach", Some(150.0), "sand"), 3.22 - 3.15 - 1.0);
        assert_close(sg("approach", Some(150.0), "bunker"), 3.22 - 3.15 - 1.0);
        assert_close(sg("approach", Some(150.0), "fairway"), 2.91 - 2.70 - 1.0);
    }

    #[test]
    fn approach_recovery_has_no_after_rule() {
        assert_eq!(sg("approach", Some(150.0), "recovery"), 0.0);
    }

    #[test]
    fn approach_penalties() {
        assert_eq!(sg("approach", Some(180.0), "hazard"), -1.0);
        assert_eq!(sg("approach", Some(180.0), "ob"), -2.0);
    }

    #[test]
    fn chip_holed_floors_distance_at_twenty_yards() {
        // recovery table starts at 100, so 20 yards reads its first row
        assert_close(sg("chip", Some(15.0), "holed"), 3.80 - 1.0);
    }

    #[test]
    fn chip_onto_green_converts_to_feet() {
        // recovery[20 -> 100] - green[30 ft] - 1
        assert_close(sg("chip", Some(10.0), "green"), 3.80 - 1.98 - 1.0);
        // 25 * 3 = 75 ft, capped at 60
        assert_close(sg("chip", Some(25.0), "green"), 3.80 - 2.21 - 1.0);
    }

    #[test]
    fn bunker_shot_reads_sand_table() {
        assert_close(sg("bunker", Some(10.0), "holed"), 2.53 - 1.0);
        assert_close(sg("bunker", Some(10.0), "green"), 2.53 - 1.98 - 1.0);
    }

    #[test]
    fn short_game_miss_is_half_stroke() {
        assert_eq!(sg("chip", Some(15.0), "rough"), -0.5);
        assert_eq!(sg("bunker", Some(15.0), "miss"), -0.5);
        assert_eq!(sg("chip", Some(15.0), "nonsense"), -0.5);
    }

    #[test]
    fn holed_putt_gains_expected_minus_one() {
        assert_close(sg("putt", Some(10.0), "holed"), 0.61);
    }

    #[test]
    fn lag_putts_use_fixed_leave() {
        // green[30] - green[2 -> 3] - 1
        assert_close(sg("putt", Some(30.0), "good"), 1.98 - 1.04 - 1.0);
        // green[30] - green[5] - 1
        assert_close(sg("putt", Some(30.0), "poor"), 1.98 - 1.23 - 1.0);
    }

    #[test]
    fn unrecognized_putt_outcome_is_neutral() {
        assert_eq!(sg("putt", Some(12.0), "miss"), 0.0);
        assert_eq!(sg("putt", Some(12.0), "hole"), 0.0);
    }

    #[test]
    fn missing_or_zero_distance_is_neutral() {
        for shot_type in ["tee", "approach", "chip", "bunker", "putt", "drive"] {
            assert_eq!(sg(shot_type, None, "holed"), 0.0);
            assert_eq!(sg(shot_type, Some(0.0), "ob"), 0.0);
            assert_eq!(sg(shot_type, Some(f64::NAN), "green"), 0.0);
        }
    }

    #[test]
    fn unknown_shot_type_is_neutral() {
        assert_eq!(sg("layup", Some(150.0), "fairway"), 0.0);
    }

    proptest! {
        #[test]
        fn repeated_calls_agree(
            shot in prop::sample::select(vec!["tee", "approach", "chip", "bunker", "putt", "x"]),
            outcome in prop::sample::select(vec![
                "fairway", "rough", "bunker", "sand", "green", "hazard", "ob",
                "recovery", "holed", "good", "poor", "miss", "?",
            ]),
            distance in proptest::option::of(0.0f64..700.0),
        ) {
            let first = sg(shot, distance, outcome);
            let second = sg(shot, distance, outcome);
            prop_assert_eq!(first.to_bits(), second.to_bits());
            prop_assert!(first.is_finite());
        }

        #[test]
        fn ob_off_the_tee_is_always_two_strokes(distance in 1.0f64..700.0) {
            prop_assert_eq!(sg("tee", Some(distance), "ob"), -2.0);
        }
    }
}
