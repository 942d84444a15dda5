use chrono::NaiveDate;
use rand::Rng;

use crate::round::{HoleRecord, RoundRecord, ShotRecord};
use crate::shot::{Direction, Outcome, ShotType};

const HOLES: u8 = 18;

/// Generates a plausible 18-hole round for demos and tests.
///
/// Shot outcomes are random but each hole is internally consistent: the
/// score equals the number of shots and putts/GIR follow from the sequence.
pub fn simulate_round<R: Rng + ?Sized>(rng: &mut R, course_name: &str, date: NaiveDate) -> RoundRecord {
    let holes = (1..=HOLES).map(|n| simulate_hole(rng, n)).collect();
    RoundRecord {
        course_name: course_name.to_string(),
        date,
        tee_box: Some("Blue".to_string()),
        holes,
    }
}

fn par_for(hole_number: u8) -> u8 {
    if hole_number % 5 == 0 {
        5
    } else if hole_number % 4 == 0 {
        3
    } else {
        4
    }
}

fn club_for(yards: f64) -> &'static str {
    match yards {
        y if y < 120.0 => "PW",
        y if y < 170.0 => "7 Iron",
        y if y < 210.0 => "5 Iron",
        _ => "3 Wood",
    }
}

struct HoleBuilder {
    shots: Vec<ShotRecord>,
}

impl HoleBuilder {
    fn push(
        &mut self,
        shot_type: ShotType,
        club: &str,
        distance_to_target: f64,
        shot_distance: f64,
        outcome: Outcome,
    ) {
        let putt_length = (shot_type == ShotType::Putt).then_some(distance_to_target);
        self.shots.push(ShotRecord {
            shot_number: self.shots.len() as u32 + 1,
            club_name: Some(club.to_string()),
            shot_type,
            distance_to_target: Some(distance_to_target),
            shot_distance: Some(shot_distance),
            outcome,
            successful_strike: Some(!matches!(
                outcome,
                Outcome::Rough | Outcome::Bunker | Outcome::Poor
            )),
            direction: None,
            putt_length,
        });
    }

    fn aim(&mut self, direction: Direction) {
        if let Some(shot) = self.shots.last_mut() {
            shot.direction = Some(direction);
        }
    }
}

fn miss_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    match rng.gen_range(0..3) {
        0 => Direction::Left,
        1 => Direction::Right,
        _ => Direction::Short,
    }
}

fn simulate_hole<R: Rng + ?Sized>(rng: &mut R, hole_number: u8) -> HoleRecord {
    let par = par_for(hole_number);
    let length: f64 = match par {
        3 => rng.gen_range(130..=210) as f64,
        4 => rng.gen_range(330..=450) as f64,
        _ => rng.gen_range(480..=570) as f64,
    };

    let mut hole = HoleBuilder { shots: Vec::new() };
    let mut remaining = length;
    let mut fairway_hit = None;

    if par >= 4 {
        let drive = rng.gen_range(220.0..285.0_f64).round();
        let roll: f64 = rng.gen();
        let outcome = if roll < 0.55 {
            Outcome::Fairway
        } else if roll < 0.88 {
            Outcome::Rough
        } else {
            Outcome::Bunker
        };
        hole.push(ShotType::Tee, "Driver", remaining, drive, outcome);
        let direction = if outcome == Outcome::Fairway {
            Direction::Center
        } else {
            miss_direction(rng)
        };
        hole.aim(direction);
        fairway_hit = Some(outcome == Outcome::Fairway);
        remaining = (remaining - drive).max(40.0).round();
    }

    if par == 5 {
        let leave = rng.gen_range(80.0..130.0_f64).round();
        let advance = (remaining - leave).max(0.0);
        hole.push(ShotType::Approach, club_for(advance), remaining, advance, Outcome::Fairway);
        hole.aim(Direction::Center);
        remaining = leave;
    }

    // Shot into the green, played from the tee on par 3s
    let into_green = if par == 3 {
        ShotType::Tee
    } else {
        ShotType::Approach
    };
    let on_green = rng.gen_bool(0.55);
    let mut short_game_lie = None;
    if on_green {
        hole.push(into_green, club_for(remaining), remaining, remaining, Outcome::Green);
        hole.aim(Direction::Target);
    } else {
        let miss = if rng.gen_bool(0.3) {
            Outcome::Bunker
        } else {
            Outcome::Rough
        };
        let left = rng.gen_range(5.0..25.0_f64).round();
        hole.push(
            into_green,
            club_for(remaining),
            remaining,
            (remaining - left).max(0.0),
            miss,
        );
        let direction = miss_direction(rng);
        hole.aim(direction);
        short_game_lie = Some((miss, left));
    }

    let mut first_putt_feet = (remaining * 0.3).clamp(4.0, 60.0).round();
    let mut holed_out = false;
    if let Some((lie, yards)) = short_game_lie {
        let (shot_type, club) = if lie == Outcome::Bunker {
            (ShotType::Bunker, "SW")
        } else {
            (ShotType::Chip, "GW")
        };
        if rng.gen_bool(0.05) {
            hole.push(shot_type, club, yards, yards, Outcome::Holed);
            holed_out = true;
        } else {
            hole.push(shot_type, club, yards, yards, Outcome::Green);
            first_putt_feet = rng.gen_range(3.0..15.0_f64).round();
        }
    }

    let strokes_to_green = hole.shots.len() as u8;
    let putts = if holed_out {
        0
    } else {
        simulate_putts(rng, &mut hole, first_putt_feet)
    };

    let score = hole.shots.len() as u32;
    HoleRecord {
        hole_number,
        par,
        distance: Some(length as u32),
        score: Some(score),
        fairway_hit,
        green_in_regulation: Some(!holed_out && strokes_to_green + 2 <= par),
        num_putts: Some(putts),
        num_penalties: 0,
        shots: hole.shots,
    }
}

fn simulate_putts<R: Rng + ?Sized>(rng: &mut R, hole: &mut HoleBuilder, first_feet: f64) -> u32 {
    if first_feet <= 6.0 && rng.gen_bool(0.6) {
        hole.push(ShotType::Putt, "Putter", first_feet, first_feet, Outcome::Holed);
        return 1;
    }

    if rng.gen_bool(0.7) {
        hole.push(ShotType::Putt, "Putter", first_feet, first_feet - 2.0, Outcome::Good);
        hole.push(ShotType::Putt, "Putter", 2.0, 2.0, Outcome::Holed);
        return 2;
    }

    hole.push(ShotType::Putt, "Putter", first_feet, (first_feet - 5.0).abs(), Outcome::Poor);
    if rng.gen_bool(0.7) {
        hole.push(ShotType::Putt, "Putter", 5.0, 5.0, Outcome::Holed);
        2
    } else {
        hole.push(ShotType::Putt, "Putter", 5.0, 3.0, Outcome::Good);
        hole.push(ShotType::Putt, "Putter", 2.0, 2.0, Outcome::Holed);
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 14).unwrap()
    }

    #[test]
    fn same_seed_same_round() {
        let a = simulate_round(&mut StdRng::seed_from_u64(7), "Links", date());
        let b = simulate_round(&mut StdRng::seed_from_u64(7), "Links", date());
        assert_eq!(a, b);
    }

    #[test]
    fn holes_are_consistent() {
        for seed in 0..20 {
            let round = simulate_round(&mut StdRng::seed_from_u64(seed), "Links", date());
            assert_eq!(round.holes.len(), 18);
            for hole in &round.holes {
                assert_eq!(hole.score, Some(hole.shots.len() as u32));
                let putts = hole
                    .shots
                    .iter()
                    .filter(|s| s.shot_type == ShotType::Putt)
                    .count() as u32;
                assert_eq!(hole.num_putts, Some(putts));
                assert_eq!(hole.fairway_hit.is_some(), hole.par >= 4);
                let last = hole.shots.last().unwrap();
                assert_eq!(last.outcome, Outcome::Holed);
            }
        }
    }

    #[test]
    fn every_hole_starts_from_the_tee() {
        for seed in 0..10 {
            let round = simulate_round(&mut StdRng::seed_from_u64(seed), "Links", date());
            for hole in &round.holes {
                let first = &hole.shots[0];
                assert_eq!(first.shot_type, ShotType::Tee, "hole {}", hole.hole_number);
                assert!(first.direction.is_some());
                if hole.par == 3 {
                    assert_eq!(hole.fairway_hit, None);
                    assert!(hole.breakdown().off_tee != 0.0);
                }
            }
        }
    }

    #[test]
    fn putts_carry_no_direction() {
        let round = simulate_round(&mut StdRng::seed_from_u64(3), "Links", date());
        for (_, shot, _) in round.shot_results() {
            if shot.shot_type == ShotType::Putt {
                assert_eq!(shot.direction, None);
            }
        }
    }

    #[test]
    fn par_pattern() {
        assert_eq!(par_for(1), 4);
        assert_eq!(par_for(4), 3);
        assert_eq!(par_for(5), 5);
        assert_eq!(par_for(20), 5);
    }
}
