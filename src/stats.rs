//! Percentages, averages and display strings for round statistics.

pub fn fairway_percentage(fairways_hit: u32, fairways_total: u32) -> u32 {
    whole_percent(fairways_hit, fairways_total)
}

pub fn gir_percentage(greens_in_regulation: u32, holes: u32) -> u32 {
    whole_percent(greens_in_regulation, holes)
}

fn whole_percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(total) * 100.0).round() as u32
}

/// Putts per hole, rounded to one decimal.
pub fn average_putts(total_putts: u32, holes: u32) -> f64 {
    if holes == 0 {
        return 0.0;
    }
    round_to_tenth(f64::from(total_putts) / f64::from(holes))
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `E` for even, `+2` over, `-1` under.
pub fn format_relative_score(score: Option<i32>) -> String {
    match score {
        None => "N/A".to_string(),
        Some(0) => "E".to_string(),
        Some(s) if s > 0 => format!("+{}", s),
        Some(s) => s.to_string(),
    }
}

/// Signed, one decimal. A missing value shows as `0.0`.
pub fn format_strokes_gained(value: Option<f64>) -> String {
    match value {
        None => "0.0".to_string(),
        Some(v) if v > 0.0 => format!("+{:.1}", v),
        Some(v) => format!("{:.1}", v),
    }
}

pub fn yards_to_meters(yards: f64) -> f64 {
    (yards * 0.9144).round()
}

pub fn feet_to_meters(feet: f64) -> f64 {
    round_to_tenth(feet * 0.3048)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_round_and_guard_zero() {
        assert_eq!(fairway_percentage(7, 14), 50);
        assert_eq!(fairway_percentage(2, 3), 67);
        assert_eq!(fairway_percentage(3, 0), 0);
        assert_eq!(gir_percentage(9, 18), 50);
        assert_eq!(gir_percentage(0, 0), 0);
    }

    #[test]
    fn average_putts_one_decimal() {
        assert_eq!(average_putts(32, 18), 1.8);
        assert_eq!(average_putts(36, 18), 2.0);
        assert_eq!(average_putts(10, 0), 0.0);
    }

    #[test]
    fn relative_score_strings() {
        assert_eq!(format_relative_score(None), "N/A");
        assert_eq!(format_relative_score(Some(0)), "E");
        assert_eq!(format_relative_score(Some(2)), "+2");
        assert_eq!(format_relative_score(Some(-1)), "-1");
    }

    #[test]
    fn strokes_gained_strings() {
        assert_eq!(format_strokes_gained(None), "0.0");
        assert_eq!(format_strokes_gained(Some(0.5)), "+0.5");
        assert_eq!(format_strokes_gained(Some(-0.2)), "-0.2");
        assert_eq!(format_strokes_gained(Some(0.0)), "0.0");
    }

    #[test]
    fn unit_conversions() {
        assert_eq!(yards_to_meters(100.0), 91.0);
        assert_eq!(feet_to_meters(10.0), 3.0);
        assert_eq!(feet_to_meters(20.0), 6.1);
    }
}
