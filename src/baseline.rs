use serde::{Deserialize, Serialize};

/// Where the ball lies before a stroke. Each lie has its own baseline table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lie {
    Tee,
    Fairway,
    Rough,
    Sand,
    Recovery,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Yards,
    Feet,
}

impl DistanceUnit {
    pub fn abbreviation(self) -> &'static str {
        match self {
            DistanceUnit::Yards => "yds",
            DistanceUnit::Feet => "ft",
        }
    }
}

impl Lie {
    pub const ALL: [Lie; 6] = [
        Lie::Tee,
        Lie::Fairway,
        Lie::Rough,
        Lie::Sand,
        Lie::Recovery,
        Lie::Green,
    ];

    pub fn table(self) -> &'static BaselineTable {
        match self {
            Lie::Tee => &TEE,
            Lie::Fairway => &FAIRWAY,
            Lie::Rough => &ROUGH,
            Lie::Sand => &SAND,
            Lie::Recovery => &RECOVERY,
            Lie::Green => &GREEN,
        }
    }

    /// Putting distances are measured in feet, everything else in yards.
    pub fn unit(self) -> DistanceUnit {
        match self {
            Lie::Green => DistanceUnit::Feet,
            _ => DistanceUnit::Yards,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lie::Tee => "tee",
            Lie::Fairway => "fairway",
            Lie::Rough => "rough",
            Lie::Sand => "sand",
            Lie::Recovery => "recovery",
            Lie::Green => "green",
        }
    }
}

impl std::fmt::Display for Lie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Expected strokes to hole out, tabulated by distance.
///
/// Entries are `(threshold, expected_strokes)` with strictly increasing
/// thresholds. Lookups floor to the largest threshold not exceeding the
/// query distance; anything shorter than the first threshold uses the first
/// entry. There is no interpolation between rows.
#[derive(Debug)]
pub struct BaselineTable {
    entries: &'static [(f64, f64)],
}

impl BaselineTable {
    const fn new(entries: &'static [(f64, f64)]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(f64, f64)] {
        self.entries
    }

    pub fn expected_strokes(&self, distance: f64) -> f64 {
        // Number of thresholds <= distance; NaN compares false and lands on 0
        let above = self.entries.partition_point(|&(threshold, _)| threshold <= distance);
        self.entries[above.saturating_sub(1)].1
    }
}

/// Floor lookup of expected strokes for `lie` at `distance` (yards, or feet on the green).
pub fn lookup_expected_strokes(lie: Lie, distance: f64) -> f64 {
    lie.table().expected_strokes(distance)
}

// Baseline data from tour averages. Yards unless noted.
static TEE: BaselineTable = BaselineTable::new(&[
    (100.0, 2.92),
    (120.0, 2.99),
    (140.0, 2.97),
    (160.0, 2.99),
    (180.0, 3.05),
    (200.0, 3.12),
    (220.0, 3.17),
    (240.0, 3.25),
    (260.0, 3.45),
    (280.0, 3.65),
    (300.0, 3.71),
    (320.0, 3.79),
    (340.0, 3.86),
    (360.0, 3.92),
    (380.0, 3.96),
    (400.0, 3.99),
    (420.0, 4.02),
    (440.0, 4.08),
    (460.0, 4.17),
    (480.0, 4.28),
    (500.0, 4.41),
    (520.0, 4.54),
    (540.0, 4.65),
    (560.0, 4.74),
    (580.0, 4.79),
    (600.0, 4.82),
]);

static FAIRWAY: BaselineTable = BaselineTable::new(&[
    (20.0, 2.40),
    (40.0, 2.60),
    (60.0, 2.70),
    (80.0, 2.75),
    (100.0, 2.80),
    (120.0, 2.85),
    (140.0, 2.91),
    (160.0, 2.98),
    (180.0, 3.08),
    (200.0, 3.19),
    (220.0, 3.32),
    (240.0, 3.45),
    (260.0, 3.58),
    (280.0, 3.69),
    (300.0, 3.78),
    (320.0, 3.84),
    (340.0, 3.88),
    (360.0, 3.95),
    (380.0, 4.03),
    (400.0, 4.11),
    (420.0, 4.15),
    (440.0, 4.20),
    (460.0, 4.29),
    (480.0, 4.40),
    (500.0, 4.53),
    (520.0, 4.66),
    (540.0, 4.78),
    (560.0, 4.86),
    (580.0, 4.91),
    (600.0, 4.94),
]);

static ROUGH: BaselineTable = BaselineTable::new(&[
    (20.0, 2.59),
    (40.0, 2.78),
    (60.0, 2.91),
    (80.0, 2.96),
    (100.0, 3.02),
    (120.0, 3.08),
    (140.0, 3.15),
    (160.0, 3.23),
    (180.0, 3.31),
    (200.0, 3.42),
    (220.0, 3.53),
    (240.0, 3.64),
    (260.0, 3.74),
    (280.0, 3.83),
    (300.0, 3.90),
    (320.0, 3.95),
    (340.0, 4.02),
    (360.0, 4.11),
    (380.0, 4.21),
    (400.0, 4.30),
    (420.0, 4.34),
    (440.0, 4.39),
    (460.0, 4.48),
    (480.0, 4.59),
    (500.0, 4.72),
    (520.0, 4.85),
    (540.0, 4.97),
    (560.0, 5.05),
    (580.0, 5.10),
    (600.0, 5.13),
]);

static SAND: BaselineTable = BaselineTable::new(&[
    (20.0, 2.53),
    (40.0, 2.82),
    (60.0, 3.15),
    (80.0, 3.24),
    (100.0, 3.23),
    (120.0, 3.21),
    (140.0, 3.22),
    (160.0, 3.28),
    (180.0, 3.40),
    (200.0, 3.55),
    (220.0, 3.70),
    (240.0, 3.84),
    (260.0, 3.93),
    (280.0, 4.00),
    (300.0, 4.04),
    (320.0, 4.12),
    (340.0, 4.26),
    (360.0, 4.41),
    (380.0, 4.55),
    (400.0, 4.69),
    (420.0, 4.73),
    (440.0, 4.78),
    (460.0, 4.87),
    (480.0, 4.98),
    (500.0, 5.11),
    (520.0, 5.24),
    (540.0, 5.36),
    (560.0, 5.44),
    (580.0, 5.49),
    (600.0, 5.52),
]);

static RECOVERY: BaselineTable = BaselineTable::new(&[
    (100.0, 3.80),
    (120.0, 3.78),
    (140.0, 3.80),
    (160.0, 3.81),
    (180.0, 3.82),
    (200.0, 3.87),
    (220.0, 3.92),
    (240.0, 3.97),
    (260.0, 4.03),
    (280.0, 4.10),
    (300.0, 4.20),
    (320.0, 4.31),
    (340.0, 4.44),
    (360.0, 4.56),
    (380.0, 4.66),
    (400.0, 4.75),
    (420.0, 4.79),
    (440.0, 4.84),
    (460.0, 4.93),
    (480.0, 5.04),
    (500.0, 5.17),
    (520.0, 5.30),
    (540.0, 5.42),
    (560.0, 5.50),
    (580.0, 5.55),
    (600.0, 5.58),
]);

// Feet
static GREEN: BaselineTable = BaselineTable::new(&[
    (3.0, 1.04),
    (4.0, 1.13),
    (5.0, 1.23),
    (6.0, 1.34),
    (7.0, 1.42),
    (8.0, 1.50),
    (9.0, 1.56),
    (10.0, 1.61),
    (15.0, 1.78),
    (20.0, 1.87),
    (30.0, 1.98),
    (40.0, 2.06),
    (50.0, 2.14),
    (60.0, 2.21),
    (90.0, 2.40),
]);
