//! Strokes-gained estimation for golf shots, with round and club statistics.
//!
//! The estimator ([`calculate_strokes_gained`]) is a pure function over the
//! built-in baseline tables: it does no I/O, holds no state and never fails.

pub mod baseline;
pub mod clubs;
pub mod error;
pub mod history;
pub mod round;
pub mod shot;
pub mod simulate;
pub mod stats;
pub mod strokes_gained;

pub use baseline::{lookup_expected_strokes, BaselineTable, Lie};
pub use error::RecordError;
pub use history::{filter_by_time_period, summarize_history, HistorySummary};
pub use round::{HoleRecord, RoundRecord, RoundSummary, ShotRecord, StrokesGainedBreakdown};
pub use shot::{Direction, Outcome, ShotObservation, ShotType};
pub use strokes_gained::calculate_strokes_gained;
