//! Pure projections from app state to screen-ready snapshots.
//!
//! # Responsibility
//! - Compute aggregates, partitions and calendar grids from borrowed state.
//!
//! # Invariants
//! - Functions here never mutate state and never fail.
//! - Snapshot ordering follows collection order unless stated otherwise.

pub mod calendar;
pub mod community;
pub mod dashboard;
pub mod habits;
pub mod tasks;

/// Percentage of `part` in `whole`, rounded half away from zero.
///
/// Returns 0 when `whole` is 0.
pub fn rounded_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let percent = (part as f64 / whole as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Habit-style ratio as a percentage capped at 100, unrounded.
pub fn capped_ratio_percent(progress: u32, goal: u32) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    (f64::from(progress) / f64::from(goal) * 100.0).min(100.0)
}
