//! Habit cards.

use super::capped_ratio_percent;
use crate::model::habit::Habit;

#[derive(Debug, Clone, PartialEq)]
pub struct HabitCard<'a> {
    pub habit: &'a Habit,
    /// Progress bar fill in `0.0..=100.0`.
    pub percent: f64,
    pub is_complete: bool,
    pub can_increment: bool,
    pub can_decrement: bool,
}

/// Derives the progress bar and control state for one habit.
pub fn habit_card(habit: &Habit) -> HabitCard<'_> {
    HabitCard {
        habit,
        percent: capped_ratio_percent(habit.progress, habit.goal),
        is_complete: habit.is_complete(),
        can_increment: habit.can_increment(),
        can_decrement: habit.can_decrement(),
    }
}

/// Cards for every habit, in store order.
pub fn habit_cards(habits: &[Habit]) -> Vec<HabitCard<'_>> {
    habits.iter().map(habit_card).collect()
}
