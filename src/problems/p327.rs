//! Rooms of Doom.
//!
//! A traveller passing a chain of security rooms can carry at most C cards
//! and must surrender one per door; extra cards are ferried forward in
//! trips that cost two cards each. M(C, r) cards suffice for r rooms.

use super::Answer;

/// Minimum cards M(C, `rooms`) for capacity `c >= 3`.
pub fn min_cards(c: u64, rooms: u64) -> u64 {
    assert!(c >= 3, "capacity below 3 can never bank a card");
    if c >= rooms + 1 {
        return rooms + 1;
    }
    // cards needed at the door of the last `rooms - 1` rooms
    let next = min_cards(c, rooms - 1);
    let trips = (next - c + 1) / (c - 2);
    let left_over = (next - c + 1) % (c - 2);
    if trips == 0 {
        next + 3
    } else if left_over != 0 {
        (trips + 1) * c + left_over + 2
    } else {
        (trips + 1) * c
    }
}

/// Σ M(C, 30) for C = 3..=40.
pub fn sum_over_capacities(rooms: u64) -> u64 {
    (3..=40).map(|c| min_cards(c, rooms)).sum()
}

pub fn solve() -> Answer {
    Answer::UInt(sum_over_capacities(30))
}
