//! Progress stepping for cards and boards.
//!
//! The UI has two buttons. The "increase" button sends the step size
//! itself (10) and any other value is read as "decrease".

use crate::shared::util::validate::{MIN_PROGRESS, MAX_PROGRESS};

pub const PROGRESS_STEP: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease
}

impl Direction {
    pub fn from_signal(value: i32) -> Direction {
        if value == PROGRESS_STEP { Direction::Increase } else { Direction::Decrease }
    }

    fn delta(self) -> i32 {
        match self {
            Direction::Increase => PROGRESS_STEP,
            Direction::Decrease => -PROGRESS_STEP
        }
    }
}

pub fn clamp(progress: i32) -> i32 {
    if progress > MAX_PROGRESS {
        MAX_PROGRESS
    } else if progress < MIN_PROGRESS {
        MIN_PROGRESS
    } else {
        progress
    }
}

pub fn step(progress: i32, direction: Direction) -> i32 {
    clamp(progress.saturating_add(direction.delta()))
}
