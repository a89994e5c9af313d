//! Logical input levels
//!
//! A button's raw input is reduced to one of two levels before it reaches the
//! classifier. Which of the two means "pressed" depends on how the switch is
//! wired and is configured per button.

use core::ops::Not;

/// Raw level of a digital input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Line reads low (0)
    Low,
    /// Line reads high (1)
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level == Level::High
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}
