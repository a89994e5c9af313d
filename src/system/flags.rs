//! Per-button condition flags
//!
//! Every flag is set by exactly one detector. Others may read it.
//!
//! | Flag             | Set by                 | Cleared by                                  |
//! |------------------|------------------------|---------------------------------------------|
//! | `DEBOUNCING`     | debounce gate          | debounce gate, once the window elapsed      |
//! | `PRESSED`        | press detector         | release detector                            |
//! | `LONG_PRESSED`   | long-press detector    | release detector                            |
//! | `REPEAT_PRESSED` | repeat-press detector  | release detector                            |
//! | `CLICKED`        | click detector         | click detector, orphaned-click reclaim      |
//! | `DOUBLE_CLICKED` | double-click detector  | release detector                            |
//! | `CLICK_POSTPONED`| click detector         | postponed-click flush, double-click         |
//! | `HEART_RUNNING`  | heartbeat timer        | never                                       |

use core::fmt;

/// Bitset of in-progress conditions of one button
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flags(u16);

impl Flags {
    /// Settle window in progress
    pub const DEBOUNCING: Flags = Flags(1 << 0);
    /// Button currently held
    pub const PRESSED: Flags = Flags(1 << 1);
    /// LongPressed already fired during this hold
    pub const LONG_PRESSED: Flags = Flags(1 << 2);
    /// Repeat sequence started during this hold
    pub const REPEAT_PRESSED: Flags = Flags(1 << 3);
    /// A click is waiting to be paired into a double-click
    pub const CLICKED: Flags = Flags(1 << 4);
    /// DoubleClicked fired during this hold
    pub const DOUBLE_CLICKED: Flags = Flags(1 << 5);
    /// A Clicked event is held back until the double-click window closes
    pub const CLICK_POSTPONED: Flags = Flags(1 << 6);
    /// Heartbeat baseline established
    pub const HEART_RUNNING: Flags = Flags(1 << 7);

    const NAMES: [(Flags, &'static str); 8] = [
        (Flags::DEBOUNCING, "Debouncing"),
        (Flags::PRESSED, "Pressed"),
        (Flags::LONG_PRESSED, "LongPressed"),
        (Flags::REPEAT_PRESSED, "RepeatPressed"),
        (Flags::CLICKED, "Clicked"),
        (Flags::DOUBLE_CLICKED, "DoubleClicked"),
        (Flags::CLICK_POSTPONED, "ClickPostponed"),
        (Flags::HEART_RUNNING, "HeartRunning"),
    ];

    /// No flag set
    pub const fn empty() -> Self {
        Flags(0)
    }

    /// Raw bit representation
    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` if every flag in `other` is set
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Flags) {
        self.0 &= !other.0;
    }
}

impl core::ops::BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for (flag, name) in Self::NAMES.iter() {
            if self.contains(*flag) {
                set.entry(&format_args!("{}", name));
            }
        }
        set.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove_are_independent() {
        let mut flags = Flags::empty();
        flags.insert(Flags::PRESSED);
        flags.insert(Flags::CLICKED);
        assert!(flags.contains(Flags::PRESSED | Flags::CLICKED));

        flags.remove(Flags::PRESSED);
        assert!(!flags.contains(Flags::PRESSED));
        assert!(flags.contains(Flags::CLICKED));
    }

    #[test]
    fn debug_lists_set_flags_by_name() {
        let flags = Flags::PRESSED | Flags::LONG_PRESSED;
        assert_eq!(format!("{:?}", flags), "{Pressed, LongPressed}");
        assert_eq!(format!("{:?}", Flags::empty()), "{}");
    }
}
