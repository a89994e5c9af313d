//! Button Configuration
//!
//! Timing thresholds and the set of enabled gestures. One configuration is
//! typically shared by several buttons and is only ever read by the
//! classifier, so it can live in a `static`:
//!
//! ```rust
//! use button_events::{ButtonConfig, Features};
//!
//! static CONFIG: ButtonConfig = ButtonConfig::new()
//!     .with_features(Features::CLICK.union(Features::DOUBLE_CLICK));
//! ```
//!
//! All delays are in [`Ticks`] (milliseconds) and must stay below
//! [`MAX_TICK_GAP`](crate::system::clock::MAX_TICK_GAP).

use crate::system::clock::Ticks;
use core::ops::{BitOr, BitOrAssign};

/// Default settle window
pub const DEBOUNCE_DELAY: Ticks = 20;
/// Default maximum press duration still counted as a click
pub const CLICK_DELAY: Ticks = 200;
/// Default maximum gap between two clicks of a double-click
pub const DOUBLE_CLICK_DELAY: Ticks = 400;
/// Default hold duration before LongPressed
pub const LONG_PRESS_DELAY: Ticks = 1000;
/// Default hold duration before the first RepeatPressed
pub const REPEAT_PRESS_DELAY: Ticks = 1000;
/// Default period between RepeatPressed events
pub const REPEAT_PRESS_INTERVAL: Ticks = 200;
/// Default period between HeartBeat events
pub const HEART_BEAT_INTERVAL: Ticks = 5000;

/// Set of enabled gestures and suppression policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Features(u16);

impl Features {
    /// Emit Clicked
    pub const CLICK: Features = Features(1 << 0);
    /// Emit DoubleClicked
    pub const DOUBLE_CLICK: Features = Features(1 << 1);
    /// Emit LongPressed
    pub const LONG_PRESS: Features = Features(1 << 2);
    /// Emit RepeatPressed
    pub const REPEAT_PRESS: Features = Features(1 << 3);
    /// Skip Released after a Clicked
    pub const SUPPRESS_AFTER_CLICK: Features = Features(1 << 4);
    /// Skip Released after a DoubleClicked
    pub const SUPPRESS_AFTER_DOUBLE_CLICK: Features = Features(1 << 5);
    /// Replace Released by LongReleased after a LongPressed
    pub const SUPPRESS_AFTER_LONG_PRESS: Features = Features(1 << 6);
    /// Skip Released after RepeatPressed
    pub const SUPPRESS_AFTER_REPEAT_PRESS: Features = Features(1 << 7);
    /// Hold back Clicked until it is clear no DoubleClicked follows
    pub const SUPPRESS_CLICK_BEFORE_DOUBLE_CLICK: Features = Features(1 << 8);
    /// Emit HeartBeat periodically
    pub const HEART_BEAT: Features = Features(1 << 9);

    /// Every suppression policy
    pub const SUPPRESS_ALL: Features = Features(
        Self::SUPPRESS_AFTER_CLICK.0
            | Self::SUPPRESS_AFTER_DOUBLE_CLICK.0
            | Self::SUPPRESS_AFTER_LONG_PRESS.0
            | Self::SUPPRESS_AFTER_REPEAT_PRESS.0
            | Self::SUPPRESS_CLICK_BEFORE_DOUBLE_CLICK.0,
    );

    /// Nothing enabled; only Pressed and Released are emitted
    pub const fn empty() -> Self {
        Features(0)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn union(self, other: Features) -> Self {
        Features(self.0 | other.0)
    }

    /// `true` if every feature in `other` is enabled
    pub const fn contains(self, other: Features) -> bool {
        self.0 & other.0 == other.0
    }

    /// `true` if at least one feature in `other` is enabled
    pub const fn intersects(self, other: Features) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Features) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Features) {
        self.0 &= !other.0;
    }
}

impl BitOr for Features {
    type Output = Features;

    fn bitor(self, rhs: Features) -> Features {
        self.union(rhs)
    }
}

impl BitOrAssign for Features {
    fn bitor_assign(&mut self, rhs: Features) {
        self.insert(rhs);
    }
}

/// Timing thresholds and enabled features shared by one or more buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Minimum time a new level must persist before it is accepted
    pub debounce_delay: Ticks,
    /// Press-to-release time below which a release counts as a click
    pub click_delay: Ticks,
    /// Click-to-click time below which the second click is a double-click.
    /// Also the window after which an unpaired click is reclaimed.
    pub double_click_delay: Ticks,
    /// Hold time before LongPressed
    pub long_press_delay: Ticks,
    /// Hold time before the first RepeatPressed
    pub repeat_press_delay: Ticks,
    /// Period of RepeatPressed once repeating
    pub repeat_press_interval: Ticks,
    /// Period of HeartBeat
    pub heart_beat_interval: Ticks,
    /// Enabled gestures and suppression policies
    pub features: Features,
}

impl ButtonConfig {
    /// Default timings with no optional feature enabled
    pub const fn new() -> Self {
        Self {
            debounce_delay: DEBOUNCE_DELAY,
            click_delay: CLICK_DELAY,
            double_click_delay: DOUBLE_CLICK_DELAY,
            long_press_delay: LONG_PRESS_DELAY,
            repeat_press_delay: REPEAT_PRESS_DELAY,
            repeat_press_interval: REPEAT_PRESS_INTERVAL,
            heart_beat_interval: HEART_BEAT_INTERVAL,
            features: Features::empty(),
        }
    }

    pub const fn with_debounce_delay(mut self, delay: Ticks) -> Self {
        self.debounce_delay = delay;
        self
    }

    pub const fn with_click_delay(mut self, delay: Ticks) -> Self {
        self.click_delay = delay;
        self
    }

    pub const fn with_double_click_delay(mut self, delay: Ticks) -> Self {
        self.double_click_delay = delay;
        self
    }

    pub const fn with_long_press_delay(mut self, delay: Ticks) -> Self {
        self.long_press_delay = delay;
        self
    }

    pub const fn with_repeat_press_delay(mut self, delay: Ticks) -> Self {
        self.repeat_press_delay = delay;
        self
    }

    pub const fn with_repeat_press_interval(mut self, interval: Ticks) -> Self {
        self.repeat_press_interval = interval;
        self
    }

    pub const fn with_heart_beat_interval(mut self, interval: Ticks) -> Self {
        self.heart_beat_interval = interval;
        self
    }

    /// Adds `features` to the enabled set
    pub const fn with_features(mut self, features: Features) -> Self {
        self.features = self.features.union(features);
        self
    }

    /// `true` if every feature in `features` is enabled
    pub const fn is_feature(&self, features: Features) -> bool {
        self.features.contains(features)
    }

    pub fn set_feature(&mut self, features: Features) {
        self.features.insert(features);
    }

    pub fn clear_feature(&mut self, features: Features) {
        self.features.remove(features);
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new()
    }
}
