//! Button Classifier
//!
//! Turns a stream of `(timestamp, raw level)` samples of one button into
//! debounced, temporally qualified events.
//!
//! # Pass structure
//!
//! Every call to [`Button::check_state`] runs the same fixed sequence:
//!
//! 1. heartbeat timer (always, even while debouncing)
//! 2. debounce gate; the rest only runs once the gate accepts the sample
//! 3. initialization, which swallows the first confirmed level
//! 4. postponed-click flush and orphaned-click reclaim
//! 5. long-press and repeat-press timers
//! 6. change detection, which fires Pressed or Released (with click and
//!    double-click classification on release)
//!
//! `now` is captured once per pass, so time spent in the sink does not skew
//! later timer comparisons within the same pass.

use crate::system::clock::{elapsed, Clock, Ticks};
use crate::system::config::{ButtonConfig, Features};
use crate::system::event::{ButtonId, Event, EventKind, EventSink, Events};
use crate::system::flags::Flags;
use crate::system::input::ButtonInput;
use crate::system::level::Level;

/// Debouncing and classification state of one physical button
///
/// Owned by the caller and fed one sample at a time. The configuration is
/// passed in on every pass so several buttons can share it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    id: ButtonId,
    released_level: Level,
    /// `None` until the first sample is confirmed
    last_level: Option<Level>,
    flags: Flags,
    last_debounce_time: Ticks,
    last_press_time: Ticks,
    last_click_time: Ticks,
    last_repeat_press_time: Ticks,
    last_heart_beat_time: Ticks,
}

impl Button {
    /// Creates a button whose line reads `released_level` while not pressed
    pub const fn new(id: ButtonId, released_level: Level) -> Self {
        Self {
            id,
            released_level,
            last_level: None,
            flags: Flags::empty(),
            last_debounce_time: 0,
            last_press_time: 0,
            last_click_time: 0,
            last_repeat_press_time: 0,
            last_heart_beat_time: 0,
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// Level the line reads while the button is not pressed
    pub fn released_level(&self) -> Level {
        self.released_level
    }

    /// Level the line reads while the button is pressed
    pub fn active_level(&self) -> Level {
        !self.released_level
    }

    pub fn set_released_level(&mut self, level: Level) {
        self.released_level = level;
    }

    /// Last debounced level, `None` before the first confirmed sample
    pub fn last_level(&self) -> Option<Level> {
        self.last_level
    }

    pub fn is_released(&self, level: Level) -> bool {
        level == self.released_level
    }

    /// Current condition flags, mostly useful for diagnostics
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Samples `input` and `clock` once and runs a classifier pass
    pub fn check<C, I, S>(&mut self, config: &ButtonConfig, clock: &C, input: &mut I, sink: &mut S)
    where
        C: Clock + ?Sized,
        I: ButtonInput + ?Sized,
        S: EventSink + ?Sized,
    {
        let level = input.read();
        self.check_state(clock.now(), level, config, sink);
    }

    /// Runs a classifier pass and returns the events it produced, in order
    pub fn poll(&mut self, now: Ticks, level: Level, config: &ButtonConfig) -> Events {
        let mut events = Events::new();
        self.check_state(now, level, config, &mut events);
        events
    }

    /// Runs a classifier pass, dispatching every detected event to `sink`
    pub fn check_state<S>(&mut self, now: Ticks, level: Level, config: &ButtonConfig, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        self.check_heart_beat(now, config, sink);

        if self.check_debounced(now, level, config) && self.check_initialized(level) {
            self.check_event(now, level, config, sink);
        }
    }

    fn check_event<S>(&mut self, now: Ticks, level: Level, config: &ButtonConfig, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        // Click state has to decay even when click features were switched off
        // after it was recorded, otherwise a stale click pairs with a fresh one.
        self.check_postponed_click(now, config, sink);
        self.check_orphaned_click(now, config);

        if config.is_feature(Features::LONG_PRESS) {
            self.check_long_press(now, level, config, sink);
        }
        if config.is_feature(Features::REPEAT_PRESS) {
            self.check_repeat_press(now, level, config, sink);
        }
        if self.last_level != Some(level) {
            self.check_changed(now, level, config, sink);
        }
    }

    /// Returns `true` once `level` can be trusted
    fn check_debounced(&mut self, now: Ticks, level: Level, config: &ButtonConfig) -> bool {
        if self.flags.contains(Flags::DEBOUNCING) {
            // Further bounces inside the window are not inspected; the window
            // only restarts on the change that opened it.
            if elapsed(now, self.last_debounce_time) >= config.debounce_delay {
                self.clear_flag(Flags::DEBOUNCING);
                true
            } else {
                false
            }
        } else {
            match self.last_level {
                // a baseline has nothing to settle against
                None => true,
                Some(last) if last == level => true,
                Some(_) => {
                    self.set_flag(Flags::DEBOUNCING);
                    self.last_debounce_time = now;
                    false
                }
            }
        }
    }

    /// Records the first confirmed level without firing anything
    ///
    /// The first sample is taken as is, without a debounce window, so a bounce
    /// caught on that sample becomes the baseline. The next confirmed change
    /// corrects it.
    fn check_initialized(&mut self, level: Level) -> bool {
        if self.last_level.is_some() {
            return true;
        }
        trace!("button {} initialized", self.id.0);
        self.last_level = Some(level);
        false
    }

    fn check_long_press<S>(&mut self, now: Ticks, level: Level, config: &ButtonConfig, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        if self.is_released(level) {
            return;
        }

        if self.flags.contains(Flags::PRESSED)
            && !self.flags.contains(Flags::LONG_PRESSED)
            && elapsed(now, self.last_press_time) >= config.long_press_delay
        {
            self.set_flag(Flags::LONG_PRESSED);
            self.dispatch(EventKind::LongPressed, sink);
        }
    }

    fn check_repeat_press<S>(&mut self, now: Ticks, level: Level, config: &ButtonConfig, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        if self.is_released(level) || !self.flags.contains(Flags::PRESSED) {
            return;
        }

        if self.flags.contains(Flags::REPEAT_PRESSED) {
            if elapsed(now, self.last_repeat_press_time) >= config.repeat_press_interval {
                self.dispatch(EventKind::RepeatPressed, sink);
                self.last_repeat_press_time = now;
            }
        } else if elapsed(now, self.last_press_time) >= config.repeat_press_delay {
            // first repeat fires right away, the interval applies afterwards
            self.set_flag(Flags::REPEAT_PRESSED);
            self.dispatch(EventKind::RepeatPressed, sink);
            self.last_repeat_press_time = now;
        }
    }

    fn check_changed<S>(&mut self, now: Ticks, level: Level, config: &ButtonConfig, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        self.last_level = Some(level);
        if self.is_released(level) {
            self.check_released(now, config, sink);
        } else {
            self.check_pressed(now, sink);
        }
    }

    fn check_pressed<S>(&mut self, now: Ticks, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        self.last_press_time = now;
        self.set_flag(Flags::PRESSED);
        self.dispatch(EventKind::Pressed, sink);
    }

    fn check_released<S>(&mut self, now: Ticks, config: &ButtonConfig, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        // Click classification needs the press timestamp and flags of the hold
        // that just ended, so it runs before anything is cleared. A hold that
        // started before the baseline has no press time and is never a click.
        if self.flags.contains(Flags::PRESSED)
            && config.features.intersects(Features::CLICK | Features::DOUBLE_CLICK)
        {
            self.check_clicked(now, config, sink);
        }

        let was_long_pressed = self.flags.contains(Flags::LONG_PRESSED);
        let suppress = (was_long_pressed && config.is_feature(Features::SUPPRESS_AFTER_LONG_PRESS))
            || (self.flags.contains(Flags::REPEAT_PRESSED)
                && config.is_feature(Features::SUPPRESS_AFTER_REPEAT_PRESS))
            || (self.flags.contains(Flags::CLICKED)
                && config.is_feature(Features::SUPPRESS_AFTER_CLICK))
            || (self.flags.contains(Flags::DOUBLE_CLICKED)
                && config.is_feature(Features::SUPPRESS_AFTER_DOUBLE_CLICK));

        // CLICKED and CLICK_POSTPONED outlive the release; the click logic
        // owns them.
        self.clear_flag(
            Flags::PRESSED | Flags::LONG_PRESSED | Flags::REPEAT_PRESSED | Flags::DOUBLE_CLICKED,
        );

        if !suppress {
            self.dispatch(EventKind::Released, sink);
        } else if was_long_pressed {
            self.dispatch(EventKind::LongReleased, sink);
        }
    }

    fn check_clicked<S>(&mut self, now: Ticks, config: &ButtonConfig, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        if elapsed(now, self.last_press_time) >= config.click_delay {
            self.clear_flag(Flags::CLICKED);
            return;
        }

        if config.is_feature(Features::DOUBLE_CLICK) {
            self.check_double_clicked(now, config, sink);
        }

        // Swallowing the second click of a double-click also keeps a third
        // click from pairing into another double-click.
        if self.flags.contains(Flags::DOUBLE_CLICKED) {
            self.clear_flag(Flags::CLICKED);
            return;
        }

        self.last_click_time = now;
        self.set_flag(Flags::CLICKED);
        if config.is_feature(Features::SUPPRESS_CLICK_BEFORE_DOUBLE_CLICK) {
            self.set_flag(Flags::CLICK_POSTPONED);
        } else {
            self.dispatch(EventKind::Clicked, sink);
        }
    }

    fn check_double_clicked<S>(&mut self, now: Ticks, config: &ButtonConfig, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        if !self.flags.contains(Flags::CLICKED) {
            self.clear_flag(Flags::DOUBLE_CLICKED);
            return;
        }

        if elapsed(now, self.last_click_time) >= config.double_click_delay {
            // an expired postponed click was already flushed earlier in the pass
            self.clear_flag(Flags::DOUBLE_CLICKED);
            return;
        }

        // the postponed first click is superseded and must never fire
        self.clear_flag(Flags::CLICK_POSTPONED);
        self.set_flag(Flags::DOUBLE_CLICKED);
        self.dispatch(EventKind::DoubleClicked, sink);
    }

    /// Drops a click that was not paired within the double-click window
    fn check_orphaned_click(&mut self, now: Ticks, config: &ButtonConfig) {
        if self.flags.contains(Flags::CLICKED)
            && elapsed(now, self.last_click_time) >= config.double_click_delay
        {
            self.clear_flag(Flags::CLICKED);
        }
    }

    /// Fires a held-back Clicked once no double-click can follow anymore
    fn check_postponed_click<S>(&mut self, now: Ticks, config: &ButtonConfig, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        if self.flags.contains(Flags::CLICK_POSTPONED)
            && elapsed(now, self.last_click_time) >= config.double_click_delay
        {
            self.dispatch(EventKind::Clicked, sink);
            self.clear_flag(Flags::CLICK_POSTPONED);
        }
    }

    fn check_heart_beat<S>(&mut self, now: Ticks, config: &ButtonConfig, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        if !config.is_feature(Features::HEART_BEAT) {
            return;
        }

        if !self.flags.contains(Flags::HEART_RUNNING) {
            self.set_flag(Flags::HEART_RUNNING);
            self.last_heart_beat_time = now;
            return;
        }

        if elapsed(now, self.last_heart_beat_time) >= config.heart_beat_interval {
            // carries the last confirmed level, not the sample of this pass
            self.dispatch(EventKind::HeartBeat, sink);
            self.last_heart_beat_time = now;
        }
    }

    fn dispatch<S>(&self, kind: EventKind, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        debug!("button {}: {}", self.id.0, kind.name());
        sink.handle(Event {
            button: self.id,
            kind,
            // every dispatching pass runs after the baseline pass
            level: self.last_level.unwrap_or(self.released_level),
        });
    }

    fn set_flag(&mut self, flag: Flags) {
        trace!("button {} set flags {=u16:#x}", self.id.0, flag.bits());
        self.flags.insert(flag);
    }

    fn clear_flag(&mut self, flag: Flags) {
        self.flags.remove(flag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    const RELEASED: Level = Level::High;
    const PRESSED: Level = Level::Low;

    fn kinds(events: &Events) -> Vec<EventKind> {
        events.kinds().collect()
    }

    /// Button with its baseline already established as released at t=0
    fn idle_button() -> Button {
        let mut button = Button::new(ButtonId(1), RELEASED);
        assert!(button.poll(0, RELEASED, &ButtonConfig::new()).is_empty());
        button
    }

    /// Presses at `t` and returns the time the press is confirmed
    fn press(button: &mut Button, t: Ticks, config: &ButtonConfig) -> Ticks {
        assert!(button.poll(t, PRESSED, config).is_empty());
        let confirmed = t + config.debounce_delay;
        let events = button.poll(confirmed, PRESSED, config);
        assert_eq!(kinds(&events), [EventKind::Pressed]);
        confirmed
    }

    #[test]
    fn first_sample_establishes_baseline_without_event() {
        let config = ButtonConfig::new();
        let mut button = Button::new(ButtonId(1), RELEASED);

        assert!(button.poll(0, PRESSED, &config).is_empty());
        assert_eq!(button.last_level(), Some(PRESSED));
        assert!(!button.flags().contains(Flags::PRESSED));
    }

    #[test]
    fn change_is_held_back_for_the_debounce_window() {
        let config = ButtonConfig::new();
        let mut button = idle_button();

        assert!(button.poll(5, PRESSED, &config).is_empty());
        assert!(button.flags().contains(Flags::DEBOUNCING));
        assert!(button.poll(24, PRESSED, &config).is_empty());

        let events = button.poll(25, PRESSED, &config);
        assert_eq!(kinds(&events), [EventKind::Pressed]);
        assert!(!button.flags().contains(Flags::DEBOUNCING));
        assert_eq!(events.as_slice()[0].level, PRESSED);
    }

    #[test]
    fn bounce_back_within_window_fires_nothing() {
        let config = ButtonConfig::new();
        let mut button = idle_button();

        assert!(button.poll(5, PRESSED, &config).is_empty());
        assert!(button.poll(10, RELEASED, &config).is_empty());
        assert!(button.poll(15, PRESSED, &config).is_empty());
        // window over and the line is back at the released level
        assert!(button.poll(30, RELEASED, &config).is_empty());
        assert_eq!(button.last_level(), Some(RELEASED));
    }

    #[test]
    fn active_high_wiring() {
        let config = ButtonConfig::new();
        let mut button = Button::new(ButtonId(2), Level::Low);
        assert_eq!(button.active_level(), Level::High);

        button.poll(0, Level::Low, &config);
        button.poll(1, Level::High, &config);
        let events = button.poll(21, Level::High, &config);
        assert_eq!(kinds(&events), [EventKind::Pressed]);
        assert_eq!(events.as_slice()[0].button, ButtonId(2));
    }

    #[test]
    fn release_after_short_press_without_features() {
        let config = ButtonConfig::new();
        let mut button = idle_button();
        let t = press(&mut button, 100, &config);

        button.poll(t + 50, RELEASED, &config);
        let events = button.poll(t + 70, RELEASED, &config);
        assert_eq!(kinds(&events), [EventKind::Released]);
        assert!(button.flags().is_empty());
    }

    #[test]
    fn click_fires_before_released() {
        let config = ButtonConfig::new().with_features(Features::CLICK);
        let mut button = idle_button();
        let t = press(&mut button, 100, &config);

        button.poll(t + 50, RELEASED, &config);
        let events = button.poll(t + 70, RELEASED, &config);
        assert_eq!(kinds(&events), [EventKind::Clicked, EventKind::Released]);
        assert!(button.flags().contains(Flags::CLICKED));
    }

    #[test]
    fn slow_release_is_not_a_click() {
        let config = ButtonConfig::new().with_features(Features::CLICK);
        let mut button = idle_button();
        let t = press(&mut button, 100, &config);

        button.poll(t + 300, RELEASED, &config);
        let events = button.poll(t + 320, RELEASED, &config);
        assert_eq!(kinds(&events), [EventKind::Released]);
        assert!(!button.flags().contains(Flags::CLICKED));
    }

    #[test]
    fn suppress_after_click_hides_released() {
        let config = ButtonConfig::new()
            .with_features(Features::CLICK | Features::SUPPRESS_AFTER_CLICK);
        let mut button = idle_button();
        let t = press(&mut button, 100, &config);

        button.poll(t + 50, RELEASED, &config);
        let events = button.poll(t + 70, RELEASED, &config);
        assert_eq!(kinds(&events), [EventKind::Clicked]);
    }

    #[test]
    fn long_press_fires_once_then_long_released() {
        let config = ButtonConfig::new()
            .with_features(Features::LONG_PRESS | Features::SUPPRESS_AFTER_LONG_PRESS);
        let mut button = idle_button();
        let t = press(&mut button, 100, &config);

        assert!(button.poll(t + 999, PRESSED, &config).is_empty());
        assert_eq!(kinds(&button.poll(t + 1000, PRESSED, &config)), [EventKind::LongPressed]);
        for dt in (1010..3000).step_by(10) {
            assert!(button.poll(t + dt, PRESSED, &config).is_empty());
        }

        button.poll(t + 3000, RELEASED, &config);
        let events = button.poll(t + 3020, RELEASED, &config);
        assert_eq!(kinds(&events), [EventKind::LongReleased]);
    }

    #[test]
    fn repeat_press_starts_after_delay_then_keeps_interval() {
        let config = ButtonConfig::new().with_features(Features::REPEAT_PRESS);
        let mut button = idle_button();
        let t = press(&mut button, 100, &config);

        assert!(button.poll(t + 999, PRESSED, &config).is_empty());
        assert_eq!(kinds(&button.poll(t + 1000, PRESSED, &config)), [EventKind::RepeatPressed]);
        assert!(button.poll(t + 1199, PRESSED, &config).is_empty());
        assert_eq!(kinds(&button.poll(t + 1200, PRESSED, &config)), [EventKind::RepeatPressed]);
        assert_eq!(kinds(&button.poll(t + 1400, PRESSED, &config)), [EventKind::RepeatPressed]);
    }

    #[test]
    fn suppress_after_repeat_press_hides_released() {
        let config = ButtonConfig::new()
            .with_features(Features::REPEAT_PRESS | Features::SUPPRESS_AFTER_REPEAT_PRESS);
        let mut button = idle_button();
        let t = press(&mut button, 100, &config);
        button.poll(t + 1000, PRESSED, &config);

        button.poll(t + 1100, RELEASED, &config);
        assert!(button.poll(t + 1120, RELEASED, &config).is_empty());
        assert!(!button.flags().contains(Flags::REPEAT_PRESSED));
    }

    #[test]
    fn heart_beat_runs_while_debouncing() {
        let config = ButtonConfig::new()
            .with_features(Features::HEART_BEAT)
            .with_heart_beat_interval(100);
        let mut button = idle_button();

        assert!(button.poll(10, RELEASED, &config).is_empty());
        assert!(button.poll(105, PRESSED, &config).is_empty());
        assert!(button.flags().contains(Flags::DEBOUNCING));

        let events = button.poll(110, PRESSED, &config);
        assert_eq!(kinds(&events), [EventKind::HeartBeat]);
        // level of the last confirmed sample, not the one being debounced
        assert_eq!(events.as_slice()[0].level, RELEASED);
    }

    #[test]
    fn first_heart_beat_carries_the_baseline_level() {
        let config = ButtonConfig::new()
            .with_features(Features::HEART_BEAT)
            .with_heart_beat_interval(0);
        let mut button = Button::new(ButtonId(1), RELEASED);
        let mut events = Events::new();

        // the first pass arms the timer and takes the baseline together
        button.check_state(0, RELEASED, &config, &mut events);
        assert!(events.is_empty());

        button.check_state(0, RELEASED, &config, &mut events);
        assert_eq!(events.kinds().collect::<Vec<_>>(), [EventKind::HeartBeat]);
        assert_eq!(events.as_slice()[0].level, RELEASED);
    }

    #[test]
    fn timers_survive_counter_wrap() {
        let config = ButtonConfig::new().with_features(Features::LONG_PRESS);
        let mut button = Button::new(ButtonId(1), RELEASED);
        let start = Ticks::MAX - 500;
        button.poll(start, RELEASED, &config);
        let t = press(&mut button, start + 10, &config);

        assert!(button.poll(t.wrapping_add(999), PRESSED, &config).is_empty());
        let events = button.poll(t.wrapping_add(1000), PRESSED, &config);
        assert_eq!(kinds(&events), [EventKind::LongPressed]);
    }

    #[test]
    fn check_reads_clock_and_input() {
        struct FixedClock(Ticks);
        impl Clock for FixedClock {
            fn now(&self) -> Ticks {
                self.0
            }
        }
        struct Line(Level);
        impl ButtonInput for Line {
            fn read(&mut self) -> Level {
                self.0
            }
        }

        let config = ButtonConfig::new();
        let mut button = Button::new(ButtonId(7), RELEASED);
        let mut line = Line(RELEASED);
        let mut seen = Vec::new();
        let mut sink = |event: Event| seen.push(event.kind);

        button.check(&config, &FixedClock(0), &mut line, &mut sink);
        line.0 = PRESSED;
        button.check(&config, &FixedClock(1), &mut line, &mut sink);
        button.check(&config, &FixedClock(30), &mut line, &mut sink);

        assert_eq!(seen, [EventKind::Pressed]);
    }
}
