//! Shared test rig: drives one button through a timeline and records every
//! event with the time it fired.
#![allow(dead_code)]

use button_events::{Button, ButtonConfig, ButtonId, EventKind, Level, Ticks};

pub const RELEASED: Level = Level::High;
pub const PRESSED: Level = Level::Low;

pub struct Rig {
    pub button: Button,
    pub config: ButtonConfig,
    pub log: Vec<(Ticks, EventKind)>,
}

impl Rig {
    pub fn new(config: ButtonConfig) -> Self {
        Self {
            button: Button::new(ButtonId(0), RELEASED),
            config,
            log: Vec::new(),
        }
    }

    /// Feeds one sample and returns the kinds it produced
    pub fn sample(&mut self, t: Ticks, level: Level) -> Vec<EventKind> {
        let events = self.button.poll(t, level, &self.config);
        let kinds: Vec<EventKind> = events.kinds().collect();
        self.log.extend(kinds.iter().map(|&kind| (t, kind)));
        kinds
    }

    /// Holds `level` from `from` to `to` (inclusive), polling every `step`
    pub fn hold(&mut self, level: Level, from: Ticks, to: Ticks, step: Ticks) {
        let mut t = from;
        while t <= to {
            self.sample(t, level);
            t += step;
        }
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.log.iter().map(|&(_, kind)| kind).collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.log.iter().filter(|&&(_, k)| k == kind).count()
    }

    pub fn times_of(&self, kind: EventKind) -> Vec<Ticks> {
        self.log
            .iter()
            .filter(|&&(_, k)| k == kind)
            .map(|&(t, _)| t)
            .collect()
    }
}
