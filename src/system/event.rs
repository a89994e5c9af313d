//! Button Events
//!
//! Classified events and the sinks they are dispatched to.
//!
//! Events are transient: the classifier hands each one to an [`EventSink`] the
//! moment it is detected and keeps no copy. [`Events`] is the sink used when
//! the caller prefers to receive the events of one poll as a list.

use crate::system::level::Level;
use core::fmt;
use heapless::Vec;

/// Upper bound on events produced by a single classifier pass
pub const MAX_EVENTS_PER_CHECK: usize = 8;

/// Identifier of the button an event originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub u8);

/// Kinds of events the classifier emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// Button went to the active level
    Pressed,
    /// Button went back to the released level
    Released,
    /// Short press and release
    Clicked,
    /// Two clicks within the double-click window
    DoubleClicked,
    /// Held beyond the long-press delay
    LongPressed,
    /// Held beyond the repeat delay, then once per repeat interval
    RepeatPressed,
    /// Released after a LongPressed while Released is suppressed
    LongReleased,
    /// Periodic liveness tick, independent of the button
    HeartBeat,
}

impl EventKind {
    /// Display name of the event kind
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Pressed => "Pressed",
            EventKind::Released => "Released",
            EventKind::Clicked => "Clicked",
            EventKind::DoubleClicked => "DoubleClicked",
            EventKind::LongPressed => "LongPressed",
            EventKind::RepeatPressed => "RepeatPressed",
            EventKind::LongReleased => "LongReleased",
            EventKind::HeartBeat => "HeartBeat",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event {
    /// Originating button
    pub button: ButtonId,
    /// What happened
    pub kind: EventKind,
    /// Last confirmed level of the button at dispatch time
    pub level: Level,
}

/// Receiver of classified events
///
/// Called synchronously from inside the classifier pass, once per event and in
/// detection order.
pub trait EventSink {
    fn handle(&mut self, event: Event);
}

impl<F> EventSink for F
where
    F: FnMut(Event),
{
    fn handle(&mut self, event: Event) {
        self(event)
    }
}

/// Ordered events of one or more classifier passes
///
/// Also serves as an event recorder for diagnostics and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    events: Vec<Event, MAX_EVENTS_PER_CHECK>,
}

impl Events {
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter()
    }

    /// Iterates over just the kinds, in dispatch order
    pub fn kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.events.iter().map(|e| e.kind)
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }
}

impl EventSink for Events {
    fn handle(&mut self, event: Event) {
        if self.events.push(event).is_err() {
            warn!("event buffer full, dropping {}", event.kind.name());
        }
    }
}

impl<'a> IntoIterator for &'a Events {
    type Item = &'a Event;
    type IntoIter = core::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl IntoIterator for Events {
    type Item = Event;
    type IntoIter = <Vec<Event, MAX_EVENTS_PER_CHECK> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
