//! Button event classification
//!
//! Converts a polled, bouncing digital input into clean button events:
//! Pressed, Released, Clicked, DoubleClicked, LongPressed, RepeatPressed,
//! LongReleased and HeartBeat.
//!
//! The classifier never blocks and never reads hardware. The caller samples
//! the line and a millisecond clock, then hands both to [`Button::check_state`]
//! (or [`Button::poll`]) as often as it likes:
//!
//! ```rust
//! use button_events::{Button, ButtonConfig, ButtonId, EventKind, Features, Level};
//!
//! let config = ButtonConfig::new().with_features(Features::LONG_PRESS);
//! let mut button = Button::new(ButtonId(0), Level::High);
//!
//! assert!(button.poll(0, Level::High, &config).is_empty()); // baseline
//! assert!(button.poll(5, Level::Low, &config).is_empty()); // settling
//! let events = button.poll(30, Level::Low, &config);
//! assert_eq!(events.kinds().next(), Some(EventKind::Pressed));
//! ```
//!
//! With the `firmware` feature the crate also builds an RP2350 binary that
//! polls a push button and logs its events over defmt.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod system;

pub use system::button::Button;
pub use system::channel::ChannelSink;
pub use system::clock::{elapsed, Clock, Ticks, MAX_TICK_GAP};
pub use system::config::{ButtonConfig, Features};
pub use system::event::{ButtonId, Event, EventKind, EventSink, Events, MAX_EVENTS_PER_CHECK};
pub use system::flags::Flags;
pub use system::input::ButtonInput;
pub use system::level::Level;
