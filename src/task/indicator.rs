//! LED Indicator Signal
//!
//! Lets the event consumer tell the LED task what to show. A newer pattern
//! replaces one that was not picked up yet.
use defmt::Format;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// What the LED should do next
#[derive(Debug, Clone, Copy, PartialEq, Format)]
pub enum Pattern {
    /// Switch between steady on and off
    Toggle,
    /// Blink a few times quickly
    Blink(u8),
    /// One short flash
    Flash,
}

static INDICATOR_CHANGED: Signal<CriticalSectionRawMutex, Pattern> = Signal::new();

/// Requests a pattern from the LED task
pub fn send(pattern: Pattern) {
    INDICATOR_CHANGED.signal(pattern);
}

/// Waits for the next requested pattern
pub async fn wait() -> Pattern {
    INDICATOR_CHANGED.wait().await
}
