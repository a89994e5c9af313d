//! Event consumer
//!
//! Logs every button event and maps gestures onto LED patterns.

use crate::task::event_channel;
use crate::task::indicator::{self, Pattern};
use button_events::{Event, EventKind};
use defmt::info;

/// Event consumer task
#[embassy_executor::task]
pub async fn event_log() {
    info!("Event log started");
    loop {
        let event = event_channel::wait().await;
        info!(
            "button {}: {} (level {})",
            event.button.0,
            event.kind.name(),
            event.level
        );
        if let Some(pattern) = pattern_for(&event) {
            indicator::send(pattern);
        }
    }
}

/// LED feedback for an event, if any
fn pattern_for(event: &Event) -> Option<Pattern> {
    match event.kind {
        EventKind::Clicked => Some(Pattern::Toggle),
        EventKind::DoubleClicked => Some(Pattern::Blink(2)),
        EventKind::LongPressed => Some(Pattern::Blink(5)),
        EventKind::HeartBeat => Some(Pattern::Flash),
        EventKind::Pressed
        | EventKind::Released
        | EventKind::RepeatPressed
        | EventKind::LongReleased => None,
    }
}
