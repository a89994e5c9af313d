//! Button event channel
//!
//! Carries classified events from the polling task to the event consumer.

use button_events::Event;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};

/// Capacity of the event channel
pub const CAPACITY: usize = 16;

/// Single-producer, single-consumer channel of button events
static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, Event, CAPACITY> = Channel::new();

/// Sending half, handed to the classifier through a `ChannelSink`
pub fn sender() -> Sender<'static, CriticalSectionRawMutex, Event, CAPACITY> {
    EVENT_CHANNEL.sender()
}

/// Receives the next button event
pub async fn wait() -> Event {
    EVENT_CHANNEL.receiver().receive().await
}
