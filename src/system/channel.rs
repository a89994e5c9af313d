//! Channel-backed event sink
//!
//! Lets a polling task hand classified events to other tasks through an
//! `embassy-sync` channel without awaiting. The classifier must not block, so
//! events that do not fit into the channel are dropped and logged.

use crate::system::event::{Event, EventSink};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Sender, TrySendError};

/// [`EventSink`] that forwards into an `embassy_sync::channel::Channel`
pub struct ChannelSink<'ch, M: RawMutex, const N: usize> {
    sender: Sender<'ch, M, Event, N>,
    dropped: u32,
}

impl<'ch, M: RawMutex, const N: usize> ChannelSink<'ch, M, N> {
    pub fn new(sender: Sender<'ch, M, Event, N>) -> Self {
        Self { sender, dropped: 0 }
    }

    /// Number of events lost because the channel was full
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<M: RawMutex, const N: usize> EventSink for ChannelSink<'_, M, N> {
    fn handle(&mut self, event: Event) {
        if let Err(TrySendError::Full(event)) = self.sender.try_send(event) {
            self.dropped = self.dropped.wrapping_add(1);
            warn!("event channel full, dropping {}", event.kind.name());
        }
    }
}
