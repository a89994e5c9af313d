//! Button polling
//!
//! Samples the push button at a fixed period and runs the classifier on every
//! sample. Events go out through the event channel without awaiting, so a slow
//! consumer never stretches the poll period.

use crate::task::event_channel;
use crate::task::resources::ButtonResources;
use button_events::{
    Button, ButtonConfig, ButtonId, ButtonInput, ChannelSink, Clock, Features, Level, Ticks,
};
use defmt::{info, warn};
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Instant, Ticker};

/// Sampling period; well below the debounce delay
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Report lost events at most once per this many polls
const DROP_REPORT_POLLS: u32 = 1000;

/// Gestures enabled for the demo button
static CONFIG: ButtonConfig = ButtonConfig::new()
    .with_features(
        Features::CLICK
            .union(Features::DOUBLE_CLICK)
            .union(Features::LONG_PRESS)
            .union(Features::HEART_BEAT)
            .union(Features::SUPPRESS_AFTER_CLICK)
            .union(Features::SUPPRESS_AFTER_DOUBLE_CLICK)
            .union(Features::SUPPRESS_AFTER_LONG_PRESS)
            .union(Features::SUPPRESS_CLICK_BEFORE_DOUBLE_CLICK),
    )
    .with_heart_beat_interval(10_000);

/// Milliseconds since boot, truncated to the classifier's tick width
struct Uptime;

impl Clock for Uptime {
    fn now(&self) -> Ticks {
        Instant::now().as_millis() as Ticks
    }
}

/// GPIO input as classifier input
struct PinInput(Input<'static>);

impl ButtonInput for PinInput {
    fn read(&mut self) -> Level {
        Level::from(self.0.is_high())
    }
}

/// Button polling task
#[embassy_executor::task]
pub async fn button_poll(r: ButtonResources) {
    // pulled up, so the line idles high and reads low while pressed
    let mut input = PinInput(Input::new(r.btn, Pull::Up));
    let mut button = Button::new(ButtonId(0), Level::High);
    let mut sink = ChannelSink::new(event_channel::sender());
    let mut ticker = Ticker::every(POLL_INTERVAL);
    let mut reported_drops = 0;
    let mut polls: u32 = 0;

    info!("Polling button every {} ms", POLL_INTERVAL.as_millis());
    loop {
        button.check(&CONFIG, &Uptime, &mut input, &mut sink);

        polls = polls.wrapping_add(1);
        if polls % DROP_REPORT_POLLS == 0 && sink.dropped() != reported_drops {
            reported_drops = sink.dropped();
            warn!("{} button events dropped so far", reported_drops);
        }

        ticker.next().await;
    }
}
