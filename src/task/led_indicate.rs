//! LED Indicator Task
//!
//! Drives the onboard LED from the patterns requested through
//! [`indicator`](crate::task::indicator). A new request cuts a running blink
//! sequence short.
use crate::task::indicator::{self, Pattern};
use crate::task::resources::LedResources;
use defmt::info;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Timer};

/// Half period of a blink
const BLINK_INTERVAL: Duration = Duration::from_millis(80);

/// Duration of a heartbeat flash
const FLASH_DURATION: Duration = Duration::from_millis(20);

/// LED indicator task
#[embassy_executor::task]
pub async fn led_indicate(r: LedResources) {
    let mut led = Output::new(r.led_pin, Level::Low);
    let mut steady_on = false;
    let mut pending = None;

    loop {
        let pattern = match pending.take() {
            Some(pattern) => pattern,
            None => indicator::wait().await,
        };
        info!("LED pattern {}", pattern);

        match pattern {
            Pattern::Toggle => {
                steady_on = !steady_on;
            }
            Pattern::Blink(count) => {
                for _ in 0..count * 2 {
                    led.toggle();
                    if let Some(next) = hold(BLINK_INTERVAL).await {
                        pending = Some(next);
                        break;
                    }
                }
            }
            Pattern::Flash => {
                led.toggle();
                Timer::after(FLASH_DURATION).await;
            }
        }

        // back to the steady state after every pattern
        led.set_level(if steady_on { Level::High } else { Level::Low });
    }
}

/// Waits for `duration` unless a new pattern is requested first
async fn hold(duration: Duration) -> Option<Pattern> {
    match select(Timer::after(duration), indicator::wait()).await {
        Either::First(()) => None,
        Either::Second(next) => Some(next),
    }
}
