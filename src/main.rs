//! Button event demo firmware
//!
//! Polls a push button on an RP2350, classifies its signal and logs every
//! event over defmt. Clicks toggle the onboard LED, long presses and
//! heartbeats blink it.

#![no_std]
#![no_main]

use crate::task::{button_poll::button_poll, event_log::event_log, led_indicate::led_indicate};
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use task::resources::{AssignedResources, ButtonResources, LedResources};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());
    let r = split_resources!(p);

    defmt::info!("button-events firmware started");

    // consumers first, so no event is dropped at boot
    spawner.spawn(led_indicate(r.led)).unwrap();
    spawner.spawn(event_log()).unwrap();
    spawner.spawn(button_poll(r.button)).unwrap();
}
