//! Hardware Resource Management
//!
//! Assigns the pins used by the firmware to the tasks that own them.

use assign_resources::assign_resources;
use embassy_rp::peripherals;

assign_resources! {
    /// Push button, wired to ground with the internal pull-up enabled
    button: ButtonResources {
        btn: PIN_16,
    },
    /// Onboard LED
    led: LedResources {
        led_pin: PIN_25,
    },
}
