pub mod button_poll;
pub mod event_channel;
pub mod event_log;
pub mod indicator;
pub mod led_indicate;
pub mod resources;
