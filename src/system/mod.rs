//! Core button classification components
pub mod button;
pub mod channel;
pub mod clock;
pub mod config;
pub mod event;
pub mod flags;
pub mod input;
pub mod level;
