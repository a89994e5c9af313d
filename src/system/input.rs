//! Raw input source
//!
//! Implemented by whatever reads the physical line (a GPIO driver, a test
//! fixture, a port expander). The classifier never reads hardware itself.

use crate::system::level::Level;

/// Something that can sample the current level of one button line
pub trait ButtonInput {
    /// Reads the undebounced level
    fn read(&mut self) -> Level;
}
