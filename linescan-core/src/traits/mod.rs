//! Collaborator traits
//!
//! These traits define the interface between the acquisition logic
//! and hardware-specific implementations.

pub mod clock;
pub mod display;
pub mod sensor;

pub use clock::TickClock;
pub use display::{DisplayError, Glyph, GlyphDisplay};
pub use sensor::{Level, SensorLine, SensorLink};
