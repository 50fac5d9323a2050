//! Line-scan sensor drivers

pub mod tsl1401;

pub use tsl1401::Tsl1401;
