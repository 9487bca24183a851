//! Utility Module
//!
//! - [`time`]: frame clock used by the render loop

pub mod time;

pub use time::Clock;
