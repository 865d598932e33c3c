//! Utility Module
//!
//! - [`time`]: Frame timing utilities

pub mod time;

pub use time::Timer;
