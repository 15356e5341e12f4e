#![forbid(unsafe_code)]

//! Domain types for the Bloom school dashboard: the focus-session
//! countdown machine, school directory records, and dashboard metrics.

pub mod model;
pub mod time;

pub use time::Clock;
