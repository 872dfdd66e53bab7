//! Browser resource services.
//!
//! The staging state machine is browser-agnostic; everything that touches
//! `web_sys` lives here:
//!
//! - [`preview`] - object-URL preview references for staged files

pub mod preview;

pub use preview::*;
