//! Argot
//!
//! Embeddable typed command console. Register ordinary Rust functions with
//! typed argument slots, then dispatch raw text lines to them.
//!
//! This crate re-exports [`argot_core`]; see its documentation for the line
//! grammar and the command API.

pub use argot_core::*;
