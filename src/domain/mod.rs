//! Domain layer containing the alarm event types and their codec.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, error codes)
//! - `alarm` - Facility registration and temperature alarm events

pub mod alarm;
pub mod foundation;
