//! Settings for the Hydrate Reminder plugin
//!
//! The schema is static data the host runtime renders and persists; this
//! crate never schedules or delivers reminders itself.

#![deny(unsafe_code)]

pub mod common;
pub mod config;
pub mod constants;
pub mod types;
