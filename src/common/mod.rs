//! Shared value types

pub mod color;
