//! Adapter implementations for interception ports.

pub mod memory;
