//! Shared utilities for the driver library.

pub mod hex;
