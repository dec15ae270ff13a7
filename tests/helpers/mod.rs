//! Test helpers module
//!
//! This module provides a temporary data directory seeded with a baseline
//! dictionary, plus a captured log writer for asserting on absorbed errors.

#![allow(dead_code)]

pub mod log_capture;
pub mod test_context;

pub use log_capture::*;
pub use test_context::*;
