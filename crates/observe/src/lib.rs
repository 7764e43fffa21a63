//! Initialization logic for the logging of the binaries as well as a panic
//! hook that routes panic messages through the same output.

pub mod panic_hook;
pub mod tracing;
