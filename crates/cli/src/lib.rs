//! Thunk CLI library
//!
//! Configuration, logging setup and the demonstrations behind the `thunk`
//! binary. Kept as a library so the pieces can be tested without spawning
//! the executable.

pub mod config;
pub mod demo;
pub mod logging;

pub use config::DemoConfig;
