//! Scurry - colored squares on a random walk
//!
//! Library surface for the scurry application; the interesting parts live
//! in `scurry_core` (simulation) and `scurry_render` (wgpu renderer).

pub mod config;

pub use config::{AppConfig, ConfigError};
