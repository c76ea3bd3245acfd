//! Core types for the scurry random-walk toy
//!
//! This crate provides the simulation-side types, independent of any
//! windowing or GPU concerns:
//!
//! - [`Color`] - An sRGB color and the fixed named palette
//! - [`Walker`] - An agent performing an independent 2D random walk
//! - [`World`] - Container for all walkers, keyed by generational keys
//! - [`WalkerKey`] - Generational key to a walker in the world
//! - [`Simulation`] - The paused/running state machine driving the world

mod color;
mod walker;
mod world;
mod simulation;

pub use color::{Color, PaletteError, PALETTE, palette, sample_distinct};
pub use walker::Walker;
pub use world::{World, WalkerKey, WorldError};
pub use simulation::Simulation;
