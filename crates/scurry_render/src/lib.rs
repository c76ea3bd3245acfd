//! Rendering for the scurry random-walk toy
//!
//! This crate provides the wgpu-based two-pass renderer. Walkers are
//! rasterized as instanced quads into an offscreen trail canvas that is
//! never cleared between frames, so their paths accumulate; the canvas is
//! then blitted to the swapchain.
//!
//! ## Key components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`canvas::TrailCanvas`] - The offscreen accumulation texture
//! - [`pipeline::SquaresPipeline`] - Instanced square rasterization
//! - [`pipeline::BlitPipeline`] - Canvas-to-surface copy
//! - [`renderable`] - Converts the World to GPU instance data

pub mod context;
pub mod canvas;
pub mod pipeline;
pub mod renderable;

// Re-export core types for convenience
pub use scurry_core::{Color, Walker, WalkerKey, World};

pub use context::{RenderContext, RenderInitError};
pub use canvas::TrailCanvas;
pub use pipeline::{BlitPipeline, SquareInstance, SquaresPipeline};
pub use renderable::square_instances;
