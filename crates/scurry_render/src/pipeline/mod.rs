//! Render pipelines
//!
//! Two passes per frame: [`SquaresPipeline`] rasterizes walker squares into
//! the trail canvas, [`BlitPipeline`] copies the canvas to the swapchain.

mod types;
mod squares_pipeline;
mod blit_pipeline;

pub use types::{CanvasUniforms, QuadVertex, SquareInstance};
pub use squares_pipeline::SquaresPipeline;
pub use blit_pipeline::BlitPipeline;
