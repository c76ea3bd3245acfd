//! GPU-compatible data types for the square rasterization pass
//!
//! These types match the shader layouts exactly and derive Pod and
//! Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// One corner of the unit quad, instanced per walker
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    /// Corner in unit-square space: (0,0) top-left to (1,1) bottom-right
    pub corner: [f32; 2],
}

/// The unit quad as two triangles
pub const UNIT_QUAD: [QuadVertex; 6] = [
    QuadVertex { corner: [0.0, 0.0] },
    QuadVertex { corner: [1.0, 0.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [0.0, 0.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [0.0, 1.0] },
];

/// Per-walker instance data
///
/// Positions are in canvas pixels with the origin at the top-left, matching
/// walker coordinates; the shader converts to clip space.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SquareInstance {
    /// Top-left corner of the square in pixels
    pub position: [f32; 2],
    /// Side length in pixels
    pub size: f32,
    /// Padding to align the color to 16 bytes
    pub _padding: f32,
    /// Linear-light RGBA color
    pub color: [f32; 4],
}

/// Uniforms for the square rasterization pass
/// Layout: 16 bytes total (must match squares.wgsl CanvasUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CanvasUniforms {
    /// Canvas size in pixels
    pub canvas_size: [f32; 2],
    /// Padding for 16-byte uniform alignment
    pub _padding: [f32; 2],
}

impl CanvasUniforms {
    /// Create uniforms for a canvas of the given pixel size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas_size: [width as f32, height as f32],
            _padding: [0.0; 2],
        }
    }
}
