//! The offscreen trail canvas
//!
//! Swapchain images are not guaranteed to keep their contents across
//! frames, so trail accumulation happens in a texture we own. Squares are
//! drawn into it with a load (not clear) pass and it is sampled onto the
//! surface every frame.

/// Size-tracked offscreen texture the walkers accumulate into
pub struct TrailCanvas {
    view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    size: (u32, u32),
    needs_clear: bool,
}

impl TrailCanvas {
    /// Create a canvas of the given size
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, width: u32, height: u32) -> Self {
        Self {
            view: Self::create_view(device, format, width, height),
            format,
            size: (width, height),
            needs_clear: true,
        }
    }

    fn create_view(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Trail Canvas"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// Recreate the canvas if the size changed
    ///
    /// Resizing discards accumulated trails; the new canvas is cleared on
    /// the next frame. Returns true when the texture was recreated.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 || self.size == (width, height) {
            return false;
        }
        self.view = Self::create_view(device, self.format, width, height);
        self.size = (width, height);
        self.needs_clear = true;
        true
    }

    /// The texture view to render into and sample from
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// The canvas size in pixels
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Whether the next pass must clear instead of load, consuming the flag
    pub fn take_clear(&mut self) -> bool {
        std::mem::take(&mut self.needs_clear)
    }
}
