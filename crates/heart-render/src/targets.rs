use super::helpers::{self, DEPTH_FORMAT, HDR_FORMAT, SAMPLE_COUNT};

/// Offscreen targets the scene is drawn into before tone mapping.
///
/// - `msaa_*` is the multisampled colour attachment of the scene pass.
/// - `hdr_*` receives the resolve and is what the composite samples.
/// - `depth_*` is multisampled and shared by the heart and particle passes.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    pub(crate) hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (msaa_tex, msaa_view) = helpers::create_texture(
            device,
            "msaa_tex",
            width,
            height,
            HDR_FORMAT,
            SAMPLE_COUNT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        let (hdr_tex, hdr_view) = helpers::create_texture(
            device,
            "hdr_tex",
            width,
            height,
            HDR_FORMAT,
            1,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        let (depth_tex, depth_view) = helpers::create_texture(
            device,
            "depth_tex",
            width,
            height,
            DEPTH_FORMAT,
            SAMPLE_COUNT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        Self {
            msaa_tex,
            msaa_view,
            hdr_tex,
            hdr_view,
            depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.msaa_tex.destroy();
        self.hdr_tex.destroy();
        self.depth_tex.destroy();
        *self = Self::new(device, width, height);
    }
}
