//! wgpu renderer for the heart scene, shared by the web and native front-ends.
//!
//! Frame structure:
//! 1. heart (opaque, depth write) and particles (additive, depth test only)
//!    into a 4x multisampled Rgba16Float target, resolved at the end of the pass
//! 2. ACES tone mapping from the HDR target to the swapchain

mod helpers;
mod mesh;
mod points;
mod post;
mod targets;

use glam::Vec4;
use heart_core::color::hex_to_linear;
use heart_core::constants::{CLEAR_COLOR_HEX, TONE_MAPPING_EXPOSURE};
use heart_core::Scene;

pub static HEART_WGSL: &str = include_str!("../shaders/heart.wgsl");
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

/// Startup failures. There is no fallback renderer, so callers treat all of
/// these as fatal.
#[derive(Debug, thiserror::Error)]
pub enum RenderInitError {
    #[error("could not create a rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    UnsupportedSurface,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct FrameUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
}

/// GPU resources for one surface. Fields drop in declaration order, so the
/// surface is released before the device buffers it presents.
pub struct GpuState<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: targets::RenderTargets,
    frame_uniform_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    heart: mesh::HeartPass,
    points: points::PointsPass,
    post: post::PostResources,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'w>>,
        width: u32,
        height: u32,
        scene: &Scene,
    ) -> Result<Self, RenderInitError> {
        let width = width.max(1);
        let height = height.max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderInitError::NoAdapter)?;
        log::info!("[gpu] adapter: {:?}", adapter.get_info().backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits; some WebGPU implementations reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;
        let caps = surface.get_capabilities(&adapter);
        let fallback = *caps.formats.first().ok_or(RenderInitError::UnsupportedSurface)?;
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(fallback);
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = targets::RenderTargets::new(&device, width, height);

        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });
        let frame_uniform_buffer = helpers::uniform_buffer::<FrameUniforms>(&device, "frame_uniforms");
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_uniform_buffer.as_entire_binding(),
            }],
        });

        let heart_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("heart_shader"),
            source: wgpu::ShaderSource::Wgsl(HEART_WGSL.into()),
        });
        let points_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
        });
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(POST_WGSL.into()),
        });

        let heart = mesh::HeartPass::new(&device, &frame_bgl, &heart_shader, scene.mesh());
        let points = points::PointsPass::new(&device, &frame_bgl, &points_shader, scene.particles());
        let post = post::PostResources::new(&device, &post_shader, &targets.hdr_view, format);
        queue.write_buffer(
            &post.uniform_buffer,
            0,
            bytemuck::bytes_of(&post::PostUniforms {
                exposure: TONE_MAPPING_EXPOSURE,
                encode_srgb: if format.is_srgb() { 0.0 } else { 1.0 },
                _pad: [0.0; 2],
            }),
        );

        let bg = hex_to_linear(CLEAR_COLOR_HEX);
        let clear_color = wgpu::Color {
            r: bg.x as f64,
            g: bg.y as f64,
            b: bg.z as f64,
            a: 1.0,
        };

        log::info!("[gpu] surface {width}x{height} {format:?}");
        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            frame_uniform_buffer,
            frame_bind_group,
            heart,
            points,
            post,
            clear_color,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.post.rebuild_bind_group(&self.device, &self.targets.hdr_view);
        }
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        log::warn!("[gpu] reconfiguring surface");
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let camera = &scene.camera;
        let uniforms = FrameUniforms {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            camera_pos: Vec4::from((camera.eye, 1.0)).to_array(),
        };
        self.queue
            .write_buffer(&self.frame_uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.heart.update(&self.queue, scene);
        self.points.update(&self.queue, scene);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&self.targets.hdr_view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.heart.draw(&mut rpass, &self.frame_bind_group);
            self.points.draw(&mut rpass, &self.frame_bind_group);
        }

        self.post.composite(&mut encoder, &view);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
