//! The demo triangle: static geometry, one pipeline, two per-draw constants.
//!
//! Per-draw constants are uniform buffers at binding 1: the transform in
//! group 0 (vertex stage) and brightness in group 1 (fragment stage).
//! Both are written through the queue before the pass is submitted.

mod commands;
mod vertex;

use anyhow::Result;
use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};

pub use commands::{
    draw_steps, BrightnessConstant, DrawStep, FrameInput, TransformConstant, CONSTANT_SLOT,
    VERTEX_BUFFER_SLOT, VERTEX_COUNT,
};
pub use vertex::{triangle_vertices, Vertex, TRIANGLE_RADIUS};

const TRANSFORM_GROUP: u32 = 0;
const BRIGHTNESS_GROUP: u32 = 1;

/// Owns the triangle pipeline, vertex buffer and constant buffers.
///
/// Everything is built once in [`TriangleRenderer::new`] and immutable
/// afterwards, apart from the constant buffer contents written each frame.
pub struct TriangleRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,

    transform_ubo: wgpu::Buffer,
    transform_bind_group: wgpu::BindGroup,
    brightness_ubo: wgpu::Buffer,
    brightness_bind_group: wgpu::BindGroup,
}

impl TriangleRenderer {
    /// Builds the shader module, vertex buffer and pipeline.
    ///
    /// `depth_format` must match the depth attachment the triangle pass uses,
    /// or be `None` when the surface has no depth buffer.
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
    ) -> Result<Self> {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("prism triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/triangle.wgsl").into()),
        });

        let vertices = triangle_vertices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prism triangle vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let transform_layout = constant_layout(
            device,
            "prism triangle transform bgl",
            wgpu::ShaderStages::VERTEX,
            std::mem::size_of::<TransformConstant>(),
        );
        let brightness_layout = constant_layout(
            device,
            "prism triangle brightness bgl",
            wgpu::ShaderStages::FRAGMENT,
            std::mem::size_of::<BrightnessConstant>(),
        );

        let transform_ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prism triangle transform ubo"),
            contents: bytemuck::bytes_of(&TransformConstant::from(FrameInput::default().transform)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let brightness_ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prism triangle brightness ubo"),
            contents: bytemuck::bytes_of(&BrightnessConstant::new(1.0)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("prism triangle transform bind group"),
            layout: &transform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: CONSTANT_SLOT,
                resource: transform_ubo.as_entire_binding(),
            }],
        });
        let brightness_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("prism triangle brightness bind group"),
            layout: &brightness_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: CONSTANT_SLOT,
                resource: brightness_ubo.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("prism triangle pipeline layout"),
            bind_group_layouts: &[&transform_layout, &brightness_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("prism triangle pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vertex_function"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fragment_function"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: depth_format.map(|format| wgpu::DepthStencilState {
                format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                ..Default::default()
            },
            multiview_mask: None,
            cache: None,
        });

        log::info!("triangle pipeline ready ({color_format:?}, depth {depth_format:?})");

        Ok(Self {
            pipeline,
            vertex_buffer,
            transform_ubo,
            transform_bind_group,
            brightness_ubo,
            brightness_bind_group,
        })
    }

    /// Ordered steps for this frame's draw.
    pub fn commands(&self, input: &FrameInput) -> [DrawStep; 5] {
        draw_steps(input)
    }

    /// Records the triangle into an open pass.
    ///
    /// Constant writes go through `queue` and land before the command buffer
    /// that holds `rpass` executes.
    pub fn draw(&self, queue: &wgpu::Queue, rpass: &mut wgpu::RenderPass<'_>, input: &FrameInput) {
        for step in self.commands(input) {
            match step {
                DrawStep::SetPipeline => rpass.set_pipeline(&self.pipeline),
                DrawStep::SetVertexBuffer { slot } => {
                    rpass.set_vertex_buffer(slot, self.vertex_buffer.slice(..));
                }
                DrawStep::SetVertexConstant { data, .. } => {
                    queue.write_buffer(&self.transform_ubo, 0, bytemuck::bytes_of(&data));
                    rpass.set_bind_group(TRANSFORM_GROUP, &self.transform_bind_group, &[]);
                }
                DrawStep::SetFragmentConstant { data, .. } => {
                    queue.write_buffer(&self.brightness_ubo, 0, bytemuck::bytes_of(&data));
                    rpass.set_bind_group(BRIGHTNESS_GROUP, &self.brightness_bind_group, &[]);
                }
                DrawStep::Draw { vertices, instances } => rpass.draw(vertices, instances),
            }
        }
    }

    /// Opens a pass over `target` (keeping the cleared color and depth) and draws.
    pub fn render(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, input: &FrameInput) {
        let mut rpass = target.begin_load_pass("prism triangle pass", ctx.depth_format.is_some());
        self.draw(ctx.queue, &mut rpass, input);
    }
}

fn constant_layout(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
    size: usize,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: CONSTANT_SLOT,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(size as u64),
            },
            count: None,
        }],
    })
}
