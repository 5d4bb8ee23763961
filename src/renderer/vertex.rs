//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements
pub mod colors {
    /// Translucent fill laid over the previous frame for the motion trail
    pub const TRAIL_FADE: [f32; 4] = [0.0, 0.0, 0.0, 90.0 / 255.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const TRACK: [f32; 4] = [1.0, 1.0, 1.0, 30.0 / 255.0];
    pub const HUB_CORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HUB_HALO: [f32; 4] = [1.0, 1.0, 1.0, 100.0 / 255.0];
    pub const RIPPLE: [f32; 3] = [1.0, 1.0, 1.0];
    pub const DEBRIS: [f32; 3] = [220.0 / 255.0, 30.0 / 255.0, 40.0 / 255.0];
    pub const BUBBLE: [f32; 3] = [1.0, 1.0, 1.0];
    pub const BUBBLE_STRUCK: [f32; 3] = [1.0, 60.0 / 255.0, 70.0 / 255.0];
    pub const DUST: [f32; 3] = [1.0, 1.0, 1.0];
    pub const BUTTON_IDLE: [f32; 4] = [50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 200.0 / 255.0];
    pub const BUTTON_HOVER: [f32; 4] =
        [100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 200.0 / 255.0];
    pub const GLYPH: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const MUTE_SLASH: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}
