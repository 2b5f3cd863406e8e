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

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.07, 0.10, 0.18, 1.0];
    pub const PLAYER: [f32; 4] = [0.35, 0.85, 0.40, 1.0];
    pub const PLAYER_DEAD: [f32; 4] = [0.45, 0.45, 0.48, 1.0];
    pub const PLATFORM_STATIC: [f32; 4] = [0.55, 0.40, 0.24, 1.0];
    pub const PLATFORM_MOVING: [f32; 4] = [0.30, 0.55, 0.90, 1.0];
    pub const PLATFORM_BREAKABLE: [f32; 4] = [0.85, 0.82, 0.74, 1.0];
    /// Top-edge highlight strip drawn on every platform
    pub const PLATFORM_TOP: [f32; 4] = [1.0, 1.0, 1.0, 0.25];
}
