//! Mesh generation for the runner
//!
//! A single unit rectangle; every sprite is an instance of it scaled to its rect

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Generate vertices and indices for a unit rectangle spanning (0,0) to (1,1)
pub fn unit_rectangle() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex {
            position: [0.0, 0.0, 0.0],
        },
        Vertex {
            position: [1.0, 0.0, 0.0],
        },
        Vertex {
            position: [1.0, 1.0, 0.0],
        },
        Vertex {
            position: [0.0, 1.0, 0.0],
        },
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];
    (vertices, indices)
}

#[cfg(target_arch = "wasm32")]
pub use gpu::*;

#[cfg(target_arch = "wasm32")]
mod gpu {
    use super::{unit_rectangle, Vertex};
    use wgpu::util::DeviceExt;
    use wgpu::*;

    /// Mesh data with GPU buffers
    pub struct Mesh {
        pub vertex_buffer: Buffer,
        pub index_buffer: Buffer,
        pub index_count: u32,
    }

    impl Mesh {
        pub fn new(device: &Device, vertices: &[Vertex], indices: &[u16]) -> Self {
            let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
                label: Some("Vertex Buffer"),
                contents: bytemuck::cast_slice(vertices),
                usage: BufferUsages::VERTEX,
            });
            let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(indices),
                usage: BufferUsages::INDEX,
            });

            Self {
                vertex_buffer,
                index_buffer,
                index_count: indices.len() as u32,
            }
        }
    }

    pub fn create_rectangle(device: &Device) -> Mesh {
        let (vertices, indices) = unit_rectangle();
        Mesh::new(device, &vertices, &indices)
    }
}
