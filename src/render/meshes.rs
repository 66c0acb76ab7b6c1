use super::pipeline::InstanceRaw;
use folio_core::scene::geometry::Topology;
use folio_core::{MeshKind, Scene};
use wgpu::util::DeviceExt;

pub(crate) struct MeshBuffer {
    pub(crate) kind: MeshKind,
    pub(crate) topology: Topology,
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) vertex_count: u32,
}

/// Upload one static vertex buffer per mesh kind.
pub(crate) fn create_mesh_buffers(device: &wgpu::Device) -> Vec<MeshBuffer> {
    MeshKind::ALL
        .iter()
        .map(|&kind| {
            let data = kind.build();
            let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("scene_mesh_vertices"),
                contents: bytemuck::cast_slice(&data.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            MeshBuffer {
                kind,
                topology: data.topology,
                vertices,
                vertex_count: data.vertices.len() as u32,
            }
        })
        .collect()
}

/// Contiguous instance range for one mesh kind inside the frame's instance
/// buffer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Batch {
    pub(crate) mesh: usize,
    pub(crate) first: u32,
    pub(crate) count: u32,
}

/// Pack every object, grouped by mesh in `meshes` order. Reuses `out`.
pub(crate) fn pack_instances(
    scene: &Scene,
    meshes: &[MeshBuffer],
    out: &mut Vec<InstanceRaw>,
) -> Vec<Batch> {
    out.clear();
    let mut batches = Vec::with_capacity(meshes.len());
    for (mesh_index, mesh) in meshes.iter().enumerate() {
        let first = out.len() as u32;
        out.extend(
            scene
                .objects()
                .filter(|o| o.mesh() == mesh.kind)
                .map(|o| InstanceRaw {
                    model: o.model_matrix().to_cols_array_2d(),
                    color: o.color.to_array(),
                }),
        );
        let count = out.len() as u32 - first;
        if count > 0 {
            batches.push(Batch {
                mesh: mesh_index,
                first,
                count,
            });
        }
    }
    batches
}
