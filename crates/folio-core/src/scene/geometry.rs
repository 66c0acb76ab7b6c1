//! Procedural meshes for the background scene.
//!
//! Solids are produced as indexed triangle lists and turned into wireframes
//! by collecting their unique edges, which is what a "wireframe material"
//! draws. Particles keep their triangles.

use fnv::FnvHashSet;
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Lines,
    Triangles,
}

/// Non-indexed vertex list ready to upload: pairs for `Lines`, triples for
/// `Triangles`.
#[derive(Clone, Debug)]
pub struct MeshData {
    pub topology: Topology,
    pub vertices: Vec<Vertex>,
}

impl MeshData {
    pub fn primitive_count(&self) -> usize {
        match self.topology {
            Topology::Lines => self.vertices.len() / 2,
            Topology::Triangles => self.vertices.len() / 3,
        }
    }
}

pub struct IndexedMesh {
    pub positions: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

/// Axis-aligned box centered on the origin.
pub fn box_mesh(size: f32) -> IndexedMesh {
    let h = size * 0.5;
    let positions = (0..8)
        .map(|i| {
            Vec3::new(
                if i & 1 == 0 { -h } else { h },
                if i & 2 == 0 { -h } else { h },
                if i & 4 == 0 { -h } else { h },
            )
        })
        .collect();
    #[rustfmt::skip]
    let triangles = vec![
        [0, 2, 1], [1, 2, 3], // -z
        [4, 5, 6], [5, 7, 6], // +z
        [0, 1, 4], [1, 5, 4], // -y
        [2, 6, 3], [3, 6, 7], // +y
        [0, 4, 2], [2, 4, 6], // -x
        [1, 3, 5], [3, 7, 5], // +x
    ];
    IndexedMesh {
        positions,
        triangles,
    }
}

fn polyhedron(raw: &[[f32; 3]], triangles: Vec<[u32; 3]>, radius: f32) -> IndexedMesh {
    let positions = raw
        .iter()
        .map(|p| Vec3::from_array(*p).normalize() * radius)
        .collect();
    IndexedMesh {
        positions,
        triangles,
    }
}

#[rustfmt::skip]
pub fn tetrahedron(radius: f32) -> IndexedMesh {
    polyhedron(
        &[[1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, -1.0], [1.0, -1.0, -1.0]],
        vec![[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]],
        radius,
    )
}

#[rustfmt::skip]
pub fn octahedron(radius: f32) -> IndexedMesh {
    polyhedron(
        &[
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
        ],
        vec![
            [0, 2, 4], [0, 4, 3], [0, 3, 5], [0, 5, 2],
            [1, 2, 5], [1, 5, 3], [1, 3, 4], [1, 4, 2],
        ],
        radius,
    )
}

#[rustfmt::skip]
pub fn icosahedron(radius: f32) -> IndexedMesh {
    let t = (1.0 + 5f32.sqrt()) / 2.0;
    polyhedron(
        &[
            [-1.0, t, 0.0],
            [1.0, t, 0.0],
            [-1.0, -t, 0.0],
            [1.0, -t, 0.0],
            [0.0, -1.0, t],
            [0.0, 1.0, t],
            [0.0, -1.0, -t],
            [0.0, 1.0, -t],
            [t, 0.0, -1.0],
            [t, 0.0, 1.0],
            [-t, 0.0, -1.0],
            [-t, 0.0, 1.0],
        ],
        vec![
            [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
            [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
            [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
            [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
        ],
        radius,
    )
}

/// Latitude/longitude sphere.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> IndexedMesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut positions = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * std::f32::consts::PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * std::f32::consts::TAU;
            positions.push(Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            ));
        }
    }
    let row = ws + 1;
    let mut triangles = Vec::new();
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // Pole rows collapse to a point; skip their degenerate halves.
            if iy != 0 {
                triangles.push([a, b, d]);
            }
            if iy != hs - 1 {
                triangles.push([b, c, d]);
            }
        }
    }
    IndexedMesh {
        positions,
        triangles,
    }
}

/// Unique undirected edges of a triangle list.
pub fn wireframe_edges(triangles: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut seen = FnvHashSet::default();
    let mut edges = Vec::new();
    for tri in triangles {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = (a.min(b), a.max(b));
            if seen.insert(key) {
                edges.push([key.0, key.1]);
            }
        }
    }
    edges
}

impl IndexedMesh {
    pub fn to_wireframe(&self) -> MeshData {
        let vertices = wireframe_edges(&self.triangles)
            .into_iter()
            .flat_map(|[a, b]| [self.vertex(a), self.vertex(b)])
            .collect();
        MeshData {
            topology: Topology::Lines,
            vertices,
        }
    }

    pub fn to_triangles(&self) -> MeshData {
        let vertices = self
            .triangles
            .iter()
            .flat_map(|t| [self.vertex(t[0]), self.vertex(t[1]), self.vertex(t[2])])
            .collect();
        MeshData {
            topology: Topology::Triangles,
            vertices,
        }
    }

    fn vertex(&self, i: u32) -> Vertex {
        Vertex {
            position: self.positions[i as usize].to_array(),
        }
    }
}

/// Segment from the origin to +X; line objects stretch it onto their
/// endpoints through their model matrix.
pub fn unit_segment() -> MeshData {
    MeshData {
        topology: Topology::Lines,
        vertices: vec![
            Vertex {
                position: [0.0, 0.0, 0.0],
            },
            Vertex {
                position: [1.0, 0.0, 0.0],
            },
        ],
    }
}
