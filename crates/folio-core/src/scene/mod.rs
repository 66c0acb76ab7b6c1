//! Background scene: a wireframe cube surrounded by particles, polyhedra
//! and line segments, all nudged a little every display frame.

mod camera;
pub mod geometry;
mod lifecycle;

pub use camera::{Camera, CameraRig};
pub use lifecycle::RendererPhase;

use crate::config::{Density, SceneConfig};
use crate::constants::*;
use glam::{EulerRot, Mat4, Vec3, Vec4};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolyhedronKind {
    Tetrahedron,
    Octahedron,
    Icosahedron,
}

impl PolyhedronKind {
    pub const ALL: [PolyhedronKind; 3] = [
        PolyhedronKind::Tetrahedron,
        PolyhedronKind::Octahedron,
        PolyhedronKind::Icosahedron,
    ];

    pub fn radius(self) -> f32 {
        match self {
            PolyhedronKind::Tetrahedron => TETRAHEDRON_RADIUS,
            PolyhedronKind::Octahedron => OCTAHEDRON_RADIUS,
            PolyhedronKind::Icosahedron => ICOSAHEDRON_RADIUS,
        }
    }
}

/// Which shared mesh an object is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Cube,
    Sphere,
    Polyhedron(PolyhedronKind),
    Segment,
}

impl MeshKind {
    pub const ALL: [MeshKind; 6] = [
        MeshKind::Cube,
        MeshKind::Sphere,
        MeshKind::Polyhedron(PolyhedronKind::Tetrahedron),
        MeshKind::Polyhedron(PolyhedronKind::Octahedron),
        MeshKind::Polyhedron(PolyhedronKind::Icosahedron),
        MeshKind::Segment,
    ];

    pub fn build(self) -> geometry::MeshData {
        match self {
            MeshKind::Cube => geometry::box_mesh(CUBE_SIZE).to_wireframe(),
            MeshKind::Sphere => {
                geometry::uv_sphere(PARTICLE_RADIUS, PARTICLE_SEGMENTS, PARTICLE_SEGMENTS)
                    .to_triangles()
            }
            MeshKind::Polyhedron(kind) => match kind {
                PolyhedronKind::Tetrahedron => geometry::tetrahedron(kind.radius()),
                PolyhedronKind::Octahedron => geometry::octahedron(kind.radius()),
                PolyhedronKind::Icosahedron => geometry::icosahedron(kind.radius()),
            }
            .to_wireframe(),
            MeshKind::Segment => geometry::unit_segment(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObjectKind {
    Cube,
    Particle,
    Polyhedron(PolyhedronKind),
    Line { start: Vec3, end: Vec3 },
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub kind: ObjectKind,
    pub position: Vec3,
    pub rotation: Vec3,
    /// sRGB channels plus opacity.
    pub color: Vec4,
}

impl SceneObject {
    fn new(kind: ObjectKind, position: Vec3, hex: u32, opacity: f32) -> Self {
        Self {
            kind,
            position,
            rotation: Vec3::ZERO,
            color: hex_color(hex, opacity),
        }
    }

    pub fn mesh(&self) -> MeshKind {
        match self.kind {
            ObjectKind::Cube => MeshKind::Cube,
            ObjectKind::Particle => MeshKind::Sphere,
            ObjectKind::Polyhedron(kind) => MeshKind::Polyhedron(kind),
            ObjectKind::Line { .. } => MeshKind::Segment,
        }
    }

    /// Translation, then XYZ Euler rotation. Lines keep their endpoints in
    /// the object frame, so they rotate about the world origin.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        let base = Mat4::from_translation(self.position) * rotation;
        match self.kind {
            ObjectKind::Line { start, end } => base * segment_basis(start, end),
            _ => base,
        }
    }
}

/// Maps the unit segment (0,0,0)→(1,0,0) onto `start`→`end`.
fn segment_basis(start: Vec3, end: Vec3) -> Mat4 {
    Mat4::from_cols(
        (end - start).extend(0.0),
        Vec4::ZERO,
        Vec4::ZERO,
        start.extend(1.0),
    )
}

pub fn hex_color(hex: u32, opacity: f32) -> Vec4 {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    Vec4::new(channel(16), channel(8), channel(0), opacity)
}

/// Normalized pointer position in `[-1, 1]` on both axes, +y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Convert client (CSS pixel) coordinates against the viewport size.
    /// A degenerate viewport leaves the pointer centered.
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: ((client_x / width) * 2.0 - 1.0) as f32,
            y: (-(client_y / height) * 2.0 + 1.0) as f32,
        }
    }
}

fn random_in_cube<R: Rng + ?Sized>(rng: &mut R, side: f32) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * side,
        (rng.gen::<f32>() - 0.5) * side,
        (rng.gen::<f32>() - 0.5) * side,
    )
}

pub struct Scene {
    pub cube: SceneObject,
    pub particles: Vec<SceneObject>,
    pub shapes: Vec<SceneObject>,
    pub lines: Vec<SceneObject>,
    pub rig: CameraRig,
    density: Density,
}

impl Scene {
    /// Build the fixed object set. Counts come from `density` and never
    /// change afterwards.
    pub fn generate<R: Rng + ?Sized>(
        config: &SceneConfig,
        density: Density,
        aspect: f32,
        rng: &mut R,
    ) -> Self {
        let counts = config.counts(density);

        let cube = SceneObject::new(ObjectKind::Cube, Vec3::ZERO, INDIGO, CUBE_OPACITY);

        let particles = (0..counts.particles)
            .map(|_| {
                let pos = random_in_cube(rng, config.particle_volume);
                SceneObject::new(ObjectKind::Particle, pos, AMBER, PARTICLE_OPACITY)
            })
            .collect();

        let shapes = (0..counts.shapes)
            .map(|_| {
                let kind = PolyhedronKind::ALL[rng.gen_range(0..PolyhedronKind::ALL.len())];
                let hex = if rng.gen_bool(0.5) { INDIGO } else { ORANGE };
                let pos = random_in_cube(rng, config.shape_volume);
                SceneObject::new(ObjectKind::Polyhedron(kind), pos, hex, SHAPE_OPACITY)
            })
            .collect();

        let lines = (0..counts.lines)
            .map(|_| {
                let start = random_in_cube(rng, config.line_volume);
                let end = random_in_cube(rng, config.line_volume);
                SceneObject::new(
                    ObjectKind::Line { start, end },
                    Vec3::ZERO,
                    INDIGO,
                    LINE_OPACITY,
                )
            })
            .collect();

        log::info!(
            "[scene] generated particles={} shapes={} lines={} density={:?}",
            counts.particles,
            counts.shapes,
            counts.lines,
            density
        );

        Self {
            cube,
            particles,
            shapes,
            lines,
            rig: CameraRig::new(
                config.camera_z,
                aspect,
                config.camera_reach,
                config.camera_smoothing,
            ),
            density,
        }
    }

    /// Density flag as last evaluated. After a resize it may disagree with
    /// the object counts, which were fixed at generation time.
    pub fn density(&self) -> Density {
        self.density
    }

    pub fn object_count(&self) -> usize {
        1 + self.particles.len() + self.shapes.len() + self.lines.len()
    }

    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        std::iter::once(&self.cube)
            .chain(self.particles.iter())
            .chain(self.shapes.iter())
            .chain(self.lines.iter())
    }

    /// Viewport changed: new aspect, re-evaluated density flag, same objects.
    pub fn resize(&mut self, width: f64, height: f64) {
        if height > 0.0 {
            self.rig.set_aspect((width / height) as f32);
        }
        self.density = Density::for_width(width);
    }

    /// Advance one display frame. `time_ms` is the loop clock and only
    /// drives the particle bob.
    pub fn step(&mut self, pointer: PointerState, time_ms: f64) {
        self.rig.follow(pointer.x, pointer.y);

        self.cube.rotation.x += CUBE_SPIN[0] + pointer.y * CUBE_POINTER_SPIN;
        self.cube.rotation.y += CUBE_SPIN[1] + pointer.x * CUBE_POINTER_SPIN;

        let phase = time_ms * PARTICLE_BOB_FREQ as f64;
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.rotation.x += PARTICLE_SPIN;
            p.rotation.y += PARTICLE_SPIN;
            p.position.y += (phase + i as f64).sin() as f32 * PARTICLE_BOB_AMPLITUDE;
        }

        for s in &mut self.shapes {
            s.rotation += Vec3::from_array(SHAPE_SPIN);
        }

        for l in &mut self.lines {
            l.rotation.z += LINE_SPIN;
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.rig.camera.view_projection()
    }
}
