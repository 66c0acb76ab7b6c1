// Host-side tests for scene generation and the per-frame update.

use folio_core::constants::*;
use folio_core::scene::geometry::{self, Topology};
use folio_core::{
    Density, MeshKind, ObjectKind, PointerState, Scene, SceneConfig,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_scene(density: Density, seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    Scene::generate(&SceneConfig::default(), density, 16.0 / 9.0, &mut rng)
}

fn inside(v: Vec3, side: f32) -> bool {
    let h = side / 2.0;
    v.abs().max_element() <= h
}

#[test]
fn counts_follow_density() {
    let full = make_scene(Density::Full, 1);
    assert_eq!(full.particles.len(), 60);
    assert_eq!(full.shapes.len(), 10);
    assert_eq!(full.lines.len(), 15);
    assert_eq!(full.object_count(), 86);

    let reduced = make_scene(Density::Reduced, 1);
    assert_eq!(reduced.particles.len(), 30);
    assert_eq!(reduced.shapes.len(), 5);
    assert_eq!(reduced.lines.len(), 8);
}

#[test]
fn density_breakpoint() {
    assert_eq!(Density::for_width(767.0), Density::Reduced);
    assert_eq!(Density::for_width(768.0), Density::Full);
}

#[test]
fn positions_lie_in_their_volumes() {
    let scene = make_scene(Density::Full, 7);
    assert!(scene.particles.iter().all(|p| inside(p.position, PARTICLE_VOLUME)));
    assert!(scene.shapes.iter().all(|s| inside(s.position, SHAPE_VOLUME)));
    for l in &scene.lines {
        match l.kind {
            ObjectKind::Line { start, end } => {
                assert!(inside(start, LINE_VOLUME) && inside(end, LINE_VOLUME));
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }
}

#[test]
fn shape_colors_come_from_palette() {
    let scene = make_scene(Density::Full, 99);
    let indigo = folio_core::scene::hex_color(INDIGO, SHAPE_OPACITY);
    let orange = folio_core::scene::hex_color(ORANGE, SHAPE_OPACITY);
    assert!(scene.shapes.iter().all(|s| s.color == indigo || s.color == orange));
    assert!((scene.cube.color.w - CUBE_OPACITY).abs() < 1e-6);
}

#[test]
fn same_seed_same_scene() {
    let a = make_scene(Density::Full, 42);
    let b = make_scene(Density::Full, 42);
    for (x, y) in a.objects().zip(b.objects()) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.kind, y.kind);
    }
}

#[test]
fn centered_pointer_spins_cube_at_base_rate() {
    let mut scene = make_scene(Density::Full, 3);
    scene.step(PointerState::default(), 0.0);
    assert!((scene.cube.rotation.x - CUBE_SPIN[0]).abs() < 1e-7);
    assert!((scene.cube.rotation.y - CUBE_SPIN[1]).abs() < 1e-7);
}

#[test]
fn pointer_adds_to_cube_spin_and_pulls_camera() {
    let mut scene = make_scene(Density::Full, 3);
    let pointer = PointerState { x: 1.0, y: -1.0 };
    scene.step(pointer, 0.0);
    assert!((scene.cube.rotation.y - (CUBE_SPIN[1] + CUBE_POINTER_SPIN)).abs() < 1e-7);
    assert!((scene.cube.rotation.x - (CUBE_SPIN[0] - CUBE_POINTER_SPIN)).abs() < 1e-7);

    // One frame moves 5% of the way to (2, -2).
    let eye = scene.rig.camera.eye;
    assert!((eye.x - 0.1).abs() < 1e-6);
    assert!((eye.y + 0.1).abs() < 1e-6);
    assert_eq!(eye.z, CAMERA_Z);

    for _ in 0..400 {
        scene.step(pointer, 0.0);
    }
    let eye = scene.rig.camera.eye;
    assert!((eye.x - 2.0).abs() < 1e-3);
    assert!((eye.y + 2.0).abs() < 1e-3);
}

#[test]
fn particles_bob_with_index_phase() {
    let mut scene = make_scene(Density::Reduced, 5);
    let before: Vec<f32> = scene.particles.iter().map(|p| p.position.y).collect();
    scene.step(PointerState::default(), 0.0);
    for (i, (p, y0)) in scene.particles.iter().zip(before).enumerate() {
        let expected = y0 + (i as f32).sin() * PARTICLE_BOB_AMPLITUDE;
        assert!((p.position.y - expected).abs() < 1e-5);
        assert!((p.rotation.x - PARTICLE_SPIN).abs() < 1e-7);
    }
}

#[test]
fn shapes_and_lines_rotate_at_fixed_rates() {
    let mut scene = make_scene(Density::Full, 8);
    for _ in 0..10 {
        scene.step(PointerState { x: 0.3, y: 0.7 }, 16.0);
    }
    for s in &scene.shapes {
        assert!((s.rotation - Vec3::from_array(SHAPE_SPIN) * 10.0).length() < 1e-5);
    }
    for l in &scene.lines {
        assert!((l.rotation.z - LINE_SPIN * 10.0).abs() < 1e-6);
        assert_eq!(l.rotation.x, 0.0);
    }
}

#[test]
fn resize_reevaluates_density_without_regenerating() {
    let mut scene = make_scene(Density::Full, 11);
    scene.resize(500.0, 800.0);
    assert_eq!(scene.density(), Density::Reduced);
    assert_eq!(scene.particles.len(), 60);
    assert!((scene.rig.camera.aspect - 0.625).abs() < 1e-6);

    // Zero height keeps the last aspect.
    scene.resize(500.0, 0.0);
    assert!((scene.rig.camera.aspect - 0.625).abs() < 1e-6);
}

#[test]
fn pointer_normalization() {
    let p = PointerState::from_client(0.0, 0.0, 1000.0, 500.0);
    assert_eq!((p.x, p.y), (-1.0, 1.0));
    let p = PointerState::from_client(1000.0, 500.0, 1000.0, 500.0);
    assert_eq!((p.x, p.y), (1.0, -1.0));
    let p = PointerState::from_client(500.0, 250.0, 1000.0, 500.0);
    assert_eq!((p.x, p.y), (0.0, 0.0));
    assert_eq!(
        PointerState::from_client(10.0, 10.0, 0.0, 0.0),
        PointerState::default()
    );
}

#[test]
fn line_model_maps_unit_segment_onto_endpoints() {
    let scene = make_scene(Density::Full, 2);
    let line = &scene.lines[0];
    let ObjectKind::Line { start, end } = line.kind else {
        panic!("not a line");
    };
    let m = line.model_matrix();
    assert!((m.transform_point3(Vec3::ZERO) - start).length() < 1e-5);
    assert!((m.transform_point3(Vec3::X) - end).length() < 1e-5);
}

#[test]
fn wireframe_edge_counts() {
    let edges = |m: geometry::IndexedMesh| geometry::wireframe_edges(&m.triangles).len();
    assert_eq!(edges(geometry::box_mesh(2.0)), 18);
    assert_eq!(edges(geometry::tetrahedron(0.5)), 6);
    assert_eq!(edges(geometry::octahedron(0.4)), 12);
    assert_eq!(edges(geometry::icosahedron(0.3)), 30);
}

#[test]
fn polyhedron_vertices_sit_on_radius() {
    for m in [
        geometry::tetrahedron(0.5),
        geometry::octahedron(0.5),
        geometry::icosahedron(0.5),
    ] {
        assert!(m.positions.iter().all(|p| (p.length() - 0.5).abs() < 1e-5));
    }
}

#[test]
fn sphere_mesh_is_triangles() {
    let mesh = MeshKind::Sphere.build();
    assert_eq!(mesh.topology, Topology::Triangles);
    assert_eq!(mesh.primitive_count(), 112);
    for kind in MeshKind::ALL {
        let m = kind.build();
        if kind != MeshKind::Sphere {
            assert_eq!(m.topology, Topology::Lines, "{kind:?}");
        }
        assert!(!m.vertices.is_empty());
    }
}
