// Host-side checks that the scene shader agrees with the pipeline layout.

const SCENE_WGSL: &str = include_str!("../src/shaders/scene.wgsl");

#[test]
fn entry_points_present() {
    assert!(SCENE_WGSL.contains("fn vs_main("));
    assert!(SCENE_WGSL.contains("fn fs_main("));
}

#[test]
fn vertex_inputs_cover_position_model_and_color() {
    // location 0: mesh position, 1..=4: model columns, 5: color
    for loc in 0..=5 {
        let tag = format!("@location({loc})");
        assert!(SCENE_WGSL.contains(&tag), "missing {tag}");
    }
    assert!(!SCENE_WGSL.contains("@location(6)"));
}

#[test]
fn single_uniform_binding() {
    assert_eq!(SCENE_WGSL.matches("@binding(").count(), 1);
    assert!(SCENE_WGSL.contains("@group(0) @binding(0) var<uniform>"));
}
