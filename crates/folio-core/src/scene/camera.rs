//! Camera description and the pointer-following rig.
//!
//! These types avoid platform APIs; the web renderer turns them into a
//! view-projection uniform every frame.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};
use crate::easing::approach_f32;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Camera that drifts toward the pointer and keeps looking at the origin.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub camera: Camera,
    reach: f32,
    smoothing: f32,
}

impl CameraRig {
    pub fn new(distance: f32, aspect: f32, reach: f32, smoothing: f32) -> Self {
        Self {
            camera: Camera::new(Vec3::new(0.0, 0.0, distance), aspect),
            reach,
            smoothing,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.camera.aspect = aspect;
        }
    }

    /// Ease x/y toward `reach * pointer`; z stays put.
    pub fn follow(&mut self, pointer_x: f32, pointer_y: f32) {
        let eye = &mut self.camera.eye;
        eye.x = approach_f32(eye.x, pointer_x * self.reach, self.smoothing);
        eye.y = approach_f32(eye.y, pointer_y * self.reach, self.smoothing);
        self.camera.target = Vec3::ZERO;
    }
}
