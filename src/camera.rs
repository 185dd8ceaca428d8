//! Perspective camera with viewport-driven aspect.
//!
//! The camera is a collaborator of the interaction core: it answers resize
//! notifications and anchors the in-scene button in front of the viewer
//! each frame. Projection itself is consumed by the host renderer.

use glam::{Mat4, Quat, Vec3};

use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build a camera from options at the given initial aspect ratio.
    #[must_use]
    pub fn new(opts: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(opts.eye),
            target: Vec3::from_array(opts.target),
            up: Vec3::Y,
            aspect,
            fovy: opts.fovy,
            znear: opts.znear,
            zfar: opts.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Recompute the aspect ratio for a resized viewport. Zero-sized
    /// viewports are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
            log::debug!("viewport resized: {width}x{height}");
        }
    }

    /// Orthonormal view basis: forward, right, up.
    #[must_use]
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);
        (forward, right, up)
    }

    /// World-space point at `distance` in front of the eye, offset toward
    /// the given normalized device coordinates. Used to pin screen-space
    /// UI (the button) into the 3D scene.
    #[must_use]
    pub fn anchor_point(
        &self,
        ndc_x: f32,
        ndc_y: f32,
        distance: f32,
    ) -> Vec3 {
        let (forward, right, up) = self.basis();
        let tan_fov = (self.fovy / 2.0).to_radians().tan();
        let dir = (forward
            + right * (ndc_x * self.aspect * tan_fov)
            + up * (ndc_y * tan_fov))
            .normalize();
        self.eye + dir * distance
    }

    /// Camera orientation with pitch and roll stripped — yaw only, so an
    /// anchored UI plane stays upright while following the view direction.
    #[must_use]
    pub fn yaw_orientation(&self) -> Quat {
        let (forward, _, _) = self.basis();
        Quat::from_rotation_y((-forward.x).atan2(-forward.z))
    }
}
