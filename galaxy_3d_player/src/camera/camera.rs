/// Camera — first-person view attached to a player.
///
/// Position is tracked by deltas: once attached, the player forwards every
/// position change through `move_by()`, so camera and player stay in
/// lockstep without the camera ever reading player state back. Absolute
/// placement (`set_position()`) is reserved for one-off resyncs such as a
/// new camera offset.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3, Vec4};
use crate::error::{Error, Result};
use crate::g3d_err;
use crate::math::Basis;
use crate::player::Player;

const LOG_SOURCE: &str = "galaxy3d::Camera";

/// Default vertical field of view (60°)
pub const DEFAULT_FOV_Y: f32 = std::f32::consts::FRAC_PI_3;
/// Default aspect ratio
pub const DEFAULT_ASPECT: f32 = 16.0 / 9.0;
/// Default near plane distance
pub const DEFAULT_NEAR: f32 = 0.1;
/// Default far plane distance
pub const DEFAULT_FAR: f32 = 1000.0;

/// Camera matrices laid out for a uniform buffer
///
/// `#[repr(C)]` and `Pod`, so a renderer can upload it with
/// `bytemuck::bytes_of(&camera.uniform())`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    /// World to view
    pub view: Mat4,
    /// View to clip
    pub projection: Mat4,
    /// projection * view
    pub view_projection: Mat4,
    /// World-space eye position (w = 1)
    pub position: Vec4,
}

/// First-person camera.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    basis: Basis,
    /// Axis yaw rotates around: the player's up at attach time
    yaw_axis: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    attached: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create an unattached camera at the origin looking down +Z.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            basis: Basis::IDENTITY,
            yaw_axis: Vec3::Y,
            fov_y: DEFAULT_FOV_Y,
            aspect: DEFAULT_ASPECT,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            attached: false,
        }
    }

    /// Take over the player's frame.
    ///
    /// Copies the player's orientation, places the camera at
    /// `player.position() + player.camera_offset()` and uses the player's
    /// up vector as the yaw axis from now on.
    ///
    /// # Errors
    ///
    /// `Error::InitializationFailed` if the player's position, offset or
    /// orientation is not finite. The camera is left unchanged.
    pub fn attach_to_player(&mut self, player: &Player) -> Result<()> {
        let position = player.position() + player.camera_offset();
        let basis = Basis {
            look: player.look(),
            right: player.right(),
            up: player.up(),
        };

        if !position.is_finite()
            || !basis.look.is_finite()
            || !basis.right.is_finite()
            || !basis.up.is_finite()
        {
            return Err(g3d_err!(LOG_SOURCE, Error::InitializationFailed(format!(
                "cannot attach camera to player at {:?} (offset {:?}, look {:?}, up {:?})",
                player.position(), player.camera_offset(), basis.look, basis.up
            ))));
        }

        self.position = position;
        self.basis = basis;
        self.yaw_axis = basis.up;
        self.attached = true;
        Ok(())
    }

    // ===== GETTERS =====

    /// True once `attach_to_player()` succeeded.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// World-space eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Forward direction.
    pub fn look(&self) -> Vec3 {
        self.basis.look
    }

    /// Right direction.
    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    /// Up direction.
    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    /// Full orientation frame.
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Viewport aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near and far plane distances.
    pub fn clip_planes(&self) -> (f32, f32) {
        (self.near, self.far)
    }

    // ===== PLAYER NOTIFICATIONS =====

    /// Place the camera at an absolute position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Shift the camera by a position delta.
    pub fn move_by(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Rotate by incremental pitch (`x`), yaw (`y`) and roll (`z`) radians.
    ///
    /// Pitch turns around the camera's own right axis, yaw around the
    /// player's up axis, roll around the camera's own look axis. The
    /// player has already clamped the deltas.
    pub fn rotate(&mut self, x: f32, y: f32, z: f32) {
        if x != 0.0 {
            let rotation = Quat::from_axis_angle(self.basis.right, x);
            self.basis.look = rotation * self.basis.look;
            self.basis.up = rotation * self.basis.up;
        }

        if y != 0.0 {
            let rotation = Quat::from_axis_angle(self.yaw_axis, y);
            self.basis.look = rotation * self.basis.look;
            self.basis.up = rotation * self.basis.up;
            self.basis.right = rotation * self.basis.right;
        }

        if z != 0.0 {
            let rotation = Quat::from_axis_angle(self.basis.look, z);
            self.basis.right = rotation * self.basis.right;
            self.basis.up = rotation * self.basis.up;
        }

        self.basis.orthonormalize();
    }

    // ===== VIEW / PROJECTION =====

    /// Set the perspective projection parameters.
    pub fn set_projection(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) {
        self.fov_y = fov_y;
        self.aspect = aspect;
        self.near = near;
        self.far = far;
    }

    /// Update only the aspect ratio (window resize).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// View matrix (left-handed, looking down `look`).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_lh(self.position, self.basis.look, self.basis.up)
    }

    /// Perspective projection matrix (left-handed, depth 0..1).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Snapshot of the matrices for GPU upload.
    pub fn uniform(&self) -> CameraUniform {
        let view = self.view_matrix();
        let projection = self.projection_matrix();
        CameraUniform {
            view,
            projection,
            view_projection: projection * view,
            position: self.position.extend(1.0),
        }
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
