/// Player — first-person kinematics and camera driver.
///
/// Per tick the host calls `update(dt)`:
///
/// 1. velocity += gravity * dt
/// 2. clamp XZ speed to `max_velocity_xz`, |vy| to `max_velocity_y`
///    (independently, direction preserving)
/// 3. move by velocity * dt (camera follows)
/// 4. decelerate by friction * dt, never past zero
///
/// Input handling calls `move_in()` / `move_by()` / `rotate()` directly.
///
/// Camera lockstep: every position change goes through `move_by()`, which
/// forwards the same delta to the camera. Only `set_cam_offset()` places
/// the camera absolutely.

use glam::Vec3;
use crate::camera::Camera;
use crate::error::Result;
use crate::math::{Basis, clamp_with_overshoot, normalize_est, wrap_angle};
use crate::{g3d_debug, g3d_info, g3d_trace, g3d_warn};
use super::direction::Direction;
use super::player_desc::PlayerDesc;
use super::volume::VolumeInfo;

const LOG_SOURCE: &str = "galaxy3d::Player";

/// Pitch bound (89°, radians)
pub const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;
/// Roll bound (20°, radians)
pub const ROLL_LIMIT: f32 = 20.0 * std::f32::consts::PI / 180.0;

/// Default speed cap on the XZ plane
pub const DEFAULT_MAX_VELOCITY_XZ: f32 = 125.0;
/// Default speed cap on the Y axis
pub const DEFAULT_MAX_VELOCITY_Y: f32 = 125.0;
/// Default deceleration magnitude
pub const DEFAULT_FRICTION: f32 = 250.0;
/// Default camera lag (disabled)
pub const DEFAULT_CAMERA_LAG: f32 = 0.0;

/// First-person player.
///
/// Owns its camera: dropping the player drops the camera.
#[derive(Debug, Clone)]
pub struct Player {
    camera: Option<Camera>,
    volume: VolumeInfo,

    // Position and orientation
    position: Vec3,
    basis: Basis,
    camera_offset: Vec3,
    pitch: f32,
    roll: f32,
    yaw: f32,

    // Forces
    velocity: Vec3,
    gravity: Vec3,
    max_velocity_xz: f32,
    max_velocity_y: f32,
    friction: f32,
    camera_lag: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Create a player at the origin with default tuning and no camera.
    pub fn new() -> Self {
        Self {
            camera: None,
            volume: VolumeInfo::default(),
            position: Vec3::ZERO,
            basis: Basis::IDENTITY,
            camera_offset: Vec3::ZERO,
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
            velocity: Vec3::ZERO,
            gravity: Vec3::ZERO,
            max_velocity_xz: DEFAULT_MAX_VELOCITY_XZ,
            max_velocity_y: DEFAULT_MAX_VELOCITY_Y,
            friction: DEFAULT_FRICTION,
            camera_lag: DEFAULT_CAMERA_LAG,
        }
    }

    /// Create a player from a validated descriptor.
    ///
    /// Attaches a camera when `desc.attach_camera` is set.
    ///
    /// # Errors
    ///
    /// Whatever `PlayerDesc::validate()` reports, or a camera attach failure.
    pub fn from_desc(desc: &PlayerDesc) -> Result<Self> {
        desc.validate()?;

        let mut player = Self {
            volume: desc.volume,
            position: desc.position,
            camera_offset: desc.camera_offset,
            gravity: desc.gravity,
            max_velocity_xz: desc.max_velocity_xz,
            max_velocity_y: desc.max_velocity_y,
            friction: desc.friction,
            camera_lag: desc.camera_lag,
            ..Self::new()
        };

        if desc.attach_camera {
            player.set_camera()?;
        }

        Ok(player)
    }

    // ===== CAMERA =====

    /// Make sure a camera is attached.
    ///
    /// Idempotent: returns `Ok(())` straight away when a camera already
    /// exists. Otherwise creates one and attaches it to this player.
    ///
    /// # Errors
    ///
    /// `Error::InitializationFailed` if the camera cannot take over the
    /// player's frame (non-finite position, offset or orientation). No
    /// camera is stored in that case.
    pub fn set_camera(&mut self) -> Result<()> {
        if self.camera.is_some() {
            return Ok(());
        }

        let mut camera = Camera::new();
        camera.attach_to_player(self)?;
        self.camera = Some(camera);

        g3d_info!(LOG_SOURCE, "Camera attached at {:?}", self.position + self.camera_offset);
        Ok(())
    }

    /// The attached camera, if any.
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Mutable access to the attached camera (projection changes).
    ///
    /// Moving or rotating the camera through this handle breaks lockstep
    /// with the player.
    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    /// Set the camera position relative to the player.
    ///
    /// With a camera attached, it is placed at `position + offset` right
    /// away. Without one, the offset is applied when `set_camera()` runs.
    pub fn set_cam_offset(&mut self, offset: Vec3) {
        self.camera_offset = offset;

        let Some(camera) = self.camera.as_mut() else {
            g3d_debug!(LOG_SOURCE, "Camera offset {:?} stored, no camera yet", offset);
            return;
        };

        camera.set_position(self.position + offset);
        g3d_debug!(LOG_SOURCE, "Camera resynced with offset {:?}", offset);
    }

    /// Camera position relative to the player.
    pub fn camera_offset(&self) -> Vec3 {
        self.camera_offset
    }

    /// Store the camera lag in seconds.
    ///
    /// Kept as configuration for camera smoothing; the integration here
    /// does not use it.
    pub fn set_cam_lag(&mut self, lag: f32) {
        self.camera_lag = lag;
    }

    /// Camera lag in seconds.
    pub fn camera_lag(&self) -> f32 {
        self.camera_lag
    }

    // ===== INTEGRATION =====

    /// Advance the simulation by `dt` seconds.
    ///
    /// `dt <= 0` is not rejected; it yields no or backward movement.
    pub fn update(&mut self, dt: f32) {
        self.velocity += self.gravity * dt;

        let xz_length = (self.velocity.x * self.velocity.x
            + self.velocity.z * self.velocity.z)
            .sqrt();
        if xz_length > self.max_velocity_xz {
            let scale = self.max_velocity_xz / xz_length;
            self.velocity.x *= scale;
            self.velocity.z *= scale;
        }

        let y_length = self.velocity.y.abs();
        if y_length > self.max_velocity_y {
            self.velocity.y *= self.max_velocity_y / y_length;
        }

        self.move_by(self.velocity * dt, false);

        let decel_dir = (-self.velocity).normalize_or_zero();
        let decel = (self.friction * dt).min(self.velocity.length());
        self.velocity += decel_dir * decel;
    }

    // ===== MOVEMENT =====

    /// Move along the player's frame.
    ///
    /// The active directions are summed (opposites cancel), approximately
    /// normalized and scaled by `distance`, then applied with `move_by()`.
    /// An empty set does nothing.
    pub fn move_in(&mut self, directions: Direction, distance: f32, as_velocity: bool) {
        if directions.is_empty() {
            return;
        }

        let (x, y, z) = directions.axes();
        let shift = normalize_est(self.basis.combine(x, y, z)) * distance;
        self.move_by(shift, as_velocity);
    }

    /// Apply a world-space shift.
    ///
    /// With `as_velocity` the shift is added to the velocity and the
    /// position is untouched. Otherwise the position moves and the camera
    /// receives the same delta.
    pub fn move_by(&mut self, shift: Vec3, as_velocity: bool) {
        if as_velocity {
            self.velocity += shift;
            return;
        }

        self.position += shift;
        match self.camera.as_mut() {
            Some(camera) => camera.move_by(shift),
            None => g3d_trace!(LOG_SOURCE, "Moved by {:?} without a camera", shift),
        }
    }

    /// Teleport to `position`, keeping the camera in lockstep.
    pub fn set_position(&mut self, position: Vec3) {
        g3d_debug!(LOG_SOURCE, "Teleport {:?} -> {:?}", self.position, position);
        self.move_by(position - self.position, false);
    }

    // ===== ROTATION =====

    /// Rotate by incremental pitch (`x`), yaw (`y`) and roll (`z`) radians.
    ///
    /// - pitch saturates at ±89°, roll at ±20°; the camera only receives
    ///   the part of each delta that was actually applied
    /// - yaw wraps into [0, 2π)
    /// - roll is bookkeeping only, the player's frame never rolls
    ///
    /// The camera rotates first, from the pre-update frame. Does nothing
    /// while no camera is attached.
    pub fn rotate(&mut self, x: f32, y: f32, z: f32) {
        let Some(camera) = self.camera.as_mut() else {
            g3d_trace!(LOG_SOURCE, "Rotate ignored, no camera attached");
            return;
        };

        let mut x = x;
        let mut z = z;

        if x != 0.0 {
            let (pitch, applied) = clamp_with_overshoot(self.pitch, x, PITCH_LIMIT);
            self.pitch = pitch;
            x = applied;
        }

        if y != 0.0 {
            self.yaw = wrap_angle(self.yaw + y);
        }

        if z != 0.0 {
            let (roll, applied) = clamp_with_overshoot(self.roll, z, ROLL_LIMIT);
            self.roll = roll;
            z = applied;
        }

        camera.rotate(x, y, z);

        if y != 0.0 {
            self.basis.rotate_about(self.basis.up, y);
        }

        self.basis.orthonormalize();
    }

    // ===== GETTERS / SETTERS =====

    /// World-space position.
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

    /// Accumulated yaw, in [0, 2π).
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Accumulated pitch, in [-89°, 89°].
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Accumulated roll, in [-20°, 20°].
    pub fn roll(&self) -> f32 {
        self.roll
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.friction = friction;
    }

    pub fn max_velocity_xz(&self) -> f32 {
        self.max_velocity_xz
    }

    pub fn set_max_velocity_xz(&mut self, max_velocity: f32) {
        self.max_velocity_xz = max_velocity;
    }

    pub fn max_velocity_y(&self) -> f32 {
        self.max_velocity_y
    }

    pub fn set_max_velocity_y(&mut self, max_velocity: f32) {
        self.max_velocity_y = max_velocity;
    }

    /// Store the collision volume as given.
    ///
    /// Not validated: the collision system owns its meaning. Inverted
    /// extents are logged.
    pub fn set_volume_info(&mut self, volume: VolumeInfo) {
        if !volume.is_ordered() {
            g3d_warn!(LOG_SOURCE, "Collision volume has inverted extents: {:?}", volume);
        }
        self.volume = volume;
    }

    /// Object-space collision volume.
    pub fn volume_info(&self) -> &VolumeInfo {
        &self.volume
    }

    /// Collision volume placed at the current position.
    pub fn world_volume(&self) -> VolumeInfo {
        self.volume.translated(self.position)
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod tests;
