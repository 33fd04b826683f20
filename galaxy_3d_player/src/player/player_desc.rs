/// Player configuration.
///
/// Everything a scene sets up once when spawning a player. `Default` gives
/// the stock tuning (max velocities 125, friction 250, no gravity, no lag).

use glam::Vec3;
use crate::error::{Error, Result};
use crate::g3d_err;
use super::volume::VolumeInfo;
use super::player::{
    DEFAULT_CAMERA_LAG, DEFAULT_FRICTION, DEFAULT_MAX_VELOCITY_XZ, DEFAULT_MAX_VELOCITY_Y,
};

/// Descriptor for `Player::from_desc()`
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDesc {
    /// Spawn position
    pub position: Vec3,
    /// Camera position relative to the player
    pub camera_offset: Vec3,
    /// Camera lag in seconds (0 disables)
    pub camera_lag: f32,
    /// Constant acceleration applied every tick
    pub gravity: Vec3,
    /// Deceleration magnitude (units/s²)
    pub friction: f32,
    /// Speed cap on the XZ plane
    pub max_velocity_xz: f32,
    /// Speed cap on the Y axis
    pub max_velocity_y: f32,
    /// Object-space collision box
    pub volume: VolumeInfo,
    /// Create and attach a camera right away
    pub attach_camera: bool,
}

impl Default for PlayerDesc {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            camera_offset: Vec3::ZERO,
            camera_lag: DEFAULT_CAMERA_LAG,
            gravity: Vec3::ZERO,
            friction: DEFAULT_FRICTION,
            max_velocity_xz: DEFAULT_MAX_VELOCITY_XZ,
            max_velocity_y: DEFAULT_MAX_VELOCITY_Y,
            volume: VolumeInfo::default(),
            attach_camera: true,
        }
    }
}

impl PlayerDesc {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` naming the first offending field, or
    /// `Error::InvalidVolume` for a bad collision box.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("camera_lag", self.camera_lag),
            ("friction", self.friction),
            ("max_velocity_xz", self.max_velocity_xz),
            ("max_velocity_y", self.max_velocity_y),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(g3d_err!("galaxy3d::PlayerDesc", Error::InvalidConfig(format!(
                    "{} must be finite and >= 0, got {}", name, value
                ))));
            }
        }

        let vectors = [
            ("position", self.position),
            ("camera_offset", self.camera_offset),
            ("gravity", self.gravity),
        ];
        for (name, value) in vectors {
            if !value.is_finite() {
                return Err(g3d_err!("galaxy3d::PlayerDesc", Error::InvalidConfig(format!(
                    "{} must be finite, got {:?}", name, value
                ))));
            }
        }

        self.volume.validate()
    }
}

#[cfg(test)]
#[path = "player_desc_tests.rs"]
mod tests;
