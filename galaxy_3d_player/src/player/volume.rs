/// Player collision volume.
///
/// An object-space axis-aligned box. The player only stores it; collision
/// systems read it back through `Player::volume_info()` and place it in the
/// world with `translated()`.

use glam::Vec3;
use crate::error::{Error, Result};
use crate::g3d_err;

/// Object-space collision extents
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VolumeInfo {
    /// Minimum object-space extents
    pub min: Vec3,
    /// Maximum object-space extents
    pub max: Vec3,
}

impl VolumeInfo {
    /// Checked constructor.
    ///
    /// # Errors
    ///
    /// `Error::InvalidVolume` if any component is not finite or `min`
    /// exceeds `max` on any axis.
    pub fn new(min: Vec3, max: Vec3) -> Result<Self> {
        let volume = Self { min, max };
        volume.validate()?;
        Ok(volume)
    }

    /// Box of the given full size centered on the origin.
    pub fn from_size(size: Vec3) -> Result<Self> {
        Self::new(-size * 0.5, size * 0.5)
    }

    /// Check extents without constructing.
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(g3d_err!("galaxy3d::VolumeInfo", Error::InvalidVolume(format!(
                "non-finite extents min {:?} max {:?}", self.min, self.max
            ))));
        }
        if !self.is_ordered() {
            return Err(g3d_err!("galaxy3d::VolumeInfo", Error::InvalidVolume(format!(
                "min {:?} exceeds max {:?}", self.min, self.max
            ))));
        }
        Ok(())
    }

    /// True when `min <= max` on every axis.
    pub fn is_ordered(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// World-space box for an owner at `position`.
    pub fn translated(&self, position: Vec3) -> VolumeInfo {
        VolumeInfo {
            min: self.min + position,
            max: self.max + position,
        }
    }

    /// Test if this box overlaps or touches another.
    pub fn intersects(&self, other: &VolumeInfo) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }
}

#[cfg(test)]
#[path = "volume_tests.rs"]
mod tests;
