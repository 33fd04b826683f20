/// Basis — look/right/up orientation frame.
///
/// Left-handed, +Z forward: the default frame is look = +Z, right = +X,
/// up = +Y, and `right = up × look`.
///
/// Rotations accumulate floating-point error. `orthonormalize()` rebuilds a
/// perpendicular unit frame from the drifted one and must run after every
/// rotation.

use glam::{Quat, Vec3};

/// Orthonormal look/right/up frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Forward direction
    pub look: Vec3,
    /// Right-hand side direction
    pub right: Vec3,
    /// Up direction
    pub up: Vec3,
}

impl Default for Basis {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Basis {
    /// Axis-aligned frame: look +Z, right +X, up +Y
    pub const IDENTITY: Basis = Basis {
        look: Vec3::Z,
        right: Vec3::X,
        up: Vec3::Y,
    };

    /// Rotate look and right around `axis` by `angle` radians.
    ///
    /// `axis` must be unit length. Up is left untouched; call
    /// `orthonormalize()` afterwards.
    pub fn rotate_about(&mut self, axis: Vec3, angle: f32) {
        let rotation = Quat::from_axis_angle(axis, angle);
        self.look = rotation * self.look;
        self.right = rotation * self.right;
    }

    /// Regenerate a perpendicular, unit-length frame.
    ///
    /// Look keeps its direction; right and up are re-derived from it.
    pub fn orthonormalize(&mut self) {
        self.look = self.look.normalize();
        self.right = self.up.cross(self.look).normalize();
        self.up = self.look.cross(self.right).normalize();
    }

    /// Largest deviation from an orthonormal frame.
    ///
    /// Max over `| |v| - 1 |` for each axis and `|a · b|` for each pair.
    pub fn orthonormal_error(&self) -> f32 {
        let lengths = [self.look, self.right, self.up]
            .iter()
            .map(|v| (v.length() - 1.0).abs())
            .fold(0.0_f32, f32::max);
        let dots = [
            self.look.dot(self.right),
            self.right.dot(self.up),
            self.up.dot(self.look),
        ]
        .iter()
        .map(|d| d.abs())
        .fold(0.0_f32, f32::max);
        lengths.max(dots)
    }

    /// `right * x + up * y + look * z`
    pub fn combine(&self, x: f32, y: f32, z: f32) -> Vec3 {
        self.right * x + self.up * y + self.look * z
    }
}

/// Approximate normalization.
///
/// Reciprocal square root estimate (bit trick plus one Newton-Raphson step,
/// relative error below 0.2%). Good enough for input directions, which are
/// sums of at most three unit axes and never accumulate across frames.
/// A zero vector stays zero.
pub fn normalize_est(v: Vec3) -> Vec3 {
    let length_squared = v.length_squared();
    if length_squared <= f32::MIN_POSITIVE {
        return Vec3::ZERO;
    }
    v * rsqrt_est(length_squared)
}

fn rsqrt_est(x: f32) -> f32 {
    let half = 0.5 * x;
    let estimate = f32::from_bits(0x5f37_59df - (x.to_bits() >> 1));
    estimate * (1.5 - half * estimate * estimate)
}

#[cfg(test)]
#[path = "basis_tests.rs"]
mod tests;
