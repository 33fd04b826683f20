//! Math module — orientation frames and angle helpers.
//!
//! Thin layer over `glam` for the bits the player and camera share:
//! the look/right/up frame with drift correction, the approximate
//! normalization used for input directions, and angle clamping/wrapping.

mod basis;
mod angle;

pub use basis::{Basis, normalize_est};
pub use angle::{clamp_with_overshoot, wrap_angle};
