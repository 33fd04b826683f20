//! Camera module — first-person camera driven by a player.
//!
//! The camera does not own or reference its player. The player owns the
//! camera and pushes position deltas and rotations into it; the camera
//! turns that into view/projection matrices for the renderer.

mod camera;

pub use camera::{Camera, CameraUniform};
