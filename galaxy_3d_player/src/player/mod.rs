//! Player module — first-person kinematics.
//!
//! The player integrates gravity, velocity clamping and friction each tick,
//! keeps its look/right/up frame orthonormal, and drives the camera it owns.
//! Input handling is the host's job: it hands in pre-decoded `Direction`
//! sets and rotation deltas.

mod direction;
mod volume;
mod player_desc;
mod player;

pub use direction::Direction;
pub use volume::VolumeInfo;
pub use player_desc::PlayerDesc;
pub use player::{
    Player,
    PITCH_LIMIT, ROLL_LIMIT,
    DEFAULT_MAX_VELOCITY_XZ, DEFAULT_MAX_VELOCITY_Y, DEFAULT_FRICTION, DEFAULT_CAMERA_LAG,
};
