/*!
# Galaxy 3D Player

First-person player and camera controller for the Galaxy 3D engine.

The player tracks a movable entity's position and orientation, integrates
simple physics (gravity, friction, velocity clamping) and drives the camera it
owns. Windowing, timing and rendering stay with the host application: it calls
`Player::update(dt)` once per tick and forwards decoded input to
`Player::move_in` / `Player::rotate`.

## Architecture

- **Basis**: look/right/up frame with drift correction (`math`)
- **Player**: kinematic integration and orientation bookkeeping
- **Camera**: view transform kept in lockstep with the player
- **Diagnostics**: global logger registry shared by all of the above
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod math;
pub mod player;
pub mod camera;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::diagnostics::Diagnostics;

    // Player and its configuration
    pub use crate::player::{Direction, Player, PlayerDesc, VolumeInfo};

    // Camera driven by the player
    pub use crate::camera::{Camera, CameraUniform};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }
}

// Re-export math library at crate root
pub use glam;
