//! Error types for the Galaxy3D player
//!
//! Player kinematics never fail: out-of-range input saturates. Errors only
//! come from building a player out of bad configuration.

use std::fmt;

/// Result type for Galaxy3D player operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D player errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A `PlayerDesc` field is out of range or not finite
    InvalidConfig(String),

    /// Collision volume with inverted or non-finite extents
    InvalidVolume(String),

    /// Camera could not be created for the player
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::InvalidVolume(msg) => write!(f, "Invalid volume: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at its creation site and evaluate to it.
///
/// ```ignore
/// return Err(g3d_err!("galaxy3d::Player", Error::InvalidConfig(msg)));
/// ```
#[macro_export]
macro_rules! g3d_err {
    ($source:expr, $error:expr) => {{
        let error = $error;
        $crate::g3d_error!($source, "{}", error);
        error
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
