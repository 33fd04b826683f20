/// Movement directions relative to the player's frame.
///
/// Decoded by `Player::move_in()` as the sum of the active unit axes;
/// opposite pairs cancel out.

use bitflags::bitflags;

bitflags! {
    /// Set of movement directions
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Direction: u32 {
        /// Along look
        const FORWARD  = 1 << 0;
        /// Against look
        const BACKWARD = 1 << 1;
        /// Against right
        const LEFT     = 1 << 2;
        /// Along right
        const RIGHT    = 1 << 3;
        /// Along up
        const UP       = 1 << 4;
        /// Against up
        const DOWN     = 1 << 5;
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::empty()
    }
}

impl Direction {
    /// Signed axis weights `(right, up, look)`, each in `{-1, 0, 1}`.
    pub fn axes(self) -> (f32, f32, f32) {
        fn axis(positive: bool, negative: bool) -> f32 {
            (positive as i8 - negative as i8) as f32
        }

        (
            axis(self.contains(Self::RIGHT), self.contains(Self::LEFT)),
            axis(self.contains(Self::UP), self.contains(Self::DOWN)),
            axis(self.contains(Self::FORWARD), self.contains(Self::BACKWARD)),
        )
    }
}

#[cfg(test)]
#[path = "direction_tests.rs"]
mod tests;
