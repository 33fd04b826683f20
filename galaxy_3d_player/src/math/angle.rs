use std::f32::consts::TAU;

/// Accumulate `delta` into `accumulated`, saturating at ±`limit`.
///
/// Returns `(stored, applied)`: the new clamped value and the part of
/// `delta` that was actually applied (`delta` minus the overshoot), so a
/// follower rotated by `applied` never leaves the allowed range either.
pub fn clamp_with_overshoot(accumulated: f32, delta: f32, limit: f32) -> (f32, f32) {
    let target = accumulated + delta;
    if target > limit {
        (limit, delta - (target - limit))
    } else if target < -limit {
        (-limit, delta - (target + limit))
    } else {
        (target, delta)
    }
}

/// Wrap an angle into `[0, 2π)`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

#[cfg(test)]
#[path = "angle_tests.rs"]
mod tests;
