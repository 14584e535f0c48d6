//! Planet spin animator.
//!
//! Each planet turns on its own axis at a constant rate. Outer planets turn
//! slower so neighbouring sprites never spin in lockstep:
//! - period(index) = 40 + 7 * index seconds per revolution
//! - the sun does not spin

use std::f32::consts::TAU;

/// Revolution time of the first planet (seconds)
pub const BASE_SPIN_PERIOD: f32 = 40.0;
/// Extra revolution time per child index (seconds)
pub const SPIN_PERIOD_STEP: f32 = 7.0;

/// Seconds for planet `index` to complete one revolution.
#[inline]
pub fn spin_period(index: usize) -> f32 {
    BASE_SPIN_PERIOD + SPIN_PERIOD_STEP * index as f32
}

/// Rotation of planet `index` at time `t` (seconds since start), in `[0, 2π)`.
pub fn spin_angle(index: usize, t: f32) -> f32 {
    let turns = (t / spin_period(index)).fract();
    let angle = turns * TAU;
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Rotate a sprite-local offset by `angle`.
#[inline]
pub fn rotate(offset: [f32; 2], angle: f32) -> [f32; 2] {
    let (s, c) = angle.sin_cos();
    [offset[0] * c - offset[1] * s, offset[0] * s + offset[1] * c]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_grow_by_seven_seconds() {
        assert_eq!(spin_period(0), 40.0);
        assert_eq!(spin_period(1), 47.0);
        assert_eq!(spin_period(4), 68.0);
    }

    #[test]
    fn angle_wraps_each_period() {
        assert!(spin_angle(0, 0.0).abs() < 1e-6);
        assert!((spin_angle(0, 10.0) - TAU / 4.0).abs() < 1e-4);
        assert!(spin_angle(0, 40.0) < 1e-4);
        assert!((spin_angle(1, 23.5) - TAU / 2.0).abs() < 1e-4);
    }

    #[test]
    fn angle_stays_in_range_for_negative_time() {
        let a = spin_angle(2, -5.0);
        assert!((0.0..TAU).contains(&a), "{a}");
    }

    #[test]
    fn rotate_quarter_turn() {
        let r = rotate([1.0, 0.0], TAU / 4.0);
        assert!(r[0].abs() < 1e-6 && (r[1] - 1.0).abs() < 1e-6);
    }
}
