//! Orbital ring layout for the mind map.
//!
//! Children of a node are placed on concentric ellipses ("rings") around the
//! parent's center. Each ring holds `ring_capacity` children spaced evenly by
//! angle; ring radii grow linearly outward and every odd ring is rotated by a
//! fixed phase so its spokes fall between the spokes of its neighbours.
//!
//! ```text
//!   index:        0  1  2  3 | 4  5  6  7 | 8 ...
//!   ring:         0  0  0  0 | 1  1  1  1 | 2 ...
//!   slot:         0  1  2  3 | 0  1  2  3 | 0 ...
//! ```
//!
//! All functions here are pure: same index and config, same bits out.

use std::f32::consts::{FRAC_PI_4, TAU};

use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  OrbitConfig
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Geometry of the orbital rings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Children per ring before the next ring starts
    pub ring_capacity: usize,
    /// Horizontal radius of ring 0
    pub base_rx: f32,
    /// Vertical radius of ring 0
    pub base_ry: f32,
    /// Horizontal radius added per ring
    pub ring_rx_step: f32,
    /// Vertical radius added per ring
    pub ring_ry_step: f32,
    /// Rotation applied to odd rings (radians)
    pub odd_ring_phase: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            ring_capacity: 4,
            base_rx: 190.0,
            base_ry: 160.0,
            ring_rx_step: 270.0,
            ring_ry_step: 100.0,
            odd_ring_phase: FRAC_PI_4,
        }
    }
}

impl OrbitConfig {
    /// Reject configurations that would divide by zero, stack rings on
    /// top of each other or produce non-finite coordinates.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.ring_capacity == 0 {
            return Err(LayoutError::ZeroRingCapacity);
        }
        let base_ok = self.base_rx.is_finite()
            && self.base_ry.is_finite()
            && self.base_rx > 0.0
            && self.base_ry > 0.0;
        if !base_ok {
            return Err(LayoutError::InvalidBaseRadius {
                rx: self.base_rx,
                ry: self.base_ry,
            });
        }
        if !self.odd_ring_phase.is_finite() {
            return Err(LayoutError::NonFinitePhase(self.odd_ring_phase));
        }
        let steps_ok = self.ring_rx_step.is_finite()
            && self.ring_ry_step.is_finite()
            && self.ring_rx_step > 0.0
            && self.ring_ry_step > 0.0;
        if !steps_ok {
            return Err(LayoutError::NonIncreasingRings {
                rx_step: self.ring_rx_step,
                ry_step: self.ring_ry_step,
            });
        }
        Ok(())
    }

    /// Angle between neighbouring slots of one ring.
    #[inline]
    fn angle_step(&self) -> f32 {
        TAU / self.ring_capacity as f32
    }
}

/// Invalid layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// `ring_capacity` of zero leaves no slots and no angle step
    #[error("ring capacity must be at least 1")]
    ZeroRingCapacity,
    /// Ring radii must strictly grow outward
    #[error("ring radius steps must be positive (rx_step={rx_step}, ry_step={ry_step})")]
    NonIncreasingRings { rx_step: f32, ry_step: f32 },
    /// Ring 0 needs finite, positive radii
    #[error("base ring radii must be positive and finite (rx={rx}, ry={ry})")]
    InvalidBaseRadius { rx: f32, ry: f32 },
    #[error("odd ring phase must be finite (got {0})")]
    NonFinitePhase(f32),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Derived values
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Which ring a child lands on, and where on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RingSlot {
    /// 0 = innermost ring
    pub ring_index: usize,
    /// Angular slot within the ring
    pub position_in_ring: usize,
}

/// Offset from the parent's center, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Radii of one ring's guide ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub rx: f32,
    pub ry: f32,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Layout operations
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Split a child index into ring and slot.
pub fn ring_slot(index: usize, cfg: &OrbitConfig) -> Result<RingSlot, LayoutError> {
    if cfg.ring_capacity == 0 {
        return Err(LayoutError::ZeroRingCapacity);
    }
    Ok(RingSlot {
        ring_index: index / cfg.ring_capacity,
        position_in_ring: index % cfg.ring_capacity,
    })
}

/// Radii of ring `ring_index`.
pub fn compute_ring_geometry(ring_index: usize, cfg: &OrbitConfig) -> RingGeometry {
    let r = ring_index as f32;
    RingGeometry {
        rx: cfg.base_rx + r * cfg.ring_rx_step,
        ry: cfg.base_ry + r * cfg.ring_ry_step,
    }
}

/// Angle (radians) of a slot, including the odd-ring phase.
pub fn slot_angle(slot: RingSlot, cfg: &OrbitConfig) -> f32 {
    let base = if slot.ring_index % 2 == 1 {
        cfg.odd_ring_phase
    } else {
        0.0
    };
    base + slot.position_in_ring as f32 * cfg.angle_step()
}

/// Position of child `index` relative to its parent's center.
pub fn compute_ring_position(
    index: usize,
    cfg: &OrbitConfig,
) -> Result<Position, LayoutError> {
    let slot = ring_slot(index, cfg)?;
    let RingGeometry { rx, ry } = compute_ring_geometry(slot.ring_index, cfg);
    let angle = slot_angle(slot, cfg);
    Ok(Position {
        x: angle.cos() * rx,
        y: angle.sin() * ry,
    })
}

/// Positions for the first `count` children, index-aligned.
///
/// `count == 0` yields an empty vector. The configuration is validated even
/// then, so a broken config is reported on the first refresh rather than on
/// the first task.
pub fn compute_all_positions(
    count: usize,
    cfg: &OrbitConfig,
) -> Result<Vec<Position>, LayoutError> {
    cfg.validate()?;
    (0..count).map(|i| compute_ring_position(i, cfg)).collect()
}

/// Distinct rings occupied by `count` children, innermost first.
pub fn occupied_rings(count: usize, cfg: &OrbitConfig) -> Result<Vec<usize>, LayoutError> {
    if cfg.ring_capacity == 0 {
        return Err(LayoutError::ZeroRingCapacity);
    }
    Ok((0..count.div_ceil(cfg.ring_capacity)).collect())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  OrbitLayoutCache
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Memoized positions keyed on `(child count, config)`.
///
/// Positions depend on nothing else, so a refresh that keeps the task count
/// reuses the previous vector.
#[derive(Debug, Default)]
pub struct OrbitLayoutCache {
    key: Option<(usize, OrbitConfig)>,
    positions: Vec<Position>,
}

impl OrbitLayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positions(
        &mut self,
        count: usize,
        cfg: &OrbitConfig,
    ) -> Result<&[Position], LayoutError> {
        let key = (count, *cfg);
        if self.key == Some(key) {
            log::debug!("Layout cache HIT: {} children", count);
        } else {
            log::debug!("Layout cache MISS: {} children", count);
            self.positions = compute_all_positions(count, cfg)?;
            self.key = Some(key);
        }
        Ok(&self.positions)
    }
}
