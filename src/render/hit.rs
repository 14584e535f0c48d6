//! Pointer selection on the orbital map.
//!
//! The layout engine only knows offsets from the parent's center. This module
//! turns a pointer position back into a child index and places the detail
//! panel beside the selected planet.

use super::orbit::Position;

/// Horizontal shift applied to the detail panel so it does not cover the
/// planet it describes.
pub const PANEL_LATERAL_BIAS: f32 = 100.0;

/// A selected child together with the data needed to draw its panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Index into the parent's (visible) children
    pub index: usize,
    /// Id of the selected node; survives reorderings, unlike `index`
    pub node_id: String,
    /// Offset of the planet from the parent center
    pub position: Position,
    /// Absolute anchor of the detail panel
    pub anchor: [f32; 2],
}

impl Selection {
    pub fn new(
        index: usize,
        node_id: impl Into<String>,
        position: Position,
        parent_center: [f32; 2],
    ) -> Self {
        Self {
            index,
            node_id: node_id.into(),
            position,
            anchor: panel_anchor(parent_center, position),
        }
    }
}

/// Absolute anchor for the detail panel: `center + (x + 100, y)`.
#[inline]
pub fn panel_anchor(parent_center: [f32; 2], position: Position) -> [f32; 2] {
    [
        parent_center[0] + position.x + PANEL_LATERAL_BIAS,
        parent_center[1] + position.y,
    ]
}

/// Nearest child whose disc of `hit_radius` contains `pointer`.
///
/// Compares squared distances; on an exact tie the lower index wins.
pub fn pick_child(
    positions: &[Position],
    parent_center: [f32; 2],
    pointer: [f32; 2],
    hit_radius: f32,
) -> Option<usize> {
    let r2 = hit_radius * hit_radius;
    let mut best: Option<(usize, f32)> = None;

    for (i, p) in positions.iter().enumerate() {
        let dx = parent_center[0] + p.x - pointer[0];
        let dy = parent_center[1] + p.y - pointer[1];
        let d2 = dx * dx + dy * dy;
        if d2 > r2 {
            continue;
        }
        match best {
            Some((_, best_d2)) if best_d2 <= d2 => {}
            _ => best = Some((i, d2)),
        }
    }

    best.map(|(i, _)| i)
}
