//! Draw-list generation for the orbital map.
//!
//! Maps a laid-out `Node` to flat primitives that any 2D surface can paint:
//! the sun (root), one guide ellipse per ring, a planet per task and a label
//! under each planet. Coordinates are offsets from the root's center.

use crate::mindmap::{
    halo_color, Node, PlanetKind, TaskStatus, ASTRO_GRAY, DAYLIGHT_BLUE, LUNAR_BLACK,
    SOLAR_WHITE, SPACE_BACKGROUND, SUNSET_GOLD,
};
use crate::render::orbit::{
    compute_ring_geometry, occupied_rings, LayoutError, OrbitConfig, Position,
};

/// Sun disc radius (8rem at 16px)
pub const SUN_RADIUS: f32 = 64.0;
/// Planet disc radius (6rem at 16px)
pub const PLANET_RADIUS: f32 = 48.0;
/// Label baseline below the planet center
pub const LABEL_OFFSET: f32 = PLANET_RADIUS + 32.0;

/// How guide ellipses are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuideMode {
    /// One ellipse per occupied ring
    #[default]
    PerRing,
    /// One ellipse per child; identical rings overlap exactly
    PerChild,
}

/// Map primitive types
#[derive(Debug, Clone, PartialEq)]
pub enum MapPrimitive {
    /// Root node at the origin
    Sun {
        radius: f32,
        label: String,
        color: [u8; 3],
        text_color: [u8; 3],
    },
    /// Orbit guide centered on the root
    Ellipse {
        ring_index: usize,
        rx: f32,
        ry: f32,
        stroke_width: f32,
        color: [u8; 3],
        opacity: f32,
    },
    /// Task body
    Planet {
        index: usize,
        id: String,
        center: [f32; 2],
        radius: f32,
        halo: [u8; 3],
        kind: PlanetKind,
        /// Assignee names, shown over chosen/completed planets
        badge: Option<String>,
    },
    /// Task caption below a planet
    Label {
        index: usize,
        position: [f32; 2],
        text: String,
        color: [u8; 3],
    },
}

/// Complete scene for one root
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub primitives: Vec<MapPrimitive>,
    pub background_color: [u8; 3],
}

impl MapScene {
    pub fn planets(&self) -> impl Iterator<Item = &MapPrimitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, MapPrimitive::Planet { .. }))
    }

    pub fn guides(&self) -> impl Iterator<Item = &MapPrimitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, MapPrimitive::Ellipse { .. }))
    }
}

/// Build the scene for `root` from positions computed for its children.
///
/// `positions` must be index-aligned with `root.children`.
pub fn build_scene(
    root: &Node,
    positions: &[Position],
    cfg: &OrbitConfig,
    guides: GuideMode,
) -> Result<MapScene, LayoutError> {
    let mut primitives = Vec::with_capacity(1 + root.children.len() * 3);

    // Guides first so planets paint over them
    let ring_indices = match guides {
        GuideMode::PerRing => occupied_rings(root.children.len(), cfg)?,
        GuideMode::PerChild => {
            cfg.validate()?;
            (0..root.children.len()).map(|i| i / cfg.ring_capacity).collect()
        }
    };
    for ring_index in ring_indices {
        let g = compute_ring_geometry(ring_index, cfg);
        primitives.push(MapPrimitive::Ellipse {
            ring_index,
            rx: g.rx,
            ry: g.ry,
            stroke_width: 2.0,
            color: ASTRO_GRAY,
            opacity: 0.7,
        });
    }

    primitives.push(MapPrimitive::Sun {
        radius: SUN_RADIUS,
        label: root.label.clone(),
        color: SUNSET_GOLD,
        text_color: LUNAR_BLACK,
    });

    for (index, (child, pos)) in root.children.iter().zip(positions).enumerate() {
        let (halo, kind, badge) = match &child.task {
            Some(task) => {
                let started = matches!(task.status, TaskStatus::Chosen | TaskStatus::Completed);
                let badge =
                    (started && !task.assigned_to.is_empty()).then(|| task.assignee_names());
                (halo_color(task), task.planet, badge)
            }
            None => (DAYLIGHT_BLUE, PlanetKind::for_id(&child.id), None),
        };

        primitives.push(MapPrimitive::Planet {
            index,
            id: child.id.clone(),
            center: [pos.x, pos.y],
            radius: PLANET_RADIUS,
            halo,
            kind,
            badge,
        });
        primitives.push(MapPrimitive::Label {
            index,
            position: [pos.x, pos.y + LABEL_OFFSET],
            text: child.label.clone(),
            color: SOLAR_WHITE,
        });
    }

    Ok(MapScene {
        primitives,
        background_color: SPACE_BACKGROUND,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mindmap::TaskRecord;
    use crate::render::orbit::compute_all_positions;

    fn root_with(n: usize) -> Node {
        let records = (0..n)
            .map(|i| TaskRecord {
                id: format!("t{i}"),
                task_name: format!("Task {i}"),
                ..TaskRecord::default()
            })
            .collect();
        Node::from_records("Project", records)
    }

    #[test]
    fn one_planet_and_label_per_child() {
        let cfg = OrbitConfig::default();
        let root = root_with(6);
        let positions = compute_all_positions(6, &cfg).unwrap();
        let scene = build_scene(&root, &positions, &cfg, GuideMode::PerRing).unwrap();

        assert_eq!(scene.planets().count(), 6);
        let labels = scene
            .primitives
            .iter()
            .filter(|p| matches!(p, MapPrimitive::Label { .. }))
            .count();
        assert_eq!(labels, 6);
        assert_eq!(scene.background_color, SPACE_BACKGROUND);
    }

    #[test]
    fn guide_modes() {
        let cfg = OrbitConfig::default();
        let root = root_with(9);
        let positions = compute_all_positions(9, &cfg).unwrap();

        let per_ring = build_scene(&root, &positions, &cfg, GuideMode::PerRing).unwrap();
        let rings: Vec<usize> = per_ring
            .guides()
            .map(|g| match g {
                MapPrimitive::Ellipse { ring_index, .. } => *ring_index,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(rings, vec![0, 1, 2]);

        let per_child = build_scene(&root, &positions, &cfg, GuideMode::PerChild).unwrap();
        assert_eq!(per_child.guides().count(), 9);
    }

    #[test]
    fn empty_root_has_only_the_sun() {
        let cfg = OrbitConfig::default();
        let scene = build_scene(&Node::root("Solo"), &[], &cfg, GuideMode::PerRing).unwrap();
        assert_eq!(scene.primitives.len(), 1);
        assert!(matches!(&scene.primitives[0], MapPrimitive::Sun { label, .. } if label == "Solo"));
    }

    #[test]
    fn planets_sit_at_layout_positions() {
        let cfg = OrbitConfig::default();
        let root = root_with(5);
        let positions = compute_all_positions(5, &cfg).unwrap();
        let scene = build_scene(&root, &positions, &cfg, GuideMode::PerRing).unwrap();
        for planet in scene.planets() {
            if let MapPrimitive::Planet { index, center, .. } = planet {
                assert_eq!(*center, [positions[*index].x, positions[*index].y]);
            }
        }
    }
}
