pub mod orbit;
pub mod hit;
pub mod scene;
pub mod animator;

pub use orbit::{
    compute_all_positions, compute_ring_geometry, compute_ring_position, LayoutError,
    OrbitConfig, OrbitLayoutCache, Position, RingGeometry, RingSlot,
};
pub use scene::{build_scene, GuideMode, MapPrimitive, MapScene};
