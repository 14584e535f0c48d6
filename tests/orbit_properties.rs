use std::f32::consts::{FRAC_PI_4, TAU};

use planet_mindmap::render::orbit::{
    compute_all_positions, compute_ring_geometry, compute_ring_position, ring_slot, slot_angle,
    LayoutError, OrbitConfig,
};
use proptest::prelude::*;

fn default_cfg() -> OrbitConfig {
    OrbitConfig::default()
}

/// Difference of two angles folded into [0, 2π).
fn angle_delta(a: f32, b: f32) -> f32 {
    (b - a).rem_euclid(TAU)
}

proptest! {
    #[test]
    fn prop_one_position_per_child(n in 0usize..200) {
        let positions = compute_all_positions(n, &default_cfg()).unwrap();
        prop_assert_eq!(positions.len(), n);
    }

    #[test]
    fn prop_positions_are_deterministic(i in 0usize..10_000) {
        let cfg = default_cfg();
        let a = compute_ring_position(i, &cfg).unwrap();
        let b = compute_ring_position(i, &cfg).unwrap();
        prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
        prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
    }

    #[test]
    fn prop_all_positions_match_single_positions(n in 0usize..64) {
        let cfg = default_cfg();
        let all = compute_all_positions(n, &cfg).unwrap();
        for (i, p) in all.iter().enumerate() {
            prop_assert_eq!(*p, compute_ring_position(i, &cfg).unwrap());
        }
    }

    #[test]
    fn prop_outer_rings_are_strictly_larger(i1 in 0usize..500, i2 in 0usize..500) {
        let cfg = default_cfg();
        let r1 = ring_slot(i1, &cfg).unwrap().ring_index;
        let r2 = ring_slot(i2, &cfg).unwrap().ring_index;
        prop_assume!(r1 < r2);
        let g1 = compute_ring_geometry(r1, &cfg);
        let g2 = compute_ring_geometry(r2, &cfg);
        prop_assert!(g1.rx < g2.rx);
        prop_assert!(g1.ry < g2.ry);
    }

    #[test]
    fn prop_full_ring_is_evenly_spaced(ring in 0usize..50, capacity in 1usize..12) {
        let cfg = OrbitConfig { ring_capacity: capacity, ..default_cfg() };
        let step = TAU / capacity as f32;
        let start = ring * capacity;
        for i in start..start + capacity - 1 {
            let a = slot_angle(ring_slot(i, &cfg).unwrap(), &cfg);
            let b = slot_angle(ring_slot(i + 1, &cfg).unwrap(), &cfg);
            let delta = angle_delta(a, b);
            prop_assert!((delta - step).abs() < 1e-4, "i={} delta={}", i, delta);
        }
    }

    #[test]
    fn prop_positions_are_finite_and_on_their_ring(i in 0usize..1_000) {
        let cfg = default_cfg();
        let p = compute_ring_position(i, &cfg).unwrap();
        prop_assert!(p.x.is_finite() && p.y.is_finite());
        let g = compute_ring_geometry(ring_slot(i, &cfg).unwrap().ring_index, &cfg);
        let e = (p.x / g.rx).powi(2) + (p.y / g.ry).powi(2);
        prop_assert!((e - 1.0).abs() < 1e-3, "ellipse residual {}", e);
    }

    #[test]
    fn prop_zero_capacity_always_errors(i in 0usize..1_000) {
        let cfg = OrbitConfig { ring_capacity: 0, ..default_cfg() };
        prop_assert_eq!(compute_ring_position(i, &cfg), Err(LayoutError::ZeroRingCapacity));
    }
}

#[test]
fn ring_phases() {
    let cfg = default_cfg();
    assert_eq!(slot_angle(ring_slot(0, &cfg).unwrap(), &cfg), 0.0);
    assert!((slot_angle(ring_slot(4, &cfg).unwrap(), &cfg) - FRAC_PI_4).abs() < 1e-6);
    // Ring 2 is even again
    assert_eq!(slot_angle(ring_slot(8, &cfg).unwrap(), &cfg), 0.0);
}

#[test]
fn concrete_positions() {
    let cfg = default_cfg();

    let p0 = compute_ring_position(0, &cfg).unwrap();
    assert!((p0.x - 190.0).abs() < 1e-3 && p0.y.abs() < 1e-3);

    let p4 = compute_ring_position(4, &cfg).unwrap();
    assert!((p4.x - 325.27).abs() < 0.05, "x = {}", p4.x);
    assert!((p4.y - 183.85).abs() < 0.05, "y = {}", p4.y);
}

#[test]
fn custom_geometry_is_respected() {
    let cfg = OrbitConfig {
        ring_capacity: 3,
        base_rx: 100.0,
        base_ry: 50.0,
        ring_rx_step: 10.0,
        ring_ry_step: 5.0,
        odd_ring_phase: 0.0,
    };
    let p = compute_ring_position(3, &cfg).unwrap();
    assert!((p.x - 110.0).abs() < 1e-3 && p.y.abs() < 1e-3);
}
