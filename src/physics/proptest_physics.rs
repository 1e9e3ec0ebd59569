//! Property-based tests for the physics core and camera using proptest.
//!
//! These tests verify the invariants of the force law, the integrator and
//! the view model across a wide range of inputs.

use bevy::color::Color;
use bevy::math::DVec2;
use proptest::prelude::*;

use super::{attraction, SimulationConfig, SimulationWorld};
use crate::body::Body;
use crate::camera::CameraState;
use crate::test_utils::{assertions, fixtures};
use crate::types::{AU_TO_METERS, G, TRAIL_LENGTH};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Newton's third law: equal magnitude, opposite direction.
    #[test]
    fn prop_attraction_is_antisymmetric(
        ax in -50.0f64..50.0,
        ay in -50.0f64..50.0,
        bx in -50.0f64..50.0,
        by in -50.0f64..50.0,
        mass_a in 1.0e20f64..1.0e31,
        mass_b in 1.0e20f64..1.0e31,
    ) {
        let a = Body::new("a", DVec2::new(ax, ay) * AU_TO_METERS, mass_a, 1.0, Color::WHITE);
        let b = Body::new("b", DVec2::new(bx, by) * AU_TO_METERS, mass_b, 1.0, Color::WHITE);
        prop_assume!(a.distance_to(&b) > 1.0e3);

        let on_a = attraction(&a, &b, G).unwrap();
        let on_b = attraction(&b, &a, G).unwrap();

        let magnitude = on_a.length();
        prop_assert!(((on_b.length() - magnitude) / magnitude).abs() < 1e-12);
        prop_assert!((on_a + on_b).length() <= magnitude * 1e-12);
    }

    /// Total momentum of an isolated two-body system is conserved.
    #[test]
    fn prop_two_body_momentum_conserved(
        central_mass in 1.0e29f64..1.0e31,
        distance_au in 0.3f64..5.0,
        angle in 0.0f64..std::f64::consts::TAU,
        planet_mass in 1.0e22f64..1.0e28,
        speed_factor in 0.7f64..1.2,
        dt in 3_600.0f64..86_400.0,
        steps in 50usize..200,
    ) {
        let mut world = fixtures::two_body_world(
            SimulationConfig::default(),
            fixtures::sun(central_mass),
            fixtures::planet(central_mass, distance_au, angle, planet_mass, speed_factor),
        );
        // Scale the default one-day step down to `dt`
        world.set_speed_multiplier(dt / world.time_step()).unwrap();

        let before = world.total_momentum();
        let mut scale = assertions::momentum_scale(&world);
        for _ in 0..steps {
            world.step();
            scale = scale.max(assertions::momentum_scale(&world));
        }
        let after = world.total_momentum();

        prop_assert!(
            assertions::momentum_conserved(before, after, scale, 1e-9),
            "momentum drifted from {:?} to {:?}", before, after
        );
    }

    /// Trails never grow past their bound.
    #[test]
    fn prop_trail_is_bounded(steps in TRAIL_LENGTH..(TRAIL_LENGTH * 3)) {
        let mut world = fixtures::two_body_world(
            SimulationConfig::default(),
            fixtures::sun(1.98892e30),
            fixtures::planet(1.98892e30, 1.0, 0.0, 5.9742e24, 1.0),
        );
        for _ in 0..steps {
            world.step();
            prop_assert!(world.bodies().iter().all(|b| b.trail_len() <= TRAIL_LENGTH));
        }
        prop_assert!(world.bodies().iter().all(|b| b.trail_len() == TRAIL_LENGTH));
    }

    /// Equal numbers of doublings and halvings, in any order, restore the time step.
    #[test]
    fn prop_speed_changes_reversible(doublings in proptest::collection::vec(any::<bool>(), 0..15)) {
        let mut world = SimulationWorld::default();
        let original = world.time_step();

        // Every doubling is paired with a halving, halvings first
        for _ in &doublings {
            world.set_speed_multiplier(0.5).unwrap();
        }
        for double_first in &doublings {
            if *double_first {
                world.set_speed_multiplier(2.0).unwrap();
            } else {
                world.set_speed_multiplier(2.0).unwrap();
                world.set_speed_multiplier(2.0).unwrap();
                world.set_speed_multiplier(0.5).unwrap();
            }
        }

        prop_assert!(((world.time_step() - original) / original).abs() < 1e-12);
    }

    /// Smoothing moves strictly toward the target and never overshoots.
    #[test]
    fn prop_tick_converges_monotonically(
        notches in prop_oneof![-6i32..=-1, 1i32..=6],
        ticks in 1usize..40,
    ) {
        let mut camera = CameraState::default();
        let target = camera.set_zoom_target(notches as f64).unwrap();

        for _ in 0..ticks {
            let before = camera.current_scale();
            let after = camera.tick();
            if target > before {
                prop_assert!(before < after && after < target);
            } else {
                prop_assert!(target < after && after < before);
            }
        }
    }

    /// Resetting the offset always returns to the origin.
    #[test]
    fn prop_reset_offset_returns_to_origin(
        pans in proptest::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 0..30),
    ) {
        let mut camera = CameraState::default();
        for (dx, dy) in pans {
            camera.pan(DVec2::new(dx, dy)).unwrap();
        }
        camera.reset_offset();
        prop_assert_eq!(camera.offset(), DVec2::ZERO);
    }
}
