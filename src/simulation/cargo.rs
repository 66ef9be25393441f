//! Cargo box drop simulation
//!
//! Boxes released from the helicopter snapshot the flight state at the
//! moment of release, then live their own lives: a quadratic fall (total
//! elapsed time squared, exactly as the source demo computes it), ground
//! pinning, a post-landing slide/spin clock, and removal after a fixed
//! lifetime.

use crate::simulation::flight::FlightState;

/// Whether a landed box's "time since grounded" clock keeps running
///
/// The source demo variants disagree on this, so it is an explicit
/// policy instead of a silent choice. `KeepRunning` (the default) keeps
/// the post-landing slide/spin advancing for the rest of the lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroundedClock {
    #[default]
    KeepRunning,
    Freeze,
}

/// Tunable cargo parameters
#[derive(Debug, Clone, Copy)]
pub struct CargoConfig {
    /// Mass-like coefficient of the quadratic fall
    pub gravity_coeff: f32,
    /// Box lifetime in simulated seconds; boxes past it are removed
    pub lifetime: f32,
    /// Post-landing horizontal slide, units per grounded second
    pub slide_rate: f32,
    /// Post-landing spin, degrees per grounded second
    pub spin_rate_deg: f32,
    pub grounded_clock: GroundedClock,
}

impl Default for CargoConfig {
    fn default() -> Self {
        Self {
            gravity_coeff: 0.49,
            lifetime: 5.0,
            slide_rate: 0.3,
            spin_rate_deg: 90.0,
            grounded_clock: GroundedClock::default(),
        }
    }
}

/// One dropped box, integrating its own local time
#[derive(Debug, Clone, Copy)]
pub struct CargoBox {
    /// Altitude at the moment of release
    pub spawn_height: f32,
    /// Orbit phase at the moment of release, degrees
    pub spawn_orbit_deg: f32,
    /// Throttle level at the moment of release
    pub spawn_motor_level: u8,
    /// Simulated seconds since release
    pub elapsed: f32,
    /// Simulated seconds since touching the ground (policy-dependent)
    pub grounded_elapsed: f32,
    pub landed: bool,
}

impl CargoBox {
    /// Releases a box, snapshotting the current flight state
    pub fn release(state: &FlightState) -> Self {
        Self {
            spawn_height: state.height,
            spawn_orbit_deg: state.orbit_phase_deg,
            spawn_motor_level: state.motor_level,
            elapsed: 0.0,
            grounded_elapsed: 0.0,
            landed: false,
        }
    }

    /// Advances this box by `dt` simulated seconds
    pub fn step(&mut self, dt: f32, cfg: &CargoConfig) {
        self.elapsed += dt;

        if self.raw_height(cfg) <= 0.0 {
            self.landed = true;
        }
        if self.landed && cfg.grounded_clock == GroundedClock::KeepRunning {
            self.grounded_elapsed += dt;
        }
    }

    /// Vertical position, pinned at ground level once landed
    pub fn height(&self, cfg: &CargoConfig) -> f32 {
        self.raw_height(cfg).max(0.0)
    }

    /// Post-landing horizontal slide distance
    pub fn slide_distance(&self, cfg: &CargoConfig) -> f32 {
        self.grounded_elapsed * cfg.slide_rate
    }

    /// Post-landing spin angle, degrees
    pub fn spin_deg(&self, cfg: &CargoConfig) -> f32 {
        self.grounded_elapsed * cfg.spin_rate_deg
    }

    pub fn expired(&self, cfg: &CargoConfig) -> bool {
        self.elapsed > cfg.lifetime
    }

    // Quadratic drop on total elapsed time, not incremental integration;
    // this matches the source demo exactly.
    fn raw_height(&self, cfg: &CargoConfig) -> f32 {
        self.spawn_height - self.elapsed * self.elapsed * cfg.gravity_coeff
    }
}

/// Advances every live box and removes the expired ones
///
/// Uses `retain`, so several boxes expiring in the same frame are all
/// removed without skipping or duplicating entries.
pub fn step_boxes(boxes: &mut Vec<CargoBox>, dt: f32, cfg: &CargoConfig) {
    for cargo in boxes.iter_mut() {
        cargo.step(dt, cfg);
    }
    boxes.retain(|cargo| !cargo.expired(cfg));
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn airborne_state(height: f32) -> FlightState {
        let mut state = FlightState::new();
        state.height = height;
        state.orbit_phase_deg = 45.0;
        state.motor_level = 5;
        state
    }

    #[test]
    fn test_release_snapshots_flight_state() {
        let state = airborne_state(1.5);
        let cargo = CargoBox::release(&state);
        assert_eq!(cargo.spawn_height, 1.5);
        assert_eq!(cargo.spawn_orbit_deg, 45.0);
        assert_eq!(cargo.spawn_motor_level, 5);
        assert_eq!(cargo.elapsed, 0.0);
        assert!(!cargo.landed);
    }

    #[test]
    fn test_fall_is_monotone_then_pinned_at_ground() {
        let cfg = CargoConfig::default();
        let mut cargo = CargoBox::release(&airborne_state(1.2));
        let mut previous = cargo.height(&cfg);

        while cargo.elapsed <= cfg.lifetime {
            cargo.step(DT, &cfg);
            let h = cargo.height(&cfg);
            assert!(h <= previous, "height must never increase");
            assert!(h >= 0.0, "height must stay pinned at ground level");
            previous = h;
        }
        assert!(cargo.landed);
        assert_eq!(cargo.height(&cfg), 0.0);
    }

    #[test]
    fn test_quadratic_fall_uses_total_elapsed() {
        let cfg = CargoConfig::default();
        let mut cargo = CargoBox::release(&airborne_state(2.0));
        for _ in 0..60 {
            cargo.step(DT, &cfg);
        }
        // One second in: height = spawn - 1^2 * g
        let expected = 2.0 - cargo.elapsed * cargo.elapsed * cfg.gravity_coeff;
        assert!((cargo.height(&cfg) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_grounded_clock_policies() {
        let mut running_cfg = CargoConfig::default();
        running_cfg.grounded_clock = GroundedClock::KeepRunning;
        let mut frozen_cfg = CargoConfig::default();
        frozen_cfg.grounded_clock = GroundedClock::Freeze;

        let mut running = CargoBox::release(&airborne_state(0.1));
        let mut frozen = CargoBox::release(&airborne_state(0.1));
        for _ in 0..120 {
            running.step(DT, &running_cfg);
            frozen.step(DT, &frozen_cfg);
        }

        assert!(running.landed && frozen.landed);
        assert!(running.grounded_elapsed > 0.0);
        assert_eq!(frozen.grounded_elapsed, 0.0);
        assert!(running.slide_distance(&running_cfg) > 0.0);
        assert_eq!(frozen.slide_distance(&frozen_cfg), 0.0);
    }

    #[test]
    fn test_removed_exactly_when_lifetime_exceeded() {
        let cfg = CargoConfig::default();
        let mut boxes = vec![CargoBox::release(&airborne_state(1.0))];

        // Advance to just below the lifetime
        step_boxes(&mut boxes, cfg.lifetime - 0.01, &cfg);
        assert_eq!(boxes.len(), 1);

        // Cross it
        step_boxes(&mut boxes, 0.02, &cfg);
        assert!(boxes.is_empty());
    }

    #[test]
    fn test_two_boxes_expiring_same_frame_both_removed() {
        let cfg = CargoConfig::default();
        let mut boxes = Vec::new();
        boxes.push(CargoBox::release(&airborne_state(1.0)));
        step_boxes(&mut boxes, 0.5, &cfg);
        boxes.push(CargoBox::release(&airborne_state(0.8)));

        // Push both past the lifetime in a single frame; the younger box
        // lands exactly past the cutoff, the older well beyond it
        step_boxes(&mut boxes, cfg.lifetime + 0.01, &cfg);
        assert!(boxes.is_empty());
    }

    #[test]
    fn test_staggered_releases_drain_to_empty() {
        let cfg = CargoConfig::default();
        let mut boxes = Vec::new();
        boxes.push(CargoBox::release(&airborne_state(1.5)));
        for i in 0..600 {
            if i == 120 {
                boxes.push(CargoBox::release(&airborne_state(0.7)));
            }
            step_boxes(&mut boxes, DT, &cfg);
        }
        assert!(boxes.is_empty());
    }
}
