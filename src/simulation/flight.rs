//! Helicopter flight dynamics
//!
//! Discrete-time motion model advanced once per rendered frame. Vertical
//! speed is a per-level lookup table driven by the motor throttle, blade
//! spin eases toward a rate derived from altitude and throttle, lateral
//! motion is a phase accumulator on a fixed-radius orbit, and the leaning
//! accumulator ramps while moving and decays to a small resting floor.

/// Vertical speed per motor level, in height units per simulated second
///
/// The source defines this level-by-level with a gap at level 3, which is
/// treated as exactly zero (neutral hover). Kept as a table, not a curve.
pub const MOTOR_CLIMB_TABLE: [f32; 9] = [
    -0.04, // 0: motor off, fast descent
    -0.02, // 1
    -0.01, // 2
    0.0,   // 3: hover
    0.01,  // 4
    0.02,  // 5
    0.03,  // 6
    0.04,  // 7
    0.05,  // 8: full throttle
];

/// Highest motor throttle level
pub const MAX_MOTOR_LEVEL: u8 = 8;

/// Tunable flight parameters
#[derive(Debug, Clone, Copy)]
pub struct FlightConfig {
    /// Upper height clamp; the floor is always 0
    pub ceiling: f32,
    /// Global multiplier on vertical speed
    pub speed_factor: f32,
    /// Radius of the lateral orbit path
    pub orbit_radius: f32,
    /// Orbit advance rate while moving, degrees per simulated second
    pub orbit_rate_deg: f32,
    /// Bound on the leaning accumulator while moving
    pub lean_max_deg: f32,
    /// Leaning ramp-up rate, degrees per second
    pub lean_ramp_deg: f32,
    /// Leaning decay rate when idle, degrees per second
    pub lean_decay_deg: f32,
    /// Resting value the lean decays to (slightly negative)
    pub lean_floor_deg: f32,
    /// Below this height the craft counts as (softly) landed
    pub soft_land_height: f32,
    /// Blade rate with the motor engaged at height 0, degrees per second
    pub blade_base_rate_deg: f32,
    /// Extra blade rate per unit of height
    pub blade_height_gain_deg: f32,
    /// Extra blade rate per motor level
    pub blade_motor_gain_deg: f32,
    /// Exponential approach rate toward the target blade speed (1/s);
    /// gives the smooth spin-down when the motor cuts out airborne
    pub blade_spindown: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            ceiling: 2.0,
            speed_factor: 1.0,
            orbit_radius: 1.6,
            orbit_rate_deg: 120.0,
            lean_max_deg: 30.0,
            lean_ramp_deg: 45.0,
            lean_decay_deg: 60.0,
            lean_floor_deg: -2.0,
            soft_land_height: 0.05,
            blade_base_rate_deg: 360.0,
            blade_height_gain_deg: 240.0,
            blade_motor_gain_deg: 90.0,
            blade_spindown: 2.5,
        }
    }
}

/// Per-frame mutable flight state
///
/// Mutated only by [`FlightState::step`] and the discrete input methods;
/// the scene composer reads it when building the helicopter's transform
/// chain.
#[derive(Debug, Clone, Copy)]
pub struct FlightState {
    /// Simulated time, frame-accumulated
    pub time: f32,
    /// Altitude, clamped to [0, ceiling]
    pub height: f32,
    /// Discrete throttle, [0, MAX_MOTOR_LEVEL]
    pub motor_level: u8,
    /// Main/tail rotor spin phase, degrees, monotonic
    pub blade_phase_deg: f32,
    /// Current blade spin rate, degrees per second
    pub blade_rate_deg: f32,
    /// Fraction-of-revolution accumulator for the lateral orbit, degrees
    pub orbit_phase_deg: f32,
    /// Stored leaning accumulator, degrees; see [`FlightState::applied_lean_deg`]
    pub lean_deg: f32,
    /// True between the begin/end lateral-move input events
    pub moving_left: bool,
}

impl FlightState {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            height: 0.0,
            motor_level: 0,
            blade_phase_deg: 0.0,
            blade_rate_deg: 0.0,
            orbit_phase_deg: 0.0,
            lean_deg: 0.0,
            moving_left: false,
        }
    }

    /// Advances the simulation by `dt` simulated seconds
    pub fn step(&mut self, dt: f32, cfg: &FlightConfig) {
        self.time += dt;

        // motor_level is a public field; tolerate writes past the table
        let level = self.motor_level.min(MAX_MOTOR_LEVEL);
        let climb = MOTOR_CLIMB_TABLE[level as usize];
        self.height = (self.height + climb * cfg.speed_factor * dt).clamp(0.0, cfg.ceiling);

        // Blade speed eases toward its target so cutting the motor while
        // airborne spins the blades down instead of halting them.
        let target_rate = if self.motor_level == 0 {
            0.0
        } else {
            cfg.blade_base_rate_deg
                + cfg.blade_height_gain_deg * self.height
                + cfg.blade_motor_gain_deg * f32::from(self.motor_level)
        };
        let approach = (cfg.blade_spindown * dt).min(1.0);
        self.blade_rate_deg += (target_rate - self.blade_rate_deg) * approach;
        self.blade_phase_deg += self.blade_rate_deg * dt;

        // Cannot translate while grounded
        let moving = self.moving_left && self.height > 0.0;
        if moving {
            self.orbit_phase_deg += cfg.orbit_rate_deg * dt;
        }

        if moving && self.height >= cfg.soft_land_height {
            self.lean_deg += cfg.lean_ramp_deg * dt;
        } else {
            self.lean_deg -= cfg.lean_decay_deg * dt;
        }
        self.lean_deg = self.lean_deg.clamp(cfg.lean_floor_deg, cfg.lean_max_deg);
    }

    /// Bank angle actually applied to the model this frame
    ///
    /// Derived from the stored accumulator, scaled by the throttle
    /// fraction; never stored back.
    pub fn applied_lean_deg(&self) -> f32 {
        self.lean_deg * f32::from(self.motor_level) / f32::from(MAX_MOTOR_LEVEL)
    }

    /// Discrete throttle increment (edge-triggered input)
    pub fn motor_up(&mut self) {
        if self.motor_level < MAX_MOTOR_LEVEL {
            self.motor_level += 1;
            log::debug!("motor level -> {}", self.motor_level);
        }
    }

    /// Discrete throttle decrement (edge-triggered input)
    pub fn motor_down(&mut self) {
        if self.motor_level > 0 {
            self.motor_level -= 1;
            log::debug!("motor level -> {}", self.motor_level);
        }
    }

    pub fn begin_move_left(&mut self) {
        self.moving_left = true;
    }

    pub fn end_move_left(&mut self) {
        self.moving_left = false;
    }
}

impl Default for FlightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_motor_off_descent_rate() {
        let cfg = FlightConfig::default();
        let mut state = FlightState::new();
        state.height = 1.0;

        // One unit step at motor 0 drops exactly the table entry
        state.step(1.0, &cfg);
        assert!((state.height - (1.0 - 0.04 * cfg.speed_factor)).abs() < 1e-6);
    }

    #[test]
    fn test_level_three_hovers() {
        let cfg = FlightConfig::default();
        let mut state = FlightState::new();
        state.height = 1.0;
        state.motor_level = 3;

        for _ in 0..600 {
            state.step(DT, &cfg);
        }
        assert!((state.height - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_height_stays_clamped_under_random_inputs() {
        let cfg = FlightConfig::default();
        let mut state = FlightState::new();
        let mut rng = rand::rng();

        for _ in 0..5_000 {
            match rng.random_range(0..4) {
                0 => state.motor_up(),
                1 => state.motor_down(),
                2 => state.begin_move_left(),
                _ => state.end_move_left(),
            }
            state.step(DT, &cfg);
            assert!(state.height >= 0.0 && state.height <= cfg.ceiling);
        }
    }

    #[test]
    fn test_full_throttle_hits_ceiling_and_stays() {
        let cfg = FlightConfig::default();
        let mut state = FlightState::new();
        state.motor_level = MAX_MOTOR_LEVEL;

        for _ in 0..60_000 {
            state.step(DT, &cfg);
        }
        assert_eq!(state.height, cfg.ceiling);
    }

    #[test]
    fn test_lean_bounded_under_random_inputs() {
        let cfg = FlightConfig::default();
        let mut state = FlightState::new();
        state.motor_level = MAX_MOTOR_LEVEL;
        let mut rng = rand::rng();

        for _ in 0..5_000 {
            if rng.random_range(0..10) == 0 {
                state.moving_left = !state.moving_left;
            }
            state.step(DT, &cfg);
            assert!(state.lean_deg <= cfg.lean_max_deg);
            assert!(state.lean_deg >= cfg.lean_floor_deg);
        }
    }

    #[test]
    fn test_lean_decays_to_floor_when_idle() {
        let cfg = FlightConfig::default();
        let mut state = FlightState::new();
        state.lean_deg = cfg.lean_max_deg;

        for _ in 0..600 {
            state.step(DT, &cfg);
        }
        assert!((state.lean_deg - cfg.lean_floor_deg).abs() < 1e-4);
    }

    #[test]
    fn test_orbit_frozen_while_grounded() {
        let cfg = FlightConfig::default();
        let mut state = FlightState::new();
        state.begin_move_left();

        for _ in 0..1_000 {
            state.step(DT, &cfg);
        }
        assert_eq!(state.height, 0.0);
        assert_eq!(state.orbit_phase_deg, 0.0);
    }

    #[test]
    fn test_orbit_advances_only_while_moving() {
        let cfg = FlightConfig::default();
        let mut state = FlightState::new();
        state.height = 1.0;
        state.motor_level = 3;

        state.step(DT, &cfg);
        assert_eq!(state.orbit_phase_deg, 0.0);

        state.begin_move_left();
        state.step(DT, &cfg);
        let advanced = state.orbit_phase_deg;
        assert!(advanced > 0.0);

        state.end_move_left();
        state.step(DT, &cfg);
        assert_eq!(state.orbit_phase_deg, advanced);
    }

    #[test]
    fn test_blades_spin_down_smoothly_when_motor_cuts() {
        let cfg = FlightConfig::default();
        let mut state = FlightState::new();
        state.motor_level = MAX_MOTOR_LEVEL;

        // Spin up and climb a bit first
        for _ in 0..600 {
            state.step(DT, &cfg);
        }
        let spun_up = state.blade_rate_deg;
        assert!(spun_up > 0.0);

        state.motor_level = 0;
        let mut previous = spun_up;
        for _ in 0..30 {
            state.step(DT, &cfg);
            // Still turning, but strictly slower each frame
            assert!(state.blade_rate_deg > 0.0);
            assert!(state.blade_rate_deg < previous);
            previous = state.blade_rate_deg;
        }
    }

    #[test]
    fn test_overdriven_motor_level_treated_as_max() {
        let cfg = FlightConfig::default();
        let mut state = FlightState::new();
        state.motor_level = 200;

        // Steps like full throttle instead of panicking on the table
        state.step(1.0, &cfg);
        assert!(
            (state.height - MOTOR_CLIMB_TABLE[MAX_MOTOR_LEVEL as usize] * cfg.speed_factor).abs()
                < 1e-6
        );
    }

    #[test]
    fn test_motor_level_clamps_at_both_ends() {
        let mut state = FlightState::new();
        state.motor_down();
        assert_eq!(state.motor_level, 0);

        for _ in 0..20 {
            state.motor_up();
        }
        assert_eq!(state.motor_level, MAX_MOTOR_LEVEL);
    }

    #[test]
    fn test_applied_lean_scaled_by_throttle() {
        let mut state = FlightState::new();
        state.lean_deg = 20.0;
        state.motor_level = 0;
        assert_eq!(state.applied_lean_deg(), 0.0);

        state.motor_level = MAX_MOTOR_LEVEL;
        assert_eq!(state.applied_lean_deg(), 20.0);

        state.motor_level = 4;
        assert_eq!(state.applied_lean_deg(), 10.0);
    }
}
