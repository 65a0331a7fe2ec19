//! Rotation state: per-plane angle accumulators and angular speeds
//!
//! Seven of the ten planes of 5-space are animated, always composed in the
//! order of [`ANIMATED_PLANES`]. Angles are never wrapped; speeds may be negative.

use std::time::{Duration, Instant};

use rand::Rng;
use penteract_math::{RotationPlane5, RotationSequence, Vec5};

/// Animated planes in composition order
pub const ANIMATED_PLANES: [RotationPlane5; 7] = [
    RotationPlane5::XY,
    RotationPlane5::YZ,
    RotationPlane5::ZW,
    RotationPlane5::WV,
    RotationPlane5::VX,
    RotationPlane5::XZ,
    RotationPlane5::YW,
];

/// Planes steered by the manual controls (W/S, A/D, Q/E)
pub const MANUAL_PLANES: [RotationPlane5; 3] = [
    RotationPlane5::XY,
    RotationPlane5::YZ,
    RotationPlane5::ZW,
];

pub const DEFAULT_MIN_SPEED: f32 = 0.005;
pub const DEFAULT_MAX_SPEED: f32 = 0.02;
pub const DEFAULT_MANUAL_STEP: f32 = 0.03;
pub const DEFAULT_CHAOS_SPEED_LIMIT: f32 = 0.1;
pub const DEFAULT_CHAOS_INTERVAL: Duration = Duration::from_millis(20);

const PLANE_COUNT: usize = ANIMATED_PLANES.len();

/// Angles and speeds for the animated planes
#[derive(Clone, Debug, PartialEq)]
pub struct RotationState {
    angles: [f32; PLANE_COUNT],
    speeds: [f32; PLANE_COUNT],
}

impl RotationState {
    /// Zero angles with the given speeds
    pub fn with_speeds(speeds: [f32; PLANE_COUNT]) -> Self {
        Self {
            angles: [0.0; PLANE_COUNT],
            speeds,
        }
    }

    /// Zero angles with speeds drawn uniformly from `[min_speed, max_speed]`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min_speed: f32, max_speed: f32) -> Self {
        let (lo, hi) = if min_speed <= max_speed {
            (min_speed, max_speed)
        } else {
            (max_speed, min_speed)
        };
        let mut speeds = [0.0; PLANE_COUNT];
        for s in speeds.iter_mut() {
            *s = rng.gen_range(lo..=hi);
        }
        Self::with_speeds(speeds)
    }

    pub fn angles(&self) -> &[f32; PLANE_COUNT] {
        &self.angles
    }

    pub fn speeds(&self) -> &[f32; PLANE_COUNT] {
        &self.speeds
    }

    /// Current angle of an animated plane; `None` for the three static planes
    pub fn angle(&self, plane: RotationPlane5) -> Option<f32> {
        plane_slot(plane).map(|i| self.angles[i])
    }

    /// The ordered rotation for the current angles
    pub fn sequence(&self) -> RotationSequence {
        RotationSequence::from_planes(&ANIMATED_PLANES, &self.angles)
    }

    /// Rotate one vertex by the current angles
    pub fn rotate(&self, v: Vec5) -> Vec5 {
        self.sequence().apply(v)
    }

    /// Rotate every vertex, producing new points
    pub fn rotate_all(&self, vertices: &[Vec5]) -> Vec<Vec5> {
        let seq = self.sequence();
        vertices.iter().map(|&v| seq.apply(v)).collect()
    }

    /// Add each plane's speed to its angle
    pub fn advance_auto(&mut self) {
        for (angle, speed) in self.angles.iter_mut().zip(self.speeds.iter()) {
            *angle += speed;
        }
    }

    /// Step the manual planes by `step` in each key direction (-1, 0, +1)
    pub fn advance_manual(&mut self, directions: [i8; 3], step: f32) {
        for (plane, dir) in MANUAL_PLANES.iter().zip(directions.iter()) {
            if let Some(i) = plane_slot(*plane) {
                self.angles[i] += *dir as f32 * step;
            }
        }
    }

    /// Reassign every speed uniformly from `[-limit, limit]`
    pub fn randomize_speeds<R: Rng + ?Sized>(&mut self, rng: &mut R, limit: f32) {
        let limit = limit.abs();
        for s in self.speeds.iter_mut() {
            *s = rng.gen_range(-limit..=limit);
        }
    }

    /// Chaos update: reassign speeds once the clock's interval has elapsed
    ///
    /// Returns true when speeds were reassigned.
    pub fn advance_chaos<R: Rng + ?Sized>(
        &mut self,
        clock: &mut ChaosClock,
        now: Instant,
        rng: &mut R,
        limit: f32,
    ) -> bool {
        if clock.speeds_due(now) {
            self.randomize_speeds(rng, limit);
            log::debug!("Chaos speeds: {:?}", self.speeds);
            true
        } else {
            false
        }
    }
}

fn plane_slot(plane: RotationPlane5) -> Option<usize> {
    ANIMATED_PLANES.iter().position(|p| *p == plane)
}

/// Wall-clock gate for chaos-mode updates
///
/// Speed reassignment and palette cycling keep separate timestamps; each
/// fires once strictly more than `interval` has passed since it last fired.
#[derive(Clone, Debug)]
pub struct ChaosClock {
    interval: Duration,
    last_speed_change: Instant,
    last_palette_switch: Instant,
}

impl ChaosClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_speed_change: now,
            last_palette_switch: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether speeds should change now; restarts the speed timer if so
    pub fn speeds_due(&mut self, now: Instant) -> bool {
        Self::fire(&mut self.last_speed_change, now, self.interval)
    }

    /// Whether the palette cursor should advance now; restarts its timer if so
    pub fn palette_due(&mut self, now: Instant) -> bool {
        Self::fire(&mut self.last_palette_switch, now, self.interval)
    }

    fn fire(last: &mut Instant, now: Instant, interval: Duration) -> bool {
        if now.saturating_duration_since(*last) > interval {
            *last = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_random_speeds_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let state = RotationState::random(&mut rng, DEFAULT_MIN_SPEED, DEFAULT_MAX_SPEED);
        for &s in state.speeds() {
            assert!((DEFAULT_MIN_SPEED..=DEFAULT_MAX_SPEED).contains(&s));
        }
        assert!(state.angles().iter().all(|&a| a == 0.0));
    }

    #[test]
    fn test_zero_angles_identity() {
        let state = RotationState::with_speeds([0.01; 7]);
        for v in penteract_math::generate_vertices() {
            assert!(state.rotate(v).approx_eq(v, EPSILON));
        }
    }

    #[test]
    fn test_advance_auto_accumulates_without_wrapping() {
        let mut state = RotationState::with_speeds([1.0, -1.0, 0.5, 0.0, 2.0, 3.0, -0.25]);
        for _ in 0..10 {
            state.advance_auto();
        }
        assert!((state.angle(RotationPlane5::XY).unwrap() - 10.0).abs() < EPSILON);
        assert!((state.angle(RotationPlane5::YZ).unwrap() + 10.0).abs() < EPSILON);
        assert!((state.angle(RotationPlane5::XZ).unwrap() - 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_advance_manual_only_touches_manual_planes() {
        let mut state = RotationState::with_speeds([0.0; 7]);
        state.advance_manual([1, -1, 1], DEFAULT_MANUAL_STEP);
        assert!((state.angle(RotationPlane5::XY).unwrap() - 0.03).abs() < EPSILON);
        assert!((state.angle(RotationPlane5::YZ).unwrap() + 0.03).abs() < EPSILON);
        assert!((state.angle(RotationPlane5::ZW).unwrap() - 0.03).abs() < EPSILON);
        assert_eq!(state.angle(RotationPlane5::WV), Some(0.0));
        assert_eq!(state.angle(RotationPlane5::YW), Some(0.0));
    }

    #[test]
    fn test_static_planes_have_no_angle() {
        let state = RotationState::with_speeds([0.0; 7]);
        assert_eq!(state.angle(RotationPlane5::XW), None);
        assert_eq!(state.angle(RotationPlane5::YV), None);
        assert_eq!(state.angle(RotationPlane5::ZV), None);
    }

    #[test]
    fn test_sequence_order() {
        let state = RotationState::with_speeds([0.0; 7]);
        let planes: Vec<_> = state.sequence().steps().iter().map(|s| s.plane).collect();
        assert_eq!(planes, ANIMATED_PLANES.to_vec());
    }

    #[test]
    fn test_sequence_inverse_round_trip() {
        let mut state = RotationState::with_speeds([0.3, 0.7, -0.2, 1.1, 0.05, -0.9, 0.4]);
        state.advance_auto();
        let seq = state.sequence();
        let v = Vec5::new(1.0, 1.0, -1.0, -1.0, 1.0);
        assert!(seq.inverse().apply(seq.apply(v)).approx_eq(v, 1e-4));
    }

    #[test]
    fn test_randomize_speeds_within_limit() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = RotationState::with_speeds([0.0; 7]);
        state.randomize_speeds(&mut rng, DEFAULT_CHAOS_SPEED_LIMIT);
        for &s in state.speeds() {
            assert!(s.abs() <= DEFAULT_CHAOS_SPEED_LIMIT);
        }
    }

    #[test]
    fn test_chaos_clock_is_wall_clock_gated() {
        let start = Instant::now();
        let mut clock = ChaosClock::new(DEFAULT_CHAOS_INTERVAL, start);
        assert!(!clock.speeds_due(start + Duration::from_millis(10)));
        assert!(!clock.speeds_due(start + Duration::from_millis(20)));
        assert!(clock.speeds_due(start + Duration::from_millis(21)));
        // timer restarted
        assert!(!clock.speeds_due(start + Duration::from_millis(30)));
        // palette timer is independent
        assert!(clock.palette_due(start + Duration::from_millis(30)));
    }

    #[test]
    fn test_advance_chaos_reassigns_when_due() {
        let mut rng = StdRng::seed_from_u64(5);
        let start = Instant::now();
        let mut clock = ChaosClock::new(DEFAULT_CHAOS_INTERVAL, start);
        let mut state = RotationState::with_speeds([0.01; 7]);

        assert!(!state.advance_chaos(&mut clock, start, &mut rng, 0.1));
        assert_eq!(state.speeds(), &[0.01; 7]);

        assert!(state.advance_chaos(&mut clock, start + Duration::from_millis(25), &mut rng, 0.1));
        assert_ne!(state.speeds(), &[0.01; 7]);
    }
}
