//! Square tracer animation state
//!
//! Drives the indeterminate square indicator: a repeating, eased scalar that
//! sweeps 0 → edge length once per cycle, plus an 8-phase step counter that
//! advances on every completed cycle. Steps 0-3 trace the square clockwise,
//! steps 4-7 retrace it counter-clockwise, so the line appears to chase
//! around the outline and back.
//!
//! All state lives on the UI thread and is sampled inside iced's
//! update/view callbacks; there is no timer thread. Time is supplied by the
//! caller so the logic stays deterministic under test.

use iced::{Point, Rectangle, Size};
use std::time::{Duration, Instant};

use crate::ui::primitives::progress_square::square_bounds;

/// Number of phases in one full back-and-forth macro-cycle
const TOTAL_STEPS: u8 = 8;

/// Repeating, eased edge animator
///
/// Equivalent to a value animator in "restart" repeat mode: each cycle the
/// value sweeps from 0 to `distance` with accelerate-decelerate easing, then
/// snaps back to 0. The first cycle is preceded by a one-time start delay.
#[derive(Debug, Clone)]
pub struct EdgeAnimator {
    distance: f32,
    duration: Duration,
    start_delay: Duration,
    started_at: Instant,
    /// Cycles already reported through [`EdgeAnimator::tick`]
    completed: u64,
}

impl EdgeAnimator {
    /// Create an animator that starts (including its delay) at `now`
    pub fn new(distance: f32, duration: Duration, start_delay: Duration, now: Instant) -> Self {
        Self {
            distance: distance.max(0.0),
            duration,
            start_delay,
            started_at: now,
            completed: 0,
        }
    }

    /// Travel distance covered by one full cycle
    #[allow(dead_code)]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Cycles elapsed since start, and the eased fraction into the current one
    fn phase(&self, now: Instant) -> (u64, f32) {
        let elapsed = now.saturating_duration_since(self.started_at);
        let Some(active) = elapsed.checked_sub(self.start_delay) else {
            return (0, 0.0);
        };
        if self.duration.is_zero() {
            return (0, 0.0);
        }

        let cycles = active.as_secs_f64() / self.duration.as_secs_f64();
        (cycles as u64, cycles.fract() as f32)
    }

    /// Current animated value in `[0, distance]`
    pub fn value(&self, now: Instant) -> f32 {
        let (_, fraction) = self.phase(now);
        ease_in_out(fraction) * self.distance
    }

    /// Report how many cycle boundaries were crossed since the previous tick
    pub fn tick(&mut self, now: Instant) -> u64 {
        let (cycles, _) = self.phase(now);
        let newly_completed = cycles.saturating_sub(self.completed);
        self.completed = cycles;
        newly_completed
    }
}

/// Accelerate-decelerate easing: slow start, fast middle, slow end
fn ease_in_out(t: f32) -> f32 {
    0.5 - (t.clamp(0.0, 1.0) * std::f32::consts::PI).cos() * 0.5
}

/// Animation state of the square indicator
///
/// Owns the current step (0..=7), the drawing bounds, and the edge animator.
/// The animator is rebuilt on every resize (its range depends on the edge
/// length) and dropped on detach; the step survives resizes and only ever
/// advances, modulo 8, on cycle completion.
#[derive(Debug, Clone)]
pub struct SquareTracer {
    step: u8,
    bounds: Rectangle,
    animator: Option<EdgeAnimator>,
    padding: f32,
    duration: Duration,
    start_delay: Duration,
}

impl SquareTracer {
    pub fn new(padding: f32, duration: Duration, start_delay: Duration) -> Self {
        Self {
            step: 0,
            bounds: Rectangle::new(Point::ORIGIN, Size::ZERO),
            animator: None,
            padding,
            duration,
            start_delay,
        }
    }

    /// Recompute bounds for a new drawing area and restart the animator
    /// with the matching travel distance. Called on attach and on resize.
    pub fn handle_resize(&mut self, width: f32, height: f32, now: Instant) {
        self.bounds = square_bounds(width, height, self.padding);
        // Travel distance is one inset edge; a degenerate square yields 0.
        let distance = self.bounds.width.max(0.0);
        self.animator = Some(EdgeAnimator::new(
            distance,
            self.duration,
            self.start_delay,
            now,
        ));
    }

    /// Advance the step counter by the cycles completed since the last tick.
    /// No-op while detached, so in-flight ticks after detach are harmless.
    pub fn tick(&mut self, now: Instant) {
        if let Some(animator) = &mut self.animator {
            let repeats = animator.tick(now);
            self.step = (self.step + (repeats % u64::from(TOTAL_STEPS)) as u8) % TOTAL_STEPS;
        }
    }

    /// Snapshot for rendering: (bounds, step, animated value)
    pub fn sample(&self, now: Instant) -> (Rectangle, u8, f32) {
        let value = self
            .animator
            .as_ref()
            .map(|animator| animator.value(now))
            .unwrap_or(0.0);
        (self.bounds, self.step, value)
    }

    /// Cancel the animator. Subsequent ticks do nothing until the next
    /// [`SquareTracer::handle_resize`] re-attaches it.
    pub fn detach(&mut self) {
        self.animator = None;
    }

    /// Whether an animator is currently attached
    pub fn is_attached(&self) -> bool {
        self.animator.is_some()
    }

    #[cfg(test)]
    fn step(&self) -> u8 {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(400);
    const DELAY: Duration = Duration::from_millis(200);

    fn tracer_at(now: Instant) -> SquareTracer {
        let mut tracer = SquareTracer::new(8.0, DURATION, DELAY);
        tracer.handle_resize(96.0, 96.0, now);
        tracer
    }

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
        // Accelerating start: first quarter covers less than a quarter
        assert!(ease_in_out(0.25) < 0.25);
        // Decelerating end: mirrored
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn value_is_zero_during_start_delay() {
        let start = Instant::now();
        let animator = EdgeAnimator::new(80.0, DURATION, DELAY, start);
        assert_eq!(animator.value(start), 0.0);
        assert_eq!(animator.value(start + Duration::from_millis(199)), 0.0);
        assert!(animator.value(start + Duration::from_millis(400)) > 0.0);
    }

    #[test]
    fn value_stays_within_travel_distance() {
        let start = Instant::now();
        let animator = EdgeAnimator::new(80.0, DURATION, DELAY, start);
        for ms in (0..3000).step_by(7) {
            let v = animator.value(start + Duration::from_millis(ms));
            assert!((0.0..=80.0).contains(&v), "value {} out of range", v);
        }
    }

    #[test]
    fn value_restarts_each_cycle() {
        let start = Instant::now();
        let animator = EdgeAnimator::new(80.0, DURATION, DELAY, start);
        // Just before a cycle boundary the value is near the full distance,
        // just after it is near zero again (restart mode, not reverse).
        let late = animator.value(start + DELAY + Duration::from_millis(399));
        let early = animator.value(start + DELAY + Duration::from_millis(401));
        assert!(late > 79.0, "late value {}", late);
        assert!(early < 1.0, "early value {}", early);
    }

    #[test]
    fn tick_reports_each_cycle_once() {
        let start = Instant::now();
        let mut animator = EdgeAnimator::new(80.0, DURATION, DELAY, start);
        assert_eq!(animator.tick(start + Duration::from_millis(100)), 0);
        assert_eq!(animator.tick(start + DELAY + Duration::from_millis(450)), 1);
        assert_eq!(animator.tick(start + DELAY + Duration::from_millis(460)), 0);
        assert_eq!(animator.tick(start + DELAY + Duration::from_millis(1650)), 3);
    }

    #[test]
    fn zero_duration_never_cycles() {
        let start = Instant::now();
        let mut animator = EdgeAnimator::new(80.0, Duration::ZERO, Duration::ZERO, start);
        assert_eq!(animator.value(start + Duration::from_secs(5)), 0.0);
        assert_eq!(animator.tick(start + Duration::from_secs(5)), 0);
    }

    #[test]
    fn negative_distance_degrades_to_zero() {
        let start = Instant::now();
        let animator = EdgeAnimator::new(-10.0, DURATION, Duration::ZERO, start);
        assert_eq!(animator.distance(), 0.0);
        assert_eq!(animator.value(start + Duration::from_millis(200)), 0.0);
    }

    #[test]
    fn step_advances_once_per_repeat_and_wraps() {
        let start = Instant::now();
        let mut tracer = tracer_at(start);
        assert_eq!(tracer.step(), 0);

        for n in 1..=20u64 {
            let now = start + DELAY + DURATION * n as u32 + Duration::from_millis(10);
            tracer.tick(now);
            assert_eq!(u64::from(tracer.step()), n % 8, "after {} repeats", n);
        }
    }

    #[test]
    fn missed_frames_advance_by_elapsed_cycles() {
        let start = Instant::now();
        let mut tracer = tracer_at(start);
        // A single late tick spanning 11 full cycles lands on 11 % 8.
        tracer.tick(start + DELAY + DURATION * 11 + Duration::from_millis(10));
        assert_eq!(tracer.step(), 3);
    }

    #[test]
    fn step_survives_resize() {
        let start = Instant::now();
        let mut tracer = tracer_at(start);
        tracer.tick(start + DELAY + DURATION * 3 + Duration::from_millis(10));
        assert_eq!(tracer.step(), 3);

        tracer.handle_resize(200.0, 100.0, start + Duration::from_secs(2));
        assert_eq!(tracer.step(), 3);
        // New animator starts from scratch with the new travel distance.
        let (bounds, _, value) = tracer.sample(start + Duration::from_secs(2));
        assert_eq!(bounds.width, 100.0 - 2.0 * 8.0);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn tick_after_detach_is_a_no_op() {
        let start = Instant::now();
        let mut tracer = tracer_at(start);
        tracer.detach();
        assert!(!tracer.is_attached());

        tracer.tick(start + Duration::from_secs(10));
        assert_eq!(tracer.step(), 0);
        let (_, _, value) = tracer.sample(start + Duration::from_secs(10));
        assert_eq!(value, 0.0);
    }

    #[test]
    fn degenerate_area_keeps_value_at_zero() {
        let start = Instant::now();
        let mut tracer = SquareTracer::new(8.0, DURATION, Duration::ZERO);
        // Padding exceeds half the size: travel distance degrades to zero.
        tracer.handle_resize(10.0, 10.0, start);
        let (_, _, value) = tracer.sample(start + Duration::from_millis(200));
        assert_eq!(value, 0.0);
    }
}
