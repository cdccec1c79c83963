//! Spring interpolation for the indicator edges.
//!
//! Everything here is a plain per-frame update: the host's frame clock
//! supplies `dt` (seconds since the previous frame) and the spring advances
//! by that much. Retargeting keeps the current value and velocity, so a
//! selection change mid-flight bends the motion instead of restarting it.

use crate::indicator::TabBounds;

/// Longest single integration step, in seconds.
const MAX_SUBSTEP: f32 = 1.0 / 240.0;
/// Longest frame a single tick accounts for, in seconds.
const MAX_FRAME: f32 = 0.25;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Spring constant for a unit mass.
    pub stiffness: f32,
    /// 1.0 is critically damped, below bounces, above creeps.
    pub damping_ratio: f32,
    /// Distance (and speed) below which the spring snaps onto its target.
    pub visibility_threshold: f32,
}

impl SpringSpec {
    /// The indicator default.
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    /// No overshoot.
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;
    /// Default snap distance in points.
    pub const DEFAULT_THRESHOLD: f32 = 0.1;

    /// A critically damped spring with the given stiffness.
    #[must_use]
    pub const fn new(stiffness: f32) -> Self {
        Self {
            stiffness,
            damping_ratio: Self::DAMPING_RATIO_NO_BOUNCY,
            visibility_threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    fn damping(&self) -> f32 {
        2.0 * self.damping_ratio.max(0.0) * self.stiffness.sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::new(Self::STIFFNESS_MEDIUM)
    }
}

/// A single animated value.
///
/// The spring integrates its displacement from the target rather than its
/// absolute position, so precision stays relative to the target however far
/// from the origin the row sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    offset: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// A spring resting at `value`.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self {
            offset: 0.0,
            velocity: 0.0,
            target: value,
        }
    }

    /// Jumps to `value` and stops.
    pub const fn snap_to(&mut self, value: f32) {
        self.target = value;
        self.offset = 0.0;
        self.velocity = 0.0;
    }

    /// Moves the target, keeping the current value and velocity.
    pub fn retarget(&mut self, target: f32) {
        self.offset = self.value() - target;
        self.target = target;
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.target + self.offset
    }

    /// Current velocity in points per second.
    #[must_use]
    pub const fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Where the spring is heading.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Whether the spring rests exactly on its target.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_settled(&self) -> bool {
        self.offset == 0.0 && self.velocity == 0.0
    }

    /// Advances by `dt` seconds. Returns `true` while still moving.
    ///
    /// Negative or non-finite `dt` counts as zero and very long frames are
    /// capped, so a stalled frame clock cannot fling the value away.
    pub fn step(&mut self, dt: f32, spec: &SpringSpec) -> bool {
        if self.is_settled() {
            return false;
        }
        if spec.stiffness <= 0.0 {
            self.snap_to(self.target);
            return false;
        }

        let damping = spec.damping();
        let threshold = spec.visibility_threshold;
        let mut remaining = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME)
        } else {
            0.0
        };

        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let acceleration = -spec.stiffness * self.offset - damping * self.velocity;

            self.velocity += acceleration * h;
            self.offset += self.velocity * h;
            remaining -= h;

            if self.offset.abs() < threshold && self.velocity.abs() < threshold {
                self.snap_to(self.target);
                return false;
            }
        }
        true
    }
}

/// The left and right edges of the indicator, animated independently with
/// one shared [`SpringSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAnimation {
    left: Spring,
    right: Spring,
}

impl EdgeAnimation {
    /// Edges resting on `bounds`.
    #[must_use]
    pub const fn at(bounds: TabBounds) -> Self {
        Self {
            left: Spring::new(bounds.left),
            right: Spring::new(bounds.right),
        }
    }

    /// Jumps both edges to `bounds`.
    pub const fn snap_to(&mut self, bounds: TabBounds) {
        self.left.snap_to(bounds.left);
        self.right.snap_to(bounds.right);
    }

    /// Sends both edges toward `bounds` from wherever they are now.
    pub fn retarget(&mut self, bounds: TabBounds) {
        self.left.retarget(bounds.left);
        self.right.retarget(bounds.right);
    }

    /// Current interpolated edges.
    #[must_use]
    pub fn current(&self) -> TabBounds {
        TabBounds::new(self.left.value(), self.right.value())
    }

    /// Edges being animated toward.
    #[must_use]
    pub const fn target(&self) -> TabBounds {
        TabBounds::new(self.left.target(), self.right.target())
    }

    /// Edge velocities as `[left, right]`.
    #[must_use]
    pub const fn velocity(&self) -> [f32; 2] {
        [self.left.velocity(), self.right.velocity()]
    }

    /// Whether both edges rest on their targets.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.left.is_settled() && self.right.is_settled()
    }

    /// Advances both edges on the same tick. Returns `true` while either moves.
    pub fn step(&mut self, dt: f32, spec: &SpringSpec) -> bool {
        let left = self.left.step(dt, spec);
        let right = self.right.step(dt, spec);
        left || right
    }
}

/// Stateless form of [`EdgeAnimation::step`] for hosts without their own
/// animation runtime.
///
/// Takes the current edges and their velocities and returns the edges and
/// velocities `dt` seconds later.
#[must_use]
pub fn step_edges(
    current: TabBounds,
    velocity: [f32; 2],
    target: TabBounds,
    dt: f32,
    spec: &SpringSpec,
) -> (TabBounds, [f32; 2]) {
    let mut left = Spring {
        offset: current.left - target.left,
        velocity: velocity[0],
        target: target.left,
    };
    let mut right = Spring {
        offset: current.right - target.right,
        velocity: velocity[1],
        target: target.right,
    };
    left.step(dt, spec);
    right.step(dt, spec);
    (
        TabBounds::new(left.value(), right.value()),
        [left.velocity, right.velocity],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run_until_settled(spring: &mut Spring, spec: &SpringSpec) -> usize {
        let mut frames = 0;
        while spring.step(FRAME, spec) {
            frames += 1;
            assert!(frames < 600, "spring never settled: {spring:?}");
        }
        frames
    }

    #[test]
    fn settles_exactly_on_target() {
        let spec = SpringSpec::default();
        let mut spring = Spring::new(0.0);
        spring.retarget(120.0);

        let frames = run_until_settled(&mut spring, &spec);

        assert!(frames > 1);
        assert_eq!(spring.value(), 120.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn critically_damped_spring_does_not_overshoot_visibly() {
        let spec = SpringSpec::default();
        let mut spring = Spring::new(0.0);
        spring.retarget(100.0);

        while spring.step(FRAME, &spec) {
            assert!(spring.value() <= 100.0 + spec.visibility_threshold);
        }
    }

    #[test]
    fn retarget_continues_from_current_position() {
        let spec = SpringSpec::default();
        let mut spring = Spring::new(0.0);
        spring.retarget(100.0);
        spring.step(FRAME * 3.0, &spec);
        let midway = spring.value();
        assert!(midway > 0.0 && midway < 100.0);

        spring.retarget(0.0);
        assert_eq!(spring.value(), midway);
        assert!(spring.velocity() > 0.0);

        run_until_settled(&mut spring, &spec);
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn bad_frame_times_do_not_move_the_spring() {
        let spec = SpringSpec::default();
        let mut spring = Spring::new(0.0);
        spring.retarget(50.0);

        assert!(spring.step(-1.0, &spec));
        assert!(spring.step(f32::NAN, &spec));
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn zero_stiffness_snaps() {
        let spec = SpringSpec::new(0.0);
        let mut spring = Spring::new(0.0);
        spring.retarget(50.0);

        assert!(!spring.step(FRAME, &spec));
        assert_eq!(spring.value(), 50.0);
    }

    #[test]
    fn stateless_step_matches_edge_animation() {
        let spec = SpringSpec::default();
        let target = TabBounds::new(100.0, 200.0);
        let mut animation = EdgeAnimation::at(TabBounds::new(0.0, 100.0));
        animation.retarget(target);

        let mut edges = TabBounds::new(0.0, 100.0);
        let mut velocity = [0.0; 2];
        for _ in 0..10 {
            animation.step(FRAME, &spec);
            (edges, velocity) = step_edges(edges, velocity, target, FRAME, &spec);
            let current = animation.current();
            assert!((current.left - edges.left).abs() < 1e-3);
            assert!((current.right - edges.right).abs() < 1e-3);
            assert!((animation.velocity()[0] - velocity[0]).abs() < 1e-2);
        }
    }

    #[test]
    fn settles_far_from_the_origin() {
        let spec = SpringSpec::default();
        for base in [2.0e4, 8.0e4, 1.0e5, 1.0e6] {
            let mut spring = Spring::new(base);
            spring.retarget(base + 100.0);

            let frames = run_until_settled(&mut spring, &spec);

            assert!(frames < 60, "took {frames} frames at {base}");
            assert_eq!(spring.value(), base + 100.0);
        }
    }
}
