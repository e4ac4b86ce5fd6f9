use serde::{Deserialize, Serialize};

/// Spring configuration for the edge snap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringSpec {
    /// 1.0 is critically damped, below 1.0 overshoots.
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Velocity (px/s) under which the spring may settle.
    pub velocity_threshold: f32,
    /// Distance (px) under which the spring may settle.
    pub position_threshold: f32,
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            damping_ratio: 0.7,
            stiffness: 180.0,
            velocity_threshold: 1.0,
            position_threshold: 0.5,
        }
    }
}

impl SpringSpec {
    pub fn critically_damped() -> Self {
        Self {
            damping_ratio: 1.0,
            ..Self::default()
        }
    }
}

const STEP_SECS: f32 = 0.016;
// Longest the spring may run before it is forced onto its target.
const MAX_DURATION_SECS: f32 = 3.0;

/// One-dimensional damped spring moving a value towards `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringAnimation {
    spec: SpringSpec,
    value: f32,
    velocity: f32,
    target: f32,
    elapsed: f32,
    settled: bool,
}

impl SpringAnimation {
    pub fn new(spec: SpringSpec, from: f32, target: f32) -> Self {
        let mut anim = Self {
            spec: sanitize(spec),
            value: from,
            velocity: 0.0,
            target,
            elapsed: 0.0,
            settled: false,
        };
        if !from.is_finite() || (from - target).abs() <= anim.spec.position_threshold {
            anim.finish();
        }
        anim
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn step(&mut self, dt: f32) -> f32 {
        if self.settled || !(dt > 0.0) {
            return self.value;
        }
        let budget = MAX_DURATION_SECS - self.elapsed;
        if !dt.is_finite() || dt >= budget {
            self.finish();
            return self.value;
        }
        let damping = 2.0 * self.spec.damping_ratio * self.spec.stiffness.sqrt();
        // Semi-implicit Euler in fixed sub-steps keeps large frame gaps stable.
        // `dt < MAX_DURATION_SECS` here, so the step count stays small.
        let steps = (dt / STEP_SECS).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        for _ in 0..steps {
            let displacement = self.value - self.target;
            let force = -self.spec.stiffness * displacement - damping * self.velocity;
            self.velocity += force * h;
            self.value += self.velocity * h;
        }
        self.elapsed += dt;

        let at_rest = self.velocity.abs() < self.spec.velocity_threshold;
        let near = (self.value - self.target).abs() < self.spec.position_threshold;
        if (at_rest && near) || self.elapsed >= MAX_DURATION_SECS {
            self.finish();
        }
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    fn finish(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
        self.settled = true;
    }
}

fn sanitize(spec: SpringSpec) -> SpringSpec {
    let defaults = SpringSpec::default();
    SpringSpec {
        damping_ratio: if spec.damping_ratio.is_finite() && spec.damping_ratio > 0.0 {
            spec.damping_ratio
        } else {
            defaults.damping_ratio
        },
        stiffness: if spec.stiffness.is_finite() && spec.stiffness > 0.0 {
            spec.stiffness
        } else {
            defaults.stiffness
        },
        velocity_threshold: spec.velocity_threshold.abs().max(f32::EPSILON),
        position_threshold: spec.position_threshold.abs().max(f32::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_exactly_on_target() {
        let mut anim = SpringAnimation::new(SpringSpec::default(), 62.0, 20.0);
        let mut frames = 0;
        while !anim.is_settled() {
            anim.step(1.0 / 60.0);
            frames += 1;
            assert!(frames < 1_000);
        }
        assert_eq!(anim.value(), 20.0);
    }

    #[test]
    fn underdamped_overshoot_is_bounded() {
        let mut anim = SpringAnimation::new(SpringSpec::default(), 100.0, 0.0);
        let mut lowest = f32::MAX;
        while !anim.is_settled() {
            lowest = lowest.min(anim.step(1.0 / 60.0));
        }
        assert!(lowest < 0.0, "expected some overshoot");
        assert!(lowest > -50.0, "overshoot too large: {lowest}");
    }

    #[test]
    fn huge_or_infinite_frame_gap_settles_on_target() {
        for dt in [f32::INFINITY, 1.0e6, MAX_DURATION_SECS] {
            let mut anim = SpringAnimation::new(SpringSpec::default(), 62.0, 20.0);
            assert_eq!(anim.step(dt), 20.0);
            assert!(anim.is_settled());
        }
    }

    #[test]
    fn nan_frame_gap_is_ignored() {
        let mut anim = SpringAnimation::new(SpringSpec::default(), 62.0, 20.0);
        assert_eq!(anim.step(f32::NAN), 62.0);
        assert!(!anim.is_settled());
    }

    #[test]
    fn zero_distance_is_settled_immediately() {
        let anim = SpringAnimation::new(SpringSpec::default(), 20.0, 20.0);
        assert!(anim.is_settled());
    }
}
