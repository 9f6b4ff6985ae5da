//! Interpolated values behind the dialog's enter/exit transition.
//!
//! Three channels (backdrop opacity, card scale, card vertical offset) move
//! independently between the hidden and the shown pose. Every operation takes
//! the current instant explicitly, so the whole transition is a pure function
//! of the instants it is fed.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

pub const HIDDEN_SCALE: f32 = 0.96;
pub const HIDDEN_OFFSET: f32 = 10.0;

/// Below both thresholds a spring counts as resting.
const REST_DISPLACEMENT: f64 = 0.001;
const REST_SPEED: f64 = 0.001;
/// Upper bound for undamped or nearly undamped springs.
const MAX_SETTLE: Duration = Duration::from_secs(10);

/// Snapshot of the three animated values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub scale: f32,
    pub offset: f32,
}

impl Pose {
    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        scale: HIDDEN_SCALE,
        offset: HIDDEN_OFFSET,
    };

    pub const SHOWN: Pose = Pose {
        opacity: 1.0,
        scale: 1.0,
        offset: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Damped harmonic oscillator parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::from_tension_friction(90.0, 7.0)
    }
}

impl SpringParams {
    /// Convert Origami-style tension/friction into stiffness/damping.
    pub fn from_tension_friction(tension: f32, friction: f32) -> Self {
        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            mass: 1.0,
        }
    }

    /// Displacement and velocity `t` seconds after release from
    /// displacement `x0` with velocity `v0`.
    fn solve(&self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let mass = f64::from(self.mass).max(f64::EPSILON);
        let stiffness = f64::from(self.stiffness).max(f64::EPSILON);
        let damping = f64::from(self.damping).max(0.0);

        let omega = (stiffness / mass).sqrt();
        let zeta = damping / (2.0 * (stiffness * mass).sqrt());

        if zeta < 1.0 - 1e-6 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            let a = x0;
            let b = (v0 + zeta * omega * x0) / omega_d;
            let (sin, cos) = (omega_d * t).sin_cos();
            let position = a * cos + b * sin;
            let x = envelope * position;
            let v = envelope * (-zeta * omega * position + omega_d * (-a * sin + b * cos));
            (x, v)
        } else if zeta <= 1.0 + 1e-6 {
            let b = v0 + omega * x0;
            let envelope = (-omega * t).exp();
            let x = (x0 + b * t) * envelope;
            let v = (b - omega * (x0 + b * t)) * envelope;
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }

    /// First millisecond at which the spring is at rest.
    ///
    /// Damping only removes energy, so once both displacement and speed are
    /// under the rest thresholds the spring never leaves rest again.
    fn settle_time(&self, x0: f64, v0: f64) -> Duration {
        let max_ms = MAX_SETTLE.as_millis() as u64;
        for ms in 0..=max_ms {
            let (x, v) = self.solve(x0, v0, ms as f64 / 1000.0);
            if x.abs() < REST_DISPLACEMENT && v.abs() < REST_SPEED {
                return Duration::from_millis(ms);
            }
        }
        MAX_SETTLE
    }
}

/// Durations, easings and spring used for the two transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub show_duration: Duration,
    pub hide_duration: Duration,
    pub show_easing: Easing,
    pub hide_easing: Easing,
    pub spring: SpringParams,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            show_duration: Duration::from_millis(180),
            hide_duration: Duration::from_millis(140),
            show_easing: Easing::EaseInOut,
            hide_easing: Easing::EaseInOut,
            spring: SpringParams::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Timed {
        from: f32,
        to: f32,
        start: Instant,
        duration: Duration,
        easing: Easing,
    },
    Spring {
        to: f32,
        x0: f64,
        v0: f64,
        start: Instant,
        settle: Duration,
        params: SpringParams,
    },
}

struct Sample {
    value: f32,
    velocity: f32,
    done: bool,
}

impl Motion {
    fn target(&self) -> f32 {
        match *self {
            Motion::Timed { to, .. } | Motion::Spring { to, .. } => to,
        }
    }

    fn end(&self) -> Instant {
        match *self {
            Motion::Timed {
                start, duration, ..
            } => start + duration,
            Motion::Spring { start, settle, .. } => start + settle,
        }
    }

    fn sample(&self, now: Instant) -> Sample {
        match *self {
            Motion::Timed {
                from,
                to,
                start,
                duration,
                easing,
            } => {
                let elapsed = now.saturating_duration_since(start);
                if elapsed >= duration {
                    return Sample {
                        value: to,
                        velocity: 0.0,
                        done: true,
                    };
                }
                let progress = elapsed.as_secs_f32() / duration.as_secs_f32();
                Sample {
                    value: from + (to - from) * easing.apply(progress),
                    velocity: 0.0,
                    done: false,
                }
            }
            Motion::Spring {
                to,
                x0,
                v0,
                start,
                settle,
                params,
            } => {
                let elapsed = now.saturating_duration_since(start);
                if elapsed >= settle {
                    return Sample {
                        value: to,
                        velocity: 0.0,
                        done: true,
                    };
                }
                let (x, v) = params.solve(x0, v0, elapsed.as_secs_f64());
                Sample {
                    value: to + x as f32,
                    velocity: v as f32,
                    done: false,
                }
            }
        }
    }
}

/// One animated value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Channel {
    value: f32,
    velocity: f32,
    motion: Option<Motion>,
}

impl Channel {
    fn resting(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            motion: None,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.motion.map(|m| m.target()).unwrap_or(self.value)
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    fn end(&self) -> Option<Instant> {
        self.motion.map(|m| m.end())
    }

    fn advance(&mut self, now: Instant) {
        let Some(motion) = self.motion else {
            return;
        };
        let sample = motion.sample(now);
        self.value = sample.value;
        self.velocity = sample.velocity;
        if sample.done {
            self.motion = None;
        }
    }

    fn rest_at(&mut self, value: f32) {
        *self = Self::resting(value);
    }

    /// Restart toward `to` from wherever the channel is at `now`.
    fn timing_to(&mut self, to: f32, now: Instant, duration: Duration, easing: Easing) {
        self.advance(now);
        if duration.is_zero() || (self.value == to && self.motion.is_none()) {
            self.rest_at(to);
            return;
        }
        self.velocity = 0.0;
        self.motion = Some(Motion::Timed {
            from: self.value,
            to,
            start: now,
            duration,
            easing,
        });
    }

    /// Restart toward `to` with a spring, carrying the current velocity over.
    fn spring_to(&mut self, to: f32, now: Instant, params: SpringParams) {
        self.advance(now);
        let x0 = f64::from(self.value - to);
        let v0 = f64::from(self.velocity);
        let settle = params.settle_time(x0, v0);
        if settle.is_zero() {
            self.rest_at(to);
            return;
        }
        self.motion = Some(Motion::Spring {
            to,
            x0,
            v0,
            start: now,
            settle,
            params,
        });
    }
}

/// Transition values owned by one dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    backdrop: Channel,
    scale: Channel,
    offset: Channel,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self {
            backdrop: Channel::resting(Pose::HIDDEN.opacity),
            scale: Channel::resting(Pose::HIDDEN.scale),
            offset: Channel::resting(Pose::HIDDEN.offset),
        }
    }
}

impl TransitionState {
    /// Start the enter transition: timed opacity and offset, spring scale.
    pub fn show(&mut self, now: Instant, config: &TransitionConfig) {
        let shown = Pose::SHOWN;
        self.backdrop
            .timing_to(shown.opacity, now, config.show_duration, config.show_easing);
        self.scale.spring_to(shown.scale, now, config.spring);
        self.offset
            .timing_to(shown.offset, now, config.show_duration, config.show_easing);
    }

    /// Start the exit transition. All three channels are timed.
    pub fn hide(&mut self, now: Instant, config: &TransitionConfig) {
        let hidden = Pose::HIDDEN;
        self.backdrop
            .timing_to(hidden.opacity, now, config.hide_duration, config.hide_easing);
        self.scale
            .timing_to(hidden.scale, now, config.hide_duration, config.hide_easing);
        self.offset
            .timing_to(hidden.offset, now, config.hide_duration, config.hide_easing);
    }

    pub fn advance(&mut self, now: Instant) {
        self.backdrop.advance(now);
        self.scale.advance(now);
        self.offset.advance(now);
    }

    pub fn pose(&self) -> Pose {
        Pose {
            opacity: self.backdrop.value(),
            scale: self.scale.value(),
            offset: self.offset.value(),
        }
    }

    /// Pose the channels are heading to (equal to `pose()` when idle).
    pub fn target(&self) -> Pose {
        Pose {
            opacity: self.backdrop.target(),
            scale: self.scale.target(),
            offset: self.offset.target(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.backdrop.is_animating() || self.scale.is_animating() || self.offset.is_animating()
    }

    /// Instant at which the last running channel comes to rest.
    pub fn settles_at(&self) -> Option<Instant> {
        [self.backdrop.end(), self.scale.end(), self.offset.end()]
            .into_iter()
            .flatten()
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert!(close(easing.apply(0.5), 0.5));
        }
        assert!(Easing::EaseInOut.apply(0.25) < 0.25);
        assert!(Easing::EaseInOut.apply(0.75) > 0.75);
    }

    #[test]
    fn default_spring_comes_from_tension_and_friction() {
        let spring = SpringParams::default();
        assert!(close(spring.stiffness, 411.2));
        assert!(close(spring.damping, 22.0));
        assert_eq!(spring.mass, 1.0);
    }

    #[test]
    fn spring_solution_starts_at_initial_conditions() {
        let spring = SpringParams::default();
        let (x, v) = spring.solve(-0.04, 0.5, 0.0);
        assert!((x + 0.04).abs() < 1e-9);
        assert!((v - 0.5).abs() < 1e-9);
    }

    #[test]
    fn every_damping_regime_settles() {
        for damping in [10.0, 40.56, 120.0] {
            let spring = SpringParams {
                stiffness: 411.2,
                damping,
                mass: 1.0,
            };
            let settle = spring.settle_time(-0.04, 0.0);
            assert!(settle > Duration::ZERO);
            assert!(settle < MAX_SETTLE);
            let (x, _) = spring.solve(-0.04, 0.0, settle.as_secs_f64());
            assert!(x.abs() < REST_DISPLACEMENT);
        }
    }

    #[test]
    fn undamped_spring_is_capped() {
        let spring = SpringParams {
            stiffness: 100.0,
            damping: 0.0,
            mass: 1.0,
        };
        assert_eq!(spring.settle_time(-1.0, 0.0), MAX_SETTLE);
    }

    #[test]
    fn default_state_rests_at_hidden_pose() {
        let state = TransitionState::default();
        assert_eq!(state.pose(), Pose::HIDDEN);
        assert!(!state.is_animating());
        assert_eq!(state.settles_at(), None);
    }

    #[test]
    fn timed_channel_is_halfway_at_half_duration_when_linear() {
        let start = Instant::now();
        let mut channel = Channel::resting(0.0);
        channel.timing_to(1.0, start, Duration::from_millis(100), Easing::Linear);
        channel.advance(start + Duration::from_millis(50));
        assert!(close(channel.value(), 0.5));
        channel.advance(start + Duration::from_millis(100));
        assert_eq!(channel.value(), 1.0);
        assert!(!channel.is_animating());
    }

    #[test]
    fn show_converges_to_shown_pose() {
        let start = Instant::now();
        let config = TransitionConfig::default();
        let mut state = TransitionState::default();
        state.show(start, &config);
        assert!(state.is_animating());

        let end = state.settles_at().unwrap();
        assert!(end >= start + config.show_duration);
        state.advance(end);
        assert_eq!(state.pose(), Pose::SHOWN);
        assert!(!state.is_animating());
    }

    #[test]
    fn hide_finishes_within_hide_duration() {
        let start = Instant::now();
        let config = TransitionConfig::default();
        let mut state = TransitionState::default();
        state.show(start, &config);
        state.advance(state.settles_at().unwrap());

        let hide_at = start + Duration::from_secs(1);
        state.hide(hide_at, &config);
        assert_eq!(state.settles_at(), Some(hide_at + config.hide_duration));
        state.advance(hide_at + config.hide_duration);
        assert_eq!(state.pose(), Pose::HIDDEN);
    }

    #[test]
    fn retarget_mid_flight_starts_from_current_value() {
        let start = Instant::now();
        let config = TransitionConfig {
            show_easing: Easing::Linear,
            ..TransitionConfig::default()
        };
        let mut state = TransitionState::default();
        state.show(start, &config);

        let midway = start + config.show_duration / 2;
        state.hide(midway, &config);
        let pose = state.pose();
        assert!(close(pose.opacity, 0.5));
        assert!(pose.scale > HIDDEN_SCALE);
        assert_eq!(state.target(), Pose::HIDDEN);
    }

    #[test]
    fn showing_an_already_shown_dialog_is_idle() {
        let start = Instant::now();
        let config = TransitionConfig::default();
        let mut state = TransitionState::default();
        state.show(start, &config);
        let end = state.settles_at().unwrap();
        state.advance(end);
        state.show(end, &config);
        assert!(!state.is_animating());
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let now = Instant::now();
        let config = TransitionConfig {
            hide_duration: Duration::ZERO,
            ..TransitionConfig::default()
        };
        let mut state = TransitionState::default();
        state.show(now, &config);
        state.hide(now, &config);
        assert_eq!(state.pose(), Pose::HIDDEN);
        assert!(!state.is_animating());
    }
}
