use super::constants::{BOX_TURN_SECS, TEXT_SWING_RADIANS, TEXT_SWING_SECS, TORUS_TURN_SECS};
use super::scene::{GroupKind, SceneContext};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    SineInOut,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::SineInOut => -((PI * t).cos() - 1.0) * 0.5,
        }
    }
}

/// Rotation that interpolates `from -> to` over `duration_sec` and repeats
/// forever. With `yoyo` every other cycle runs backwards.
#[derive(Clone, Debug)]
pub struct RotationTween {
    pub from: Vec3,
    pub to: Vec3,
    pub duration_sec: f32,
    pub ease: Ease,
    pub yoyo: bool,
    elapsed: f32,
}

impl RotationTween {
    pub fn new(from: Vec3, to: Vec3, duration_sec: f32, ease: Ease, yoyo: bool) -> Self {
        Self {
            from,
            to,
            duration_sec: duration_sec.max(1e-3),
            ease,
            yoyo,
            elapsed: 0.0,
        }
    }

    /// Full turn about `axis`, linear, restarting each cycle.
    pub fn spin(axis: Vec3, duration_sec: f32) -> Self {
        Self::new(Vec3::ZERO, axis * TAU, duration_sec, Ease::Linear, false)
    }

    /// Swing between `-amplitude` and `+amplitude` about `axis`.
    pub fn swing(axis: Vec3, amplitude: f32, duration_sec: f32) -> Self {
        Self::new(
            -axis * amplitude,
            axis * amplitude,
            duration_sec,
            Ease::SineInOut,
            true,
        )
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Value at an absolute time, without touching the tween's clock.
    pub fn value_at(&self, time_sec: f32) -> Vec3 {
        let time_sec = time_sec.max(0.0);
        let cycles = time_sec / self.duration_sec;
        let cycle = cycles.floor();
        let mut t = cycles - cycle;
        if self.yoyo && (cycle as u64) % 2 == 1 {
            t = 1.0 - t;
        }
        self.from.lerp(self.to, self.ease.apply(t))
    }

    /// Advance the clock by `dt_sec` and return the new value.
    pub fn advance(&mut self, dt_sec: f32) -> Vec3 {
        self.elapsed += dt_sec.max(0.0);
        // keep the clock bounded; a yoyo tween needs two cycles to return to its start
        let period = if self.yoyo {
            2.0 * self.duration_sec
        } else {
            self.duration_sec
        };
        if self.elapsed >= period {
            self.elapsed %= period;
        }
        self.value_at(self.elapsed)
    }
}

/// One looping tween per group, driven from the frame loop.
#[derive(Clone, Debug)]
pub struct Animator {
    tweens: Vec<(GroupKind, RotationTween)>,
}

impl Default for Animator {
    fn default() -> Self {
        let mut animator = Self::empty();
        animator.push(
            GroupKind::Text,
            RotationTween::swing(Vec3::Y, TEXT_SWING_RADIANS, TEXT_SWING_SECS),
        );
        animator.push(GroupKind::Toruses, RotationTween::spin(Vec3::Y, TORUS_TURN_SECS));
        animator.push(GroupKind::Boxes, RotationTween::spin(Vec3::X, BOX_TURN_SECS));
        animator
    }
}

impl Animator {
    pub fn empty() -> Self {
        Self { tweens: Vec::new() }
    }

    pub fn push(&mut self, kind: GroupKind, tween: RotationTween) {
        self.tweens.push((kind, tween));
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn tick(&mut self, dt_sec: f32, scene: &mut SceneContext) {
        for (kind, tween) in &mut self.tweens {
            let rot = tween.advance(dt_sec);
            scene.set_rotation(*kind, rot);
        }
    }
}
