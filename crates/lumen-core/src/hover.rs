//! Pointer-relative motion for a single element: 3D tilt toward the pointer
//! or a translation that trails it.

use crate::config::{HoverConfig, HoverMode};
use crate::constants::*;
use crate::style::smoothing_alpha;
use glam::Vec2;

const REST_EPSILON: f32 = 0.01;

pub struct HoverMotion {
    config: HoverConfig,
    /// Tilt: (rotateX°, rotateY°). Follow: (x px, y px).
    current: Vec2,
    target: Vec2,
    settle_sec: f32,
}

impl HoverMotion {
    pub fn new(config: HoverConfig) -> Self {
        let settle_sec = match config.mode {
            HoverMode::Tilt => TILT_SETTLE_SEC,
            HoverMode::Follow => FOLLOW_SETTLE_SEC,
        };
        Self {
            config,
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            settle_sec,
        }
    }

    pub fn reconfigure(&mut self, config: HoverConfig) {
        let current = self.current;
        *self = Self::new(config);
        self.current = current;
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// `normalized` is the pointer position as fractions of the element box.
    pub fn on_pointer(&mut self, normalized: Vec2) {
        let centered = normalized - Vec2::splat(0.5);
        match self.config.mode {
            HoverMode::Tilt => {
                let max = self.config.max_degrees;
                self.target = Vec2::new(-centered.y * max, centered.x * max);
                self.settle_sec = TILT_SETTLE_SEC;
            }
            HoverMode::Follow => {
                self.target = centered * self.config.factor;
                self.settle_sec = FOLLOW_SETTLE_SEC;
            }
        }
    }

    /// Tilt relaxes back to flat; follow keeps its last target.
    pub fn on_leave(&mut self) {
        if self.config.mode == HoverMode::Tilt {
            self.target = Vec2::ZERO;
            self.settle_sec = TILT_RELEASE_SEC;
        }
    }

    /// Advance smoothing; returns whether the element is still moving.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        let alpha = smoothing_alpha(dt_sec, self.settle_sec);
        self.current += (self.target - self.current) * alpha;
        if (self.target - self.current).abs().max_element() < REST_EPSILON {
            self.current = self.target;
            return false;
        }
        true
    }

    pub fn transform_css(&self) -> String {
        match self.config.mode {
            HoverMode::Tilt => format!(
                "perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg)",
                self.config.perspective, self.current.x, self.current.y
            ),
            HoverMode::Follow => format!(
                "translate({:.3}px, {:.3}px)",
                self.current.x, self.current.y
            ),
        }
    }
}
