//! Scroll-driven parallax offset with exponential smoothing.

use crate::config::{Direction, ParallaxConfig};
use crate::constants::PARALLAX_RANGE;
use crate::lifecycle::Phase;

/// Element placement relative to the viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    /// `getBoundingClientRect().top`
    pub element_top: f32,
    pub element_height: f32,
    pub viewport_height: f32,
}

/// Target offset: signed distance of the element's center from the viewport
/// center, in viewport heights, scaled by `PARALLAX_RANGE * speed`.
pub fn parallax_target(geom: &ScrollGeometry, speed: f32) -> f32 {
    if geom.viewport_height <= 0.0 {
        return 0.0;
    }
    let element_mid = geom.element_top + geom.element_height / 2.0;
    let viewport_mid = geom.viewport_height / 2.0;
    (element_mid - viewport_mid) / geom.viewport_height * PARALLAX_RANGE * speed
}

/// Move `current` a fraction `easing` of the way to `target`.
#[inline]
pub fn ease_toward(current: f32, target: f32, easing: f32) -> f32 {
    current + (target - current) * easing
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Debug)]
pub struct Parallax {
    config: ParallaxConfig,
    offset: f32,
    phase: Phase,
}

impl Parallax {
    pub fn new(config: ParallaxConfig) -> Self {
        Self {
            config,
            offset: 0.0,
            phase: Phase::Idle,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    pub fn reconfigure(&mut self, config: ParallaxConfig) {
        self.config = config;
    }

    /// Returns whether scroll updates should now be delivered.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if !self.phase.is_live() {
            return false;
        }
        self.phase = if visible { Phase::Active } else { Phase::Idle };
        visible
    }

    /// One smoothing update. Ignored unless active; the last offset persists.
    pub fn on_scroll(&mut self, geom: &ScrollGeometry) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        let target = parallax_target(geom, self.config.speed);
        self.offset = ease_toward(self.offset, target, self.config.easing);
        true
    }

    /// Axis and signed pixel displacement; up/left move against the offset.
    pub fn displacement(&self) -> (Axis, f32) {
        match self.config.direction {
            Direction::Up => (Axis::Y, -self.offset),
            Direction::Down => (Axis::Y, self.offset),
            Direction::Left => (Axis::X, -self.offset),
            Direction::Right => (Axis::X, self.offset),
        }
    }

    pub fn transform_css(&self) -> String {
        match self.displacement() {
            (Axis::X, px) => format!("translateX({:.3}px)", px),
            (Axis::Y, px) => format!("translateY({:.3}px)", px),
        }
    }

    pub fn unmount(&mut self) {
        self.phase = Phase::Unmounted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom(top: f32) -> ScrollGeometry {
        ScrollGeometry {
            element_top: top,
            element_height: 200.0,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn centered_element_has_zero_target() {
        assert_eq!(parallax_target(&geom(300.0), 0.5), 0.0);
        assert_eq!(
            parallax_target(
                &ScrollGeometry {
                    viewport_height: 0.0,
                    ..geom(10.0)
                },
                1.0
            ),
            0.0
        );
    }

    #[test]
    fn below_center_is_positive() {
        // mid = 700, viewport mid 400 => 300/800 * 100 * 0.1 = 3.75
        let t = parallax_target(&geom(600.0), 0.1);
        assert!((t - 3.75).abs() < 1e-5);
    }

    #[test]
    fn scroll_ignored_until_visible() {
        let mut p = Parallax::new(ParallaxConfig::default());
        assert!(!p.on_scroll(&geom(600.0)));
        assert_eq!(p.offset(), 0.0);
        p.set_visible(true);
        assert!(p.on_scroll(&geom(600.0)));
        let kept = p.offset();
        assert!(kept > 0.0);
        p.set_visible(false);
        assert!(!p.on_scroll(&geom(0.0)));
        assert_eq!(p.offset(), kept);
    }

    #[test]
    fn direction_sets_axis_and_sign() {
        let mut p = Parallax::new(ParallaxConfig {
            easing: 1.0,
            ..ParallaxConfig::default()
        });
        p.set_visible(true);
        p.on_scroll(&geom(600.0));
        assert_eq!(p.transform_css(), "translateY(-3.750px)");
        for (dir, css) in [
            (Direction::Down, "translateY(3.750px)"),
            (Direction::Left, "translateX(-3.750px)"),
            (Direction::Right, "translateX(3.750px)"),
        ] {
            p.reconfigure(ParallaxConfig {
                direction: dir,
                easing: 1.0,
                ..ParallaxConfig::default()
            });
            assert_eq!(p.transform_css(), css);
        }
    }

    #[test]
    fn unmounted_stays_unmounted() {
        let mut p = Parallax::new(ParallaxConfig::default());
        p.unmount();
        assert!(!p.set_visible(true));
        assert_eq!(p.phase(), Phase::Unmounted);
    }
}
