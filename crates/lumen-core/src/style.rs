//! Explicit animatable style fields and their interpolation.

use crate::constants::SETTLE_TIME_CONSTANTS;

/// Easing curves used by the reveal and panel tweens.
///
/// `PowerNOut` follows the usual `1 - (1 - t)^(N + 1)` family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    Power1Out,
    Power2Out,
    Power3Out,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - inv * inv,
            Self::Power2Out => 1.0 - inv * inv * inv,
            Self::Power3Out => 1.0 - inv * inv * inv * inv,
        }
    }
}

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Fraction of the remaining gap to close this frame so that a value settles
/// (≈95%) after `settle_sec`, independent of frame rate.
#[inline]
pub fn smoothing_alpha(dt_sec: f32, settle_sec: f32) -> f32 {
    if settle_sec <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt_sec.max(0.0) * SETTLE_TIME_CONSTANTS / settle_sec).exp()
}

/// Visual state of one animation target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitStyle {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl Default for UnitStyle {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl UnitStyle {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub const fn transparent() -> Self {
        Self {
            opacity: 0.0,
            ..Self::VISIBLE
        }
    }

    pub const fn risen(translate_y: f32) -> Self {
        Self {
            opacity: 0.0,
            translate_y,
            ..Self::VISIBLE
        }
    }

    /// Field-wise interpolation; `t` is already eased.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            opacity: lerp(from.opacity, to.opacity, t),
            translate_x: lerp(from.translate_x, to.translate_x, t),
            translate_y: lerp(from.translate_y, to.translate_y, t),
            scale: lerp(from.scale, to.scale, t),
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate({:.3}px, {:.3}px) scale({:.4})",
            self.translate_x, self.translate_y, self.scale
        )
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity.clamp(0.0, 1.0))
    }
}

/// CSS `text-shadow` for a glow intensity in [0, 1].
///
/// Typing mode layers a tinted halo under the white one.
pub fn glow_shadow_css(glow: f32, typing: bool) -> String {
    let g = glow.clamp(0.0, 1.0);
    if g <= 0.0 {
        return "none".to_string();
    }
    let white = format!("0 0 {:.2}px rgba(255,255,255,{:.3})", 8.0 * g, 0.8 * g);
    if typing {
        format!(
            "{white}, 0 0 {:.2}px rgba(0,255,200,{:.3})",
            12.0 * g,
            0.4 * g
        )
    } else {
        white
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_fixed() {
        for e in [
            Easing::Linear,
            Easing::Power1Out,
            Easing::Power2Out,
            Easing::Power3Out,
        ] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
            assert_eq!(e.apply(2.0), 1.0);
        }
        assert!(Easing::Power2Out.apply(0.5) > Easing::Power1Out.apply(0.5));
    }

    #[test]
    fn smoothing_alpha_settles_after_settle_time() {
        let a = smoothing_alpha(0.4, 0.4);
        assert!(a > 0.94 && a < 0.96, "alpha {a}");
        assert_eq!(smoothing_alpha(0.016, 0.0), 1.0);
    }

    #[test]
    fn glow_none_at_zero() {
        assert_eq!(glow_shadow_css(0.0, false), "none");
        assert!(glow_shadow_css(1.0, true).contains("rgba(0,255,200,0.400)"));
    }
}
