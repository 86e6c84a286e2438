//! Pinned horizontal track: vertical scroll through a tall section slides a
//! wide row of panels sideways, with a scrub lag and per-panel entrances.

use crate::constants::*;
use crate::style::{smoothing_alpha, Easing, UnitStyle};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackGeometry {
    /// Section top relative to the viewport; negative once scrolled past.
    pub section_top: f32,
    pub track_width: f32,
    pub viewport_width: f32,
}

/// Horizontal distance the track travels while pinned.
#[inline]
pub fn scroll_distance(track_width: f32, viewport_width: f32) -> f32 {
    (track_width - viewport_width).max(0.0)
}

/// Fraction of the pinned scroll consumed, clamped to [0, 1].
#[inline]
pub fn track_progress(section_top: f32, distance: f32) -> f32 {
    if distance <= 0.0 {
        return 0.0;
    }
    (-section_top / distance).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Panel {
    /// Left edge within the track, before translation.
    pub left: f32,
    pub width: f32,
    progress: f32,
}

impl Panel {
    pub fn new(left: f32, width: f32) -> Self {
        Self {
            left,
            width,
            progress: 0.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HorizontalTrack {
    offset: f32,
    target: f32,
    panels: Vec<Panel>,
}

impl HorizontalTrack {
    pub fn new(panels: Vec<Panel>) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            panels,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Re-measure panels after layout changes, keeping entrance progress.
    pub fn set_panel_bounds(&mut self, bounds: &[(f32, f32)]) {
        let old = std::mem::take(&mut self.panels);
        self.panels = bounds
            .iter()
            .enumerate()
            .map(|(i, &(left, width))| Panel {
                left,
                width,
                progress: old.get(i).map_or(0.0, |p| p.progress),
            })
            .collect();
    }

    pub fn on_scroll(&mut self, geom: &TrackGeometry) {
        let distance = scroll_distance(geom.track_width, geom.viewport_width);
        self.target = -distance * track_progress(geom.section_top, distance);
    }

    /// Advance the scrub and panel tweens; returns whether anything moved.
    pub fn step(&mut self, dt_sec: f32, viewport_width: f32) -> bool {
        let mut moving = false;
        let gap = self.target - self.offset;
        if gap.abs() > 0.05 {
            self.offset += gap * smoothing_alpha(dt_sec, TRACK_SCRUB_SEC);
            moving = true;
        } else {
            self.offset = self.target;
        }

        let center = viewport_width / 2.0;
        let rate = dt_sec.max(0.0) / PANEL_TWEEN_SEC;
        for panel in &mut self.panels {
            let entered = panel.left + self.offset <= center;
            let goal = if entered { 1.0 } else { 0.0 };
            if panel.progress != goal {
                panel.progress = if entered {
                    (panel.progress + rate).min(1.0)
                } else {
                    (panel.progress - rate).max(0.0)
                };
                moving = true;
            }
        }
        moving
    }

    pub fn transform_css(&self) -> String {
        format!("translateX({:.3}px)", self.offset)
    }

    pub fn panel_style(&self, index: usize) -> UnitStyle {
        let from = UnitStyle {
            opacity: PANEL_FROM_OPACITY,
            scale: PANEL_FROM_SCALE,
            ..UnitStyle::VISIBLE
        };
        let p = self.panels.get(index).map_or(0.0, |p| p.progress);
        UnitStyle::lerp(&from, &UnitStyle::VISIBLE, Easing::Power1Out.apply(p))
    }
}
