//! Ambient node field: drifting points linked by proximity lines.
//!
//! The field owns its nodes and RNG; a front-end calls [`NodeField::step`]
//! once per display refresh with the elapsed frame count, the current pointer
//! and a [`Painter`]. Resizing or reconfiguring regenerates every node.

use crate::config::{FieldProfile, NodeFieldConfig};
use crate::constants::*;
use crate::input::PointerState;
use crate::paint::Painter;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// Per-profile spawn ranges and link appearance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldTuning {
    pub speed_span: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub opacity_min: f32,
    pub opacity_span: f32,
    pub connection_frac: f32,
    pub line_alpha: f32,
}

impl FieldTuning {
    pub const AMBIENT: Self = Self {
        speed_span: AMBIENT_SPEED_SPAN,
        radius_min: AMBIENT_RADIUS_MIN,
        radius_span: AMBIENT_RADIUS_SPAN,
        opacity_min: 1.0,
        opacity_span: 0.0,
        connection_frac: AMBIENT_CONNECTION_FRAC,
        line_alpha: AMBIENT_LINE_ALPHA,
    };

    pub const SHOWCASE: Self = Self {
        speed_span: SHOWCASE_SPEED_SPAN,
        radius_min: SHOWCASE_RADIUS_MIN,
        radius_span: SHOWCASE_RADIUS_SPAN,
        opacity_min: SHOWCASE_OPACITY_MIN,
        opacity_span: SHOWCASE_OPACITY_SPAN,
        connection_frac: SHOWCASE_CONNECTION_FRAC,
        line_alpha: SHOWCASE_LINE_ALPHA,
    };

    pub fn for_profile(profile: FieldProfile) -> Self {
        match profile {
            FieldProfile::Ambient => Self::AMBIENT,
            FieldProfile::Showcase => Self::SHOWCASE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
    /// Later nodes linked during the last step.
    pub connections: SmallVec<[usize; 8]>,
}

/// floor(area / (NODE_AREA_UNIT / density)); zero for empty surfaces.
pub fn node_count(width: f32, height: f32, density: f32) -> usize {
    if !(width > 0.0 && height > 0.0 && density > 0.0) {
        return 0;
    }
    let area = width as f64 * height as f64;
    let count = (area / (NODE_AREA_UNIT as f64 / density as f64)).floor();
    count.min(MAX_NODES as f64) as usize
}

/// Line opacity for two nodes `distance` apart; 0 at or beyond `threshold`.
#[inline]
pub fn connection_alpha(distance: f32, threshold: f32) -> f32 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    1.0 - distance / threshold
}

/// Convert an elapsed wall time into 60 Hz frame steps.
#[inline]
pub fn frames_from_dt(dt_sec: f32) -> f32 {
    (dt_sec / REFERENCE_FRAME_SEC).clamp(0.0, MAX_FRAME_STEPS)
}

pub struct NodeField {
    nodes: Vec<Node>,
    width: f32,
    height: f32,
    density: f32,
    interactive: bool,
    tuning: FieldTuning,
    rng: StdRng,
}

impl NodeField {
    pub fn new(width: f32, height: f32, config: &NodeFieldConfig, rng: StdRng) -> Self {
        let mut field = Self {
            nodes: Vec::new(),
            width: width.max(0.0),
            height: height.max(0.0),
            density: config.density,
            interactive: config.interactive,
            tuning: FieldTuning::for_profile(config.profile),
            rng,
        };
        field.regenerate();
        field
    }

    pub fn with_seed(width: f32, height: f32, config: &NodeFieldConfig, seed: u64) -> Self {
        Self::new(width, height, config, StdRng::seed_from_u64(seed))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn connection_distance(&self) -> f32 {
        self.width * self.tuning.connection_frac
    }

    pub fn influence_radius(&self) -> f32 {
        self.width * POINTER_INFLUENCE_FRAC
    }

    pub fn connection_count(&self) -> usize {
        self.nodes.iter().map(|n| n.connections.len()).sum()
    }

    /// New surface size; existing nodes are discarded.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.regenerate();
    }

    /// Apply new parameters; nodes are regenerated as on a fresh mount.
    pub fn reconfigure(&mut self, config: &NodeFieldConfig) {
        self.density = config.density;
        self.interactive = config.interactive;
        self.tuning = FieldTuning::for_profile(config.profile);
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let count = node_count(self.width, self.height, self.density);
        let t = self.tuning;
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.nodes = (0..count)
            .map(|_| Node {
                pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * t.speed_span,
                    (rng.gen::<f32>() - 0.5) * t.speed_span,
                ),
                radius: t.radius_min + rng.gen::<f32>() * t.radius_span,
                opacity: t.opacity_min + rng.gen::<f32>() * t.opacity_span,
                connections: SmallVec::new(),
            })
            .collect();
        log::debug!(
            "[node-field] regenerated {} nodes for {:.0}x{:.0}",
            count,
            w,
            h
        );
    }

    /// Advance one display frame and paint it.
    ///
    /// Per node, in order: integrate, reflect at the bounds, pointer push,
    /// draw, then link to every later node within the connection distance.
    /// Later nodes are compared at their not-yet-integrated positions.
    pub fn step<P: Painter>(&mut self, frames: f32, pointer: &PointerState, painter: &mut P) {
        let (w, h) = (self.width, self.height);
        painter.clear(w, h);

        let link_dist = self.connection_distance();
        let influence = self.influence_radius();
        let pointer_pos = if self.interactive {
            pointer.position()
        } else {
            None
        };
        let line_alpha = self.tuning.line_alpha;

        for i in 0..self.nodes.len() {
            let (head, tail) = self.nodes.split_at_mut(i + 1);
            let node = &mut head[i];

            node.pos += node.vel * frames;

            if (node.pos.x < 0.0 && node.vel.x < 0.0) || (node.pos.x > w && node.vel.x > 0.0) {
                node.vel.x = -node.vel.x;
            }
            if (node.pos.y < 0.0 && node.vel.y < 0.0) || (node.pos.y > h && node.vel.y > 0.0) {
                node.vel.y = -node.vel.y;
            }

            if let Some(p) = pointer_pos {
                push_away(node, p, influence);
            }

            painter.disc(node.pos, node.radius, node.opacity);

            node.connections.clear();
            for (k, other) in tail.iter().enumerate() {
                let d = node.pos.distance(other.pos);
                if d < link_dist {
                    node.connections.push(i + 1 + k);
                    painter.line(node.pos, other.pos, connection_alpha(d, link_dist) * line_alpha);
                }
            }
        }
    }
}

/// Nudge velocity away from the pointer, harder the closer the node is.
fn push_away(node: &mut Node, pointer: Vec2, influence: f32) {
    let delta = pointer - node.pos;
    let distance = delta.length();
    if distance >= influence {
        return;
    }
    let dir = if distance > 0.0 {
        delta / distance
    } else {
        Vec2::X
    };
    let force = (influence - distance) / influence;
    node.vel -= dir * force * POINTER_PUSH;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::RecordingPainter;

    fn config(density: f32) -> NodeFieldConfig {
        NodeFieldConfig {
            density,
            ..NodeFieldConfig::default()
        }
    }

    #[test]
    fn empty_surface_has_no_nodes() {
        assert_eq!(node_count(0.0, 500.0, 15.0), 0);
        assert_eq!(node_count(500.0, -1.0, 15.0), 0);
        let mut field = NodeField::with_seed(0.0, 0.0, &config(15.0), 1);
        let mut painter = RecordingPainter::default();
        field.step(1.0, &PointerState::default(), &mut painter);
        assert_eq!(painter.ops.len(), 1);
    }

    #[test]
    fn pointer_pushes_nearby_node_away() {
        let mut field = NodeField::with_seed(1000.0, 10.0, &config(1.0), 3);
        field.nodes = vec![Node {
            pos: Vec2::new(500.0, 5.0),
            vel: Vec2::ZERO,
            radius: 1.0,
            opacity: 1.0,
            connections: SmallVec::new(),
        }];
        let mut pointer = PointerState::default();
        pointer.move_to(520.0, 5.0);
        field.step(1.0, &pointer, &mut RecordingPainter::default());
        let v = field.nodes()[0].vel;
        // influence radius is 100px; distance 20 => force 0.8
        assert!((v.x + 0.008).abs() < 1e-6, "vx {}", v.x);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn pointer_is_ignored_when_not_interactive() {
        let cfg = NodeFieldConfig {
            interactive: false,
            ..config(1.0)
        };
        let mut field = NodeField::with_seed(1000.0, 10.0, &cfg, 3);
        let before: Vec<Vec2> = field.nodes().iter().map(|n| n.vel).collect();
        let mut pointer = PointerState::default();
        pointer.move_to(field.nodes()[0].pos.x, field.nodes()[0].pos.y);
        field.step(1.0, &pointer, &mut RecordingPainter::default());
        let after: Vec<Vec2> = field.nodes().iter().map(|n| n.vel).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn reflection_only_turns_outward_motion() {
        let mut field = NodeField::with_seed(100.0, 100.0, &config(1.0), 9);
        field.nodes = vec![Node {
            pos: Vec2::new(0.02, 50.0),
            vel: Vec2::new(-0.05, 0.0),
            radius: 1.0,
            opacity: 1.0,
            connections: SmallVec::new(),
        }];
        let mut painter = RecordingPainter::default();
        field.step(1.0, &PointerState::default(), &mut painter);
        assert!(field.nodes()[0].vel.x > 0.0);
        field.step(1.0, &PointerState::default(), &mut painter);
        assert!(field.nodes()[0].vel.x > 0.0);
        assert!(field.nodes()[0].pos.x >= 0.0);
    }
}
