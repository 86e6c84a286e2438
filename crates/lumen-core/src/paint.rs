use glam::Vec2;

/// Drawing surface the node field renders into.
///
/// Color is a property of the surface; calls only carry an alpha multiplier.
pub trait Painter {
    fn clear(&mut self, width: f32, height: f32);
    fn disc(&mut self, center: Vec2, radius: f32, alpha: f32);
    fn line(&mut self, from: Vec2, to: Vec2, alpha: f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintOp {
    Clear { width: f32, height: f32 },
    Disc { center: Vec2, radius: f32, alpha: f32 },
    Line { from: Vec2, to: Vec2, alpha: f32 },
}

/// Painter that keeps every call, for headless inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    pub ops: Vec<PaintOp>,
}

impl RecordingPainter {
    pub fn lines(&self) -> impl Iterator<Item = &PaintOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, PaintOp::Line { .. }))
    }

    pub fn discs(&self) -> impl Iterator<Item = &PaintOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, PaintOp::Disc { .. }))
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(PaintOp::Clear { width, height });
    }

    fn disc(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.ops.push(PaintOp::Disc {
            center,
            radius,
            alpha,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        self.ops.push(PaintOp::Line { from, to, alpha });
    }
}
