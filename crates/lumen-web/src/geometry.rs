// Pure layout helpers shared by the DOM bindings. No web-sys types here so the
// module can be exercised on the host.

use glam::Vec2;

/// Engines that `mountPage()` knows how to attach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MountKind {
    NodeField,
    Parallax,
    Reveal,
    Loading,
    Hover,
    Track,
}

impl MountKind {
    pub const ALL: [MountKind; 6] = [
        MountKind::NodeField,
        MountKind::Parallax,
        MountKind::Reveal,
        MountKind::Loading,
        MountKind::Hover,
        MountKind::Track,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(value))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MountKind::NodeField => "node-field",
            MountKind::Parallax => "parallax",
            MountKind::Reveal => "reveal",
            MountKind::Loading => "loading",
            MountKind::Hover => "hover",
            MountKind::Track => "track",
        }
    }
}

/// `rootMargin` value expanding the viewport by `px` on every side.
pub fn root_margin_css(px: f64) -> String {
    format!("{}px", px)
}

/// Pointer position inside a surface whose top-left sits at `origin` in
/// client coordinates.
#[inline]
pub fn surface_point(client: Vec2, origin: Vec2) -> Vec2 {
    client - origin
}

/// Canvas backing size from a container's client size, in whole pixels.
#[inline]
pub fn backing_size(client_width: i32, client_height: i32) -> (u32, u32) {
    (client_width.max(0) as u32, client_height.max(0) as u32)
}

/// Height a pinned track section needs so that scrolling through it consumes
/// exactly the horizontal overflow.
#[inline]
pub fn pinned_section_height(track_width: f32, viewport_width: f32, viewport_height: f32) -> f32 {
    viewport_height + (track_width - viewport_width).max(0.0)
}

/// Text as the browser renders it: whitespace runs collapsed to one space,
/// leading and trailing whitespace dropped.
pub fn rendered_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
