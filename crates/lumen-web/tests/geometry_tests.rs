// Host-side tests for the DOM-free layout helpers.
// The web crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/geometry.rs");
}

use geometry::*;
use glam::Vec2;

#[test]
fn mount_kinds_round_trip_through_attribute_values() {
    for kind in MountKind::ALL {
        assert_eq!(MountKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(MountKind::parse(" Node-Field "), Some(MountKind::NodeField));
    assert_eq!(MountKind::parse("carousel"), None);
    assert_eq!(MountKind::parse(""), None);
}

#[test]
fn root_margin_is_css_pixels() {
    assert_eq!(root_margin_css(50.0), "50px");
    assert_eq!(root_margin_css(0.0), "0px");
}

#[test]
fn pointer_is_relative_to_surface_origin() {
    let p = surface_point(Vec2::new(130.0, 75.0), Vec2::new(100.0, 50.0));
    assert_eq!(p, Vec2::new(30.0, 25.0));
}

#[test]
fn backing_size_never_negative() {
    assert_eq!(backing_size(800, 600), (800, 600));
    assert_eq!(backing_size(-5, 10), (0, 10));
}

#[test]
fn pinned_height_adds_horizontal_overflow() {
    assert_eq!(pinned_section_height(3000.0, 1000.0, 800.0), 2800.0);
    // a track narrower than the viewport needs no extra scroll
    assert_eq!(pinned_section_height(600.0, 1000.0, 800.0), 800.0);
}

#[test]
fn indented_markup_text_collapses_like_rendered_html() {
    assert_eq!(
        rendered_text("\n        Quantum\n        Neural   Core\n    "),
        "Quantum Neural Core"
    );
    assert_eq!(rendered_text("Hi\tthere"), "Hi there");
    assert_eq!(rendered_text("   \n  "), "");
}

#[test]
fn collapsed_markup_text_splits_into_clean_words() {
    use lumen_core::config::SplitMode;
    use lumen_core::reveal::split_units;

    let text = rendered_text("Quantum\n        Neural   Core");
    let units = split_units(&text, SplitMode::Word);
    let words: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
    assert_eq!(words, vec!["Quantum", "Neural", "Core"]);
}
