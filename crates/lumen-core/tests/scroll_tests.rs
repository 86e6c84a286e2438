// Scroll-driven engines: parallax smoothing and the pinned horizontal track.

use approx::assert_relative_eq;
use lumen_core::parallax::{ease_toward, parallax_target};
use lumen_core::track::{scroll_distance, track_progress, HorizontalTrack, Panel, TrackGeometry};
use lumen_core::{Direction, Parallax, ParallaxConfig, ScrollGeometry};

#[test]
fn offset_converges_geometrically_toward_constant_target() {
    for &e in &[0.05_f32, 0.1, 0.5, 1.0] {
        for &target in &[-42.0_f32, 3.75, 120.0] {
            let mut offset = 0.0_f32;
            for n in 1..=60 {
                offset = ease_toward(offset, target, e);
                let bound = target.abs() * (1.0 - e).powi(n);
                assert!(
                    (offset - target).abs() <= bound + 1e-3,
                    "e={e} T={target} n={n}: |{offset} - {target}| > {bound}"
                );
            }
        }
    }
}

#[test]
fn parallax_engine_smooths_scroll_updates() {
    let mut p = Parallax::new(ParallaxConfig {
        speed: 0.2,
        direction: Direction::Down,
        easing: 0.1,
    });
    let geom = ScrollGeometry {
        element_top: 700.0,
        element_height: 200.0,
        viewport_height: 1000.0,
    };
    let target = parallax_target(&geom, 0.2);
    assert_relative_eq!(target, 6.0, epsilon = 1e-4);

    p.set_visible(true);
    p.on_scroll(&geom);
    assert_relative_eq!(p.offset(), 0.6, epsilon = 1e-5);
    for _ in 0..200 {
        p.on_scroll(&geom);
    }
    assert_relative_eq!(p.offset(), target, epsilon = 1e-3);
}

#[test]
fn track_progress_is_clamped() {
    let d = scroll_distance(3000.0, 1000.0);
    assert_eq!(d, 2000.0);
    assert_eq!(track_progress(100.0, d), 0.0);
    assert_relative_eq!(track_progress(-500.0, d), 0.25);
    assert_eq!(track_progress(-5000.0, d), 1.0);
}

#[test]
fn track_scrubs_toward_scroll_target() {
    let mut track = HorizontalTrack::new(vec![Panel::new(0.0, 400.0)]);
    track.on_scroll(&TrackGeometry {
        section_top: -1000.0,
        track_width: 3000.0,
        viewport_width: 1000.0,
    });
    assert!(track.step(1.0 / 60.0, 1000.0));
    assert!(track.offset() < 0.0 && track.offset() > -1000.0);
    for _ in 0..600 {
        track.step(1.0 / 60.0, 1000.0);
    }
    assert_relative_eq!(track.offset(), -1000.0, epsilon = 0.1);
    assert!(!track.step(1.0 / 60.0, 1000.0));
    assert_eq!(track.transform_css(), "translateX(-1000.000px)");
}

#[test]
fn idle_parallax_redirects_held_offset_on_reconfigure() {
    let config = ParallaxConfig {
        speed: 0.2,
        direction: Direction::Down,
        easing: 0.1,
    };
    let mut p = Parallax::new(config.clone());
    assert!(p.set_visible(true));
    let geom = ScrollGeometry {
        element_top: 700.0,
        element_height: 200.0,
        viewport_height: 1000.0,
    };
    assert!(p.on_scroll(&geom));
    assert!(!p.set_visible(false));
    let held = p.offset();
    assert!(held > 0.0);

    p.reconfigure(ParallaxConfig {
        direction: Direction::Left,
        ..config
    });
    assert!(!p.on_scroll(&geom));
    assert_relative_eq!(p.offset(), held);
    assert_eq!(p.transform_css(), format!("translateX({:.3}px)", -held));
}
