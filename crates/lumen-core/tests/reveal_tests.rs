// Reveal schedule and visibility state machine.

use approx::assert_relative_eq;
use lumen_core::reveal::{
    split_units, Channel, Reveal, RevealTimeline, TickOutcome, VisibilityAction,
};
use lumen_core::{Phase, RevealConfig, SplitMode, UnitStyle};

fn reveal(text: &str) -> RevealConfig {
    RevealConfig {
        text: text.to_string(),
        ..RevealConfig::default()
    }
}

#[test]
fn two_letters_start_thirty_ms_apart() {
    let cfg = reveal("AI");
    let units = split_units(&cfg.text, cfg.split_granularity);
    assert_eq!(units.len(), 2);
    let tl = RevealTimeline::build(units.len(), &cfg);
    let ms: Vec<f64> = tl.start_times().iter().map(|s| s * 1000.0).collect();
    assert_relative_eq!(ms[0], 0.0);
    assert_relative_eq!(ms[1], 30.0, epsilon = 1e-9);
}

#[test]
fn starts_are_delay_plus_index_times_stagger() {
    let cfg = RevealConfig {
        delay: 250.0,
        stagger_interval: 0.05,
        duration: 0.8,
        ..reveal("staggered")
    };
    let tl = RevealTimeline::build(9, &cfg);
    for (k, start) in tl.start_times().iter().enumerate() {
        assert_relative_eq!(*start, 0.25 + k as f64 * 0.05, epsilon = 1e-9);
    }
    assert_relative_eq!(tl.total_duration(), 0.25 + 8.0 * 0.05 + 0.8, epsilon = 1e-9);
}

#[test]
fn units_move_from_hidden_to_visible() {
    let cfg = RevealConfig {
        stagger_interval: 0.1,
        ..reveal("abc")
    };
    let tl = RevealTimeline::build(3, &cfg);
    let mut frames = Vec::new();

    tl.sample(0.0, &mut frames);
    assert_eq!(frames[0].style, UnitStyle::risen(10.0));
    assert_eq!(frames[2].style, UnitStyle::risen(10.0));

    tl.sample(0.3, &mut frames);
    assert!(frames[0].style.opacity > frames[1].style.opacity);
    assert!(frames[1].style.opacity > frames[2].style.opacity);
    assert!(frames[0].style.translate_y < frames[2].style.translate_y);

    tl.sample(tl.total_duration(), &mut frames);
    assert!(frames.iter().all(|f| f.style == UnitStyle::VISIBLE));
}

#[test]
fn completion_fires_once_per_run() {
    let mut r = Reveal::new(reveal("AI"));
    let mut frames = Vec::new();
    assert_eq!(r.tick(0.0, &mut frames), TickOutcome::Idle);
    assert_eq!(r.on_visibility(true), VisibilityAction::PlayAndDisconnect);
    assert_eq!(r.tick(0.1, &mut frames), TickOutcome::Running);
    assert_eq!(r.tick(0.6, &mut frames), TickOutcome::Completed);
    assert_eq!(r.tick(0.7, &mut frames), TickOutcome::Idle);
    assert_eq!(r.phase(), Phase::Settled);
}

#[test]
fn single_shot_ignores_reentry() {
    let mut r = Reveal::new(reveal("once"));
    assert_eq!(r.on_visibility(true), VisibilityAction::PlayAndDisconnect);
    let generation = r.generation();
    assert_eq!(r.on_visibility(false), VisibilityAction::None);
    assert_eq!(r.on_visibility(true), VisibilityAction::None);
    let mut frames = Vec::new();
    r.tick(10.0, &mut frames);
    assert_eq!(r.on_visibility(false), VisibilityAction::None);
    assert_eq!(r.on_visibility(true), VisibilityAction::None);
    assert_eq!(r.generation(), generation);
}

#[test]
fn repeatable_reveal_hides_and_replays() {
    let mut r = Reveal::new(RevealConfig {
        once: false,
        ..reveal("again")
    });
    assert_eq!(r.on_visibility(true), VisibilityAction::Play);
    assert_eq!(r.on_visibility(false), VisibilityAction::Hide);
    assert_eq!(r.phase(), Phase::Idle);
    assert_eq!(r.on_visibility(true), VisibilityAction::Play);
    assert_eq!(r.generation(), 2);
}

#[test]
fn reconfigure_supersedes_in_flight_run() {
    let mut r = Reveal::new(reveal("first"));
    r.on_visibility(true);
    let mut frames = Vec::new();
    assert_eq!(r.tick(0.05, &mut frames), TickOutcome::Running);

    let outcome = r.reconfigure(RevealConfig {
        split_granularity: SplitMode::Word,
        ..reveal("first second")
    });
    assert!(outcome.units_changed);
    assert!(outcome.restarted);
    assert_eq!(r.units().len(), 2);
    assert_eq!(r.generation(), 2);

    // the new run starts over from the hidden state
    assert_eq!(r.tick(0.0, &mut frames), TickOutcome::Running);
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].style, UnitStyle::risen(10.0));
}

#[test]
fn reconfigure_while_idle_only_rebuilds() {
    let mut r = Reveal::new(reveal("idle"));
    let outcome = r.reconfigure(RevealConfig {
        delay: 100.0,
        ..reveal("idle")
    });
    assert!(!outcome.units_changed);
    assert!(!outcome.restarted);
    assert_eq!(r.phase(), Phase::Idle);
    assert_relative_eq!(r.timeline().start_times()[0], 0.1);
}

#[test]
fn unmount_cancels_everything() {
    let mut r = Reveal::new(reveal("gone"));
    r.on_visibility(true);
    r.unmount();
    let mut frames = Vec::new();
    assert_eq!(r.tick(0.1, &mut frames), TickOutcome::Idle);
    assert_eq!(r.on_visibility(true), VisibilityAction::None);
    assert_eq!(r.phase(), Phase::Unmounted);
}

#[test]
fn empty_text_completes_after_delay() {
    let mut r = Reveal::new(RevealConfig {
        delay: 200.0,
        ..reveal("")
    });
    r.on_visibility(true);
    let mut frames = Vec::new();
    assert_eq!(r.tick(0.1, &mut frames), TickOutcome::Running);
    assert_eq!(r.tick(0.2, &mut frames), TickOutcome::Completed);
    assert!(frames.is_empty());
}

fn glow_starts(tl: &RevealTimeline, rising: bool) -> Vec<(f64, f64)> {
    tl.tweens()
        .iter()
        .filter(|t| matches!(t.channel, Channel::Glow { from, .. } if (from == 0.0) == rising))
        .map(|t| (t.start, t.duration))
        .collect()
}

#[test]
fn standard_glow_follows_the_rise_at_half_stagger() {
    let cfg = RevealConfig {
        delay: 100.0,
        stagger_interval: 0.04,
        duration: 0.6,
        glow: true,
        ..reveal("abc")
    };
    let tl = RevealTimeline::build(3, &cfg);

    let glow_in = glow_starts(&tl, true);
    assert_eq!(glow_in.len(), 3);
    for (k, (start, duration)) in glow_in.iter().enumerate() {
        assert_relative_eq!(*start, 0.3 + k as f64 * 0.02, epsilon = 1e-9);
        assert_relative_eq!(*duration, 0.5, epsilon = 1e-9);
    }

    // glow-in ends at 0.34 + 0.5; glow-out begins 0.1 s later
    let glow_out = glow_starts(&tl, false);
    assert_eq!(glow_out.len(), 3);
    for (k, (start, duration)) in glow_out.iter().enumerate() {
        assert_relative_eq!(*start, 0.94 + k as f64 * 0.02, epsilon = 1e-9);
        assert_relative_eq!(*duration, 0.8, epsilon = 1e-9);
    }
    assert_relative_eq!(tl.total_duration(), 0.98 + 0.8, epsilon = 1e-9);
}

#[test]
fn typing_glow_tracks_each_key_at_full_stagger() {
    let cfg = RevealConfig {
        stagger_interval: 0.05,
        glow: true,
        typing_mode: true,
        ..reveal("type")
    };
    let tl = RevealTimeline::build(4, &cfg);

    let glow_in = glow_starts(&tl, true);
    assert_eq!(glow_in.len(), 4);
    for (k, (start, duration)) in glow_in.iter().enumerate() {
        assert_relative_eq!(*start, 0.02 + k as f64 * 0.05, epsilon = 1e-9);
        assert_relative_eq!(*duration, 0.2, epsilon = 1e-9);
    }

    let glow_out = glow_starts(&tl, false);
    assert_eq!(glow_out.len(), 4);
    for (k, (start, duration)) in glow_out.iter().enumerate() {
        assert_relative_eq!(*start, 0.47 + k as f64 * 0.05, epsilon = 1e-9);
        assert_relative_eq!(*duration, 0.3, epsilon = 1e-9);
    }
    // the glow outlasts the 0.01 s per-key typing
    assert_relative_eq!(tl.total_duration(), 0.62 + 0.3, epsilon = 1e-9);
}

#[test]
fn no_glow_tweens_without_the_flag() {
    let cfg = RevealConfig {
        typing_mode: true,
        ..reveal("type")
    };
    let tl = RevealTimeline::build(4, &cfg);
    assert!(glow_starts(&tl, true).is_empty());
    assert!(glow_starts(&tl, false).is_empty());
    assert_eq!(tl.tweens().len(), 4);
}
