// Loading screen progress and fade timing.

use lumen_core::constants::{LOADER_WORDS, LOADER_WORD_PERIOD_SEC, LOADING_CAP};
use lumen_core::loading::{word_offset_percent, LoadingEvent, LoadingProgress, LoadingStage};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

#[test]
fn creeping_progress_stays_below_cap() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut loading = LoadingProgress::new();
    let mut prev = 0.0;
    for _ in 0..60 * 120 {
        assert_eq!(loading.advance(DT, &mut rng), LoadingEvent::None);
        assert!(loading.progress() >= prev);
        assert!(loading.progress() <= LOADING_CAP);
        prev = loading.progress();
    }
    assert_eq!(loading.stage(), LoadingStage::Loading);
    assert!(loading.progress() > 0.0);
    assert_eq!(loading.opacity(), 1.0);
}

#[test]
fn finish_reaches_hundred_then_holds_fades_and_completes_once() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut loading = LoadingProgress::new();
    for _ in 0..30 {
        loading.advance(DT, &mut rng);
    }
    loading.finish();
    assert_eq!(loading.stage(), LoadingStage::Finishing);

    let mut steps = 0;
    while loading.stage() == LoadingStage::Finishing {
        loading.advance(DT, &mut rng);
        steps += 1;
        assert!(steps < 600, "finish never snapped");
    }
    assert_eq!(loading.progress(), 100.0);
    assert_eq!(loading.percent_label(), "100%");
    assert_eq!(loading.stage(), LoadingStage::Holding);

    let mut completed = 0;
    let mut saw_fade = false;
    for _ in 0..60 * 5 {
        if loading.advance(DT, &mut rng) == LoadingEvent::Completed {
            completed += 1;
        }
        if loading.stage() == LoadingStage::Fading {
            saw_fade = true;
            assert!(loading.opacity() <= 1.0 && loading.opacity() >= 0.0);
        }
    }
    assert!(saw_fade);
    assert_eq!(completed, 1);
    assert_eq!(loading.stage(), LoadingStage::Done);
    assert_eq!(loading.opacity(), 0.0);
}

#[test]
fn finish_is_ignored_once_past_loading() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut loading = LoadingProgress::new();
    loading.finish();
    for _ in 0..600 {
        loading.advance(DT, &mut rng);
    }
    let stage = loading.stage();
    loading.finish();
    assert_eq!(loading.stage(), stage);
}

#[test]
fn captions_cycle_through_words() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut loading = LoadingProgress::new();
    assert_eq!(loading.word_index(), 0);
    loading.advance(LOADER_WORD_PERIOD_SEC + 0.01, &mut rng);
    assert_eq!(loading.word_index(), 1);
    let period = LOADER_WORD_PERIOD_SEC * LOADER_WORDS.len() as f32;
    loading.advance(period, &mut rng);
    assert_eq!(loading.word_index(), 1);

    assert_eq!(word_offset_percent(1, 1), 0.0);
    assert_eq!(word_offset_percent(0, 1), -100.0);
    assert_eq!(word_offset_percent(3, 1), 200.0);
}

#[test]
fn done_screen_reports_idle_even_after_a_late_finish() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut loading = LoadingProgress::new();
    loading.finish();
    let mut completed = 0;
    for _ in 0..600 {
        if loading.advance(DT, &mut rng) == LoadingEvent::Completed {
            completed += 1;
        }
    }
    assert_eq!(completed, 1);
    assert_eq!(loading.stage(), LoadingStage::Done);

    loading.finish();
    assert_eq!(loading.advance(DT, &mut rng), LoadingEvent::Idle);
    assert_eq!(loading.stage(), LoadingStage::Done);
    assert_eq!(loading.opacity(), 0.0);
}
