//! Loading screen progress: a creeping fake progress while assets load, a
//! fast eased finish, a short hold and a fade.

use crate::constants::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingStage {
    Loading,
    Finishing,
    Holding,
    Fading,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingEvent {
    None,
    /// Fade finished; the screen can be removed.
    Completed,
    /// Already done; nothing left to animate.
    Idle,
}

#[derive(Clone, Debug)]
pub struct LoadingProgress {
    progress: f32,
    stage: LoadingStage,
    tick_accum: f32,
    stage_elapsed: f32,
    words_elapsed: f32,
}

impl Default for LoadingProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            stage: LoadingStage::Loading,
            tick_accum: 0.0,
            stage_elapsed: 0.0,
            words_elapsed: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn stage(&self) -> LoadingStage {
        self.stage
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", self.progress.round() as u32)
    }

    /// Screen opacity: opaque until the fade starts.
    pub fn opacity(&self) -> f32 {
        match self.stage {
            LoadingStage::Fading => 1.0 - (self.stage_elapsed / LOADING_FADE_SEC).clamp(0.0, 1.0),
            LoadingStage::Done => 0.0,
            _ => 1.0,
        }
    }

    /// Index of the caption currently shown by the word cycler.
    pub fn word_index(&self) -> usize {
        (self.words_elapsed / LOADER_WORD_PERIOD_SEC).floor() as usize % LOADER_WORDS.len()
    }

    /// Assets are ready; switch to the eased finish.
    pub fn finish(&mut self) {
        if self.stage == LoadingStage::Loading {
            self.stage = LoadingStage::Finishing;
            self.tick_accum = 0.0;
        }
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, dt_sec: f32, rng: &mut R) -> LoadingEvent {
        let dt = dt_sec.max(0.0);
        self.words_elapsed += dt;
        match self.stage {
            LoadingStage::Loading => {
                self.tick_accum += dt;
                while self.tick_accum >= LOADING_TICK_SEC {
                    self.tick_accum -= LOADING_TICK_SEC;
                    let step = rng.gen::<f32>() * LOADING_STEP_MAX;
                    self.progress = (self.progress + step).min(LOADING_CAP);
                }
            }
            LoadingStage::Finishing => {
                self.tick_accum += dt;
                while self.tick_accum >= FINISH_TICK_SEC {
                    self.tick_accum -= FINISH_TICK_SEC;
                    self.progress += (100.0 - self.progress) * FINISH_EASING;
                    if self.progress >= FINISH_SNAP {
                        self.progress = 100.0;
                        self.stage = LoadingStage::Holding;
                        self.stage_elapsed = 0.0;
                        break;
                    }
                }
            }
            LoadingStage::Holding => {
                self.stage_elapsed += dt;
                if self.stage_elapsed >= LOADING_HOLD_SEC {
                    self.stage = LoadingStage::Fading;
                    self.stage_elapsed = 0.0;
                }
            }
            LoadingStage::Fading => {
                self.stage_elapsed += dt;
                if self.stage_elapsed >= LOADING_FADE_SEC {
                    self.stage = LoadingStage::Done;
                    return LoadingEvent::Completed;
                }
            }
            LoadingStage::Done => return LoadingEvent::Idle,
        }
        LoadingEvent::None
    }
}

/// `translateY` percentage for caption `index` while `current` is shown.
pub fn word_offset_percent(index: usize, current: usize) -> f32 {
    (index as f32 - current as f32) * 100.0
}
