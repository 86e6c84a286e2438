//! Staggered text reveal: split text into units and animate each one in on
//! a shared schedule once the block scrolls into view.
//!
//! [`RevealTimeline`] is a pure schedule sampled at a time offset;
//! [`Reveal`] is the visibility state machine owning the current run.

use crate::config::{RevealConfig, SplitMode};
use crate::constants::*;
use crate::lifecycle::Phase;
use crate::style::{lerp, Easing, UnitStyle};

/// One independently animated piece of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealUnit {
    pub text: String,
    /// A non-breaking space follows this unit outside its animated box.
    pub joined_after: bool,
}

/// Split `text` into display units.
///
/// Letters keep every char, rendering spaces as U+00A0 so they keep their
/// width. Words split on ' ' and are joined by U+00A0 outside the units.
pub fn split_units(text: &str, mode: SplitMode) -> Vec<RevealUnit> {
    match mode {
        SplitMode::Letter => text
            .chars()
            .map(|c| RevealUnit {
                text: if c == ' ' { NBSP.to_string() } else { c.to_string() },
                joined_after: false,
            })
            .collect(),
        SplitMode::Word => {
            let words: Vec<&str> = text.split(' ').collect();
            let last = words.len().saturating_sub(1);
            words
                .into_iter()
                .enumerate()
                .map(|(i, w)| RevealUnit {
                    text: w.to_string(),
                    joined_after: i != last,
                })
                .collect()
        }
    }
}

/// Sampled state of one unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitFrame {
    pub style: UnitStyle,
    pub glow: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Channel {
    Style { from: UnitStyle, to: UnitStyle },
    Glow { from: f32, to: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub unit: usize,
    pub start: f64,
    pub duration: f64,
    pub easing: Easing,
    pub channel: Channel,
}

impl Tween {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn progress(&self, t: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.easing
            .apply(((t - self.start) / self.duration).clamp(0.0, 1.0) as f32)
    }
}

/// Staggered group of identical tweens, one per unit.
struct Group {
    start: f64,
    stagger: f64,
    duration: f64,
    easing: Easing,
    channel: Channel,
}

impl Group {
    fn end(&self, units: usize) -> f64 {
        self.start + units.saturating_sub(1) as f64 * self.stagger + self.duration
    }

    fn push_into(&self, units: usize, tweens: &mut Vec<Tween>) {
        tweens.extend((0..units).map(|k| Tween {
            unit: k,
            start: self.start + k as f64 * self.stagger,
            duration: self.duration,
            easing: self.easing,
            channel: self.channel,
        }));
    }
}

/// Complete schedule for one reveal run; times are seconds from play.
#[derive(Clone, Debug)]
pub struct RevealTimeline {
    tweens: Vec<Tween>,
    unit_count: usize,
    hidden: UnitStyle,
    primary_starts: Vec<f64>,
    total: f64,
}

impl RevealTimeline {
    pub fn build(unit_count: usize, config: &RevealConfig) -> Self {
        let delay = config.delay_sec();
        let s = config.stagger_interval;
        let hidden = if config.typing_mode {
            UnitStyle::transparent()
        } else {
            UnitStyle::risen(REVEAL_RISE_PX)
        };

        let primary = if config.typing_mode {
            Group {
                start: delay,
                stagger: s,
                duration: TYPING_UNIT_DURATION_SEC,
                easing: Easing::Linear,
                channel: Channel::Style {
                    from: hidden,
                    to: UnitStyle::VISIBLE,
                },
            }
        } else {
            Group {
                start: delay,
                stagger: s,
                duration: config.duration,
                easing: Easing::Power2Out,
                channel: Channel::Style {
                    from: hidden,
                    to: UnitStyle::VISIBLE,
                },
            }
        };

        let mut tweens = Vec::new();
        primary.push_into(unit_count, &mut tweens);
        let mut total = delay.max(primary.end(unit_count));
        if unit_count == 0 {
            total = delay;
        }

        if config.glow && unit_count > 0 {
            let (lag, stagger, in_dur, out_dur) = if config.typing_mode {
                (
                    TYPING_GLOW_IN_LAG_SEC,
                    s,
                    TYPING_GLOW_IN_DURATION_SEC,
                    TYPING_GLOW_OUT_DURATION_SEC,
                )
            } else {
                (
                    GLOW_IN_LAG_SEC,
                    s / 2.0,
                    GLOW_IN_DURATION_SEC,
                    GLOW_OUT_DURATION_SEC,
                )
            };
            let glow_in = Group {
                start: delay + lag,
                stagger,
                duration: in_dur,
                easing: Easing::Power1Out,
                channel: Channel::Glow { from: 0.0, to: 1.0 },
            };
            let glow_out = Group {
                start: glow_in.end(unit_count) + GLOW_OUT_GAP_SEC,
                stagger,
                duration: out_dur,
                easing: Easing::Power2Out,
                channel: Channel::Glow { from: 1.0, to: 0.0 },
            };
            glow_in.push_into(unit_count, &mut tweens);
            glow_out.push_into(unit_count, &mut tweens);
            total = total.max(glow_out.end(unit_count));
        }

        let primary_starts = (0..unit_count)
            .map(|k| delay + k as f64 * s)
            .collect();

        Self {
            tweens,
            unit_count,
            hidden,
            primary_starts,
            total,
        }
    }

    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    /// Start of each unit's main transition, in unit order.
    pub fn start_times(&self) -> &[f64] {
        &self.primary_starts
    }

    pub fn total_duration(&self) -> f64 {
        self.total
    }

    pub fn hidden_frame(&self) -> UnitFrame {
        UnitFrame {
            style: self.hidden,
            glow: 0.0,
        }
    }

    pub fn is_complete(&self, t: f64) -> bool {
        t >= self.total
    }

    /// State of every unit `t` seconds after play.
    ///
    /// Units not yet started hold the hidden state; tweens apply in schedule
    /// order so a later glow pass overrides an earlier finished one.
    pub fn sample(&self, t: f64, out: &mut Vec<UnitFrame>) {
        out.clear();
        out.resize(self.unit_count, self.hidden_frame());
        for tween in &self.tweens {
            if t < tween.start {
                continue;
            }
            let p = tween.progress(t);
            let frame = &mut out[tween.unit];
            match tween.channel {
                Channel::Style { from, to } => frame.style = UnitStyle::lerp(&from, &to, p),
                Channel::Glow { from, to } => frame.glow = lerp(from, to, p),
            }
        }
    }
}

/// What the front-end should do after a visibility change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityAction {
    None,
    /// Start (or restart) the clock and drive frames.
    Play,
    /// As `Play`, then stop observing visibility for good.
    PlayAndDisconnect,
    /// Cancel the run and restore the hidden state.
    Hide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing running; frames can stop.
    Idle,
    Running,
    /// The run finished on this tick; notify once.
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reconfigured {
    /// Units changed; display handles must be rebuilt.
    pub units_changed: bool,
    /// A run was superseded and restarted from the hidden state.
    pub restarted: bool,
}

#[derive(Clone, Copy, Debug)]
struct Run {
    generation: u64,
    completed: bool,
}

pub struct Reveal {
    config: RevealConfig,
    units: Vec<RevealUnit>,
    timeline: RevealTimeline,
    phase: Phase,
    run: Option<Run>,
    generation: u64,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        let units = split_units(&config.text, config.split_granularity);
        let timeline = RevealTimeline::build(units.len(), &config);
        Self {
            config,
            units,
            timeline,
            phase: Phase::Idle,
            run: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn units(&self) -> &[RevealUnit] {
        &self.units
    }

    pub fn timeline(&self) -> &RevealTimeline {
        &self.timeline
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Identifier of the current run; bumps whenever a run is (re)started.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn start_run(&mut self) {
        self.generation += 1;
        self.run = Some(Run {
            generation: self.generation,
            completed: false,
        });
        self.phase = Phase::Active;
        log::debug!(
            "[reveal] run {} over {} units ({:.3}s)",
            self.generation,
            self.units.len(),
            self.timeline.total_duration()
        );
    }

    pub fn on_visibility(&mut self, visible: bool) -> VisibilityAction {
        match (self.phase, visible) {
            (Phase::Idle, true) => {
                self.start_run();
                if self.config.once {
                    VisibilityAction::PlayAndDisconnect
                } else {
                    VisibilityAction::Play
                }
            }
            (Phase::Active, false) if !self.config.once => {
                self.run = None;
                self.phase = Phase::Idle;
                VisibilityAction::Hide
            }
            _ => VisibilityAction::None,
        }
    }

    /// Sample the current run `elapsed` seconds after it was (re)started.
    pub fn tick(&mut self, elapsed: f64, out: &mut Vec<UnitFrame>) -> TickOutcome {
        if self.phase != Phase::Active {
            return TickOutcome::Idle;
        }
        let Some(run) = self.run.as_mut() else {
            return TickOutcome::Idle;
        };
        if run.completed {
            return TickOutcome::Idle;
        }
        self.timeline.sample(elapsed, out);
        if !self.timeline.is_complete(elapsed) {
            return TickOutcome::Running;
        }
        run.completed = true;
        log::debug!("[reveal] run {} complete", run.generation);
        if self.config.once {
            self.phase = Phase::Settled;
        }
        TickOutcome::Completed
    }

    /// Adopt new parameters. A visible reveal restarts from the hidden state
    /// so no two schedules ever drive the same units.
    pub fn reconfigure(&mut self, config: RevealConfig) -> Reconfigured {
        let units_changed = config.text != self.config.text
            || config.split_granularity != self.config.split_granularity;
        if units_changed {
            self.units = split_units(&config.text, config.split_granularity);
        }
        self.timeline = RevealTimeline::build(self.units.len(), &config);
        self.config = config;

        let restarted = matches!(self.phase, Phase::Active | Phase::Settled);
        if restarted {
            self.start_run();
        }
        Reconfigured {
            units_changed,
            restarted,
        }
    }

    pub fn unmount(&mut self) {
        self.run = None;
        self.phase = Phase::Unmounted;
    }
}
