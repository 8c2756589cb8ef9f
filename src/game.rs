//! Game controller
//!
//! Owns the simulation and everything that reacts to it: sounds, the delayed
//! voice line, the menu overlay text and the projected frame.

use crate::audio::{AudioBackend, AudioManager, SoundClip};
use crate::settings::{ConfigError, Settings};
use crate::sim::{
    Frame, GameEvent, GamePhase, GameState, Intent, Viewport, apply_intent, build_frame, tick,
};
use crate::tuning::Tuning;

/// Longest step the simulation takes in one update
pub const MAX_FRAME_DT: f32 = 0.1;

pub const TITLE_MENU: &str = "G   A   L   A   X   Y";
pub const TITLE_GAME_OVER: &str = "G  A  M  E   O  V  E  R";
pub const BUTTON_START: &str = "START";
pub const BUTTON_RESTART: &str = "RESTART";

/// Menu text shown over the tunnel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub title: &'static str,
    pub button: &'static str,
    pub visible: bool,
}

impl Overlay {
    pub fn for_phase(phase: GamePhase) -> Self {
        match phase {
            GamePhase::NotStarted => Self {
                title: TITLE_MENU,
                button: BUTTON_START,
                visible: true,
            },
            GamePhase::Running => Self {
                title: TITLE_MENU,
                button: BUTTON_START,
                visible: false,
            },
            GamePhase::GameOver => Self {
                title: TITLE_GAME_OVER,
                button: BUTTON_RESTART,
                visible: true,
            },
        }
    }
}

/// One-shot sound waiting on a timer
///
/// Only plays if the run that scheduled it is still over when it fires.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingCue {
    clip: SoundClip,
    remaining: f32,
    run: u32,
}

pub struct Game<B: AudioBackend> {
    state: GameState,
    settings: Settings,
    audio: AudioManager<B>,
    cues: Vec<PendingCue>,
    frame: Frame,
}

impl<B: AudioBackend> Game<B> {
    pub fn new(seed: u64, tuning: Tuning, settings: Settings, backend: B) -> Result<Self, ConfigError> {
        let state = GameState::new(seed, tuning)?;
        let audio = AudioManager::new(backend, &settings);
        let frame = build_frame(&state, &Viewport::default(), settings.projection);

        log::info!("Game ready (seed {})", seed);

        Ok(Self {
            state,
            settings,
            audio,
            cues: Vec::new(),
            frame,
        })
    }

    /// Feed one player intent
    pub fn handle_intent(&mut self, intent: Intent) {
        apply_intent(&mut self.state, intent);
        self.handle_events();
    }

    /// Run one tick and rebuild the frame
    pub fn update(&mut self, dt: f32, viewport: &Viewport) -> &Frame {
        let dt = dt.max(0.0);

        tick(&mut self.state, dt.min(MAX_FRAME_DT), viewport);
        self.handle_events();
        self.fire_due_cues(dt);

        self.frame = build_frame(&self.state, viewport, self.settings.projection);
        &self.frame
    }

    fn handle_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::RunStarted { restart, .. } => {
                    let clip = if restart {
                        SoundClip::Restart
                    } else {
                        SoundClip::Begin
                    };
                    self.audio.play(clip);
                    self.audio.play(SoundClip::Music);
                }
                GameEvent::RowAdvanced { .. } => {}
                GameEvent::GameOver { run, row } => {
                    self.audio.stop(SoundClip::Music);
                    self.audio.play(SoundClip::GameOverImpact);
                    self.cues.push(PendingCue {
                        clip: SoundClip::GameOverVoice,
                        remaining: self.state.tuning.game_over_voice_delay,
                        run,
                    });
                    log::info!("Final score {} after run {}", row, run);
                }
            }
        }
    }

    fn fire_due_cues(&mut self, dt: f32) {
        if self.cues.is_empty() {
            return;
        }

        for cue in &mut self.cues {
            cue.remaining -= dt;
        }

        let phase = self.state.phase;
        let run = self.state.runs;
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.cues.drain(..).partition(|cue| cue.remaining <= 0.0);
        self.cues = waiting;

        for cue in due {
            if phase == GamePhase::GameOver && cue.run == run {
                self.audio.play(cue.clip);
            } else {
                log::debug!("Dropped stale cue {:?}", cue.clip);
            }
        }
    }

    /// Swap settings at runtime (volumes, projection mode)
    pub fn apply_settings(&mut self, settings: Settings) {
        self.audio.apply_settings(&settings);
        self.settings = settings;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score_text(&self) -> &str {
        &self.state.score_text
    }

    pub fn overlay(&self) -> Overlay {
        Overlay::for_phase(self.state.phase)
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn audio(&self) -> &AudioManager<B> {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager<B> {
        &mut self.audio
    }
}
