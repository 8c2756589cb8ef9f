//! Audio system
//!
//! The game only names clips and decides when they start and stop. Decoding
//! and mixing belong to whatever [`AudioBackend`] the host plugs in.

use crate::settings::Settings;

/// Sound clips used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundClip {
    /// First run from the title screen
    Begin,
    /// Run started after a game over
    Restart,
    /// Background loop while running
    Music,
    /// Ship left the track
    GameOverImpact,
    /// Delayed voice line after the impact
    GameOverVoice,
}

impl SoundClip {
    pub const ALL: [SoundClip; 5] = [
        SoundClip::Begin,
        SoundClip::Restart,
        SoundClip::Music,
        SoundClip::GameOverImpact,
        SoundClip::GameOverVoice,
    ];

    /// Asset path relative to the game directory
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundClip::Begin => "audio/begin.wav",
            SoundClip::Restart => "audio/restart.wav",
            SoundClip::Music => "audio/music1.wav",
            SoundClip::GameOverImpact => "audio/gameover_impact.wav",
            SoundClip::GameOverVoice => "audio/gameover_voice.wav",
        }
    }

    /// Mix level before player settings are applied
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundClip::Music => 1.0,
            SoundClip::GameOverImpact => 0.6,
            SoundClip::Begin | SoundClip::Restart | SoundClip::GameOverVoice => 0.25,
        }
    }

    pub fn is_music(&self) -> bool {
        matches!(self, SoundClip::Music)
    }
}

/// Playback collaborator
pub trait AudioBackend {
    fn play(&mut self, clip: SoundClip);
    fn stop(&mut self, clip: SoundClip);
    fn set_volume(&mut self, clip: SoundClip, volume: f32);
}

/// Backend that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, clip: SoundClip) {
        log::debug!("play {}", clip.asset_path());
    }

    fn stop(&mut self, clip: SoundClip) {
        log::debug!("stop {}", clip.asset_path());
    }

    fn set_volume(&mut self, clip: SoundClip, volume: f32) {
        log::debug!("volume {} = {:.2}", clip.asset_path(), volume);
    }
}

/// A call seen by [`RecordingBackend`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCall {
    Play(SoundClip),
    Stop(SoundClip),
    Volume(SoundClip, f32),
}

/// Backend that remembers every call
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<AudioCall>,
}

impl RecordingBackend {
    /// Clips played, in order
    pub fn played(&self) -> Vec<SoundClip> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                AudioCall::Play(clip) => Some(*clip),
                _ => None,
            })
            .collect()
    }
}

impl AudioBackend for RecordingBackend {
    fn play(&mut self, clip: SoundClip) {
        self.calls.push(AudioCall::Play(clip));
    }

    fn stop(&mut self, clip: SoundClip) {
        self.calls.push(AudioCall::Stop(clip));
    }

    fn set_volume(&mut self, clip: SoundClip, volume: f32) {
        self.calls.push(AudioCall::Volume(clip, volume));
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        let mut manager = Self {
            backend,
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: false,
        };
        manager.apply_settings(settings);
        manager
    }

    /// Pick up volume changes and push per-clip levels to the backend
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.master_volume = settings.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = settings.music_volume.clamp(0.0, 1.0);
        self.muted = settings.muted;

        for clip in SoundClip::ALL {
            let volume = self.clip_volume(clip);
            self.backend.set_volume(clip, volume);
        }
    }

    /// Effective volume for a clip
    pub fn clip_volume(&self, clip: SoundClip) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if clip.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        clip.base_volume() * self.master_volume * channel
    }

    /// Play a clip unless it would be silent
    pub fn play(&mut self, clip: SoundClip) {
        if self.clip_volume(clip) <= 0.0 {
            return;
        }
        self.backend.play(clip);
    }

    pub fn stop(&mut self, clip: SoundClip) {
        self.backend.stop(clip);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels() {
        let audio = AudioManager::new(RecordingBackend::default(), &Settings::default());
        assert_eq!(audio.clip_volume(SoundClip::Music), 1.0);
        assert_eq!(audio.clip_volume(SoundClip::GameOverImpact), 0.6);
        assert_eq!(audio.clip_volume(SoundClip::Begin), 0.25);
        // One volume call per clip on creation
        assert_eq!(audio.backend().calls.len(), SoundClip::ALL.len());
    }

    #[test]
    fn test_channels_scale_separately() {
        let settings = Settings {
            master_volume: 0.5,
            music_volume: 0.5,
            sfx_volume: 1.0,
            ..Default::default()
        };
        let audio = AudioManager::new(RecordingBackend::default(), &settings);
        assert!((audio.clip_volume(SoundClip::Music) - 0.25).abs() < 1e-6);
        assert!((audio.clip_volume(SoundClip::GameOverImpact) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_muted_skips_playback() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let mut audio = AudioManager::new(RecordingBackend::default(), &settings);
        audio.play(SoundClip::Begin);
        audio.stop(SoundClip::Music);
        assert!(audio.backend().played().is_empty());
        assert_eq!(
            audio.backend().calls.last(),
            Some(&AudioCall::Stop(SoundClip::Music))
        );
    }
}
