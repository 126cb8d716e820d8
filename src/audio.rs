//! Procedural audio synthesis and the playback boundary
//!
//! Every sound is a PCM buffer rendered in memory at startup - no external
//! files. The simulation emits [`SoundEffect`] triggers; playback itself
//! belongs to an external [`AudioSink`], and a missing sink is a silent
//! no-op so an audio fault can never take the game loop down.

use serde::{Deserialize, Serialize};

/// Mono sample rate for all synthesized tones
pub const SAMPLE_RATE: u32 = 44_100;

/// Linear fade-in/out applied to every tone to avoid clicks (seconds)
const FADE_SECS: f32 = 0.008;

/// Second-harmonic sine blended over the base wave for timbral richness
const HARMONIC_MIX: f32 = 0.18;

/// Waveform kinds the synthesizer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    /// Triangle via arcsine-of-sine
    Triangle,
}

/// Sound effect identities emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball bounced off the paddle
    PaddleHit,
    /// Brick destroyed
    BrickBreak,
    /// Ball bounced off a side or top wall
    WallHit,
    /// Ball crossed the bottom boundary
    BallLost,
    /// Level cleared
    LevelClear,
    /// Ball launched off the paddle
    Launch,
}

/// Synthesize a tone as signed 16-bit mono PCM at [`SAMPLE_RATE`]
///
/// Pure function: same arguments, same samples. The fade envelope shortens
/// to half the buffer for tones too short to fit the full 8 ms ramps, and
/// the combined signal is clamped before scaling so hot volumes cannot wrap.
pub fn make_tone(freq: f32, duration: f32, volume: f32, wave: Waveform) -> Vec<i16> {
    let n_samples = (duration * SAMPLE_RATE as f32) as usize;
    let fade = ((FADE_SECS * SAMPLE_RATE as f32) as usize)
        .min(n_samples / 2)
        .max(1);
    let two_pi_f = std::f32::consts::TAU * freq;

    let mut samples = Vec::with_capacity(n_samples);
    for i in 0..n_samples {
        let t = i as f32 / SAMPLE_RATE as f32;
        let phase = two_pi_f * t;
        let base = match wave {
            Waveform::Sine => phase.sin(),
            Waveform::Square => {
                if phase.sin() >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => (2.0 / std::f32::consts::PI) * phase.sin().asin(),
        };
        let s = base * (1.0 - HARMONIC_MIX) + HARMONIC_MIX * (2.0 * phase).sin();

        let env = if i < fade {
            i as f32 / fade as f32
        } else if i > n_samples - fade {
            (n_samples - i) as f32 / fade as f32
        } else {
            1.0
        };

        let value = (s * env * volume).clamp(-1.0, 1.0) * i16::MAX as f32;
        samples.push(value as i16);
    }
    samples
}

/// The six feedback sounds, rendered once at startup
pub struct SoundBank {
    paddle: Vec<i16>,
    brick: Vec<i16>,
    wall: Vec<i16>,
    lost: Vec<i16>,
    win: Vec<i16>,
    launch: Vec<i16>,
}

impl SoundBank {
    /// Render every sound identity
    pub fn generate() -> Self {
        Self {
            paddle: make_tone(880.0, 0.05, 0.35, Waveform::Triangle),
            brick: make_tone(660.0, 0.06, 0.32, Waveform::Sine),
            wall: make_tone(520.0, 0.04, 0.28, Waveform::Square),
            lost: make_tone(180.0, 0.35, 0.30, Waveform::Sine),
            win: make_tone(1040.0, 0.25, 0.35, Waveform::Triangle),
            launch: make_tone(740.0, 0.05, 0.30, Waveform::Sine),
        }
    }

    /// PCM buffer for a sound identity
    pub fn pcm(&self, effect: SoundEffect) -> &[i16] {
        match effect {
            SoundEffect::PaddleHit => &self.paddle,
            SoundEffect::BrickBreak => &self.brick,
            SoundEffect::WallHit => &self.wall,
            SoundEffect::BallLost => &self.lost,
            SoundEffect::LevelClear => &self.win,
            SoundEffect::Launch => &self.launch,
        }
    }
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::generate()
    }
}

/// Playback boundary implemented by the platform shell
pub trait AudioSink {
    /// Queue a mono PCM buffer for playback at the given gain (0.0 - 1.0)
    fn play(&mut self, samples: &[i16], gain: f32);
}

/// Routes sound triggers to the attached sink with volume/mute control
pub struct AudioManager {
    bank: SoundBank,
    sink: Option<Box<dyn AudioSink>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(sink: Option<Box<dyn AudioSink>>) -> Self {
        if sink.is_none() {
            log::warn!("no audio sink attached - sound triggers will be dropped");
        }
        Self {
            bank: SoundBank::generate(),
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect; without a sink this is a silent no-op
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(sink) = &mut self.sink else { return };
        sink.play(self.bank.pcm(effect), vol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_matches_duration() {
        let buffer = make_tone(440.0, 0.1, 0.5, Waveform::Sine);
        assert_eq!(buffer.len(), (0.1 * SAMPLE_RATE as f32) as usize);
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let a = make_tone(660.0, 0.06, 0.32, Waveform::Sine);
        let b = make_tone(660.0, 0.06, 0.32, Waveform::Sine);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fade_envelope_silences_edges() {
        let buffer = make_tone(440.0, 0.1, 0.5, Waveform::Sine);
        assert_eq!(buffer[0], 0);
        // The tail of the fade-out is far below the sustained body
        let peak = buffer.iter().map(|s| s.unsigned_abs()).max().unwrap();
        let last = buffer.last().unwrap().unsigned_abs();
        assert!(last < peak / 10);
    }

    #[test]
    fn test_short_tone_shortens_fade() {
        // 3 ms tone cannot fit two 8 ms ramps; it must still synthesize
        let buffer = make_tone(880.0, 0.003, 0.5, Waveform::Triangle);
        assert_eq!(buffer.len(), (0.003 * SAMPLE_RATE as f32) as usize);
        assert_eq!(buffer[0], 0);
    }

    #[test]
    fn test_hot_volume_clamps_instead_of_wrapping() {
        let buffer = make_tone(440.0, 0.05, 10.0, Waveform::Square);
        let peak = buffer.iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert_eq!(peak, i16::MAX as u16);
        // Clamped, never wrapped: the quietest sample is bounded too
        assert!(buffer.iter().all(|&s| s > i16::MIN));
    }

    #[test]
    fn test_bank_has_all_effects() {
        let bank = SoundBank::generate();
        for effect in [
            SoundEffect::PaddleHit,
            SoundEffect::BrickBreak,
            SoundEffect::WallHit,
            SoundEffect::BallLost,
            SoundEffect::LevelClear,
            SoundEffect::Launch,
        ] {
            assert!(!bank.pcm(effect).is_empty());
        }
    }

    #[test]
    fn test_manager_without_sink_is_silent() {
        let mut manager = AudioManager::new(None);
        // Must not panic or error - the loop never dies over audio
        manager.play(SoundEffect::BrickBreak);
    }

    #[test]
    fn test_manager_routes_to_sink_with_gain() {
        struct Recorder(std::rc::Rc<std::cell::RefCell<Vec<(usize, f32)>>>);
        impl AudioSink for Recorder {
            fn play(&mut self, samples: &[i16], gain: f32) {
                self.0.borrow_mut().push((samples.len(), gain));
            }
        }

        let played = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut manager = AudioManager::new(Some(Box::new(Recorder(played.clone()))));
        manager.set_master_volume(0.5);
        manager.set_sfx_volume(0.5);
        manager.play(SoundEffect::WallHit);

        let calls = played.borrow();
        assert_eq!(calls.len(), 1);
        assert!((calls[0].1 - 0.25).abs() < 1e-6);

        drop(calls);
        manager.set_muted(true);
        manager.play(SoundEffect::WallHit);
        assert_eq!(played.borrow().len(), 1);
    }
}
