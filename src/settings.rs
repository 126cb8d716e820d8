//! Game settings and preferences
//!
//! In-memory presentation/audio preferences for the shell's collaborators.
//! Nothing here is persisted across runs, and the simulation never reads
//! these: toggling an effect only changes what the renderer or audio sink
//! does with the state it is handed.

use serde::{Deserialize, Serialize};

/// Presentation and audio preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Visual Effects ===
    /// Camera shake on paddle/brick impacts
    pub screen_shake: bool,
    /// Ball trail
    pub trails: bool,
    /// Particle bursts on brick destruction
    pub particles: bool,
    /// Additive glow compositing
    pub glow: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Accessibility ===
    /// Reduced motion (suppresses shake regardless of the shake toggle)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_shake: true,
            trails: true,
            particles: true,
            glow: true,
            show_fps: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_overrides_shake() {
        let mut settings = Settings::default();
        assert!(settings.effective_screen_shake());
        settings.reduced_motion = true;
        assert!(!settings.effective_screen_shake());
        settings.reduced_motion = false;
        settings.screen_shake = false;
        assert!(!settings.effective_screen_shake());
    }
}
