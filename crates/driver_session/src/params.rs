use bevy_ecs::prelude::Resource;

use crate::clock::ONE_MIN_MS;

/// Default wait after going online before auto-search begins.
const DEFAULT_IDLE_DELAY_MS: u64 = 3000;

/// Default radar search duration before a request is produced.
const DEFAULT_SEARCH_WINDOW_MS: u64 = 4500;

/// Default window for accepting a pending request before auto-expiry (2 minutes).
const DEFAULT_COUNTDOWN_MS: u64 = 2 * ONE_MIN_MS;

/// Timer durations driving the session state machine.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SessionTimingConfig {
    /// Wait after going online (or clearing a request) before auto-search starts.
    pub idle_delay_ms: u64,
    /// How long the radar searches before a request is offered.
    pub search_window_ms: u64,
    /// Window during which a pending request can be accepted or declined.
    pub countdown_ms: u64,
}

impl Default for SessionTimingConfig {
    fn default() -> Self {
        Self {
            idle_delay_ms: DEFAULT_IDLE_DELAY_MS,
            search_window_ms: DEFAULT_SEARCH_WINDOW_MS,
            countdown_ms: DEFAULT_COUNTDOWN_MS,
        }
    }
}

/// Request generation behavior.
#[derive(Debug, Clone, Copy, Resource)]
pub struct RequestGeneratorConfig {
    /// Seed for RNG (for reproducibility).
    pub seed: u64,
    /// Minimum trip distance in km. Must be <= `max_distance_km`.
    pub min_distance_km: f64,
    /// Maximum trip distance in km.
    pub max_distance_km: f64,
}

impl Default for RequestGeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            min_distance_km: 1.0,
            max_distance_km: 18.0,
        }
    }
}

/// Alert side-channel playback settings.
#[derive(Debug, Clone, Copy, Resource)]
pub struct AlertConfig {
    /// Loop the alert tone until stopped.
    pub looped: bool,
    /// Playback volume in `[0, 1]`.
    pub volume: f32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            looped: true,
            volume: 1.0,
        }
    }
}
