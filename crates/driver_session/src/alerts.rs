//! Alert side-channel: the tone/haptic pulse played while a request is
//! pending. External to state logic; failures never reach the state machine.

use bevy_ecs::prelude::Resource;
use thiserror::Error;

use crate::params::AlertConfig;

/// Failure starting or stopping the alert tone.
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("alert backend unavailable")]
    Unavailable,
    #[error("alert playback failed: {0}")]
    Playback(String),
}

/// Audio/haptic backend driven while a request is pending.
///
/// Implementations must tolerate repeated `stop` calls and report failures
/// as `Err` rather than panicking.
pub trait AlertChannel: Send + Sync {
    fn start(&mut self, looped: bool, volume: f32) -> Result<(), AlertError>;
    fn stop(&mut self) -> Result<(), AlertError>;
}

/// No-op channel used when no backend is wired in.
#[derive(Debug, Default)]
pub struct NullAlert;

impl AlertChannel for NullAlert {
    fn start(&mut self, _looped: bool, _volume: f32) -> Result<(), AlertError> {
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AlertError> {
        Ok(())
    }
}

/// Boundary wrapper around the injected channel.
///
/// Channel errors are logged and swallowed here; transitions never observe
/// them. The wrapper tracks logical active state itself so teardown and
/// tests can assert the alert is stopped even on a failing backend.
#[derive(Resource)]
pub struct AlertOutput {
    channel: Box<dyn AlertChannel>,
    active: bool,
}

impl AlertOutput {
    pub fn new(channel: Box<dyn AlertChannel>) -> Self {
        Self {
            channel,
            active: false,
        }
    }

    pub fn start(&mut self, config: &AlertConfig) {
        if let Err(err) = self.channel.start(config.looped, config.volume) {
            tracing::debug!(error = %err, "alert channel failed to start");
        }
        self.active = true;
    }

    /// Stop the alert. Safe to call when already stopped.
    pub fn stop(&mut self) {
        if let Err(err) = self.channel.stop() {
            tracing::debug!(error = %err, "alert channel failed to stop");
        }
        self.active = false;
    }

    /// Whether the session currently wants the alert playing.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for AlertOutput {
    fn default() -> Self {
        Self::new(Box::new(NullAlert))
    }
}
