//! Test helpers for common session test setup.

use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::World;

use crate::alerts::{AlertChannel, AlertError, AlertOutput};
use crate::clock::SessionClock;
use crate::generator::RequestGenerator;
use crate::params::{AlertConfig, RequestGeneratorConfig, SessionTimingConfig};
use crate::signals::SessionSignals;
use crate::state::SessionState;
use crate::telemetry::SessionTelemetry;

/// One observed alert-channel call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertCall {
    Start { looped: bool, volume: f32 },
    Stop,
}

/// Channel that records every call for assertions.
#[derive(Debug, Default)]
pub struct RecordingAlert {
    calls: Arc<Mutex<Vec<AlertCall>>>,
}

impl RecordingAlert {
    /// Returns the channel and a handle to its call log.
    pub fn new() -> (Self, Arc<Mutex<Vec<AlertCall>>>) {
        let calls: Arc<Mutex<Vec<AlertCall>>> = Arc::default();
        (
            Self {
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl AlertChannel for RecordingAlert {
    fn start(&mut self, looped: bool, volume: f32) -> Result<(), AlertError> {
        self.calls
            .lock()
            .expect("alert call log poisoned")
            .push(AlertCall::Start { looped, volume });
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AlertError> {
        self.calls
            .lock()
            .expect("alert call log poisoned")
            .push(AlertCall::Stop);
        Ok(())
    }
}

/// Channel whose every call fails; transitions must not notice.
#[derive(Debug, Default)]
pub struct FailingAlert;

impl AlertChannel for FailingAlert {
    fn start(&mut self, _looped: bool, _volume: f32) -> Result<(), AlertError> {
        Err(AlertError::Unavailable)
    }

    fn stop(&mut self) -> Result<(), AlertError> {
        Err(AlertError::Unavailable)
    }
}

/// Create a world with every session resource at its default, seeded for
/// reproducibility.
pub fn create_test_world() -> World {
    let mut world = World::new();
    world.insert_resource(SessionClock::default());
    world.insert_resource(SessionState::default());
    world.insert_resource(SessionSignals::default());
    world.insert_resource(SessionTelemetry::default());
    world.insert_resource(SessionTimingConfig::default());
    world.insert_resource(AlertConfig::default());
    world.insert_resource(RequestGenerator::new(RequestGeneratorConfig {
        seed: 42,
        ..Default::default()
    }));
    world.insert_resource(AlertOutput::default());
    world
}
