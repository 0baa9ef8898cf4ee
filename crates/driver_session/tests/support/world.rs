#![allow(dead_code)]

use bevy_ecs::prelude::{Schedule, World};

use driver_session::alerts::{AlertChannel, AlertOutput, NullAlert};
use driver_session::clock::SessionClock;
use driver_session::generator::RequestGenerator;
use driver_session::params::{AlertConfig, RequestGeneratorConfig, SessionTimingConfig};
use driver_session::runner::session_schedule;
use driver_session::signals::SessionSignals;
use driver_session::state::SessionState;
use driver_session::telemetry::SessionTelemetry;

/// Builder configuration for reproducible test worlds.
#[derive(Clone, Debug)]
pub struct SessionWorldConfig {
    pub seed: u64,
    pub timing: SessionTimingConfig,
    pub alert: AlertConfig,
}

impl Default for SessionWorldConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            timing: SessionTimingConfig::default(),
            alert: AlertConfig::default(),
        }
    }
}

/// Populates a world with every session resource used in integration tests.
#[derive(Default)]
pub struct SessionWorldBuilder {
    config: SessionWorldConfig,
    channel: Option<Box<dyn AlertChannel>>,
}

impl SessionWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the RNG seed used by the request generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Override the timer durations.
    pub fn with_timing(mut self, timing: SessionTimingConfig) -> Self {
        self.config.timing = timing;
        self
    }

    /// Inject the alert backend under test.
    pub fn with_alert_channel(mut self, channel: Box<dyn AlertChannel>) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn build(self) -> (World, Schedule) {
        let mut world = World::new();
        world.insert_resource(SessionClock::default());
        world.insert_resource(SessionState::default());
        world.insert_resource(SessionSignals::default());
        world.insert_resource(SessionTelemetry::default());
        world.insert_resource(self.config.timing);
        world.insert_resource(self.config.alert);
        world.insert_resource(RequestGenerator::new(RequestGeneratorConfig {
            seed: self.config.seed,
            ..Default::default()
        }));
        world.insert_resource(AlertOutput::new(
            self.channel.unwrap_or_else(|| Box::new(NullAlert)),
        ));
        (world, session_schedule())
    }
}
