//! Session facade: owns the world and schedule behind the dashboard API.

use bevy_ecs::prelude::{Schedule, World};
use serde::Serialize;

use crate::alerts::{AlertChannel, AlertOutput, NullAlert};
use crate::clock::{EventKind, SessionClock};
use crate::generator::RequestGenerator;
use crate::params::{AlertConfig, RequestGeneratorConfig, SessionTimingConfig};
use crate::runner::{advance, dispatch_intent, session_schedule};
use crate::signals::{SessionSignal, SessionSignals};
use crate::state::{DriverAvailability, SearchState, SessionPhase, SessionState};
use crate::telemetry::SessionTelemetry;

/// Snapshot of the pending request handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSnapshot {
    pub id: u64,
    pub fare_estimate: f64,
    pub distance_km: f64,
    pub pickup: String,
    pub dropoff: String,
    /// Remaining countdown in `[0, 1]`; 1 = just offered, 0 = expired.
    pub countdown_fraction: f64,
}

/// Builder for [RideRequestSession].
#[derive(Default)]
pub struct SessionBuilder {
    timing: SessionTimingConfig,
    generator: RequestGeneratorConfig,
    alert: AlertConfig,
    channel: Option<Box<dyn AlertChannel>>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the timer durations.
    pub fn with_timing(mut self, timing: SessionTimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Override request generation behavior.
    pub fn with_generator(mut self, config: RequestGeneratorConfig) -> Self {
        self.generator = config;
        self
    }

    /// Override the RNG seed used for request generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.generator.seed = seed;
        self
    }

    /// Override alert playback settings.
    pub fn with_alert_config(mut self, config: AlertConfig) -> Self {
        self.alert = config;
        self
    }

    /// Inject the audio/haptic backend. Defaults to [NullAlert].
    pub fn with_alert_channel(mut self, channel: Box<dyn AlertChannel>) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn build(self) -> RideRequestSession {
        let mut world = World::new();
        world.insert_resource(SessionClock::default());
        world.insert_resource(SessionState::default());
        world.insert_resource(SessionSignals::default());
        world.insert_resource(SessionTelemetry::default());
        world.insert_resource(self.timing);
        world.insert_resource(self.alert);
        world.insert_resource(RequestGenerator::new(self.generator));
        world.insert_resource(AlertOutput::new(
            self.channel.unwrap_or_else(|| Box::new(NullAlert)),
        ));
        RideRequestSession {
            world,
            schedule: session_schedule(),
        }
    }
}

/// Long-lived interaction state for one driver dashboard.
///
/// Operations are synchronous and serialized; timers fire only inside
/// [RideRequestSession::advance]. Dropping the session cancels every
/// pending timer and stops the alert, on every exit path.
pub struct RideRequestSession {
    world: World,
    schedule: Schedule,
}

impl RideRequestSession {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    fn dispatch(&mut self, kind: EventKind) {
        dispatch_intent(&mut self.world, &mut self.schedule, kind);
    }

    pub fn go_online(&mut self) {
        self.dispatch(EventKind::GoOnline);
    }

    pub fn go_offline(&mut self) {
        self.dispatch(EventKind::GoOffline);
    }

    /// Manually trigger the radar. No-op unless online and idle.
    pub fn trigger_search(&mut self) {
        self.dispatch(EventKind::SearchRequested);
    }

    pub fn accept(&mut self) {
        self.dispatch(EventKind::RequestAccepted);
    }

    pub fn decline(&mut self) {
        self.dispatch(EventKind::RequestDeclined);
    }

    /// Dismiss the pending request without acknowledging it; identical to
    /// [RideRequestSession::decline].
    pub fn ignore(&mut self) {
        self.dispatch(EventKind::RequestDeclined);
    }

    /// Called by the router when the pickup/ride-summary flow completes.
    pub fn ride_ended(&mut self) {
        self.dispatch(EventKind::RideEnded);
    }

    /// Advance virtual time by `delta_ms`, firing any timers that come due.
    /// Returns the number of timer events processed.
    pub fn advance(&mut self, delta_ms: u64) -> usize {
        advance(&mut self.world, &mut self.schedule, delta_ms)
    }

    pub fn now(&self) -> u64 {
        self.world.resource::<SessionClock>().now()
    }

    pub fn phase(&self) -> SessionPhase {
        self.world.resource::<SessionState>().phase
    }

    pub fn availability(&self) -> DriverAvailability {
        self.world.resource::<SessionState>().availability()
    }

    pub fn search_state(&self) -> SearchState {
        self.world.resource::<SessionState>().search_state()
    }

    pub fn is_online(&self) -> bool {
        self.world.resource::<SessionState>().is_online()
    }

    pub fn is_searching(&self) -> bool {
        self.world.resource::<SessionState>().is_searching()
    }

    pub fn has_pending_request(&self) -> bool {
        self.world.resource::<SessionState>().has_pending_request()
    }

    pub fn has_active_ride(&self) -> bool {
        self.world.resource::<SessionState>().has_active_ride()
    }

    /// Snapshot of the pending request, with the countdown fraction
    /// evaluated at the current session time.
    pub fn current_request(&self) -> Option<RequestSnapshot> {
        let now = self.world.resource::<SessionClock>().now();
        let state = self.world.resource::<SessionState>();
        state.request.as_ref().map(|request| RequestSnapshot {
            id: request.id,
            fare_estimate: request.fare_estimate,
            distance_km: request.distance_km,
            pickup: request.pickup.clone(),
            dropoff: request.dropoff.clone(),
            countdown_fraction: request.countdown_fraction(now),
        })
    }

    /// Number of live timers on the session clock.
    pub fn pending_timers(&self) -> usize {
        self.world.resource::<SessionClock>().pending_timers()
    }

    /// Whether the session currently wants the alert playing.
    pub fn alert_active(&self) -> bool {
        self.world.resource::<AlertOutput>().is_active()
    }

    /// Remove and return every queued signal, oldest first.
    pub fn drain_signals(&mut self) -> Vec<SessionSignal> {
        self.world.resource_mut::<SessionSignals>().drain()
    }

    pub fn telemetry(&self) -> SessionTelemetry {
        *self.world.resource::<SessionTelemetry>()
    }

    /// Direct world access for composition and tests.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Default for RideRequestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RideRequestSession {
    fn drop(&mut self) {
        // Teardown runs on every exit path: no timer or alert outlives the
        // session.
        self.world.resource_mut::<SessionClock>().cancel_all();
        self.world.resource_mut::<AlertOutput>().stop();
        tracing::debug!("ride request session torn down");
    }
}
