//! Session telemetry: lifecycle counters for one dashboard session.

use bevy_ecs::prelude::Resource;

/// Counts of request-lifecycle outcomes. Observational only; no transition
/// reads these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Resource)]
pub struct SessionTelemetry {
    pub searches_started: u64,
    pub requests_offered: u64,
    pub requests_accepted: u64,
    pub requests_declined: u64,
    pub requests_expired: u64,
    pub rides_completed: u64,
}
