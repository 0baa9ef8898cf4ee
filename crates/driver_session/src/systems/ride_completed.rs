use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SessionClock, TimerKind};
use crate::params::SessionTimingConfig;
use crate::signals::SessionSignals;
use crate::state::{SessionPhase, SessionState};
use crate::telemetry::SessionTelemetry;

/// Ends the active ride. Completion resumes searching immediately; only
/// decline and expiry wait out the idle delay.
pub fn ride_completed_system(
    mut clock: ResMut<SessionClock>,
    event: Res<CurrentEvent>,
    timing: Option<Res<SessionTimingConfig>>,
    mut state: ResMut<SessionState>,
    mut signals: ResMut<SessionSignals>,
    mut telemetry: ResMut<SessionTelemetry>,
) {
    if event.0.kind != EventKind::RideEnded {
        return;
    }
    if state.phase != SessionPhase::RideActive {
        return;
    }

    let timing = timing.as_deref().copied().unwrap_or_default();
    state.transition(SessionPhase::OnlineSearching, &mut signals);
    clock.arm(TimerKind::SearchWindow, timing.search_window_ms);
    telemetry.rides_completed = telemetry.rides_completed.saturating_add(1);
    telemetry.searches_started = telemetry.searches_started.saturating_add(1);
}
