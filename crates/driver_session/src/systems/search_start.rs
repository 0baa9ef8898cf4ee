use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SessionClock, TimerKind};
use crate::params::SessionTimingConfig;
use crate::signals::SessionSignals;
use crate::state::{SessionPhase, SessionState};
use crate::telemetry::SessionTelemetry;

/// Starts a radar search, either from the elapsed idle delay or from a
/// manual trigger. A search in progress or a pending request must not be
/// interrupted, so anything but `OnlineIdle` is a no-op.
pub fn search_start_system(
    mut clock: ResMut<SessionClock>,
    event: Res<CurrentEvent>,
    timing: Option<Res<SessionTimingConfig>>,
    mut state: ResMut<SessionState>,
    mut signals: ResMut<SessionSignals>,
    mut telemetry: ResMut<SessionTelemetry>,
) {
    match event.0.kind {
        EventKind::SearchRequested | EventKind::IdleDelayElapsed => {}
        _ => return,
    }
    if state.phase != SessionPhase::OnlineIdle {
        return;
    }

    let timing = timing.as_deref().copied().unwrap_or_default();
    // A manual trigger preempts a still-armed idle delay.
    clock.disarm(TimerKind::IdleDelay);
    state.transition(SessionPhase::OnlineSearching, &mut signals);
    clock.arm(TimerKind::SearchWindow, timing.search_window_ms);
    telemetry.searches_started = telemetry.searches_started.saturating_add(1);
}
