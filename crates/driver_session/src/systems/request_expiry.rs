use bevy_ecs::prelude::{Res, ResMut};

use crate::alerts::AlertOutput;
use crate::clock::{CurrentEvent, EventKind, SessionClock, TimerKind};
use crate::params::SessionTimingConfig;
use crate::signals::SessionSignals;
use crate::state::{SessionPhase, SessionState};
use crate::telemetry::SessionTelemetry;

/// Auto-expires a pending request when its countdown reaches zero. Same
/// outcome as a decline: back to idle with the idle delay re-armed.
pub fn request_expiry_system(
    mut clock: ResMut<SessionClock>,
    event: Res<CurrentEvent>,
    timing: Option<Res<SessionTimingConfig>>,
    mut alert: ResMut<AlertOutput>,
    mut state: ResMut<SessionState>,
    mut signals: ResMut<SessionSignals>,
    mut telemetry: ResMut<SessionTelemetry>,
) {
    if event.0.kind != EventKind::CountdownExpired {
        return;
    }
    if state.phase != SessionPhase::RequestPending {
        return;
    }

    let timing = timing.as_deref().copied().unwrap_or_default();
    state.request = None;
    alert.stop();
    state.transition(SessionPhase::OnlineIdle, &mut signals);
    clock.arm(TimerKind::IdleDelay, timing.idle_delay_ms);
    telemetry.requests_expired = telemetry.requests_expired.saturating_add(1);
}
