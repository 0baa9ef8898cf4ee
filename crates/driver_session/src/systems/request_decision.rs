use bevy_ecs::prelude::{Res, ResMut};

use crate::alerts::AlertOutput;
use crate::clock::{CurrentEvent, EventKind, SessionClock, TimerKind};
use crate::params::SessionTimingConfig;
use crate::signals::{SessionSignal, SessionSignals};
use crate::state::{SessionPhase, SessionState};
use crate::telemetry::SessionTelemetry;

/// Applies the driver's decision on the pending request. Accepting starts
/// the active ride and emits the navigate-to-pickup signal; declining (or
/// ignoring) returns to idle and re-arms the idle delay. Duplicate UI
/// events land outside `RequestPending` and fall through as no-ops.
pub fn request_decision_system(
    mut clock: ResMut<SessionClock>,
    event: Res<CurrentEvent>,
    timing: Option<Res<SessionTimingConfig>>,
    mut alert: ResMut<AlertOutput>,
    mut state: ResMut<SessionState>,
    mut signals: ResMut<SessionSignals>,
    mut telemetry: ResMut<SessionTelemetry>,
) {
    let accepted = match event.0.kind {
        EventKind::RequestAccepted => true,
        EventKind::RequestDeclined => false,
        _ => return,
    };
    if state.phase != SessionPhase::RequestPending {
        return;
    }
    let Some(request) = state.request.take() else {
        return;
    };

    clock.disarm(TimerKind::Countdown);
    alert.stop();

    if accepted {
        state.transition(SessionPhase::RideActive, &mut signals);
        signals.push(SessionSignal::NavigateToPickup { request });
        telemetry.requests_accepted = telemetry.requests_accepted.saturating_add(1);
    } else {
        let timing = timing.as_deref().copied().unwrap_or_default();
        state.transition(SessionPhase::OnlineIdle, &mut signals);
        clock.arm(TimerKind::IdleDelay, timing.idle_delay_ms);
        telemetry.requests_declined = telemetry.requests_declined.saturating_add(1);
    }
}
