use bevy_ecs::prelude::{Res, ResMut};

use crate::alerts::AlertOutput;
use crate::clock::{CurrentEvent, EventKind, SessionClock, TimerKind};
use crate::generator::RequestGenerator;
use crate::params::{AlertConfig, SessionTimingConfig};
use crate::signals::SessionSignals;
use crate::state::{SessionPhase, SessionState};
use crate::telemetry::SessionTelemetry;

/// Resolves an elapsed search window into an incoming request: the request
/// is generated, the countdown armed, and the alert side-channel started.
pub fn request_offer_system(
    mut clock: ResMut<SessionClock>,
    event: Res<CurrentEvent>,
    timing: Option<Res<SessionTimingConfig>>,
    alert_config: Option<Res<AlertConfig>>,
    mut generator: ResMut<RequestGenerator>,
    mut alert: ResMut<AlertOutput>,
    mut state: ResMut<SessionState>,
    mut signals: ResMut<SessionSignals>,
    mut telemetry: ResMut<SessionTelemetry>,
) {
    if event.0.kind != EventKind::SearchWindowElapsed {
        return;
    }
    // Stale search timers (session no longer searching) are dropped here.
    if state.phase != SessionPhase::OnlineSearching {
        return;
    }

    let timing = timing.as_deref().copied().unwrap_or_default();
    let request = generator.next_request(clock.now(), timing.countdown_ms);
    clock.arm(TimerKind::Countdown, timing.countdown_ms);
    state.request = Some(request);
    state.transition(SessionPhase::RequestPending, &mut signals);

    let alert_config = alert_config.as_deref().copied().unwrap_or_default();
    alert.start(&alert_config);
    telemetry.requests_offered = telemetry.requests_offered.saturating_add(1);
}
