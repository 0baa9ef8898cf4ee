use bevy_ecs::prelude::{Res, ResMut};

use crate::alerts::AlertOutput;
use crate::clock::{CurrentEvent, EventKind, SessionClock};
use crate::signals::SessionSignals;
use crate::state::{SessionPhase, SessionState};

/// Force-closes the session from any phase: every timer is cancelled, the
/// alert is stopped, and any pending request is dropped.
pub fn go_offline_system(
    mut clock: ResMut<SessionClock>,
    event: Res<CurrentEvent>,
    mut alert: ResMut<AlertOutput>,
    mut state: ResMut<SessionState>,
    mut signals: ResMut<SessionSignals>,
) {
    if event.0.kind != EventKind::GoOffline {
        return;
    }
    if state.phase == SessionPhase::Offline {
        return;
    }

    clock.cancel_all();
    alert.stop();
    state.request = None;
    state.transition(SessionPhase::Offline, &mut signals);
}
