use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SessionClock, TimerKind};
use crate::params::SessionTimingConfig;
use crate::signals::SessionSignals;
use crate::state::{SessionPhase, SessionState};

pub fn go_online_system(
    mut clock: ResMut<SessionClock>,
    event: Res<CurrentEvent>,
    timing: Option<Res<SessionTimingConfig>>,
    mut state: ResMut<SessionState>,
    mut signals: ResMut<SessionSignals>,
) {
    if event.0.kind != EventKind::GoOnline {
        return;
    }
    // Already in an online phase; re-affirming is a no-op.
    if state.phase != SessionPhase::Offline {
        return;
    }

    let timing = timing.as_deref().copied().unwrap_or_default();
    state.transition(SessionPhase::OnlineIdle, &mut signals);
    clock.arm(TimerKind::IdleDelay, timing.idle_delay_ms);
}
