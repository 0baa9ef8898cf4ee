//! Session runner: routes events into the schedule.
//!
//! User intents run the schedule synchronously at the current session time;
//! timer events fire only inside [advance], so a timer coming due during an
//! intent is always processed after that intent completes.

use bevy_ecs::prelude::{Res, Schedule, World};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::clock::{CurrentEvent, Event, EventKind, SessionClock};
use crate::systems::{
    go_offline::go_offline_system, go_online::go_online_system,
    request_decision::request_decision_system, request_expiry::request_expiry_system,
    request_offer::request_offer_system, ride_completed::ride_completed_system,
    search_start::search_start_system,
};

// Condition functions for each event kind
fn is_go_online(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::GoOnline)
        .unwrap_or(false)
}

fn is_go_offline(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::GoOffline)
        .unwrap_or(false)
}

fn is_search_start(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| {
            matches!(
                e.0.kind,
                EventKind::SearchRequested | EventKind::IdleDelayElapsed
            )
        })
        .unwrap_or(false)
}

fn is_request_offer(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::SearchWindowElapsed)
        .unwrap_or(false)
}

fn is_request_decision(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| {
            matches!(
                e.0.kind,
                EventKind::RequestAccepted | EventKind::RequestDeclined
            )
        })
        .unwrap_or(false)
}

fn is_request_expiry(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::CountdownExpired)
        .unwrap_or(false)
}

fn is_ride_completed(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::RideEnded)
        .unwrap_or(false)
}

/// Builds the session schedule: every event-reacting system, gated on the
/// event kind so only the matching system runs per event.
pub fn session_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((
        go_online_system.run_if(is_go_online),
        go_offline_system.run_if(is_go_offline),
        search_start_system.run_if(is_search_start),
        request_offer_system.run_if(is_request_offer),
        request_decision_system.run_if(is_request_decision),
        request_expiry_system.run_if(is_request_expiry),
        ride_completed_system.run_if(is_ride_completed),
    ));
    schedule
}

/// Applies a user intent synchronously at the current session time.
pub fn dispatch_intent(world: &mut World, schedule: &mut Schedule, kind: EventKind) {
    let now = world.resource::<SessionClock>().now();
    world.insert_resource(CurrentEvent(Event {
        timestamp: now,
        kind,
    }));
    schedule.run(world);
}

/// Advances virtual time by `delta_ms`, firing due timers in deadline
/// order. Returns the number of timer events processed.
pub fn advance(world: &mut World, schedule: &mut Schedule, delta_ms: u64) -> usize {
    let target = world.resource::<SessionClock>().now() + delta_ms;
    let mut steps = 0;
    loop {
        let event = match world.resource_mut::<SessionClock>().pop_due(target) {
            Some(event) => event,
            None => break,
        };
        world.insert_resource(CurrentEvent(event));
        schedule.run(world);
        steps += 1;
    }
    world.resource_mut::<SessionClock>().advance_to(target);
    steps
}
