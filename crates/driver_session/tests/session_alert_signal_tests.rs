mod support;

use driver_session::session::RideRequestSession;
use driver_session::signals::SessionSignal;
use driver_session::state::SessionPhase;
use driver_session::test_helpers::{AlertCall, FailingAlert, RecordingAlert};

fn recording_session() -> (
    RideRequestSession,
    std::sync::Arc<std::sync::Mutex<Vec<AlertCall>>>,
) {
    let (channel, calls) = RecordingAlert::new();
    let session = RideRequestSession::builder()
        .with_seed(42)
        .with_alert_channel(Box::new(channel))
        .build();
    (session, calls)
}

fn alert_calls(calls: &std::sync::Arc<std::sync::Mutex<Vec<AlertCall>>>) -> Vec<AlertCall> {
    calls.lock().expect("alert call log").clone()
}

#[test]
fn alert_starts_on_offer_and_stops_on_decline() {
    let (mut session, calls) = recording_session();
    session.go_online();
    session.advance(3000 + 4500);

    assert_eq!(
        alert_calls(&calls),
        vec![AlertCall::Start {
            looped: true,
            volume: 1.0
        }]
    );

    session.decline();
    assert_eq!(alert_calls(&calls).last(), Some(&AlertCall::Stop));
}

#[test]
fn alert_stops_on_accept_expiry_and_offline() {
    // Accept.
    let (mut session, calls) = recording_session();
    session.go_online();
    session.advance(3000 + 4500);
    session.accept();
    assert_eq!(alert_calls(&calls).last(), Some(&AlertCall::Stop));
    assert!(!session.alert_active());

    // Expiry.
    let (mut session, calls) = recording_session();
    session.go_online();
    session.advance(3000 + 4500);
    session.advance(120_000);
    assert_eq!(alert_calls(&calls).last(), Some(&AlertCall::Stop));
    assert!(!session.alert_active());

    // Forced offline.
    let (mut session, calls) = recording_session();
    session.go_online();
    session.advance(3000 + 4500);
    session.go_offline();
    assert_eq!(alert_calls(&calls).last(), Some(&AlertCall::Stop));
    assert!(!session.alert_active());
}

#[test]
fn failing_alert_channel_never_disturbs_the_lifecycle() {
    let mut session = RideRequestSession::builder()
        .with_seed(42)
        .with_alert_channel(Box::new(FailingAlert))
        .build();

    session.go_online();
    session.advance(3000 + 4500);
    assert_eq!(session.phase(), SessionPhase::RequestPending);
    assert!(session.alert_active());

    session.accept();
    assert_eq!(session.phase(), SessionPhase::RideActive);
    assert!(!session.alert_active());

    session.ride_ended();
    session.advance(4500);
    assert_eq!(session.phase(), SessionPhase::RequestPending);

    session.go_offline();
    assert_eq!(session.phase(), SessionPhase::Offline);
    assert_eq!(session.pending_timers(), 0);
}

#[test]
fn navigate_signal_fires_exactly_once_per_accept() {
    let (mut session, _calls) = recording_session();
    session.go_online();
    session.advance(3000 + 4500);

    let before: usize = session
        .drain_signals()
        .iter()
        .filter(|s| matches!(s, SessionSignal::NavigateToPickup { .. }))
        .count();
    assert_eq!(before, 0);

    session.accept();
    // A duplicate tap on the accept button lands in RideActive and is dropped.
    session.accept();

    let navigations: Vec<_> = session
        .drain_signals()
        .into_iter()
        .filter(|s| matches!(s, SessionSignal::NavigateToPickup { .. }))
        .collect();
    assert_eq!(navigations.len(), 1);
}

#[test]
fn phase_change_signals_mirror_the_transition_table() {
    let (mut session, _calls) = recording_session();

    session.go_online();
    session.advance(3000 + 4500);
    session.decline();
    session.go_offline();

    let phases: Vec<(SessionPhase, SessionPhase)> = session
        .drain_signals()
        .into_iter()
        .filter_map(|signal| match signal {
            SessionSignal::PhaseChanged { from, to } => Some((from, to)),
            _ => None,
        })
        .collect();

    assert_eq!(
        phases,
        vec![
            (SessionPhase::Offline, SessionPhase::OnlineIdle),
            (SessionPhase::OnlineIdle, SessionPhase::OnlineSearching),
            (SessionPhase::OnlineSearching, SessionPhase::RequestPending),
            (SessionPhase::RequestPending, SessionPhase::OnlineIdle),
            (SessionPhase::OnlineIdle, SessionPhase::Offline),
        ]
    );
}
