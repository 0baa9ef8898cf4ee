//! Drive one simulated dashboard session and print the transition log.
//!
//! Run with: cargo run -p driver_session --example dashboard_run

use driver_session::alerts::{AlertChannel, AlertError};
use driver_session::session::RideRequestSession;
use driver_session::signals::SessionSignal;

/// Alert backend that prints instead of playing a tone.
struct ConsoleAlert;

impl AlertChannel for ConsoleAlert {
    fn start(&mut self, looped: bool, volume: f32) -> Result<(), AlertError> {
        println!("          [alert] start (looped={looped}, volume={volume})");
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AlertError> {
        println!("          [alert] stop");
        Ok(())
    }
}

fn report(session: &mut RideRequestSession) {
    let now = session.now();
    for signal in session.drain_signals() {
        match signal {
            SessionSignal::PhaseChanged { from, to } => {
                println!("t={now:>7} ms  {from:?} -> {to:?}");
            }
            SessionSignal::NavigateToPickup { request } => {
                println!("t={now:>7} ms  navigate to pickup at {}", request.pickup);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut session = RideRequestSession::builder()
        .with_seed(123)
        .with_alert_channel(Box::new(ConsoleAlert))
        .build();

    println!("--- Driver dashboard session (seed 123) ---");
    session.go_online();
    report(&mut session);

    // First offer arrives after the idle delay plus the search window.
    session.advance(3000 + 4500);
    if let Some(request) = session.current_request() {
        println!(
            "t={:>7} ms  incoming request #{}: {} -> {} ({:.1} km, ${:.2})",
            session.now(),
            request.id,
            request.pickup,
            request.dropoff,
            request.distance_km,
            request.fare_estimate
        );
    }
    session.decline();
    report(&mut session);

    // Second offer: accept it and complete the ride.
    session.advance(3000 + 4500);
    if let Some(request) = session.current_request() {
        println!(
            "t={:>7} ms  incoming request #{}: {} -> {} ({:.1} km, ${:.2})",
            session.now(),
            request.id,
            request.pickup,
            request.dropoff,
            request.distance_km,
            request.fare_estimate
        );
    }
    session.accept();
    report(&mut session);

    session.advance(15 * 60 * 1000);
    session.ride_ended();
    report(&mut session);

    session.go_offline();
    report(&mut session);

    let telemetry = session.telemetry();
    println!(
        "offered={} accepted={} declined={} expired={} rides_completed={}",
        telemetry.requests_offered,
        telemetry.requests_accepted,
        telemetry.requests_declined,
        telemetry.requests_expired,
        telemetry.rides_completed,
    );
}
