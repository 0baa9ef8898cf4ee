pub mod alerts;
pub mod catalog;
pub mod clock;
pub mod generator;
pub mod params;
pub mod pricing;
pub mod runner;
pub mod session;
pub mod signals;
pub mod state;
pub mod systems;
pub mod telemetry;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
