//! Fare estimates shown on offered requests.

/// Base fare in currency units (e.g., dollars).
pub const BASE_FARE: f64 = 2.50;

/// Per-kilometer rate in currency units.
pub const PER_KM_RATE: f64 = 1.50;

/// Fare estimate for a trip of the given length.
///
/// Formula: `fare = BASE_FARE + (distance_km * PER_KM_RATE)`
pub fn estimate_fare(distance_km: f64) -> f64 {
    BASE_FARE + (distance_km * PER_KM_RATE)
}
