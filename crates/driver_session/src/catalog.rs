//! Pickup and dropoff descriptors for generated requests.
//!
//! These are display strings only; the session carries no geography.

/// Locations sampled for pickup and dropoff descriptors. The generator
/// always picks two distinct entries for a single request.
pub const LOCATIONS: [&str; 16] = [
    "Central Station",
    "Airport Terminal 2",
    "Harbor Market",
    "University Gate",
    "Riverside Mall",
    "Old Town Square",
    "Tech Park North",
    "Memorial Hospital",
    "Grand Hotel",
    "Stadium East Entrance",
    "Museum Quarter",
    "Ferry Terminal",
    "Botanical Garden",
    "Opera House",
    "Exhibition Centre",
    "South Bus Depot",
];
