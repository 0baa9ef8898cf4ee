use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::LOCATIONS;
use crate::params::RequestGeneratorConfig;
use crate::pricing::estimate_fare;
use crate::state::RideRequest;

/// Produces the request offered when a search window resolves.
///
/// Seeded for reproducibility: the same seed yields the same sequence of
/// requests. Identifiers increase monotonically within a session.
#[derive(Debug, Resource)]
pub struct RequestGenerator {
    config: RequestGeneratorConfig,
    rng: StdRng,
    next_id: u64,
}

impl RequestGenerator {
    pub fn new(config: RequestGeneratorConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
            next_id: 1,
        }
    }

    /// Build the next request, offered at `now` and expiring after `countdown_ms`.
    pub fn next_request(&mut self, now: u64, countdown_ms: u64) -> RideRequest {
        let id = self.next_id;
        self.next_id += 1;

        let distance_km = self
            .rng
            .gen_range(self.config.min_distance_km..=self.config.max_distance_km);
        let pickup = LOCATIONS[self.rng.gen_range(0..LOCATIONS.len())];
        // Resample until the dropoff differs from the pickup.
        let dropoff = loop {
            let candidate = LOCATIONS[self.rng.gen_range(0..LOCATIONS.len())];
            if candidate != pickup {
                break candidate;
            }
        };

        RideRequest {
            id,
            fare_estimate: estimate_fare(distance_km),
            distance_km,
            pickup: pickup.to_string(),
            dropoff: dropoff.to_string(),
            offered_at: now,
            deadline: now + countdown_ms,
        }
    }
}
