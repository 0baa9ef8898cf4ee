use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::signals::{SessionSignal, SessionSignals};

/// Driver availability toggle; a derived view of [SessionPhase].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverAvailability {
    Offline,
    Online,
}

/// Radar search state; a derived view of [SessionPhase].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Searching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    Offline,
    OnlineIdle,
    OnlineSearching,
    RequestPending,
    RideActive,
}

/// One offered trip. Lives only while the session is in
/// [SessionPhase::RequestPending]; destroyed on accept, decline, or expiry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideRequest {
    pub id: u64,
    pub fare_estimate: f64,
    pub distance_km: f64,
    pub pickup: String,
    pub dropoff: String,
    /// Session time when the request was offered.
    pub offered_at: u64,
    /// Session time when the request auto-expires.
    pub deadline: u64,
}

impl RideRequest {
    /// Remaining countdown as a fraction in `[0, 1]`: 1 = just offered,
    /// 0 = expired. The renderer maps this to its shrinking indicator.
    pub fn countdown_fraction(&self, now: u64) -> f64 {
        let window = self.deadline.saturating_sub(self.offered_at);
        if window == 0 {
            return 0.0;
        }
        let remaining = self.deadline.saturating_sub(now).min(window);
        remaining as f64 / window as f64
    }
}

/// Session state for one driver dashboard.
#[derive(Debug, Clone, PartialEq, Resource)]
pub struct SessionState {
    pub phase: SessionPhase,
    /// Live request; `Some` exactly while `phase == RequestPending`.
    pub request: Option<RideRequest>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Offline,
            request: None,
        }
    }
}

impl SessionState {
    pub fn availability(&self) -> DriverAvailability {
        match self.phase {
            SessionPhase::Offline => DriverAvailability::Offline,
            _ => DriverAvailability::Online,
        }
    }

    pub fn search_state(&self) -> SearchState {
        match self.phase {
            SessionPhase::OnlineSearching => SearchState::Searching,
            _ => SearchState::Idle,
        }
    }

    pub fn is_online(&self) -> bool {
        self.availability() == DriverAvailability::Online
    }

    pub fn is_searching(&self) -> bool {
        self.search_state() == SearchState::Searching
    }

    pub fn has_pending_request(&self) -> bool {
        self.phase == SessionPhase::RequestPending
    }

    pub fn has_active_ride(&self) -> bool {
        self.phase == SessionPhase::RideActive
    }

    /// Move to `to`, recording the change on the signal queue.
    pub fn transition(&mut self, to: SessionPhase, signals: &mut SessionSignals) {
        let from = self.phase;
        self.phase = to;
        signals.push(SessionSignal::PhaseChanged { from, to });
    }
}
