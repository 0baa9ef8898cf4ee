//! Outbound messages: the session talks to the renderer and router through
//! this queue rather than calling into them directly.

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;

use crate::state::{RideRequest, SessionPhase};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionSignal {
    /// Emitted on every state-machine transition.
    PhaseChanged {
        from: SessionPhase,
        to: SessionPhase,
    },
    /// Emitted once per accepted request; the router is expected to call
    /// `ride_ended` when the pickup flow completes.
    NavigateToPickup { request: RideRequest },
}

/// Drainable signal queue. The presentation layer polls this after each
/// operation or time advance.
#[derive(Debug, Default, Resource)]
pub struct SessionSignals(VecDeque<SessionSignal>);

impl SessionSignals {
    pub fn push(&mut self, signal: SessionSignal) {
        self.0.push_back(signal);
    }

    /// Remove and return every queued signal, oldest first.
    pub fn drain(&mut self) -> Vec<SessionSignal> {
        self.0.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
