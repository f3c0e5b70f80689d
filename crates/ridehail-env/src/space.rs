use serde::{Deserialize, Serialize};

use crate::EnvConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Where the driver is and when: `(location, time-of-day, day-of-week)`.
pub struct State {
    /// Current location, in `1..=num_locations`.
    pub location: u8,
    /// Time of day, in `0..hours_per_day`.
    pub hour: u8,
    /// Day of week, in `0..days_per_week`.
    pub day: u8,
}

impl State {
    pub fn new(location: u8, hour: u8, day: u8) -> Self {
        Self {
            location,
            hour,
            day,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// One choice available to the driver at a decision point.
pub enum Action {
    /// Stay put for one hour without taking a request.
    Idle,
    /// Reposition to `pickup` if not already there, then carry a passenger
    /// to `drop`. Always `pickup != drop`.
    Trip { pickup: u8, drop: u8 },
}

impl Action {
    pub fn is_idle(&self) -> bool {
        matches!(self, Action::Idle)
    }
}

/// Enumerate the full location x hour x day product.
pub(crate) fn enumerate_states(config: &EnvConfig) -> Vec<State> {
    let mut states = Vec::with_capacity(
        config.num_locations as usize
            * config.hours_per_day as usize
            * config.days_per_week as usize,
    );
    for location in 1..=config.num_locations {
        for hour in 0..config.hours_per_day {
            for day in 0..config.days_per_week {
                states.push(State {
                    location,
                    hour,
                    day,
                });
            }
        }
    }
    states
}

/// Enumerate all ordered distinct-location trips, with the single idle
/// action at the final index.
pub(crate) fn enumerate_actions(config: &EnvConfig) -> Vec<Action> {
    let mut actions = Vec::with_capacity(config.trip_action_count() + 1);
    for pickup in 1..=config.num_locations {
        for drop in 1..=config.num_locations {
            if pickup != drop {
                actions.push(Action::Trip { pickup, drop });
            }
        }
    }
    actions.push(Action::Idle);
    actions
}
