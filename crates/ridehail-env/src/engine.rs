use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use statrs::distribution::Poisson;

use crate::clock::advance_clock;
use crate::space::{enumerate_actions, enumerate_states};
use crate::{Action, EnvConfig, EnvError, State, TravelTime};

#[derive(Debug, Clone)]
/// Single-driver ride-hailing environment with a seeded RNG.
///
/// The engine owns the immutable state and action spaces plus an
/// accumulated-travel-hours counter; the caller owns the current state and
/// drives the loop: `sample_requests`, pick an action, `reward`,
/// `next_state`, repeat.
pub struct RideHailEnv {
    config: EnvConfig,
    states: Vec<State>,
    actions: Vec<Action>,
    request_dists: Vec<Poisson>,
    rng: ChaCha8Rng,
    initial: State,
    travelled_hours: u64,
}

/// Travel legs of a trip action: the repositioning leg to the pickup point
/// and the passenger-carrying leg to the drop point.
struct TripLegs {
    reposition: u32,
    carry: u32,
}

impl RideHailEnv {
    /// Create an engine with deterministic RNG seed.
    ///
    /// Validates the configuration, enumerates both spaces, and samples a
    /// uniform random initial state.
    pub fn new(config: EnvConfig, seed: u64) -> Result<Self, EnvError> {
        config.validate()?;

        let states = enumerate_states(&config);
        let actions = enumerate_actions(&config);

        let mut request_dists = Vec::with_capacity(config.request_means.len());
        for (idx, mean) in config.request_means.iter().enumerate() {
            let dist = Poisson::new(*mean).map_err(|_| EnvError::InvalidRequestMean {
                location: idx as u8 + 1,
                value: *mean,
            })?;
            request_dists.push(dist);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let initial = states[rng.gen_range(0..states.len())];

        Ok(Self {
            config,
            states,
            actions,
            request_dists,
            rng,
            initial,
            travelled_hours: 0,
        })
    }

    /// Borrow the environment configuration.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// The fixed action space: every ordered distinct-location trip, then
    /// the idle action at the final index.
    pub fn action_space(&self) -> &[Action] {
        &self.actions
    }

    /// The fixed state space: the full location x hour x day product.
    pub fn state_space(&self) -> &[State] {
        &self.states
    }

    /// The most recently sampled initial state.
    pub fn initial_state(&self) -> State {
        self.initial
    }

    /// Total hours accrued across all `next_state` calls since the last
    /// reset. Instrumentation only; never consulted by transition logic.
    pub fn travelled_hours(&self) -> u64 {
        self.travelled_hours
    }

    /// Re-zero the travelled-hours counter and re-sample a uniform random
    /// initial state. The spaces themselves never change.
    pub fn reset(&mut self) -> (&[Action], &[State], State) {
        self.travelled_hours = 0;
        self.initial = self.states[self.rng.gen_range(0..self.states.len())];
        (&self.actions, &self.states, self.initial)
    }

    /// One-hot-per-segment encoding of a state for function approximators.
    ///
    /// The vector has length `num_locations + hours_per_day + days_per_week`
    /// with exactly three slots set: `location-1`, then the hour slot, then
    /// the day slot. Returns `None` for a state outside the space.
    pub fn encode(&self, state: &State) -> Option<Vec<f32>> {
        if !self.contains(state) {
            return None;
        }

        let m = self.config.num_locations as usize;
        let t = self.config.hours_per_day as usize;

        let mut encoded = vec![0.0; self.config.encoding_len()];
        encoded[state.location as usize - 1] = 1.0;
        encoded[m + state.hour as usize] = 1.0;
        encoded[m + t + state.day as usize] = 1.0;
        Some(encoded)
    }

    /// Sample the ride requests visible from a state.
    ///
    /// The request count is a Poisson draw with the location's mean,
    /// clamped to `max_requests`; that many distinct trip indices are then
    /// drawn without replacement. The idle action is appended whenever it
    /// is not already present, so the driver can always choose to wait.
    /// Returns the action-space indices and the matching actions.
    pub fn sample_requests(&mut self, state: &State) -> Result<(Vec<usize>, Vec<Action>), EnvError> {
        if state.location < 1 || state.location > self.config.num_locations {
            return Err(EnvError::LocationOutOfRange {
                location: state.location,
                num_locations: self.config.num_locations,
            });
        }

        let dist = self.request_dists[state.location as usize - 1];
        let draw: f64 = self.rng.sample(dist);
        let trip_count = self.config.trip_action_count();
        let count = (draw as usize).min(self.config.max_requests).min(trip_count);

        // The idle action sits past the trip actions, so sampling from
        // 0..trip_count can never pick it.
        let mut indices = index::sample(&mut self.rng, trip_count, count).into_vec();
        let mut requests: Vec<Action> = indices.iter().map(|&i| self.actions[i]).collect();

        let idle_index = trip_count;
        if !indices.contains(&idle_index) {
            indices.push(idle_index);
            requests.push(Action::Idle);
        }

        Ok((indices, requests))
    }

    /// Reward for taking `action` from `state`.
    ///
    /// Idle costs one hour of operating cost. A trip earns revenue on the
    /// passenger-carrying leg only, while operating cost accrues on both
    /// the repositioning leg and the carrying leg.
    pub fn reward(
        &self,
        state: &State,
        action: Action,
        travel: &impl TravelTime,
    ) -> Result<f64, EnvError> {
        match action {
            Action::Idle => Ok(-self.config.cost_per_hour),
            Action::Trip { pickup, drop } => {
                let legs = self.trip_legs(state, pickup, drop, travel)?;
                let paid = f64::from(legs.carry);
                let driven = f64::from(legs.reposition + legs.carry);
                Ok(self.config.revenue_per_hour * paid - self.config.cost_per_hour * driven)
            }
        }
    }

    /// State reached by taking `action` from `state`.
    ///
    /// Idling keeps the location and advances the clock by one hour; a
    /// trip moves the driver to the drop point after both legs elapse.
    /// The elapsed hours are added to the travelled-hours counter.
    pub fn next_state(
        &mut self,
        state: &State,
        action: Action,
        travel: &impl TravelTime,
    ) -> Result<State, EnvError> {
        let (elapsed, location) = match action {
            Action::Idle => (1, state.location),
            Action::Trip { pickup, drop } => {
                let legs = self.trip_legs(state, pickup, drop, travel)?;
                (legs.reposition + legs.carry, drop)
            }
        };

        self.travelled_hours += u64::from(elapsed);

        let (hour, day) = advance_clock(
            state.hour,
            state.day,
            elapsed,
            self.config.hours_per_day,
            self.config.days_per_week,
        );

        Ok(State {
            location,
            hour,
            day,
        })
    }

    /// Whether a state lies inside the enumerated state space.
    pub fn contains(&self, state: &State) -> bool {
        (1..=self.config.num_locations).contains(&state.location)
            && state.hour < self.config.hours_per_day
            && state.day < self.config.days_per_week
    }

    /// Compute both travel legs of a trip, advancing the clock between
    /// them. This is the single source of elapsed-time truth for `reward`
    /// and `next_state`.
    fn trip_legs(
        &self,
        state: &State,
        pickup: u8,
        drop: u8,
        travel: &impl TravelTime,
    ) -> Result<TripLegs, EnvError> {
        let in_range = |loc: u8| (1..=self.config.num_locations).contains(&loc);
        if pickup == drop || !in_range(pickup) || !in_range(drop) {
            return Err(EnvError::InvalidAction { pickup, drop });
        }

        let mut hour = state.hour;
        let mut day = state.day;

        let reposition = if state.location == pickup {
            0
        } else {
            travel.hours(state.location, pickup, hour, day)?
        };

        if reposition > 0 {
            (hour, day) = advance_clock(
                hour,
                day,
                reposition,
                self.config.hours_per_day,
                self.config.days_per_week,
            );
        }

        let carry = travel.hours(pickup, drop, hour, day)?;

        Ok(TripLegs { reposition, carry })
    }
}
