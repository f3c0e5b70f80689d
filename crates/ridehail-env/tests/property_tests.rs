use std::collections::HashSet;

use proptest::prelude::*;

use ridehail_env::{EnvConfig, RideHailEnv, State, TravelTimeTable, advance_clock};

fn valid_state() -> impl Strategy<Value = State> {
    (1u8..=5, 0u8..24, 0u8..7).prop_map(|(location, hour, day)| State::new(location, hour, day))
}

proptest! {
    #[test]
    fn advancing_the_clock_conserves_total_hours(
        hour in 0u8..24,
        day in 0u8..7,
        duration in 0u32..1000,
    ) {
        let (new_hour, new_day) = advance_clock(hour, day, duration, 24, 7);

        prop_assert!(new_hour < 24);
        prop_assert!(new_day < 7);

        let before = u32::from(day) * 24 + u32::from(hour);
        let after = u32::from(new_day) * 24 + u32::from(new_hour);
        prop_assert_eq!(after, (before + duration) % (24 * 7));
    }

    #[test]
    fn encoding_any_valid_state_sets_exactly_three_slots(state in valid_state()) {
        let env = RideHailEnv::new(EnvConfig::default(), 0).expect("default config is valid");
        let encoded = env.encode(&state).expect("state is in the space");

        prop_assert_eq!(encoded.len(), 5 + 24 + 7);
        let ones = encoded.iter().filter(|v| **v == 1.0).count();
        let zeros = encoded.iter().filter(|v| **v == 0.0).count();
        prop_assert_eq!(ones, 3);
        prop_assert_eq!(zeros, encoded.len() - 3);
    }

    #[test]
    fn transitions_never_leave_the_state_space(
        state in valid_state(),
        action_index in 0usize..21,
        trip_hours in 0u32..48,
        seed in 0u64..64,
    ) {
        let mut env = RideHailEnv::new(EnvConfig::default(), seed).expect("default config is valid");
        let travel = TravelTimeTable::constant(5, 24, 7, trip_hours);
        let action = env.action_space()[action_index];

        let next = env.next_state(&state, action, &travel).expect("action is in the space");
        prop_assert!(env.contains(&next));
    }

    #[test]
    fn request_samples_stay_within_bounds(state in valid_state(), seed in 0u64..256) {
        let mut env = RideHailEnv::new(EnvConfig::default(), seed).expect("default config is valid");
        let (indices, requests) = env.sample_requests(&state).expect("state is valid");

        prop_assert!(!indices.is_empty());
        prop_assert!(indices.len() <= env.config().max_requests + 1);
        prop_assert!(indices.contains(&20));

        let distinct: HashSet<_> = indices.iter().copied().collect();
        prop_assert_eq!(distinct.len(), indices.len());

        // Only the appended idle entry may sit at the no-op index.
        for index in &indices {
            prop_assert!(*index <= 20);
            prop_assert_eq!(env.action_space()[*index].is_idle(), *index == 20);
        }
        prop_assert_eq!(indices.len(), requests.len());
    }
}
