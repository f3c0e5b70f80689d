use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ridehail_env::{EnvConfig, EnvError, RideHailEnv, TravelTimeTable};

/// Drive one week of simulated hours with a uniformly random policy and
/// report the episode totals.
fn main() -> Result<(), EnvError> {
    let config = EnvConfig::default();
    let mut env = RideHailEnv::new(config.clone(), 7)?;
    let mut policy_rng = ChaCha8Rng::seed_from_u64(11);

    // Rush hours are slow, nights are quick.
    let travel = TravelTimeTable::from_fn(
        config.num_locations,
        config.hours_per_day,
        config.days_per_week,
        |origin, destination, hour, _day| {
            let base = u32::from(origin.abs_diff(destination));
            match hour {
                7..=9 | 17..=19 => base + 2,
                0..=5 => base.max(1),
                _ => base + 1,
            }
        },
    );

    let (_, _, mut state) = env.reset();
    let mut total_reward = 0.0;
    let mut steps = 0u32;

    while env.travelled_hours() < u64::from(config.hours_per_day) * u64::from(config.days_per_week)
    {
        let (_, requests) = env.sample_requests(&state)?;
        let action = requests[policy_rng.gen_range(0..requests.len())];

        total_reward += env.reward(&state, action, &travel)?;
        state = env.next_state(&state, action, &travel)?;
        steps += 1;
    }

    println!("steps taken:      {steps}");
    println!("hours travelled:  {}", env.travelled_hours());
    println!("episode reward:   {total_reward:.1}");
    println!("final state:      {state:?}");

    Ok(())
}
