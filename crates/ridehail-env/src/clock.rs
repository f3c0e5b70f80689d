/// Advance an `(hour, day)` clock by a whole number of hours.
///
/// Hours wrap modulo `hours_per_day`, the day absorbs every completed day,
/// and the day itself wraps modulo `days_per_week`. Shared by the reward
/// and next-state computations so the two can never disagree on elapsed
/// time.
pub fn advance_clock(
    hour: u8,
    day: u8,
    hours: u32,
    hours_per_day: u8,
    days_per_week: u8,
) -> (u8, u8) {
    let total = u32::from(hour) + hours;
    let new_hour = (total % u32::from(hours_per_day)) as u8;
    let new_day = ((u32::from(day) + total / u32::from(hours_per_day)) % u32::from(days_per_week)) as u8;
    (new_hour, new_day)
}

#[cfg(test)]
mod tests {
    use super::advance_clock;

    #[test]
    fn advances_within_the_same_day() {
        assert_eq!(advance_clock(10, 1, 3, 24, 7), (13, 1));
    }

    #[test]
    fn rolls_over_midnight() {
        assert_eq!(advance_clock(23, 2, 3, 24, 7), (2, 3));
    }

    #[test]
    fn wraps_the_week() {
        assert_eq!(advance_clock(22, 6, 5, 24, 7), (3, 0));
    }

    #[test]
    fn zero_hours_is_the_identity() {
        assert_eq!(advance_clock(17, 4, 0, 24, 7), (17, 4));
    }

    #[test]
    fn absorbs_multiple_days() {
        // 50 hours from Monday 00:00 lands on Wednesday 02:00.
        assert_eq!(advance_clock(0, 0, 50, 24, 7), (2, 2));
    }
}
