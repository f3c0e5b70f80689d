use crate::EnvError;

/// Trip-duration oracle consulted by the environment.
///
/// Implementations answer "how many whole hours does it take to drive from
/// `origin` to `destination`, departing at (`hour`, `day`)". The engine
/// never falls back to a default duration: a failed lookup is propagated
/// to the caller.
pub trait TravelTime {
    fn hours(&self, origin: u8, destination: u8, hour: u8, day: u8) -> Result<u32, EnvError>;
}

#[derive(Debug, Clone)]
/// Dense travel-time table indexed `[origin-1][destination-1][hour][day]`,
/// stored as one flat vector.
pub struct TravelTimeTable {
    num_locations: u8,
    hours_per_day: u8,
    days_per_week: u8,
    data: Vec<u32>,
}

impl TravelTimeTable {
    /// Build a table from pre-flattened data laid out origin-major.
    ///
    /// `data.len()` must equal
    /// `num_locations^2 * hours_per_day * days_per_week`.
    pub fn new(
        num_locations: u8,
        hours_per_day: u8,
        days_per_week: u8,
        data: Vec<u32>,
    ) -> Result<Self, EnvError> {
        let expected = num_locations as usize
            * num_locations as usize
            * hours_per_day as usize
            * days_per_week as usize;
        if data.len() != expected {
            return Err(EnvError::TableSize {
                expected,
                got: data.len(),
            });
        }

        Ok(Self {
            num_locations,
            hours_per_day,
            days_per_week,
            data,
        })
    }

    /// Build a fully populated table by evaluating `f` at every
    /// `(origin, destination, hour, day)` combination.
    pub fn from_fn(
        num_locations: u8,
        hours_per_day: u8,
        days_per_week: u8,
        mut f: impl FnMut(u8, u8, u8, u8) -> u32,
    ) -> Self {
        let mut data = Vec::with_capacity(
            num_locations as usize
                * num_locations as usize
                * hours_per_day as usize
                * days_per_week as usize,
        );
        for origin in 1..=num_locations {
            for destination in 1..=num_locations {
                for hour in 0..hours_per_day {
                    for day in 0..days_per_week {
                        data.push(f(origin, destination, hour, day));
                    }
                }
            }
        }

        Self {
            num_locations,
            hours_per_day,
            days_per_week,
            data,
        }
    }

    /// Build a table where every trip takes the same number of hours.
    pub fn constant(num_locations: u8, hours_per_day: u8, days_per_week: u8, hours: u32) -> Self {
        Self::from_fn(num_locations, hours_per_day, days_per_week, |_, _, _, _| {
            hours
        })
    }

    /// Overwrite a single entry. Out-of-range coordinates are rejected.
    pub fn set(
        &mut self,
        origin: u8,
        destination: u8,
        hour: u8,
        day: u8,
        hours: u32,
    ) -> Result<(), EnvError> {
        let offset = self.offset(origin, destination, hour, day).ok_or(
            EnvError::TravelTimeOutOfRange {
                origin,
                destination,
                hour,
                day,
            },
        )?;
        self.data[offset] = hours;
        Ok(())
    }

    fn offset(&self, origin: u8, destination: u8, hour: u8, day: u8) -> Option<usize> {
        let in_range = (1..=self.num_locations).contains(&origin)
            && (1..=self.num_locations).contains(&destination)
            && hour < self.hours_per_day
            && day < self.days_per_week;
        if !in_range {
            return None;
        }

        let m = self.num_locations as usize;
        let t = self.hours_per_day as usize;
        let d = self.days_per_week as usize;
        Some(
            (((origin as usize - 1) * m + (destination as usize - 1)) * t + hour as usize) * d
                + day as usize,
        )
    }
}

impl TravelTime for TravelTimeTable {
    fn hours(&self, origin: u8, destination: u8, hour: u8, day: u8) -> Result<u32, EnvError> {
        let offset = self.offset(origin, destination, hour, day).ok_or(
            EnvError::TravelTimeOutOfRange {
                origin,
                destination,
                hour,
                day,
            },
        )?;
        Ok(self.data[offset])
    }
}
