use serde::{Deserialize, Serialize};

use crate::EnvError;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Immutable environment hyperparameters, fixed at engine construction.
///
/// Each engine owns its own copy, so differently configured environments
/// can coexist in one process.
pub struct EnvConfig {
    /// Number of serviceable locations, identified `1..=num_locations`.
    pub num_locations: u8,
    /// Hours per day; time-of-day ranges over `0..hours_per_day`.
    pub hours_per_day: u8,
    /// Days per week; day-of-week ranges over `0..days_per_week`.
    pub days_per_week: u8,
    /// Per-hour fuel and maintenance cost, charged on every travelled hour
    /// and on each idle hour.
    pub cost_per_hour: f64,
    /// Per-hour revenue while carrying a passenger.
    pub revenue_per_hour: f64,
    /// Mean request arrivals per location; index 0 belongs to location 1.
    pub request_means: Vec<f64>,
    /// Cap on the request count drawn at any location.
    pub max_requests: usize,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            num_locations: 5,
            hours_per_day: 24,
            days_per_week: 7,
            cost_per_hour: 5.0,
            revenue_per_hour: 9.0,
            request_means: vec![2.0, 12.0, 4.0, 7.0, 8.0],
            max_requests: 15,
        }
    }
}

impl EnvConfig {
    /// Validate dimension and rate constraints.
    pub fn validate(&self) -> Result<(), EnvError> {
        if self.num_locations == 0 {
            return Err(EnvError::ZeroDimension {
                field: "num_locations",
            });
        }
        if self.hours_per_day == 0 {
            return Err(EnvError::ZeroDimension {
                field: "hours_per_day",
            });
        }
        if self.days_per_week == 0 {
            return Err(EnvError::ZeroDimension {
                field: "days_per_week",
            });
        }

        if !self.cost_per_hour.is_finite() {
            return Err(EnvError::NonFiniteRate {
                field: "cost_per_hour",
                value: self.cost_per_hour,
            });
        }
        if !self.revenue_per_hour.is_finite() {
            return Err(EnvError::NonFiniteRate {
                field: "revenue_per_hour",
                value: self.revenue_per_hour,
            });
        }

        if self.request_means.len() != self.num_locations as usize {
            return Err(EnvError::RequestMeansLength {
                expected: self.num_locations as usize,
                got: self.request_means.len(),
            });
        }
        for (idx, mean) in self.request_means.iter().enumerate() {
            if !mean.is_finite() || *mean <= 0.0 {
                return Err(EnvError::InvalidRequestMean {
                    location: idx as u8 + 1,
                    value: *mean,
                });
            }
        }

        Ok(())
    }

    /// Length of the one-hot state encoding: one slot per location, hour, and day.
    pub fn encoding_len(&self) -> usize {
        self.num_locations as usize + self.hours_per_day as usize + self.days_per_week as usize
    }

    /// Number of trip actions, excluding the idle action.
    pub(crate) fn trip_action_count(&self) -> usize {
        let m = self.num_locations as usize;
        m * (m - 1)
    }
}
