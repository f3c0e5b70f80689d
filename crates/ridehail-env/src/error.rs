use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for configuration, travel-time lookup, and engine operations.
pub enum EnvError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{field} must be at least 1")]
    ZeroDimension { field: &'static str },

    #[error("{field} must be finite, got {value}")]
    NonFiniteRate { field: &'static str, value: f64 },

    #[error("expected one request mean per location ({expected}), got {got}")]
    RequestMeansLength { expected: usize, got: usize },

    #[error("request mean for location {location} must be positive and finite, got {value}")]
    InvalidRequestMean { location: u8, value: f64 },

    #[error("travel time table holds {got} entries, expected {expected}")]
    TableSize { expected: usize, got: usize },

    #[error(
        "travel time lookup out of range: origin {origin}, destination {destination}, hour {hour}, day {day}"
    )]
    TravelTimeOutOfRange {
        origin: u8,
        destination: u8,
        hour: u8,
        day: u8,
    },

    #[error("location {location} is outside 1..={num_locations}")]
    LocationOutOfRange { location: u8, num_locations: u8 },

    #[error("trip action ({pickup}, {drop}) is not in the action space")]
    InvalidAction { pickup: u8, drop: u8 },
}
