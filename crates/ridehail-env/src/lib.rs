mod clock;
mod config;
mod engine;
mod error;
mod io;
mod space;
mod travel;

pub use clock::advance_clock;
pub use config::EnvConfig;
pub use engine::RideHailEnv;
pub use error::EnvError;
pub use io::{load_config, save_config};
pub use space::{Action, State};
pub use travel::{TravelTime, TravelTimeTable};
