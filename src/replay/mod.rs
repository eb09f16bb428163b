pub mod runner;
pub mod script;
pub mod scripted_car;

pub use runner::{spawn_feeder, Replay, Report};
pub use script::{load_script, parse_script, CarStatus, ScriptLine};
pub use scripted_car::{CarCommand, ScriptedCar};
