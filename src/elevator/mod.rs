pub mod agent;
pub mod agent_tests;
pub mod car;
pub mod schedule;
pub mod state;

pub use agent::CarAgent;
pub use car::Car;
pub use state::CarState;
