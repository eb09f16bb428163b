/* Modules */
pub mod config;
pub mod coordinator;
pub mod dispatch;
pub mod elevator;
pub mod error;
pub mod floors;
pub mod replay;
pub mod shared;
pub mod task;

/* Re-exports */
pub use config::Config;
pub use coordinator::{Controller, HostEvent};
pub use dispatch::CarPool;
pub use elevator::{Car, CarAgent, CarState};
pub use error::{Error, Result};
pub use floors::FloorRegistry;
pub use task::Task;
