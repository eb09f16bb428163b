pub mod controller;
pub mod event;

pub use controller::Controller;
pub use event::HostEvent;
