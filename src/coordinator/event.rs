use serde::{Deserialize, Serialize};

use crate::shared::Heading;

/// Event reported by the host simulation. Cars are addressed by pool index.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    Idle { car: usize },
    FloorButtonPressed { car: usize, floor: u8 },
    PassingFloor { car: usize, floor: u8, direction: Heading },
    StoppedAtFloor { car: usize, floor: u8 },
    UpButtonPressed { floor: u8 },
    DownButtonPressed { floor: u8 },
}

impl HostEvent {
    /// Car the event belongs to, none for floor events.
    pub fn car(&self) -> Option<usize> {
        match *self {
            HostEvent::Idle { car }
            | HostEvent::FloorButtonPressed { car, .. }
            | HostEvent::PassingFloor { car, .. }
            | HostEvent::StoppedAtFloor { car, .. } => Some(car),
            HostEvent::UpButtonPressed { .. } | HostEvent::DownButtonPressed { .. } => None,
        }
    }
}
