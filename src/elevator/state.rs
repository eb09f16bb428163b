use serde::{Deserialize, Serialize};

use crate::shared::{Heading, Indicator};
use crate::task::Task;

/// Bookkeeping for one car, owned by its `CarAgent`.
///
/// `ongoing` is never also present in `pending`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CarState {
    pub position: f64,
    pub load_fraction: f64,
    pub capacity: u32,
    pub pending: Vec<Task>,
    pub ongoing: Option<Task>,
    pub indicator: Indicator,
    /// Last observed travel direction.
    pub heading: Option<Heading>,
    /// Latest tasks completed by this car, oldest first. Capped by
    /// `DispatchConfig::served_history`.
    pub served: Vec<Task>,
}

impl CarState {
    pub fn new(position: u8, capacity: u32) -> CarState {
        CarState {
            position: position as f64,
            load_fraction: 0.0,
            capacity,
            pending: Vec::new(),
            ongoing: None,
            indicator: Indicator::Both,
            heading: None,
            served: Vec::new(),
        }
    }

    /// True if `task` is queued or in flight on this car.
    pub fn holds(&self, task: &Task) -> bool {
        self.ongoing.as_ref() == Some(task) || self.pending.contains(task)
    }

    /// Direction the car will keep moving in, if it is known.
    pub fn sweep(&self) -> Option<Heading> {
        self.ongoing
            .and_then(|task| Heading::between(self.position, task.floor as f64))
            .or(self.heading)
    }
}
