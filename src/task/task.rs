use serde::{Deserialize, Serialize};

use crate::shared::{Direction, TaskKind};

/**
 * A single floor-service obligation.
 *
 * A `Task` tells a car to stop at `floor` while travelling in `direction`, to
 * pick up passengers, drop them off, or both. Tasks are plain values: they are
 * never mutated, only replaced by the result of [`Task::combine`].
 *
 * # Fields
 * - `floor`:       Floor index the car must stop at.
 * - `direction`:   Direction the car should be travelling when it stops.
 * - `kind`:        Whether passengers board, leave, or both.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Task {
    pub floor: u8,
    pub direction: Direction,
    pub kind: TaskKind,
}

impl Task {
    pub fn new(floor: u8, direction: Direction, kind: TaskKind) -> Task {
        Task {
            floor,
            direction,
            kind,
        }
    }

    /// Hall call made from a floor button.
    pub fn pickup(floor: u8, direction: Direction) -> Task {
        Task::new(floor, direction, TaskKind::Pickup)
    }

    /// Destination chosen from inside a car.
    pub fn dropoff(floor: u8) -> Task {
        Task::new(floor, Direction::Either, TaskKind::Dropoff)
    }

    pub fn is_combinable(&self, other: &Task) -> bool {
        self.floor == other.floor && !self.direction.is_opposite(other.direction)
    }

    /// Merges two stops at the same floor into one.
    ///
    /// # Panics
    /// If the tasks are not combinable. Callers check [`Task::is_combinable`]
    /// first; reaching the panic means the queue bookkeeping is broken.
    pub fn combine(&self, other: &Task) -> Task {
        assert!(
            self.is_combinable(other),
            "attempted to combine incompatible tasks {:?} and {:?}",
            self,
            other
        );

        let direction = match self.direction {
            Direction::Either => other.direction,
            direction => direction,
        };
        let kind = if self.kind == other.kind {
            self.kind
        } else {
            TaskKind::Both
        };

        Task::new(self.floor, direction, kind)
    }
}
