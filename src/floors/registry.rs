/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Heading};
use crate::task::Task;

pub const HALL_UP: usize = 0;
pub const HALL_DOWN: usize = 1;

/**
 * Call-button state of every floor.
 *
 * A button press raises the flag for its direction and yields a sharable
 * pickup task. Flags are only lowered by a car stopping at the floor, never by
 * the registry itself, so an accepted call stays lit until it is served.
 *
 * # Fields
 * - `hall_requests`:   `[up, down]` flags per floor.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct FloorRegistry {
    hall_requests: Vec<[bool; 2]>,
}

impl FloorRegistry {
    pub fn new(n_floors: u8) -> FloorRegistry {
        FloorRegistry {
            hall_requests: vec![[false; 2]; n_floors as usize],
        }
    }

    pub fn n_floors(&self) -> u8 {
        self.hall_requests.len() as u8
    }

    pub fn on_up_button_pressed(&mut self, floor: u8) -> Option<Task> {
        self.press(floor, Heading::Up)
    }

    pub fn on_down_button_pressed(&mut self, floor: u8) -> Option<Task> {
        self.press(floor, Heading::Down)
    }

    pub fn is_requested(&self, floor: u8, heading: Heading) -> bool {
        self.hall_requests
            .get(floor as usize)
            .map_or(false, |buttons| buttons[Self::button(heading)])
    }

    /// Lowers the flag for `heading` at `floor`. Called from a car's stop handling.
    pub fn clear(&mut self, floor: u8, heading: Heading) {
        if let Some(buttons) = self.hall_requests.get_mut(floor as usize) {
            if buttons[Self::button(heading)] {
                debug!("Hall call {:?} at floor {} served", heading, floor);
            }
            buttons[Self::button(heading)] = false;
        }
    }

    fn press(&mut self, floor: u8, heading: Heading) -> Option<Task> {
        match self.hall_requests.get_mut(floor as usize) {
            Some(buttons) => {
                buttons[Self::button(heading)] = true;
                Some(Task::pickup(floor, Direction::from(heading)))
            }
            None => {
                warn!("Ignoring {:?} call from unknown floor {}", heading, floor);
                None
            }
        }
    }

    fn button(heading: Heading) -> usize {
        match heading {
            Heading::Up => HALL_UP,
            Heading::Down => HALL_DOWN,
        }
    }
}
