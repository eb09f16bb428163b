use serde::{Deserialize, Serialize};

use crate::elevator::Car;

/// Command issued to a car, as recorded by [`ScriptedCar`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CarCommand {
    GoToFloor { floor: u8, now: bool },
    SetIndicators { up: bool, down: bool },
}

/**
 * In-memory stand-in for a host car.
 *
 * Position and load are whatever the host last reported through
 * `set_status`. Movement commands only edit the destination queue and are
 * recorded so a replay or a test can inspect what the controller asked for.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedCar {
    floor: u8,
    load: f64,
    capacity: u32,
    queue: Vec<u8>,
    lamps: (bool, bool),
    commands: Vec<CarCommand>,
}

impl ScriptedCar {
    pub fn new(floor: u8, capacity: u32) -> ScriptedCar {
        ScriptedCar {
            floor,
            load: 0.0,
            capacity,
            queue: Vec::new(),
            lamps: (true, true),
            commands: Vec::new(),
        }
    }

    pub fn set_status(&mut self, floor: u8, load: f64) {
        self.floor = floor;
        self.load = load.clamp(0.0, 1.0);
    }

    /// Car reached `floor`; drop it from the destination queue.
    pub fn arrive(&mut self, floor: u8) {
        self.floor = floor;
        if let Some(index) = self.queue.iter().position(|f| *f == floor) {
            self.queue.remove(index);
        }
    }

    pub fn lamps(&self) -> (bool, bool) {
        self.lamps
    }

    pub fn commands(&self) -> &[CarCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<CarCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Car for ScriptedCar {
    fn go_to_floor(&mut self, floor: u8, now: bool) {
        if now {
            self.queue.retain(|f| *f != floor);
            self.queue.insert(0, floor);
        } else if self.queue.last() != Some(&floor) {
            self.queue.push(floor);
        }
        self.commands.push(CarCommand::GoToFloor { floor, now });
    }

    fn set_indicators(&mut self, up: bool, down: bool) {
        self.lamps = (up, down);
        self.commands.push(CarCommand::SetIndicators { up, down });
    }

    fn current_floor(&self) -> u8 {
        self.floor
    }

    fn load_factor(&self) -> f64 {
        self.load
    }

    fn capacity(&self) -> u32 {
        self.capacity
    }

    fn destination_queue(&self) -> &[u8] {
        &self.queue
    }
}
