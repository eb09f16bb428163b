/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::DispatchConfig;
use crate::dispatch::policy;
use crate::elevator::schedule;
use crate::elevator::{Car, CarState};
use crate::floors::FloorRegistry;
use crate::shared::{Direction, Heading, Indicator};
use crate::task::Task;

/**
 * Drives one elevator.
 *
 * The `CarAgent` owns the car's pending queue, its in-flight task and its
 * indicator lamps, and reacts to the car's own events. It issues movement and
 * lamp commands through the `Car` trait and never looks at other cars; hall
 * calls reach it already deduplicated through `assign`.
 *
 * # Fields
 * - `car`:         Host car the commands are sent to.
 * - `state`:       Queue, in-flight task, indicator and last known position.
 * - `config`:      Dispatch heuristics (acceptance threshold, reorder threshold).
 * - `n_floors`:    Number of floors in the building.
 */
pub struct CarAgent<C: Car> {
    car: C,
    state: CarState,
    config: DispatchConfig,
    n_floors: u8,
}

impl<C: Car> CarAgent<C> {
    pub fn new(car: C, config: &DispatchConfig, n_floors: u8) -> CarAgent<C> {
        let state = CarState::new(car.current_floor(), car.capacity());
        CarAgent {
            car,
            state,
            config: config.clone(),
            n_floors,
        }
    }

    pub fn state(&self) -> &CarState {
        &self.state
    }

    pub fn car(&self) -> &C {
        &self.car
    }

    pub fn car_mut(&mut self) -> &mut C {
        &mut self.car
    }

    pub fn holds(&self, task: &Task) -> bool {
        self.state.holds(task)
    }

    pub fn availability_score(&self, task: &Task) -> f64 {
        policy::availability_score(&self.state, task, self.n_floors, &self.config)
    }

    /// Queues a task on this car, merging it into a compatible stop when possible.
    pub fn assign(&mut self, task: Task) {
        self.refresh();
        if self.state.holds(&task) {
            return;
        }

        match self.state.pending.iter().position(|p| p.is_combinable(&task)) {
            Some(index) => {
                let combined = self.state.pending[index].combine(&task);
                if combined == self.state.pending[index] {
                    // Already covered by the merged stop
                    return;
                }
                debug!("Combined {:?} into {:?}", task, combined);
                if self.state.holds(&combined) {
                    self.state.pending.remove(index);
                } else {
                    self.state.pending[index] = combined;
                }
            }
            None => self.state.pending.push(task),
        }

        self.reorder();
    }

    pub fn on_idle(&mut self) {
        self.refresh();

        if let Some(task) = self.state.ongoing {
            if task.floor as f64 == self.state.position {
                self.complete_ongoing();
            } else {
                // Host lost the destination, send it again
                self.car.go_to_floor(task.floor, false);
                return;
            }
        }

        self.reorder();
        if self.state.pending.is_empty() {
            self.set_indicator(Indicator::Both);
            return;
        }

        let task = self.state.pending.remove(0);
        self.state.ongoing = Some(task);
        self.run_ongoing();
    }

    pub fn on_floor_button_pressed(&mut self, floor: u8) {
        if !self.in_range(floor) {
            return;
        }
        self.assign(Task::dropoff(floor));
    }

    pub fn on_passing_floor(&mut self, floor: u8, heading: Heading) {
        if !self.in_range(floor) {
            return;
        }
        self.refresh();
        self.state.position = floor as f64;
        self.state.heading = Some(heading);

        if self.state.load_fraction >= self.config.acceptance_load_threshold {
            return;
        }
        if self.car.destination_queue().first() == Some(&floor) {
            return;
        }

        let index = self
            .state
            .pending
            .iter()
            .position(|task| task.floor == floor && task.direction.matches(heading));
        if let Some(index) = index {
            self.prioritize(index);
        }
    }

    /// Completes the stops served at `floor` and lowers the matching hall calls.
    pub fn on_stopped_at_floor(&mut self, floor: u8, registry: &mut FloorRegistry) {
        if !self.in_range(floor) {
            return;
        }
        self.refresh();
        self.state.position = floor as f64;

        let arrived = self.state.ongoing.filter(|task| task.floor == floor);
        if arrived.is_some() {
            self.complete_ongoing();
        }
        self.reorder();

        // Passengers of a directed call board the way they asked to go
        let indicator = match arrived {
            Some(task) if task.direction != Direction::Either => Indicator::from(task.direction),
            _ => self.departure_indicator(floor),
        };
        let (served, remaining): (Vec<Task>, Vec<Task>) =
            self.state.pending.iter().partition(|task| {
                task.floor == floor && is_served_by(task.direction, indicator)
            });
        self.state.pending = remaining;
        self.record_served(served);

        let top = self.n_floors.saturating_sub(1);
        if indicator.allows(Heading::Up) || floor == 0 {
            registry.clear(floor, Heading::Up);
        }
        if indicator.allows(Heading::Down) || floor == top {
            registry.clear(floor, Heading::Down);
        }

        self.set_indicator(indicator);
        debug!(
            "Car stopped at floor {} showing {:?}, pending {:?}",
            floor, indicator, self.state.pending
        );
    }

    // Next stop decides the lamps; a stop at this floor counts by its direction.
    fn departure_indicator(&self, floor: u8) -> Indicator {
        if let Some(task) = self.state.ongoing {
            return match Heading::between(floor as f64, task.floor as f64) {
                Some(heading) => Indicator::from(Direction::from(heading)),
                None => Indicator::Both,
            };
        }

        for task in &self.state.pending {
            match Heading::between(floor as f64, task.floor as f64) {
                Some(heading) => return Indicator::from(Direction::from(heading)),
                None if task.direction != Direction::Either => {
                    return Indicator::from(task.direction)
                }
                None => continue,
            }
        }
        Indicator::Both
    }

    fn prioritize(&mut self, index: usize) {
        let task = self.state.pending.remove(index);
        if let Some(previous) = self.state.ongoing.replace(task) {
            self.requeue(previous);
        }
        debug!("Prioritizing {:?} while passing", task);

        self.set_indicator(Indicator::from(task.direction));
        self.car.go_to_floor(task.floor, true);
        self.reorder();
    }

    fn requeue(&mut self, task: Task) {
        if !self.state.pending.contains(&task) {
            self.state.pending.push(task);
        }
    }

    fn run_ongoing(&mut self) {
        if let Some(task) = self.state.ongoing {
            debug!("Starting {:?}", task);
            self.set_indicator(Indicator::from(task.direction));
            self.car.go_to_floor(task.floor, false);
        }
    }

    fn complete_ongoing(&mut self) {
        if let Some(task) = self.state.ongoing.take() {
            self.record_served(vec![task]);
        }
    }

    fn record_served(&mut self, tasks: Vec<Task>) {
        self.state.served.extend(tasks);
        let excess = self
            .state
            .served
            .len()
            .saturating_sub(self.config.served_history);
        self.state.served.drain(..excess);
    }

    fn reorder(&mut self) {
        if self.state.pending.len() < self.config.reorder_min_len {
            return;
        }
        let ordered =
            schedule::rearrange(&self.state.pending, self.state.position, self.state.sweep());
        if ordered != self.state.pending {
            debug!(
                "Reordered queue to {:?} ({} reversals)",
                ordered.iter().map(|task| task.floor).collect::<Vec<u8>>(),
                schedule::reversals(&ordered, self.state.position)
            );
            self.state.pending = ordered;
        }
    }

    fn set_indicator(&mut self, indicator: Indicator) {
        self.state.indicator = indicator;
        let (up, down) = indicator.lamps();
        self.car.set_indicators(up, down);
    }

    /// Pulls load, capacity and position from the host car.
    pub fn refresh(&mut self) {
        self.state.load_fraction = self.car.load_factor();
        self.state.capacity = self.car.capacity();
        let floor = self.car.current_floor();
        if floor < self.n_floors {
            self.state.position = floor as f64;
        }
    }

    fn in_range(&self, floor: u8) -> bool {
        if floor >= self.n_floors {
            warn!("Ignoring car event for unknown floor {}", floor);
            return false;
        }
        true
    }
}

fn is_served_by(direction: Direction, indicator: Indicator) -> bool {
    match direction {
        Direction::Up => indicator.allows(Heading::Up),
        Direction::Down => indicator.allows(Heading::Down),
        Direction::Either => true,
    }
}
