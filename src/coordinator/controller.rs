/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::coordinator::HostEvent;
use crate::dispatch::CarPool;
use crate::elevator::{Car, CarAgent};
use crate::floors::FloorRegistry;
use crate::task::Task;

/**
 * Composition root of the dispatch core.
 *
 * Routes every host event to the car agent or floor registry it belongs to,
 * and passes sharable tasks from the registry to the car pool. The controller
 * is the only place where a hall call is checked against what the cars
 * already handle.
 *
 * # Fields
 * - `pool`:    All car agents.
 * - `floors`:  Call-button state of every floor.
 */
pub struct Controller<C: Car> {
    pool: CarPool<C>,
    floors: FloorRegistry,
}

impl<C: Car> Controller<C> {
    pub fn new(pool: CarPool<C>, floors: FloorRegistry) -> Controller<C> {
        Controller { pool, floors }
    }

    /// Wraps the host cars in agents configured from `config`.
    pub fn from_config(cars: Vec<C>, config: &Config) -> Controller<C> {
        let n_floors = config.building.n_floors;
        let agents = cars
            .into_iter()
            .map(|car| CarAgent::new(car, &config.dispatch, n_floors))
            .collect();

        info!(
            "Controller started with {} cars over {} floors",
            config.building.n_cars, n_floors
        );
        Controller::new(CarPool::new(agents), FloorRegistry::new(n_floors))
    }

    pub fn pool(&self) -> &CarPool<C> {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut CarPool<C> {
        &mut self.pool
    }

    pub fn floors(&self) -> &FloorRegistry {
        &self.floors
    }

    /// Dispatches a hall call unless some car already handles it.
    /// Returns the car it was given to.
    pub fn on_sharable_task(&mut self, task: Task) -> Option<usize> {
        if self.pool.is_handled(&task) {
            debug!("Dropping duplicate {:?}", task);
            return None;
        }
        self.pool.find_and_assign(task)
    }

    pub fn handle_event(&mut self, event: HostEvent) {
        if let Some(car) = event.car() {
            if car >= self.pool.len() {
                warn!("Ignoring {:?} for unknown car", event);
                return;
            }
        }

        match event {
            HostEvent::Idle { car } => {
                if let Some(agent) = self.pool.car_mut(car) {
                    agent.on_idle();
                }
            }

            HostEvent::FloorButtonPressed { car, floor } => {
                if let Some(agent) = self.pool.car_mut(car) {
                    agent.on_floor_button_pressed(floor);
                }
            }

            HostEvent::PassingFloor {
                car,
                floor,
                direction,
            } => {
                if let Some(agent) = self.pool.car_mut(car) {
                    agent.on_passing_floor(floor, direction);
                }
            }

            HostEvent::StoppedAtFloor { car, floor } => {
                if let Some(agent) = self.pool.car_mut(car) {
                    agent.on_stopped_at_floor(floor, &mut self.floors);
                }
            }

            HostEvent::UpButtonPressed { floor } => {
                if let Some(task) = self.floors.on_up_button_pressed(floor) {
                    self.on_sharable_task(task);
                }
            }

            HostEvent::DownButtonPressed { floor } => {
                if let Some(task) = self.floors.on_down_button_pressed(floor) {
                    self.on_sharable_task(task);
                }
            }
        }
    }
}
