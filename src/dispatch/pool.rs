/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::{Car, CarAgent, CarState};
use crate::task::Task;

/**
 * All cars of the building.
 *
 * The pool answers whether a hall call is already being served anywhere and
 * hands new calls to the most available car. It does not decide on its own
 * whether a call is a duplicate; that check belongs to the controller.
 */
pub struct CarPool<C: Car> {
    cars: Vec<CarAgent<C>>,
}

impl<C: Car> CarPool<C> {
    pub fn new(cars: Vec<CarAgent<C>>) -> CarPool<C> {
        CarPool { cars }
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn car(&self, index: usize) -> Option<&CarAgent<C>> {
        self.cars.get(index)
    }

    pub fn car_mut(&mut self, index: usize) -> Option<&mut CarAgent<C>> {
        self.cars.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CarAgent<C>> {
        self.cars.iter()
    }

    pub fn snapshots(&self) -> Vec<CarState> {
        self.cars.iter().map(|car| car.state().clone()).collect()
    }

    /// True if any car has `task` queued or in flight.
    pub fn is_handled(&self, task: &Task) -> bool {
        self.cars.iter().any(|car| car.holds(task))
    }

    /// Assigns `task` to the highest scoring car, ties going to the lowest
    /// index. Returns the chosen car, none only for an empty pool.
    pub fn find_and_assign(&mut self, task: Task) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, car) in self.cars.iter_mut().enumerate() {
            car.refresh();
            let score = car.availability_score(&task);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        match best {
            Some((index, score)) => {
                debug!("Assigning {:?} to car {} (score {:.3})", task, index, score);
                self.cars[index].assign(task);
                Some(index)
            }
            None => {
                warn!("No cars available for {:?}", task);
                None
            }
        }
    }
}
