use crate::config::DispatchConfig;
use crate::elevator::CarState;
use crate::shared::{Direction, Heading};
use crate::task::Task;

/**
 * Scores how well a car can take on a new hall call. Higher is better.
 *
 * The score is the product of three terms:
 * - spare capacity, `(1 - load) * capacity`, zero once the car is full;
 * - direction continuity, `n_floors / 2 - |ongoing - requested|` (at least
 *   `min_continuity`) when the car's ongoing task already carries it towards
 *   the requested floor in the requested direction, otherwise 1;
 * - congestion, the share of floors not already occupied by pending stops.
 */
pub fn availability_score(
    state: &CarState,
    task: &Task,
    n_floors: u8,
    config: &DispatchConfig,
) -> f64 {
    let spare = spare_capacity(state);
    if spare <= 0.0 {
        return 0.0;
    }
    spare * continuity(state, task, n_floors, config) * congestion(state, n_floors)
}

fn spare_capacity(state: &CarState) -> f64 {
    if state.load_fraction >= 1.0 {
        return 0.0;
    }
    (1.0 - state.load_fraction.max(0.0)) * state.capacity as f64
}

fn continuity(state: &CarState, task: &Task, n_floors: u8, config: &DispatchConfig) -> f64 {
    let ongoing = match state.ongoing {
        Some(ongoing) => ongoing,
        None => return 1.0,
    };
    let heading = match Heading::between(state.position, ongoing.floor as f64) {
        Some(heading) => heading,
        None => return 1.0,
    };
    if task.direction != Direction::from(heading) {
        return 1.0;
    }

    let requested = task.floor as f64;
    let ahead = match heading {
        Heading::Up => requested >= state.position,
        Heading::Down => requested <= state.position,
    };
    if !ahead {
        return 1.0;
    }

    let distance = (ongoing.floor as f64 - requested).abs();
    (n_floors as f64 / 2.0 - distance).max(config.min_continuity)
}

fn congestion(state: &CarState, n_floors: u8) -> f64 {
    let floors = n_floors as usize;
    if floors == 0 {
        return 0.0;
    }
    (floors - state.pending.len().min(floors)) as f64 / floors as f64
}
