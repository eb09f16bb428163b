/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::cmp::Reverse;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Heading};
use crate::task::Task;

/**
 * Orders a car's pending tasks as one sweep in each direction.
 *
 * Tasks are split into those above and those below `position`. A task at the
 * current floor joins the side its direction points to, or goes first when it
 * has no direction. If every task lies on one side the queue is simply sorted
 * towards it. Otherwise the car finishes the side named by `sweep` first and
 * then turns around once. Only when no sweep is known does the side whose
 * farthest stop was queued earliest go first.
 *
 * The sort is stable, so tasks sharing a floor keep their relative order.
 */
pub fn rearrange(queue: &[Task], position: f64, sweep: Option<Heading>) -> Vec<Task> {
    let mut here = Vec::new();
    let mut above = Vec::new();
    let mut below = Vec::new();

    for task in queue {
        match Heading::between(position, task.floor as f64) {
            Some(Heading::Up) => above.push(*task),
            Some(Heading::Down) => below.push(*task),
            None => match task.direction {
                Direction::Up => above.push(*task),
                Direction::Down => below.push(*task),
                Direction::Either => here.push(*task),
            },
        }
    }

    above.sort_by_key(|task| task.floor);
    below.sort_by_key(|task| Reverse(task.floor));

    let up_first = if below.is_empty() {
        true
    } else if above.is_empty() {
        false
    } else {
        match sweep {
            Some(heading) => heading == Heading::Up,
            None => first_sweep(queue, &above, &below) == Heading::Up,
        }
    };

    let mut ordered = here;
    if up_first {
        ordered.extend(above);
        ordered.extend(below);
    } else {
        ordered.extend(below);
        ordered.extend(above);
    }
    ordered
}

// Side whose farthest stop appears first in arrival order. Both sides are non-empty.
fn first_sweep(queue: &[Task], above: &[Task], below: &[Task]) -> Heading {
    let top = above.last().map(|task| task.floor);
    let bottom = below.last().map(|task| task.floor);

    let top_index = queue.iter().position(|task| Some(task.floor) == top);
    let bottom_index = queue.iter().position(|task| Some(task.floor) == bottom);

    match (top_index, bottom_index) {
        (Some(up), Some(down)) if down < up => Heading::Down,
        _ => Heading::Up,
    }
}

/// Number of times the travel direction flips when visiting `queue` in order
/// starting at `position`. Stops at the current floor do not count.
pub fn reversals(queue: &[Task], position: f64) -> usize {
    let mut current = position;
    let mut last: Option<Heading> = None;
    let mut count = 0;

    for task in queue {
        let next = task.floor as f64;
        if let Some(heading) = Heading::between(current, next) {
            if last.map_or(false, |previous| previous != heading) {
                count += 1;
            }
            last = Some(heading);
        }
        current = next;
    }
    count
}
