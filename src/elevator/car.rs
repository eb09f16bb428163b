/**
 * The car abstraction owned by the host simulation.
 *
 * A `CarAgent` only ever talks to its elevator through this trait. Commands
 * are fire-and-forget: `go_to_floor` queues a destination and returns at once,
 * arrival is reported later as a `stopped_at_floor` event.
 *
 * # Commands
 * - `go_to_floor`:         Append a destination, or put it first when `now` is set.
 * - `set_indicators`:      Light the up and down direction lamps.
 *
 * # Queries
 * - `current_floor`:       Floor the car is at or last passed.
 * - `load_factor`:         Fraction of capacity in use, in `[0, 1]`.
 * - `capacity`:            Maximum number of passengers.
 * - `destination_queue`:   Floors the car is physically going to visit, in order.
 */
pub trait Car {
    fn go_to_floor(&mut self, floor: u8, now: bool);
    fn set_indicators(&mut self, up: bool, down: bool);

    fn current_floor(&self) -> u8;
    fn load_factor(&self) -> f64;
    fn capacity(&self) -> u32;
    fn destination_queue(&self) -> &[u8];
}
