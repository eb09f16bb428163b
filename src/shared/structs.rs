/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Direction a task wants the car to be travelling in when it stops.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Either,
}

impl Direction {
    /// Up and Down are the only pair that can never share a stop.
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (*self, other),
            (Direction::Up, Direction::Down) | (Direction::Down, Direction::Up)
        )
    }

    pub fn matches(&self, heading: Heading) -> bool {
        match *self {
            Direction::Up => heading == Heading::Up,
            Direction::Down => heading == Heading::Down,
            Direction::Either => true,
        }
    }
}

impl From<Heading> for Direction {
    fn from(item: Heading) -> Self {
        match item {
            Heading::Up => Direction::Up,
            Heading::Down => Direction::Down,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Pickup,
    Dropoff,
    Both,
}

/// Physical travel direction of a moving car.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    Up,
    Down,
}

impl Heading {
    /// Heading needed to get from `from` to `to`, none if they are the same floor.
    pub fn between(from: f64, to: f64) -> Option<Heading> {
        if to > from {
            Some(Heading::Up)
        } else if to < from {
            Some(Heading::Down)
        } else {
            None
        }
    }
}

/// Direction lamps shown by a car.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Up,
    Down,
    Both,
    None,
}

impl Indicator {
    /// Lamp pair as `(up, down)`.
    pub fn lamps(&self) -> (bool, bool) {
        match *self {
            Indicator::Up => (true, false),
            Indicator::Down => (false, true),
            Indicator::Both => (true, true),
            Indicator::None => (false, false),
        }
    }

    pub fn allows(&self, heading: Heading) -> bool {
        match *self {
            Indicator::Up => heading == Heading::Up,
            Indicator::Down => heading == Heading::Down,
            Indicator::Both => true,
            Indicator::None => false,
        }
    }
}

impl From<Direction> for Indicator {
    fn from(item: Direction) -> Self {
        match item {
            Direction::Up => Indicator::Up,
            Direction::Down => Indicator::Down,
            Direction::Either => Indicator::None,
        }
    }
}
