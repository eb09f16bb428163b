pub mod macros;
pub mod structs;

pub use structs::Direction;
pub use structs::Heading;
pub use structs::Indicator;
pub use structs::TaskKind;
