pub mod registry;

pub use registry::FloorRegistry;
