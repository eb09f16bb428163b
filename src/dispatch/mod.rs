pub mod policy;
pub mod pool;

pub use policy::availability_score;
pub use pool::CarPool;
