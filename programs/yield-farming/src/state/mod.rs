pub mod farm;
pub mod pool;
pub mod position;

pub use farm::*;
pub use pool::*;
pub use position::*;
