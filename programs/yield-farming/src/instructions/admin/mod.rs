pub mod initialize_farm;
pub mod add_pool;

pub use initialize_farm::*;
pub use add_pool::*;
