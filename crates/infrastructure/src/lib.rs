pub mod dynamodb;
pub mod memory;
pub mod repositories;

pub use dynamodb::*;
pub use memory::*;
pub use repositories::*;
