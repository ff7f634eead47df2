pub mod constants;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use storage::*;
pub use validation::*;
