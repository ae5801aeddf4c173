pub mod constant;
pub mod curve;
pub mod utils;

pub use constant::*;
pub use curve::*;
pub use utils::*;
