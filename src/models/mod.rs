pub mod enums;
pub mod parameter;

pub use enums::*;
pub use parameter::*;
