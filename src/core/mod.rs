pub mod array;
pub mod brand;
pub mod delay;
pub mod numeric;
pub mod random;
pub mod template;
pub mod values;

pub use crate::domain::model::Unknown;
pub use crate::domain::ports::RandomSource;
pub use crate::utils::error::Result;
