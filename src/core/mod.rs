pub mod conversion;
pub mod parser;
pub mod session;
pub mod units;

pub use crate::domain::model::{Registry, Volume};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
