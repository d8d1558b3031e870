pub mod age;
pub mod directory;
pub mod export;
pub mod metrics;
pub mod query;

pub use crate::domain::model::{Category, Gender, TalentRecord};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
