pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::roster_file::RosterFile;
pub use crate::core::age::{calculate_age, calculate_age_str, FixedClock, SystemClock};
pub use crate::core::directory::{TalentDirectory, FEATURED_LIMIT};
pub use crate::core::export::{write_listing, OutputFormat};
pub use crate::core::metrics::{format_number, DisplayMetrics};
pub use crate::core::query::TalentQuery;
pub use domain::model::{
    Category, CategoryInfo, Gender, PortfolioItem, PortfolioKind, SocialPlatform, Socials,
    TalentRecord,
};
pub use domain::ports::Clock;
pub use utils::error::{Result, RosterError};
