use crate::core::age::{FixedClock, SystemClock};
use crate::core::export::OutputFormat;
use crate::core::query::{parse_filter, TalentQuery};
use crate::domain::model::{Category, Gender};
use crate::domain::ports::Clock;
use crate::utils::error::{RosterError, Result};
use crate::utils::validation::Validate;
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "talent-roster")]
#[command(about = "Browse and query the talent roster")]
pub struct CliConfig {
    /// Roster TOML file; the built-in roster is used when omitted
    #[arg(long)]
    pub roster: Option<String>,

    /// male, female, non-binary or all
    #[arg(long, default_value = "all")]
    pub gender: String,

    /// acting, modeling, music or all
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Case-insensitive text matched against name, category and short bio
    #[arg(long, default_value = "")]
    pub search: String,

    /// Show one talent profile
    #[arg(
        long,
        conflicts_with_all = ["slugs", "featured", "categories", "gender", "category", "search"]
    )]
    pub slug: Option<String>,

    /// List the slugs of every public detail page
    #[arg(
        long,
        conflicts_with_all = ["featured", "categories", "gender", "category", "search"]
    )]
    pub slugs: bool,

    /// List the featured highlight subset
    #[arg(long, conflicts_with_all = ["categories", "gender", "category", "search"])]
    pub featured: bool,

    /// List the activity categories with their descriptions
    #[arg(long, conflicts_with_all = ["gender", "category", "search"])]
    pub categories: bool,

    /// Compute ages as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn gender_filter(&self) -> Result<Option<Gender>> {
        parse_filter(&self.gender).map_err(|message| RosterError::ConfigError { message })
    }

    pub fn category_filter(&self) -> Result<Option<Category>> {
        parse_filter(&self.category).map_err(|message| RosterError::ConfigError { message })
    }

    pub fn query(&self) -> Result<TalentQuery> {
        Ok(TalentQuery::new()
            .gender(self.gender_filter()?)
            .category(self.category_filter()?)
            .search(self.search.clone()))
    }

    pub fn clock(&self) -> Result<Box<dyn Clock>> {
        match &self.today {
            Some(today) => {
                let date = NaiveDate::parse_from_str(today, "%Y-%m-%d").map_err(|e| {
                    RosterError::ConfigError {
                        message: format!("--today '{}' is not a YYYY-MM-DD date: {}", today, e),
                    }
                })?;
                Ok(Box::new(FixedClock(date)))
            }
            None => Ok(Box::new(SystemClock)),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.query()?;
        self.clock()?;

        if self.roster.as_deref().is_some_and(|r| r.trim().is_empty()) {
            return Err(RosterError::ConfigError {
                message: "--roster needs a file path".to_string(),
            });
        }

        Ok(())
    }
}
