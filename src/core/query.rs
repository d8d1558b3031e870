use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::model::{Category, Gender, TalentRecord};

/// Sentinel accepted wherever a gender or category filter is parsed.
pub const ALL_SENTINEL: &str = "all";

/// Parses a filter value where `all` (any case) means "no constraint".
pub fn parse_filter<T>(value: &str) -> Result<Option<T>, T::Err>
where
    T: FromStr,
{
    if value.eq_ignore_ascii_case(ALL_SENTINEL) {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Listing filter state: gender, category and free-text search, combined with AND.
///
/// The default value is unconstrained and matches every active record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentQuery {
    pub gender: Option<Gender>,
    pub category: Option<Category>,
    #[serde(default)]
    pub search: String,
}

impl TalentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    pub fn category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.gender.is_none() && self.category.is_none() && self.search.is_empty()
    }

    /// Back to the unconstrained defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, talent: &TalentRecord) -> bool {
        talent.active
            && matches_gender(talent, self.gender)
            && matches_category(talent, self.category)
            && matches_search(talent, &self.search)
    }
}

pub(crate) fn matches_gender(talent: &TalentRecord, gender: Option<Gender>) -> bool {
    gender.map_or(true, |g| talent.gender == g)
}

pub(crate) fn matches_category(talent: &TalentRecord, category: Option<Category>) -> bool {
    category.map_or(true, |c| talent.has_category(c))
}

/// Case-insensitive substring match on name, category labels or short bio.
pub fn matches_search(talent: &TalentRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let needle = search.to_lowercase();

    talent.name.to_lowercase().contains(&needle)
        || talent
            .category_labels()
            .iter()
            .any(|label| label.to_lowercase().contains(&needle))
        || talent.short_bio.to_lowercase().contains(&needle)
}
