use std::path::Path;

use crate::config::roster_file::RosterFile;
use crate::core::query::{matches_category, matches_gender, TalentQuery};
use crate::domain::model::{Category, Gender, TalentRecord};
use crate::utils::error::{RosterError, Result};
use crate::utils::validation::{find_duplicate, Validate};

/// How many featured records the highlight strip shows.
pub const FEATURED_LIMIT: usize = 4;

const BUILTIN_ROSTER: &str = include_str!("../../data/roster.toml");

/// The validated, read-only roster.
///
/// Built once at startup and shared by reference; nothing mutates it
/// afterwards, so concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct TalentDirectory {
    records: Vec<TalentRecord>,
}

impl TalentDirectory {
    /// Validates every record and the roster as a whole. The first defect aborts construction.
    pub fn new(records: Vec<TalentRecord>) -> Result<Self> {
        let directory = Self { records };
        directory.validate()?;

        tracing::info!(
            "Loaded talent roster: {} records ({} active)",
            directory.records.len(),
            directory.active().count()
        );

        Ok(directory)
    }

    /// The roster shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let file = RosterFile::from_toml_str_verbatim(BUILTIN_ROSTER)?;
        Self::new(file.talent)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::info!("Loading roster from {}", path.as_ref().display());
        let file = RosterFile::from_file(path)?;
        Self::new(file.talent)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file = RosterFile::from_toml_str(content)?;
        Self::new(file.talent)
    }

    /// Every record, active or not, in declaration order.
    pub fn roster(&self) -> &[TalentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn active(&self) -> impl Iterator<Item = &TalentRecord> {
        self.records.iter().filter(|t| t.active)
    }

    /// Looks a record up by slug across the whole roster, including inactive records.
    pub fn get_by_slug(&self, slug: &str) -> Option<&TalentRecord> {
        let found = self.records.iter().find(|t| t.slug == slug);

        match found {
            Some(talent) if !talent.active => {
                tracing::warn!("Resolved inactive talent '{}' by direct slug lookup", slug);
            }
            None => tracing::debug!("No talent with slug '{}'", slug),
            _ => {}
        }

        found
    }

    /// Like [`get_by_slug`](Self::get_by_slug), but inactive records are not found.
    pub fn get_active_by_slug(&self, slug: &str) -> Option<&TalentRecord> {
        self.records.iter().find(|t| t.active && t.slug == slug)
    }

    /// [`get_by_slug`](Self::get_by_slug) with the miss turned into [`RosterError::NotFound`].
    pub fn require_by_slug(&self, slug: &str) -> Result<&TalentRecord> {
        self.get_by_slug(slug).ok_or_else(|| RosterError::NotFound {
            slug: slug.to_string(),
        })
    }

    /// Slugs of active records in declaration order; one detail page per entry.
    pub fn all_slugs(&self) -> Vec<&str> {
        self.active().map(|t| t.slug.as_str()).collect()
    }

    pub fn filter(&self, gender: Option<Gender>, category: Option<Category>) -> Vec<&TalentRecord> {
        let results: Vec<&TalentRecord> = self
            .active()
            .filter(|t| matches_gender(t, gender) && matches_category(t, category))
            .collect();

        tracing::debug!(
            "filter(gender={:?}, category={:?}) -> {} records",
            gender,
            category,
            results.len()
        );

        results
    }

    pub fn search(&self, query: &TalentQuery) -> Vec<&TalentRecord> {
        let results: Vec<&TalentRecord> = self.records.iter().filter(|t| query.matches(t)).collect();

        tracing::debug!("search({:?}) -> {} records", query, results.len());

        results
    }

    /// Active, featured records in declaration order, at most `limit` of them.
    pub fn featured(&self, limit: usize) -> Vec<&TalentRecord> {
        self.active().filter(|t| t.featured).take(limit).collect()
    }
}

impl Validate for TalentRecord {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::{
            validate_image_ref, validate_non_empty_list, validate_non_empty_string, validate_slug,
        };

        let record = self.id.as_str();

        validate_non_empty_string(record, "id", &self.id)?;
        validate_slug(record, "slug", &self.slug)?;
        validate_non_empty_string(record, "name", &self.name)?;

        validate_non_empty_list(record, "categories", &self.categories)?;
        if let Some(dup) = find_duplicate(self.categories.iter()) {
            return Err(RosterError::InvalidStaticData {
                record: record.to_string(),
                field: "categories".to_string(),
                value: dup.to_string(),
                reason: "Category listed more than once".to_string(),
            });
        }

        validate_image_ref(record, "primary_photo", &self.primary_photo)?;
        for photo in &self.photos {
            validate_image_ref(record, "photos", photo)?;
        }
        for item in self.portfolio.iter().flatten() {
            validate_image_ref(record, "portfolio.image", &item.image)?;
            validate_non_empty_string(record, "portfolio.title", &item.title)?;
        }

        for link in self.socials.links() {
            let field = format!("socials.{}", link.platform.key());
            validate_non_empty_string(record, &field, link.url)?;
        }

        Ok(())
    }
}

impl Validate for TalentDirectory {
    fn validate(&self) -> Result<()> {
        for talent in &self.records {
            talent.validate()?;
        }

        if let Some(id) = find_duplicate(self.records.iter().map(|t| t.id.as_str())) {
            return Err(RosterError::DuplicateId { id: id.to_string() });
        }

        if let Some(slug) = find_duplicate(self.records.iter().map(|t| t.slug.as_str())) {
            return Err(RosterError::DuplicateSlug {
                slug: slug.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::age::FixedClock;
    use chrono::NaiveDate;

    fn builtin() -> TalentDirectory {
        TalentDirectory::builtin().expect("built-in roster is valid")
    }

    fn with_inactive() -> TalentDirectory {
        let mut records = builtin().roster().to_vec();
        records[1].active = false;
        TalentDirectory::new(records).unwrap()
    }

    #[test]
    fn test_builtin_roster_loads() {
        let directory = builtin();
        assert_eq!(directory.len(), 9);
        assert_eq!(directory.roster()[0].slug, "duncan-blue");
        assert_eq!(directory.roster()[8].slug, "bradley-buter");
    }

    #[test]
    fn test_get_by_slug() {
        let directory = builtin();

        let duncan = directory.get_by_slug("duncan-blue").unwrap();
        assert_eq!(duncan.slug, "duncan-blue");
        assert_eq!(duncan.name, "Duncan Blue");

        assert!(directory.get_by_slug("nonexistent-slug").is_none());
    }

    #[test]
    fn test_require_by_slug_not_found() {
        let directory = builtin();
        let err = directory.require_by_slug("nonexistent-slug").unwrap_err();
        assert!(matches!(err, RosterError::NotFound { ref slug } if slug == "nonexistent-slug"));
    }

    #[test]
    fn test_inactive_lookup_asymmetry() {
        let directory = with_inactive();

        assert!(directory.get_by_slug("jackson-reed").is_some());
        assert!(directory.get_active_by_slug("jackson-reed").is_none());
        assert!(!directory.all_slugs().contains(&"jackson-reed"));
        assert_eq!(directory.all_slugs().len(), 8);
    }

    #[test]
    fn test_all_slugs_in_declaration_order() {
        let directory = builtin();
        let slugs = directory.all_slugs();
        assert_eq!(
            slugs,
            vec![
                "duncan-blue",
                "jackson-reed",
                "seth-mauer",
                "dieter-hamm",
                "tommee-smith",
                "noah-honeywell",
                "kadale-williams",
                "hollis-mick",
                "bradley-buter",
            ]
        );
    }

    #[test]
    fn test_filter_male_modeling() {
        let directory = builtin();
        let results = directory.filter(Some(Gender::Male), Some(Category::Modeling));

        let slugs: Vec<&str> = results.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "duncan-blue",
                "jackson-reed",
                "seth-mauer",
                "dieter-hamm",
                "noah-honeywell",
                "kadale-williams",
                "bradley-buter",
            ]
        );
        assert!(results
            .iter()
            .all(|t| t.active && t.gender == Gender::Male && t.has_category(Category::Modeling)));
    }

    #[test]
    fn test_filter_unconstrained_returns_active_roster() {
        let directory = with_inactive();
        let results = directory.filter(None, None);
        let expected: Vec<&TalentRecord> = directory.active().collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_filter_unmatched_is_empty() {
        let directory = builtin();
        assert!(directory.filter(Some(Gender::Female), None).is_empty());
    }

    #[test]
    fn test_featured_capped_and_active() {
        let mut records = builtin().roster().to_vec();
        for record in &mut records {
            record.featured = true;
        }
        records[0].active = false;
        let directory = TalentDirectory::new(records).unwrap();

        let featured = directory.featured(FEATURED_LIMIT);
        assert_eq!(featured.len(), FEATURED_LIMIT);
        assert_eq!(featured[0].slug, "jackson-reed");
    }

    #[test]
    fn test_builtin_featured() {
        let directory = builtin();
        let slugs: Vec<&str> = directory
            .featured(FEATURED_LIMIT)
            .iter()
            .map(|t| t.slug.as_str())
            .collect();
        assert_eq!(
            slugs,
            vec!["duncan-blue", "jackson-reed", "dieter-hamm", "kadale-williams"]
        );
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut records = builtin().roster().to_vec();
        records[3].slug = records[0].slug.clone();

        let err = TalentDirectory::new(records).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateSlug { ref slug } if slug == "duncan-blue"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut records = builtin().roster().to_vec();
        records[5].id = "1".to_string();

        let err = TalentDirectory::new(records).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId { ref id } if id == "1"));
    }

    #[test]
    fn test_empty_categories_rejected() {
        let mut records = builtin().roster().to_vec();
        records[2].categories.clear();

        let err = TalentDirectory::new(records).unwrap_err();
        assert!(matches!(
            err,
            RosterError::InvalidStaticData { ref field, .. } if field == "categories"
        ));
    }

    #[test]
    fn test_repeated_category_rejected() {
        let mut records = builtin().roster().to_vec();
        records[2].categories = vec![Category::Acting, Category::Acting];
        assert!(TalentDirectory::new(records).is_err());
    }

    #[test]
    fn test_blank_social_url_names_roster_key() {
        let mut records = builtin().roster().to_vec();
        records[0].socials.twitter = Some("  ".to_string());

        let err = TalentDirectory::new(records).unwrap_err();
        assert!(matches!(
            err,
            RosterError::InvalidStaticData { ref field, .. } if field == "socials.twitter"
        ));
    }

    #[test]
    fn test_bad_slug_rejected() {
        let mut records = builtin().roster().to_vec();
        records[0].slug = "Duncan Blue".to_string();
        assert!(TalentDirectory::new(records).unwrap_err().is_data_defect());
    }

    #[test]
    fn test_queries_are_idempotent() {
        let directory = builtin();
        let query = TalentQuery::new().category(Some(Category::Music)).search("model");

        assert_eq!(directory.search(&query), directory.search(&query));
        assert_eq!(directory.all_slugs(), directory.all_slugs());
        assert_eq!(
            directory.filter(Some(Gender::Male), None),
            directory.filter(Some(Gender::Male), None)
        );
    }

    #[test]
    fn test_record_age_uses_clock() {
        let directory = builtin();
        let duncan = directory.get_by_slug("duncan-blue").unwrap();

        let before = FixedClock(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        let after = FixedClock(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        assert_eq!(duncan.age(&before), 26);
        assert_eq!(duncan.age(&after), 27);
    }
}
