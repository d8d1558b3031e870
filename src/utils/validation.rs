use crate::utils::error::{RosterError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(record: &str, field: &str, value: &str, reason: impl Into<String>) -> RosterError {
    RosterError::InvalidStaticData {
        record: record.to_string(),
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn slug_pattern() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"))
}

pub fn validate_non_empty_string(record: &str, field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            record,
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_slug(record: &str, field_name: &str, slug: &str) -> Result<()> {
    if !slug_pattern().is_match(slug) {
        return Err(invalid(
            record,
            field_name,
            slug,
            "Slug must be lowercase letters and digits separated by single hyphens",
        ));
    }
    Ok(())
}

/// Accepts site-relative paths (`/talent/a.jpg`) and absolute http(s) URLs.
pub fn validate_image_ref(record: &str, field_name: &str, image: &str) -> Result<()> {
    if image.is_empty() {
        return Err(invalid(record, field_name, image, "Image reference cannot be empty"));
    }

    if image.starts_with('/') {
        return Ok(());
    }

    match Url::parse(image) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                record,
                field_name,
                image,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            record,
            field_name,
            image,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_non_empty_list<T>(record: &str, field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(invalid(record, field_name, "[]", "At least one value is required"));
    }
    Ok(())
}

/// Returns the first value that appears more than once.
pub fn find_duplicate<'a, T, I>(values: I) -> Option<&'a T>
where
    T: Eq + Hash + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    values.into_iter().find(|value| !seen.insert(*value))
}
