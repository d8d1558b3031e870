use crate::domain::model::TalentRecord;
use crate::utils::error::{RosterError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// On-disk roster: one `[[talent]]` table per record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterFile {
    #[serde(default)]
    pub talent: Vec<TalentRecord>,
}

impl RosterFile {
    /// Loads a roster from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a roster from a TOML string, expanding `${VAR}` references first
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Self::from_toml_str_verbatim(&processed_content)
    }

    /// Parses a roster exactly as written; the environment is never consulted.
    pub fn from_toml_str_verbatim(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RosterError::RosterParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Category, Gender, PortfolioKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
[[talent]]
id = "10"
slug = "ada-stone"
name = "Ada Stone"
gender = "non-binary"
birth_date = "2001-05-18"
categories = ["music"]
short_bio = "Producer and vocalist."
full_bio = "Ada Stone writes, produces and performs."
primary_photo = "/talent/ada.jpg"
"#;

    #[test]
    fn test_parse_minimal_record() {
        let file = RosterFile::from_toml_str(MINIMAL).unwrap();
        assert_eq!(file.talent.len(), 1);

        let ada = &file.talent[0];
        assert_eq!(ada.gender, Gender::NonBinary);
        assert_eq!(ada.categories, vec![Category::Music]);
        assert!(ada.active, "active defaults to true");
        assert!(!ada.featured);
        assert!(ada.photos.is_empty());
        assert!(ada.socials.links().is_empty());
        assert_eq!(ada.height, None);
        assert_eq!(ada.portfolio, None);
    }

    #[test]
    fn test_parse_portfolio_and_socials() {
        let content = format!(
            r#"{MINIMAL}
[talent.socials]
spotify = "https://spotify.com/artist/adastone"

[[talent.portfolio]]
image = "/talent/ada-cover.jpg"
title = "Album Cover Art"
type = "collaboration"
brand = "Atlantic Records"
"#
        );

        let file = RosterFile::from_toml_str(&content).unwrap();
        let ada = &file.talent[0];
        assert_eq!(
            ada.socials.spotify.as_deref(),
            Some("https://spotify.com/artist/adastone")
        );

        let portfolio = ada.portfolio.as_ref().unwrap();
        assert_eq!(portfolio[0].kind, PortfolioKind::Collaboration);
        assert_eq!(portfolio[0].brand.as_deref(), Some("Atlantic Records"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let content = MINIMAL.replace(r#"["music"]"#, r#"["dancing"]"#);
        let err = RosterFile::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, RosterError::RosterParseError { .. }));
        assert!(err.is_data_defect());
    }

    #[test]
    fn test_bad_birth_date_rejected() {
        let content = MINIMAL.replace("2001-05-18", "18/05/2001");
        assert!(RosterFile::from_toml_str(&content).is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TALENT_ROSTER_TEST_PHOTO_HOST", "https://cdn.example.com");

        let content = MINIMAL.replace("/talent/ada.jpg", "${TALENT_ROSTER_TEST_PHOTO_HOST}/ada.jpg");
        let file = RosterFile::from_toml_str(&content).unwrap();
        assert_eq!(file.talent[0].primary_photo, "https://cdn.example.com/ada.jpg");

        std::env::remove_var("TALENT_ROSTER_TEST_PHOTO_HOST");
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let content = MINIMAL.replace("/talent/ada.jpg", "${TALENT_ROSTER_UNSET_VAR}/ada.jpg");
        let file = RosterFile::from_toml_str(&content).unwrap();
        assert_eq!(file.talent[0].primary_photo, "${TALENT_ROSTER_UNSET_VAR}/ada.jpg");
    }

    #[test]
    fn test_verbatim_parse_ignores_environment() {
        std::env::set_var("TALENT_ROSTER_TEST_VERBATIM_HOST", "https://cdn.example.com");

        let content = MINIMAL.replace("/talent/ada.jpg", "${TALENT_ROSTER_TEST_VERBATIM_HOST}/ada.jpg");
        let file = RosterFile::from_toml_str_verbatim(&content).unwrap();
        assert_eq!(
            file.talent[0].primary_photo,
            "${TALENT_ROSTER_TEST_VERBATIM_HOST}/ada.jpg"
        );

        std::env::remove_var("TALENT_ROSTER_TEST_VERBATIM_HOST");
    }

    #[test]
    fn test_misspelled_record_key_rejected() {
        let content = format!("{MINIMAL}acitve = false\n");
        let err = RosterFile::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, RosterError::RosterParseError { .. }));
    }

    #[test]
    fn test_unknown_top_level_table_rejected() {
        let content = format!("{MINIMAL}\n[[talnet]]\nid = \"11\"\n");
        assert!(RosterFile::from_toml_str(&content).is_err());
    }

    #[test]
    fn test_roster_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(MINIMAL.as_bytes()).unwrap();

        let file = RosterFile::from_file(temp_file.path()).unwrap();
        assert_eq!(file.talent[0].slug, "ada-stone");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RosterFile::from_file("/definitely/not/a/roster.toml").unwrap_err();
        assert!(matches!(err, RosterError::IoError(_)));
    }
}
