use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::ports::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::NonBinary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NonBinary => "non-binary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-Binary",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown gender '{}' (expected male, female or non-binary)", s))
    }
}

/// Activity tag describing what a person on the roster does professionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Acting,
    Modeling,
    Music,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub description: &'static str,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Acting, Category::Modeling, Category::Music];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Acting => "acting",
            Category::Modeling => "modeling",
            Category::Music => "music",
        }
    }

    pub fn info(&self) -> CategoryInfo {
        match self {
            Category::Acting => CategoryInfo {
                label: "Acting",
                description: "Film, television, commercials, and digital content",
            },
            Category::Modeling => CategoryInfo {
                label: "Modeling",
                description: "Fashion, commercial, editorial, and brand campaigns",
            },
            Category::Music => CategoryInfo {
                label: "Music",
                description: "Recording artists, producers, and performers",
            },
        }
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category '{}' (expected acting, modeling or music)", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioKind {
    Modeling,
    Collaboration,
    Campaign,
    Editorial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioItem {
    pub image: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PortfolioKind,
    pub brand: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Instagram,
    TikTok,
    Snapchat,
    YouTube,
    Twitter,
    Spotify,
    Website,
}

impl SocialPlatform {
    /// Key of the platform in a roster file's `[talent.socials]` table.
    pub fn key(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::TikTok => "tiktok",
            SocialPlatform::Snapchat => "snapchat",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Spotify => "spotify",
            SocialPlatform::Website => "website",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::TikTok => "TikTok",
            SocialPlatform::Snapchat => "Snapchat",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::Twitter => "X",
            SocialPlatform::Spotify => "Spotify",
            SocialPlatform::Website => "Website",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink<'a> {
    pub platform: SocialPlatform,
    pub url: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Socials {
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub snapchat: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub spotify: Option<String>,
    pub website: Option<String>,
}

impl Socials {
    /// Present platforms only, in display order.
    pub fn links(&self) -> Vec<SocialLink<'_>> {
        [
            (SocialPlatform::Instagram, &self.instagram),
            (SocialPlatform::TikTok, &self.tiktok),
            (SocialPlatform::Snapchat, &self.snapchat),
            (SocialPlatform::YouTube, &self.youtube),
            (SocialPlatform::Twitter, &self.twitter),
            (SocialPlatform::Spotify, &self.spotify),
            (SocialPlatform::Website, &self.website),
        ]
        .into_iter()
        .filter_map(|(platform, url)| url.as_deref().map(|url| SocialLink { platform, url }))
        .collect()
    }
}

/// One person on the roster.
///
/// Age is never stored; derive it with [`TalentRecord::age`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TalentRecord {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub categories: Vec<Category>,
    pub short_bio: String,
    pub full_bio: String,
    pub primary_photo: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub socials: Socials,
    pub height: Option<String>,
    pub location: Option<String>,
    pub representation: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_active")]
    pub active: bool,
    pub portfolio: Option<Vec<PortfolioItem>>,
    pub notable_work: Option<Vec<String>>,
}

fn default_active() -> bool {
    true
}

impl TalentRecord {
    pub fn age(&self, clock: &(impl Clock + ?Sized)) -> u32 {
        crate::core::age::calculate_age(self.birth_date, clock.today())
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn category_labels(&self) -> Vec<&'static str> {
        self.categories.iter().map(Category::label).collect()
    }

    /// Thumbnail strip shown next to the primary photo: up to three photos after the first.
    pub fn gallery_preview(&self) -> &[String] {
        let end = self.photos.len().min(4);
        self.photos.get(1..end).unwrap_or(&[])
    }

    /// One-line description, e.g. `Duncan Blue, 27 - Acting, Modeling. Versatile actor...`
    pub fn summary(&self, age: u32) -> String {
        format!(
            "{}, {} - {}. {}",
            self.name,
            age,
            self.category_labels().join(", "),
            self.short_bio
        )
    }
}
