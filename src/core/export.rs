use std::io::Write;

use serde::Serialize;

use crate::core::metrics::DisplayMetrics;
use crate::domain::model::TalentRecord;
use crate::domain::ports::Clock;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// One line of a talent listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub slug: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub categories: String,
    pub location: String,
    pub featured: bool,
}

impl ListingRow {
    pub fn from_record(talent: &TalentRecord, clock: &(impl Clock + ?Sized)) -> Self {
        Self {
            slug: talent.slug.clone(),
            name: talent.name.clone(),
            age: talent.age(clock),
            gender: talent.gender.label().to_string(),
            categories: talent.category_labels().join(", "),
            location: talent.location.clone().unwrap_or_default(),
            featured: talent.featured,
        }
    }
}

const HEADERS: [&str; 7] = [
    "slug",
    "name",
    "age",
    "gender",
    "categories",
    "location",
    "featured",
];

pub fn write_listing<W: Write>(
    writer: &mut W,
    talent: &[&TalentRecord],
    clock: &(impl Clock + ?Sized),
    format: OutputFormat,
) -> Result<()> {
    let rows: Vec<ListingRow> = talent
        .iter()
        .map(|t| ListingRow::from_record(t, clock))
        .collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &rows)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut *writer);
            csv_writer.write_record(HEADERS)?;
            for row in &rows {
                csv_writer.serialize(row)?;
            }
            csv_writer.flush()?;
        }
        OutputFormat::Table => write_table(writer, &rows)?,
    }

    Ok(())
}

/// Detail view of one record, with its derived fields.
#[derive(Debug, Clone, Serialize)]
pub struct Profile<'a> {
    #[serde(flatten)]
    pub talent: &'a TalentRecord,
    pub age: u32,
    pub summary: String,
    pub metrics: DisplayMetrics,
}

impl<'a> Profile<'a> {
    pub fn new(talent: &'a TalentRecord, clock: &(impl Clock + ?Sized)) -> Self {
        let age = talent.age(clock);
        Self {
            talent,
            age,
            summary: talent.summary(age),
            metrics: DisplayMetrics::for_id(&talent.id),
        }
    }
}

pub fn write_profile<W: Write>(
    writer: &mut W,
    talent: &TalentRecord,
    clock: &(impl Clock + ?Sized),
    format: OutputFormat,
) -> Result<()> {
    let profile = Profile::new(talent, clock);

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &profile)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => write_listing(writer, &[talent], clock, format)?,
        OutputFormat::Table => write_profile_text(writer, &profile)?,
    }

    Ok(())
}

fn write_profile_text<W: Write>(writer: &mut W, profile: &Profile<'_>) -> Result<()> {
    let talent = profile.talent;

    writeln!(writer, "{}", talent.name)?;
    writeln!(writer, "{}", profile.summary)?;
    writeln!(writer)?;
    writeln!(writer, "Age:            {}", profile.age)?;
    writeln!(writer, "Gender:         {}", talent.gender.label())?;
    for (label, value) in [
        ("Height:         ", &talent.height),
        ("Location:       ", &talent.location),
        ("Representation: ", &talent.representation),
    ] {
        if let Some(value) = value {
            writeln!(writer, "{}{}", label, value)?;
        }
    }
    writeln!(
        writer,
        "Stats:          {} views, {} followers, {} likes",
        profile.metrics.video_views, profile.metrics.followers, profile.metrics.likes
    )?;

    writeln!(writer)?;
    writeln!(writer, "{}", talent.full_bio)?;

    let links = talent.socials.links();
    if !links.is_empty() {
        writeln!(writer)?;
        for link in links {
            writeln!(writer, "{:<10} {}", link.platform.label(), link.url)?;
        }
    }

    if let Some(work) = talent.notable_work.as_ref().filter(|w| !w.is_empty()) {
        writeln!(writer)?;
        writeln!(writer, "Notable work: {}", work.join(", "))?;
    }

    if let Some(portfolio) = talent.portfolio.as_ref().filter(|p| !p.is_empty()) {
        writeln!(writer)?;
        writeln!(writer, "Portfolio:")?;
        for item in portfolio {
            match &item.brand {
                Some(brand) => writeln!(writer, "  - {} ({:?}, {})", item.title, item.kind, brand)?,
                None => writeln!(writer, "  - {} ({:?})", item.title, item.kind)?,
            }
        }
    }

    Ok(())
}

fn write_table<W: Write>(writer: &mut W, rows: &[ListingRow]) -> Result<()> {
    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|r| {
            [
                r.slug.clone(),
                r.name.clone(),
                r.age.to_string(),
                r.gender.clone(),
                r.categories.clone(),
                r.location.clone(),
                if r.featured { "yes" } else { "" }.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(str::to_string);
    for line in std::iter::once(&header).chain(cells.iter()) {
        let padded: Vec<String> = line
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        writeln!(writer, "{}", padded.join("  ").trim_end())?;
    }

    Ok(())
}
