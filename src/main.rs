use clap::Parser;
use std::io::Write;
use talent_roster::core::export::write_profile;
use talent_roster::utils::{logger, validation::Validate};
use talent_roster::{
    write_listing, Category, CliConfig, OutputFormat, RosterError, TalentDirectory,
    FEATURED_LIMIT,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting talent-roster CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("talent-roster failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(exit_code(&e));
    }
}

fn exit_code(e: &RosterError) -> i32 {
    match e {
        RosterError::NotFound { .. } => 2,
        e if e.is_data_defect() => 3,
        _ => 1,
    }
}

fn run(config: &CliConfig) -> talent_roster::Result<()> {
    config.validate()?;

    // the roster is built and validated once; every query below only reads it
    let directory = match &config.roster {
        Some(path) => TalentDirectory::from_file(path)?,
        None => TalentDirectory::builtin()?,
    };

    let clock = config.clock()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Some(slug) = &config.slug {
        let talent = directory.require_by_slug(slug)?;
        return write_profile(&mut out, talent, clock.as_ref(), config.format);
    }

    if config.slugs {
        let slugs = directory.all_slugs();
        match config.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &slugs)?;
                writeln!(out)?;
            }
            OutputFormat::Table | OutputFormat::Csv => {
                for slug in slugs {
                    writeln!(out, "{}", slug)?;
                }
            }
        }
        return Ok(());
    }

    if config.categories {
        for category in Category::ALL {
            let info = category.info();
            writeln!(out, "{:<10} {}", info.label, info.description)?;
        }
        return Ok(());
    }

    let results = if config.featured {
        directory.featured(FEATURED_LIMIT)
    } else {
        directory.search(&config.query()?)
    };

    write_listing(&mut out, &results, clock.as_ref(), config.format)?;

    if results.is_empty() && config.format == OutputFormat::Table {
        eprintln!("No talent matches the current filters.");
        eprintln!("Run again without --gender, --category and --search to see the full roster.");
    }

    Ok(())
}
