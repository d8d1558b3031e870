use clap::Parser;
use talent_roster::utils::logger;
use talent_roster::{Category, Gender, SystemClock, TalentDirectory, FEATURED_LIMIT};

#[derive(Parser)]
#[command(name = "roster-check")]
#[command(about = "Validate a talent roster file before deploying it")]
struct Args {
    /// Path to the roster TOML file; checks the built-in roster when omitted
    #[arg(short, long)]
    roster: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn main() {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let source = args.roster.as_deref().unwrap_or("built-in roster");
    tracing::info!("🔍 Checking {}", source);

    let loaded = match &args.roster {
        Some(path) => TalentDirectory::from_file(path),
        None => TalentDirectory::builtin(),
    };

    let directory = match loaded {
        Ok(directory) => directory,
        Err(e) => {
            tracing::error!("❌ Roster check failed: {}", e);
            eprintln!("❌ {}: {}", source, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(if e.is_data_defect() { 3 } else { 1 });
        }
    };

    tracing::info!("✅ Roster is valid");
    display_summary(&directory);
}

fn display_summary(directory: &TalentDirectory) {
    let active: Vec<_> = directory.active().collect();

    println!("✅ {} records ({} active)", directory.len(), active.len());

    let featured = directory.featured(usize::MAX).len();
    println!(
        "⭐ {} featured (highlight strip shows {})",
        featured,
        featured.min(FEATURED_LIMIT)
    );

    for category in Category::ALL {
        let count = active.iter().filter(|t| t.has_category(category)).count();
        println!("   {:<10} {}", category.label(), count);
    }

    for gender in Gender::ALL {
        let count = active.iter().filter(|t| t.gender == gender).count();
        println!("   {:<10} {}", gender.label(), count);
    }

    let clock = SystemClock;
    if let Some(youngest) = active.iter().min_by_key(|t| t.age(&clock)) {
        tracing::debug!(
            "Youngest active talent: {} ({})",
            youngest.name,
            youngest.age(&clock)
        );
    }
}
