//! Build optimizer CLI
//!
//! Searches attribute distributions and prints the evaluated candidates as
//! JSON, or the cheapest build per gp tier.

use anyhow::{Context, Result};
use build_optimizer::{CandidateRecord, SearchConfig, SearchDriver, SearchResult, SkillCatalog};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Find the cheapest attribute distribution per gp regeneration tier
#[derive(Parser, Debug)]
#[command(name = "build-optimizer")]
#[command(about = "Search attribute distributions for the cheapest skill training cost")]
struct Args {
    /// TOML search configuration (defaults apply when omitted)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Lowest allowed attribute value
    #[arg(long)]
    min: Option<u32>,

    /// Highest allowed attribute value
    #[arg(long)]
    max: Option<u32>,

    /// Required attribute sum
    #[arg(long)]
    sum: Option<u32>,

    /// Discard candidates below this gp tier
    #[arg(long)]
    gp_floor: Option<u32>,

    /// Evaluate candidates on a single thread
    #[arg(long)]
    serial: bool,

    /// What to print
    #[arg(long, value_enum, default_value_t = Format::Candidates)]
    format: Format,

    /// Write output to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// JSON array of every accepted candidate
    Candidates,
    /// JSON array of the cheapest candidate per tier (null for empty tiers)
    Best,
    /// Human-readable summary of the cheapest candidate per tier
    Text,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "build_optimizer=debug"
    } else {
        "build_optimizer=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    let catalog = SkillCatalog::load().context("skill catalog is inconsistent")?;
    let driver = SearchDriver::new(&catalog, config)?;

    let result = driver.run();
    let rendered = render(&result, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Output written");
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::default(),
    };
    if let Some(min) = args.min {
        config.attribute_range[0] = min;
    }
    if let Some(max) = args.max {
        config.attribute_range[1] = max;
    }
    if let Some(sum) = args.sum {
        config.sum_target = sum;
    }
    if let Some(floor) = args.gp_floor {
        config.gp_tier_floor = floor;
    }
    if args.serial {
        config.parallel = false;
    }
    Ok(config)
}

fn render(result: &SearchResult, format: Format) -> Result<String> {
    Ok(match format {
        Format::Candidates => serde_json::to_string(&result.candidates)?,
        Format::Best => serde_json::to_string_pretty(&result.best_by_tier)?,
        Format::Text => render_text(result),
    })
}

fn render_text(result: &SearchResult) -> String {
    let mut out = String::new();
    let stats = result.stats;
    out.push_str(&format!(
        "Candidates: {} enumerated, {} accepted, {} below floor, {} failed\n",
        stats.enumerated, stats.accepted, stats.below_floor, stats.failed
    ));

    for (tier, best) in result.best_by_tier.iter().enumerate() {
        if let Some(record) = best {
            out.push_str(&format!("\n=== gp tier {} ===\n", tier));
            out.push_str(&describe(record));
        }
    }
    out
}

fn describe(record: &CandidateRecord) -> String {
    let b = &record.breakdown;
    let mut out = format!("Attributes: {}\n", record.attributes);
    out.push_str(&format!("Total XP:   {}\n", b.total));
    out.push_str(&format!(
        "  {:<12} level {:>5}\n",
        b.fighting.melee.skill, b.fighting.melee.level
    ));
    out.push_str(&format!(
        "  {:<12} level {:>5}\n",
        b.fighting.defense.skill, b.fighting.defense.level
    ));
    for s in b
        .fighting
        .special
        .skills
        .iter()
        .map(|s| (s.skill.to_string(), s.level))
        .chain(b.magic.methods.skills.iter().map(|s| (s.skill.to_string(), s.level)))
        .chain(b.magic.spells.skills.iter().map(|s| (s.skill.to_string(), s.level)))
    {
        out.push_str(&format!("  {:<12} level {:>5}\n", s.0, s.1));
    }
    out
}
