//! food-catalog - generate and check the Diet Daily medical food catalog

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use tracing::info;

use dietdaily_catalog::{generate, Catalog, CatalogSummary, Collection, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "food-catalog")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Used when no subcommand is given
    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the catalog and write it to disk (default)
    Generate(GenerateArgs),

    /// Check an existing catalog file for stale counts and duplicates
    Check {
        /// Catalog file to check
        path: PathBuf,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Output file; replaced if it exists, its directory must exist
    #[arg(short, long, env = "DIET_DAILY_CATALOG_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Some(Commands::Generate(args)) => run_generate(args),
        Some(Commands::Check { path }) => run_check(path),
        None => run_generate(cli.generate),
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    info!("Generating Diet Daily medical food catalog...");

    let catalog = generate();
    catalog.write_to(&args.output)?;

    println!("✅ Generated {} food items", catalog.metadata.total_items);
    println!("📄 Saved to: {}", args.output.display());
    println!();
    print_summary(&catalog.summary());

    Ok(())
}

fn run_check(path: PathBuf) -> anyhow::Result<()> {
    let catalog = Catalog::load(&path)?;
    let report = catalog.check();

    for warning in &report.warnings {
        println!("⚠️  {}", warning);
    }
    for error in &report.errors {
        eprintln!("❌ {}", error);
    }

    if !report.is_consistent() {
        anyhow::bail!(
            "{} is inconsistent ({} error(s))",
            path.display(),
            report.errors.len()
        );
    }

    println!(
        "✅ {} is consistent: {} items, {} warning(s)",
        path.display(),
        catalog.metadata.total_items,
        report.warnings.len()
    );
    Ok(())
}

fn print_summary(summary: &CatalogSummary) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Collection", "Items"]);

    for collection in Collection::ALL {
        let count = summary.collections.get(&collection).copied().unwrap_or(0);
        table.add_row(vec![collection.label().to_string(), count.to_string()]);
    }
    table.add_row(vec!["Total".to_string(), summary.total_items.to_string()]);
    println!("{table}");

    let mut scores = Table::new();
    scores
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Axis", "Value", "Items"]);

    for (score, count) in summary.ibd_scores.iter().rev() {
        scores.add_row(vec![
            "IBD score".to_string(),
            score.value().to_string(),
            count.to_string(),
        ]);
    }
    for (safety, count) in &summary.chemo_safety {
        scores.add_row(vec![
            "Chemo safety".to_string(),
            safety.as_str().to_string(),
            count.to_string(),
        ]);
    }
    for (level, count) in &summary.fodmap_levels {
        scores.add_row(vec![
            "FODMAP".to_string(),
            level.as_str().to_string(),
            count.to_string(),
        ]);
    }
    println!("{scores}");
}
