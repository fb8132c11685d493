//! diet-daily-e2e - verify a running Diet Daily web app in a real browser

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgAction, Parser};
use tracing::{error, info};

use dietdaily_e2e::runner::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};
use dietdaily_e2e::{
    Browser, BrowserKind, E2eResult, PlaywrightBrowser, PlaywrightConfig, ProbeProfile, RunnerConfig, TestReport,
    TestRunner, Timeouts,
};

const EXIT_ABORTED: u8 = 1;
const EXIT_FATAL: u8 = 2;

#[derive(Parser)]
#[command(name = "diet-daily-e2e")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the app under test
    #[arg(long, env = "DIET_DAILY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory for screenshots and the JSON report
    #[arg(short, long, env = "DIET_DAILY_E2E_OUTPUT", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// YAML file overriding candidate selectors
    #[arg(long, env = "DIET_DAILY_E2E_PROFILE")]
    profile: Option<PathBuf>,

    /// Browser engine: chromium, firefox or webkit
    #[arg(long, env = "DIET_DAILY_E2E_BROWSER", default_value = "chromium")]
    browser: BrowserKind,

    /// Run without a visible window
    #[arg(long, env = "DIET_DAILY_E2E_HEADLESS", default_value_t = true, action = ArgAction::Set)]
    headless: bool,

    #[arg(long, env = "DIET_DAILY_E2E_VIEWPORT_WIDTH", default_value_t = 1920)]
    viewport_width: u32,

    #[arg(long, env = "DIET_DAILY_E2E_VIEWPORT_HEIGHT", default_value_t = 1080)]
    viewport_height: u32,

    /// Directory where node resolves `playwright` from
    #[arg(long, env = "DIET_DAILY_E2E_NODE_DIR", default_value = ".")]
    node_dir: PathBuf,

    /// Navigation timeout in seconds
    #[arg(long, env = "DIET_DAILY_E2E_NAVIGATION_TIMEOUT", default_value_t = 30)]
    navigation_timeout: u64,

    /// How long a new entry may take to reach the dashboard, in milliseconds
    #[arg(long, env = "DIET_DAILY_E2E_SYNC_BUDGET_MS", default_value_t = 5000)]
    sync_budget_ms: u64,

    /// Seconds to wait for the app to answer HTTP before launching a browser
    #[arg(long, env = "DIET_DAILY_E2E_REACHABILITY_TIMEOUT", default_value_t = 10)]
    reachability_timeout: u64,

    /// Skip the HTTP reachability check
    #[arg(long, env = "DIET_DAILY_E2E_SKIP_PRECHECK")]
    skip_precheck: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(report) if report.summary.aborted => ExitCode::from(EXIT_ABORTED),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            println!("❌ {}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

async fn run(cli: Cli) -> E2eResult<TestReport> {
    let profile = match &cli.profile {
        Some(path) => {
            info!("Loading probe profile from {}", path.display());
            ProbeProfile::from_file(path)?
        }
        None => ProbeProfile::default(),
    };

    let config = RunnerConfig {
        base_url: cli.base_url.clone(),
        output_dir: cli.output_dir.clone(),
        timeouts: Timeouts {
            navigation: Duration::from_secs(cli.navigation_timeout),
            sync_budget: Duration::from_millis(cli.sync_budget_ms),
            ..Timeouts::default()
        },
        profile,
        reachability_timeout: (!cli.skip_precheck).then(|| Duration::from_secs(cli.reachability_timeout)),
    };

    let runner = TestRunner::new(config);
    runner.prepare()?;

    if let Err(e) = runner.precheck().await {
        error!("{}", e);
        let report = runner.unreachable_report(&e);
        let path = runner.write_report(&report)?;
        report.print_summary();
        println!("📄 Report: {}", path.display());
        return Ok(report);
    }

    let browser = PlaywrightBrowser::launch(PlaywrightConfig {
        browser: cli.browser,
        headless: cli.headless,
        viewport_width: cli.viewport_width,
        viewport_height: cli.viewport_height,
        working_dir: cli.node_dir,
        ..PlaywrightConfig::default()
    })
    .await?;

    let report = runner.run(&browser).await;

    if let Err(e) = browser.close().await {
        error!("Failed to close browser: {}", e);
    }

    let path = runner.write_report(&report)?;
    report.print_summary();
    println!("📄 Report: {}", path.display());

    Ok(report)
}
