//! Runs the verification routines in order and assembles the report

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use crate::error::{E2eError, E2eResult};
use crate::page::Browser;
use crate::probe::ProbeProfile;
use crate::report::{Area, RoutineOutcome, TestReport};
use crate::routines::{accessibility, dashboard, error_states, food_diary, responsive, sync, RoutineContext, Timeouts};
use crate::target::wait_until_reachable;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_OUTPUT_DIR: &str = "/tmp/diet-daily-e2e";

/// Configuration for the test runner
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub base_url: String,

    /// Screenshots and the report land here
    pub output_dir: PathBuf,

    pub timeouts: Timeouts,

    pub profile: ProbeProfile,

    /// Poll the target over HTTP for this long before launching a browser.
    /// `None` skips the check.
    pub reachability_timeout: Option<Duration>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeouts: Timeouts::default(),
            profile: ProbeProfile::default(),
            reachability_timeout: Some(Duration::from_secs(10)),
        }
    }
}

/// Main test runner
pub struct TestRunner {
    config: RunnerConfig,
}

impl TestRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn context(&self) -> RoutineContext {
        RoutineContext {
            base_url: self.config.base_url.trim_end_matches('/').to_string(),
            timeouts: self.config.timeouts,
            profile: self.config.profile.clone(),
            screenshot_dir: self.config.output_dir.clone(),
        }
    }

    /// Create the output directory.
    pub fn prepare(&self) -> E2eResult<()> {
        std::fs::create_dir_all(&self.config.output_dir)?;
        Ok(())
    }

    /// HTTP reachability check, if configured.
    pub async fn precheck(&self) -> E2eResult<()> {
        match self.config.reachability_timeout {
            Some(timeout) => wait_until_reachable(&self.config.base_url, timeout).await.map(|_| ()),
            None => Ok(()),
        }
    }

    /// Report for a run that never got as far as a browser.
    pub fn unreachable_report(&self, err: &E2eError) -> TestReport {
        let mut outcome = RoutineOutcome::new(Area::Accessibility);
        outcome.set("app_accessible", false);
        outcome.error("reachability check", err);

        let mut report = TestReport::new(&self.config.base_url);
        report.merge(outcome);
        report.mark_aborted();
        report.finish();
        report
    }

    /// Run every routine in order. If the app is not accessible the
    /// remaining routines are skipped and the report is marked aborted.
    pub async fn run(&self, browser: &dyn Browser) -> TestReport {
        let start = Instant::now();
        let ctx = self.context();
        let mut report = TestReport::new(&self.config.base_url);

        info!("Verifying Diet Daily at {}", ctx.base_url);

        let access = accessibility::run(&ctx, browser).await;
        let accessible = access.findings.flag("app_accessible");
        report.merge(access);

        if !accessible {
            error!("App not accessible at {}, skipping remaining routines", ctx.base_url);
            report.mark_aborted();
            report.finish();
            return report;
        }

        for area in &Area::ALL[1..] {
            info!("Running {} checks...", area);
            let outcome = match area {
                Area::FoodDiary => food_diary::run(&ctx, browser).await,
                Area::Dashboard => dashboard::run(&ctx, browser).await,
                Area::Sync => sync::run(&ctx, browser).await,
                Area::Responsive => responsive::run(&ctx, browser).await,
                Area::ErrorStates => error_states::run(&ctx, browser).await,
                Area::Accessibility => continue,
            };

            if outcome.passed() {
                info!("✓ {} ({} findings)", area, outcome.findings.len());
            } else {
                warn!("✗ {} - {} error(s)", area, outcome.errors.len());
            }
            report.merge(outcome);
        }

        report.finish();
        info!(
            "Run finished in {} ms with {} screenshot(s)",
            start.elapsed().as_millis(),
            report.summary.total_screenshots
        );
        report
    }

    /// Write the report into the output directory.
    pub fn write_report(&self, report: &TestReport) -> E2eResult<PathBuf> {
        report.write_to(self.output_dir())
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_follows_config() {
        let runner = TestRunner::new(RunnerConfig {
            base_url: "http://127.0.0.1:4000/".to_string(),
            output_dir: PathBuf::from("/tmp/out"),
            ..RunnerConfig::default()
        });

        let ctx = runner.context();
        assert_eq!(ctx.url("/dashboard"), "http://127.0.0.1:4000/dashboard");
        assert_eq!(ctx.screenshot_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_unreachable_report_is_aborted() {
        let runner = TestRunner::new(RunnerConfig::default());
        let report = runner.unreachable_report(&E2eError::TargetUnreachable {
            url: DEFAULT_BASE_URL.to_string(),
            attempts: 3,
        });

        assert!(report.summary.aborted);
        assert!(!report.summary.app_accessible);
        assert!(report.summary.completed_at.is_some());
        assert_eq!(report.areas.len(), 1);
        assert_eq!(report.area(Area::Accessibility).unwrap().errors.len(), 1);
    }

    #[tokio::test]
    async fn test_precheck_skipped_when_disabled() {
        let runner = TestRunner::new(RunnerConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            reachability_timeout: None,
            ..RunnerConfig::default()
        });
        assert!(runner.precheck().await.is_ok());
    }
}
