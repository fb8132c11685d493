//! Verification routines, one per functional area
//!
//! Each routine opens its own page(s), probes best-effort, and returns a
//! [`RoutineOutcome`]. A failing step is recorded and the routine moves on;
//! routines never panic or abort the run on their own.

pub mod accessibility;
pub mod dashboard;
pub mod error_states;
pub mod food_diary;
pub mod responsive;
pub mod sync;

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, warn};

use crate::page::{Browser, Page};
use crate::probe::{Probe, ProbeProfile};
use crate::report::{ConsoleEntry, RoutineOutcome, ScreenshotRecord};

/// Time budgets shared by all routines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub navigation: Duration,
    /// Wait for elements a routine expects to be there
    pub element: Duration,
    /// Wait for elements that may legitimately be missing
    pub optional_element: Duration,
    /// Upper bound for an interaction to show an effect
    pub settle: Duration,
    /// How long a new entry may take to show up on the dashboard
    pub sync_budget: Duration,
    pub poll_interval: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            navigation: Duration::from_secs(30),
            element: Duration::from_secs(10),
            optional_element: Duration::from_secs(3),
            settle: Duration::from_secs(2),
            sync_budget: Duration::from_secs(5),
            poll_interval: Duration::from_millis(250),
        }
    }
}

/// Named viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const SCREEN_SIZES: [ScreenSize; 3] = [
    ScreenSize { name: "mobile", width: 375, height: 667 },
    ScreenSize { name: "tablet", width: 768, height: 1024 },
    ScreenSize { name: "desktop", width: 1920, height: 1080 },
];

/// Everything a routine needs besides the browser
#[derive(Debug, Clone)]
pub struct RoutineContext {
    pub base_url: String,
    pub timeouts: Timeouts,
    pub profile: ProbeProfile,
    pub screenshot_dir: PathBuf,
}

impl RoutineContext {
    pub fn new(base_url: &str, screenshot_dir: PathBuf) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeouts: Timeouts::default(),
            profile: ProbeProfile::default(),
            screenshot_dir,
        }
    }

    pub fn url(&self, route: &str) -> String {
        format!("{}/{}", self.base_url, route.trim_start_matches('/'))
    }

    /// Full-page screenshot named `diet_daily_<name>_<unix-seconds>.png`.
    /// A failed capture is recorded as an error, not propagated.
    pub async fn capture(&self, page: &dyn Page, name: &str, outcome: &mut RoutineOutcome) {
        let path = self
            .screenshot_dir
            .join(format!("diet_daily_{}_{}.png", name, Utc::now().timestamp()));

        match page.screenshot(&path, true).await {
            Ok(()) => {
                debug!("Screenshot {} -> {}", name, path.display());
                outcome.screenshots.push(ScreenshotRecord::from_file(name, &path));
            }
            Err(e) => outcome.error(&format!("screenshot {}", name), e),
        }
    }
}

/// Open a page, recording the failure on the outcome.
pub(crate) async fn open_page(browser: &dyn Browser, outcome: &mut RoutineOutcome) -> Option<Box<dyn Page>> {
    match browser.new_page().await {
        Ok(page) => Some(page),
        Err(e) => {
            outcome.error("open page", e);
            None
        }
    }
}

/// Collect console output under `label` and close the page.
pub(crate) async fn release_page(page: Box<dyn Page>, label: &str, outcome: &mut RoutineOutcome) {
    match page.drain_console().await {
        Ok(messages) => outcome
            .console
            .extend(messages.into_iter().map(|m| ConsoleEntry::new(label, m))),
        Err(e) => debug!("No console output for {}: {}", label, e),
    }

    if let Err(e) = page.close().await {
        warn!("Failed to close {} page: {}", label, e);
    }
}

/// A probe that errored is recorded separately from an absent element.
pub(crate) fn note_error(outcome: &mut RoutineOutcome, what: &str, probe: &Probe) {
    if let Some(msg) = probe.error() {
        outcome.error(&format!("probe {}", what), msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_cleanly() {
        let ctx = RoutineContext::new("http://localhost:3001/", PathBuf::from("/tmp"));
        assert_eq!(ctx.url("/food-diary"), "http://localhost:3001/food-diary");
        assert_eq!(ctx.url("dashboard"), "http://localhost:3001/dashboard");
        assert_eq!(ctx.url("/"), "http://localhost:3001/");
    }

    #[test]
    fn test_screen_sizes() {
        let names: Vec<_> = SCREEN_SIZES.iter().map(|s| s.name).collect();
        assert_eq!(names, ["mobile", "tablet", "desktop"]);
        assert_eq!((SCREEN_SIZES[0].width, SCREEN_SIZES[0].height), (375, 667));
    }
}
