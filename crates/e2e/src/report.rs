//! Run report: findings per area, screenshots, captured console output

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::error::E2eResult;
use crate::page::{ConsoleMessage, REQUEST_FAILED_LEVEL, RESPONSE_LEVEL};

/// A single observed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FindingValue {
    Bool(bool),
    Count(u64),
    Text(String),
}

impl FindingValue {
    /// Whether the value signals presence: `true`, a non-zero count, or
    /// non-empty text.
    pub fn is_truthy(&self) -> bool {
        match self {
            FindingValue::Bool(b) => *b,
            FindingValue::Count(n) => *n > 0,
            FindingValue::Text(s) => !s.is_empty(),
        }
    }
}

impl From<bool> for FindingValue {
    fn from(value: bool) -> Self {
        FindingValue::Bool(value)
    }
}

impl From<usize> for FindingValue {
    fn from(value: usize) -> Self {
        FindingValue::Count(value as u64)
    }
}

impl From<u64> for FindingValue {
    fn from(value: u64) -> Self {
        FindingValue::Count(value)
    }
}

impl From<String> for FindingValue {
    fn from(value: String) -> Self {
        FindingValue::Text(value)
    }
}

impl From<&str> for FindingValue {
    fn from(value: &str) -> Self {
        FindingValue::Text(value.to_string())
    }
}

/// Keyed observations for one area
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Findings(BTreeMap<String, FindingValue>);

impl Findings {
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FindingValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FindingValue> {
        self.0.get(key)
    }

    /// Missing keys read as false
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).map(FindingValue::is_truthy).unwrap_or(false)
    }

    pub fn count(&self, key: &str) -> Option<u64> {
        match self.0.get(key) {
            Some(FindingValue::Count(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(FindingValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FindingValue)> {
        self.0.iter()
    }
}

/// Functional area covered by one routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Accessibility,
    FoodDiary,
    Dashboard,
    Sync,
    Responsive,
    ErrorStates,
}

impl Area {
    /// Execution order
    pub const ALL: [Area; 6] = [
        Area::Accessibility,
        Area::FoodDiary,
        Area::Dashboard,
        Area::Sync,
        Area::Responsive,
        Area::ErrorStates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Accessibility => "accessibility",
            Area::FoodDiary => "food_diary",
            Area::Dashboard => "dashboard",
            Area::Sync => "sync",
            Area::Responsive => "responsive",
            Area::ErrorStates => "error_states",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A screenshot written during the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenshotRecord {
    pub name: String,
    pub path: PathBuf,
    pub timestamp: String,
    /// Hex SHA-256 of the image, absent when the file could not be read back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl ScreenshotRecord {
    /// Record a screenshot already on disk, hashing its contents.
    pub fn from_file(name: &str, path: &Path) -> Self {
        let sha256 = match std::fs::read(path) {
            Ok(bytes) => Some(hex::encode(Sha256::digest(&bytes))),
            Err(e) => {
                warn!("Could not hash screenshot {}: {}", path.display(), e);
                None
            }
        };

        Self {
            name: name.to_string(),
            path: path.to_path_buf(),
            timestamp: Utc::now().to_rfc3339(),
            sha256,
        }
    }
}

/// Console message tagged with the page it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleEntry {
    pub page: String,
    pub level: String,
    pub text: String,
    pub timestamp: u64,
}

impl ConsoleEntry {
    pub fn new(page: &str, message: ConsoleMessage) -> Self {
        Self {
            page: page.to_string(),
            level: message.level,
            text: message.text,
            timestamp: message.timestamp,
        }
    }
}

/// What one routine produced. Built locally by the routine and handed to the
/// report as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineOutcome {
    pub area: Area,
    pub findings: Findings,
    pub errors: Vec<String>,
    pub screenshots: Vec<ScreenshotRecord>,
    pub console: Vec<ConsoleEntry>,
}

impl RoutineOutcome {
    pub fn new(area: Area) -> Self {
        Self {
            area,
            findings: Findings::default(),
            errors: Vec::new(),
            screenshots: Vec::new(),
            console: Vec::new(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FindingValue>) {
        self.findings.set(key, value);
    }

    /// Record a failed step; the routine carries on with its next step.
    pub fn error(&mut self, step: &str, err: impl fmt::Display) {
        warn!("[{}] {} failed: {}", self.area, step, err);
        self.errors.push(format!("{}: {}", step, err));
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Findings and errors for one area as they appear in the report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaReport {
    pub findings: Findings,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineStatus {
    pub area: Area,
    pub passed: bool,
    pub errors: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub app_accessible: bool,
    pub app_title: Option<String>,
    /// The run stopped after the accessibility check
    pub aborted: bool,
    pub total_screenshots: usize,
    pub completed_at: Option<String>,
    pub routines: Vec<RoutineStatus>,
}

/// Everything one run observed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestReport {
    pub timestamp: String,
    pub base_url: String,
    pub summary: ReportSummary,
    pub areas: BTreeMap<Area, AreaReport>,
    pub screenshots: Vec<ScreenshotRecord>,
    #[serde(default)]
    pub console: Vec<ConsoleEntry>,
}

impl TestReport {
    pub fn new(base_url: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            base_url: base_url.to_string(),
            summary: ReportSummary::default(),
            areas: BTreeMap::new(),
            screenshots: Vec::new(),
            console: Vec::new(),
        }
    }

    /// Fold a routine's outcome into the report.
    pub fn merge(&mut self, outcome: RoutineOutcome) {
        if outcome.area == Area::Accessibility {
            self.summary.app_accessible = outcome.findings.flag("app_accessible");
            self.summary.app_title = outcome.findings.text("app_title").map(str::to_string);
        }

        self.summary.routines.push(RoutineStatus {
            area: outcome.area,
            passed: outcome.passed(),
            errors: outcome.errors.len(),
        });
        self.summary.total_screenshots += outcome.screenshots.len();

        self.screenshots.extend(outcome.screenshots);
        self.console.extend(outcome.console);
        self.areas.insert(
            outcome.area,
            AreaReport {
                findings: outcome.findings,
                errors: outcome.errors,
            },
        );
    }

    pub fn mark_aborted(&mut self) {
        self.summary.aborted = true;
    }

    pub fn finish(&mut self) {
        self.summary.completed_at = Some(Utc::now().to_rfc3339());
    }

    pub fn area(&self, area: Area) -> Option<&AreaReport> {
        self.areas.get(&area)
    }

    pub fn to_json(&self) -> E2eResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write `diet_daily_test_report_<unix-seconds>.json` under `dir`.
    pub fn write_to(&self, dir: &Path) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(dir)?;

        let path = dir.join(format!("diet_daily_test_report_{}.json", Utc::now().timestamp()));
        std::fs::write(&path, self.to_json()?)?;

        info!("Report written to: {}", path.display());
        Ok(path)
    }

    pub fn load(path: &Path) -> E2eResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Human-readable summary on stdout
    pub fn print_summary(&self) {
        println!();
        println!("📊 Diet Daily UI verification");
        println!("   Target:      {}", self.base_url);
        println!(
            "   Accessible:  {}",
            if self.summary.app_accessible { "✅ yes" } else { "❌ no" }
        );
        if let Some(title) = &self.summary.app_title {
            println!("   Title:       {}", title);
        }
        println!("   Screenshots: {}", self.summary.total_screenshots);

        for status in &self.summary.routines {
            let mark = if status.passed { "✅" } else { "⚠️ " };
            let found = self
                .areas
                .get(&status.area)
                .map(|a| a.findings.iter().filter(|(_, v)| v.is_truthy()).count())
                .unwrap_or(0);
            let total = self.areas.get(&status.area).map(|a| a.findings.len()).unwrap_or(0);
            println!(
                "   {} {:<14} {}/{} findings positive, {} error(s)",
                mark, status.area, found, total, status.errors
            );
        }

        let errors = self.console.iter().filter(|c| c.level == "error").count();
        if errors > 0 {
            println!("   Console errors captured: {}", errors);
        }

        let network = self
            .console
            .iter()
            .filter(|c| c.level == REQUEST_FAILED_LEVEL || c.level == RESPONSE_LEVEL)
            .count();
        if network > 0 {
            println!("   Network events captured: {}", network);
        }

        if self.summary.aborted {
            println!("❌ Run aborted: app not accessible at {}", self.base_url);
        }
    }
}
