//! Best-effort DOM probing
//!
//! Every expected element is described by a [`Requirement`]: an ordered list
//! of candidate selectors, tried in order until one matches. The default
//! candidates live in [`ProbeProfile`], which can be overridden from YAML.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{E2eError, E2eResult};
use crate::page::Page;

/// Ordered candidate selectors for one expected element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requirement {
    pub candidates: Vec<String>,
}

impl Requirement {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of probing one requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    Found { selector: String, count: usize },
    Absent,
    /// Every candidate either missed or failed, and at least one failed
    Errored(String),
}

impl Probe {
    pub fn is_found(&self) -> bool {
        matches!(self, Probe::Found { .. })
    }

    pub fn selector(&self) -> Option<&str> {
        match self {
            Probe::Found { selector, .. } => Some(selector),
            _ => None,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Probe::Found { count, .. } => *count,
            _ => 0,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Probe::Errored(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Wait up to `timeout` per candidate; the first candidate that appears wins.
pub async fn probe_present(page: &dyn Page, requirement: &Requirement, timeout: Duration) -> Probe {
    let mut last_error = None;

    for selector in &requirement.candidates {
        match page.wait_for(selector, timeout).await {
            Ok(true) => {
                let count = match page.count(selector).await {
                    Ok(count) => count.max(1),
                    Err(e) => {
                        warn!("Count failed for {} after it appeared: {}", selector, e);
                        1
                    }
                };
                debug!("Probe matched {} ({} element(s))", selector, count);
                return Probe::Found {
                    selector: selector.clone(),
                    count,
                };
            }
            Ok(false) => debug!("Probe missed {}", selector),
            Err(e) => {
                warn!("Probe failed for {}: {}", selector, e);
                last_error = Some(format!("{}: {}", selector, e));
            }
        }
    }

    absent_or_errored(requirement, last_error)
}

/// First candidate matching at least `min` elements right now.
pub async fn probe_count(page: &dyn Page, requirement: &Requirement, min: usize) -> Probe {
    let min = min.max(1);
    let mut last_error = None;

    for selector in &requirement.candidates {
        match page.count(selector).await {
            Ok(count) if count >= min => {
                return Probe::Found {
                    selector: selector.clone(),
                    count,
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Count failed for {}: {}", selector, e);
                last_error = Some(format!("{}: {}", selector, e));
            }
        }
    }

    absent_or_errored(requirement, last_error)
}

/// Sum of matches across all candidates. The reported selector is the first
/// candidate that matched anything.
pub async fn probe_total(page: &dyn Page, requirement: &Requirement) -> Probe {
    let mut total = 0;
    let mut first = None;
    let mut errors = 0;
    let mut last_error = None;

    for selector in &requirement.candidates {
        match page.count(selector).await {
            Ok(count) => {
                if count > 0 && first.is_none() {
                    first = Some(selector.clone());
                }
                total += count;
            }
            Err(e) => {
                errors += 1;
                last_error = Some(format!("{}: {}", selector, e));
            }
        }
    }

    match first {
        Some(selector) => Probe::Found {
            selector,
            count: total,
        },
        None if errors > 0 => Probe::Errored(last_error.unwrap_or_default()),
        None => Probe::Absent,
    }
}

fn absent_or_errored(requirement: &Requirement, last_error: Option<String>) -> Probe {
    match last_error {
        Some(msg) if !requirement.candidates.is_empty() => Probe::Errored(msg),
        _ => Probe::Absent,
    }
}

/// Candidate selectors for every element the routines look for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeProfile {
    // Food diary form
    pub form: Requirement,
    pub food_input: Requirement,
    pub amount_input: Requirement,
    pub submit_button: Requirement,

    // Sync controls
    pub status_badges: Requirement,
    pub auto_sync_toggle: Requirement,
    pub manual_sync_button: Requirement,

    // Food records
    pub records_container: Requirement,
    pub record_categories: Requirement,
    pub empty_state: Requirement,

    // Dashboard
    pub stat_cards: Requirement,
    pub today_card: Requirement,
    pub week_card: Requirement,
    pub month_card: Requirement,
    pub sync_card: Requirement,
    pub recent_activities: Requirement,
    pub load_more_button: Requirement,
    pub quick_actions: Requirement,
    pub history_link: Requirement,

    // Layout
    pub navigation: Requirement,
    pub mobile_menu: Requirement,

    // Error and loading states
    pub not_found_marker: Requirement,
    pub loading_indicators: Requirement,
}

impl Default for ProbeProfile {
    fn default() -> Self {
        Self {
            form: Requirement::new(["form"]),
            food_input: Requirement::new([
                r#"input[placeholder*="food" i]"#,
                r#"input[name*="food" i]"#,
                r#"input[id*="food" i]"#,
            ]),
            amount_input: Requirement::new([
                r#"input[placeholder*="amount" i]"#,
                r#"input[name*="amount" i]"#,
                r#"input[type="number"]"#,
            ]),
            submit_button: Requirement::new([
                r#"button[type="submit"]"#,
                r#"button:has-text("Add")"#,
                r#"button:has-text("Submit")"#,
            ]),
            status_badges: Requirement::new([
                r#"[class*="badge"]"#,
                r#"[class*="status"]"#,
                r#"span:has-text("pending")"#,
                r#"span:has-text("syncing")"#,
                r#"span:has-text("synced")"#,
                r#"span:has-text("error")"#,
            ]),
            auto_sync_toggle: Requirement::new([
                r#"input[type="checkbox"]"#,
                r#"[role="switch"]"#,
                r#"button:has-text("Auto")"#,
                r#"[class*="toggle"]"#,
            ]),
            manual_sync_button: Requirement::new([
                r#"button:has-text("Sync")"#,
                r#"button:has-text("Manual")"#,
                r#"[class*="sync"]"#,
            ]),
            records_container: Requirement::new([
                r#"[class*="record"]"#,
                r#"[class*="food"]"#,
                r#"[class*="item"]"#,
                "ul",
                r#"[role="list"]"#,
            ]),
            record_categories: Requirement::new([r#"[class*="category"]"#, "h2", "h3"]),
            empty_state: Requirement::new([
                r#":has-text("No records")"#,
                r#":has-text("Empty")"#,
                r#"[class*="empty"]"#,
            ]),
            stat_cards: Requirement::new([
                r#"[class*="card"]"#,
                r#"[class*="stat"]"#,
                r#"[class*="metric"]"#,
                ".grid > div",
            ]),
            today_card: Requirement::new([r#":has-text("today")"#, r#":has-text("Today")"#]),
            week_card: Requirement::new([r#":has-text("week")"#, r#":has-text("Week")"#]),
            month_card: Requirement::new([r#":has-text("month")"#, r#":has-text("Month")"#]),
            sync_card: Requirement::new([r#":has-text("sync")"#, r#":has-text("Sync")"#]),
            recent_activities: Requirement::new([
                r#":has-text("Recent") + *"#,
                r#"[class*="activit"]"#,
                r#"[class*="recent"]"#,
                "ul li",
            ]),
            load_more_button: Requirement::new([
                r#"button:has-text("Load more")"#,
                r#"button:has-text("More")"#,
                r#"[class*="load"]"#,
            ]),
            quick_actions: Requirement::new([
                r#"button:has-text("Add")"#,
                r#"button:has-text("Quick")"#,
                r#"[class*="action"]"#,
                r#"a[href*="food"]"#,
                r#"a[href*="history"]"#,
            ]),
            history_link: Requirement::new([
                r#"a[href*="history"]"#,
                r#"button:has-text("History")"#,
            ]),
            navigation: Requirement::new([
                "nav",
                r#"[role="navigation"]"#,
                "header a",
                r#"button:has-text("Menu")"#,
                r#"[class*="nav"]"#,
            ]),
            mobile_menu: Requirement::new([
                r#"button:has-text("Menu")"#,
                r#"[class*="hamburger"]"#,
            ]),
            not_found_marker: Requirement::new([
                r#":has-text("404")"#,
                r#":has-text("Not Found")"#,
                r#":has-text("Error")"#,
            ]),
            loading_indicators: Requirement::new([
                r#"[class*="loading"]"#,
                r#"[class*="spinner"]"#,
                r#":has-text("Loading")"#,
            ]),
        }
    }
}

impl ProbeProfile {
    /// Parse a profile from YAML. Fields left out keep their defaults.
    pub fn from_yaml(yaml: &str) -> E2eResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| E2eError::ProfileParse(e.to_string()))
    }

    pub fn from_file(path: &Path) -> E2eResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_profile_keeps_defaults() {
        let yaml = r#"
food_input:
  - '[data-testid="food-name"]'
  - 'input#food'
"#;
        let profile = ProbeProfile::from_yaml(yaml).unwrap();
        let defaults = ProbeProfile::default();

        assert_eq!(profile.food_input.candidates.len(), 2);
        assert_eq!(profile.food_input.candidates[0], r#"[data-testid="food-name"]"#);
        assert_eq!(profile.amount_input, defaults.amount_input);
        assert_eq!(profile.form, defaults.form);
    }

    #[test]
    fn test_bad_profile_is_reported() {
        let err = ProbeProfile::from_yaml("food_input: 12").unwrap_err();
        assert!(matches!(err, E2eError::ProfileParse(_)));
    }

    #[test]
    fn test_default_profile_round_trips_through_yaml() {
        let profile = ProbeProfile::default();
        let yaml = serde_yaml::to_string(&profile).unwrap();
        assert_eq!(ProbeProfile::from_yaml(&yaml).unwrap(), profile);
    }

    #[test]
    fn test_probe_accessors() {
        let found = Probe::Found {
            selector: "form".to_string(),
            count: 2,
        };
        assert!(found.is_found());
        assert_eq!(found.selector(), Some("form"));
        assert_eq!(found.count(), 2);

        assert_eq!(Probe::Absent.count(), 0);
        assert_eq!(Probe::Errored("boom".to_string()).error(), Some("boom"));
    }
}
