//! Diet Daily UI verification harness
//!
//! Drives a real browser against a running Diet Daily web app and reports
//! what it found, area by area:
//! - Spot-checks that the app is up before anything else runs
//! - Probes the food diary, dashboard, sync, layout and error handling
//!   with candidate selectors that tolerate markup drift
//! - Captures screenshots and console output along the way
//! - Writes one JSON report per run
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    TestRunner (Rust)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  precheck()            HTTP reachability (reqwest)          │
//! │  run(&dyn Browser)                                          │
//! │    ├── accessibility   -> abort the run when it fails       │
//! │    ├── food_diary                                           │
//! │    ├── dashboard                                            │
//! │    ├── sync                                                 │
//! │    ├── responsive                                           │
//! │    └── error_states                                         │
//! │        each -> RoutineOutcome { findings, errors, ... }     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Browser / Page traits                                      │
//! │    └── PlaywrightBrowser: node bridge, JSON lines on stdio  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod page;
pub mod playwright;
pub mod probe;
pub mod report;
pub mod routines;
pub mod runner;
pub mod target;
pub mod wait;

pub use error::{E2eError, E2eResult};
pub use page::{Browser, ConsoleMessage, LoadState, Page};
pub use playwright::{BrowserKind, PlaywrightBrowser, PlaywrightConfig};
pub use probe::{Probe, ProbeProfile, Requirement};
pub use report::{Area, FindingValue, Findings, RoutineOutcome, TestReport};
pub use routines::{RoutineContext, Timeouts};
pub use runner::{RunnerConfig, TestRunner};
