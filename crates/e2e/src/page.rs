//! Capability interface over a live browser page
//!
//! Routines only talk to [`Page`] and [`Browser`], never to Playwright
//! directly, so the probing backend can be swapped (or stubbed in tests)
//! without touching routine logic.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::E2eResult;

/// When a navigation counts as finished
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Load,
    DomContentLoaded,
    #[default]
    NetworkIdle,
}

impl LoadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Load => "load",
            LoadState::DomContentLoaded => "domcontentloaded",
            LoadState::NetworkIdle => "networkidle",
        }
    }
}

/// Level of a request that never got a response
pub const REQUEST_FAILED_LEVEL: &str = "requestfailed";

/// Level of an HTTP error response or any `/api/` response
pub const RESPONSE_LEVEL: &str = "response";

/// A console message or network event observed on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleMessage {
    /// `log`, `warning`, `error`, ... or [`REQUEST_FAILED_LEVEL`] /
    /// [`RESPONSE_LEVEL`] for network events
    pub level: String,
    pub text: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
}

/// One open page (tab)
#[async_trait]
pub trait Page: Send + Sync {
    /// Navigate to an absolute URL and wait for `wait_until`.
    async fn goto(&self, url: &str, wait_until: LoadState, timeout: Duration) -> E2eResult<()>;

    async fn reload(&self, wait_until: LoadState, timeout: Duration) -> E2eResult<()>;

    async fn title(&self) -> E2eResult<String>;

    /// Number of elements currently matching `selector`
    async fn count(&self, selector: &str) -> E2eResult<usize>;

    /// Wait up to `timeout` for `selector` to appear. `Ok(false)` means it did not.
    async fn wait_for(&self, selector: &str, timeout: Duration) -> E2eResult<bool>;

    async fn fill(&self, selector: &str, value: &str) -> E2eResult<()>;

    async fn click(&self, selector: &str) -> E2eResult<()>;

    async fn set_viewport(&self, width: u32, height: u32) -> E2eResult<()>;

    async fn screenshot(&self, path: &Path, full_page: bool) -> E2eResult<()>;

    /// Whether the rendered body text contains `text`
    async fn contains_text(&self, text: &str) -> E2eResult<bool>;

    /// Console messages captured since the last call
    async fn drain_console(&self) -> E2eResult<Vec<ConsoleMessage>>;

    async fn close(&self) -> E2eResult<()>;
}

/// Page factory
#[async_trait]
pub trait Browser: Send + Sync {
    async fn new_page(&self) -> E2eResult<Box<dyn Page>>;

    async fn close(&self) -> E2eResult<()>;
}
