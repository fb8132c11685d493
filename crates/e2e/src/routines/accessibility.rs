//! Is the app up at all

use tracing::info;

use super::{open_page, release_page, RoutineContext};
use crate::page::{Browser, LoadState};
use crate::report::{Area, RoutineOutcome};

/// Load the root route. Sets `app_accessible`, `app_title` and captures
/// `main_page` on success.
pub async fn run(ctx: &RoutineContext, browser: &dyn Browser) -> RoutineOutcome {
    let mut outcome = RoutineOutcome::new(Area::Accessibility);
    outcome.set("app_accessible", false);

    let Some(page) = open_page(browser, &mut outcome).await else {
        return outcome;
    };

    let url = ctx.url("/");
    match page.goto(&url, LoadState::NetworkIdle, ctx.timeouts.navigation).await {
        Ok(()) => {
            outcome.set("app_accessible", true);
            match page.title().await {
                Ok(title) => {
                    info!("App accessible at {} ({})", url, title);
                    outcome.set("app_title", title);
                }
                Err(e) => outcome.error("read title", e),
            }
            ctx.capture(page.as_ref(), "main_page", &mut outcome).await;
        }
        Err(e) => outcome.error(&format!("load {}", url), e),
    }

    release_page(page, "accessibility", &mut outcome).await;
    outcome
}
