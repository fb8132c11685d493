//! Unknown routes and loading states

use super::{note_error, open_page, release_page, RoutineContext};
use crate::error::E2eError;
use crate::page::{Browser, LoadState};
use crate::probe::{probe_count, probe_total};
use crate::report::{Area, RoutineOutcome};
use crate::wait::poll_until;

pub const UNKNOWN_ROUTE: &str = "/invalid-route";

pub async fn run(ctx: &RoutineContext, browser: &dyn Browser) -> RoutineOutcome {
    let mut outcome = RoutineOutcome::new(Area::ErrorStates);
    outcome.set("not_found_handling", false);
    let Some(page) = open_page(browser, &mut outcome).await else {
        return outcome;
    };
    let page_ref = page.as_ref();
    let timeouts = ctx.timeouts;

    match page_ref.goto(&ctx.url(UNKNOWN_ROUTE), LoadState::Load, timeouts.navigation).await {
        Ok(()) => {
            let marker = &ctx.profile.not_found_marker;
            let shown = poll_until(timeouts.settle, timeouts.poll_interval, || async move {
                Ok::<_, E2eError>(probe_count(page_ref, marker, 1).await.is_found())
            })
            .await;
            match shown {
                Ok(poll) => outcome.set("not_found_handling", poll.satisfied),
                Err(e) => outcome.error("not found marker", e),
            }
            ctx.capture(page_ref, "error_404_page", &mut outcome).await;
        }
        Err(e) => outcome.error(&format!("load {}", UNKNOWN_ROUTE), e),
    }

    // Loading indicators are transient; look right after the DOM is ready
    match page_ref
        .goto(&ctx.url("/dashboard"), LoadState::DomContentLoaded, timeouts.navigation)
        .await
    {
        Ok(()) => {
            let loading = probe_total(page_ref, &ctx.profile.loading_indicators).await;
            note_error(&mut outcome, "loading indicators", &loading);
            outcome.set("loading_indicators_found", loading.count());
        }
        Err(e) => outcome.error("load /dashboard", e),
    }

    release_page(page, "error_states", &mut outcome).await;
    outcome
}
