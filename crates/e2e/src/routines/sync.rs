//! Cross-page consistency: an entry added in the diary shows up on the dashboard

use chrono::Utc;
use tracing::info;

use super::{note_error, open_page, release_page, RoutineContext};
use crate::error::E2eResult;
use crate::page::{Browser, LoadState, Page};
use crate::probe::probe_present;
use crate::report::{Area, RoutineOutcome};
use crate::wait::poll_until;

pub const SYNC_AMOUNT: &str = "200";

/// Unique marker for the entry this run adds
pub fn sync_marker() -> String {
    format!("Sync Test Item {}", Utc::now().timestamp())
}

pub async fn run(ctx: &RoutineContext, browser: &dyn Browser) -> RoutineOutcome {
    let mut outcome = RoutineOutcome::new(Area::Sync);
    outcome.set("food_added", false);
    outcome.set("item_appears_on_dashboard", false);

    let Some(diary) = open_page(browser, &mut outcome).await else {
        return outcome;
    };
    let Some(dashboard) = open_page(browser, &mut outcome).await else {
        release_page(diary, "sync_food_diary", &mut outcome).await;
        return outcome;
    };

    let marker = sync_marker();
    outcome.set("marker", marker.as_str());

    if let Err(e) = check_sync(ctx, diary.as_ref(), dashboard.as_ref(), &marker, &mut outcome).await {
        outcome.error("sync check", e);
    }

    release_page(diary, "sync_food_diary", &mut outcome).await;
    release_page(dashboard, "sync_dashboard", &mut outcome).await;
    outcome
}

async fn check_sync(
    ctx: &RoutineContext,
    diary: &dyn Page,
    dashboard: &dyn Page,
    marker: &str,
    outcome: &mut RoutineOutcome,
) -> E2eResult<()> {
    let timeouts = ctx.timeouts;
    let profile = &ctx.profile;

    diary
        .goto(&ctx.url("/food-diary"), LoadState::NetworkIdle, timeouts.navigation)
        .await?;
    dashboard
        .goto(&ctx.url("/dashboard"), LoadState::NetworkIdle, timeouts.navigation)
        .await?;
    ctx.capture(diary, "sync_test_food_diary", outcome).await;
    ctx.capture(dashboard, "sync_test_dashboard_before", outcome).await;

    let food = probe_present(diary, &profile.food_input, timeouts.element).await;
    note_error(outcome, "food input", &food);
    let Some(food) = food.selector() else {
        return Ok(());
    };
    diary.fill(food, marker).await?;

    let amount = probe_present(diary, &profile.amount_input, timeouts.optional_element).await;
    if let Some(amount) = amount.selector() {
        diary.fill(amount, SYNC_AMOUNT).await?;
    }

    let submit = probe_present(diary, &profile.submit_button, timeouts.optional_element).await;
    note_error(outcome, "submit button", &submit);
    let Some(submit) = submit.selector() else {
        return Ok(());
    };
    diary.click(submit).await?;
    outcome.set("food_added", true);
    ctx.capture(diary, "sync_test_food_added", outcome).await;

    let seen = poll_until(timeouts.sync_budget, timeouts.poll_interval, || async move {
        dashboard.reload(LoadState::NetworkIdle, timeouts.navigation).await?;
        dashboard.contains_text(marker).await
    })
    .await?;

    outcome.set("item_appears_on_dashboard", seen.satisfied);
    outcome.set("sync_poll_attempts", seen.attempts);
    if seen.satisfied {
        let latency = seen.elapsed.as_millis() as u64;
        info!("Entry reached the dashboard after {} ms", latency);
        outcome.set("sync_latency_ms", latency);
    }
    ctx.capture(dashboard, "sync_test_dashboard_after", outcome).await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_format() {
        let marker = sync_marker();
        let suffix = marker.strip_prefix("Sync Test Item ").unwrap();
        assert!(suffix.parse::<i64>().unwrap() > 0);
    }
}
