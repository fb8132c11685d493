//! Dashboard: stat cards, recent activities, quick actions

use super::{note_error, open_page, release_page, RoutineContext};
use crate::error::{E2eError, E2eResult};
use crate::page::{Browser, LoadState, Page};
use crate::probe::{probe_count, probe_present, probe_total};
use crate::report::{Area, RoutineOutcome};
use crate::wait::poll_until;

/// Fewer cards than this means the stats section is missing
pub const MIN_STAT_CARDS: usize = 3;
/// Activity lists are paged at this size
pub const ACTIVITY_PAGE_SIZE: usize = 10;

pub async fn run(ctx: &RoutineContext, browser: &dyn Browser) -> RoutineOutcome {
    let mut outcome = RoutineOutcome::new(Area::Dashboard);
    let Some(page) = open_page(browser, &mut outcome).await else {
        return outcome;
    };
    let page_ref = page.as_ref();

    match page_ref
        .goto(&ctx.url("/dashboard"), LoadState::NetworkIdle, ctx.timeouts.navigation)
        .await
    {
        Ok(()) => {
            ctx.capture(page_ref, "dashboard_initial", &mut outcome).await;

            check_stat_cards(ctx, page_ref, &mut outcome).await;
            if let Err(e) = check_activities(ctx, page_ref, &mut outcome).await {
                outcome.error("recent activities", e);
            }
            check_quick_actions(ctx, page_ref, &mut outcome).await;
        }
        Err(e) => outcome.error("load /dashboard", e),
    }

    release_page(page, "dashboard", &mut outcome).await;
    outcome
}

async fn check_stat_cards(ctx: &RoutineContext, page: &dyn Page, outcome: &mut RoutineOutcome) {
    let profile = &ctx.profile;

    let cards = probe_count(page, &profile.stat_cards, MIN_STAT_CARDS).await;
    note_error(outcome, "stat cards", &cards);
    outcome.set("cards_found", cards.count());
    if !cards.is_found() {
        return;
    }

    for (key, requirement) in [
        ("today_card", &profile.today_card),
        ("week_card", &profile.week_card),
        ("month_card", &profile.month_card),
        ("sync_card", &profile.sync_card),
    ] {
        let probe = probe_count(page, requirement, 1).await;
        note_error(outcome, key, &probe);
        outcome.set(key, probe.is_found());
    }

    ctx.capture(page, "dashboard_stats", outcome).await;
}

async fn check_activities(ctx: &RoutineContext, page: &dyn Page, outcome: &mut RoutineOutcome) -> E2eResult<()> {
    let profile = &ctx.profile;

    let activities = probe_count(page, &profile.recent_activities, 1).await;
    note_error(outcome, "recent activities", &activities);
    let before = activities.count();
    outcome.set("activities_found", before);
    outcome.set("has_activities", activities.is_found());
    outcome.set("limit_applied", before >= ACTIVITY_PAGE_SIZE);

    let load_more = probe_present(page, &profile.load_more_button, ctx.timeouts.optional_element).await;
    note_error(outcome, "load more button", &load_more);
    outcome.set("load_more_button_found", load_more.is_found());
    outcome.set("load_more_tested", false);

    let Some(button) = load_more.selector() else {
        return Ok(());
    };

    page.click(button).await?;
    outcome.set("load_more_tested", true);

    if let Some(list) = activities.selector() {
        let grew = poll_until(ctx.timeouts.settle, ctx.timeouts.poll_interval, || async move {
            Ok::<_, E2eError>(page.count(list).await? > before)
        })
        .await?;
        outcome.set("activities_after_load_more", page.count(list).await?);
        outcome.set("load_more_grew_list", grew.satisfied);
    }

    Ok(())
}

async fn check_quick_actions(ctx: &RoutineContext, page: &dyn Page, outcome: &mut RoutineOutcome) {
    let profile = &ctx.profile;

    let actions = probe_total(page, &profile.quick_actions).await;
    note_error(outcome, "quick actions", &actions);
    outcome.set("action_buttons_found", actions.count());

    let history = probe_count(page, &profile.history_link, 1).await;
    note_error(outcome, "history link", &history);
    outcome.set("history_navigation_available", history.is_found());

    ctx.capture(page, "dashboard_actions", outcome).await;
}
