//! Food diary page: entry form, sync controls, records listing

use super::{note_error, open_page, release_page, RoutineContext};
use crate::error::E2eResult;
use crate::page::{Browser, LoadState, Page};
use crate::probe::{probe_count, probe_present, probe_total};
use crate::report::{Area, RoutineOutcome};
use crate::wait::poll_until;

pub const TEST_FOOD: &str = "Test Apple";
pub const TEST_AMOUNT: &str = "150";

pub async fn run(ctx: &RoutineContext, browser: &dyn Browser) -> RoutineOutcome {
    let mut outcome = RoutineOutcome::new(Area::FoodDiary);
    let Some(page) = open_page(browser, &mut outcome).await else {
        return outcome;
    };
    let page_ref = page.as_ref();

    match page_ref
        .goto(&ctx.url("/food-diary"), LoadState::NetworkIdle, ctx.timeouts.navigation)
        .await
    {
        Ok(()) => {
            ctx.capture(page_ref, "food_diary_initial", &mut outcome).await;

            if let Err(e) = check_form(ctx, page_ref, &mut outcome).await {
                outcome.error("entry form", e);
            }
            check_sync_controls(ctx, page_ref, &mut outcome).await;
            check_records(ctx, page_ref, &mut outcome).await;
        }
        Err(e) => outcome.error("load /food-diary", e),
    }

    release_page(page, "food_diary", &mut outcome).await;
    outcome
}

async fn check_form(ctx: &RoutineContext, page: &dyn Page, outcome: &mut RoutineOutcome) -> E2eResult<()> {
    let profile = &ctx.profile;
    let element = ctx.timeouts.element;

    let form = probe_present(page, &profile.form, element).await;
    note_error(outcome, "form", &form);
    outcome.set("form_exists", form.is_found());
    if !form.is_found() {
        return Ok(());
    }

    let food = probe_present(page, &profile.food_input, element).await;
    let amount = probe_present(page, &profile.amount_input, element).await;
    let submit = probe_present(page, &profile.submit_button, element).await;
    for (name, probe) in [("food input", &food), ("amount input", &amount), ("submit button", &submit)] {
        note_error(outcome, name, probe);
    }
    outcome.set("food_input_exists", food.is_found());
    outcome.set("amount_input_exists", amount.is_found());
    outcome.set("submit_button_exists", submit.is_found());

    let (Some(food), Some(amount), Some(submit)) = (food.selector(), amount.selector(), submit.selector()) else {
        outcome.set("form_submission_tested", false);
        return Ok(());
    };

    page.fill(food, TEST_FOOD).await?;
    page.fill(amount, TEST_AMOUNT).await?;
    ctx.capture(page, "form_before_submit", outcome).await;

    page.click(submit).await?;
    let shown = poll_until(ctx.timeouts.settle, ctx.timeouts.poll_interval, || page.contains_text(TEST_FOOD)).await?;
    outcome.set("form_submission_tested", true);
    outcome.set("submitted_entry_visible", shown.satisfied);
    ctx.capture(page, "form_after_submit", outcome).await;

    Ok(())
}

async fn check_sync_controls(ctx: &RoutineContext, page: &dyn Page, outcome: &mut RoutineOutcome) {
    let profile = &ctx.profile;
    let optional = ctx.timeouts.optional_element;

    let badges = probe_count(page, &profile.status_badges, 1).await;
    note_error(outcome, "status badges", &badges);
    outcome.set("status_badges_found", badges.count());

    let toggle = probe_present(page, &profile.auto_sync_toggle, optional).await;
    note_error(outcome, "auto-sync toggle", &toggle);
    outcome.set("auto_sync_toggle_found", toggle.is_found());
    outcome.set("toggle_interaction_tested", false);
    if let Some(selector) = toggle.selector() {
        match page.click(selector).await {
            Ok(()) => outcome.set("toggle_interaction_tested", true),
            Err(e) => outcome.error("toggle auto-sync", e),
        }
    }

    let manual = probe_present(page, &profile.manual_sync_button, optional).await;
    note_error(outcome, "manual sync button", &manual);
    outcome.set("manual_sync_button_found", manual.is_found());
    outcome.set("manual_sync_tested", false);
    if let Some(selector) = manual.selector() {
        match page.click(selector).await {
            Ok(()) => outcome.set("manual_sync_tested", true),
            Err(e) => outcome.error("manual sync", e),
        }
    }
}

async fn check_records(ctx: &RoutineContext, page: &dyn Page, outcome: &mut RoutineOutcome) {
    let profile = &ctx.profile;

    let records = probe_count(page, &profile.records_container, 1).await;
    note_error(outcome, "records container", &records);
    outcome.set("records_container_found", records.is_found());
    outcome.set("records_count", records.count());

    if records.is_found() {
        let categories = probe_total(page, &profile.record_categories).await;
        note_error(outcome, "record categories", &categories);
        outcome.set("categories_found", categories.count());
    }

    let empty = probe_count(page, &profile.empty_state, 1).await;
    note_error(outcome, "empty state", &empty);
    outcome.set("empty_state_found", empty.is_found());

    ctx.capture(page, "food_records_display", outcome).await;
}
