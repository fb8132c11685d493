//! Layout at mobile, tablet and desktop sizes

use super::{note_error, open_page, release_page, RoutineContext, ScreenSize, SCREEN_SIZES};
use crate::error::E2eResult;
use crate::page::{Browser, LoadState, Page};
use crate::probe::probe_count;
use crate::report::{Area, RoutineOutcome};

pub async fn run(ctx: &RoutineContext, browser: &dyn Browser) -> RoutineOutcome {
    let mut outcome = RoutineOutcome::new(Area::Responsive);
    let Some(page) = open_page(browser, &mut outcome).await else {
        return outcome;
    };

    let mut tested = 0usize;
    for size in SCREEN_SIZES {
        // One size failing does not stop the others
        match check_size(ctx, page.as_ref(), size, &mut outcome).await {
            Ok(()) => tested += 1,
            Err(e) => outcome.error(&format!("{} layout", size.name), e),
        }
    }
    outcome.set("sizes_tested", tested);

    release_page(page, "responsive", &mut outcome).await;
    outcome
}

async fn check_size(ctx: &RoutineContext, page: &dyn Page, size: ScreenSize, outcome: &mut RoutineOutcome) -> E2eResult<()> {
    let navigation = ctx.timeouts.navigation;

    page.set_viewport(size.width, size.height).await?;

    page.goto(&ctx.url("/food-diary"), LoadState::NetworkIdle, navigation).await?;
    ctx.capture(page, &format!("responsive_{}_food_diary", size.name), outcome).await;

    page.goto(&ctx.url("/dashboard"), LoadState::NetworkIdle, navigation).await?;
    ctx.capture(page, &format!("responsive_{}_dashboard", size.name), outcome).await;

    let nav = probe_count(page, &ctx.profile.navigation, 1).await;
    note_error(outcome, "navigation", &nav);
    outcome.set(format!("{}_nav_elements_found", size.name), nav.count());

    if size.name == "mobile" {
        let menu = probe_count(page, &ctx.profile.mobile_menu, 1).await;
        note_error(outcome, "mobile menu", &menu);
        outcome.set("mobile_menu_found", menu.is_found());
        outcome.set("mobile_menu_tested", false);

        if let Some(selector) = menu.selector() {
            page.click(selector).await?;
            outcome.set("mobile_menu_tested", true);
            ctx.capture(page, "mobile_menu_opened", outcome).await;
        }
    }

    Ok(())
}
