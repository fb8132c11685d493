//! Full runs against an in-memory app

mod common;

use common::{fast_timeouts, StubApp, BASE_URL};
use dietdaily_e2e::page::RESPONSE_LEVEL;
use dietdaily_e2e::report::Area;
use dietdaily_e2e::{RunnerConfig, TestReport, TestRunner};

fn runner(output_dir: &std::path::Path) -> TestRunner {
    TestRunner::new(RunnerConfig {
        base_url: BASE_URL.to_string(),
        output_dir: output_dir.to_path_buf(),
        timeouts: fast_timeouts(),
        reachability_timeout: None,
        ..RunnerConfig::default()
    })
}

#[tokio::test]
async fn test_full_run_covers_every_area_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let app = StubApp::full();
    let runner = runner(tmp.path());
    runner.prepare().unwrap();

    let report = runner.run(&app.browser()).await;

    assert!(!report.summary.aborted);
    assert!(report.summary.app_accessible);
    assert_eq!(report.summary.app_title.as_deref(), Some("Diet Daily"));
    assert!(report.summary.completed_at.is_some());

    let order: Vec<Area> = report.summary.routines.iter().map(|r| r.area).collect();
    assert_eq!(order, Area::ALL.to_vec());
    assert!(report.summary.routines.iter().all(|r| r.passed), "{:?}", report.summary.routines);

    assert_eq!(report.summary.total_screenshots, report.screenshots.len());
    assert!(report.screenshots.iter().all(|s| s.path.starts_with(tmp.path())));

    let visits = app.visits();
    assert_eq!(visits.first().map(String::as_str), Some("/"));
    assert_eq!(visits.last().map(String::as_str), Some("/dashboard"));
}

#[tokio::test]
async fn test_inaccessible_app_aborts_run() {
    let tmp = tempfile::tempdir().unwrap();
    let app = StubApp::unreachable();
    let runner = runner(tmp.path());

    let report = runner.run(&app.browser()).await;

    assert!(report.summary.aborted);
    assert!(!report.summary.app_accessible);
    assert_eq!(report.areas.len(), 1);
    assert!(report.area(Area::Accessibility).is_some());
    assert_eq!(app.state.lock().unwrap().pages_opened, 1);

    // The aborted report is still written
    let path = runner.write_report(&report).unwrap();
    let loaded = TestReport::load(&path).unwrap();
    assert!(loaded.summary.aborted);
}

#[tokio::test]
async fn test_every_page_is_closed() {
    let tmp = tempfile::tempdir().unwrap();
    let app = StubApp::full();
    let runner = runner(tmp.path());

    runner.run(&app.browser()).await;

    let state = app.state.lock().unwrap();
    assert!(state.pages_opened > 0);
    assert_eq!(state.pages_opened, state.pages_closed);
}

#[tokio::test]
async fn test_console_output_is_attributed_to_routine() {
    let tmp = tempfile::tempdir().unwrap();
    let app = StubApp::full();
    app.update_route("/invalid-route", |r| r.console.push("Failed to load chunk".to_string()));
    let runner = runner(tmp.path());

    let report = runner.run(&app.browser()).await;

    assert_eq!(report.console.len(), 1);
    assert_eq!(report.console[0].page, "error_states");
    assert_eq!(report.console[0].text, "Failed to load chunk");
}

#[tokio::test]
async fn test_error_responses_land_in_console_log() {
    let tmp = tempfile::tempdir().unwrap();
    let app = StubApp::full();
    app.update_route("/invalid-route", |r| {
        r.responses.push(("/api/foods".to_string(), 500));
        r.responses.push(("/static/app.js".to_string(), 200));
        r.responses.push(("/favicon.ico".to_string(), 404));
    });
    let runner = runner(tmp.path());

    let report = runner.run(&app.browser()).await;

    let responses: Vec<_> = report
        .console
        .iter()
        .filter(|c| c.level == RESPONSE_LEVEL)
        .collect();
    assert_eq!(responses.len(), 2);
    assert!(responses.iter().all(|c| c.page == "error_states"));
    assert!(responses[0].text.ends_with("/api/foods 500"));
    assert!(responses[1].text.ends_with("/favicon.ico 404"));
}

#[tokio::test]
async fn test_report_file_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let app = StubApp::full();
    let runner = runner(&tmp.path().join("nested"));
    runner.prepare().unwrap();

    let report = runner.run(&app.browser()).await;
    let path = runner.write_report(&report).unwrap();

    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("diet_daily_test_report_"));

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["base_url"], BASE_URL);
    assert_eq!(json["areas"]["accessibility"]["findings"]["app_accessible"], true);
    assert_eq!(json["areas"]["sync"]["findings"]["item_appears_on_dashboard"], true);
    assert!(json["areas"]["food_diary"]["errors"].as_array().unwrap().is_empty());
    assert!(json["screenshots"][0]["sha256"].is_string());
}
