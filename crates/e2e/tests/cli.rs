//! Exit codes of the diet-daily-e2e binary

use std::net::TcpListener;
use std::process::Command;

use dietdaily_e2e::TestReport;

fn diet_daily_e2e() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_diet-daily-e2e"));
    for var in [
        "DIET_DAILY_BASE_URL",
        "DIET_DAILY_E2E_OUTPUT",
        "DIET_DAILY_E2E_PROFILE",
        "DIET_DAILY_E2E_SKIP_PRECHECK",
        "DIET_DAILY_E2E_REACHABILITY_TIMEOUT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[test]
fn unreachable_app_exits_aborted_with_report() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("reports");

    let status = diet_daily_e2e()
        .args(["--base-url", &closed_port_url(), "--reachability-timeout", "1", "--output-dir"])
        .arg(&out)
        .status()
        .expect("run diet-daily-e2e");

    assert_eq!(status.code(), Some(1));

    let reports: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().starts_with("diet_daily_test_report_"))
                .unwrap_or(false)
        })
        .collect();
    assert_eq!(reports.len(), 1);

    let report = TestReport::load(&reports[0]).unwrap();
    assert!(report.summary.aborted);
    assert!(!report.summary.app_accessible);
}

#[test]
fn unreadable_profile_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();

    let status = diet_daily_e2e()
        .args(["--base-url", &closed_port_url(), "--output-dir"])
        .arg(tmp.path())
        .arg("--profile")
        .arg(tmp.path().join("missing.yaml"))
        .status()
        .expect("run diet-daily-e2e");

    assert_eq!(status.code(), Some(2));
}
