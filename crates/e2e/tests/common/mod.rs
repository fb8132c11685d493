//! In-memory stand-in for the Diet Daily app behind the `Browser` trait

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use dietdaily_e2e::page::RESPONSE_LEVEL;
use dietdaily_e2e::{Browser, ConsoleMessage, E2eError, E2eResult, LoadState, Page, ProbeProfile, RoutineContext, Timeouts};

pub const BASE_URL: &str = "http://stub.test";

/// What one route renders
#[derive(Debug, Clone, Default)]
pub struct Route {
    pub title: String,
    pub elements: HashMap<String, usize>,
    pub text: String,
    /// Submitted entries are listed on this route
    pub shows_entries: bool,
    /// Clicking the first selector submits whatever was filled into the second
    pub submit: Option<(String, String)>,
    /// Clicking the key adds `delta` matches to the target selector
    pub on_click: HashMap<String, (String, usize)>,
    pub console: Vec<String>,
    /// `(path, status)` of responses the page fetches when loaded
    pub responses: Vec<(String, u16)>,
}

impl Route {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn with(mut self, selector: &str, count: usize) -> Self {
        self.elements.insert(selector.to_string(), count);
        self
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub reachable: bool,
    pub routes: HashMap<String, Route>,
    pub entries: Vec<String>,
    pub failing_selectors: HashSet<String>,
    /// Selectors whose count fails while waiting on them still works
    pub failing_counts: HashSet<String>,
    pub visits: Vec<String>,
    pub viewports: Vec<(u32, u32)>,
    pub failing_viewports: HashSet<(u32, u32)>,
    pub pages_opened: usize,
    pub pages_closed: usize,
    pub browser_closed: bool,
}

#[derive(Clone)]
pub struct StubApp {
    pub state: Arc<Mutex<AppState>>,
}

fn first(requirement: &dietdaily_e2e::Requirement) -> String {
    requirement.candidates[0].clone()
}

impl StubApp {
    /// Reachable app with no markup anywhere
    pub fn bare() -> Self {
        let mut routes = HashMap::new();
        routes.insert("/".to_string(), Route::titled("Diet Daily"));
        Self::with_routes(routes)
    }

    pub fn unreachable() -> Self {
        let app = Self::bare();
        app.state.lock().unwrap().reachable = false;
        app
    }

    /// App rendering everything the default profile looks for
    pub fn full() -> Self {
        let p = ProbeProfile::default();
        let food_input = first(&p.food_input);
        let submit = first(&p.submit_button);
        let activities = p.recent_activities.candidates[1].clone();
        let load_more = first(&p.load_more_button);

        let mut routes = HashMap::new();
        routes.insert("/".to_string(), Route::titled("Diet Daily").with(&first(&p.navigation), 1));

        let mut diary = Route::titled("Food Diary")
            .with(&first(&p.form), 1)
            .with(&food_input, 1)
            .with(&first(&p.amount_input), 1)
            .with(&submit, 1)
            .with(&first(&p.status_badges), 3)
            .with(&first(&p.auto_sync_toggle), 1)
            .with(&first(&p.manual_sync_button), 1)
            .with(&first(&p.records_container), 4)
            .with(&first(&p.record_categories), 2)
            .with(&first(&p.navigation), 1);
        diary.shows_entries = true;
        diary.submit = Some((submit, food_input));
        routes.insert("/food-diary".to_string(), diary);

        let mut dashboard = Route::titled("Dashboard")
            .with(&first(&p.stat_cards), 4)
            .with(&first(&p.today_card), 1)
            .with(&first(&p.week_card), 1)
            .with(&first(&p.month_card), 1)
            .with(&first(&p.sync_card), 1)
            .with(&activities, 10)
            .with(&load_more, 1)
            .with(&first(&p.quick_actions), 2)
            .with(&first(&p.history_link), 1)
            .with(&first(&p.navigation), 1)
            .with(&first(&p.mobile_menu), 1);
        dashboard.shows_entries = true;
        dashboard.on_click.insert(load_more, (activities, 5));
        routes.insert("/dashboard".to_string(), dashboard);

        routes.insert(
            "/invalid-route".to_string(),
            Route::titled("404").with(&first(&p.not_found_marker), 1),
        );

        Self::with_routes(routes)
    }

    pub fn with_routes(routes: HashMap<String, Route>) -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState {
                reachable: true,
                routes,
                ..AppState::default()
            })),
        }
    }

    pub fn update_route(&self, path: &str, f: impl FnOnce(&mut Route)) {
        let mut state = self.state.lock().unwrap();
        f(state.routes.entry(path.to_string()).or_default());
    }

    pub fn fail_selector(&self, selector: &str) {
        self.state.lock().unwrap().failing_selectors.insert(selector.to_string());
    }

    pub fn fail_viewport(&self, width: u32, height: u32) {
        self.state.lock().unwrap().failing_viewports.insert((width, height));
    }

    pub fn fail_count(&self, selector: &str) {
        self.state.lock().unwrap().failing_counts.insert(selector.to_string());
    }

    pub fn browser(&self) -> StubBrowser {
        StubBrowser { app: self.clone() }
    }

    pub fn visits(&self) -> Vec<String> {
        self.state.lock().unwrap().visits.clone()
    }
}

/// Routine context pointed at the stub with short timeouts
pub fn context(dir: &Path) -> RoutineContext {
    let mut ctx = RoutineContext::new(BASE_URL, dir.to_path_buf());
    ctx.timeouts = fast_timeouts();
    ctx
}

pub fn fast_timeouts() -> Timeouts {
    Timeouts {
        navigation: Duration::from_millis(200),
        element: Duration::from_millis(20),
        optional_element: Duration::from_millis(20),
        settle: Duration::from_millis(100),
        sync_budget: Duration::from_millis(150),
        poll_interval: Duration::from_millis(10),
    }
}

pub struct StubBrowser {
    app: StubApp,
}

#[async_trait]
impl Browser for StubBrowser {
    async fn new_page(&self) -> E2eResult<Box<dyn Page>> {
        self.app.state.lock().unwrap().pages_opened += 1;
        Ok(Box::new(StubPage {
            app: self.app.clone(),
            route: Mutex::new(None),
            filled: Mutex::new(HashMap::new()),
            history: Mutex::new(Vec::new()),
        }))
    }

    async fn close(&self) -> E2eResult<()> {
        self.app.state.lock().unwrap().browser_closed = true;
        Ok(())
    }
}

pub struct StubPage {
    app: StubApp,
    route: Mutex<Option<String>>,
    filled: Mutex<HashMap<String, String>>,
    /// Routes visited since the last console drain
    history: Mutex<Vec<String>>,
}

impl StubPage {
    fn current(&self) -> Option<String> {
        self.route.lock().unwrap().clone()
    }

    fn matches(&self, selector: &str) -> usize {
        let state = self.app.state.lock().unwrap();
        self.current()
            .and_then(|r| state.routes.get(&r).and_then(|route| route.elements.get(selector).copied()))
            .unwrap_or(0)
    }

    fn check_selector(&self, selector: &str) -> E2eResult<()> {
        if self.app.state.lock().unwrap().failing_selectors.contains(selector) {
            return Err(E2eError::Playwright(format!("selector engine failed on {}", selector)));
        }
        Ok(())
    }
}

#[async_trait]
impl Page for StubPage {
    async fn goto(&self, url: &str, _wait_until: LoadState, _timeout: Duration) -> E2eResult<()> {
        let mut state = self.app.state.lock().unwrap();
        if !state.reachable {
            return Err(E2eError::Playwright(format!("net::ERR_CONNECTION_REFUSED at {}", url)));
        }

        let path = url.strip_prefix(BASE_URL).unwrap_or(url);
        let path = if path.is_empty() { "/" } else { path }.to_string();
        state.visits.push(path.clone());
        self.history.lock().unwrap().push(path.clone());
        *self.route.lock().unwrap() = Some(path);
        Ok(())
    }

    async fn reload(&self, _wait_until: LoadState, _timeout: Duration) -> E2eResult<()> {
        Ok(())
    }

    async fn title(&self) -> E2eResult<String> {
        let state = self.app.state.lock().unwrap();
        Ok(self
            .current()
            .and_then(|r| state.routes.get(&r).map(|route| route.title.clone()))
            .unwrap_or_default())
    }

    async fn count(&self, selector: &str) -> E2eResult<usize> {
        self.check_selector(selector)?;
        if self.app.state.lock().unwrap().failing_counts.contains(selector) {
            return Err(E2eError::Playwright(format!("count lost {}", selector)));
        }
        Ok(self.matches(selector))
    }

    async fn wait_for(&self, selector: &str, _timeout: Duration) -> E2eResult<bool> {
        self.check_selector(selector)?;
        Ok(self.matches(selector) > 0)
    }

    async fn fill(&self, selector: &str, value: &str) -> E2eResult<()> {
        self.check_selector(selector)?;
        self.filled.lock().unwrap().insert(selector.to_string(), value.to_string());
        Ok(())
    }

    async fn click(&self, selector: &str) -> E2eResult<()> {
        self.check_selector(selector)?;
        let Some(path) = self.current() else {
            return Err(E2eError::Playwright("no page loaded".to_string()));
        };

        let mut state = self.app.state.lock().unwrap();
        let Some(route) = state.routes.get(&path).cloned() else {
            return Ok(());
        };

        if let Some((submit, field)) = &route.submit {
            if submit == selector {
                if let Some(value) = self.filled.lock().unwrap().get(field) {
                    state.entries.push(value.clone());
                }
            }
        }

        if let Some((target, delta)) = route.on_click.get(selector) {
            if let Some(route) = state.routes.get_mut(&path) {
                *route.elements.entry(target.clone()).or_default() += delta;
            }
        }
        Ok(())
    }

    async fn set_viewport(&self, width: u32, height: u32) -> E2eResult<()> {
        let mut state = self.app.state.lock().unwrap();
        if state.failing_viewports.contains(&(width, height)) {
            return Err(E2eError::Playwright(format!("cannot resize to {}x{}", width, height)));
        }
        state.viewports.push((width, height));
        Ok(())
    }

    async fn screenshot(&self, path: &Path, _full_page: bool) -> E2eResult<()> {
        let label = self.current().unwrap_or_default();
        std::fs::write(path, format!("stub screenshot of {}", label))?;
        Ok(())
    }

    async fn contains_text(&self, text: &str) -> E2eResult<bool> {
        let state = self.app.state.lock().unwrap();
        let Some(route) = self.current().and_then(|r| state.routes.get(&r).cloned()) else {
            return Ok(false);
        };
        Ok(route.text.contains(text) || (route.shows_entries && state.entries.iter().any(|e| e.contains(text))))
    }

    async fn drain_console(&self) -> E2eResult<Vec<ConsoleMessage>> {
        let state = self.app.state.lock().unwrap();
        let history = std::mem::take(&mut *self.history.lock().unwrap());
        let mut messages = Vec::new();

        for path in &history {
            if let Some(route) = state.routes.get(path) {
                messages.extend(route.console.iter().map(|text| ConsoleMessage {
                    level: "error".to_string(),
                    text: text.clone(),
                    timestamp: 0,
                }));
                messages.extend(
                    route
                        .responses
                        .iter()
                        .filter(|(path, status)| *status >= 400 || path.starts_with("/api/"))
                        .map(|(path, status)| ConsoleMessage {
                            level: RESPONSE_LEVEL.to_string(),
                            text: format!("GET {}{} {}", BASE_URL, path, status),
                            timestamp: 0,
                        }),
                );
            }
        }
        Ok(messages)
    }

    async fn close(&self) -> E2eResult<()> {
        self.app.state.lock().unwrap().pages_closed += 1;
        Ok(())
    }
}

pub fn screenshot_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().map(|e| e == "png").unwrap_or(false))
        .collect();
    files.sort();
    files
}
