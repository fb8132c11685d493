//! Playwright browser automation
//!
//! A single `node` child process runs a small bridge script that owns the
//! Playwright browser. Requests and replies are JSON lines over the child's
//! stdin/stdout, each tagged with an id. Pages are addressed by the id the
//! bridge hands out, so several pages can be open at once while every
//! request is still sent and answered one at a time.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command as TokioCommand};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{E2eError, E2eResult};
use crate::page::{Browser, ConsoleMessage, LoadState, Page};

/// Extra time granted to a reply beyond the operation's own timeout
const REPLY_MARGIN: Duration = Duration::from_secs(5);

/// Timeout for interactions that take none explicitly
const ACTION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

impl std::str::FromStr for BrowserKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" => Ok(BrowserKind::Webkit),
            other => Err(format!("unknown browser: {}", other)),
        }
    }
}

/// Configuration for Playwright
#[derive(Debug, Clone)]
pub struct PlaywrightConfig {
    pub browser: BrowserKind,
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub user_agent: Option<String>,
    pub launch_args: Vec<String>,
    /// Directory `playwright` is resolved from (where `node_modules` lives)
    pub working_dir: PathBuf,
    /// Reply timeout for requests that carry no timeout of their own
    pub request_timeout: Duration,
}

impl Default for PlaywrightConfig {
    fn default() -> Self {
        Self {
            browser: BrowserKind::Chromium,
            headless: true,
            viewport_width: 1920,
            viewport_height: 1080,
            user_agent: Some(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36".to_string(),
            ),
            launch_args: vec![
                "--disable-web-security".to_string(),
                "--disable-features=VizDisplayCompositor".to_string(),
            ],
            working_dir: PathBuf::from("."),
            request_timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Reply {
    id: u64,
    ok: bool,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    error: Option<String>,
}

struct BridgeIo {
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
    next_id: u64,
}

/// The node process and its request channel
struct Bridge {
    io: Mutex<BridgeIo>,
    child: Mutex<Child>,
    default_timeout: Duration,
    // Holds bridge.js until the process exits
    _script_dir: tempfile::TempDir,
}

impl Bridge {
    async fn spawn(config: &PlaywrightConfig) -> E2eResult<Self> {
        let script_dir = tempfile::tempdir()?;
        let script_path = script_dir.path().join("bridge.js");
        std::fs::write(&script_path, BRIDGE_SCRIPT)?;

        debug!("Starting Playwright bridge: {}", script_path.display());

        let mut child = TokioCommand::new("node")
            .arg(&script_path)
            .current_dir(&config.working_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| E2eError::Playwright(format!("Failed to spawn node: {}", e)))?;

        let stdin = child.stdin.take().ok_or(E2eError::BridgeClosed)?;
        let stdout = child.stdout.take().ok_or(E2eError::BridgeClosed)?;

        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    debug!("[bridge] {}", line);
                }
            });
        }

        Ok(Self {
            io: Mutex::new(BridgeIo {
                stdin,
                stdout: BufReader::new(stdout).lines(),
                next_id: 1,
            }),
            child: Mutex::new(child),
            default_timeout: config.request_timeout,
            _script_dir: script_dir,
        })
    }

    /// Send one request and wait for its reply.
    ///
    /// `op_timeout` is the operation's own budget; the reply wait adds
    /// [`REPLY_MARGIN`] on top so the bridge can report its own timeout first.
    async fn request(&self, op: &str, mut params: Value, op_timeout: Option<Duration>) -> E2eResult<Value> {
        let mut io = self.io.lock().await;
        let id = io.next_id;
        io.next_id += 1;

        params["id"] = json!(id);
        params["op"] = json!(op);

        let mut line = serde_json::to_string(&params)?;
        line.push('\n');
        debug!("-> {}", line.trim_end());

        io.stdin.write_all(line.as_bytes()).await?;
        io.stdin.flush().await?;

        let wait = op_timeout.map(|t| t + REPLY_MARGIN).unwrap_or(self.default_timeout);

        let reply = tokio::time::timeout(wait, read_reply(&mut io.stdout, id))
            .await
            .map_err(|_| E2eError::Timeout(format!("bridge reply to '{}'", op)))??;

        if reply.ok {
            Ok(reply.value)
        } else {
            Err(E2eError::Playwright(
                reply.error.unwrap_or_else(|| format!("'{}' failed", op)),
            ))
        }
    }
}

/// Read stdout lines until the reply tagged `id` arrives
async fn read_reply(stdout: &mut Lines<BufReader<ChildStdout>>, id: u64) -> E2eResult<Reply> {
    loop {
        let Some(line) = stdout.next_line().await? else {
            return Err(E2eError::BridgeClosed);
        };
        match serde_json::from_str::<Reply>(&line) {
            Ok(reply) if reply.id == id => return Ok(reply),
            Ok(reply) => warn!("Discarding stale bridge reply {}", reply.id),
            Err(_) => debug!("[bridge stdout] {}", line),
        }
    }
}

/// Browser handle backed by the Playwright bridge
pub struct PlaywrightBrowser {
    bridge: Arc<Bridge>,
}

impl PlaywrightBrowser {
    /// Start node, load Playwright and launch the browser
    pub async fn launch(config: PlaywrightConfig) -> E2eResult<Self> {
        Self::check_playwright_installed(&config.working_dir).await?;

        let bridge = Bridge::spawn(&config).await?;
        bridge
            .request(
                "launch",
                json!({
                    "browser": config.browser.as_str(),
                    "headless": config.headless,
                    "args": config.launch_args,
                    "width": config.viewport_width,
                    "height": config.viewport_height,
                    "userAgent": config.user_agent,
                }),
                None,
            )
            .await?;

        info!(
            "Launched {} ({}x{}, headless: {})",
            config.browser.as_str(),
            config.viewport_width,
            config.viewport_height,
            config.headless
        );

        Ok(Self {
            bridge: Arc::new(bridge),
        })
    }

    /// Check if Playwright is installed
    async fn check_playwright_installed(working_dir: &Path) -> E2eResult<()> {
        let output = TokioCommand::new("npx")
            .args(["--no-install", "playwright", "--version"])
            .current_dir(working_dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match output {
            Ok(status) if status.success() => Ok(()),
            _ => Err(E2eError::PlaywrightNotFound),
        }
    }
}

#[async_trait]
impl Browser for PlaywrightBrowser {
    async fn new_page(&self) -> E2eResult<Box<dyn Page>> {
        let value = self.bridge.request("newPage", json!({}), None).await?;
        let id = value
            .as_u64()
            .ok_or_else(|| E2eError::Playwright(format!("bad page id: {}", value)))?;

        Ok(Box::new(PlaywrightPage {
            bridge: Arc::clone(&self.bridge),
            id,
            closed: AtomicBool::new(false),
        }))
    }

    async fn close(&self) -> E2eResult<()> {
        match self.bridge.request("close", json!({}), None).await {
            Ok(_) | Err(E2eError::BridgeClosed) => {}
            Err(e) => warn!("Browser close failed: {}", e),
        }

        let mut child = self.bridge.child.lock().await;
        if let Ok(Some(status)) = child.try_wait() {
            debug!("Bridge exited with {}", status);
            return Ok(());
        }
        if let Err(e) = child.kill().await {
            warn!("Failed to kill Playwright bridge: {}", e);
        }
        Ok(())
    }
}

/// One Playwright page
pub struct PlaywrightPage {
    bridge: Arc<Bridge>,
    id: u64,
    closed: AtomicBool,
}

impl PlaywrightPage {
    async fn call(&self, op: &str, mut params: Value, timeout: Option<Duration>) -> E2eResult<Value> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(E2eError::PageClosed(self.id));
        }
        params["page"] = json!(self.id);
        self.bridge.request(op, params, timeout).await
    }
}

fn millis(d: Duration) -> u64 {
    d.as_millis() as u64
}

#[async_trait]
impl Page for PlaywrightPage {
    async fn goto(&self, url: &str, wait_until: LoadState, timeout: Duration) -> E2eResult<()> {
        self.call(
            "goto",
            json!({ "url": url, "waitUntil": wait_until.as_str(), "timeout": millis(timeout) }),
            Some(timeout),
        )
        .await?;
        Ok(())
    }

    async fn reload(&self, wait_until: LoadState, timeout: Duration) -> E2eResult<()> {
        self.call(
            "reload",
            json!({ "waitUntil": wait_until.as_str(), "timeout": millis(timeout) }),
            Some(timeout),
        )
        .await?;
        Ok(())
    }

    async fn title(&self) -> E2eResult<String> {
        let value = self.call("title", json!({}), None).await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    async fn count(&self, selector: &str) -> E2eResult<usize> {
        let value = self.call("count", json!({ "selector": selector }), None).await?;
        Ok(value.as_u64().unwrap_or(0) as usize)
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> E2eResult<bool> {
        let value = self
            .call(
                "waitFor",
                json!({ "selector": selector, "timeout": millis(timeout) }),
                Some(timeout),
            )
            .await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    async fn fill(&self, selector: &str, value: &str) -> E2eResult<()> {
        self.call(
            "fill",
            json!({ "selector": selector, "value": value, "timeout": millis(ACTION_TIMEOUT) }),
            Some(ACTION_TIMEOUT),
        )
        .await?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> E2eResult<()> {
        self.call(
            "click",
            json!({ "selector": selector, "timeout": millis(ACTION_TIMEOUT) }),
            Some(ACTION_TIMEOUT),
        )
        .await?;
        Ok(())
    }

    async fn set_viewport(&self, width: u32, height: u32) -> E2eResult<()> {
        self.call("setViewport", json!({ "width": width, "height": height }), None)
            .await?;
        Ok(())
    }

    async fn screenshot(&self, path: &Path, full_page: bool) -> E2eResult<()> {
        self.call(
            "screenshot",
            json!({ "path": path.to_string_lossy(), "fullPage": full_page }),
            None,
        )
        .await?;
        Ok(())
    }

    async fn contains_text(&self, text: &str) -> E2eResult<bool> {
        let value = self.call("containsText", json!({ "text": text }), None).await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    async fn drain_console(&self) -> E2eResult<Vec<ConsoleMessage>> {
        let value = self.call("console", json!({}), None).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn close(&self) -> E2eResult<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.bridge
            .request("closePage", json!({ "page": self.id }), None)
            .await?;
        Ok(())
    }
}

/// Bridge program run by node. Reads one JSON request per line from stdin
/// and writes one JSON reply per line to stdout.
const BRIDGE_SCRIPT: &str = r##"
const readline = require('readline');
const pw = require(require.resolve('playwright', { paths: [process.cwd(), __dirname] }));

let browser = null;
let context = null;
const pages = new Map();
let nextPageId = 1;

function track(id, page) {
  const entry = { page, console: [] };
  const push = (level, text) => entry.console.push({ level, text, timestamp: Date.now() });
  page.on('console', msg => push(msg.type(), msg.text()));
  page.on('pageerror', err => push('pageerror', String(err)));
  page.on('requestfailed', req => {
    const failure = req.failure();
    push('requestfailed', `${req.method()} ${req.url()} ${failure ? failure.errorText : ''}`.trim());
  });
  page.on('response', res => {
    const url = res.url();
    if (res.status() < 400 && !url.includes('/api/')) return;
    push('response', `${res.request().method()} ${url} ${res.status()} ${res.statusText()}`.trim());
  });
  pages.set(id, entry);
}

function pageOf(cmd) {
  const entry = pages.get(cmd.page);
  if (!entry) throw new Error(`unknown page ${cmd.page}`);
  return entry;
}

const handlers = {
  async launch(cmd) {
    browser = await pw[cmd.browser].launch({ headless: cmd.headless, args: cmd.args });
    const options = { viewport: { width: cmd.width, height: cmd.height } };
    if (cmd.userAgent) options.userAgent = cmd.userAgent;
    context = await browser.newContext(options);
    return null;
  },
  async newPage() {
    const page = await context.newPage();
    const id = nextPageId++;
    track(id, page);
    return id;
  },
  async goto(cmd) {
    await pageOf(cmd).page.goto(cmd.url, { waitUntil: cmd.waitUntil, timeout: cmd.timeout });
    return null;
  },
  async reload(cmd) {
    await pageOf(cmd).page.reload({ waitUntil: cmd.waitUntil, timeout: cmd.timeout });
    return null;
  },
  async title(cmd) {
    return await pageOf(cmd).page.title();
  },
  async count(cmd) {
    return (await pageOf(cmd).page.$$(cmd.selector)).length;
  },
  async waitFor(cmd) {
    try {
      await pageOf(cmd).page.waitForSelector(cmd.selector, { timeout: cmd.timeout });
      return true;
    } catch (e) {
      if (e && e.name === 'TimeoutError') return false;
      throw e;
    }
  },
  async fill(cmd) {
    await pageOf(cmd).page.fill(cmd.selector, cmd.value, { timeout: cmd.timeout });
    return null;
  },
  async click(cmd) {
    await pageOf(cmd).page.click(cmd.selector, { timeout: cmd.timeout });
    return null;
  },
  async setViewport(cmd) {
    await pageOf(cmd).page.setViewportSize({ width: cmd.width, height: cmd.height });
    return null;
  },
  async screenshot(cmd) {
    await pageOf(cmd).page.screenshot({ path: cmd.path, fullPage: cmd.fullPage });
    return null;
  },
  async containsText(cmd) {
    return await pageOf(cmd).page.evaluate(
      t => document.body !== null && document.body.innerText.includes(t),
      cmd.text
    );
  },
  async console(cmd) {
    const entry = pageOf(cmd);
    const drained = entry.console;
    entry.console = [];
    return drained;
  },
  async closePage(cmd) {
    const entry = pageOf(cmd);
    pages.delete(cmd.page);
    await entry.page.close();
    return null;
  },
  async close() {
    if (browser) await browser.close();
    browser = null;
    return null;
  },
};

const rl = readline.createInterface({ input: process.stdin });
let queue = Promise.resolve();

rl.on('line', line => {
  queue = queue.then(async () => {
    let cmd;
    try {
      cmd = JSON.parse(line);
    } catch (e) {
      return;
    }
    let reply;
    try {
      const handler = handlers[cmd.op];
      if (!handler) throw new Error(`unknown op ${cmd.op}`);
      const value = await handler(cmd);
      reply = { id: cmd.id, ok: true, value: value === undefined ? null : value };
    } catch (e) {
      reply = { id: cmd.id, ok: false, error: e && e.message ? e.message : String(e) };
    }
    const out = JSON.stringify(reply) + '\n';
    if (cmd.op === 'close') {
      process.stdout.write(out, () => process.exit(0));
    } else {
      process.stdout.write(out);
    }
  });
});

rl.on('close', async () => {
  if (browser) await browser.close();
  process.exit(0);
});
"##;
