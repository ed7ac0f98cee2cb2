//! Test runner glue for the live suites.
//!
//! Every live test is a plain `#[tokio::test]` that hands its body to
//! [`api_case`] or [`ui_case`]. The runner checks the `BLOG_E2E` gate and the
//! marker filter, sets up clients (and a browser page for UI cases), catches
//! panics, captures failure artifacts and appends a line to the run report.

use crate::config::Settings;
use crate::core::markers::{Marker, MarkerExpr};
use crate::core::report::{self, Outcome, TestRecord, REPORT_FILE_NAME};
use crate::utils::api_client::BlogApiClient;
use crate::utils::error::E2eError;
use crate::utils::logger;
use anyhow::Context;
use std::future::Future;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

#[cfg(feature = "ui")]
use crate::core::base_page::BasePage;
#[cfg(feature = "ui")]
use crate::core::browser_factory::{BrowserFactory, VideoRecording};

pub const ARTIFACT_DIRS: [&str; 4] = ["logs", "screenshots", "reports", "logs/videos"];

static SUITE: OnceLock<Suite> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    pub id: &'static str,
    pub name: &'static str,
    pub markers: &'static [Marker],
}

impl TestCase {
    pub const fn new(id: &'static str, name: &'static str, markers: &'static [Marker]) -> Self {
        Self { id, name, markers }
    }
}

pub struct Suite {
    settings: Arc<Settings>,
    filter: MarkerExpr,
}

impl Suite {
    /// Loads settings, installs logging and creates the artifact directories.
    /// Runs once per test binary.
    pub fn prepare() -> anyhow::Result<&'static Suite> {
        if let Some(suite) = SUITE.get() {
            return Ok(suite);
        }

        let settings = Settings::global().context("Failed to load test settings")?;
        logger::init_test_logger(settings);

        let filter = MarkerExpr::parse(settings.run.markers.as_deref().unwrap_or(""))?;
        create_artifact_dirs(settings)?;

        let suite = SUITE.get_or_init(|| {
            tracing::info!("{}", "=".repeat(60));
            tracing::info!("🚀 Blog E2E run ({})", settings.environment);
            tracing::info!("🌐 UI: {}", settings.urls.base_ui);
            tracing::info!("🔌 API: {}", settings.urls.base_api);
            if let Some(markers) = &settings.run.markers {
                tracing::info!("🏷️ Marker filter: {}", markers);
            }
            tracing::info!("{}", "=".repeat(60));

            Suite {
                settings: Arc::new(settings.clone()),
                filter,
            }
        });
        Ok(suite)
    }

    pub fn settings(&self) -> Arc<Settings> {
        self.settings.clone()
    }

    pub fn report_path(&self) -> PathBuf {
        self.settings
            .artifact_dir("reports")
            .join(REPORT_FILE_NAME)
    }

    pub fn skip_reason(&self, case: &TestCase) -> Option<String> {
        if !self.settings.run.enabled {
            return Some("live suites are disabled, set BLOG_E2E=1".to_string());
        }
        if !self.filter.matches(case.markers) {
            return Some("deselected by E2E_MARKERS".to_string());
        }
        None
    }
}

pub fn create_artifact_dirs(settings: &Settings) -> std::io::Result<()> {
    for dir in ARTIFACT_DIRS {
        std::fs::create_dir_all(settings.artifact_dir(dir))?;
    }
    Ok(())
}

/// Error that turns the current test into a logged skip.
pub fn skip(reason: impl Into<String>) -> anyhow::Error {
    anyhow::Error::new(E2eError::skipped(reason))
}

fn skip_reason_of(error: &anyhow::Error) -> Option<String> {
    error.chain().find_map(|cause| match cause.downcast_ref::<E2eError>() {
        Some(E2eError::Skipped { reason }) => Some(reason.clone()),
        _ => None,
    })
}

/// Runs the body on its own task so a panicking assertion still produces a
/// failure record.
async fn run_captured<Fut>(body: Fut) -> anyhow::Result<()>
where
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    match tokio::spawn(body).await {
        Ok(result) => result,
        Err(join_error) if join_error.is_panic() => {
            let payload = join_error.into_panic();
            let message = payload
                .downcast_ref::<String>()
                .cloned()
                .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
                .unwrap_or_else(|| "test body panicked".to_string());
            Err(anyhow::anyhow!("panic: {}", message))
        }
        Err(join_error) => Err(anyhow::anyhow!("test task cancelled: {}", join_error)),
    }
}

fn record_skip(suite: &Suite, case: &TestCase, reason: &str) {
    tracing::info!("⏭️ [{}] {} skipped: {}", case.id, case.name, reason);
    let record = TestRecord::new(case.id, case.name, case.markers, Outcome::Skipped, 0);
    write_record(suite, record);
}

fn write_record(suite: &Suite, record: TestRecord) {
    if let Err(e) = report::append(&suite.report_path(), &record) {
        tracing::warn!("⚠️ Could not write report line for {}: {}", record.id, e);
    }
}

/// Logs the outcome, writes the report line and converts skips into `Ok`.
fn finish(
    suite: &Suite,
    case: &TestCase,
    started: Instant,
    result: anyhow::Result<()>,
    screenshot: Option<PathBuf>,
) -> anyhow::Result<()> {
    let duration_ms = started.elapsed().as_millis() as u64;

    let (outcome, error, returned) = match result {
        Ok(()) => {
            tracing::info!("✅ [{}] {} PASSED in {}ms", case.id, case.name, duration_ms);
            (Outcome::Passed, None, Ok(()))
        }
        Err(e) => match skip_reason_of(&e) {
            Some(reason) => {
                tracing::info!("⏭️ [{}] {} skipped: {}", case.id, case.name, reason);
                (Outcome::Skipped, Some(reason), Ok(()))
            }
            None => {
                tracing::error!("❌ [{}] {} FAILED: {:#}", case.id, case.name, e);
                (Outcome::Failed, Some(format!("{:#}", e)), Err(e))
            }
        },
    };

    let mut record = TestRecord::new(case.id, case.name, case.markers, outcome, duration_ms);
    record.error = error;
    record.screenshot = screenshot.map(|p| p.display().to_string());
    write_record(suite, record);

    returned
}

pub struct ApiContext {
    pub api: BlogApiClient,
    pub settings: Arc<Settings>,
}

/// Runs an API-only test.
pub async fn api_case<F, Fut>(case: TestCase, body: F) -> anyhow::Result<()>
where
    F: FnOnce(ApiContext) -> Fut,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    let suite = Suite::prepare()?;
    if let Some(reason) = suite.skip_reason(&case) {
        record_skip(suite, &case, &reason);
        return Ok(());
    }

    tracing::info!("🧪 [{}] Starting {}", case.id, case.name);
    let started = Instant::now();
    let settings = suite.settings();

    let result = match BlogApiClient::from_settings(&settings) {
        Ok(api) => {
            let context = ApiContext {
                api: api.clone(),
                settings,
            };
            let result = run_captured(body(context)).await;
            if let Err(e) = api.clear_session() {
                tracing::warn!("⚠️ Could not reset API session: {}", e);
            }
            result
        }
        Err(e) => Err(e.into()),
    };

    finish(suite, &case, started, result, None)
}

#[cfg(feature = "ui")]
pub struct UiContext {
    pub page: BasePage,
    pub api: BlogApiClient,
    pub settings: Arc<Settings>,
}

/// Runs a browser test on a fresh context and page.
#[cfg(feature = "ui")]
pub async fn ui_case<F, Fut>(case: TestCase, body: F) -> anyhow::Result<()>
where
    F: FnOnce(UiContext) -> Fut,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    let suite = Suite::prepare()?;
    if let Some(reason) = suite.skip_reason(&case) {
        record_skip(suite, &case, &reason);
        return Ok(());
    }

    tracing::info!("🧪 [{}] Starting {}", case.id, case.name);
    let started = Instant::now();
    let settings = suite.settings();

    let session = match BrowserFactory::launch(&settings.browser).await {
        Ok(session) => session,
        Err(e) => return finish(suite, &case, started, Err(e.into()), None),
    };

    let video = if settings.browser.record_video {
        match VideoRecording::new(&settings.artifact_dir("logs/videos"), case.name) {
            Ok(video) => Some(video),
            Err(e) => {
                tracing::warn!("⚠️ Video recording disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    let handle = match BrowserFactory::create_page(&session.browser, &settings, video.as_ref()).await
    {
        Ok(handle) => handle,
        Err(e) => {
            if let Err(close_err) = session.close().await {
                tracing::warn!("⚠️ Browser close failed: {}", close_err);
            }
            return finish(suite, &case, started, Err(e.into()), None);
        }
    };

    let base = BasePage::new(handle.page.clone(), settings.clone());

    let result = match BlogApiClient::from_settings(&settings) {
        Ok(api) => {
            let context = UiContext {
                page: base.clone(),
                api: api.clone(),
                settings: settings.clone(),
            };
            let result = run_captured(body(context)).await;
            if let Err(e) = api.clear_session() {
                tracing::warn!("⚠️ Could not reset API session: {}", e);
            }
            result
        }
        Err(e) => Err(e.into()),
    };

    let failed = result
        .as_ref()
        .err()
        .is_some_and(|e| skip_reason_of(e).is_none());
    let screenshot = if failed {
        base.take_screenshot(&format!("FAILED_{}_", case.name)).await
    } else {
        None
    };

    if let Err(e) = handle.close().await {
        tracing::warn!("⚠️ Page close failed: {}", e);
    }
    if let Err(e) = session.close().await {
        tracing::warn!("⚠️ Browser close failed: {}", e);
    }

    // The video file is only complete once its context has closed.
    if let (true, Some(video)) = (failed, &video) {
        if let Err(e) = video.mark_failed() {
            tracing::warn!("⚠️ Could not keep video: {}", e);
        }
    }

    finish(suite, &case, started, result, screenshot)
}
