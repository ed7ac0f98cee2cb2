use crate::config::Settings;
use crate::utils::error::{E2eError, Result};
use crate::utils::masking::mask_text;
use playwright_rs::{
    expect, Cookie, GotoOptions, Locator, Page, PressSequentiallyOptions, WaitUntil,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_SLOW_VISIBLE_TIMEOUT: u64 = 3000;

/// Library timeouts become `ElementTimeout`; anything else stays a browser error.
fn wait_error(error: playwright_rs::Error, description: &str, timeout_ms: u64) -> E2eError {
    match error {
        playwright_rs::Error::Timeout(_) | playwright_rs::Error::AssertionTimeout(_) => {
            E2eError::ElementTimeout {
                description: description.to_string(),
                timeout_ms,
            }
        }
        other => E2eError::BrowserError(other),
    }
}

/// Keeps `[A-Za-z0-9_-]`, replaces everything else with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(80)
        .collect();
    if cleaned.is_empty() {
        "unnamed".to_string()
    } else {
        cleaned
    }
}

/// Shared actions, waits and checks for every page object.
#[derive(Clone)]
pub struct BasePage {
    page: Page,
    settings: Arc<Settings>,
}

impl BasePage {
    pub fn new(page: Page, settings: Arc<Settings>) -> Self {
        Self { page, settings }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn url(&self) -> String {
        self.page.url()
    }

    pub async fn title(&self) -> Result<String> {
        Ok(self.page.title().await?)
    }

    pub async fn locator(&self, selector: &str) -> Locator {
        self.page.locator(selector).await
    }

    fn dom_ready() -> GotoOptions {
        GotoOptions::new().wait_until(WaitUntil::DomContentLoaded)
    }

    pub async fn open(&self, url: &str) -> Result<()> {
        tracing::info!("🌍 Navigating to: {}", url);
        self.page.goto(url, Some(Self::dom_ready())).await?;
        Ok(())
    }

    pub async fn refresh(&self) -> Result<()> {
        tracing::info!("🔄 Refreshing page...");
        self.page.reload(Some(Self::dom_ready())).await?;
        Ok(())
    }

    pub async fn click(&self, locator: &Locator, description: &str) -> Result<()> {
        tracing::info!("🖱️ Clicking on '{}'", description);
        if let Err(e) = locator.click(None).await {
            tracing::error!("❌ Failed to click '{}': {}", description, e);
            self.take_screenshot(&format!("fail_click_{}", description))
                .await;
            return Err(E2eError::BrowserError(e));
        }
        Ok(())
    }

    pub async fn fill(&self, locator: &Locator, text: &str, description: &str) -> Result<()> {
        tracing::info!(
            "⌨️ Typing '{}' into '{}'",
            mask_text(description, text),
            description
        );
        locator.fill("", None).await?;
        let options = PressSequentiallyOptions::builder()
            .delay(self.settings.timeouts.typing as f64)
            .build();
        locator.press_sequentially(text, Some(options)).await?;
        Ok(())
    }

    pub async fn hover(&self, locator: &Locator, description: &str) -> Result<()> {
        tracing::debug!("🖱️ Hovering '{}'", description);
        locator.hover(None).await?;
        Ok(())
    }

    pub async fn press(&self, locator: &Locator, key: &str) -> Result<()> {
        tracing::debug!("⌨️ Pressing {}", key);
        locator.press(key, None).await?;
        Ok(())
    }

    pub async fn get_text(&self, locator: &Locator, description: &str) -> Result<String> {
        let text = locator.text_content().await?.unwrap_or_default();
        let text = text.trim().to_string();
        tracing::debug!("👀 Read text from '{}': '{}'", description, text);
        Ok(text)
    }

    pub async fn get_attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>> {
        Ok(locator.get_attribute(name).await?)
    }

    pub async fn input_value(&self, locator: &Locator) -> Result<String> {
        Ok(locator.input_value(None).await?)
    }

    pub async fn is_enabled(&self, locator: &Locator) -> Result<bool> {
        Ok(locator.is_enabled().await?)
    }

    pub async fn count(&self, locator: &Locator) -> usize {
        locator.count().await.unwrap_or(0)
    }

    pub async fn wait_for_visible(
        &self,
        locator: &Locator,
        description: &str,
        timeout: Option<u64>,
    ) -> Result<()> {
        let timeout_ms = timeout.unwrap_or(self.settings.timeouts.element);
        tracing::debug!("⏳ Waiting for '{}' to be visible...", description);
        expect(locator.clone())
            .with_timeout(Duration::from_millis(timeout_ms))
            .to_be_visible()
            .await
            .map_err(|e| wait_error(e, description, timeout_ms))
    }

    pub async fn wait_for_hidden(&self, locator: &Locator, timeout: Option<u64>) -> Result<()> {
        let timeout_ms = timeout.unwrap_or(self.settings.timeouts.element);
        expect(locator.clone())
            .with_timeout(Duration::from_millis(timeout_ms))
            .to_be_hidden()
            .await
            .map_err(|e| wait_error(e, "element to disappear", timeout_ms))
    }

    /// Waits for a URL containing `partial`.
    pub async fn wait_for_url(&self, partial: &str, timeout: Option<u64>) -> Result<()> {
        tracing::info!("⏳ Waiting for URL containing: '{}'", partial);
        self.wait_for_url_pattern(&format!("**{}**", partial), timeout)
            .await
    }

    /// Waits for a URL matching a Playwright glob such as `**/post/**`.
    pub async fn wait_for_url_pattern(&self, glob: &str, timeout: Option<u64>) -> Result<()> {
        let timeout_ms = timeout.unwrap_or(self.settings.timeouts.default);
        let options = GotoOptions::new().timeout(Duration::from_millis(timeout_ms));
        self.page
            .wait_for_url(glob, Some(options))
            .await
            .map_err(|e| wait_error(e, &format!("URL matching '{}'", glob), timeout_ms))
    }

    /// Instant check; errors count as not visible.
    pub async fn is_visible(&self, locator: &Locator) -> bool {
        locator.is_visible().await.unwrap_or(false)
    }

    pub async fn is_visible_slow(&self, locator: &Locator, timeout: Option<u64>) -> bool {
        let timeout_ms = timeout.unwrap_or(DEFAULT_SLOW_VISIBLE_TIMEOUT);
        expect(locator.clone())
            .with_timeout(Duration::from_millis(timeout_ms))
            .to_be_visible()
            .await
            .is_ok()
    }

    pub async fn pause(&self, ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    pub async fn evaluate(&self, script: &str) -> Result<String> {
        Ok(self.page.evaluate_value(script).await?)
    }

    pub async fn scroll_to_bottom(&self) -> Result<()> {
        tracing::debug!("📜 Scrolling to bottom");
        self.evaluate("window.scrollTo(0, document.body.scrollHeight); true")
            .await?;
        Ok(())
    }

    pub async fn set_local_storage(&self, key: &str, value: &str) -> Result<()> {
        let script = format!(
            "window.localStorage.setItem({}, {}); true",
            serde_json::to_string(key)?,
            serde_json::to_string(value)?
        );
        self.evaluate(&script).await?;
        Ok(())
    }

    /// Adds cookies to the page's browser context.
    pub async fn add_cookies(&self, cookies: &[Cookie]) -> Result<()> {
        tracing::debug!("🍪 Adding {} cookie(s) to the browser context", cookies.len());
        self.page.context()?.add_cookies(cookies).await?;
        Ok(())
    }

    /// Saves `screenshots/<name><timestamp>.png`; failures are only logged.
    pub async fn take_screenshot(&self, name: &str) -> Option<PathBuf> {
        let dir = self.settings.artifact_dir("screenshots");
        let path = dir.join(format!(
            "{}{}.png",
            sanitize_file_name(name),
            Settings::current_timestamp()
        ));

        let result = async {
            tokio::fs::create_dir_all(&dir).await?;
            let bytes = self.page.screenshot(None).await?;
            tokio::fs::write(&path, bytes).await?;
            Ok::<_, E2eError>(())
        }
        .await;

        match result {
            Ok(()) => {
                tracing::info!("📸 Screenshot saved: {}", path.display());
                Some(path)
            }
            Err(e) => {
                tracing::warn!("⚠️ Could not take screenshot: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("fail_click_Login button"), "fail_click_Login_button");
        assert_eq!(sanitize_file_name("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize_file_name(""), "unnamed");
        assert_eq!(sanitize_file_name(&"x".repeat(200)).len(), 80);
    }

    #[test]
    fn test_library_timeouts_become_element_timeout() {
        let err = wait_error(
            playwright_rs::Error::AssertionTimeout("not visible after 5s".to_string()),
            "Login button",
            5000,
        );
        assert!(matches!(
            err,
            E2eError::ElementTimeout { ref description, timeout_ms: 5000 } if description == "Login button"
        ));

        let err = wait_error(
            playwright_rs::Error::Timeout("wait_for_url(**/post/**) timed out".to_string()),
            "URL matching '**/post/**'",
            10000,
        );
        assert!(matches!(err, E2eError::ElementTimeout { timeout_ms: 10000, .. }));
    }

    #[test]
    fn test_other_wait_failures_stay_browser_errors() {
        let err = wait_error(playwright_rs::Error::ChannelClosed, "Login button", 5000);
        assert!(matches!(err, E2eError::BrowserError(_)));
    }
}
