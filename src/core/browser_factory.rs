use crate::config::{BrowserKind, BrowserSettings, Settings};
use crate::core::base_page::sanitize_file_name;
use crate::utils::error::Result;
use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, LaunchOptions, Page, Playwright, RecordVideo,
    Viewport,
};
use std::path::{Path, PathBuf};

/// A running Playwright driver plus one launched browser.
pub struct BrowserSession {
    pub playwright: Playwright,
    pub browser: Browser,
    pub kind: BrowserKind,
}

impl BrowserSession {
    /// Closes the browser, then stops the driver process.
    pub async fn close(self) -> Result<()> {
        tracing::debug!("🧹 Closing {} browser", self.kind.as_str());
        let browser_result = self.browser.close().await;
        let driver_result = self.playwright.shutdown().await;
        browser_result?;
        driver_result?;
        Ok(())
    }
}

/// Per-test directory the context records its video into.
pub struct VideoRecording {
    dir: PathBuf,
}

impl VideoRecording {
    /// Creates `<videos_dir>/<test>_<timestamp>`.
    pub fn new(videos_dir: &Path, test_name: &str) -> Result<Self> {
        let dir = videos_dir.join(format!(
            "{}_{}",
            sanitize_file_name(test_name),
            Settings::current_timestamp()
        ));
        std::fs::create_dir_all(&dir)?;
        tracing::debug!("🎥 Recording video to {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Renames the directory to `FAILED_<name>` and returns the new path.
    /// Call after the context is closed so the video file is complete.
    pub fn mark_failed(&self) -> Result<PathBuf> {
        let name = self
            .dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "video".to_string());
        let target = self.dir.with_file_name(format!("FAILED_{}", name));
        std::fs::rename(&self.dir, &target)?;
        tracing::info!("🎥 Video kept: {}", target.display());
        Ok(target)
    }
}

/// A page in its own isolated context.
pub struct PageHandle {
    pub context: BrowserContext,
    pub page: Page,
}

impl PageHandle {
    /// Closes the page, then its context. Closing the context flushes the video.
    pub async fn close(self) -> Result<()> {
        let page_result = self.page.close().await;
        let context_result = self.context.close().await;
        page_result?;
        context_result?;
        Ok(())
    }
}

pub struct BrowserFactory;

impl BrowserFactory {
    pub fn launch_options(settings: &BrowserSettings) -> LaunchOptions {
        let mut options = LaunchOptions::default()
            .headless(settings.headless)
            .slow_mo(settings.slow_mo as f64);

        if settings.kind == BrowserKind::Chromium {
            options = options.args(vec![format!("--lang={}", settings.locale)]);
        }
        options
    }

    pub async fn launch(settings: &BrowserSettings) -> Result<BrowserSession> {
        tracing::info!(
            "🚀 Launching {} (headless: {}, slow_mo: {}ms)",
            settings.kind.as_str(),
            settings.headless,
            settings.slow_mo
        );

        let playwright = Playwright::launch().await?;
        let options = Self::launch_options(settings);
        let browser = match settings.kind {
            BrowserKind::Chromium => playwright.chromium().launch_with_options(options).await?,
            BrowserKind::Firefox => playwright.firefox().launch_with_options(options).await?,
            BrowserKind::Webkit => playwright.webkit().launch_with_options(options).await?,
        };

        Ok(BrowserSession {
            playwright,
            browser,
            kind: settings.kind,
        })
    }

    pub fn context_options(
        settings: &BrowserSettings,
        video_dir: Option<&Path>,
    ) -> BrowserContextOptions {
        let mut builder = BrowserContextOptions::builder()
            .viewport(Viewport {
                width: settings.viewport.width,
                height: settings.viewport.height,
            })
            .locale(settings.locale.clone());

        if let Some(dir) = video_dir {
            builder = builder.record_video(RecordVideo {
                dir: dir.display().to_string(),
                size: None,
            });
        }
        builder.build()
    }

    pub async fn create_context(
        browser: &Browser,
        settings: &Settings,
        video: Option<&VideoRecording>,
    ) -> Result<BrowserContext> {
        tracing::info!(
            "Creating Browser Context with options: viewport={}x{}, locale={}, record_video={}",
            settings.browser.viewport.width,
            settings.browser.viewport.height,
            settings.browser.locale,
            video.is_some()
        );
        let options = Self::context_options(&settings.browser, video.map(VideoRecording::dir));
        let context = browser.new_context_with_options(options).await?;
        context
            .set_default_timeout(settings.timeouts.default as f64)
            .await;
        Ok(context)
    }

    pub async fn create_page(
        browser: &Browser,
        settings: &Settings,
        video: Option<&VideoRecording>,
    ) -> Result<PageHandle> {
        let context = Self::create_context(browser, settings, video).await?;
        let page = context.new_page().await?;
        Ok(PageHandle { context, page })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewportSize;

    fn browser_settings() -> BrowserSettings {
        BrowserSettings {
            kind: BrowserKind::Chromium,
            headless: true,
            slow_mo: 0,
            record_video: true,
            viewport: ViewportSize {
                width: 1366,
                height: 768,
            },
            locale: "vi-VN".to_string(),
        }
    }

    #[test]
    fn test_context_options_carry_viewport_locale_and_video() {
        let video_dir = Path::new("logs/videos/test_login_20260101_000000");
        let options = BrowserFactory::context_options(&browser_settings(), Some(video_dir));

        let viewport = options.viewport.unwrap();
        assert_eq!((viewport.width, viewport.height), (1366, 768));
        assert_eq!(options.locale.as_deref(), Some("vi-VN"));
        assert_eq!(
            options.record_video.map(|v| v.dir),
            Some(video_dir.display().to_string())
        );
    }

    #[test]
    fn test_context_options_without_video() {
        let options = BrowserFactory::context_options(&browser_settings(), None);
        assert!(options.record_video.is_none());
    }

    #[test]
    fn test_launch_options_pass_locale_to_chromium() {
        let options = BrowserFactory::launch_options(&browser_settings());
        assert_eq!(options.headless, Some(true));
        assert_eq!(options.args, Some(vec!["--lang=vi-VN".to_string()]));
    }

    #[test]
    fn test_video_directory_failure_rename() {
        let tmp = tempfile::tempdir().unwrap();
        let videos = tmp.path().join("logs").join("videos");

        let video = VideoRecording::new(&videos, "test_login_success").unwrap();
        assert!(video.dir().exists());
        std::fs::write(video.dir().join("page.webm"), b"webm").unwrap();

        let failed = video.mark_failed().unwrap();
        assert!(failed
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("FAILED_test_login_success_"));
        assert!(failed.join("page.webm").exists());
        assert!(!video.dir().exists());
    }
}
