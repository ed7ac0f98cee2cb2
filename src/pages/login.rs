use super::locators::login as sel;
use super::PageObject;
use crate::core::base_page::BasePage;
use crate::utils::error::Result;
use async_trait::async_trait;

const ERROR_TIMEOUT: u64 = 5000;
const REDIRECT_TIMEOUT: u64 = 10000;

pub struct LoginPage {
    base: BasePage,
}

impl LoginPage {
    pub fn new(base: &BasePage) -> Self {
        Self { base: base.clone() }
    }

    pub async fn fill_email(&self, email: &str) -> Result<()> {
        let input = self.base.locator(sel::EMAIL_INPUT).await.first();
        self.base.click(&input, "Email input field").await?;
        self.base.fill(&input, email, "Email input field").await?;
        self.base.pause(self.base.settings().timeouts.short).await;
        Ok(())
    }

    pub async fn fill_password(&self, password: &str) -> Result<()> {
        let input = self.base.locator(sel::PASSWORD_INPUT).await;
        self.base.click(&input, "Password input field").await?;
        self.base.fill(&input, password, "Password input field").await?;
        self.base.pause(self.base.settings().timeouts.short).await;
        Ok(())
    }

    pub async fn click_login_button(&self, wait_for_result: bool) -> Result<()> {
        let button = self.base.locator(sel::LOGIN_BUTTON).await;
        self.base.click(&button, "Login button").await?;
        if wait_for_result {
            self.base.pause(1000).await;
        }
        Ok(())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        tracing::info!("🔐 Attempting to login as: {}", email);
        self.fill_email(email).await?;
        self.fill_password(password).await?;
        self.click_login_button(true).await
    }

    pub async fn click_register_link(&self) -> Result<()> {
        let link = self.base.locator(sel::REGISTER_LINK).await;
        self.base.click(&link, "Register link").await?;
        self.base.pause(self.base.settings().timeouts.short).await;
        Ok(())
    }

    /// Waits up to `timeout` ms (default 5000) for the error banner.
    pub async fn is_error_visible(&self, timeout: Option<u64>) -> bool {
        let error = self.base.locator(sel::ERROR_MESSAGE).await.first();
        self.base
            .is_visible_slow(&error, Some(timeout.unwrap_or(ERROR_TIMEOUT)))
            .await
    }

    pub async fn get_error_message(&self) -> Result<String> {
        let error = self.base.locator(sel::ERROR_MESSAGE).await;
        if self.base.count(&error).await == 0 {
            return Ok(String::new());
        }
        self.base.get_text(&error.first(), "Login error").await
    }

    /// The notification bell only renders for a logged-in session.
    pub async fn is_logged_in(&self) -> bool {
        let bell = self.base.locator(sel::BELL_ICON).await.first();
        self.base.is_visible(&bell).await
    }

    /// The login form unmounts once the app navigates away from `/login`.
    pub async fn wait_for_redirect_after_login(&self, timeout: Option<u64>) -> bool {
        let form_input = self.base.locator(sel::EMAIL_INPUT).await.first();
        let form_gone = self
            .base
            .wait_for_hidden(&form_input, Some(timeout.unwrap_or(REDIRECT_TIMEOUT)))
            .await
            .is_ok();

        if form_gone && !self.base.url().contains("/login") {
            tracing::info!("✅ Login successful - redirected away from login page");
            true
        } else {
            tracing::warn!("⚠️ Still on login page after timeout");
            false
        }
    }
}

#[async_trait]
impl PageObject for LoginPage {
    fn base(&self) -> &BasePage {
        &self.base
    }

    fn url(&self) -> String {
        self.base.settings().full_login_url()
    }

    async fn wait_until_loaded(&self) -> Result<()> {
        tracing::info!("📄 Opened Login Page");
        let email = self.base.locator(sel::EMAIL_INPUT).await.first();
        self.base
            .wait_for_visible(&email, "Email input field", None)
            .await
    }
}
