use super::locators::register as sel;
use super::PageObject;
use crate::core::base_page::BasePage;
use crate::utils::data_builder::UserData;
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct RegisterPage {
    base: BasePage,
}

impl RegisterPage {
    pub fn new(base: &BasePage) -> Self {
        Self { base: base.clone() }
    }

    pub async fn fill_form(&self, user: &UserData) -> Result<()> {
        let name = self.base.locator(sel::FULLNAME_INPUT).await;
        self.base.fill(&name, &user.name, "Full name input").await?;

        let email = self.base.locator(sel::EMAIL_INPUT).await;
        self.base.fill(&email, &user.email, "Email input").await?;

        let password = self.base.locator(sel::PASSWORD_BY_PLACEHOLDER).await;
        self.base.fill(&password, &user.password, "Password input").await?;

        let confirm = self.base.locator(sel::CONFIRM_PASSWORD_BY_PLACEHOLDER).await;
        self.base
            .fill(&confirm, &user.password, "Confirm password input")
            .await
    }

    pub async fn submit(&self) -> Result<()> {
        let button = self.base.locator(sel::REGISTER_BUTTON).await;
        self.base.click(&button, "Register button").await
    }

    pub async fn register(&self, user: &UserData) -> Result<()> {
        tracing::info!("📝 Registering new account: {}", user.email);
        self.fill_form(user).await?;
        self.submit().await
    }

    pub async fn click_login_link(&self) -> Result<()> {
        let link = self.base.locator(sel::LOGIN_LINK).await;
        self.base.click(&link, "Login link").await
    }
}

#[async_trait]
impl PageObject for RegisterPage {
    fn base(&self) -> &BasePage {
        &self.base
    }

    fn url(&self) -> String {
        self.base.settings().url("/register")
    }

    async fn wait_until_loaded(&self) -> Result<()> {
        let title = self.base.locator(sel::TITLE).await;
        self.base.wait_for_visible(&title, "Register title", None).await
    }
}
