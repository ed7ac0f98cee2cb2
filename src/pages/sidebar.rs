use super::locators::navigation::sidebar as sel;
use crate::core::base_page::BasePage;
use crate::utils::error::Result;

const TOGGLE_TIMEOUT: u64 = 3000;

/// Left navigation column shared by every logged-in screen.
pub struct Sidebar {
    base: BasePage,
}

impl Sidebar {
    pub fn new(base: &BasePage) -> Self {
        Self { base: base.clone() }
    }

    pub async fn is_visible(&self, timeout: Option<u64>) -> bool {
        let sidebar = self.base.locator(sel::SIDEBAR).await.first();
        self.base.is_visible_slow(&sidebar, timeout).await
    }

    pub async fn is_logo_visible(&self, timeout: Option<u64>) -> bool {
        let logo = self.base.locator(sel::LOGO).await.first();
        self.base.is_visible_slow(&logo, timeout).await
    }

    pub async fn is_create_post_visible(&self, timeout: Option<u64>) -> bool {
        let button = self.base.locator(sel::CREATE_POST_BUTTON).await.first();
        self.base.is_visible_slow(&button, timeout).await
    }

    async fn click_link(&self, selector: &str, description: &str) -> Result<()> {
        let link = self.base.locator(selector).await.first();
        self.base.click(&link, description).await
    }

    pub async fn click_home(&self) -> Result<()> {
        self.click_link(sel::HOME_LINK, "Home link").await
    }

    pub async fn click_saved(&self) -> Result<()> {
        self.click_link(sel::SAVED_LINK, "Saved link").await
    }

    pub async fn click_communities(&self) -> Result<()> {
        self.click_link(sel::COMMUNITIES_LINK, "Communities link").await
    }

    pub async fn click_create_post(&self) -> Result<()> {
        self.click_link(sel::CREATE_POST_BUTTON, "Create post button").await
    }

    /// Returns false when there is no close button to click.
    pub async fn close(&self) -> Result<bool> {
        let button = self.base.locator(sel::CLOSE_SIDEBAR_BUTTON).await.first();
        if !self.base.is_visible(&button).await {
            return Ok(false);
        }
        self.base.click(&button, "Close sidebar").await?;
        let sidebar = self.base.locator(sel::SIDEBAR).await.first();
        if self
            .base
            .wait_for_hidden(&sidebar, Some(TOGGLE_TIMEOUT))
            .await
            .is_err()
        {
            tracing::info!("ℹ️ Sidebar collapsed without hiding");
        }
        Ok(true)
    }

    /// Returns false when the hamburger button is not shown.
    pub async fn reopen(&self) -> Result<bool> {
        let button = self.base.locator(sel::OPEN_SIDEBAR_BUTTON).await.first();
        if !self.base.is_visible_slow(&button, Some(500)).await {
            return Ok(false);
        }
        self.base.click(&button, "Open sidebar").await?;
        Ok(true)
    }
}
