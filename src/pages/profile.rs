use super::locators::profile as sel;
use crate::core::base_page::BasePage;
use crate::utils::error::Result;

pub struct ProfilePage {
    base: BasePage,
}

impl ProfilePage {
    pub fn new(base: &BasePage) -> Self {
        Self { base: base.clone() }
    }

    /// Header avatar, then "Xem trang cá nhân".
    pub async fn open_profile(&self) -> Result<()> {
        let avatar = self.base.locator(sel::HEADER_AVATAR_BTN).await.first();
        self.base.click(&avatar, "Header avatar").await?;
        let item = self.base.locator(sel::VIEW_PROFILE_MENU_ITEM).await.first();
        self.base.click(&item, "View profile menu item").await?;
        self.wait_for_profile().await
    }

    pub async fn open_user(&self, user_id: i64) -> Result<()> {
        let url = self.base.settings().url(&format!("/profile/{}", user_id));
        self.base.open(&url).await?;
        self.wait_for_profile().await
    }

    async fn wait_for_profile(&self) -> Result<()> {
        let name = self.base.locator(sel::DISPLAY_NAME).await.first();
        self.base.wait_for_visible(&name, "Display name", None).await
    }

    pub async fn display_name(&self) -> Result<String> {
        let name = self.base.locator(sel::DISPLAY_NAME).await.first();
        self.base.get_text(&name, "Display name").await
    }

    /// Follower count; unparsable text reads as 0.
    pub async fn followers(&self) -> Result<u64> {
        let stat = self.base.locator(sel::STAT_FOLLOWERS).await.first();
        let text = self.base.get_text(&stat, "Followers").await?;
        Ok(parse_count(&text))
    }

    async fn click_tab(&self, selector: &str, description: &str) -> Result<()> {
        let tab = self.base.locator(selector).await.first();
        self.base.click(&tab, description).await?;
        self.base.pause(self.base.settings().timeouts.short).await;
        Ok(())
    }

    pub async fn click_posts_tab(&self) -> Result<()> {
        self.click_tab(sel::TAB_POSTS, "Posts tab").await
    }

    pub async fn click_communities_tab(&self) -> Result<()> {
        self.click_tab(sel::TAB_COMMUNITIES, "Communities tab").await
    }

    pub async fn is_tab_active(&self, selector: &str) -> Result<bool> {
        let tab = self.base.locator(selector).await.first();
        let class = self.base.get_attribute(&tab, "class").await?.unwrap_or_default();
        Ok(class.contains(sel::TAB_ACTIVE_CLASS))
    }

    pub async fn post_count(&self) -> usize {
        let cards = self
            .base
            .locator(&format!("{} {}", sel::TAB_CONTENT, sel::POST_CARD))
            .await;
        self.base.count(&cards).await
    }

    pub async fn first_post_title(&self) -> Result<String> {
        let title = self.base.locator(sel::FIRST_POST_TITLE).await;
        self.base.get_text(&title, "First post title").await
    }
}

fn parse_count(text: &str) -> u64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
