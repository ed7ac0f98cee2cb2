use super::locators::community as sel;
use crate::core::base_page::BasePage;
use crate::utils::error::Result;

pub struct CommunityPage {
    base: BasePage,
}

impl CommunityPage {
    pub fn new(base: &BasePage) -> Self {
        Self { base: base.clone() }
    }

    pub async fn open_my_communities(&self) -> Result<()> {
        self.base
            .open(&self.base.settings().url("/me/my-communities"))
            .await?;
        let header = self.base.locator(sel::HEADER_TITLE).await.first();
        self.base
            .wait_for_visible(&header, "My communities header", None)
            .await
    }

    pub async fn community_count(&self) -> usize {
        let cards = self.base.locator(sel::COMMUNITY_CARD).await;
        self.base.count(&cards).await
    }

    pub async fn open_first_community(&self) -> Result<()> {
        let card = self.base.locator(sel::COMMUNITY_CARD).await.first();
        self.base.click(&card, "First community").await?;
        let title = self.base.locator(sel::DETAIL_TITLE).await.first();
        self.base
            .wait_for_visible(&title, "Community title", None)
            .await
    }

    pub async fn detail_title(&self) -> Result<String> {
        let title = self.base.locator(sel::DETAIL_TITLE).await.first();
        self.base.get_text(&title, "Community title").await
    }
}
