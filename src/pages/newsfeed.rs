use super::locators::{newsfeed as sel, post_card};
use super::PageObject;
use crate::core::base_page::BasePage;
use crate::utils::error::Result;
use async_trait::async_trait;
use playwright_rs::Locator;

const POSTS_TIMEOUT: u64 = 10000;
const LOAD_MORE_WAIT: u64 = 2000;

pub struct NewsfeedPage {
    base: BasePage,
}

impl NewsfeedPage {
    pub fn new(base: &BasePage) -> Self {
        Self { base: base.clone() }
    }

    pub async fn wait_for_posts_to_load(&self, timeout: Option<u64>) -> Result<()> {
        let first = self.base.locator(sel::POSTS_CONTAINER).await.first();
        self.base
            .wait_for_visible(&first, "First Post Card", Some(timeout.unwrap_or(POSTS_TIMEOUT)))
            .await
    }

    pub async fn get_post_count(&self) -> usize {
        let cards = self.base.locator(sel::POST_CARD).await;
        self.base.count(&cards).await
    }

    /// Titles of the cards currently visible.
    pub async fn get_all_post_titles(&self) -> Result<Vec<String>> {
        let cards = self.base.locator(sel::POST_CARD).await;
        let total = self.base.count(&cards).await;

        let mut titles = Vec::with_capacity(total);
        for i in 0..total {
            let title = cards.nth(i as i32).locator(post_card::TITLE).first();
            if self.base.is_visible(&title).await {
                titles.push(self.base.get_text(&title, "Post title").await?);
            }
        }
        tracing::info!("📝 Found {} post titles", titles.len());
        Ok(titles)
    }

    pub async fn first_post_card(&self) -> Locator {
        self.base.locator(sel::POST_CARD).await.first()
    }

    pub async fn post_card(&self, index: usize) -> Locator {
        self.base.locator(sel::POST_CARD).await.nth(index as i32)
    }

    pub async fn click_first_post(&self) -> Result<()> {
        let title = self.first_post_card().await.locator(post_card::TITLE);
        self.base.click(&title, "First Post Card").await
    }

    pub async fn click_create_post_button(&self) -> Result<()> {
        let button = self.base.locator(sel::CREATE_POST_BUTTON).await.first();
        self.base.click(&button, "Create Post Button").await
    }

    pub async fn scroll_and_load_more(&self) -> Result<()> {
        tracing::info!("📜 Scrolling to load more posts...");
        self.base.scroll_to_bottom().await?;
        self.base.pause(LOAD_MORE_WAIT).await;
        Ok(())
    }

    pub async fn upvote_first_post(&self) -> Result<()> {
        let button = self
            .first_post_card()
            .await
            .locator(post_card::UPVOTE_BUTTON)
            .first();
        self.base.click(&button, "Upvote on First Post").await
    }

    pub async fn comment_on_first_post(&self) -> Result<()> {
        let button = self
            .first_post_card()
            .await
            .locator(post_card::COMMENT_BUTTON)
            .first();
        self.base.click(&button, "Comment Button on First Post").await
    }

    pub async fn save_first_post(&self) -> Result<()> {
        let button = self
            .first_post_card()
            .await
            .locator(post_card::SAVE_BUTTON)
            .first();
        self.base.click(&button, "Save Button on First Post").await
    }

    /// Opens the emoji picker of the first card and waits for its dialog.
    pub async fn open_emoji_picker_on_first_post(&self) -> Result<()> {
        let button = self
            .first_post_card()
            .await
            .locator(post_card::ADD_EMOJI_BUTTON)
            .first();
        self.base.click(&button, "Add emoji on First Post").await?;
        let dialog = self.base.locator(sel::emoji_picker::DIALOG).await.first();
        self.base
            .wait_for_visible(&dialog, "Emoji picker", None)
            .await
    }

    pub async fn is_posts_container_visible(&self) -> bool {
        let first = self.base.locator(sel::POST_CARD).await.first();
        self.base.is_visible(&first).await
    }
}

#[async_trait]
impl PageObject for NewsfeedPage {
    fn base(&self) -> &BasePage {
        &self.base
    }

    fn url(&self) -> String {
        self.base.settings().url("/")
    }

    async fn wait_until_loaded(&self) -> Result<()> {
        tracing::info!("📄 Opened Newsfeed Page");
        self.wait_for_posts_to_load(None).await
    }
}
