use super::locators::create_post::{options_dialog, page};
use super::PageObject;
use crate::core::base_page::BasePage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Two-step editor at `/create`: content first, then the options dialog.
pub struct CreatePostPage {
    base: BasePage,
}

impl CreatePostPage {
    pub fn new(base: &BasePage) -> Self {
        Self { base: base.clone() }
    }

    pub async fn fill_title(&self, title: &str) -> Result<()> {
        let input = self.base.locator(page::TITLE_INPUT).await.first();
        self.base.fill(&input, title, "Post title").await
    }

    pub async fn fill_description(&self, description: &str) -> Result<()> {
        let input = self.base.locator(page::DESCRIPTION_INPUT).await.first();
        self.base.fill(&input, description, "Post description").await
    }

    pub async fn click_next_step(&self) -> Result<()> {
        let button = self.base.locator(page::NEXT_STEP_BUTTON).await.first();
        self.base.click(&button, "Next step").await
    }

    pub async fn is_options_dialog_visible(&self) -> bool {
        let dialog = self.base.locator(options_dialog::DIALOG).await.first();
        self.base.is_visible_slow(&dialog, None).await
    }

    pub async fn add_hashtag(&self, tag: &str) -> Result<()> {
        let input = self
            .base
            .locator(options_dialog::HASHTAGS_INPUT)
            .await
            .first();
        self.base.fill(&input, tag, "Hashtag input").await?;
        self.base.press(&input, "Enter").await
    }

    pub async fn publish(&self) -> Result<()> {
        let button = self
            .base
            .locator(options_dialog::PUBLISH_BUTTON)
            .await
            .first();
        self.base.click(&button, "Publish").await
    }

    pub async fn cancel(&self) -> Result<()> {
        let button = self
            .base
            .locator(options_dialog::CANCEL_BUTTON)
            .await
            .first();
        self.base.click(&button, "Cancel").await
    }
}

#[async_trait]
impl PageObject for CreatePostPage {
    fn base(&self) -> &BasePage {
        &self.base
    }

    fn url(&self) -> String {
        self.base.settings().url("/create")
    }

    async fn wait_until_loaded(&self) -> Result<()> {
        let title = self.base.locator(page::TITLE_INPUT).await.first();
        self.base.wait_for_visible(&title, "Post title", None).await
    }
}
