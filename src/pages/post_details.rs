use super::locators::post_details::{block_comments, comments, content, sidebar};
use crate::core::base_page::BasePage;
use crate::utils::error::Result;
use playwright_rs::Locator;

const CONTENT_TIMEOUT: u64 = 10000;
const COMMENTS_TIMEOUT: u64 = 5000;

/// `/post/{id}`. Not a [`super::PageObject`] since the URL depends on the post.
pub struct PostDetailsPage {
    base: BasePage,
}

impl PostDetailsPage {
    pub fn new(base: &BasePage) -> Self {
        Self { base: base.clone() }
    }

    pub fn post_url(&self, post_id: i64) -> String {
        self.base.settings().url(&format!("/post/{}", post_id))
    }

    pub async fn open_post(&self, post_id: i64) -> Result<()> {
        self.base.open(&self.post_url(post_id)).await?;
        tracing::info!("📄 Opened Post Details: ID={}", post_id);
        self.wait_for_post_content(None).await
    }

    // ==================== WAITS ====================

    pub async fn wait_for_post_content(&self, timeout: Option<u64>) -> Result<()> {
        let title = self.base.locator(content::POST_TITLE).await.first();
        self.base
            .wait_for_visible(&title, "Post Title", Some(timeout.unwrap_or(CONTENT_TIMEOUT)))
            .await
    }

    pub async fn wait_for_comments_section(&self, timeout: Option<u64>) -> Result<()> {
        let section = self.base.locator(comments::COMMENTS_SECTION).await.first();
        self.base
            .wait_for_visible(
                &section,
                "Comments Section",
                Some(timeout.unwrap_or(COMMENTS_TIMEOUT)),
            )
            .await
    }

    // ==================== GETTERS ====================

    pub async fn get_post_title(&self) -> Result<String> {
        let title = self.base.locator(content::POST_TITLE).await.first();
        self.base.get_text(&title, "Post Title").await
    }

    /// Text of every text block, joined by newlines.
    pub async fn get_post_content(&self) -> Result<String> {
        let blocks = self.base.locator(content::TEXT_BLOCK).await;
        let total = self.base.count(&blocks).await;
        let mut parts = Vec::with_capacity(total);
        for i in 0..total {
            let text = self
                .base
                .get_text(&blocks.nth(i as i32), "Text block")
                .await?;
            if !text.is_empty() {
                parts.push(text);
            }
        }
        Ok(parts.join("\n"))
    }

    pub async fn get_author_name(&self) -> Result<String> {
        let author = self.base.locator(content::AUTHOR_LINK).await.first();
        self.base.get_text(&author, "Author Name").await
    }

    pub async fn get_comment_count(&self) -> usize {
        let items = self.base.locator(comments::COMMENT_ITEM).await;
        self.base.count(&items).await
    }

    pub async fn get_all_comments_text(&self) -> Result<Vec<String>> {
        let items = self.base.locator(comments::COMMENT_ITEM).await;
        let total = self.base.count(&items).await;

        let mut texts = Vec::with_capacity(total);
        for i in 0..total {
            let body = items.nth(i as i32).locator(comments::COMMENT_CONTENT).first();
            if self.base.is_visible(&body).await {
                texts.push(self.base.get_text(&body, "Comment").await?);
            }
        }
        tracing::info!("💬 Found {} comments", texts.len());
        Ok(texts)
    }

    // ==================== POST ACTIONS ====================

    async fn click_first(&self, selector: &str, description: &str) -> Result<()> {
        let target = self.base.locator(selector).await.first();
        self.base.click(&target, description).await
    }

    pub async fn upvote_post(&self) -> Result<()> {
        self.click_first(sidebar::UPVOTE_BUTTON, "Upvote Button").await
    }

    pub async fn downvote_post(&self) -> Result<()> {
        self.click_first(sidebar::DOWNVOTE_BUTTON, "Downvote Button").await
    }

    pub async fn click_repost(&self) -> Result<()> {
        self.click_first(sidebar::REPOST_BUTTON, "Repost Button").await
    }

    pub async fn click_share(&self) -> Result<()> {
        self.click_first(sidebar::SHARE_BUTTON, "Share Button").await
    }

    pub async fn save_post(&self) -> Result<()> {
        self.click_first(sidebar::SAVE_BUTTON, "Save Button").await
    }

    pub async fn open_more_options(&self) -> Result<()> {
        self.click_first(sidebar::MORE_OPTIONS_BUTTON, "More Options").await
    }

    pub async fn click_edit_post(&self) -> Result<()> {
        self.open_more_options().await?;
        self.click_first(sidebar::EDIT_MENU_ITEM, "Edit Post").await
    }

    pub async fn click_delete_post(&self) -> Result<()> {
        self.open_more_options().await?;
        self.click_first(sidebar::DELETE_MENU_ITEM, "Delete Post").await
    }

    // ==================== COMMENT ACTIONS ====================

    pub async fn add_comment(&self, text: &str) -> Result<()> {
        let preview: String = text.chars().take(50).collect();
        tracing::info!("💬 Adding comment: {}...", preview);

        let input = self.base.locator(comments::COMMENT_TEXTAREA).await.first();
        self.base.fill(&input, text, "Comment Input").await?;
        self.click_first(comments::COMMENT_SUBMIT_BUTTON, "Submit Comment Button")
            .await?;

        self.base.pause(1000).await;
        tracing::info!("✅ Comment submitted");
        Ok(())
    }

    async fn first_comment(&self) -> Locator {
        self.base.locator(comments::COMMENT_ITEM).await.first()
    }

    pub async fn reply_to_first_comment(&self, text: &str) -> Result<()> {
        let preview: String = text.chars().take(50).collect();
        tracing::info!("↩️ Replying to first comment: {}...", preview);

        let comment = self.first_comment().await;
        let reply = comment.locator(comments::REPLY_BUTTON).first();
        self.base.click(&reply, "Reply Button").await?;
        self.base.pause(500).await;

        let input = comment.locator(comments::REPLY_TEXTAREA).first();
        self.base.fill(&input, text, "Reply Input").await?;

        let submit = comment.locator(comments::REPLY_SUBMIT_BUTTON).first();
        self.base.click(&submit, "Submit Reply").await?;

        self.base.pause(1000).await;
        tracing::info!("✅ Reply submitted");
        Ok(())
    }

    /// Only works on a comment the current user owns.
    pub async fn delete_first_comment(&self) -> Result<()> {
        let comment = self.first_comment().await;
        let delete = comment.locator(comments::DELETE_BUTTON).first();
        self.base.click(&delete, "Delete Comment Button").await?;
        tracing::info!("🗑️ Comment deleted");
        Ok(())
    }

    // ==================== VERIFICATIONS ====================

    pub async fn is_post_visible(&self) -> bool {
        let title = self.base.locator(content::POST_TITLE).await.first();
        self.base.is_visible(&title).await
    }

    pub async fn is_comments_section_visible(&self) -> bool {
        let section = self.base.locator(comments::COMMENTS_SECTION).await.first();
        self.base.is_visible(&section).await
    }

    pub async fn is_upvote_active(&self) -> Result<bool> {
        let upvote = self.base.locator(sidebar::UPVOTE_BUTTON).await.first();
        let class = self
            .base
            .get_attribute(&upvote, "class")
            .await?
            .unwrap_or_default();
        Ok(class.contains("active") || class.contains("voted"))
    }

    // ==================== BLOCK COMMENTS ====================

    pub async fn text_block_count(&self) -> usize {
        let blocks = self.base.locator(content::TEXT_BLOCK).await;
        self.base.count(&blocks).await
    }

    /// The comment button only appears while its block is hovered.
    pub async fn open_block_comments(&self, index: usize) -> Result<()> {
        let block = self
            .base
            .locator(content::TEXT_BLOCK)
            .await
            .nth(index as i32);
        self.base.hover(&block, "Text block").await?;

        let button = block.locator(content::BLOCK_COMMENT_BUTTON).first();
        self.base
            .wait_for_visible(&button, "Block comment button", Some(COMMENTS_TIMEOUT))
            .await?;
        self.base.click(&button, "Block comment button").await?;

        let drawer = self.base.locator(block_comments::SIDEBAR).await.first();
        self.base
            .wait_for_visible(&drawer, "Block comments drawer", None)
            .await
    }

    pub async fn is_block_comments_open(&self) -> bool {
        let drawer = self.base.locator(block_comments::SIDEBAR).await.first();
        self.base.is_visible(&drawer).await
    }

    pub async fn add_block_comment(&self, text: &str) -> Result<()> {
        let input = self
            .base
            .locator(block_comments::COMMENT_TEXTAREA)
            .await
            .first();
        self.base.fill(&input, text, "Block comment input").await?;
        self.click_first(block_comments::COMMENT_SUBMIT_BUTTON, "Submit block comment")
            .await?;
        self.base.pause(1000).await;
        Ok(())
    }

    pub async fn block_comments_text(&self) -> Result<Vec<String>> {
        let list = self.base.locator(block_comments::COMMENTS_LIST).await.first();
        let items = list.locator(comments::COMMENT_CONTENT);
        let total = self.base.count(&items).await;
        let mut texts = Vec::with_capacity(total);
        for i in 0..total {
            texts.push(self.base.get_text(&items.nth(i as i32), "Block comment").await?);
        }
        Ok(texts)
    }

    pub async fn is_block_comments_empty(&self) -> bool {
        let empty = self
            .base
            .locator(block_comments::EMPTY_STATE_TEXT)
            .await
            .first();
        self.base.is_visible_slow(&empty, None).await
    }

    pub async fn close_block_comments(&self) -> Result<()> {
        let drawer = self.base.locator(block_comments::SIDEBAR).await.first();
        self.base.press(&drawer, "Escape").await?;
        self.base.wait_for_hidden(&drawer, None).await
    }
}
