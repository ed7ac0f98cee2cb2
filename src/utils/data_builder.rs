use crate::utils::error::Result;
use crate::utils::fake;
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_password_strength, Validate,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PASSWORD: &str = "Test@12345";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlogPostType {
    Personal,
    Community,
    Repost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Text,
    Image,
    Video,
    Code,
    Quote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentType {
    Post,
    Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl Validate for UserData {
    fn validate(&self) -> Result<()> {
        validate_email("user.email", &self.email)?;
        validate_non_empty_string("user.name", &self.name)?;
        validate_password_strength("user.password", &self.password)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockData {
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub content: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub title: String,
    #[serde(rename = "type")]
    pub post_type: BlogPostType,
    pub author_id: i64,
    pub blocks: Vec<BlockData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_post_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hashtag_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentData {
    pub post_id: i64,
    pub commenter_id: i64,
    pub content: String,
    #[serde(rename = "type")]
    pub comment_type: CommentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<i64>,
}

// ==================== BUILDERS ====================

#[derive(Debug, Clone)]
pub struct UserBuilder {
    data: UserData,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            data: UserData {
                email: String::new(),
                name: String::new(),
                password: DEFAULT_PASSWORD.to_string(),
                bio: None,
                gender: None,
            },
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.data.email = email.into();
        self
    }

    pub fn with_random_email(mut self) -> Self {
        self.data.email = fake::email();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.data.name = name.into();
        self
    }

    pub fn with_random_name(mut self) -> Self {
        self.data.name = fake::full_name();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.data.password = password.into();
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.data.bio = Some(bio.into());
        self
    }

    pub fn with_random_bio(mut self) -> Self {
        self.data.bio = Some(fake::text(200));
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.data.gender = Some(gender.into());
        self
    }

    pub fn as_male(self) -> Self {
        self.with_gender("male")
    }

    pub fn as_female(self) -> Self {
        self.with_gender("female")
    }

    pub fn build(mut self) -> UserData {
        if self.data.email.is_empty() {
            self.data.email = fake::email();
        }
        if self.data.name.is_empty() {
            self.data.name = fake::full_name();
        }
        self.data
    }
}

#[derive(Debug, Clone)]
pub struct BlockBuilder {
    data: BlockData,
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            data: BlockData {
                block_type: BlockType::Text,
                content: String::new(),
                x: 0,
                y: 0,
                width: 12,
                height: 100,
                image_caption: None,
                object_fit: None,
            },
        }
    }

    pub fn as_text(mut self) -> Self {
        self.data.block_type = BlockType::Text;
        self
    }

    pub fn as_image(mut self) -> Self {
        self.data.block_type = BlockType::Image;
        self
    }

    pub fn as_code(mut self) -> Self {
        self.data.block_type = BlockType::Code;
        self
    }

    pub fn as_quote(mut self) -> Self {
        self.data.block_type = BlockType::Quote;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.data.content = content.into();
        self
    }

    pub fn with_random_text(mut self) -> Self {
        self.data.content = fake::paragraph(3);
        self
    }

    pub fn with_random_image_url(mut self) -> Self {
        self.data.content = fake::image_url();
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.data.image_caption = Some(caption.into());
        self
    }

    pub fn at_position(mut self, x: u32, y: u32) -> Self {
        self.data.x = x;
        self.data.y = y;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.data.width = width;
        self.data.height = height;
        self
    }

    pub fn build(mut self) -> BlockData {
        if self.data.content.is_empty() {
            self.data.content = match self.data.block_type {
                BlockType::Text => fake::paragraph(3),
                BlockType::Image => fake::image_url(),
                BlockType::Code => "print('Hello World')".to_string(),
                BlockType::Quote => fake::sentence(8),
                BlockType::Video => String::new(),
            };
        }
        self.data
    }
}

#[derive(Debug, Clone)]
pub struct PostBuilder {
    data: PostData,
}

impl Default for PostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            data: PostData {
                title: String::new(),
                post_type: BlogPostType::Personal,
                author_id: 0,
                blocks: Vec::new(),
                community_id: None,
                original_post_id: None,
                hashtag_ids: Vec::new(),
                thumbnail_url: None,
            },
        }
    }

    fn next_row(&self) -> u32 {
        self.data.blocks.len() as u32 * 100
    }

    fn random_title() -> String {
        fake::sentence(6).trim_end_matches('.').to_string()
    }

    pub fn with_author(mut self, author_id: i64) -> Self {
        self.data.author_id = author_id;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.data.title = title.into();
        self
    }

    pub fn with_random_title(mut self) -> Self {
        self.data.title = Self::random_title();
        self
    }

    pub fn as_personal(mut self) -> Self {
        self.data.post_type = BlogPostType::Personal;
        self
    }

    pub fn as_community(mut self, community_id: i64) -> Self {
        self.data.post_type = BlogPostType::Community;
        self.data.community_id = Some(community_id);
        self
    }

    pub fn as_repost(mut self, original_post_id: i64) -> Self {
        self.data.post_type = BlogPostType::Repost;
        self.data.original_post_id = Some(original_post_id);
        self
    }

    pub fn add_block(mut self, block: BlockData) -> Self {
        self.data.blocks.push(block);
        self
    }

    pub fn add_text_block(self, content: impl Into<String>) -> Self {
        let y = self.next_row();
        self.add_text_block_at(content, y)
    }

    pub fn add_text_block_at(self, content: impl Into<String>, y: u32) -> Self {
        let block = BlockBuilder::new()
            .as_text()
            .with_content(content)
            .at_position(0, y)
            .with_size(12, 100)
            .build();
        self.add_block(block)
    }

    pub fn add_random_text_blocks(mut self, count: usize) -> Self {
        for _ in 0..count {
            let block = BlockBuilder::new()
                .as_text()
                .with_random_text()
                .at_position(0, self.next_row())
                .with_size(12, 100)
                .build();
            self.data.blocks.push(block);
        }
        self
    }

    pub fn add_image_block(self, image_url: impl Into<String>) -> Self {
        let y = self.next_row();
        let block = BlockBuilder::new()
            .as_image()
            .with_content(image_url)
            .at_position(0, y)
            .with_size(12, 200)
            .build();
        self.add_block(block)
    }

    pub fn with_hashtags(mut self, hashtag_ids: Vec<i64>) -> Self {
        self.data.hashtag_ids = hashtag_ids;
        self
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.data.thumbnail_url = Some(url.into());
        self
    }

    pub fn build(mut self) -> PostData {
        if self.data.title.is_empty() {
            self.data.title = Self::random_title();
        }
        if self.data.blocks.is_empty() {
            self = self.add_random_text_blocks(1);
        }
        self.data
    }
}

#[derive(Debug, Clone)]
pub struct CommentBuilder {
    data: CommentData,
}

impl Default for CommentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentBuilder {
    pub fn new() -> Self {
        Self {
            data: CommentData {
                post_id: 0,
                commenter_id: 0,
                content: String::new(),
                comment_type: CommentType::Post,
                parent_comment_id: None,
                reply_to_user_id: None,
                block_id: None,
            },
        }
    }

    pub fn on_post(mut self, post_id: i64) -> Self {
        self.data.post_id = post_id;
        self
    }

    pub fn by_commenter(mut self, commenter_id: i64) -> Self {
        self.data.commenter_id = commenter_id;
        self
    }

    pub fn by_author(self, author_id: i64) -> Self {
        self.by_commenter(author_id)
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.data.content = content.into();
        self
    }

    pub fn with_random_content(mut self) -> Self {
        let word_count = rand::rng().random_range(5..=15);
        self.data.content = fake::sentence(word_count);
        self
    }

    pub fn as_reply_to(mut self, parent_comment_id: i64, reply_to_user_id: Option<i64>) -> Self {
        self.data.parent_comment_id = Some(parent_comment_id);
        if reply_to_user_id.is_some() {
            self.data.reply_to_user_id = reply_to_user_id;
        }
        self
    }

    pub fn on_block(mut self, block_id: i64) -> Self {
        self.data.comment_type = CommentType::Block;
        self.data.block_id = Some(block_id);
        self
    }

    pub fn build(mut self) -> CommentData {
        if self.data.content.is_empty() {
            self.data.content = fake::sentence(8);
        }
        if self.data.comment_type != CommentType::Block {
            self.data.block_id = None;
        }
        self.data
    }
}

// ==================== QUICK FACTORIES ====================

pub fn create_quick_user() -> UserData {
    UserBuilder::new()
        .with_random_email()
        .with_random_name()
        .build()
}

pub fn create_quick_post(author_id: i64, blocks_count: usize) -> PostData {
    PostBuilder::new()
        .with_author(author_id)
        .with_random_title()
        .add_random_text_blocks(blocks_count)
        .build()
}

pub fn create_quick_comment(post_id: i64, commenter_id: i64) -> CommentData {
    CommentBuilder::new()
        .on_post(post_id)
        .by_commenter(commenter_id)
        .with_random_content()
        .build()
}
