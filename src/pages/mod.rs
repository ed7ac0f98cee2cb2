//! Page objects for the Blookie UI.
//!
//! Each page object owns a cheap clone of [`BasePage`] and only talks to the
//! browser through it, so logging, masking and failure screenshots stay
//! uniform across screens.

pub mod admin;
pub mod community;
pub mod create_post;
pub mod locators;
pub mod login;
pub mod newsfeed;
pub mod post_details;
pub mod profile;
pub mod register;
pub mod search;
pub mod sidebar;

use crate::core::base_page::BasePage;
use crate::utils::error::Result;
use async_trait::async_trait;

pub use admin::{AdminPages, Period};
pub use community::CommunityPage;
pub use create_post::CreatePostPage;
pub use login::LoginPage;
pub use newsfeed::NewsfeedPage;
pub use post_details::PostDetailsPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use search::{SearchPage, SuggestionKind};
pub use sidebar::Sidebar;

#[async_trait]
pub trait PageObject: Send + Sync {
    fn base(&self) -> &BasePage;

    /// Absolute URL of the screen.
    fn url(&self) -> String;

    async fn wait_until_loaded(&self) -> Result<()>;

    async fn open(&self) -> Result<()> {
        self.base().open(&self.url()).await?;
        self.wait_until_loaded().await
    }
}
