//! Post creation, details, interactions and the posts API.
//!
//! Setup goes through the API; the UI is only used to verify what a reader
//! would see.

use anyhow::{ensure, Context};
use blog_e2e::core::fixtures;
use blog_e2e::utils::data_builder::{create_quick_post, PostBuilder};
use blog_e2e::{api_case, Marker, TestCase};
use serde_json::json;
use std::time::{Duration, Instant};

#[cfg(feature = "ui")]
use blog_e2e::pages::{NewsfeedPage, PageObject, PostDetailsPage};
#[cfg(feature = "ui")]
use blog_e2e::ui_case;

#[cfg(feature = "ui")]
#[tokio::test]
#[ignore = "newsfeed card selectors need re-checking against the live frontend"]
async fn test_create_post_via_api_visible_in_ui() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "POST-001",
        "create_post_via_api_visible_in_ui",
        &[Marker::Smoke, Marker::Ui, Marker::Posts],
    );
    ui_case(CASE, |ctx| async move {
        let user = fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let post = fixtures::test_post(&ctx.api, &user).await?;

        let newsfeed = NewsfeedPage::new(&ctx.page);
        newsfeed.open().await?;
        let titles = newsfeed.get_all_post_titles().await?;

        ensure!(
            titles.contains(&post.title),
            "Post '{}' should be visible in newsfeed",
            post.title
        );
        Ok(())
    })
    .await
}

#[cfg(feature = "ui")]
#[tokio::test]
#[ignore = "newsfeed card selectors need re-checking against the live frontend"]
async fn test_post_count_increases_after_creation() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "POST-002",
        "post_count_increases_after_creation",
        &[Marker::Smoke, Marker::Ui, Marker::Posts],
    );
    ui_case(CASE, |ctx| async move {
        let user = fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;

        let newsfeed = NewsfeedPage::new(&ctx.page);
        newsfeed.open().await?;
        let initial_count = newsfeed.get_post_count().await;

        let response = ctx.api.posts().create_post(&create_quick_post(user.id, 1)).await?;
        ensure!(response.success, "Post creation failed: {}", response.data);

        ctx.page.refresh().await?;
        newsfeed.wait_for_posts_to_load(None).await?;

        let new_count = newsfeed.get_post_count().await;
        ensure!(
            new_count > initial_count,
            "Post count should increase from {} to {}",
            initial_count,
            new_count
        );
        Ok(())
    })
    .await
}

#[cfg(feature = "ui")]
#[tokio::test]
async fn test_view_post_details() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new("POST-010", "view_post_details", &[Marker::Ui, Marker::Posts]);
    ui_case(CASE, |ctx| async move {
        let user = fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let post = fixtures::test_post(&ctx.api, &user).await?;

        let details = PostDetailsPage::new(&ctx.page);
        details.open_post(post.id).await?;

        ensure!(details.is_post_visible().await, "Post should be visible");
        let title = details.get_post_title().await?;
        ensure!(
            title.contains(&post.title),
            "Title should match: expected '{}', got '{}'",
            post.title,
            title
        );
        Ok(())
    })
    .await
}

#[cfg(feature = "ui")]
#[tokio::test]
async fn test_post_details_shows_author_info() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "POST-011",
        "post_details_shows_author_info",
        &[Marker::Ui, Marker::Posts],
    );
    ui_case(CASE, |ctx| async move {
        let user = fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let post = fixtures::test_post(&ctx.api, &user).await?;

        let details = PostDetailsPage::new(&ctx.page);
        details.open_post(post.id).await?;

        let author = details.get_author_name().await?;
        ensure!(!author.trim().is_empty(), "Author name should be displayed");
        Ok(())
    })
    .await
}

#[cfg(feature = "ui")]
#[tokio::test]
#[ignore = "vote button state selectors need re-checking against the live frontend"]
async fn test_upvote_post() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "VOTE-001",
        "upvote_post",
        &[Marker::Smoke, Marker::Ui, Marker::Posts, Marker::Interactions],
    );
    ui_case(CASE, |ctx| async move {
        let user = fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let post = fixtures::test_post(&ctx.api, &user).await?;

        let details = PostDetailsPage::new(&ctx.page);
        details.open_post(post.id).await?;
        details.upvote_post().await?;
        ctx.page.pause(1000).await;

        ensure!(details.is_upvote_active().await?, "Upvote button should be in active state");
        Ok(())
    })
    .await
}

#[cfg(feature = "ui")]
#[tokio::test]
#[ignore = "vote button state selectors need re-checking against the live frontend"]
async fn test_toggle_upvote() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "VOTE-002",
        "toggle_upvote",
        &[Marker::Smoke, Marker::Ui, Marker::Posts, Marker::Interactions],
    );
    ui_case(CASE, |ctx| async move {
        let user = fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let post = fixtures::test_post(&ctx.api, &user).await?;

        let details = PostDetailsPage::new(&ctx.page);
        details.open_post(post.id).await?;
        details.upvote_post().await?;
        ctx.page.pause(500).await;
        details.upvote_post().await?;
        ctx.page.pause(500).await;

        ensure!(!details.is_upvote_active().await?, "Upvote should be toggled off");
        Ok(())
    })
    .await
}

#[cfg(feature = "ui")]
#[tokio::test]
#[ignore = "vote button state selectors need re-checking against the live frontend"]
async fn test_downvote_post() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "VOTE-003",
        "downvote_post",
        &[Marker::Smoke, Marker::Ui, Marker::Posts, Marker::Interactions],
    );
    ui_case(CASE, |ctx| async move {
        let user = fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let post = fixtures::test_post(&ctx.api, &user).await?;

        let details = PostDetailsPage::new(&ctx.page);
        details.open_post(post.id).await?;
        details.downvote_post().await?;
        ctx.page.pause(1000).await;

        let status = ctx.api.votes().get_vote_status(user.id, post.id).await?;
        tracing::info!("ℹ️ Vote status after downvote: {}", status.data);
        Ok(())
    })
    .await
}

#[cfg(feature = "ui")]
#[tokio::test]
async fn test_save_post() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "SAVE-001",
        "save_post",
        &[Marker::Ui, Marker::Posts, Marker::Interactions],
    );
    ui_case(CASE, |ctx| async move {
        let user = fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let post = fixtures::test_post(&ctx.api, &user).await?;

        let details = PostDetailsPage::new(&ctx.page);
        details.open_post(post.id).await?;
        details.save_post().await?;
        ctx.page.pause(1000).await;

        // The bookmark icon has no stable "saved" state to assert on.
        ensure!(details.is_post_visible().await, "Post should stay open after saving");
        Ok(())
    })
    .await
}

#[cfg(feature = "ui")]
#[tokio::test]
#[ignore = "repost button on the details page differs from the newsfeed card"]
async fn test_repost_post() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "REPOST-001",
        "repost_post",
        &[Marker::Ui, Marker::Posts, Marker::Interactions],
    );
    ui_case(CASE, |ctx| async move {
        let user = fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let post = fixtures::test_post(&ctx.api, &user).await?;

        let details = PostDetailsPage::new(&ctx.page);
        details.open_post(post.id).await?;
        details.click_repost().await?;
        ctx.page.pause(1500).await;

        let reposted = ctx.api.posts().check_reposted(post.id).await?;
        tracing::info!("ℹ️ Repost check: {}", reposted.data);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_create_post_via_api() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new("POST-API-001", "create_post_via_api", &[Marker::Api, Marker::Posts]);
    api_case(CASE, |ctx| async move {
        let user = fixtures::api_as_user(&ctx.api, &ctx.settings).await?;

        let post = PostBuilder::new()
            .with_author(user.id)
            .with_title("Test Post via API")
            .add_text_block("This is a test post")
            .build();
        let response = ctx.api.posts().create_post(&post).await?;

        ensure!(response.success, "Post creation failed: {}", response.data);
        ensure!(matches!(response.status_code, 200 | 201));
        ensure!(response.data_id().is_some(), "Response should contain post ID");
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_get_post_by_id() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new("POST-API-002", "get_post_by_id", &[Marker::Api, Marker::Posts]);
    api_case(CASE, |ctx| async move {
        let user = fixtures::api_as_user(&ctx.api, &ctx.settings).await?;
        let post = fixtures::test_post(&ctx.api, &user).await?;

        let response = ctx.api.posts().get_post(post.id, None).await?;
        ensure!(response.success, "Should retrieve post successfully");
        ensure!(response.data_id() == Some(post.id), "Unexpected post: {}", response.data);
        ensure!(
            response.field("data.title").and_then(|v| v.as_str()) == Some(post.title.as_str()),
            "Title should round-trip"
        );
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_update_post() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new("POST-API-003", "update_post", &[Marker::Api, Marker::Posts]);
    api_case(CASE, |ctx| async move {
        let user = fixtures::api_as_user(&ctx.api, &ctx.settings).await?;
        let post = fixtures::test_post(&ctx.api, &user).await?;
        let new_title = "Updated Title";

        let response = ctx.api.posts().update_post(post.id, &json!({"title": new_title})).await?;
        ensure!(response.success, "Update should succeed: {}", response.data);

        let fetched = ctx.api.posts().get_post(post.id, None).await?;
        let title = fetched.field("data.title").and_then(|v| v.as_str());
        ensure!(title == Some(new_title), "Title should be updated, got {:?}", title);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_delete_post() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new("POST-API-004", "delete_post", &[Marker::Api, Marker::Posts]);
    api_case(CASE, |ctx| async move {
        let user = fixtures::api_as_user(&ctx.api, &ctx.settings).await?;

        let created = ctx.api.posts().create_post(&create_quick_post(user.id, 1)).await?;
        let post_id = created.data_id().context("create response has no data.id")?;

        let deleted = ctx.api.posts().delete_post(post_id).await?;
        ensure!(deleted.success, "Delete should succeed: {}", deleted.data);

        let fetched = ctx.api.posts().get_post(post_id, None).await?;
        ensure!(
            fetched.status_code == 404,
            "Post should not exist after deletion, got {}",
            fetched.status_code
        );
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_multiple_posts_creation_performance() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "POST-PERF-001",
        "multiple_posts_creation_performance",
        &[Marker::Regression, Marker::Slow],
    );
    api_case(CASE, |ctx| async move {
        let user = fixtures::api_as_user(&ctx.api, &ctx.settings).await?;

        let started = Instant::now();
        for i in 1..=10 {
            let response = ctx.api.posts().create_post(&create_quick_post(user.id, 1)).await?;
            ensure!(response.success, "Post {} creation failed: {}", i, response.data);
        }
        let elapsed = started.elapsed();

        ensure!(
            elapsed < Duration::from_secs(5),
            "Creating 10 posts took {:.2}s, should be < 5s",
            elapsed.as_secs_f64()
        );
        Ok(())
    })
    .await
}
