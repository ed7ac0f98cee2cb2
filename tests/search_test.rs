#![cfg(feature = "ui")]
//! Header search bar, suggestion dropdown and the results page.

use anyhow::ensure;
use blog_e2e::core::fixtures;
use blog_e2e::pages::locators::search as sel;
use blog_e2e::pages::{SearchPage, SuggestionKind};
use blog_e2e::{skip, ui_case, Marker, TestCase};

const NO_RESULTS_TEXT: &str = "Không tìm thấy kết quả nào";

#[tokio::test]
async fn test_search_input_is_visible_on_homepage() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "SEARCH-001",
        "search_input_is_visible_on_homepage",
        &[Marker::Ui, Marker::Search],
    );
    ui_case(CASE, |ctx| async move {
        let search = SearchPage::new(&ctx.page);
        ctx.page.open(&ctx.settings.urls.base_ui).await?;
        ensure!(search.is_input_visible().await, "Search input should be visible");
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_search_input_accepts_text() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "SEARCH-002",
        "search_input_accepts_text",
        &[Marker::Ui, Marker::Search],
    );
    ui_case(CASE, |ctx| async move {
        let search = SearchPage::new(&ctx.page);
        search.open_home().await?;
        search.type_query("test search query").await?;

        let value = search.input_value().await?;
        ensure!(value == "test search query", "Unexpected input value '{}'", value);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_search_suggestions_appear_on_typing() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "SEARCH-003",
        "search_suggestions_appear_on_typing",
        &[Marker::Ui, Marker::Search],
    );
    ui_case(CASE, |ctx| async move {
        let search = SearchPage::new(&ctx.page);
        search.open_home().await?;
        search.type_query("test").await?;
        // Depends on matching content; the result is only logged.
        search.wait_for_suggestions().await;
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_post_suggestion_button_present() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "SEARCH-010",
        "post_suggestion_button_present",
        &[Marker::Ui, Marker::Search],
    );
    ui_case(CASE, |ctx| async move {
        fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let search = SearchPage::new(&ctx.page);
        search.open_home().await?;
        search.type_query("automation").await?;

        if !search.wait_for_suggestions().await {
            return Err(skip("Suggestions dropdown not appearing - check API/content"));
        }
        ensure!(
            search.is_suggestion_visible(SuggestionKind::Post).await,
            "Post suggestion button should be visible"
        );
        tracing::info!("✅ Post suggestion button found");
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_user_suggestion_button_present() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "SEARCH-011",
        "user_suggestion_button_present",
        &[Marker::Ui, Marker::Search],
    );
    ui_case(CASE, |ctx| async move {
        fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let search = SearchPage::new(&ctx.page);
        search.open_home().await?;
        search.type_query("test").await?;

        if !search.wait_for_suggestions().await {
            return Err(skip("Suggestions dropdown not appearing"));
        }
        ensure!(
            search.is_suggestion_visible(SuggestionKind::User).await,
            "User suggestion button should be visible"
        );
        tracing::info!("✅ User suggestion button found");
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_click_post_suggestion_navigates() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "SEARCH-012",
        "click_post_suggestion_navigates",
        &[Marker::Ui, Marker::Search],
    );
    ui_case(CASE, |ctx| async move {
        fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let search = SearchPage::new(&ctx.page);
        search.open_home().await?;
        search.type_query("test").await?;

        if !search.wait_for_suggestions().await {
            return Err(skip("Suggestions dropdown not appearing"));
        }
        let navigated = match search.click_suggestion(SuggestionKind::Post).await {
            Ok(()) => ctx.page.wait_for_url("/search", Some(5000)).await,
            Err(e) => Err(e),
        };
        if let Err(e) = navigated {
            return Err(skip(format!("Could not complete search flow: {}", e)));
        }
        tracing::info!("✅ Navigated to search results page");
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_no_results_message_for_random_query() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "SEARCH-020",
        "no_results_message_for_random_query",
        &[Marker::Ui, Marker::Search],
    );
    ui_case(CASE, |ctx| async move {
        fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let search = SearchPage::new(&ctx.page);
        search.open_results("xyzabc123nonsense987").await?;

        if !search.is_no_results_visible(Some(10000)).await {
            tracing::info!("ℹ️ Empty state message not found - verify search page implementation");
            return Ok(());
        }
        let message = ctx.page.locator(sel::NO_RESULTS_MESSAGE).await.first();
        let text = ctx.page.get_text(&message, "No results message").await?;
        ensure!(
            text.contains(NO_RESULTS_TEXT),
            "Empty state should say '{}', got '{}'",
            NO_RESULTS_TEXT,
            text
        );
        tracing::info!("✅ Empty state message displayed correctly");
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_search_button_is_clickable() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "SEARCH-030",
        "search_button_is_clickable",
        &[Marker::Ui, Marker::Search],
    );
    ui_case(CASE, |ctx| async move {
        let search = SearchPage::new(&ctx.page);
        search.open_home().await?;
        ensure!(
            search.is_search_button_enabled().await?,
            "Search button should be visible and enabled"
        );
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_click_search_button_triggers_search() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "SEARCH-031",
        "click_search_button_triggers_search",
        &[Marker::Ui, Marker::Search],
    );
    ui_case(CASE, |ctx| async move {
        fixtures::auth_user(&ctx.page, &ctx.api, &ctx.settings).await?;
        let search = SearchPage::new(&ctx.page);
        search.open_home().await?;
        search.type_query("test query").await?;
        search.submit().await?;

        match ctx.page.wait_for_url("/search", Some(5000)).await {
            Ok(()) => tracing::info!("✅ Search triggered successfully"),
            Err(_) => tracing::info!("ℹ️ Search completed but URL pattern may differ"),
        }
        Ok(())
    })
    .await
}
