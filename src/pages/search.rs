use super::locators::search as sel;
use crate::core::base_page::BasePage;
use crate::utils::error::Result;

const SUGGESTIONS_TIMEOUT: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Post,
    User,
    Community,
    Hashtag,
}

impl SuggestionKind {
    fn selector(self) -> &'static str {
        match self {
            SuggestionKind::Post => sel::SUGGEST_POST_BTN,
            SuggestionKind::User => sel::SUGGEST_USER_BTN,
            SuggestionKind::Community => sel::SUGGEST_COMMUNITY_BTN,
            SuggestionKind::Hashtag => sel::SUGGEST_HASHTAG_BTN,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionKind::Post => "post",
            SuggestionKind::User => "user",
            SuggestionKind::Community => "community",
            SuggestionKind::Hashtag => "hashtag",
        }
    }
}

/// Search bar in the header plus the `/search` results page.
pub struct SearchPage {
    base: BasePage,
}

impl SearchPage {
    pub fn new(base: &BasePage) -> Self {
        Self { base: base.clone() }
    }

    pub async fn open_home(&self) -> Result<()> {
        self.base.open(&self.base.settings().urls.base_ui).await?;
        let input = self.base.locator(sel::SEARCH_INPUT).await.first();
        self.base.wait_for_visible(&input, "Search input", None).await
    }

    pub async fn is_input_visible(&self) -> bool {
        let input = self.base.locator(sel::SEARCH_INPUT).await.first();
        self.base.is_visible_slow(&input, Some(10000)).await
    }

    pub async fn type_query(&self, query: &str) -> Result<()> {
        let input = self.base.locator(sel::SEARCH_INPUT).await.first();
        self.base.fill(&input, query, "Search input").await
    }

    pub async fn input_value(&self) -> Result<String> {
        let input = self.base.locator(sel::SEARCH_INPUT).await.first();
        self.base.input_value(&input).await
    }

    /// False when no suggestions show up within 5s; that is legitimate when
    /// nothing matches.
    pub async fn wait_for_suggestions(&self) -> bool {
        let dropdown = self.base.locator(sel::SUGGESTIONS_DROPDOWN).await.first();
        let shown = self
            .base
            .is_visible_slow(&dropdown, Some(SUGGESTIONS_TIMEOUT))
            .await;
        if shown {
            tracing::info!("✅ Suggestions dropdown appeared");
        } else {
            tracing::info!("ℹ️ No suggestions appeared");
        }
        shown
    }

    pub async fn is_suggestion_visible(&self, kind: SuggestionKind) -> bool {
        let button = self.base.locator(kind.selector()).await.first();
        self.base.is_visible(&button).await
    }

    pub async fn click_suggestion(&self, kind: SuggestionKind) -> Result<()> {
        let button = self.base.locator(kind.selector()).await.first();
        self.base
            .click(&button, &format!("{} suggestion", kind.as_str()))
            .await
    }

    pub async fn is_search_button_enabled(&self) -> Result<bool> {
        let button = self.base.locator(sel::SEARCH_BUTTON).await.first();
        if !self.base.is_visible_slow(&button, None).await {
            return Ok(false);
        }
        self.base.is_enabled(&button).await
    }

    pub async fn submit(&self) -> Result<()> {
        let button = self.base.locator(sel::SEARCH_BUTTON).await.first();
        self.base.click(&button, "Search button").await
    }

    pub async fn open_results(&self, query: &str) -> Result<()> {
        let mut url = url::Url::parse(&self.base.settings().url("/search"))
            .map_err(|e| crate::utils::error::E2eError::ValidationError {
                message: format!("Invalid search URL: {}", e),
            })?;
        url.query_pairs_mut().append_pair("q", query);
        self.base.open(url.as_str()).await
    }

    pub async fn is_no_results_visible(&self, timeout: Option<u64>) -> bool {
        let message = self.base.locator(sel::NO_RESULTS_MESSAGE).await.first();
        self.base.is_visible_slow(&message, timeout).await
    }
}
