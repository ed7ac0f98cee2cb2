use super::locators::admin::{dashboard, posts, reports, users};
use crate::core::base_page::BasePage;
use crate::utils::error::Result;

const LOAD_TIMEOUT: u64 = 10000;
const FILTER_WAIT: u64 = 1000;

/// Dashboard statistics window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Week,
    Month,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Today, Period::Week, Period::Month];

    fn selector(self) -> &'static str {
        match self {
            Period::Today => dashboard::TODAY_BUTTON,
            Period::Week => dashboard::WEEK_BUTTON,
            Period::Month => dashboard::MONTH_BUTTON,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Today => "Hôm nay",
            Period::Week => "7 ngày qua",
            Period::Month => "30 ngày qua",
        }
    }
}

/// All four admin screens. Requires a session whose role is ADMIN.
pub struct AdminPages {
    base: BasePage,
}

impl AdminPages {
    pub fn new(base: &BasePage) -> Self {
        Self { base: base.clone() }
    }

    async fn open_with_heading(&self, path: &str, heading: &str) -> Result<()> {
        self.base.open(&self.base.settings().url(path)).await?;
        let title = self.base.locator(heading).await.first();
        self.base
            .wait_for_visible(&title, heading, Some(LOAD_TIMEOUT))
            .await
    }

    pub async fn open_dashboard(&self) -> Result<()> {
        self.open_with_heading("/admin/dashboard", dashboard::HEADING).await
    }

    pub async fn open_users(&self) -> Result<()> {
        self.open_with_heading("/admin/users/list", users::HEADING).await
    }

    pub async fn open_posts(&self) -> Result<()> {
        self.open_with_heading("/admin/posts/list", posts::HEADING).await
    }

    pub async fn open_reports(&self) -> Result<()> {
        self.open_with_heading("/admin/reports/list", reports::HEADING).await
    }

    /// Visibility check for any admin selector, waiting up to `timeout`.
    pub async fn is_shown(&self, selector: &str, timeout: Option<u64>) -> bool {
        let target = self.base.locator(selector).await.first();
        self.base.is_visible_slow(&target, timeout).await
    }

    pub async fn is_period_visible(&self, period: Period) -> bool {
        self.is_shown(period.selector(), Some(LOAD_TIMEOUT)).await
    }

    pub async fn select_period(&self, period: Period) -> Result<()> {
        let button = self.base.locator(period.selector()).await.first();
        self.base.click(&button, period.label()).await?;
        self.base.pause(FILTER_WAIT).await;
        Ok(())
    }

    /// Types into the users search box and waits out its debounce.
    pub async fn search_users(&self, query: &str) -> Result<()> {
        let input = self.base.locator(users::SEARCH_INPUT).await.first();
        self.base.fill(&input, query, "Users search").await?;
        self.base.pause(FILTER_WAIT).await;
        Ok(())
    }

    /// `None` when the table has no rows.
    pub async fn first_user_row_actions_visible(&self) -> Option<bool> {
        let row = self.base.locator(users::USER_ROW).await.first();
        if !self.base.is_visible(&row).await {
            return None;
        }
        let actions = row.locator(users::CELL_ACTIONS).first();
        Some(self.base.is_visible_slow(&actions, Some(5000)).await)
    }

    /// Clicks a row action (view or edit button) and waits for its dialog.
    pub async fn open_first_user_dialog(&self, button_selector: &str) -> Result<bool> {
        let row = self.base.locator(users::USER_ROW).await.first();
        if !self.base.is_visible(&row).await {
            return Ok(false);
        }
        let button = row.locator(button_selector).first();
        if !self.base.is_visible(&button).await {
            return Ok(false);
        }
        self.base.click(&button, "User row action").await?;
        let dialog = self
            .base
            .locator(super::locators::admin::user_dialog::DIALOG)
            .await
            .first();
        self.base
            .wait_for_visible(&dialog, "User dialog", Some(5000))
            .await?;
        Ok(true)
    }
}
