use crate::config::{Credentials, Settings};
use crate::core::harness::skip;
use crate::utils::api_client::{ApiResponse, BlogApiClient};
use crate::utils::data_builder::create_quick_post;
use anyhow::{bail, Context};
use serde_json::Value;

#[cfg(feature = "ui")]
use crate::core::base_page::BasePage;
#[cfg(feature = "ui")]
use playwright_rs::Cookie;
#[cfg(feature = "ui")]
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct TestUser {
    pub email: String,
    pub name: String,
    pub password: String,
    pub id: i64,
    pub username: Option<String>,
    pub role: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreatedPost {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
}

fn user_from_login(creds: &Credentials, response: &ApiResponse) -> anyhow::Result<TestUser> {
    let id = response
        .field("data.user.id")
        .and_then(Value::as_i64)
        .context("login response has no data.user.id")?;
    let username = response
        .field("data.user.username")
        .and_then(Value::as_str)
        .map(str::to_string);
    let name = response
        .field("data.user.name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| username.clone())
        .unwrap_or_else(|| "Test User".to_string());

    Ok(TestUser {
        email: creds.email.clone(),
        name,
        password: creds.password.clone(),
        id,
        username,
        role: response
            .field("data.user.role")
            .and_then(Value::as_str)
            .map(str::to_string),
        access_token: response
            .field("data.accessToken")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

async fn login_with(api: &BlogApiClient, creds: &Credentials, label: &str) -> anyhow::Result<TestUser> {
    let response = api.auth().login(&creds.email, &creds.password).await?;
    if !response.success {
        bail!("Failed to login {} {}: {}", label, creds.email, response.data);
    }
    let user = user_from_login(creds, &response)?;
    tracing::info!("👤 Logged in with {}: {} (ID: {})", label, user.email, user.id);
    Ok(user)
}

/// Logs in the configured existing account through the API.
/// Skips when the account is not configured.
pub async fn api_as_user(api: &BlogApiClient, settings: &Settings) -> anyhow::Result<TestUser> {
    if !settings.existing_user.is_valid() {
        return Err(skip(
            "No existing verified user credentials configured (EXISTING_USER_EMAIL, EXISTING_USER_PASSWORD)",
        ));
    }
    login_with(api, &settings.existing_user, "existing account").await
}

/// Same login as [`api_as_user`]; used where the test relies on the account's
/// pre-existing posts and followers.
pub async fn existing_user_api(api: &BlogApiClient, settings: &Settings) -> anyhow::Result<TestUser> {
    api_as_user(api, settings).await
}

pub async fn logout(api: &BlogApiClient) -> anyhow::Result<()> {
    let response = api.auth().logout().await;
    api.clear_session()?;
    if let Err(e) = response {
        tracing::warn!("⚠️ Logout request failed: {}", e);
    }
    tracing::info!("🧹 User logged out");
    Ok(())
}

/// Logs in via the API, opens the UI origin and stores the token in localStorage.
#[cfg(feature = "ui")]
pub async fn auth_user(
    page: &BasePage,
    api: &BlogApiClient,
    settings: &Settings,
) -> anyhow::Result<TestUser> {
    if !settings.existing_user.is_valid() {
        return Err(skip("Existing user credentials not configured - required for auth"));
    }
    let user = login_with(api, &settings.existing_user, "existing account").await?;
    let token = user
        .access_token
        .clone()
        .context("login response has no data.accessToken")?;

    page.open(&settings.urls.base_ui).await?;
    page.set_local_storage("accessToken", &token).await?;

    tracing::info!("🔐 Authenticated user ready: {} (ID: {})", user.email, user.id);
    Ok(user)
}

#[cfg(feature = "ui")]
pub async fn admin_page(
    page: &BasePage,
    api: &BlogApiClient,
    settings: &Settings,
) -> anyhow::Result<TestUser> {
    if !settings.admin.is_valid() {
        return Err(skip("Admin credentials not configured (ADMIN_EMAIL, ADMIN_PASSWORD)"));
    }
    let user = login_with(api, &settings.admin, "admin").await?;
    if user.role.as_deref() != Some("ADMIN") {
        bail!(
            "User {} is not an admin (role: {})",
            user.email,
            user.role.as_deref().unwrap_or("none")
        );
    }
    let token = user
        .access_token
        .clone()
        .context("admin login response has no data.accessToken")?;

    page.open(&settings.urls.base_ui).await?;
    page.set_local_storage("accessToken", &token).await?;

    tracing::info!("🔐 Admin authenticated: {}", user.email);
    Ok(user)
}

/// Session cookies scoped to the UI host, ready for `BrowserContext::add_cookies`.
#[cfg(feature = "ui")]
pub fn session_cookies(
    cookies: &HashMap<String, String>,
    base_ui: &str,
) -> anyhow::Result<Vec<Cookie>> {
    let url = url::Url::parse(base_ui).with_context(|| format!("invalid UI URL: {}", base_ui))?;
    let domain = url
        .host_str()
        .with_context(|| format!("UI URL has no host: {}", base_ui))?
        .to_string();
    let secure = url.scheme() == "https";

    Ok(cookies
        .iter()
        .map(|(name, value)| Cookie {
            name: name.clone(),
            value: value.clone(),
            domain: domain.clone(),
            path: "/".to_string(),
            expires: -1.0,
            http_only: true,
            secure,
            same_site: None,
        })
        .collect())
}

/// Logs in via the API and copies the session cookies into the browser.
#[cfg(feature = "ui")]
pub async fn existing_user_page(
    page: &BasePage,
    api: &BlogApiClient,
    settings: &Settings,
) -> anyhow::Result<TestUser> {
    let user = existing_user_api(api, settings).await?;

    let cookies = session_cookies(&api.get_cookies(), &settings.urls.base_ui)?;
    page.add_cookies(&cookies).await?;
    page.open(&settings.urls.base_ui).await?;
    if let Some(token) = &user.access_token {
        page.set_local_storage("accessToken", token).await?;
    }

    tracing::info!("🔐 Existing user page ready: {}", user.email);
    Ok(user)
}

pub async fn test_post(api: &BlogApiClient, user: &TestUser) -> anyhow::Result<CreatedPost> {
    let post = create_quick_post(user.id, 2);
    let response = api.posts().create_post(&post).await?;
    if !response.success {
        bail!("Failed to create test post: {}", response.data);
    }
    let id = response
        .data_id()
        .context("create post response has no data.id")?;

    let preview: String = post.title.chars().take(30).collect();
    tracing::info!("📝 Test post created: ID={}, Title='{}...'", id, preview);

    Ok(CreatedPost {
        id,
        title: post.title,
        author_id: user.id,
    })
}

/// Creates up to `count` posts; individual failures are logged and skipped.
pub async fn test_posts(api: &BlogApiClient, user: &TestUser, count: usize) -> anyhow::Result<Vec<CreatedPost>> {
    let mut posts = Vec::with_capacity(count);
    for _ in 0..count {
        let post = create_quick_post(user.id, 1);
        match api.posts().create_post(&post).await {
            Ok(response) if response.success => {
                if let Some(id) = response.data_id() {
                    posts.push(CreatedPost {
                        id,
                        title: post.title,
                        author_id: user.id,
                    });
                }
            }
            Ok(response) => tracing::warn!("⚠️ Post creation rejected: {}", response.status_code),
            Err(e) => tracing::warn!("⚠️ Post creation failed: {}", e),
        }
    }
    tracing::info!("📝 Created {} test posts", posts.len());
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_login_response() {
        let creds = Credentials::new("qa@example.com", "Secret123");
        let response = ApiResponse {
            method: "POST".to_string(),
            url: "http://localhost/api/auth/login".to_string(),
            status_code: 200,
            data: json!({
                "data": {
                    "accessToken": "jwt",
                    "user": {"id": 12, "username": "qa_user", "role": "USER"}
                }
            }),
            success: true,
        };

        let user = user_from_login(&creds, &response).unwrap();
        assert_eq!(user.id, 12);
        assert_eq!(user.name, "qa_user");
        assert_eq!(user.role.as_deref(), Some("USER"));
        assert_eq!(user.access_token.as_deref(), Some("jwt"));
    }

    #[cfg(feature = "ui")]
    #[test]
    fn test_session_cookies_scoped_to_ui_host() {
        let jar = HashMap::from([("refreshToken".to_string(), "rt_abc".to_string())]);

        let cookies = session_cookies(&jar, "http://localhost:3000").unwrap();
        assert_eq!(cookies.len(), 1);
        let cookie = &cookies[0];
        assert_eq!(cookie.name, "refreshToken");
        assert_eq!(cookie.value, "rt_abc");
        assert_eq!(cookie.domain, "localhost");
        assert_eq!(cookie.path, "/");
        assert!(!cookie.secure);

        let secure = session_cookies(&jar, "https://blog.example.com").unwrap();
        assert_eq!(secure[0].domain, "blog.example.com");
        assert!(secure[0].secure);

        assert!(session_cookies(&jar, "not a url").is_err());
    }

    #[tokio::test]
    async fn test_missing_credentials_skip() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        let api = BlogApiClient::new("http://127.0.0.1:9/api").unwrap();
        let err = api_as_user(&api, &settings).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::utils::error::E2eError>(),
            Some(crate::utils::error::E2eError::Skipped { .. })
        ));
    }
}
