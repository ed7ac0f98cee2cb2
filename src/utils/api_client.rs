//! Typed client for the blog backend REST API.
//!
//! Used by fixtures to create users, posts and comments before a browser
//! test starts, and by the API-level tests directly.

use crate::config::Settings;
use crate::utils::data_builder::{CommentData, PostData};
use crate::utils::error::{E2eError, Result};
use crate::utils::masking::mask_json;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

pub type Query<'a> = [(&'a str, String)];

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub method: String,
    pub url: String,
    pub status_code: u16,
    /// Parsed JSON body; a non-JSON body is kept as a JSON string.
    pub data: Value,
    pub success: bool,
}

impl ApiResponse {
    pub fn json(&self) -> Option<&Map<String, Value>> {
        self.data.as_object()
    }

    /// Dotted lookup into the body, e.g. `"data.user.id"` or `"data.items.0.title"`.
    pub fn field(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.data, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    pub fn data_id(&self) -> Option<i64> {
        self.field("data.id").and_then(Value::as_i64)
    }

    /// Paged lists come back as `data.items`; some endpoints return `data` as a bare array.
    pub fn items(&self) -> Vec<&Value> {
        self.field("data.items")
            .and_then(Value::as_array)
            .or_else(|| self.field("data").and_then(Value::as_array))
            .map(|items| items.iter().collect())
            .unwrap_or_default()
    }

    pub fn ensure_success(self) -> Result<Self> {
        if self.success {
            return Ok(self);
        }
        Err(E2eError::ApiStatusError {
            method: self.method,
            url: self.url,
            status: self.status_code,
            body: self.data.to_string(),
        })
    }
}

struct Session {
    client: Client,
    jar: Arc<Jar>,
    token: Option<String>,
}

struct ClientState {
    base_url: String,
    default_headers: BTreeMap<String, String>,
    timeout: Duration,
    session: RwLock<Session>,
}

/// Low-level HTTP access shared by every endpoint group. Cloning shares the
/// cookie jar and bearer token.
#[derive(Clone)]
pub struct BaseApiClient {
    state: Arc<ClientState>,
}

fn build_client(
    jar: Arc<Jar>,
    headers: &BTreeMap<String, String>,
    timeout: Duration,
) -> Result<Client> {
    let mut header_map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            E2eError::InvalidConfigValueError {
                field: "headers".to_string(),
                value: name.clone(),
                reason: e.to_string(),
            }
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| E2eError::InvalidConfigValueError {
            field: format!("headers.{}", name),
            value: "<redacted>".to_string(),
            reason: e.to_string(),
        })?;
        header_map.insert(name, value);
    }
    header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Client::builder()
        .default_headers(header_map)
        .cookie_provider(jar)
        .timeout(timeout)
        .build()
        .map_err(E2eError::ApiError)
}

impl BaseApiClient {
    pub fn new(
        base_url: impl Into<String>,
        default_headers: BTreeMap<String, String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let jar = Arc::new(Jar::default());
        let client = build_client(jar.clone(), &default_headers, timeout)?;

        Ok(Self {
            state: Arc::new(ClientState {
                base_url,
                default_headers,
                timeout,
                session: RwLock::new(Session {
                    client,
                    jar,
                    token: None,
                }),
            }),
        })
    }

    fn session(&self) -> RwLockReadGuard<'_, Session> {
        self.state
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn session_mut(&self) -> RwLockWriteGuard<'_, Session> {
        self.state
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn base_url(&self) -> &str {
        &self.state.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.state.base_url, endpoint.trim_start_matches('/'))
    }

    pub fn set_auth_token(&self, token: impl Into<String>) {
        self.session_mut().token = Some(token.into());
        tracing::debug!("🔑 Auth token set in headers");
    }

    pub fn clear_auth_token(&self) {
        self.session_mut().token = None;
    }

    pub fn auth_token(&self) -> Option<String> {
        self.session().token.clone()
    }

    /// Cookies the backend has set for the API origin, for injecting into a browser.
    pub fn get_cookies(&self) -> HashMap<String, String> {
        let Ok(url) = url::Url::parse(&self.state.base_url) else {
            return HashMap::new();
        };
        let header = self.session().jar.cookies(&url);

        header
            .as_ref()
            .and_then(|value| value.to_str().ok())
            .map(|raw| {
                raw.split(';')
                    .filter_map(|pair| pair.trim().split_once('='))
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Drops all cookies and the bearer token.
    pub fn clear_session(&self) -> Result<()> {
        let jar = Arc::new(Jar::default());
        let client = build_client(jar.clone(), &self.state.default_headers, self.state.timeout)?;
        let mut session = self.session_mut();
        session.client = client;
        session.jar = jar;
        session.token = None;
        tracing::info!("🧹 Session cleared");
        Ok(())
    }

    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        query: &Query<'_>,
        body: Option<Value>,
    ) -> Result<ApiResponse> {
        let url = self.url(endpoint);
        let (client, token) = {
            let session = self.session();
            (session.client.clone(), session.token.clone())
        };

        tracing::info!("🌐 {} {}", method, url);

        let mut request = client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            tracing::debug!("📤 Request Body: {}", mask_json(body));
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("❌ API Request Failed: {}", e);
            E2eError::ApiError(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        let data = serde_json::from_str(&text).unwrap_or(Value::String(text));

        tracing::info!("✅ Response: {}", status.as_u16());
        tracing::debug!("📥 Response Data: {}", mask_json(&data));

        Ok(ApiResponse {
            method: method.to_string(),
            url,
            status_code: status.as_u16(),
            data,
            success: status.is_success(),
        })
    }

    pub async fn get(&self, endpoint: &str, query: &Query<'_>) -> Result<ApiResponse> {
        self.send(Method::GET, endpoint, query, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<ApiResponse> {
        let body = serde_json::to_value(body)?;
        self.send(Method::POST, endpoint, &[], Some(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<ApiResponse> {
        let body = serde_json::to_value(body)?;
        self.send(Method::PATCH, endpoint, &[], Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<ApiResponse> {
        let body = serde_json::to_value(body)?;
        self.send(Method::PUT, endpoint, &[], Some(body)).await
    }

    pub async fn delete(&self, endpoint: &str, query: &Query<'_>) -> Result<ApiResponse> {
        self.send(Method::DELETE, endpoint, query, None).await
    }
}

pub struct AuthApi<'a> {
    client: &'a BaseApiClient,
}

impl AuthApi<'_> {
    pub async fn register(&self, email: &str, name: &str, password: &str) -> Result<ApiResponse> {
        self.client
            .post(
                "auth/register",
                &json!({"email": email, "name": name, "password": password}),
            )
            .await
    }

    /// Logs in and, on success, sends `data.accessToken` as the bearer from then on.
    pub async fn login(&self, email_or_username: &str, password: &str) -> Result<ApiResponse> {
        let response = self
            .client
            .post(
                "auth/login",
                &json!({"emailOrUsername": email_or_username, "password": password}),
            )
            .await?;

        if response.success {
            tracing::info!("🔐 Logged in as: {}", email_or_username);
            if let Some(token) = response.field("data.accessToken").and_then(Value::as_str) {
                self.client.set_auth_token(token);
            }
        }
        Ok(response)
    }

    pub async fn logout(&self) -> Result<ApiResponse> {
        let response = self
            .client
            .send(Method::POST, "auth/logout", &[], None)
            .await;
        self.client.clear_auth_token();
        response
    }

    pub async fn get_current_user(&self) -> Result<ApiResponse> {
        self.client.get("auth/me", &[]).await
    }
}

pub struct PostsApi<'a> {
    client: &'a BaseApiClient,
}

impl PostsApi<'_> {
    pub async fn get_newsfeed(&self, page: u32, limit: u32, user_id: Option<i64>) -> Result<ApiResponse> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(user_id) = user_id {
            query.push(("userId", user_id.to_string()));
        }
        self.client.get("newsfeed", &query).await
    }

    pub async fn create_post(&self, post: &PostData) -> Result<ApiResponse> {
        self.client.post("blog-posts", post).await
    }

    pub async fn get_post(&self, post_id: i64, user_id: Option<i64>) -> Result<ApiResponse> {
        let query: Vec<_> = user_id
            .map(|id| ("userId", id.to_string()))
            .into_iter()
            .collect();
        self.client
            .get(&format!("blog-posts/{}", post_id), &query)
            .await
    }

    pub async fn update_post(&self, post_id: i64, update: &Value) -> Result<ApiResponse> {
        self.client
            .patch(&format!("blog-posts/{}", post_id), update)
            .await
    }

    pub async fn delete_post(&self, post_id: i64) -> Result<ApiResponse> {
        self.client
            .delete(&format!("blog-posts/{}", post_id), &[])
            .await
    }

    pub async fn repost(&self, author_id: i64, original_post_id: i64) -> Result<ApiResponse> {
        self.client
            .post(
                "blog-posts/repost",
                &json!({
                    "authorId": author_id,
                    "originalPostId": original_post_id,
                    "type": "REPOST"
                }),
            )
            .await
    }

    pub async fn check_reposted(&self, original_post_id: i64) -> Result<ApiResponse> {
        self.client
            .get(
                "blog-posts/repost/check",
                &[("originalPostId", original_post_id.to_string())],
            )
            .await
    }

    pub async fn delete_repost(&self, original_post_id: i64) -> Result<ApiResponse> {
        self.client
            .delete(
                "blog-posts/repost",
                &[("originalPostId", original_post_id.to_string())],
            )
            .await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteType {
    Upvote,
    Downvote,
}

impl VoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Upvote => "upvote",
            VoteType::Downvote => "downvote",
        }
    }
}

pub struct VotesApi<'a> {
    client: &'a BaseApiClient,
}

impl VotesApi<'_> {
    /// Casting the same vote twice toggles it off.
    pub async fn vote(&self, user_id: i64, post_id: i64, vote_type: VoteType) -> Result<ApiResponse> {
        self.client
            .post(
                "votes",
                &json!({"userId": user_id, "postId": post_id, "voteType": vote_type.as_str()}),
            )
            .await
    }

    pub async fn get_vote_status(&self, user_id: i64, post_id: i64) -> Result<ApiResponse> {
        self.client
            .get(
                "votes/status",
                &[("userId", user_id.to_string()), ("postId", post_id.to_string())],
            )
            .await
    }
}

pub struct CommentsApi<'a> {
    client: &'a BaseApiClient,
}

impl CommentsApi<'_> {
    pub async fn create_comment(&self, comment: &CommentData) -> Result<ApiResponse> {
        self.client.post("comments", comment).await
    }

    pub async fn get_comments(&self, post_id: i64, page: u32, limit: u32) -> Result<ApiResponse> {
        self.client
            .get(
                "comments",
                &[
                    ("postId", post_id.to_string()),
                    ("page", page.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await
    }

    pub async fn delete_comment(&self, comment_id: i64) -> Result<ApiResponse> {
        self.client
            .delete(&format!("comments/{}", comment_id), &[])
            .await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactTarget {
    Post(i64),
    Comment(i64),
}

pub struct ReactsApi<'a> {
    client: &'a BaseApiClient,
}

impl ReactsApi<'_> {
    pub async fn react(&self, user_id: i64, target: ReactTarget, emoji_id: i64) -> Result<ApiResponse> {
        let body = match target {
            ReactTarget::Post(id) => json!({
                "userId": user_id,
                "postId": id,
                "commentId": null,
                "emojiId": emoji_id,
                "type": "POST"
            }),
            ReactTarget::Comment(id) => json!({
                "userId": user_id,
                "postId": null,
                "commentId": id,
                "emojiId": emoji_id,
                "type": "COMMENT"
            }),
        };
        self.client.post("user-reacts", &body).await
    }

    pub async fn get_reacts(&self, target: ReactTarget) -> Result<ApiResponse> {
        let query = match target {
            ReactTarget::Post(id) => [("postId", id.to_string())],
            ReactTarget::Comment(id) => [("commentId", id.to_string())],
        };
        self.client.get("user-reacts", &query).await
    }
}

pub struct CommunitiesApi<'a> {
    client: &'a BaseApiClient,
}

impl CommunitiesApi<'_> {
    pub async fn list(&self, page: u32, limit: u32) -> Result<ApiResponse> {
        self.client
            .get(
                "communities",
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await
    }

    pub async fn get(&self, community_id: i64) -> Result<ApiResponse> {
        self.client
            .get(&format!("communities/{}", community_id), &[])
            .await
    }

    pub async fn join(&self, community_id: i64, user_id: i64) -> Result<ApiResponse> {
        self.client
            .post(
                &format!("communities/{}/join", community_id),
                &json!({"userId": user_id}),
            )
            .await
    }
}

pub struct SavedPostsApi<'a> {
    client: &'a BaseApiClient,
}

impl SavedPostsApi<'_> {
    pub async fn toggle(&self, user_id: i64, post_id: i64) -> Result<ApiResponse> {
        self.client
            .post(
                "saved-posts/toggle",
                &json!({"userId": user_id, "postId": post_id}),
            )
            .await
    }

    pub async fn list(&self, user_id: i64, page: u32, limit: u32) -> Result<ApiResponse> {
        self.client
            .get(
                "saved-posts",
                &[
                    ("userId", user_id.to_string()),
                    ("page", page.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchKind {
    #[default]
    All,
    Posts,
    Users,
    Communities,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::All => "all",
            SearchKind::Posts => "posts",
            SearchKind::Users => "users",
            SearchKind::Communities => "communities",
        }
    }
}

pub struct SearchApi<'a> {
    client: &'a BaseApiClient,
}

impl SearchApi<'_> {
    pub async fn search(&self, query: &str, kind: SearchKind, page: u32, limit: u32) -> Result<ApiResponse> {
        self.client
            .get(
                "search",
                &[
                    ("query", query.to_string()),
                    ("type", kind.as_str().to_string()),
                    ("page", page.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await
    }
}

/// Entry point grouping every endpoint family:
/// `api.auth().login(..)`, `api.posts().get_newsfeed(..)`.
#[derive(Clone)]
pub struct BlogApiClient {
    base: BaseApiClient,
}

impl BlogApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        Self::with_options(base_url, headers, Duration::from_secs(30))
    }

    pub fn with_options(
        base_url: impl Into<String>,
        default_headers: BTreeMap<String, String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base = BaseApiClient::new(base_url, default_headers, timeout)?;
        tracing::info!("🔧 Blog API Client initialized: {}", base.base_url());
        Ok(Self { base })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::with_options(
            settings.urls.base_api.clone(),
            settings.default_headers.clone(),
            Duration::from_millis(settings.timeouts.api_request),
        )
    }

    pub fn base(&self) -> &BaseApiClient {
        &self.base
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: &self.base }
    }

    pub fn posts(&self) -> PostsApi<'_> {
        PostsApi { client: &self.base }
    }

    pub fn votes(&self) -> VotesApi<'_> {
        VotesApi { client: &self.base }
    }

    pub fn comments(&self) -> CommentsApi<'_> {
        CommentsApi { client: &self.base }
    }

    pub fn reacts(&self) -> ReactsApi<'_> {
        ReactsApi { client: &self.base }
    }

    pub fn communities(&self) -> CommunitiesApi<'_> {
        CommunitiesApi { client: &self.base }
    }

    pub fn saved_posts(&self) -> SavedPostsApi<'_> {
        SavedPostsApi { client: &self.base }
    }

    pub fn search(&self) -> SearchApi<'_> {
        SearchApi { client: &self.base }
    }

    pub fn get_cookies(&self) -> HashMap<String, String> {
        self.base.get_cookies()
    }

    pub fn clear_session(&self) -> Result<()> {
        self.base.clear_session()
    }

    pub fn auth_token(&self) -> Option<String> {
        self.base.auth_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(data: Value, status: u16) -> ApiResponse {
        ApiResponse {
            method: "GET".to_string(),
            url: "http://localhost/api/x".to_string(),
            status_code: status,
            data,
            success: (200..300).contains(&status),
        }
    }

    #[test]
    fn test_field_paths() {
        let resp = response(
            json!({"data": {"id": 42, "user": {"id": 7}, "items": [{"title": "a"}]}}),
            200,
        );
        assert_eq!(resp.data_id(), Some(42));
        assert_eq!(resp.field("data.user.id").and_then(Value::as_i64), Some(7));
        assert_eq!(
            resp.field("data.items.0.title").and_then(Value::as_str),
            Some("a")
        );
        assert!(resp.field("data.missing.deeper").is_none());
        assert_eq!(resp.items().len(), 1);
    }

    #[test]
    fn test_items_from_bare_array() {
        let resp = response(json!({"data": [{"id": 1}, {"id": 2}]}), 200);
        assert_eq!(resp.items().len(), 2);

        let text = response(Value::String("Bad Gateway".to_string()), 502);
        assert!(text.json().is_none());
        assert!(text.items().is_empty());
    }

    #[test]
    fn test_ensure_success() {
        assert!(response(json!({}), 201).ensure_success().is_ok());
        let err = response(json!({"message": "nope"}), 403)
            .ensure_success()
            .unwrap_err();
        assert!(matches!(err, E2eError::ApiStatusError { status: 403, .. }));
    }

    #[test]
    fn test_url_join() {
        let client = BlogApiClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(
            client.base().url("/auth/login"),
            "http://localhost:8080/api/auth/login"
        );
        assert_eq!(client.base().url("newsfeed"), "http://localhost:8080/api/newsfeed");
    }

    #[test]
    fn test_token_lifecycle() {
        let client = BlogApiClient::new("http://localhost:8080/api").unwrap();
        assert!(client.auth_token().is_none());
        client.base().set_auth_token("abc");
        assert_eq!(client.clone().auth_token().as_deref(), Some("abc"));
        client.clear_session().unwrap();
        assert!(client.auth_token().is_none());
        assert!(client.get_cookies().is_empty());
    }
}
