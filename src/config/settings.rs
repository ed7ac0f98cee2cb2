use crate::config::toml_config::SettingsFile;
use crate::utils::error::{E2eError, Result};
use crate::utils::masking::MASK;
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }
}

impl FromStr for Environment {
    type Err = E2eError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" | "local" => Ok(Environment::Dev),
            "staging" | "stage" => Ok(Environment::Staging),
            "prod" | "production" => Ok(Environment::Prod),
            other => Err(E2eError::InvalidConfigValueError {
                field: "TEST_ENV".to_string(),
                value: other.to_string(),
                reason: "Expected one of: dev, staging, prod".to_string(),
            }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

impl FromStr for BrowserKind {
    type Err = E2eError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" | "safari" => Ok(BrowserKind::Webkit),
            other => Err(E2eError::InvalidConfigValueError {
                field: "BROWSER".to_string(),
                value: other.to_string(),
                reason: "Expected one of: chromium, firefox, webkit".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Urls {
    pub base_ui: String,
    pub base_api: String,
    pub login_path: String,
}

impl Urls {
    pub fn full_login_url(&self) -> String {
        join_url(&self.base_ui, &self.login_path)
    }
}

/// All values in milliseconds.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Timeouts {
    pub default: u64,
    pub short: u64,
    pub typing: u64,
    pub api_request: u64,
    pub element: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for ViewportSize {
    type Err = E2eError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || E2eError::InvalidConfigValueError {
            field: "VIEWPORT".to_string(),
            value: s.to_string(),
            reason: "Expected WIDTHxHEIGHT, e.g. 1920x1080".to_string(),
        };
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        Ok(ViewportSize {
            width: w.trim().parse().map_err(|_| invalid())?,
            height: h.trim().parse().map_err(|_| invalid())?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BrowserSettings {
    pub kind: BrowserKind,
    pub headless: bool,
    pub slow_mo: u64,
    pub record_video: bool,
    pub viewport: ViewportSize,
    pub locale: String,
}

fn mask_secret<S: Serializer>(value: &str, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if value.is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str(MASK)
    }
}

#[derive(Clone, Default, Serialize)]
pub struct Credentials {
    pub email: String,
    #[serde(serialize_with = "mask_secret")]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    fn is_partial(&self) -> bool {
        self.email.trim().is_empty() != self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &MASK)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSettings {
    /// Live suites only run when `BLOG_E2E=1`.
    pub enabled: bool,
    pub markers: Option<String>,
    pub project_root: PathBuf,
    pub log_level: String,
    pub json_logs: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub environment: Environment,
    pub urls: Urls,
    pub timeouts: Timeouts,
    pub browser: BrowserSettings,
    pub existing_user: Credentials,
    pub admin: Credentials,
    pub run: RunSettings,
    #[serde(skip)]
    pub default_headers: BTreeMap<String, String>,
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn parse_bool(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(E2eError::InvalidConfigValueError {
            field: field.to_string(),
            value: other.to_string(),
            reason: "Expected a boolean (true/false/1/0)".to_string(),
        }),
    }
}

fn parse_number(field: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| E2eError::InvalidConfigValueError {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Expected a non-negative integer".to_string(),
        })
}

impl Settings {
    /// Built-in defaults, optionally overlaid with a TOML file, then with
    /// whatever `lookup` returns for each environment variable.
    pub fn from_sources<F>(file: Option<&SettingsFile>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = match var("TEST_ENV") {
            Some(raw) => raw.parse()?,
            None => Environment::Dev,
        };

        let file_urls = file.and_then(|f| f.urls.as_ref());
        let file_timeouts = file.and_then(|f| f.timeouts.as_ref());
        let file_browser = file.and_then(|f| f.browser.as_ref());
        let file_creds = file.and_then(|f| f.credentials.as_ref());

        let urls = Urls {
            base_ui: var("BASE_URL")
                .or_else(|| file_urls.and_then(|u| u.base_ui.clone()))
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            base_api: var("API_URL")
                .or_else(|| file_urls.and_then(|u| u.base_api.clone()))
                .unwrap_or_else(|| "http://localhost:8080/api".to_string()),
            login_path: file_urls
                .and_then(|u| u.login_path.clone())
                .unwrap_or_else(|| "/login".to_string()),
        };

        let timeout = |key: &str, from_file: Option<u64>, default: u64| -> Result<u64> {
            match var(key) {
                Some(raw) => parse_number(key, &raw),
                None => Ok(from_file.unwrap_or(default)),
            }
        };

        let timeouts = Timeouts {
            default: timeout("DEFAULT_TIMEOUT", file_timeouts.and_then(|t| t.default), 30_000)?,
            short: timeout("SHORT_TIMEOUT", file_timeouts.and_then(|t| t.short), 500)?,
            typing: timeout("TYPING_DELAY", file_timeouts.and_then(|t| t.typing), 50)?,
            api_request: timeout("API_TIMEOUT", file_timeouts.and_then(|t| t.api_request), 30_000)?,
            element: timeout("ELEMENT_TIMEOUT", file_timeouts.and_then(|t| t.element), 10_000)?,
        };

        let kind = match var("BROWSER").or_else(|| file_browser.and_then(|b| b.kind.clone())) {
            Some(raw) => raw.parse()?,
            None => BrowserKind::Chromium,
        };

        let headless = match var("HEADLESS") {
            Some(raw) => parse_bool("HEADLESS", &raw)?,
            None => file_browser.and_then(|b| b.headless).unwrap_or(true),
        };

        let slow_mo = match var("SLOW_MO") {
            Some(raw) => parse_number("SLOW_MO", &raw)?,
            None => file_browser.and_then(|b| b.slow_mo).unwrap_or(0),
        };

        let record_video = match var("RECORD_VIDEO") {
            Some(raw) => parse_bool("RECORD_VIDEO", &raw)?,
            None => file_browser.and_then(|b| b.record_video).unwrap_or(false),
        };

        let viewport = match var("VIEWPORT") {
            Some(raw) => raw.parse()?,
            None => ViewportSize {
                width: file_browser.and_then(|b| b.viewport_width).unwrap_or(1920),
                height: file_browser.and_then(|b| b.viewport_height).unwrap_or(1080),
            },
        };

        let browser = BrowserSettings {
            kind,
            headless,
            slow_mo,
            record_video,
            viewport,
            locale: var("LOCALE")
                .or_else(|| file_browser.and_then(|b| b.locale.clone()))
                .unwrap_or_else(|| "vi-VN".to_string()),
        };

        let creds = |email_key: &str, password_key: &str, from_file: Option<&Credentials>| {
            Credentials {
                email: var(email_key)
                    .or_else(|| from_file.map(|c| c.email.clone()))
                    .unwrap_or_default(),
                password: var(password_key)
                    .or_else(|| from_file.map(|c| c.password.clone()))
                    .unwrap_or_default(),
            }
        };

        let existing_file = file_creds.and_then(|c| c.existing_user.as_ref()).map(|c| c.to_credentials());
        let admin_file = file_creds.and_then(|c| c.admin.as_ref()).map(|c| c.to_credentials());

        let existing_user = creds("EXISTING_USER_EMAIL", "EXISTING_USER_PASSWORD", existing_file.as_ref());
        let admin = creds("ADMIN_EMAIL", "ADMIN_PASSWORD", admin_file.as_ref());

        let run = RunSettings {
            enabled: match var("BLOG_E2E") {
                Some(raw) => parse_bool("BLOG_E2E", &raw)?,
                None => false,
            },
            markers: var("E2E_MARKERS"),
            project_root: var("E2E_PROJECT_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).to_lowercase(),
            json_logs: var("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
        };

        let mut default_headers = BTreeMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(headers) = file.and_then(|f| f.headers.as_ref()) {
            default_headers.extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        if let Some(api_key) = var("API_KEY") {
            default_headers.insert("X-API-Key".to_string(), api_key);
        }

        Ok(Settings {
            environment,
            urls,
            timeouts,
            browser,
            existing_user,
            admin,
            run,
            default_headers,
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_sources(None, lookup)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Environment variables layered over `config/<env>.toml` (or `E2E_CONFIG`).
    pub fn load() -> Result<Self> {
        let env_var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let environment: Environment = match env_var("TEST_ENV") {
            Some(raw) => raw.parse()?,
            None => Environment::Dev,
        };
        let root = env_var("E2E_PROJECT_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let explicit = env_var("E2E_CONFIG").map(PathBuf::from);
        let path = explicit
            .clone()
            .unwrap_or_else(|| root.join("config").join(format!("{}.toml", environment)));

        let file = if path.exists() {
            tracing::debug!("📁 Loading settings file: {}", path.display());
            Some(SettingsFile::from_file(&path)?)
        } else if explicit.is_some() {
            return Err(E2eError::ConfigError {
                message: format!("E2E_CONFIG points to a missing file: {}", path.display()),
            });
        } else {
            None
        };

        Self::from_sources(file.as_ref(), |key| std::env::var(key).ok())
    }

    /// Process-wide settings, loaded on first use.
    pub fn global() -> Result<&'static Settings> {
        if let Some(settings) = SETTINGS.get() {
            return Ok(settings);
        }
        let loaded = Self::load()?;
        loaded.validate()?;
        Ok(SETTINGS.get_or_init(|| loaded))
    }

    pub fn full_login_url(&self) -> String {
        self.urls.full_login_url()
    }

    /// UI URL for a path, e.g. `settings.url("/post/12")`.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.urls.base_ui, path)
    }

    pub fn project_root(&self) -> &Path {
        &self.run.project_root
    }

    pub fn artifact_dir(&self, name: &str) -> PathBuf {
        self.run.project_root.join(name)
    }

    pub fn current_timestamp() -> String {
        chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("urls.base_ui", &self.urls.base_ui)?;
        validate_url("urls.base_api", &self.urls.base_api)?;
        validate_path("run.project_root", &self.run.project_root.to_string_lossy())?;

        validate_positive_number("timeouts.default", self.timeouts.default, 1)?;
        validate_positive_number("timeouts.short", self.timeouts.short, 1)?;
        validate_positive_number("timeouts.api_request", self.timeouts.api_request, 1)?;
        validate_positive_number("timeouts.element", self.timeouts.element, 1)?;

        validate_range("browser.viewport.width", self.browser.viewport.width, 320, 7680)?;
        validate_range("browser.viewport.height", self.browser.viewport.height, 320, 7680)?;
        validate_range("browser.slow_mo", self.browser.slow_mo, 0, 10_000)?;

        for (field, creds) in [("existing_user", &self.existing_user), ("admin", &self.admin)] {
            if creds.is_partial() {
                return Err(E2eError::ConfigValidationError {
                    field: field.to_string(),
                    message: "Both email and password must be set, or neither".to_string(),
                });
            }
        }

        Ok(())
    }
}
