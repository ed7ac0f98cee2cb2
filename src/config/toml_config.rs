use crate::config::settings::Credentials;
use crate::utils::error::{E2eError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Optional per-environment overrides read from `config/<env>.toml`.
/// Every field is optional; environment variables still win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    pub urls: Option<UrlsFile>,
    pub timeouts: Option<TimeoutsFile>,
    pub browser: Option<BrowserFile>,
    pub credentials: Option<CredentialsSection>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlsFile {
    pub base_ui: Option<String>,
    pub base_api: Option<String>,
    pub login_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeoutsFile {
    pub default: Option<u64>,
    pub short: Option<u64>,
    pub typing: Option<u64>,
    pub api_request: Option<u64>,
    pub element: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowserFile {
    pub kind: Option<String>,
    pub headless: Option<bool>,
    pub slow_mo: Option<u64>,
    pub record_video: Option<bool>,
    pub viewport_width: Option<u32>,
    pub viewport_height: Option<u32>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsSection {
    pub existing_user: Option<CredentialsFile>,
    pub admin: Option<CredentialsFile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsFile {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CredentialsFile {
    pub fn to_credentials(&self) -> Credentials {
        Credentials::new(
            self.email.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        )
    }
}

impl SettingsFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(E2eError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| E2eError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| E2eError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{BrowserKind, Settings};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_settings_file() {
        let toml_content = r#"
[urls]
base_ui = "https://staging.blog.example"
base_api = "https://staging.blog.example/api"

[timeouts]
default = 45000
typing = 20

[browser]
kind = "webkit"
headless = false
viewport_width = 1366
viewport_height = 768

[credentials.existing_user]
email = "qa@example.com"
password = "Secret123"

[headers]
X-Client = "e2e"
"#;

        let file = SettingsFile::from_toml_str(toml_content).unwrap();
        let settings = Settings::from_sources(Some(&file), |_| None).unwrap();

        assert_eq!(settings.urls.base_ui, "https://staging.blog.example");
        assert_eq!(settings.timeouts.default, 45_000);
        assert_eq!(settings.timeouts.typing, 20);
        assert_eq!(settings.timeouts.short, 500);
        assert_eq!(settings.browser.kind, BrowserKind::Webkit);
        assert!(!settings.browser.headless);
        assert_eq!(settings.browser.viewport.width, 1366);
        assert!(settings.existing_user.is_valid());
        assert_eq!(
            settings.default_headers.get("X-Client").map(String::as_str),
            Some("e2e")
        );
    }

    #[test]
    fn test_env_overrides_file() {
        let file = SettingsFile::from_toml_str(
            r#"
[urls]
base_ui = "https://from-file.example"
"#,
        )
        .unwrap();

        let settings = Settings::from_sources(Some(&file), |key| {
            (key == "BASE_URL").then(|| "https://from-env.example".to_string())
        })
        .unwrap();
        assert_eq!(settings.urls.base_ui, "https://from-env.example");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BLOG_E2E_TEST_ADMIN_PASSWORD", "Adm1nPass");

        let file = SettingsFile::from_toml_str(
            r#"
[credentials.admin]
email = "admin@example.com"
password = "${BLOG_E2E_TEST_ADMIN_PASSWORD}"
"#,
        )
        .unwrap();

        let admin = file
            .credentials
            .and_then(|c| c.admin)
            .map(|c| c.to_credentials())
            .unwrap();
        assert_eq!(admin.password, "Adm1nPass");

        std::env::remove_var("BLOG_E2E_TEST_ADMIN_PASSWORD");
    }

    #[test]
    fn test_unknown_variable_left_verbatim() {
        let file = SettingsFile::from_toml_str(
            r#"
[urls]
base_ui = "${BLOG_E2E_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(
            file.urls.and_then(|u| u.base_ui).as_deref(),
            Some("${BLOG_E2E_SURELY_UNSET_VAR}")
        );
    }

    #[test]
    fn test_settings_file_from_disk() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[browser]\nslow_mo = 100\nrecord_video = true\n")
            .unwrap();

        let file = SettingsFile::from_file(temp_file.path()).unwrap();
        let browser = file.browser.unwrap();
        assert_eq!(browser.slow_mo, Some(100));
        assert_eq!(browser.record_video, Some(true));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let err = SettingsFile::from_toml_str("[urls\nbase_ui = 1").unwrap_err();
        assert!(matches!(err, E2eError::ConfigValidationError { .. }));
    }
}
