//! Login, logout and registration against a live deployment.
//! Runs only with `BLOG_E2E=1`.

use anyhow::ensure;

use blog_e2e::utils::data_builder::create_quick_user;
use blog_e2e::{api_case, skip, Marker, TestCase};

#[cfg(feature = "ui")]
use blog_e2e::pages::{LoginPage, PageObject, RegisterPage};
#[cfg(feature = "ui")]
use blog_e2e::ui_case;
#[cfg(feature = "ui")]
use blog_e2e::core::fixtures;

const WRONG_PASSWORD: &str = "WrongPassword123!";

#[cfg(feature = "ui")]
#[tokio::test]
async fn test_login_with_valid_credentials() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "AUTH-001",
        "login_with_valid_credentials",
        &[Marker::Smoke, Marker::Ui, Marker::Auth],
    );
    ui_case(CASE, |ctx| async move {
        let creds = &ctx.settings.existing_user;
        if !creds.is_valid() {
            return Err(skip("Existing user credentials not configured in .env"));
        }

        let login = LoginPage::new(&ctx.page);
        login.open().await?;
        login.login(&creds.email, &creds.password).await?;

        ensure!(
            login.wait_for_redirect_after_login(None).await,
            "User should be logged in and able to access protected page"
        );
        Ok(())
    })
    .await
}

#[cfg(feature = "ui")]
#[tokio::test]
async fn test_login_with_invalid_password() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "AUTH-002",
        "login_with_invalid_password",
        &[Marker::Smoke, Marker::Ui, Marker::Auth],
    );
    ui_case(CASE, |ctx| async move {
        let creds = &ctx.settings.existing_user;
        if !creds.is_valid() {
            return Err(skip("Existing user credentials not configured in .env"));
        }

        let login = LoginPage::new(&ctx.page);
        login.open().await?;
        login.login(&creds.email, WRONG_PASSWORD).await?;

        ensure!(login.is_error_visible(Some(5000)).await, "Error message should be visible");
        let error_text = login.get_error_message().await?;
        ensure!(
            !error_text.trim().is_empty(),
            "Error message should not be empty, got: '{}'",
            error_text
        );
        Ok(())
    })
    .await
}

#[cfg(feature = "ui")]
#[tokio::test]
async fn test_login_with_nonexistent_user() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "AUTH-003",
        "login_with_nonexistent_user",
        &[Marker::Smoke, Marker::Ui, Marker::Auth],
    );
    ui_case(CASE, |ctx| async move {
        let login = LoginPage::new(&ctx.page);
        login.open().await?;
        login
            .login("nonexistent_user_12345@example.com", "SomePassword123!")
            .await?;

        ensure!(
            login.is_error_visible(Some(5000)).await,
            "Error should be shown for nonexistent user"
        );
        ensure!(
            !login.get_error_message().await?.trim().is_empty(),
            "Error message should not be empty"
        );
        Ok(())
    })
    .await
}

/// The login field takes `emailOrUsername`, so a bare username must reach the
/// backend and come back as an unknown-account error.
#[cfg(feature = "ui")]
#[tokio::test]
async fn test_login_with_username_instead_of_email() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "AUTH-004",
        "login_with_username_instead_of_email",
        &[Marker::Smoke, Marker::Ui, Marker::Auth],
    );
    ui_case(CASE, |ctx| async move {
        let login = LoginPage::new(&ctx.page);
        login.open().await?;
        login.login("some_random_username", "SomePassword123!").await?;

        ensure!(
            login.is_error_visible(None).await,
            "Should show error for non-existent username"
        );
        Ok(())
    })
    .await
}

#[cfg(feature = "ui")]
#[tokio::test]
async fn test_login_and_register_pages_link_to_each_other() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "AUTH-005",
        "login_and_register_pages_link_to_each_other",
        &[Marker::Ui, Marker::Auth],
    );
    ui_case(CASE, |ctx| async move {
        let login = LoginPage::new(&ctx.page);
        login.open().await?;
        login.click_register_link().await?;

        let register = RegisterPage::new(&ctx.page);
        register.wait_until_loaded().await?;
        ensure!(ctx.page.url().contains("/register"), "Should be on the register page");

        register.click_login_link().await?;
        login.wait_until_loaded().await?;
        ensure!(ctx.page.url().contains("/login"), "Should be back on the login page");
        Ok(())
    })
    .await
}

/// New accounts stay unverified, so only the form round trip is checked.
#[cfg(feature = "ui")]
#[tokio::test]
async fn test_register_new_account_via_ui() -> anyhow::Result<()> {
    use blog_e2e::pages::locators::register;

    const CASE: TestCase = TestCase::new("AUTH-006", "register_new_account_via_ui", &[Marker::Ui, Marker::Auth]);
    ui_case(CASE, |ctx| async move {
        let user = create_quick_user();
        let register = RegisterPage::new(&ctx.page);
        register.open().await?;
        register.register(&user).await?;

        let submit = ctx.page.locator(register::REGISTER_BUTTON).await.first();
        if ctx.page.wait_for_hidden(&submit, Some(10000)).await.is_ok() {
            tracing::info!("✅ Registration accepted, now at {}", ctx.page.url());
        } else {
            tracing::info!("ℹ️ Still on register page, a verification notice may be shown");
        }
        Ok(())
    })
    .await
}

#[cfg(feature = "ui")]
#[tokio::test]
#[ignore = "logout needs stable selectors for the user menu"]
async fn test_logout_successfully() -> anyhow::Result<()> {
    use blog_e2e::pages::locators::navigation;

    const CASE: TestCase = TestCase::new("AUTH-010", "logout_successfully", &[Marker::Ui, Marker::Auth]);
    ui_case(CASE, |ctx| async move {
        let creds = &ctx.settings.existing_user;
        if !creds.is_valid() {
            return Err(skip("Existing user credentials not configured in .env"));
        }

        let login = LoginPage::new(&ctx.page);
        login.open().await?;
        login.login(&creds.email, &creds.password).await?;
        ensure!(login.wait_for_redirect_after_login(None).await, "Should be logged in first");

        let avatar = ctx.page.locator(navigation::header::USER_AVATAR).await.first();
        ctx.page.click(&avatar, "User avatar").await?;
        ctx.page.pause(500).await;

        let logout = ctx.page.locator(navigation::header::LOGOUT_BUTTON).await.first();
        ctx.page.click(&logout, "Logout button").await?;
        ctx.page.pause(1000).await;

        let current = ctx.page.url();
        ensure!(
            current.contains("/login") || current.ends_with('/'),
            "Should redirect after logout, current URL: {}",
            current
        );
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_register_via_api() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new("AUTH-API-001", "register_via_api", &[Marker::Api, Marker::Auth]);
    api_case(CASE, |ctx| async move {
        let user = create_quick_user();
        let response = ctx.api.auth().register(&user.email, &user.name, &user.password).await?;

        ensure!(response.success, "Registration should succeed: {}", response.data);
        ensure!(
            matches!(response.status_code, 200 | 201),
            "Should return 200/201, got {}",
            response.status_code
        );

        let email = response.field("data.user.email").and_then(|v| v.as_str());
        ensure!(
            email == Some(user.email.as_str()),
            "Email should match. Got: {:?}",
            response.field("data.user")
        );
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_login_via_api() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new("AUTH-API-002", "login_via_api", &[Marker::Api, Marker::Auth]);
    api_case(CASE, |ctx| async move {
        let creds = &ctx.settings.existing_user;
        if !creds.is_valid() {
            return Err(skip("Existing user credentials not configured in .env"));
        }

        let response = ctx.api.auth().login(&creds.email, &creds.password).await?;
        ensure!(response.success, "Login should succeed: {}", response.data);
        ensure!(!ctx.api.get_cookies().is_empty(), "Should have auth cookies after login");
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_get_current_user_when_authenticated() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "AUTH-API-003",
        "get_current_user_when_authenticated",
        &[Marker::Api, Marker::Auth],
    );
    api_case(CASE, |ctx| async move {
        let creds = &ctx.settings.existing_user;
        if !creds.is_valid() {
            return Err(skip("Existing user credentials not configured in .env"));
        }

        let login = ctx.api.auth().login(&creds.email, &creds.password).await?;
        ensure!(login.success, "Login failed: {}", login.data);

        let response = ctx.api.auth().get_current_user().await?;
        ensure!(response.success, "Should return current user info: {}", response.data);

        let email = response.field("data.email").and_then(|v| v.as_str());
        ensure!(email == Some(creds.email.as_str()), "Unexpected user: {:?}", email);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_duplicate_email_registration() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "AUTH-API-004",
        "duplicate_email_registration",
        &[Marker::Api, Marker::Auth],
    );
    api_case(CASE, |ctx| async move {
        let user = create_quick_user();

        let first = ctx.api.auth().register(&user.email, &user.name, &user.password).await?;
        ensure!(first.success, "First registration failed: {}", first.data);

        let second = ctx
            .api
            .auth()
            .register(&user.email, "Different User Name", &user.password)
            .await?;
        ensure!(!second.success, "Should fail with duplicate email");
        ensure!(
            matches!(second.status_code, 400 | 409),
            "Should return 400 or 409 conflict, got {}",
            second.status_code
        );
        Ok(())
    })
    .await
}

/// Login through the UI, then confirm the API session for the same account.
/// Registration is left out because new accounts need email verification.
#[cfg(feature = "ui")]
#[tokio::test]
async fn test_complete_auth_flow() -> anyhow::Result<()> {
    const CASE: TestCase = TestCase::new(
        "AUTH-E2E-001",
        "complete_auth_flow",
        &[Marker::Smoke, Marker::Regression],
    );
    ui_case(CASE, |ctx| async move {
        let creds = &ctx.settings.existing_user;
        if !creds.is_valid() {
            return Err(skip("Existing user credentials not configured in .env"));
        }

        let login = LoginPage::new(&ctx.page);
        login.open().await?;
        login.login(&creds.email, &creds.password).await?;
        ensure!(
            login.wait_for_redirect_after_login(None).await,
            "Should be logged in and access protected page"
        );

        let user = fixtures::api_as_user(&ctx.api, &ctx.settings).await?;
        tracing::info!("✅ Session confirmed for user ID {}", user.id);
        fixtures::logout(&ctx.api).await
    })
    .await
}
