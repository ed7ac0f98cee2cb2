/// The email field also accepts a username.
pub const EMAIL_INPUT: &str = "input[autocomplete='username']";
pub const PASSWORD_INPUT: &str = "input[type='password'][autocomplete='current-password']";

pub const LOGIN_BUTTON: &str = "button[type='submit']:has-text('Đăng nhập')";
pub const REGISTER_LINK: &str = "a[href='/register']";
pub const FORGOT_PASSWORD_LINK: &str = "a[href='/forgot-password']";
pub const VERIFY_EMAIL_LINK: &str = "a[href='/verify-email']";

pub const FORM: &str = "form";
pub const TITLE: &str = "h2:has-text('ĐĂNG NHẬP')";

pub const ERROR_MESSAGE: &str = "div[class*='bg-[#FEF2F2]'] p";

/// Only rendered for a logged-in session.
pub const BELL_ICON: &str = "span.MuiBadge-root button";
