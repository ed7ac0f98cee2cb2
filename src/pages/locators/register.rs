pub const FULLNAME_INPUT: &str = "input[autocomplete='name']";
pub const EMAIL_INPUT: &str = "input[type='email'][autocomplete='email']";
pub const PASSWORD_INPUT: &str = "input[autocomplete='new-password']:first-of-type";
pub const CONFIRM_PASSWORD_INPUT: &str = "input[autocomplete='new-password']:last-of-type";

pub const PASSWORD_BY_PLACEHOLDER: &str =
    "input[placeholder*='Tối thiểu 8 ký tự, có chữ hoa, thường và số']";
pub const CONFIRM_PASSWORD_BY_PLACEHOLDER: &str = "input[placeholder='Nhập lại mật khẩu']";

pub const REGISTER_BUTTON: &str = "button[type='submit']:has-text('Đăng ký')";
pub const LOGIN_LINK: &str = "a[href='/login']";

pub const FORM: &str = "form";
pub const TITLE: &str = "h2:has-text('ĐĂNG KÝ')";
