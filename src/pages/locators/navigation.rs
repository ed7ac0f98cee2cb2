pub mod sidebar {
    pub const SIDEBAR: &str = r"div.sticky.w-\[240px\].h-screen.bg-\[\#FAF5F7\]";
    pub const SIDEBAR_CONTAINER: &str = "div.sticky.top-0";

    pub const LOGO: &str = "img[alt='Blookie Logo']";
    pub const LOGO_CONTAINER: &str = "div.text-3xl.font-bold";

    pub const CLOSE_SIDEBAR_BUTTON: &str = "button:has(svg path[d='M6 18L18 6M6 6l12 12'])";
    /// Hamburger shown while the sidebar is collapsed.
    pub const OPEN_SIDEBAR_BUTTON: &str =
        "button:has(svg path[fill-rule='evenodd'][d*='M3 5a1 1 0 011-1h12'])";

    pub const CREATE_POST_BUTTON: &str = "button:has(span:text('Tạo bài viết'))";
    pub const CREATE_POST_BUTTON_ALT: &str = "div.mt-6.mb-4 button.bg-gradient-to-r";

    pub const NAV_CONTAINER: &str = "nav.mt-4";
    pub const NAV_LIST: &str = "nav ul.space-y-1";
    pub const NAV_ITEM: &str = "nav ul li";

    pub const HOME_LINK: &str = "a[href='/']";
    pub const SAVED_LINK: &str = "a[href='/saved']";
    pub const COMMUNITIES_LINK: &str = "a[href='/me/my-communities']";

    pub const HOME_TEXT: &str = "a[href='/'] div:text('Trang chủ')";
    pub const SAVED_TEXT: &str = "a[href='/saved'] div:text('Đã lưu')";
    pub const COMMUNITIES_TEXT: &str = "a[href='/me/my-communities'] div:text('Nhóm')";
}

pub mod header {
    pub const TOGGLE_SIDEBAR_BUTTON: &str = "button:has(svg[viewBox='0 0 20 20'])";
    pub const SAVED_POSTS_LINK: &str = "a[href='/saved']";

    // Unverified against the live header.
    pub const USER_AVATAR: &str = "header img[alt*='avatar' i]";
    pub const LOGOUT_BUTTON: &str = "li[role='menuitem']:has-text('Đăng xuất')";
}
