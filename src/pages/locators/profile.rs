pub const HEADER_AVATAR_BTN: &str = "button:has(.MuiAvatar-root)";
pub const VIEW_PROFILE_MENU_ITEM: &str = "li[role='menuitem']:has-text('Xem trang cá nhân')";

pub const DISPLAY_NAME: &str = "h1.text-3xl.font-bold";
pub const EMAIL: &str = "div.profile-card-header div.text-gray-500:has-text('@')";
pub const PROFILE_AVATAR: &str = "div.profile-card-header .MuiAvatar-root";
pub const COVER_IMAGE_CONTAINER: &str = r"div.profile-card-header div.h-\[200px\]";

pub const STAT_FOLLOWERS: &str = "div.flex.gap-6 div:has(div.profile-stat-label:has-text('Người theo dõi')) .profile-stat-value";
pub const STAT_FOLLOWING: &str = "div.flex.gap-6 div:has(div.profile-stat-label:has-text('Đang theo dõi')) .profile-stat-value";

pub const TAB_POSTS: &str = "button.profile-tab-nav-item:has-text('Bài viết')";
pub const TAB_COMMUNITIES: &str = "button.profile-tab-nav-item:has-text('Cộng đồng')";
/// Class name, not a selector.
pub const TAB_ACTIVE_CLASS: &str = "profile-tab-nav-item-active";

pub const TAB_CONTENT: &str = "div.profile-tab-content";
pub const POST_CARD: &str = "article.newsfeed-card";
pub const FIRST_POST_TITLE: &str =
    "div.profile-tab-content article.newsfeed-card h2.newsfeed-card__title >> nth=0";
