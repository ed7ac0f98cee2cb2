pub const SIDEBAR_COMMUNITIES_LINK: &str = "a[href='/me/my-communities']";

pub const HEADER_TITLE: &str = "h1.saved-posts-header__title";
pub const CREATE_COMMUNITY_BTN: &str = "button.community-save-btn:has-text('Tạo cộng đồng mới')";

pub const COMMUNITY_LIST_CONTAINER: &str = "div.space-y-6";
pub const COMMUNITY_CARD: &str = "button.bg-white.text-gray-900";
pub const CARD_NAME: &str = "div.text-2xl.font-bold";
pub const CARD_DESC: &str = "div.text-sm.text-gray-600.line-clamp-2";
pub const CARD_ROLE_BADGE: &str = "span.rounded-full";

pub const DETAIL_TITLE: &str = "h1.community-title";
pub const DETAIL_DESC: &str = "p.community-sub";
pub const MEMBER_COUNT_BADGE: &str = "div[title*='thành viên']";

pub const MANAGE_BTN: &str = "button.btn-manage";
pub const LEAVE_BTN: &str = "button.btn:has-text('Rời cộng đồng')";
pub const JOIN_BTN: &str = "button.btn:has-text('Tham gia')";

pub const TAB_POSTS: &str = "nav.community-tabs-nav a:has-text('Bài viết')";
pub const TAB_MEMBERS: &str = "nav.community-tabs-nav a:has-text('Thành viên')";

pub const CREATE_POST_BTN: &str = "button.btn-outline:has-text('Tạo bài viết')";
pub const EMPTY_POSTS_MSG: &str = "div.community-card:has-text('Chưa có bài viết nào')";
