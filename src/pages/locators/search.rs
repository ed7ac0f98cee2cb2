pub const SEARCH_INPUT: &str = "input[placeholder='Tìm kiếm...']";
pub const SEARCH_BUTTON: &str = "button[aria-label='Search']";

pub const SUGGESTIONS_DROPDOWN: &str = "div.absolute.top-full";
pub const SUGGEST_POST_BTN: &str = "div.absolute.top-full button:has-text('Bài viết có chứa')";
pub const SUGGEST_USER_BTN: &str = "div.absolute.top-full button:has-text('Người dùng tên')";
pub const SUGGEST_COMMUNITY_BTN: &str = "div.absolute.top-full button:has-text('Cộng đồng')";
pub const SUGGEST_HASHTAG_BTN: &str = "div.absolute.top-full button:has-text('Hashtag')";

pub const NO_RESULTS_MESSAGE: &str = "p:has-text('Không tìm thấy kết quả nào.')";
