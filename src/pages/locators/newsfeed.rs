pub const PAGE_TITLE: &str = r"h1.text-3xl.text-\[\#F295B6\]";

pub const POSTS_CONTAINER: &str = ".newsfeed-masonry-item";
pub const POST_CARD: &str = "article.newsfeed-card";
/// The feed has no button of its own; the sidebar one is used.
pub const CREATE_POST_BUTTON: &str = super::navigation::sidebar::CREATE_POST_BUTTON;

pub const POST_THUMBNAIL_LINK: &str = "a.newsfeed-card__thumbnail";
pub const POST_THUMBNAIL_IMAGE: &str = "img.newsfeed-card__image";
pub const POST_CONTENT_LINK: &str = "a.newsfeed-card__content";
pub const POST_TITLE: &str = "h2.newsfeed-card__title";
pub const POST_AUTHOR_SECTION: &str = ".newsfeed-card__author";
pub const POST_AUTHOR_AVATAR: &str = "img.newsfeed-card__avatar";
pub const POST_AUTHOR_USERNAME: &str = "span.newsfeed-card__username";
pub const POST_TIMESTAMP: &str = "time.newsfeed-card__time";

pub const INTERACT_SECTION: &str = ".newsfeed-card__interact";

pub const EMOJI_REACTION_BUTTON: &str = "button:has(img[alt='emoji'])";
pub const EMOJI_REACTION_COUNT: &str = "button:has(img[alt='emoji']) span.text-sm";
pub const ADD_EMOJI_BUTTON: &str = "button.group:has(svg[viewBox='0 0 16 16'])";

pub const UPVOTE_BUTTON: &str = "button.group:has(svg path[d='M12 4L4 14H9V20H15V14H20L12 4Z'])";
pub const DOWNVOTE_BUTTON: &str =
    "button.group:has(svg path[d='M12 20L20 10H15V4H9V10H4L12 20Z'])";
pub const VOTE_COUNT: &str = "div:has(> button.group) > span";

pub const COMMENT_BUTTON: &str = "button:has(svg.lucide-message-circle)";
pub const SAVE_BUTTON: &str = "button:has(svg.lucide-bookmark)";
pub const SHARE_BUTTON: &str = "button:has(svg.lucide-repeat-2), button:has(svg.lucide-repeat2)";
pub const MORE_OPTIONS_BUTTON: &str = "button[title='Thêm']:has(svg.lucide-ellipsis)";

pub mod emoji_picker {
    pub const DIALOG: &str = "div[style*='box-shadow'][style*='border-radius: 12px']";
    pub const SEARCH_INPUT: &str = "input[placeholder*='Tìm emoji']";

    pub const CATEGORY_BUTTON: &str = "button[title]";
    pub const CATEGORY_SMILEYS: &str = "button[title='Smileys & Emotion']";
    pub const CATEGORY_PEOPLE: &str = "button[title='People & Body']";
    pub const CATEGORY_ANIMALS: &str = "button[title='Animals & Nature']";
    pub const CATEGORY_FOOD: &str = "button[title='Food & Drink']";
    pub const CATEGORY_ACTIVITIES: &str = "button[title='Activities']";
    pub const CATEGORY_SYMBOLS: &str = "button[title='Symbols']";
    pub const CATEGORY_FLAGS: &str = "button[title='Flags']";

    pub const EMOJI_BUTTON: &str = "button:has(img[src*='twemoji'])";
    pub const EMOJI_IMAGE: &str = "img[src*='twemoji']";
    pub const FIRST_EMOJI: &str = "button:has(img[src*='twemoji']):first-child";
}
