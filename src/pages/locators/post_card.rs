pub const CARD_CONTAINER: &str = "div.newsfeed-masonry-item";
pub const CARD: &str = "article.newsfeed-card";

pub const THUMBNAIL_LINK: &str = "a.newsfeed-card__thumbnail";
pub const THUMBNAIL_IMAGE: &str = "img.newsfeed-card__image";
pub const CONTENT_LINK: &str = "a.newsfeed-card__content";
pub const TITLE: &str = "h2.newsfeed-card__title";

pub const AUTHOR_SECTION: &str = "div.newsfeed-card__author";
pub const AUTHOR_AVATAR: &str = "img.newsfeed-card__avatar";
pub const AUTHOR_INFO: &str = "div.newsfeed-card__author-info";
pub const AUTHOR_NAME: &str = "span.newsfeed-card__username";
pub const TIMESTAMP: &str = "time.newsfeed-card__time";

pub const INTERACT_SECTION: &str = "div.newsfeed-card__interact";
pub const EMOJI_REACTION_BUTTON: &str = "button:has(img[alt='emoji'])";
pub const EMOJI_REACTION_IMAGE: &str = "button img[alt='emoji']";
pub const EMOJI_REACTION_COUNT: &str = "button:has(img[alt='emoji']) span.text-sm";
pub const ADD_EMOJI_BUTTON: &str = "button.group:has(svg[viewBox='0 0 16 16'])";

pub const VOTE_CONTAINER: &str = "div:has(> button.group svg[viewBox='0 0 24 24'])";
pub const UPVOTE_BUTTON: &str = "button.group:has(svg path[d='M12 4L4 14H9V20H15V14H20L12 4Z'])";
pub const DOWNVOTE_BUTTON: &str =
    "button.group:has(svg path[d='M12 20L20 10H15V4H9V10H4L12 20Z'])";
pub const VOTE_COUNT: &str = "span[style*='font-size: 16px'][style*='font-weight: 600']";

pub const COMMENT_BUTTON: &str = "button:has(svg.lucide-message-circle)";
pub const SAVE_BUTTON: &str = "button:has(svg.lucide-bookmark)";
pub const SHARE_BUTTON: &str = "button:has(svg.lucide-repeat-2), button:has(svg.lucide-repeat2)";
pub const MORE_OPTIONS_BUTTON: &str = "button[title='Thêm']:has(svg.lucide-ellipsis)";

pub const POST_LINK: &str = "a[href^='/post/']";

/// Bottom bar of a card: votes on the left, actions on the right.
pub mod interact {
    pub const INTERACT_BAR: &str = r"div.border-t.border-t-\[\#FFC9DC\]";
    pub const VOTE_SECTION: &str = "div:has(> button.group):first-child";
    pub const UPVOTE_BUTTON: &str = "button.group:has(svg path[d*='M12 4L4 14'])";
    pub const DOWNVOTE_BUTTON: &str = "button.group:has(svg path[d*='M12 20L20 10'])";
    pub const VOTE_COUNT: &str = "span[style*='font-family: Quicksand']";

    pub const ACTIONS_SECTION: &str = "div.flex.items-center.gap-4";
    pub const SAVE_BUTTON: &str = "button:has(svg.lucide-bookmark)";
    pub const SHARE_BUTTON: &str = "button:has(svg.lucide-repeat2)";
    pub const MORE_BUTTON: &str = "button[title='Thêm']";
}
