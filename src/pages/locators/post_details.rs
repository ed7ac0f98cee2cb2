/// Fixed vertical bar left of the post.
pub mod sidebar {
    pub const SIDEBAR: &str = "div[style*='position: fixed'][style*='left:']";
    pub const VOTE_SECTION: &str = "div:has(> button.group svg path[d*='M12 4L4 14'])";
    pub const UPVOTE_BUTTON: &str =
        "button.group:has(svg path[d='M12 4L4 14H9V20H15V14H20L12 4Z'])";
    pub const DOWNVOTE_BUTTON: &str =
        "button.group:has(svg path[d='M12 20L20 10H15V4H9V10H4L12 20Z'])";
    pub const VOTE_COUNT: &str = "span[style*='font-size: 16px'][style*='font-weight: 600']";
    pub const COMMENT_BUTTON: &str = "button:has(svg.lucide-message-circle)";
    pub const SAVE_BUTTON: &str = "button:has(svg.lucide-bookmark)";
    pub const REPOST_BUTTON: &str =
        "button:has(svg.lucide-repeat-2), button:has(svg.lucide-repeat2)";
    pub const SHARE_BUTTON: &str = "button:has(svg.lucide-share-2), button:has(svg.lucide-share)";
    pub const MORE_OPTIONS_BUTTON: &str = "button[title='Thêm']:has(svg.lucide-ellipsis)";

    pub const EDIT_MENU_ITEM: &str = "li[role='menuitem']:has-text('Chỉnh sửa')";
    pub const DELETE_MENU_ITEM: &str = "li[role='menuitem']:has-text('Xóa')";
}

pub mod content {
    pub const CONTENT_CONTAINER: &str = "div[style*='width: 800px'][style*='padding: 12px']";

    pub const POST_TITLE: &str = "h1.w-full";
    pub const POST_DESCRIPTION: &str = "p.w-full[style*='font-style: italic']";

    pub const AUTHOR_SECTION: &str = "div.flex.items-center.gap-3.text-md.text-gray-500";
    pub const AUTHOR_AVATAR: &str = "img.rounded-full.object-cover";
    pub const AUTHOR_LINK: &str = r"a.text-\[\#F295B6\][href^='/profile/']";
    pub const POST_TIMESTAMP: &str = "div.text-md.text-gray-400";

    pub const REACTIONS_SECTION: &str = "div.mt-10:has(button img[alt='emoji'])";
    pub const EMOJI_REACTION_BUTTON: &str = "button:has(img[alt='emoji'])";
    pub const ADD_EMOJI_BUTTON: &str = "button.group:has(svg[viewBox='0 0 16 16'])";

    pub const BLOCKS_CONTAINER: &str = "div[style*='width: 800px'] .react-grid-layout";
    pub const BLOCK_ITEM: &str = ".react-grid-item";

    pub const TEXT_BLOCK: &str = "div.text-block";
    pub const TEXT_BLOCK_BY_ID: &str = "div[id^='text-block-']";
    pub const TEXT_BLOCK_CONTENT: &str = "div.text-block p";

    pub const IMAGE_BLOCK: &str = "figure:has(img[alt='Blog image'])";
    pub const IMAGE_BLOCK_IMAGE: &str = "img[alt='Blog image']";

    /// Only rendered while the block is hovered.
    pub const BLOCK_COMMENT_BUTTON: &str = "button[aria-label='Open block comments']";
    pub const BLOCK_COMMENT_ICON: &str = "button[aria-label='Open block comments'] svg";
}

pub mod comments {
    pub const COMMENTS_SECTION: &str = ".comments-section[data-comments-section='true']";
    pub const COMMENTS_SECTION_ALT: &str = "div.comments-section.space-y-6";

    pub const COMMENTS_HEADER: &str = ".comments-header";
    pub const COMMENTS_TITLE: &str = "h3:has-text('Bình luận')";
    pub const COMMENTS_COUNT: &str = "h3.text-xl.font-semibold.text-gray-900";

    pub const SORT_SECTION: &str = "div:has(span:text('Sắp xếp theo:'))";
    pub const SORT_LABEL: &str = "span:text('Sắp xếp theo:')";
    pub const SORT_DROPDOWN: &str = "div#post-comments-sort button";
    pub const SORT_DROPDOWN_TEXT: &str = "div#post-comments-sort button span";

    // Scoped to <main> so drawer forms never match.
    pub const COMMENT_FORM: &str = "main div.comment-form form";
    pub const COMMENT_TEXTAREA: &str = "main textarea[placeholder='Bình luận về bài viết này...']";
    pub const COMMENT_SUBMIT_BUTTON: &str =
        "main div.comment-form button[type='submit']:has-text('Gửi')";

    pub const COMMENTS_LIST: &str = "div.comments-list.space-y-6";
    pub const COMMENT_ITEM: &str = "div.border-b.border-gray-200.py-4";

    pub const COMMENT_AVATAR: &str = ".MuiAvatar-root";
    pub const COMMENT_AUTHOR_NAME: &str = "span.font-medium.text-gray-800";
    pub const COMMENT_TIME: &str = "span.text-xs.text-gray-400";
    pub const COMMENT_OPTIONS_BUTTON: &str = "button[title='Tùy chọn']:has(svg.lucide-ellipsis)";
    pub const COMMENT_CONTENT: &str = "p.mt-2.text-sm.text-gray-800";
    pub const COMMENT_ADD_EMOJI: &str = "button.group:has(svg[viewBox='0 0 16 16'])";

    pub const REPLY_BUTTON: &str = "button:has-text('Trả lời')";
    pub const VIEW_REPLIES_BUTTON: &str = "button:has(svg.lucide-message-circle) span";
    pub const DELETE_BUTTON: &str = "button:has-text('Xóa')";

    pub const REPLY_TEXTAREA: &str =
        "textarea[placeholder*='Trả lời'], textarea[placeholder*='reply'], textarea.reply-input";
    pub const REPLY_SUBMIT_BUTTON: &str = "button[type='submit']:has-text('Gửi')";

    pub const REPLY_CONTAINER: &str = "div.mt-4.space-y-3";
    pub const REPLY_ITEM: &str = r"div.p-4.rounded-md.border-l-3.bg-\[\#FAFAFA\]";
    pub const REPLY_AUTHOR: &str = "span.font-medium.text-gray-700.text-sm";
    pub const REPLY_CONTENT: &str = "p.mt-1.text-md.text-gray-800";
    pub const REPLY_ARROW_ICON: &str = "svg path[d*='M502.6 278.6']";

    pub const EMPTY_STATE: &str = "div.text-center.py-8.text-gray-500";
    pub const EMPTY_STATE_TEXT: &str = "p:has-text('Chưa có bình luận nào')";
}

/// Drawer opened from a block's comment button. Everything is scoped to the
/// drawer that is currently shown.
pub mod block_comments {
    pub const SIDEBAR: &str = ".MuiDrawer-root:not(.MuiModal-hidden) > .MuiPaper-root";
    pub const SIDEBAR_INNER: &str =
        ".MuiDrawer-root:not(.MuiModal-hidden) > .MuiPaper-root > .MuiBox-root";
    pub const COMMENTS_TITLE: &str = ".MuiDrawer-root:not(.MuiModal-hidden) h3:has-text('Bình luận')";

    pub const COMMENT_FORM: &str = ".MuiDrawer-root:not(.MuiModal-hidden) div.comment-form form";
    pub const COMMENT_TEXTAREA: &str =
        ".MuiDrawer-root:not(.MuiModal-hidden) textarea[placeholder='Bình luận về block này...']";
    pub const COMMENT_SUBMIT_BUTTON: &str =
        ".MuiDrawer-root:not(.MuiModal-hidden) button[type='submit']:has-text('Gửi')";

    pub const COMMENTS_LIST: &str =
        ".MuiDrawer-root:not(.MuiModal-hidden) div.comments-list.space-y-6";
    pub const EMPTY_STATE: &str =
        ".MuiDrawer-root:not(.MuiModal-hidden) div.text-center.py-8.text-gray-500";
    pub const EMPTY_STATE_TEXT: &str =
        ".MuiDrawer-root:not(.MuiModal-hidden) p:has-text('Chưa có bình luận nào')";
}
