pub mod buttons {
    pub const SIDEBAR_CREATE_BUTTON: &str = "div.mt-6.mb-4 button:has(span:text('Tạo bài viết'))";
    pub const SIDEBAR_CREATE_BUTTON_ALT: &str =
        "button.bg-gradient-to-r:has(span:text('Tạo bài viết'))";
    pub const COMMUNITY_CREATE_BUTTON: &str = "button.btn-outline:has-text('Tạo bài viết')";
}

pub mod page {
    pub const PAGE_CONTAINER: &str = "div.w-full.relative.p-9";

    pub const TITLE_INPUT: &str = "textarea[placeholder='Nhập tiêu đề bài viết...']";
    pub const TITLE_CONTAINER: &str =
        ".MuiInputBase-root:has(textarea[placeholder='Nhập tiêu đề bài viết...'])";
    pub const DESCRIPTION_INPUT: &str = "textarea[placeholder='Nhập mô tả ngắn về bài viết...']";
    pub const DESCRIPTION_CONTAINER: &str =
        ".MuiInputBase-root:has(textarea[placeholder='Nhập mô tả ngắn về bài viết...'])";

    pub const BLOCKS_PANEL: &str = "div.fixed.right-4:has(p:text('Blocks'))";
    pub const BLOCKS_LABEL: &str = "p.text-xs:text('Blocks')";
    pub const TEXT_BLOCK_DRAG: &str = "div[draggable='true'][title*='Text']";
    pub const IMAGE_BLOCK_DRAG: &str = "div[draggable='true'][title*='Image']";

    pub const BLOCK_GRID: &str = ".react-grid-layout";
    pub const BLOCK_ITEM: &str = ".react-grid-item";

    pub const TEXT_BLOCK: &str = "div.text-block";
    pub const TEXT_EDITOR: &str = ".tiptap.ProseMirror";
    pub const TEXT_EDITOR_PLACEHOLDER: &str = "p[data-placeholder='Viết câu chuyện của bạn...']";

    pub const IMAGE_BLOCK: &str = "div:has(input[accept='image/*'])";
    pub const IMAGE_UPLOAD_INPUT: &str = "input[accept='image/*'][type='file']";
    pub const IMAGE_PLACEHOLDER_ICON: &str = "div.w-14.h-14.rounded-full:has(svg)";
    pub const IMAGE_PLACEHOLDER_TEXT: &str = "p:text('Kéo thả hoặc nhấn để chọn')";
    pub const IMAGE_SIZE_HINT: &str = "p:text('PNG, JPG, GIF. Tối đa 5MB')";

    pub const NEXT_STEP_BUTTON: &str = "button:has-text('Bước tiếp theo')";
    pub const NEXT_STEP_BUTTON_ALT: &str = "button.btn-default:has-text('Bước tiếp theo')";
}

/// Dialog shown after "next step".
pub mod options_dialog {
    pub const DIALOG: &str = ".MuiDialog-paper";
    pub const DIALOG_TITLE: &str = ".MuiDialogTitle-root, h2:text('Tùy chỉnh bài viết')";
    pub const CLOSE_BUTTON: &str = ".MuiDialogTitle-root button:has(svg[data-testid='CloseIcon'])";

    pub const THUMBNAIL_SECTION: &str = "div.mb-4:has(p:text('Ảnh bìa'))";
    pub const THUMBNAIL_LABEL: &str = "p:text('Ảnh bìa (Thumbnail)')";
    pub const THUMBNAIL_UPLOAD_INPUT: &str = "input#thumbnail-upload[type='file']";
    pub const THUMBNAIL_UPLOAD_AREA: &str = "label[for='thumbnail-upload']";
    pub const THUMBNAIL_UPLOAD_TEXT: &str = "span:text('Tải ảnh bìa lên')";

    pub const VISIBILITY_SECTION: &str = "div.p-3.bg-gray-50:has(.MuiSwitch-root)";
    pub const VISIBILITY_SWITCH: &str = ".MuiSwitch-switchBase input[type='checkbox']";
    pub const VISIBILITY_LABEL: &str = "p:text('Công khai')";
    pub const VISIBILITY_DESCRIPTION: &str = "p:text('Mọi người đều có thể xem bài viết này')";

    pub const HASHTAGS_SECTION: &str = "div.mt-4:has(p:text('Hashtags'))";
    pub const HASHTAGS_LABEL: &str = "p:text('Hashtags')";
    pub const HASHTAGS_INPUT: &str = "input[placeholder='Nhập hashtag và nhấn Enter']";
    pub const HASHTAGS_HINT: &str = "p:text('Thêm hashtag để bài viết dễ tìm kiếm hơn')";

    pub const DIALOG_ACTIONS: &str = ".MuiDialogActions-root";
    pub const CANCEL_BUTTON: &str = "button.btn-outline:has-text('Hủy')";
    pub const PUBLISH_BUTTON: &str = "button.btn-default:has-text('Đăng bài')";
}
