//! Admin area: `/admin/dashboard`, `/admin/users/list`, `/admin/posts/list`
//! and `/admin/reports/list`.

pub mod dashboard {
    pub const PAGE_TITLE: &str = "h1.text-2xl.font-bold.text-gray-800";
    pub const HEADING: &str = "h1:has-text('Dashboard')";

    pub const TODAY_BUTTON: &str = "button:has-text('Hôm nay')";
    pub const WEEK_BUTTON: &str = "button:has-text('7 ngày qua')";
    pub const MONTH_BUTTON: &str = "button:has-text('30 ngày qua')";
}

pub mod users {
    pub const PAGE_TITLE: &str = "h1.text-2xl.font-bold";
    pub const HEADING: &str = "h1:has-text('Quản lý người dùng')";

    pub const SEARCH_INPUT: &str = "input[placeholder*='Tìm theo tên, email, ID']";

    pub const TABLE: &str = "table.w-full";
    pub const TABLE_BODY: &str = "tbody.MuiTableBody-root";
    pub const USER_ROW: &str = "tr.MuiTableRow-root";

    pub const CELL_ID: &str = "td:nth-child(1)";
    pub const CELL_USERNAME: &str = "td:nth-child(2)";
    pub const CELL_EMAIL: &str = "td:nth-child(3)";
    pub const CELL_ROLE: &str = "td:nth-child(4)";
    pub const CELL_STATUS: &str = "td:nth-child(5)";
    pub const CELL_ACTIONS: &str = "td:nth-child(6)";

    // Icon buttons inside a row: eye, pencil, lock, trash.
    pub const VIEW_USER_BUTTON: &str = "button:has(svg[viewBox='0 0 576 512'])";
    pub const EDIT_USER_BUTTON: &str = "button:has(svg path[d*='M402.6'])";
    pub const LOCK_USER_BUTTON: &str = "button:has(svg path[d*='M80 192V144'])";
    pub const DELETE_USER_BUTTON: &str = "button:has(svg path[d*='M135.2'])";

    pub const STATUS_ACTIVE: &str = "span.bg-green-100.text-green-600";
    pub const STATUS_BANNED: &str = "span.bg-red-100.text-red-600";
    pub const ROLE_USER: &str = "span.bg-blue-50.text-blue-600";
    pub const ROLE_ADMIN: &str = "span.bg-purple-50.text-purple-600";

    pub const PAGINATION_CONTAINER: &str = "nav[aria-label='pagination navigation']";
    pub const PAGINATION_PREV: &str = "button[aria-label='Go to previous page']";
    pub const PAGINATION_NEXT: &str = "button[aria-label='Go to next page']";
}

/// View, edit, lock and delete dialogs share the MUI dialog shell.
pub mod user_dialog {
    pub const DIALOG: &str = "div.MuiDialog-paper[role='dialog']";
    pub const DIALOG_TITLE: &str = "h2.MuiDialogTitle-root";
    pub const DIALOG_CONTENT: &str = "div.MuiDialogContent-root";
    pub const DIALOG_ACTIONS: &str = "div.MuiDialogActions-root";

    pub const VIEW_DIALOG_TITLE: &str = "h2:has-text('Thông tin chi tiết người dùng')";
    pub const VIEW_FIELD_LABEL: &str = "label.text-sm.font-semibold.text-gray-600";
    pub const VIEW_FIELD_VALUE: &str = r"div.px-4.py-3.bg-\[\#FAF5F7\] p";
    pub const VIEW_BACK_BUTTON: &str = "button:has-text('Quay về')";

    pub const EDIT_DIALOG_TITLE: &str = "h2:has-text('Chỉnh sửa thông tin người dùng')";
    pub const EDIT_USERNAME_INPUT: &str = "input[placeholder='Nhập username']";
    pub const EDIT_EMAIL_INPUT: &str = "input[type='email'][placeholder='Nhập email']";
    pub const EDIT_PHONE_INPUT: &str = "input[type='tel'][placeholder='Nhập số điện thoại']";
    pub const EDIT_ROLE_SELECT: &str = "select";
    pub const EDIT_CANCEL_BUTTON: &str = "button.MuiButton-text:has-text('Hủy')";
    pub const EDIT_SAVE_BUTTON: &str = "button.MuiButton-contained:has-text('Lưu thay đổi')";

    pub const LOCK_DIALOG_TITLE: &str = "h2:has-text('Khóa tài khoản')";
    pub const LOCK_WARNING_TEXT: &str = "p.text-sm.text-gray-600";
    pub const LOCK_CANCEL_BUTTON: &str = "button.MuiButton-text:has-text('Hủy')";
    pub const LOCK_CONFIRM_BUTTON: &str = "button.MuiButton-contained:has-text('Xác nhận khóa')";

    pub const DELETE_DIALOG_TITLE: &str = "h2:has-text('Xác nhận xóa')";
    pub const DELETE_WARNING_TEXT: &str = "p.text-sm.text-gray-700";
    pub const DELETE_NOTICE_TEXT: &str = "p.text-sm.text-gray-500";
    pub const DELETE_CANCEL_BUTTON: &str = "button.MuiButton-text:has-text('Hủy')";
    pub const DELETE_CONFIRM_BUTTON: &str = "button.MuiButton-containedError:has-text('Xác nhận')";
}

pub mod posts {
    pub const PAGE_TITLE: &str = r"h1.text-4xl.text-\[\#6E344D\]";
    pub const HEADING: &str = "h1:has-text('Quản lý Bài Đăng')";
    pub const PAGE_DESCRIPTION: &str = "p.font-body.text-gray-500";
    pub const REFRESH_BUTTON: &str = "button:has-text('Làm mới')";

    pub const STATS_CONTAINER: &str = "div.grid.grid-cols-3.gap-4";
    pub const TOTAL_POSTS_CARD: &str = "div.bg-blue-50.border-blue-200";
    pub const TOTAL_POSTS_VALUE: &str = "div.bg-blue-50 p.text-blue-700.text-3xl";
    pub const ACTIVE_POSTS_CARD: &str = "div.bg-emerald-50.border-emerald-200";
    pub const ACTIVE_POSTS_VALUE: &str = "div.bg-emerald-50 p.text-emerald-700.text-3xl";
    pub const HIDDEN_POSTS_CARD: &str = "div.bg-slate-50.border-slate-200";
    pub const HIDDEN_POSTS_VALUE: &str = "div.bg-slate-50 p.text-slate-700.text-3xl";

    pub const SEARCH_INPUT: &str = "input[placeholder*='Tìm theo tiêu đề, tác giả']";
    pub const STATUS_FILTER_SELECT: &str = "select";

    pub const POSTS_TABLE: &str = "table.MuiTable-root";
    pub const TABLE_HEAD: &str = "thead.MuiTableHead-root";
    pub const TABLE_BODY: &str = "tbody.MuiTableBody-root";
    pub const POST_ROW: &str = "tr.MuiTableRow-root";

    pub const STATUS_ACTIVE_BADGE: &str = "span:has-text('ACTIVE')";
    pub const STATUS_HIDDEN_BADGE: &str = "span:has-text('HIDDEN')";

    pub const TOGGLE_VISIBILITY_BUTTON: &str = "button.MuiBox-root";
    /// Eye with slash: post is visible, clicking hides it.
    pub const HIDE_POST_ICON: &str = "svg path[d*='M12 7c2.76']";
    /// Open eye: post is hidden, clicking shows it.
    pub const SHOW_POST_ICON: &str = "svg path[d*='M12 4.5C7']";

    pub const VIEW_REPORTS_BUTTON: &str = "div[title='Xem chi tiết báo cáo']";

    pub const PAGINATION_CONTAINER: &str = "div.flex.justify-center.items-center.gap-2";
    pub const PAGINATION_INFO: &str = "p.text-gray-600";
    pub const FIRST_PAGE_BUTTON: &str = "button[title='Về trang đầu']";
    pub const PREV_PAGE_BUTTON: &str = "button[title='Trang trước']";
    pub const NEXT_PAGE_BUTTON: &str = "button[title='Trang sau']";
    pub const LAST_PAGE_BUTTON: &str = "button[title='Đến trang cuối']";
    pub const ACTIVE_PAGE_BUTTON: &str = r"button.bg-\[\#F295B6\].text-white";
    pub const PAGE_NUMBER_BUTTON: &str = "button.px-4.py-2.rounded-lg";
}

pub mod reports {
    pub const PAGE_TITLE: &str = "h1:has-text('Quản lý Báo Cáo'), h1:has-text('Báo cáo')";
    pub const HEADING: &str = "h1:has-text('Quản lý Báo cáo')";
    pub const REPORTS_TABLE: &str = "table.MuiTable-root";
}

pub mod sidebar {
    pub const SIDEBAR: &str = "aside, nav.admin-sidebar, div[class*='sidebar']";
    pub const DASHBOARD_LINK: &str =
        "a[href='/admin/dashboard'], a:has-text('Dashboard'), a:has-text('Thống kê')";
    pub const USERS_LINK: &str =
        "a[href*='/admin/users'], a:has-text('Người dùng'), a:has-text('Quản lý người dùng')";
    pub const POSTS_LINK: &str =
        "a[href*='/admin/posts'], a:has-text('Bài đăng'), a:has-text('Quản lý bài đăng')";
    pub const REPORTS_LINK: &str =
        "a[href*='/admin/reports'], a:has-text('Báo cáo'), a:has-text('Quản lý báo cáo')";
    pub const ACTIVE_LINK: &str = r"a.active, a[aria-current='page'], a.bg-\[\#F295B6\]";
}
