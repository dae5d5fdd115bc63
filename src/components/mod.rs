pub mod content;
pub mod dashboard;
pub mod header;
pub mod login_modal;
pub mod notifications;
pub mod settings_modal;
pub mod sidebar;
pub mod theme;
pub mod toasts;
pub mod user_menu;
