pub mod avatar;
pub mod notification;
pub mod shell;
pub mod user;

pub use avatar::AvatarSource;
pub use notification::{Notification, NotificationList};
pub use shell::{MenuKey, ShellAction, ShellState};
pub use user::{SettingsUpdate, User};
