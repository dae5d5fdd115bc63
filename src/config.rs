use serde::Deserialize;

/// Static settings for the dashboard, shared with every component through a
/// Yew context.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Client storage key holding the serialized session user.
    pub storage_key: String,
    pub brand: String,
    /// Shown in place of `brand` while the sidebar is collapsed.
    pub brand_collapsed: String,
    pub footer: String,
    /// Texts of the notifications present at startup, in display order.
    pub seed_notifications: Vec<String>,
    pub avatar_presets: Vec<String>,
    pub notice_ttl_ms: u32,
    pub max_notices: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_key: String::from("dashboard.session"),
            brand: String::from("My Logo"),
            brand_collapsed: String::from("🌟"),
            footer: String::from("Dashboard ©2026 · built with Yew"),
            seed_notifications: vec![
                String::from("Welcome to your new dashboard"),
                String::from("Your profile is 80% complete"),
                String::from("Weekly report is ready to view"),
            ],
            avatar_presets: vec![
                String::from("avatars/alex.svg"),
                String::from("avatars/sam.svg"),
                String::from("avatars/robin.svg"),
                String::from("avatars/kai.svg"),
            ],
            notice_ttl_ms: 3000,
            max_notices: 4,
        }
    }
}
