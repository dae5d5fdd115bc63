use yew::prelude::*;

use crate::components::theme::Palette;
use crate::models::avatar::bubble_color;
use crate::models::User;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub user: User,
    #[prop_or("w-9 h-9")]
    pub size: &'static str,
}

/// Avatar image, or the initial letter on a name-derived colour.
#[function_component(AvatarBadge)]
pub fn avatar_badge(props: &AvatarProps) -> Html {
    match &props.user.avatar {
        Some(src) => html! {
            <img class={format!("{} rounded-full object-cover", props.size)} src={src.clone()} alt={props.user.username.clone()} />
        },
        None => html! {
            <div
                class={format!("{} rounded-full flex items-center justify-center text-white font-bold text-sm", props.size)}
                style={format!("background-color: {}", bubble_color(&props.user.username))}
            >
                {props.user.initial()}
            </div>
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    /// Opens the settings dialog, which holds the profile fields.
    Profile,
    Settings,
    Divider,
    Logout,
}

impl MenuEntry {
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Divider => "",
            Self::Logout => "Logout",
        }
    }
}

/// Dropdown entries in display order.
pub const USER_MENU: [MenuEntry; 4] = [
    MenuEntry::Profile,
    MenuEntry::Settings,
    MenuEntry::Divider,
    MenuEntry::Logout,
];

#[derive(Properties, PartialEq)]
pub struct UserMenuProps {
    pub user: Option<User>,
    pub palette: Palette,
    pub on_login: Callback<()>,
    pub on_settings: Callback<()>,
    pub on_logout: Callback<()>,
}

/// Login button when logged out; avatar dropdown with [`USER_MENU`] when
/// logged in.
#[function_component(UserMenu)]
pub fn user_menu(props: &UserMenuProps) -> Html {
    let open = use_state(|| false);
    let palette = props.palette;

    let user = match &props.user {
        Some(user) => user.clone(),
        None => {
            return html! {
                <button
                    onclick={props.on_login.reform(|_: MouseEvent| ())}
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                >
                    {"Login"}
                </button>
            };
        }
    };

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    // Picking an entry also closes the dropdown.
    let pick = |cb: &Callback<()>| {
        let open = open.clone();
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            cb.emit(());
        })
    };

    html! {
        <div class="relative">
            <button onclick={toggle} title={user.username.clone()}>
                <AvatarBadge user={user.clone()} />
            </button>
            if *open {
                <div class={format!("absolute right-0 mt-2 w-56 z-20 rounded-lg shadow-lg border {} {}", palette.bg_tertiary, palette.border_color)}>
                    <div class={format!("p-3 border-b {}", palette.border_color)}>
                        <div class={format!("font-medium {}", palette.text_primary)}>{user.username.clone()}</div>
                        <div class={format!("text-xs {}", palette.text_secondary)}>{user.email.clone()}</div>
                    </div>
                    {
                        USER_MENU.iter().map(|&entry| match entry {
                            MenuEntry::Divider => html! {
                                <hr class={format!("my-1 {}", palette.border_color)} />
                            },
                            MenuEntry::Logout => html! {
                                <button onclick={pick(&props.on_logout)} class="w-full text-left px-3 py-2 text-red-500 hover:bg-red-500 hover:text-white">
                                    {entry.label()}
                                </button>
                            },
                            MenuEntry::Profile | MenuEntry::Settings => html! {
                                <button onclick={pick(&props.on_settings)} class={format!("w-full text-left px-3 py-2 hover:bg-blue-500 hover:text-white {}", palette.text_primary)}>
                                    {entry.label()}
                                </button>
                            },
                        }).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}
