use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notifications::NotificationBell;
use crate::components::theme::Palette;
use crate::components::user_menu::UserMenu;
use crate::models::{Notification, ShellAction, User};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub collapsed: bool,
    pub dark_mode: bool,
    pub query: String,
    pub user: Option<User>,
    pub notifications: Vec<Notification>,
    pub unread: usize,
    pub palette: Palette,
    pub on_action: Callback<ShellAction>,
    pub on_search: Callback<String>,
    pub on_logout: Callback<()>,
    pub on_mark_read: Callback<u32>,
    pub on_delete: Callback<u32>,
    pub on_mark_all_read: Callback<()>,
    pub on_clear: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let search_input = use_node_ref();
    let palette = props.palette;
    let shell = |action: ShellAction| props.on_action.reform(move |_: MouseEvent| action);

    let oninput = {
        let search_input = search_input.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |_: InputEvent| {
            if let Some(input) = search_input.cast::<HtmlInputElement>() {
                on_search.emit(input.value());
            }
        })
    };

    html! {
        <header class={format!("h-16 flex items-center justify-between px-4 border-b {} {}", palette.border_color, palette.bg_tertiary)}>
            <div class="flex items-center space-x-3 flex-1">
                <button
                    onclick={shell(ShellAction::ToggleSidebar)}
                    class={format!("p-2 rounded-lg text-xl {}", palette.text_primary)}
                    title="Toggle Sidebar"
                >
                    {if props.collapsed { "☰" } else { "⇤" }}
                </button>
                <input
                    ref={search_input}
                    type="search"
                    placeholder="🔍 Search..."
                    value={props.query.clone()}
                    oninput={oninput}
                    class={format!("w-full max-w-sm px-4 py-2 {} {} border {} rounded-lg focus:ring-2 focus:ring-blue-500", palette.bg_primary, palette.text_primary, palette.border_color)}
                />
            </div>
            <div class="flex items-center space-x-3">
                <button
                    onclick={shell(ShellAction::ToggleTheme)}
                    class={format!("p-2 rounded-lg {}", palette.text_primary)}
                    title="Toggle Dark Mode"
                >
                    {if props.dark_mode { "🌙" } else { "☀️" }}
                </button>
                <NotificationBell
                    items={props.notifications.clone()}
                    unread={props.unread}
                    palette={palette}
                    on_mark_read={props.on_mark_read.clone()}
                    on_delete={props.on_delete.clone()}
                    on_mark_all_read={props.on_mark_all_read.clone()}
                    on_clear={props.on_clear.clone()}
                />
                <UserMenu
                    user={props.user.clone()}
                    palette={palette}
                    on_login={props.on_action.reform(|_: ()| ShellAction::OpenLogin)}
                    on_settings={props.on_action.reform(|_: ()| ShellAction::OpenSettings)}
                    on_logout={props.on_logout.clone()}
                />
            </div>
        </header>
    }
}
