use yew::prelude::*;

use crate::components::theme::Palette;
use crate::models::Notification;

#[derive(Properties, PartialEq)]
pub struct NotificationsProps {
    pub items: Vec<Notification>,
    pub unread: usize,
    pub palette: Palette,
    pub on_mark_read: Callback<u32>,
    pub on_delete: Callback<u32>,
    pub on_mark_all_read: Callback<()>,
    pub on_clear: Callback<()>,
}

/// Bell with unread badge and a dropdown list.
#[function_component(NotificationBell)]
pub fn notification_bell(props: &NotificationsProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let palette = props.palette;

    html! {
        <div class="relative">
            <button onclick={toggle} title="Notifications" class={format!("relative p-2 rounded-lg {}", palette.text_primary)}>
                {"🔔"}
                if props.unread > 0 {
                    <span class="absolute -top-1 -right-1 bg-red-500 text-white text-xs px-1.5 rounded-full">
                        {props.unread}
                    </span>
                }
            </button>
            if *open {
                <div class={format!("absolute right-0 mt-2 w-80 z-20 rounded-lg shadow-lg border {} {}", palette.bg_tertiary, palette.border_color)}>
                    <div class={format!("flex items-center justify-between p-3 border-b {}", palette.border_color)}>
                        <span class={format!("font-semibold {}", palette.text_primary)}>{"Notifications"}</span>
                        <div class="space-x-2 text-xs">
                            <button class="text-blue-500 hover:underline" onclick={props.on_mark_all_read.reform(|_: MouseEvent| ())}>
                                {"Mark all read"}
                            </button>
                            <button class="text-red-500 hover:underline" onclick={props.on_clear.reform(|_: MouseEvent| ())}>
                                {"Clear all"}
                            </button>
                        </div>
                    </div>
                    {
                        if props.items.is_empty() {
                            html! {
                                <div class={format!("p-4 text-sm text-center {}", palette.text_secondary)}>
                                    {"You're all caught up"}
                                </div>
                            }
                        } else {
                            props.items.iter().map(|n| notification_row(n, props)).collect::<Html>()
                        }
                    }
                </div>
            }
        </div>
    }
}

fn notification_row(n: &Notification, props: &NotificationsProps) -> Html {
    let id = n.id;
    let weight = if n.read { props.palette.text_secondary } else { "font-semibold" };
    html! {
        <div class={format!("flex items-center justify-between px-3 py-2 border-b {}", props.palette.border_color)}>
            <span class={format!("text-sm {} {}", props.palette.text_primary, weight)}>{n.text.clone()}</span>
            <div class="flex-none space-x-1 ml-2">
                if !n.read {
                    <button title="Mark as read" class="text-green-500" onclick={props.on_mark_read.reform(move |_: MouseEvent| id)}>
                        {"✓"}
                    </button>
                }
                <button title="Delete" class="text-red-500" onclick={props.on_delete.reform(move |_: MouseEvent| id)}>
                    {"✕"}
                </button>
            </div>
        </div>
    }
}
