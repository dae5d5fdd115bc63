use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::components::login_modal::ModalFrame;
use crate::components::theme::Palette;
use crate::components::user_menu::AvatarBadge;
use crate::config::DashboardConfig;
use crate::models::{SettingsUpdate, User};

#[derive(Properties, PartialEq)]
pub struct SettingsModalProps {
    pub user: User,
    pub palette: Palette,
    pub on_save: Callback<SettingsUpdate>,
    pub on_preset: Callback<String>,
    pub on_upload: Callback<File>,
    pub on_close: Callback<()>,
}

/// Rename and avatar picker. Preset picks and uploads apply immediately;
/// the username applies on save.
#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsModalProps) -> Html {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let username = use_node_ref();
    let upload = use_node_ref();
    let palette = props.palette;

    let save = {
        let username = username.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| {
            let update = SettingsUpdate {
                username: username.cast::<HtmlInputElement>().map(|input| input.value()),
                avatar: None,
            };
            on_save.emit(update);
        })
    };
    let onchange = {
        let upload = upload.clone();
        let on_upload = props.on_upload.clone();
        Callback::from(move |_: Event| {
            let file = upload
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_upload.emit(file);
            }
        })
    };

    html! {
        <ModalFrame title="Settings" palette={palette} on_close={props.on_close.clone()}>
            <div class="flex items-center space-x-3">
                <AvatarBadge user={props.user.clone()} size="w-14 h-14" />
                <div class={format!("text-sm {}", palette.text_secondary)}>{props.user.email.clone()}</div>
            </div>
            <label class="block text-sm font-medium">{"Username"}</label>
            <input
                ref={username}
                type="text"
                value={props.user.username.clone()}
                class={format!("w-full px-4 py-2 {} {} border {} rounded-lg", palette.bg_primary, palette.text_primary, palette.border_color)}
            />
            <label class="block text-sm font-medium">{"Avatar"}</label>
            <div class="flex space-x-2">
                {
                    config.avatar_presets.iter().map(|path| {
                        let selected = props.user.avatar.as_deref() == Some(path.as_str());
                        let ring = if selected { "ring-2 ring-blue-500" } else { "" };
                        let pick = {
                            let path = path.clone();
                            props.on_preset.reform(move |_: MouseEvent| path.clone())
                        };
                        html! {
                            <button onclick={pick} class={format!("rounded-full {}", ring)}>
                                <img class="w-10 h-10 rounded-full" src={path.clone()} alt={path.clone()} />
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <input ref={upload} type="file" accept="image/*" onchange={onchange} class="text-sm" />
            <button
                onclick={save}
                class="w-full px-6 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                {"Save"}
            </button>
        </ModalFrame>
    }
}
