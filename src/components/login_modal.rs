use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::theme::Palette;

#[derive(Properties, PartialEq)]
pub struct ModalFrameProps {
    pub title: &'static str,
    pub palette: Palette,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Backdrop and card shared by the login and settings dialogs.
#[function_component(ModalFrame)]
pub fn modal_frame(props: &ModalFrameProps) -> Html {
    let palette = props.palette;
    html! {
        <div class="fixed inset-0 z-30 flex items-center justify-center bg-black bg-opacity-50">
            <div class={format!("w-full max-w-md rounded-lg shadow-xl {} {}", palette.bg_tertiary, palette.text_primary)}>
                <div class={format!("flex items-center justify-between p-4 border-b {}", palette.border_color)}>
                    <h2 class="text-lg font-semibold">{props.title}</h2>
                    <button title="Close" onclick={props.on_close.reform(|_: MouseEvent| ())}>{"✕"}</button>
                </div>
                <div class="p-4 space-y-4">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub email: String,
}

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub palette: Palette,
    pub on_submit: Callback<LoginForm>,
    pub on_close: Callback<()>,
}

/// Username and email form. Stays open until the submit succeeds.
#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let username = use_node_ref();
    let email = use_node_ref();
    let palette = props.palette;

    let submit = {
        let username = username.clone();
        let email = email.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            on_submit.emit(LoginForm {
                username: value(&username),
                email: value(&email),
            });
        })
    };
    let field = format!(
        "w-full px-4 py-2 {} {} border {} rounded-lg focus:ring-2 focus:ring-blue-500",
        palette.bg_primary, palette.text_primary, palette.border_color
    );

    html! {
        <ModalFrame title="Login" palette={palette} on_close={props.on_close.clone()}>
            <input ref={username} type="text" placeholder="Username" class={field.clone()} />
            <input ref={email} type="email" placeholder="Email" class={field} />
            <button
                onclick={submit}
                class="w-full px-6 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                {"Login"}
            </button>
        </ModalFrame>
    }
}
