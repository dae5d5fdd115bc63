use std::rc::Rc;

use web_sys::File;
use yew::prelude::*;
use yew_agent::{Dispatched, Dispatcher};

use crate::components::content::Content;
use crate::components::header::Header;
use crate::components::login_modal::{LoginForm, LoginModal};
use crate::components::settings_modal::SettingsModal;
use crate::components::sidebar::Sidebar;
use crate::components::theme::Palette;
use crate::config::DashboardConfig;
use crate::error::UploadError;
use crate::models::{AvatarSource, SettingsUpdate, ShellAction};
use crate::services::notice_bus::{Notice, NoticeBus};
use crate::services::storage::{LocalStorage, SessionStore};
use crate::services::upload::read_avatar;
use crate::state::{Action, DashboardState, Outcome};

pub enum Msg {
    Apply(Action),
    Upload(File),
    Uploaded(Result<AvatarSource, UploadError>),
}

/// Owns [`DashboardState`] and renders the whole shell from it.
pub struct Dashboard {
    state: DashboardState,
    footer: String,
    notices: Dispatcher<NoticeBus>,
}

impl Dashboard {
    fn apply(&mut self, action: Action) -> bool {
        match self.state.apply(action) {
            Ok(outcome) => {
                match outcome {
                    Outcome::LoggedIn(name) => {
                        self.notices.send(Notice::success(format!("Logged in as {}", name)))
                    }
                    Outcome::LoggedOut => self.notices.send(Notice::info("Logged out")),
                    Outcome::SettingsSaved => self.notices.send(Notice::success("Settings saved")),
                    Outcome::Unchanged => {}
                }
                true
            }
            Err(err) => {
                log::warn!("action rejected: {}", err);
                self.notices.send(Notice::error(err.to_string()));
                false
            }
        }
    }
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx
            .link()
            .context::<DashboardConfig>(Callback::noop())
            .map(|(config, _)| config)
            .unwrap_or_default();
        let store = SessionStore::new(Rc::new(LocalStorage), config.storage_key.clone());

        Self {
            state: DashboardState::new(&config, store),
            footer: config.footer,
            notices: NoticeBus::dispatcher(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Apply(action) => self.apply(action),
            Msg::Upload(file) => {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    link.send_message(Msg::Uploaded(read_avatar(file).await));
                });
                false
            }
            Msg::Uploaded(Ok(source)) => self.apply(Action::SetAvatar(source)),
            Msg::Uploaded(Err(err)) => {
                log::warn!("avatar upload failed: {}", err);
                self.notices.send(Notice::error(err.to_string()));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = &self.state;
        let shell = state.shell;
        let palette = Palette::new(shell.dark_mode);
        let user = state.session.user().cloned();
        let link = ctx.link();

        let on_action = link.callback(|action: ShellAction| Msg::Apply(Action::Shell(action)));
        let close = |action: ShellAction| link.callback(move |_: ()| Msg::Apply(Action::Shell(action)));

        let settings = match user.clone().filter(|_| shell.settings_modal_open) {
            Some(user) => html! {
                <SettingsModal
                    user={user}
                    palette={palette}
                    on_save={link.callback(|update: SettingsUpdate| Msg::Apply(Action::UpdateSettings(update)))}
                    on_preset={link.callback(|path: String| Msg::Apply(Action::SetAvatar(AvatarSource::Preset(path))))}
                    on_upload={link.callback(Msg::Upload)}
                    on_close={close(ShellAction::CloseSettings)}
                />
            },
            None => html! {},
        };

        html! {
            <div class={format!("flex h-screen {}", palette.bg_primary)}>
                <Sidebar
                    collapsed={shell.collapsed}
                    selected={shell.selected}
                    palette={palette}
                    on_action={on_action.clone()}
                />
                <div class="flex-1 flex flex-col min-w-0">
                    <Header
                        collapsed={shell.collapsed}
                        dark_mode={shell.dark_mode}
                        query={state.query.clone()}
                        user={user.clone()}
                        notifications={state.notifications.items().to_vec()}
                        unread={state.notifications.unread_count()}
                        palette={palette}
                        on_action={on_action}
                        on_search={link.callback(|query: String| Msg::Apply(Action::Search(query)))}
                        on_logout={link.callback(|_: ()| Msg::Apply(Action::Logout))}
                        on_mark_read={link.callback(|id: u32| Msg::Apply(Action::MarkRead(id)))}
                        on_delete={link.callback(|id: u32| Msg::Apply(Action::DeleteNotification(id)))}
                        on_mark_all_read={link.callback(|_: ()| Msg::Apply(Action::MarkAllRead))}
                        on_clear={link.callback(|_: ()| Msg::Apply(Action::ClearNotifications))}
                    />
                    <nav class={format!("px-6 py-3 text-sm {}", palette.text_secondary)}>
                        {format!("Home / {}", shell.selected.crumb())}
                    </nav>
                    <Content
                        query={state.query.clone()}
                        greeting={user.as_ref().map(|u| u.username.clone())}
                        palette={palette}
                    />
                    <footer class={format!("px-6 py-3 text-center text-xs border-t {} {}", palette.border_color, palette.text_secondary)}>
                        {self.footer.clone()}
                    </footer>
                </div>
                if shell.login_modal_open {
                    <LoginModal
                        palette={palette}
                        on_submit={link.callback(|form: LoginForm| Msg::Apply(Action::Login {
                            username: form.username,
                            email: form.email,
                        }))}
                        on_close={close(ShellAction::CloseLogin)}
                    />
                }
                {settings}
            </div>
        }
    }
}
