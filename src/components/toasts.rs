use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

use crate::config::DashboardConfig;
use crate::services::notice_bus::{timeout_ms, Notice, NoticeBus, NoticeLevel, NoticeQueue};

pub enum Msg {
    Show(Notice),
    Expire(u32),
}

/// Transient notices published on the [`NoticeBus`].
pub struct Toasts {
    queue: NoticeQueue,
    ttl_ms: u32,
    _consumer: Box<dyn Bridge<NoticeBus>>,
}

impl Toasts {
    fn schedule_expiry(&self, ctx: &Context<Self>, id: u32) {
        let expire = ctx.link().callback(move |_: ()| Msg::Expire(id));
        let handler = Closure::once_into_js(move || expire.emit(()));
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                handler.unchecked_ref(),
                timeout_ms(self.ttl_ms),
            )
        });
        if let Some(Err(err)) = scheduled {
            log::warn!("could not schedule notice expiry: {:?}", err);
        }
    }
}

impl Component for Toasts {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx
            .link()
            .context::<DashboardConfig>(Callback::noop())
            .map(|(config, _)| config)
            .unwrap_or_default();

        Self {
            queue: NoticeQueue::new(config.max_notices),
            ttl_ms: config.notice_ttl_ms,
            _consumer: NoticeBus::bridge(ctx.link().callback(Msg::Show)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Show(notice) => {
                let id = self.queue.push(notice);
                self.schedule_expiry(ctx, id);
                true
            }
            Msg::Expire(id) => self.queue.expire(id),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="fixed top-4 right-4 z-40 space-y-2 w-80">
                {
                    self.queue.iter().map(|(id, notice)| {
                        let id = *id;
                        let color = match notice.level {
                            NoticeLevel::Success => "bg-green-500",
                            NoticeLevel::Info => "bg-blue-500",
                            NoticeLevel::Error => "bg-red-500",
                        };
                        html! {
                            <div
                                onclick={ctx.link().callback(move |_: MouseEvent| Msg::Expire(id))}
                                class={format!("px-4 py-3 rounded-lg shadow-md text-white text-sm cursor-pointer {}", color)}
                            >
                                {notice.text.clone()}
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        }
    }
}
