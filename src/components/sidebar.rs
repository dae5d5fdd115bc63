use yew::prelude::*;

use crate::components::theme::Palette;
use crate::config::DashboardConfig;
use crate::models::{MenuKey, ShellAction};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub collapsed: bool,
    pub selected: MenuKey,
    pub palette: Palette,
    pub on_action: Callback<ShellAction>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let width = if props.collapsed { "w-16" } else { "w-60" };
    let palette = props.palette;

    html! {
        <aside class={format!("flex-none {} {} border-r {} transition-all", width, palette.bg_secondary, palette.border_color)}>
            <div class={format!("h-16 flex items-center justify-center font-bold text-lg border-b {} {}", palette.border_color, palette.text_primary)}>
                { if props.collapsed { config.brand_collapsed.clone() } else { config.brand.clone() } }
            </div>
            <nav class="py-2">
                {
                    MenuKey::ALL.iter().map(|&key| {
                        let onclick = props.on_action.reform(move |_: MouseEvent| ShellAction::Select(key));
                        let active = if key == props.selected {
                            "bg-blue-600 text-white"
                        } else {
                            palette.text_secondary
                        };
                        html! {
                            <button
                                onclick={onclick}
                                title={key.label()}
                                class={format!("w-full flex items-center px-4 py-3 hover:bg-blue-500 hover:text-white transition-colors {}", active)}
                            >
                                <span class="text-lg">{key.icon()}</span>
                                if !props.collapsed {
                                    <span class="ml-3">{key.label()}</span>
                                }
                            </button>
                        }
                    }).collect::<Html>()
                }
            </nav>
        </aside>
    }
}
