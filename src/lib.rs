#![recursion_limit = "512"]

mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

use wasm_bindgen::prelude::*;
use yew::prelude::*;

use components::dashboard::Dashboard;
use components::toasts::Toasts;
pub use config::DashboardConfig;

// Use `wee_alloc` as the global allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[function_component(Main)]
fn main() -> Html {
    let config = use_state(DashboardConfig::default);

    html! {
        <ContextProvider<DashboardConfig> context={(*config).clone()}>
            <Dashboard />
            <Toasts />
        </ContextProvider<DashboardConfig>>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::start_app::<Main>();
}
