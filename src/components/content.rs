use yew::prelude::*;

use crate::components::theme::Palette;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 4] = [
    FeatureCard {
        title: "🌙 Dark Mode",
        body: "Switch between light & dark themes.",
    },
    FeatureCard {
        title: "🔔 Notifications",
        body: "Stay updated with alerts & messages.",
    },
    FeatureCard {
        title: "👤 User Profile",
        body: "Access your profile & settings easily.",
    },
    FeatureCard {
        title: "🔍 Search Bar",
        body: "Quickly find what you need in the dashboard.",
    },
];

/// Cards whose title or body contains `query`, ignoring case. A blank query
/// matches everything.
pub fn filter_cards<'a>(cards: &'a [FeatureCard], query: &str) -> Vec<&'a FeatureCard> {
    let needle = query.trim().to_lowercase();
    cards
        .iter()
        .filter(|card| {
            needle.is_empty()
                || card.title.to_lowercase().contains(&needle)
                || card.body.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ContentProps {
    pub query: String,
    pub greeting: Option<String>,
    pub palette: Palette,
}

#[function_component(Content)]
pub fn content(props: &ContentProps) -> Html {
    let palette = props.palette;
    let cards = filter_cards(&FEATURE_CARDS, &props.query);
    let welcome = match &props.greeting {
        Some(name) => format!("Welcome back, {} 🎉", name),
        None => String::from("Welcome 🎉"),
    };

    html! {
        <main class={format!("flex-1 overflow-y-auto p-6 {}", palette.bg_primary)}>
            <div class={format!("p-6 mb-6 rounded-lg shadow-sm {} {}", palette.bg_tertiary, palette.text_primary)}>
                <h2 class="text-xl font-bold mb-2">{welcome}</h2>
                <p class={palette.text_secondary}>
                    {"This is a modern interactive dashboard built with Rust and Yew. Use the sidebar, header tools, and dark mode toggle to explore."}
                </p>
            </div>
            if cards.is_empty() {
                <div class={format!("text-center py-12 {}", palette.text_secondary)}>
                    {format!("Nothing matches \"{}\"", props.query.trim())}
                </div>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
                    {
                        cards.into_iter().map(|card| html! {
                            <div class={format!("p-4 rounded-lg shadow-sm hover:shadow-md transition-shadow {}", palette.bg_tertiary)}>
                                <h3 class={format!("font-semibold mb-1 {}", palette.text_primary)}>{card.title}</h3>
                                <p class={format!("text-sm {}", palette.text_secondary)}>{card.body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            }
        </main>
    }
}
