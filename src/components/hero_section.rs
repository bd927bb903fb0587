use dioxus::prelude::*;

use crate::app::actions;
use crate::challenge::SessionState;

#[component]
pub fn HeroSection(session: Signal<SessionState>) -> Element {
    let started = session.read().started();

    rsx! {
        section { class: "hero",
            span { class: "floater hero-ghost-one", "👻" }
            span { class: "floater hero-skull", "💀" }
            span { class: "floater hero-ghost-two", "👻" }

            div { class: "hero-inner",
                h1 { class: "hero-title", "🎃 The Great Pumpkin Challenge 🎃" }
                p { class: "hero-tagline",
                    "Solve the puzzles… if you dare. Only the worthy shall receive their invitation."
                }
                button {
                    class: "start-button",
                    cursor: "pointer",
                    disabled: started,
                    onclick: actions::handle_start(session),
                    if started { "🎃 Challenge Begun! 🎃" } else { "🎃 Start the Challenge 🎃" }
                }
            }

            div { class: "fog" }
        }
    }
}
