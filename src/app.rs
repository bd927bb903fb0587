use dioxus::logger::tracing::trace;
use dioxus::prelude::*;

use crate::challenge::SessionState;
use crate::components::{EventDetails, HeroSection, MessagePopup, PuzzlesSection, RsvpSection};

pub use models::Message;

pub mod actions;
mod hooks;
pub mod models;
pub mod utils;

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    trace!("kicking off app");
    let session = use_signal(SessionState::new);
    let message = use_signal(|| None::<(Message, String)>);

    hooks::use_popup_autohide(message);

    let started = session.read().started();
    let all_complete = session.read().all_complete();
    let rsvp_submitted = session.read().rsvp_submitted();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "page",
            // ambient glows behind everything
            div { class: "backdrop",
                div { class: "glow-orb orb-one" }
                div { class: "glow-orb orb-two" }
                div { class: "glow-orb orb-three" }
            }

            HeroSection { session }

            if started {
                PuzzlesSection { session, message }

                if all_complete && !rsvp_submitted {
                    RsvpSection { session, message }
                }

                if rsvp_submitted {
                    EventDetails {}
                }
            }

            if let Some((level, text)) = &*message.read() {
                MessagePopup { level: *level, text: text.clone() }
            }
        }
    }
}
