use dioxus::prelude::*;

use crate::app::actions;
use crate::event::EVENT;

const CONFETTI: [&str; 5] = ["🎃", "👻", "🦇", "🍬", "🕷️"];
const CONFETTI_COUNT: usize = 30;

#[component]
pub fn EventDetails() -> Element {
    // decorative only; spread drop positions and timings by index so the
    // rain doesn't fall in lockstep
    let confetti = (0..CONFETTI_COUNT).map(|piece| {
        let emoji = CONFETTI[piece % CONFETTI.len()];
        let left = (piece * 37) % 100;
        let delay_ms = (piece % 7) * 300;
        let duration_ms = 3000 + (piece * 167) % 2000;
        (piece, emoji, left, delay_ms, duration_ms)
    });

    rsx! {
        section { id: "event-details", class: "event-section",
            for (piece, emoji, left, delay_ms, duration_ms) in confetti {
                span {
                    key: "{piece}",
                    class: "confetti",
                    style: "left: {left}%; animation-delay: {delay_ms}ms; animation-duration: {duration_ms}ms;",
                    "{emoji}"
                }
            }

            div { class: "event-inner",
                div { class: "event-header",
                    span { class: "event-pumpkin", "🎃" }
                    h2 { class: "section-title", "You're Invited!" }
                    p { class: "event-sub",
                        "Congratulations on completing Thalia's Great Pumpkin Challenge!"
                    }
                }

                div { class: "event-card",
                    h3 { class: "event-name", "🎃 {EVENT.title} 🎃" }

                    div { class: "detail-row orange",
                        span { class: "detail-icon", "📅" }
                        div {
                            div { class: "detail-label", "Date" }
                            div { class: "detail-value", "{EVENT.date_display}" }
                        }
                    }
                    div { class: "detail-row purple",
                        span { class: "detail-icon", "🕔" }
                        div {
                            div { class: "detail-label", "Time" }
                            div { class: "detail-value", "{EVENT.time_display}" }
                        }
                    }
                    div { class: "detail-row orange",
                        span { class: "detail-icon", "📍" }
                        div {
                            div { class: "detail-label", "Location" }
                            div { class: "detail-value", "{EVENT.location}" }
                        }
                    }

                    button {
                        class: "calendar-button",
                        cursor: "pointer",
                        onclick: actions::handle_add_to_calendar(),
                        "📅 Add to Calendar"
                    }

                    div { class: "event-footer",
                        p { "🎃 Bring your carving skills and Halloween spirit! 🎃" }
                        p { class: "dim", "Can't wait to see you there!" }
                    }
                }

                p { class: "event-thanks",
                    "Thank you for completing Thalia's Great Pumpkin Challenge! 👻"
                }
            }
        }
    }
}
