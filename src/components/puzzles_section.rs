use dioxus::prelude::*;

use crate::app::Message;
use crate::challenge::{gate_of, SessionState, PUZZLES};
use crate::components::PuzzleCard;

#[component]
pub fn PuzzlesSection(
    session: Signal<SessionState>,
    message: Signal<Option<(Message, String)>>,
) -> Element {
    let state = session.read();
    let completed = state.completed();
    let progress = completed.len() as f32 / PUZZLES.len() as f32 * 100.0;

    rsx! {
        section { id: "puzzles", class: "puzzles-section",
            h2 { class: "section-title", "🕸️ The Five Trials 🕸️" }

            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {progress}%" }
            }

            div { class: "pumpkin-row",
                for puzzle in PUZZLES.iter() {
                    span {
                        key: "{puzzle.id}",
                        class: if completed.contains(&puzzle.id) { "pumpkin lit" } else { "pumpkin dim" },
                        "🎃"
                    }
                }
            }

            div { class: "card-stack",
                for (index, puzzle) in PUZZLES.iter().enumerate() {
                    PuzzleCard {
                        key: "{puzzle.id}",
                        index,
                        gate: gate_of(PUZZLES, completed, index),
                        session,
                        message,
                    }
                }
            }

            if state.all_complete() {
                div { class: "success-banner",
                    span { class: "success-pumpkin", "🎃" }
                    h3 { class: "success-title", "You did it! Your invitation awaits…" }
                    div { class: "success-hint", "⬇️ Scroll down to claim your prize ⬇️" }
                }
            }
        }
    }
}
