use dioxus::prelude::*;

use crate::app::{actions, Message};
use crate::challenge::{Gate, SessionState, PUZZLES};

#[component]
pub fn PuzzleCard(
    index: usize,
    gate: Gate,
    session: Signal<SessionState>,
    message: Signal<Option<(Message, String)>>,
) -> Element {
    let mut answer = use_signal(|| String::new());
    let mut show_hint = use_signal(|| false);
    let shaking = use_signal(|| false);

    let puzzle = &PUZZLES[index];

    if gate == Gate::Locked {
        return rsx! {
            div { class: "puzzle-card locked",
                span { class: "lock-icon", "🔒" }
                span { "Locked - Complete the previous puzzle" }
            }
        };
    }

    let solved = gate == Gate::Completed;
    let draft_empty = answer.read().trim().is_empty();

    let card_class: &str = if solved {
        "puzzle-card solved"
    } else if *shaking.read() {
        "puzzle-card open shake"
    } else {
        "puzzle-card open"
    };

    rsx! {
        div {
            class: card_class,

            if solved {
                div { class: "solved-badge", "✔" }
            }

            h3 { class: "card-title", "{puzzle.title}" }
            p { class: "card-question", "{puzzle.question}" }

            if !solved {
                button {
                    class: "hint-button",
                    cursor: "pointer",
                    onclick: move |_| {
                        let shown = *show_hint.read();
                        show_hint.set(!shown);
                    },
                    if *show_hint.read() { "Hide Hint" } else { "Show Hint" }
                }

                if *show_hint.read() {
                    div { class: "hint-box", "💡 {puzzle.hint}" }
                }

                div { class: "answer-row",
                    input {
                        class: "answer-input",
                        r#type: "text",
                        placeholder: "Enter your answer...",
                        value: "{answer}",
                        cursor: "text",
                        oninput: move |evt| answer.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                actions::submit_answer(session, message, index, answer, shaking);
                            }
                        },
                    }
                    button {
                        class: "submit-button",
                        cursor: "pointer",
                        disabled: draft_empty,
                        onclick: actions::handle_answer_submit(session, message, index, answer, shaking),
                        "Submit"
                    }
                }
            } else {
                div { class: "solved-line",
                    span { class: "solved-check", "✓" }
                    span { "Puzzle Solved!" }
                }
            }
        }
    }
}
