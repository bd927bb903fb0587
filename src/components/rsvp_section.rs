use dioxus::prelude::*;

use crate::app::models::Attendance;
use crate::app::{actions, Message};
use crate::challenge::SessionState;

#[component]
pub fn RsvpSection(
    session: Signal<SessionState>,
    message: Signal<Option<(Message, String)>>,
) -> Element {
    let mut name = use_signal(|| String::new());
    let mut phone = use_signal(|| String::new());
    let mut attendance = use_signal(|| Attendance::Coming);
    let sending = use_signal(|| false);

    rsx! {
        section { id: "rsvp", class: "rsvp-section",
            span { class: "floater rsvp-pumpkin-one", "🎃" }
            span { class: "floater rsvp-pumpkin-two", "🎃" }
            span { class: "floater rsvp-pumpkin-three", "🎃" }

            div { class: "rsvp-inner",
                h2 { class: "section-title", "🎃 RSVP to the Pumpkin Carving Party 🎃" }
                p { class: "rsvp-sub", "You've proven yourself worthy!" }

                div { class: "rsvp-card",
                    span { class: "cobweb top", "🕸️" }
                    span { class: "cobweb bottom", "🕸️" }

                    div { class: "field",
                        label { r#for: "name", "Name" }
                        input {
                            id: "name",
                            class: "text-input",
                            r#type: "text",
                            placeholder: "Your name...",
                            value: "{name}",
                            cursor: "text",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }

                    div { class: "field",
                        label { r#for: "phone", "Phone Number" }
                        input {
                            id: "phone",
                            class: "text-input",
                            r#type: "tel",
                            placeholder: "Your phone number...",
                            value: "{phone}",
                            cursor: "text",
                            oninput: move |evt| phone.set(evt.value()),
                        }
                    }

                    div { class: "field",
                        label { "Will you attend?" }
                        div { class: "radio-row",
                            input {
                                id: "coming",
                                r#type: "radio",
                                name: "attendance",
                                cursor: "pointer",
                                checked: *attendance.read() == Attendance::Coming,
                                onchange: move |_| attendance.set(Attendance::Coming),
                            }
                            label { r#for: "coming", cursor: "pointer", "🎃 I'm coming!" }
                        }
                        div { class: "radio-row",
                            input {
                                id: "not-coming",
                                r#type: "radio",
                                name: "attendance",
                                cursor: "pointer",
                                checked: *attendance.read() == Attendance::NotComing,
                                onchange: move |_| attendance.set(Attendance::NotComing),
                            }
                            label { r#for: "not-coming", cursor: "pointer", "👻 Can't make it" }
                        }
                    }

                    button {
                        class: "send-button",
                        cursor: "pointer",
                        disabled: *sending.read(),
                        onclick: actions::handle_rsvp_submit(
                            session, message, name, phone, attendance, sending,
                        ),
                        "📧 Send My RSVP"
                    }

                    p { class: "fine-print", "Your RSVP will be sent to Thalia! Check your messages soon 👻" }
                    p { class: "fine-print dim", "Details will be emailed to thaliagreenberg@gmail.com" }
                }
            }
        }
    }
}
