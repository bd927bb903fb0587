use std::time::Duration;

use dioxus::logger::tracing::{debug, trace};
use dioxus::prelude::*;
use gloo_timers::future::sleep;

use crate::app::models::{Attendance, Message, RsvpEntry};
use crate::app::utils::{self, popup_error, popup_normal};
use crate::challenge::{check_answer, SessionState, PUZZLES};
use crate::event::{EVENT, ICS_FILE_NAME};

pub fn handle_start(mut session: Signal<SessionState>) -> impl FnMut(Event<MouseData>) {
    move |_| {
        trace!("challenge started");
        session.write().start();
        spawn(async move {
            // let the puzzle section mount before scrolling at it
            sleep(Duration::from_millis(100)).await;
            utils::scroll_to("puzzles");
        });
    }
}

/// check the draft against one puzzle: on a hit record the completion and
/// clear the draft, on a miss shake the card. state is untouched on a miss.
pub fn submit_answer(
    mut session: Signal<SessionState>,
    message: Signal<Option<(Message, String)>>,
    index: usize,
    mut answer: Signal<String>,
    mut shaking: Signal<bool>,
) {
    let puzzle = &PUZZLES[index];
    let submitted = answer.read().clone();

    if check_answer(puzzle, &submitted) {
        trace!("puzzle {} solved", puzzle.id);
        popup_normal(message, "🎃 Correct! The puzzle is solved! The next trial awaits...");
        session.write().complete_puzzle(puzzle.id);
        answer.set(String::new());
    } else {
        popup_error(message, "👻 Not quite right... Try again, brave soul!");
        shaking.set(true);
        spawn(async move {
            sleep(Duration::from_millis(500)).await;
            shaking.set(false);
        });
    }
}

pub fn handle_answer_submit(
    session: Signal<SessionState>,
    message: Signal<Option<(Message, String)>>,
    index: usize,
    answer: Signal<String>,
    shaking: Signal<bool>,
) -> impl FnMut(Event<MouseData>) {
    move |_| submit_answer(session, message, index, answer, shaking)
}

pub fn handle_rsvp_submit(
    mut session: Signal<SessionState>,
    message: Signal<Option<(Message, String)>>,
    name: Signal<String>,
    phone: Signal<String>,
    attendance: Signal<Attendance>,
    mut sending: Signal<bool>,
) -> impl FnMut(Event<MouseData>) {
    move |_| {
        // a send is already on its way, don't advance twice
        if *sending.read() {
            return;
        }

        let name_current = name.read().clone();
        let phone_current = phone.read().clone();
        if !utils::validate_rsvp_form(&name_current, &phone_current, message) {
            return;
        }
        sending.set(true);

        let entry = RsvpEntry {
            name: name_current.trim().to_string(),
            phone: phone_current.trim().to_string(),
            attendance: *attendance.read(),
        };
        // no real backend, the send is simulated
        match serde_json::to_string(&entry) {
            Ok(payload) => debug!("rsvp sent: {payload}"),
            Err(e) => debug!("couldn't serialize rsvp: {e}"),
        }

        popup_normal(
            message,
            "🎃 RSVP Submitted! Your response has been sent to Thalia, welcome to the party!",
        );

        spawn(async move {
            // let the popup land before the page changes underneath it
            sleep(Duration::from_secs(1)).await;
            session.write().submit_rsvp();
            sleep(Duration::from_millis(300)).await;
            utils::scroll_to("event-details");
        });
    }
}

pub fn handle_add_to_calendar() -> impl FnMut(Event<MouseData>) {
    move |_| {
        trace!("calendar download requested");
        utils::trigger_download(ICS_FILE_NAME, "text/calendar", &EVENT.to_ics());
    }
}
