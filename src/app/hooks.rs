use dioxus::prelude::*;

use crate::app::Message;

/// hide the popup again after a few seconds, like the reference toasts
pub fn use_popup_autohide(mut message: Signal<Option<(Message, String)>>) {
    use_effect(move || {
        if message.read().is_some() {
            spawn(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
                message.set(None);
            });
        }
    });
}
