use dioxus::prelude::*;

use crate::app::models::Message;

pub fn popup_normal(
    mut message: Signal<Option<(Message, String)>>,
    text: impl std::fmt::Display,
) {
    message.set(Some((Message::Info, text.to_string())));
}

pub fn popup_error(
    mut message: Signal<Option<(Message, String)>>,
    text: impl std::fmt::Display,
) {
    message.set(Some((Message::Error, text.to_string())));
}

/// both free-text fields must survive a trim
pub fn rsvp_fields_present(name: &str, phone: &str) -> bool {
    !name.trim().is_empty() && !phone.trim().is_empty()
}

pub fn validate_rsvp_form(
    name: &str,
    phone: &str,
    message: Signal<Option<(Message, String)>>,
) -> bool {
    match rsvp_fields_present(name, phone) {
        true => true,
        false => {
            popup_error(message, "Please fill in all fields!");
            false
        }
    }
}

pub fn scroll_to(element_id: &str) {
    let js = format!(
        "document.getElementById('{element_id}')?.scrollIntoView({{ behavior: 'smooth' }});"
    );
    let _ = document::eval(&js);
}

/// hand `content` to the browser as a named download
pub fn trigger_download(file_name: &str, mime: &str, content: &str) {
    // serde_json turns the payload into a valid JS string literal
    let payload = serde_json::to_string(content).unwrap_or_default();
    let js = format!(
        "var blob = new Blob([{payload}], {{ type: '{mime}' }});\n\
         var url = URL.createObjectURL(blob);\n\
         var link = document.createElement('a');\n\
         link.href = url;\n\
         link.download = '{file_name}';\n\
         document.body.appendChild(link);\n\
         link.click();\n\
         document.body.removeChild(link);\n\
         URL.revokeObjectURL(url);"
    );
    let _ = document::eval(&js);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_fields_do_not_count() {
        assert!(rsvp_fields_present("Wednesday", "555-0199"));
        assert!(!rsvp_fields_present("   ", "555-0199"));
        assert!(!rsvp_fields_present("Wednesday", "\t"));
        assert!(!rsvp_fields_present("", ""));
    }
}
