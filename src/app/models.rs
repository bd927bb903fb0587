use serde::Serialize;

/// popup severity, picks the popup's element id for styling
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attendance {
    Coming,
    NotComing,
}

/// what the "send" would carry if there were a real backend
#[derive(Debug, Serialize)]
pub struct RsvpEntry {
    pub name: String,
    pub phone: String,
    pub attendance: Attendance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsvp_entry_serializes_with_kebab_case_attendance() {
        let entry = RsvpEntry {
            name: "Morticia".into(),
            phone: "555-0113".into(),
            attendance: Attendance::NotComing,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["attendance"], "not-coming");
        assert_eq!(json["name"], "Morticia");
    }
}
