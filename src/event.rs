/// The party itself. All of it is fixed content; the struct only exists so
/// the details card and the calendar export read from one place.
pub struct EventInfo {
    pub title: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    /// floating local timestamps, iCalendar basic format
    pub start: &'static str,
    pub end: &'static str,
    pub date_display: &'static str,
    pub time_display: &'static str,
}

pub const EVENT: EventInfo = EventInfo {
    title: "Halloween Pumpkin Carving Party",
    location: "Myer Amphitheater",
    description: "🎃 Thalia's Halloween Pumpkin Carving Party!",
    start: "20251025T170000",
    end: "20251025T200000",
    date_display: "October 25th, 2025",
    time_display: "5:00 PM",
};

pub const ICS_FILE_NAME: &str = "pumpkin-carving-party.ics";

impl EventInfo {
    /// one-event iCalendar payload for the download button
    // TODO escape commas/semicolons per RFC 5545 if the location ever grows one
    pub fn to_ics(&self) -> String {
        format!(
            "BEGIN:VCALENDAR\n\
             VERSION:2.0\n\
             BEGIN:VEVENT\n\
             DTSTART:{}\n\
             DTEND:{}\n\
             SUMMARY:{}\n\
             LOCATION:{}\n\
             DESCRIPTION:{}\n\
             END:VEVENT\n\
             END:VCALENDAR",
            self.start, self.end, self.title, self.location, self.description,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ics_payload_carries_every_field() {
        let ics = EVENT.to_ics();
        assert!(ics.starts_with("BEGIN:VCALENDAR\nVERSION:2.0\n"));
        assert!(ics.contains("DTSTART:20251025T170000\n"));
        assert!(ics.contains("DTEND:20251025T200000\n"));
        assert!(ics.contains("SUMMARY:Halloween Pumpkin Carving Party\n"));
        assert!(ics.contains("LOCATION:Myer Amphitheater\n"));
        assert!(ics.contains("DESCRIPTION:🎃 Thalia's Halloween Pumpkin Carving Party!\n"));
        assert!(ics.ends_with("END:VEVENT\nEND:VCALENDAR"));
    }
}
