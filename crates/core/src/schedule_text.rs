//! Human-readable rendering of a day's schedule.
//!
//! The instance-scoped appointment endpoint returns both the raw rows and
//! a plain-text rendering meant to be read back verbatim by the assistant
//! answering on the tenant's messaging channel.

use std::fmt::Write as _;

use crate::types::Timestamp;

/// One appointment as seen by the renderer. Joined names are optional
/// because the underlying references are.
#[derive(Debug, Clone)]
pub struct ScheduleEntry {
    pub start_time: Timestamp,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub service_name: Option<String>,
    pub collaborator_name: Option<String>,
    pub notes: Option<String>,
}

/// Render a day's appointments as a numbered plain-text schedule.
///
/// `date_label` is the caller-formatted day (`DD/MM/YYYY`); `calendar_name`
/// is present when the view was filtered to a single calendar.
pub fn render_day_schedule(
    entries: &[ScheduleEntry],
    date_label: &str,
    calendar_name: Option<&str>,
) -> String {
    if entries.is_empty() {
        return match calendar_name {
            Some(_) => format!("No appointments on {date_label} in this calendar."),
            None => format!("No appointments on {date_label}."),
        };
    }

    let mut text = format!("Found {} appointment(s) on {date_label}", entries.len());
    if let Some(name) = calendar_name {
        let _ = write!(text, " in calendar {name}");
    }
    text.push_str(":\n\n");

    for (index, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            text,
            "{}. Time: {}",
            index + 1,
            entry.start_time.format("%H:%M")
        );

        match &entry.client_name {
            Some(name) => {
                let _ = writeln!(text, "   Client: {name}");
                if let Some(phone) = &entry.client_phone {
                    let _ = writeln!(text, "   Phone: {phone}");
                }
            }
            None => {
                let _ = writeln!(text, "   Client: not provided");
            }
        }

        if let Some(service) = &entry.service_name {
            let _ = writeln!(text, "   Service: {service}");
        }
        if let Some(collaborator) = &entry.collaborator_name {
            let _ = writeln!(text, "   Professional: {collaborator}");
        }
        if let Some(notes) = &entry.notes {
            let _ = writeln!(text, "   Notes: {notes}");
        }

        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn at(time: &str) -> Timestamp {
        NaiveDateTime::parse_from_str(&format!("2025-01-05 {time}:00"), "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn empty_day_mentions_the_calendar_only_when_filtered() {
        assert_eq!(
            render_day_schedule(&[], "05/01/2025", None),
            "No appointments on 05/01/2025."
        );
        assert_eq!(
            render_day_schedule(&[], "05/01/2025", Some("Main")),
            "No appointments on 05/01/2025 in this calendar."
        );
    }

    #[test]
    fn entries_are_numbered_with_details() {
        let entries = vec![
            ScheduleEntry {
                start_time: at("09:30"),
                client_name: Some("John Doe".into()),
                client_phone: Some("5511888".into()),
                service_name: Some("Haircut".into()),
                collaborator_name: Some("Alice".into()),
                notes: Some("first visit".into()),
            },
            ScheduleEntry {
                start_time: at("11:00"),
                client_name: None,
                client_phone: None,
                service_name: None,
                collaborator_name: None,
                notes: None,
            },
        ];

        let text = render_day_schedule(&entries, "05/01/2025", Some("Main"));

        assert!(text.starts_with("Found 2 appointment(s) on 05/01/2025 in calendar Main:"));
        assert!(text.contains("1. Time: 09:30"));
        assert!(text.contains("   Client: John Doe"));
        assert!(text.contains("   Phone: 5511888"));
        assert!(text.contains("   Service: Haircut"));
        assert!(text.contains("   Professional: Alice"));
        assert!(text.contains("   Notes: first visit"));
        assert!(text.contains("2. Time: 11:00"));
        assert!(text.contains("   Client: not provided"));
    }
}
