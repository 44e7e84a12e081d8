//! Business-profile knowledge document rendering.
//!
//! When a tenant's profile changes, the assistant backing their messaging
//! channel is re-trained from a single plain-text document describing the
//! business: contact details, opening hours, services, professionals, and
//! links. This module renders that document and derives the metadata key
//! the receiving endpoint files it under. Pure string work; the HTTP
//! delivery lives in the API crate.

use std::fmt::Write as _;

use serde_json::Value;

/// The tenant's business profile, as stored in `profiles`.
#[derive(Debug, Clone, Default)]
pub struct BusinessProfile {
    pub company_name: String,
    pub address: Option<String>,
    pub whatsapp: Option<String>,
    pub document_number: Option<String>,
    pub location_url: Option<String>,
    /// JSON array of `{day, open_time, close_time}` objects.
    pub business_hours: Option<Value>,
}

/// One service offered by the business.
#[derive(Debug, Clone)]
pub struct ServiceEntry {
    pub name: String,
    pub price: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub available_days: Vec<String>,
    pub notes: Option<String>,
}

/// One professional working for the business.
#[derive(Debug, Clone)]
pub struct CollaboratorEntry {
    pub name: String,
    pub profession: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub working_hours: Option<String>,
    pub service_names: Vec<String>,
}

/// One published link (booking page, social media, ...).
#[derive(Debug, Clone)]
pub struct LinkEntry {
    pub title: String,
    pub url: String,
}

/// Render the full knowledge document for a tenant.
pub fn render_profile_document(
    profile: &BusinessProfile,
    services: &[ServiceEntry],
    collaborators: &[CollaboratorEntry],
    links: &[LinkEntry],
) -> String {
    let mut doc = String::new();

    let _ = writeln!(doc, "# Company Profile");
    let _ = writeln!(doc, "Name: {}", profile.company_name);
    let _ = writeln!(doc, "Address: {}", opt(&profile.address));
    let _ = writeln!(doc, "Whatsapp: {}", opt(&profile.whatsapp));
    let _ = writeln!(doc, "Business hours:");
    if let Some(hours) = &profile.business_hours {
        let formatted = format_business_hours(hours);
        if !formatted.is_empty() {
            let _ = writeln!(doc, "{formatted}");
        }
    }
    let _ = writeln!(doc, "Document: {}", opt(&profile.document_number));
    let _ = writeln!(doc, "Location: {}", opt(&profile.location_url));

    let _ = writeln!(doc, "\n# Services");
    for service in services {
        let _ = writeln!(doc, "\n## {}", service.name);
        let _ = writeln!(doc, "Price: {}", opt_num(service.price));
        match service.duration_minutes {
            Some(minutes) => {
                let _ = writeln!(doc, "Duration: {minutes} minutes");
            }
            None => {
                let _ = writeln!(doc, "Duration:");
            }
        }
        let _ = writeln!(doc, "Available days: {}", service.available_days.join(", "));
        let _ = writeln!(doc, "Notes: {}", opt(&service.notes));
    }

    let _ = writeln!(doc, "\n# Professionals");
    for collaborator in collaborators {
        let _ = writeln!(doc, "\n## {}", collaborator.name);
        let _ = writeln!(doc, "Profession: {}", opt(&collaborator.profession));
        let _ = writeln!(doc, "Phone: {}", opt(&collaborator.phone));
        let _ = writeln!(doc, "Description: {}", opt(&collaborator.description));
        let _ = writeln!(doc, "Working hours: {}", opt(&collaborator.working_hours));
        let _ = writeln!(doc, "Services: {}", collaborator.service_names.join(", "));
    }

    let _ = writeln!(doc, "\n# Links");
    for link in links {
        let _ = writeln!(doc, "{}: {}", link.title, link.url);
    }

    doc
}

/// Format the business-hours JSON as one line per opening interval,
/// grouped by day in first-appearance order.
///
/// Accepts either a JSON array or a string containing a serialized array
/// (older rows stored the latter). Anything else renders as empty.
pub fn format_business_hours(value: &Value) -> String {
    match value {
        Value::Array(items) => format_hour_items(items),
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => format_hour_items(&items),
            _ => String::new(),
        },
        _ => String::new(),
    }
}

fn format_hour_items(items: &[Value]) -> String {
    let mut day_order: Vec<&str> = Vec::new();
    let mut grouped: Vec<(&str, Vec<(String, String)>)> = Vec::new();

    for item in items {
        let Some(day) = item.get("day").and_then(Value::as_str) else {
            continue;
        };
        let open = item
            .get("open_time")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let close = item
            .get("close_time")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        match day_order.iter().position(|d| *d == day) {
            Some(idx) => grouped[idx].1.push((open, close)),
            None => {
                day_order.push(day);
                grouped.push((day, vec![(open, close)]));
            }
        }
    }

    let mut lines: Vec<String> = Vec::new();
    for (day, intervals) in grouped {
        for (open, close) in intervals {
            lines.push(format!("{day}: {open} - {close}"));
        }
    }
    lines.join("\n")
}

/// Derive the metadata key the knowledge document is filed under.
///
/// The company name is lowercased, trimmed, whitespace runs become `_`,
/// and everything outside `[a-z0-9_]` is stripped; the tenant's whatsapp
/// number is prepended to keep keys unique across businesses with the
/// same name.
pub fn metadata_key(whatsapp: &str, company_name: &str) -> String {
    let lowered = company_name.trim().to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());
    let mut last_was_space = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                normalized.push('_');
                last_was_space = true;
            }
            continue;
        }
        last_was_space = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            normalized.push(ch);
        }
    }

    format!("{whatsapp}_{normalized}")
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

fn opt_num(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn metadata_key_normalizes_company_name() {
        assert_eq!(metadata_key("5511999", "Studio Hair"), "5511999_studio_hair");
        assert_eq!(metadata_key("5511999", "  Studio   Hair  "), "5511999_studio_hair");
        // Non-ASCII letters and punctuation are stripped after the
        // whitespace pass, so separators may double up.
        assert_eq!(metadata_key("5511999", "Café & Co. 2"), "5511999_caf__co_2");
        assert_eq!(metadata_key("", "Solo"), "_solo");
    }

    #[test]
    fn business_hours_group_by_day_in_first_appearance_order() {
        let hours = json!([
            {"day": "Mon", "open_time": "09:00", "close_time": "12:00"},
            {"day": "Tue", "open_time": "09:00", "close_time": "18:00"},
            {"day": "Mon", "open_time": "14:00", "close_time": "18:00"},
        ]);

        assert_eq!(
            format_business_hours(&hours),
            "Mon: 09:00 - 12:00\nMon: 14:00 - 18:00\nTue: 09:00 - 18:00"
        );
    }

    #[test]
    fn business_hours_accept_serialized_arrays() {
        let raw = json!([{"day": "Sat", "open_time": "08:00", "close_time": "13:00"}]);
        let as_string = Value::String(raw.to_string());

        assert_eq!(format_business_hours(&as_string), "Sat: 08:00 - 13:00");
    }

    #[test]
    fn malformed_business_hours_render_empty() {
        assert_eq!(format_business_hours(&json!({"day": "Mon"})), "");
        assert_eq!(format_business_hours(&Value::String("not json".into())), "");
        assert_eq!(format_business_hours(&json!(42)), "");
        // Items without a day are skipped, not errors.
        assert_eq!(
            format_business_hours(&json!([{"open_time": "09:00"}])),
            ""
        );
    }

    #[test]
    fn document_includes_all_sections() {
        let profile = BusinessProfile {
            company_name: "Studio Hair".into(),
            address: Some("Main St 1".into()),
            whatsapp: Some("5511999".into()),
            document_number: None,
            location_url: None,
            business_hours: Some(json!([
                {"day": "Mon", "open_time": "09:00", "close_time": "18:00"},
            ])),
        };
        let services = vec![ServiceEntry {
            name: "Haircut".into(),
            price: Some(30.0),
            duration_minutes: Some(45),
            available_days: vec!["Mon".into(), "Tue".into()],
            notes: None,
        }];
        let collaborators = vec![CollaboratorEntry {
            name: "Alice".into(),
            profession: Some("Barber".into()),
            phone: None,
            description: None,
            working_hours: Some("9-18".into()),
            service_names: vec!["Haircut".into()],
        }];
        let links = vec![LinkEntry {
            title: "Booking".into(),
            url: "https://example.com/book".into(),
        }];

        let doc = render_profile_document(&profile, &services, &collaborators, &links);

        assert!(doc.contains("# Company Profile"));
        assert!(doc.contains("Name: Studio Hair"));
        assert!(doc.contains("Mon: 09:00 - 18:00"));
        assert!(doc.contains("## Haircut"));
        assert!(doc.contains("Duration: 45 minutes"));
        assert!(doc.contains("Available days: Mon, Tue"));
        assert!(doc.contains("## Alice"));
        assert!(doc.contains("Services: Haircut"));
        assert!(doc.contains("Booking: https://example.com/book"));
    }
}
