//! The notification record a report is generated from.
//!
//! Records arrive as JSON from the notification service. Every field is optional on
//! the wire: anything missing deserializes to an empty value and is rendered as a
//! placeholder, never reported as an error.

use crate::ReportError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A planned or emergency water shutdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationDocument {
    pub event_id: String,
    pub event_type: String,
    pub start_date_time: Option<NaiveDateTime>,
    pub end_date_time: Option<NaiveDateTime>,
    /// Willayats affected by the shutdown
    pub affected_areas: Vec<String>,
    /// District metered areas affected by the shutdown
    pub affected_sub_areas: Vec<String>,
    pub notification_details: String,
    pub reason_for_shutdown: String,
    pub contractors: Vec<String>,
    pub actions_required: Vec<String>,
    pub valve_lock: String,
    pub size_of_pipeline: String,
    pub type_of_pipeline: String,
    pub focal_points: Vec<FocalPoint>,
    pub location_details: String,
    pub initiated_by: String,
}

/// Someone to contact about the shutdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FocalPoint {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NotificationDocument {
    /// Parse a record from the notification service's JSON
    pub fn from_json(json: &str) -> Result<NotificationDocument, ReportError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// `value`, or `placeholder` if it is blank
pub(crate) fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Format a timestamp for display, or `placeholder` if it is missing
pub(crate) fn format_date(date: Option<NaiveDateTime>, format: &str, placeholder: &str) -> String {
    match date {
        Some(date) => date.format(format).to_string(),
        None => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_camel_case_payload() {
        let json = r#"{
            "eventId": "SD-2024-0042",
            "eventType": "Planned",
            "startDateTime": "2024-05-01T08:00:00",
            "affectedAreas": ["Seeb", "Bawshar"],
            "focalPoints": [{"name": "Aisha", "phone": "+968 2400 0000"}]
        }"#;
        let doc = NotificationDocument::from_json(json).expect("valid json");
        assert_eq!(doc.event_id, "SD-2024-0042");
        assert_eq!(doc.affected_areas, vec!["Seeb", "Bawshar"]);
        assert_eq!(
            doc.start_date_time,
            NaiveDate::from_ymd_opt(2024, 5, 1).and_then(|d| d.and_hms_opt(8, 0, 0))
        );
        assert_eq!(doc.end_date_time, None);
        assert_eq!(doc.focal_points[0].email, "");
        assert!(doc.contractors.is_empty());
    }

    #[test]
    fn empty_object_is_an_empty_document() {
        let doc = NotificationDocument::from_json("{}").expect("valid json");
        assert_eq!(doc, NotificationDocument::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            NotificationDocument::from_json("{\"eventId\": 4"),
            Err(ReportError::Json(_))
        ));
    }

    #[test]
    fn blanks_become_placeholders() {
        assert_eq!(or_placeholder("  ", "--"), "--");
        assert_eq!(or_placeholder("DN300", "--"), "DN300");
        assert_eq!(format_date(None, "%d/%m/%Y", "--"), "--");
    }
}
