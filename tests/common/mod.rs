#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use shutdown_report::layout::{FontWeight, Measure, RecordingCanvas};
use shutdown_report::{
    render_notification, FocalPoint, Mm, NotificationDocument, Pt, ReportConfig, ReportError,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every character is the same width, whatever the face or size
pub struct Monospace(pub Mm);

impl Measure for Monospace {
    fn text_width(&self, text: &str, _size: Pt, _weight: FontWeight) -> Result<Mm, ReportError> {
        Ok(self.0 * text.chars().count() as f32)
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(hour, 0, 0))
}

fn names(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix} {i:02}")).collect()
}

const DETAILS: &str = "Water supply will be interrupted while the transmission main is \
isolated, drained and cut back to sound pipe. Customers in the affected districts should \
store enough water for the day and keep taps closed until supply is restored, since air \
in the network can cause spurting and discoloured water when pressure returns. Tankers \
will be stationed at the listed filling points for the duration of the works. ";

const REASON: &str = "A leaking section of the DN300 ductile iron main has been found \
under the service road and has to be replaced before the joint fails. The section cannot \
be bypassed, so the zone is taken out of supply until the new pipe is tested. ";

/// A realistic notification, long enough to need a few pages
pub fn sample_document() -> NotificationDocument {
    NotificationDocument {
        event_id: "SD-2024-0042".to_string(),
        event_type: "Planned".to_string(),
        start_date_time: at(2024, 5, 1, 8),
        end_date_time: at(2024, 5, 1, 20),
        affected_areas: vec!["Seeb".into(), "Bawshar".into(), "Muttrah".into()],
        affected_sub_areas: names("DMA", 40),
        notification_details: DETAILS.repeat(4),
        reason_for_shutdown: REASON.repeat(2),
        contractors: vec!["Al Noor Contracting".into(), "Gulf Pipeline Services".into()],
        actions_required: vec![
            "Isolate main valve".into(),
            "Notify customers".into(),
            "Arrange water tankers".into(),
            "Flush line after repair".into(),
            "Update GIS".into(),
        ],
        valve_lock: "Yes".to_string(),
        size_of_pipeline: "DN300".to_string(),
        type_of_pipeline: "Ductile iron".to_string(),
        focal_points: (1..=12)
            .map(|i| FocalPoint {
                name: format!("Focal point {i}"),
                email: format!("focal{i}@example.com"),
                phone: format!("+968 2400 {i:04}"),
            })
            .collect(),
        location_details: "Sultan Qaboos Street, between the Seeb and Mabelah roundabouts"
            .to_string(),
        initiated_by: "Operations Control Centre".to_string(),
    }
}

/// A4 with round numbers, so geometry can be compared exactly
pub fn round_a4() -> (Mm, Mm) {
    (Mm(210.0), Mm(297.0))
}

/// Lay `doc` out onto an in-memory canvas
pub fn record<M: Measure>(
    doc: &NotificationDocument,
    config: &ReportConfig,
    measure: &M,
) -> (RecordingCanvas, shutdown_report::report::LayoutSummary) {
    let mut canvas = RecordingCanvas::new(config.page_size_mm());
    let summary =
        render_notification(&mut canvas, measure, config, doc).expect("can lay out notification");
    (canvas, summary)
}
