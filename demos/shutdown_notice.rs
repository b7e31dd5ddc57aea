use chrono::NaiveDate;
use shutdown_report::layout::ContinuationPolicy;
use shutdown_report::{
    generate_pdf, save_report, FocalPoint, Info, NotificationDocument, ReportConfig, Typeface,
};

fn main() {
    env_logger::init();

    // a notification as it would come back from the notification service
    let created = NaiveDate::from_ymd_opt(2024, 4, 28)
        .and_then(|d| d.and_hms_opt(9, 15, 0))
        .unwrap();
    let doc = NotificationDocument {
        event_id: "SD-2024-0042".to_string(),
        event_type: "Planned".to_string(),
        start_date_time: NaiveDate::from_ymd_opt(2024, 5, 1).and_then(|d| d.and_hms_opt(8, 0, 0)),
        end_date_time: NaiveDate::from_ymd_opt(2024, 5, 1).and_then(|d| d.and_hms_opt(20, 0, 0)),
        affected_areas: vec!["Seeb".into(), "Bawshar".into()],
        affected_sub_areas: (1..=70).map(|i| format!("DMA-{i:03}")).collect(),
        notification_details: lipsum::lipsum(150),
        reason_for_shutdown: "Replacement of a leaking section of the DN300 transmission main."
            .to_string(),
        contractors: vec!["Al Noor Contracting".into()],
        actions_required: vec![
            "Isolate main valve".into(),
            "Notify customers".into(),
            "Arrange water tankers".into(),
        ],
        valve_lock: "Yes".to_string(),
        size_of_pipeline: "DN300".to_string(),
        type_of_pipeline: "Ductile iron".to_string(),
        focal_points: vec![FocalPoint {
            name: "Operations desk".to_string(),
            email: "operations@example.com".to_string(),
            phone: "+968 2400 0000".to_string(),
        }],
        location_details: "Sultan Qaboos Street near the Seeb roundabout".to_string(),
        initiated_by: "Operations Control Centre".to_string(),
    };

    // long text boxes carry on without repeating their title; lists keep theirs
    let mut config = ReportConfig::default();
    config
        .text_continuation(ContinuationPolicy::ContinueSilently)
        .info(
            Info::new()
                .author("Operations Control Centre")
                .creation_date(created)
                .clone(),
        );

    // lay out and render the notice with the built-in Helvetica faces
    let report = generate_pdf(&doc, &config, &Typeface::Helvetica).unwrap();
    println!(
        "{} pages, {} boxes",
        report.summary.pages,
        report.summary.boxes.len()
    );

    // written as Shutdown_SD-2024-0042.pdf in the working directory
    let path = save_report(&report, ".").unwrap();
    println!("saved {}", path.display());
}
