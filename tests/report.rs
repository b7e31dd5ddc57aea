mod common;

use common::*;
use shutdown_report::layout::{
    render_section, render_twin_columns, BadgeStyle, BoxStyle, Canvas, Column, DrawOp, Margins,
    PageState, RecordingCanvas, Section,
};
use shutdown_report::report::LayoutSummary;
use shutdown_report::{
    generate_pdf, report_file_name, save_report, Mm, NotificationDocument, Pt, ReportConfig,
    ReportError, Typeface,
};

fn limit(config: &ReportConfig) -> Mm {
    config.page_size_mm().1 - config.margins.bottom
}

fn assert_no_overlap(summary: &LayoutSummary) {
    for page in 0..summary.pages {
        let boxes: Vec<_> = summary.boxes_on(page).collect();
        for (i, a) in boxes.iter().enumerate() {
            for b in boxes.iter().skip(i + 1) {
                assert!(
                    !a.area().overlaps(&b.area()),
                    "'{}' overlaps '{}' on page {}",
                    a.title,
                    b.title,
                    page
                );
            }
        }
    }
}

fn assert_within_margin(canvas: &RecordingCanvas, config: &ReportConfig) {
    let limit = limit(config);
    for (page, ops) in canvas.pages().iter().enumerate() {
        for op in ops.iter() {
            assert!(
                op.max_y() <= limit + Mm(1e-3),
                "{op:?} crosses the bottom margin on page {page}"
            );
        }
    }
}

#[test]
fn sample_notice_lays_out_cleanly() {
    init_logging();
    let config = ReportConfig::default();
    let (canvas, summary) = record(&sample_document(), &config, &Typeface::Helvetica);

    assert!(summary.pages >= 2);
    assert_eq!(summary.pages, canvas.page_count());
    assert_no_overlap(&summary);
    assert_within_margin(&canvas, &config);
}

#[test]
fn every_page_is_numbered_in_the_top_margin() {
    let config = ReportConfig::default();
    let (canvas, summary) = record(&sample_document(), &config, &Typeface::Helvetica);
    for page in 0..summary.pages {
        let label = format!("Page {} of {}", page + 1, summary.pages);
        let y = canvas.ops(page).iter().find_map(|op| match op {
            DrawOp::Text { text, y, .. } if *text == label => Some(*y),
            _ => None,
        });
        let y = y.expect("page number drawn");
        assert!(y < config.margins.top);
    }
}

#[test]
fn long_dma_list_continues_under_a_continuation_header() {
    let mut doc = sample_document();
    doc.affected_sub_areas = (1..=120).map(|i| format!("DMA {i:03}")).collect();
    let config = ReportConfig::default();
    let (canvas, summary) = record(&doc, &config, &Typeface::Helvetica);

    let dma_boxes: Vec<_> = summary
        .boxes
        .iter()
        .filter(|b| b.title == "Affected DMAs")
        .collect();
    assert!(dma_boxes.len() >= 2);
    let continued_on = dma_boxes[1].page;
    assert!(canvas
        .texts(continued_on)
        .contains(&"Affected DMAs (continued)"));
    assert_no_overlap(&summary);
    assert_within_margin(&canvas, &config);
}

#[test]
fn list_splits_at_forty_nine_rows() {
    // 13mm bottom margin puts the limit at 284mm; rows start at 60mm
    let size = round_a4();
    let margins = Margins::trbl(Mm(15.0), Mm(15.0), Mm(13.0), Mm(15.0));
    let style = BoxStyle {
        padding: Mm(2.0),
        ..BoxStyle::default()
    };
    let items: Vec<String> = (1..=60).map(|i| format!("DMA {i}")).collect();

    let mut canvas = RecordingCanvas::new(size);
    let mut state = PageState::new(size, &margins);
    state.cursor_y = Mm(51.0);
    let extent = render_section(
        &mut canvas,
        &Monospace(Mm(2.0)),
        &style,
        &BadgeStyle::default(),
        &mut state,
        &Section::list("Affected DMAs", items),
        Mm(15.0),
        Mm(180.0),
    )
    .expect("can render");

    let bullets = |page: usize| {
        canvas
            .ops(page)
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    };
    assert_eq!(extent.boxes.len(), 2);
    assert_eq!(bullets(0), 49);
    assert_eq!(bullets(1), 11);
    assert_eq!(canvas.texts(1)[0], "Affected DMAs (continued)");
}

#[test]
fn taller_twin_column_sets_the_cursor() {
    let size = round_a4();
    let spacing = Mm(4.0);
    for (left_height, right_height) in [(Mm(40.0), Mm(90.0)), (Mm(90.0), Mm(40.0))] {
        let left = Section::text("Notification Details", "short").with_min_height(left_height);
        let right = Section::text("Reason for Shutdown", "short").with_min_height(right_height);
        let mut canvas = RecordingCanvas::new(size);
        let mut state = PageState::new(size, &Margins::all(Mm(15.0)));
        state.cursor_y = Mm(60.0);

        render_twin_columns(
            &mut canvas,
            &Monospace(Mm(2.0)),
            &BoxStyle::default(),
            &BadgeStyle::default(),
            &mut state,
            Column::new(&left, Mm(15.0), Mm(88.0)),
            Column::new(&right, Mm(107.0), Mm(88.0)),
            spacing,
        )
        .expect("can render");
        assert_eq!(state.cursor_y, Mm(60.0) + Mm(90.0) + spacing);
    }
}

#[test]
fn empty_notification_still_renders_every_box() {
    let config = ReportConfig::default();
    let (canvas, summary) = record(
        &NotificationDocument::default(),
        &config,
        &Typeface::Helvetica,
    );
    let style = &config.box_style;
    let floor = style.title_height + style.padding * 2.0 + style.line_height;

    assert_eq!(summary.pages, 1);
    for section in summary.boxes.iter().filter(|b| b.title != "Footer") {
        assert!(section.height() >= floor, "'{}' is too short", section.title);
    }
    let placeholders = canvas.texts(0).iter().filter(|t| **t == "--").count();
    assert!(placeholders >= 10);
    assert_no_overlap(&summary);
}

#[test]
fn event_id_changes_nothing_but_the_id() {
    let config = ReportConfig::default();
    let first = sample_document();
    let mut second = sample_document();
    second.event_id = "SD-2025-9999-RELOCATED".to_string();

    let (a, a_summary) = record(&first, &config, &Typeface::Helvetica);
    let (b, b_summary) = record(&second, &config, &Typeface::Helvetica);
    assert_eq!(a_summary, b_summary);
    assert_eq!(a.page_count(), b.page_count());

    for page in 0..a.page_count() {
        assert_eq!(a.ops(page).len(), b.ops(page).len());
        for (x, y) in a.ops(page).iter().zip(b.ops(page).iter()) {
            match (x, y) {
                (
                    DrawOp::Text {
                        x: ax,
                        y: ay,
                        text: a_text,
                        ..
                    },
                    DrawOp::Text {
                        x: bx,
                        y: by,
                        text: b_text,
                        ..
                    },
                ) => {
                    assert_eq!((ax, ay), (bx, by));
                    if a_text != b_text {
                        assert!(a_text.contains(&first.event_id));
                        assert!(b_text.contains(&second.event_id));
                    }
                }
                _ => assert_eq!(x, y),
            }
        }
    }
}

#[test]
fn identical_input_gives_identical_bytes() {
    init_logging();
    let config = ReportConfig::default();
    let doc = sample_document();
    let first = generate_pdf(&doc, &config, &Typeface::Helvetica).expect("can generate");
    let second = generate_pdf(&doc, &config, &Typeface::Helvetica).expect("can generate");
    assert_eq!(first.bytes, second.bytes);
}

#[test]
fn pdf_has_one_page_per_laid_out_page() {
    let mut config = ReportConfig::default();
    config.compress(false);
    let report =
        generate_pdf(&sample_document(), &config, &Typeface::Helvetica).expect("can generate");

    assert!(report.bytes.starts_with(b"%PDF-"));
    let text = String::from_utf8_lossy(&report.bytes);
    assert!(text.contains(&format!("/Count {}", report.summary.pages)));
    assert!(text.contains("Water Shutdown Notification SD-2024-0042"));
    assert!(text.contains("/Helvetica"));
    assert_eq!(report.file_name, "Shutdown_SD-2024-0042.pdf");
}

#[test]
fn compression_shrinks_the_output() {
    let doc = sample_document();
    let mut plain = ReportConfig::default();
    plain.compress(false);
    let compressed = generate_pdf(&doc, &ReportConfig::default(), &Typeface::Helvetica)
        .expect("can generate");
    let uncompressed = generate_pdf(&doc, &plain, &Typeface::Helvetica).expect("can generate");
    assert!(compressed.bytes.len() < uncompressed.bytes.len());
    assert!(String::from_utf8_lossy(&compressed.bytes).contains("/FlateDecode"));
}

#[test]
fn measurement_failure_aborts_the_report() {
    let mut config = ReportConfig::default();
    let style = BoxStyle {
        body_size: Pt(0.0),
        ..BoxStyle::default()
    };
    config.box_style(style);
    let result = generate_pdf(&sample_document(), &config, &Typeface::Helvetica);
    assert!(matches!(result, Err(ReportError::Measurement { .. })));
}

#[test]
fn json_payload_renders() {
    let json = r#"{
        "eventId": "SD-7",
        "eventType": "Emergency",
        "startDateTime": "2024-06-10T06:30:00",
        "affectedAreas": ["Seeb"],
        "actionsRequired": ["Isolate main valve", "Notify customers"],
        "focalPoints": [{"name": "Aisha", "email": "aisha@example.com", "phone": "+968 2400 0001"}]
    }"#;
    let doc = NotificationDocument::from_json(json).expect("valid json");
    let config = ReportConfig::default();
    let (canvas, _) = record(&doc, &config, &Typeface::Helvetica);
    let texts = canvas.texts(0);
    assert!(texts.contains(&"10/06/2024 06:30"));
    assert!(texts.contains(&"Isolate main valve"));
    assert!(texts.contains(&"Aisha"));
}

#[test]
fn saved_reports_land_under_their_file_name() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let report = generate_pdf(&sample_document(), &ReportConfig::default(), &Typeface::Helvetica)
        .expect("can generate");
    let path = save_report(&report, dir.path()).expect("can save");

    assert_eq!(path, dir.path().join("Shutdown_SD-2024-0042.pdf"));
    assert_eq!(std::fs::read(&path).expect("can read back"), report.bytes);
    let leftovers = std::fs::read_dir(dir.path())
        .expect("can list dir")
        .count();
    assert_eq!(leftovers, 1);
}

#[test]
fn concurrent_saves_of_one_report_do_not_collide() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let report = generate_pdf(&sample_document(), &ReportConfig::default(), &Typeface::Helvetica)
        .expect("can generate");

    std::thread::scope(|scope| {
        let saves: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| save_report(&report, dir.path())))
            .collect();
        for save in saves {
            let path = save.join().expect("save thread finished").expect("can save");
            assert_eq!(path, dir.path().join(&report.file_name));
        }
    });

    let path = dir.path().join(&report.file_name);
    assert_eq!(std::fs::read(&path).expect("can read back"), report.bytes);
    let leftovers = std::fs::read_dir(dir.path())
        .expect("can list dir")
        .count();
    assert_eq!(leftovers, 1);
}

#[test]
fn saving_into_a_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let report = generate_pdf(&sample_document(), &ReportConfig::default(), &Typeface::Helvetica)
        .expect("can generate");
    let result = save_report(&report, dir.path().join("missing"));
    assert!(matches!(result, Err(ReportError::Io(_))));
}

#[test]
fn file_names_are_safe() {
    assert_eq!(report_file_name("SD/1:2"), "Shutdown_SD_1_2.pdf");
    assert_eq!(report_file_name(""), "Shutdown_unknown.pdf");
}

fn dejavu() -> Typeface {
    Typeface::load_truetype(
        include_bytes!("fonts/DejaVuSansMono.ttf").to_vec(),
        include_bytes!("fonts/DejaVuSansMono-Bold.ttf").to_vec(),
    )
    .expect("fixtures are fonts")
}

#[test]
fn embedded_faces_lay_out_cleanly() {
    let config = ReportConfig::default();
    let (canvas, summary) = record(&sample_document(), &config, &dejavu());
    assert!(summary.pages >= 2);
    assert_no_overlap(&summary);
    assert_within_margin(&canvas, &config);
}

#[test]
fn embedded_faces_are_written_with_unicode_maps() {
    let mut config = ReportConfig::default();
    config.compress(false);
    let report = generate_pdf(&sample_document(), &config, &dejavu()).expect("can generate");

    let text = String::from_utf8_lossy(&report.bytes);
    assert_eq!(text.matches("/Type0").count(), 2);
    assert_eq!(text.matches("/ToUnicode").count(), 2);
    assert_eq!(text.matches("/FontFile2").count(), 2);
    assert!(text.contains("/Identity-H"));
    assert!(!text.contains("/Helvetica"));
}
