//! Turns a [NotificationDocument] into a finished, paginated PDF.
//!
//! [render_notification] walks the fixed order of a shutdown notice (banner, dates,
//! affected areas, DMAs, details, contractors and actions, technical fields, focal
//! points, footer) against any [Canvas]. [generate_pdf] runs it against a [PdfCanvas]
//! and serializes the result; [save_report] puts the bytes on disk.

mod grid;
mod pdf_canvas;

pub use grid::*;
pub use pdf_canvas::*;

use crate::config::ReportConfig;
use crate::layout::{
    render_section, render_twin_columns, split_columns, Area, Canvas, Column, ContinuationPolicy,
    FontWeight, Measure, PageState, Section, SectionBox, SectionExtent, TextStyle, TwinExtent,
};
use crate::model::{format_date, or_placeholder, NotificationDocument};
use crate::typeface::Typeface;
use crate::units::{Mm, Pt};
use crate::ReportError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

const BANNER_TITLE: &str = "WATER SHUTDOWN NOTIFICATION";

/// Where everything ended up after a layout pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutSummary {
    /// Number of pages the report needed
    pub pages: usize,
    /// Every box that was drawn, in drawing order
    pub boxes: Vec<SectionBox>,
}

impl LayoutSummary {
    fn add(&mut self, extent: SectionExtent) {
        self.boxes.extend(extent.boxes);
    }

    fn add_twin(&mut self, extent: TwinExtent) {
        self.add(extent.left);
        self.add(extent.right);
    }

    /// The boxes drawn on one page
    pub fn boxes_on(&self, page: usize) -> impl Iterator<Item = &SectionBox> {
        self.boxes.iter().filter(move |b| b.page == page)
    }
}

/// A generated report, ready to be offered for download or saved
#[derive(Debug, Clone)]
pub struct Report {
    /// See [report_file_name]
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub summary: LayoutSummary,
}

/// Shared state of one layout pass
struct Flow<'a, C: Canvas + ?Sized, M: Measure + ?Sized> {
    canvas: &'a mut C,
    measure: &'a M,
    config: &'a ReportConfig,
    state: PageState,
    summary: LayoutSummary,
}

impl<C: Canvas + ?Sized, M: Measure + ?Sized> Flow<'_, C, M> {
    fn span(&self) -> (Mm, Mm) {
        self.config.content_span()
    }

    fn space(&mut self) {
        self.state.cursor_y += self.config.section_spacing;
    }

    fn section(&mut self, section: Section) -> Result<(), ReportError> {
        let (x, width) = self.span();
        let extent = render_section(
            &mut *self.canvas,
            self.measure,
            &self.config.box_style,
            &self.config.badge_style,
            &mut self.state,
            &section,
            x,
            width,
        )?;
        self.summary.add(extent);
        self.space();
        Ok(())
    }

    fn twin(&mut self, left: Section, right: Section) -> Result<(), ReportError> {
        let (x, width) = self.span();
        let ((lx, lw), (rx, rw)) = split_columns(x, width, self.config.column_gap);
        let left = left.with_min_height(self.config.twin_box_height);
        let right = right.with_min_height(self.config.twin_box_height);
        let extent = render_twin_columns(
            &mut *self.canvas,
            self.measure,
            &self.config.box_style,
            &self.config.badge_style,
            &mut self.state,
            Column::new(&left, lx, lw),
            Column::new(&right, rx, rw),
            self.config.section_spacing,
        )?;
        self.summary.add_twin(extent);
        Ok(())
    }

    fn text(&self, title: &str, text: &str) -> Section {
        Section::text(title, text).with_continuation(self.config.text_continuation)
    }

    fn list(&self, title: &str, items: &[String]) -> Section {
        Section::list(title, items.to_vec()).with_continuation(self.config.list_continuation)
    }

    fn badges(&self, title: &str, badges: &[String]) -> Section {
        Section::badges(title, badges.to_vec()).with_continuation(self.config.list_continuation)
    }

    fn banner(&mut self, doc: &NotificationDocument) {
        let (x, width) = self.span();
        let height = self.config.banner_height;
        let palette = &self.config.palette;
        self.state.activate(&mut *self.canvas);
        let top = self.state.advance(height, &mut *self.canvas);

        self.canvas.draw_rect(
            Area::new(x, top, width, height),
            Some(palette.banner_fill),
            None,
        );
        self.canvas.draw_text(
            x + Mm(4.0),
            top + height * 0.45,
            BANNER_TITLE,
            &TextStyle::new(Pt(14.0), FontWeight::Bold, palette.banner_text),
        );
        let placeholder = self.config.box_style.placeholder.as_str();
        let subtitle = format!(
            "Event ID: {}    Type: {}",
            or_placeholder(&doc.event_id, placeholder),
            or_placeholder(&doc.event_type, placeholder)
        );
        self.canvas.draw_text(
            x + Mm(4.0),
            top + height * 0.78,
            &subtitle,
            &TextStyle::new(Pt(9.0), FontWeight::Regular, palette.banner_text),
        );

        self.summary.boxes.push(SectionBox {
            title: BANNER_TITLE.to_string(),
            page: self.state.page_index,
            x,
            width,
            start_y: top,
            end_y: top + height,
        });
        self.space();
    }

    fn footer(&mut self, doc: &NotificationDocument) {
        let (x, width) = self.span();
        let style = &self.config.box_style;
        let placeholder = style.placeholder.as_str();
        let lines = [
            format!(
                "Initiated by: {}",
                or_placeholder(&doc.initiated_by, placeholder)
            ),
            "This notice is generated from the shutdown notification record.".to_string(),
        ];
        let height = style.line_height * (lines.len() as f32 + 1.0);
        let text_style = TextStyle::new(
            Pt(8.0),
            FontWeight::Regular,
            self.config.palette.muted_text,
        );

        self.state.activate(&mut *self.canvas);
        let top = self.state.advance(height, &mut *self.canvas);
        let rule_y = top + style.line_height / 2.0;
        self.canvas.draw_line(
            (x, rule_y),
            (x + width, rule_y),
            self.config.palette.rule,
            style.border_width,
        );
        let mut row_top = top + style.line_height;
        for line in lines.iter() {
            self.canvas
                .draw_text(x, style.baseline(row_top), line, &text_style);
            row_top += style.line_height;
        }

        self.summary.boxes.push(SectionBox {
            title: "Footer".to_string(),
            page: self.state.page_index,
            x,
            width,
            start_y: top,
            end_y: top + height,
        });
    }

    /// "Page i of n" in the top margin of every page, right aligned
    fn number_pages(&mut self) -> Result<(), ReportError> {
        let pages = self.canvas.page_count();
        let (page_width, _) = self.canvas.page_size();
        let style = TextStyle::new(
            Pt(8.0),
            FontWeight::Regular,
            self.config.palette.muted_text,
        );
        let y = self.config.margins.top * 0.6;
        for page in 0..pages {
            let label = format!("Page {} of {}", page + 1, pages);
            let width = self.measure.text_width(&label, style.size, style.weight)?;
            self.canvas.goto_page(page);
            self.canvas
                .draw_text(page_width - self.config.margins.right - width, y, &label, &style);
        }
        Ok(())
    }
}

/// Lay a notification out onto `canvas`, measuring text with `measure`.
///
/// Missing fields are drawn as placeholders. The only errors are measurement failures,
/// which abort the whole layout.
pub fn render_notification<C: Canvas + ?Sized, M: Measure + ?Sized>(
    canvas: &mut C,
    measure: &M,
    config: &ReportConfig,
    doc: &NotificationDocument,
) -> Result<LayoutSummary, ReportError> {
    log::debug!("laying out shutdown notice '{}'", doc.event_id);
    let placeholder = config.box_style.placeholder.as_str();
    let mut flow = Flow {
        canvas,
        measure,
        config,
        state: PageState::new(config.page_size_mm(), &config.margins),
        summary: LayoutSummary::default(),
    };

    flow.banner(doc);

    let start = format_date(doc.start_date_time, &config.date_format, placeholder);
    let end = format_date(doc.end_date_time, &config.date_format, placeholder);
    let (x, width) = flow.span();
    let ((lx, lw), (rx, rw)) = split_columns(x, width, config.column_gap);
    let start = Section::text("Start Date & Time", start)
        .with_continuation(ContinuationPolicy::ContinueSilently)
        .with_min_height(config.date_box_height);
    let end = Section::text("End Date & Time", end)
        .with_continuation(ContinuationPolicy::ContinueSilently)
        .with_min_height(config.date_box_height);
    let dates = render_twin_columns(
        &mut *flow.canvas,
        flow.measure,
        &config.box_style,
        &config.badge_style,
        &mut flow.state,
        Column::new(&start, lx, lw),
        Column::new(&end, rx, rw),
        config.section_spacing,
    )?;
    flow.summary.add_twin(dates);

    flow.twin(
        flow.list("Affected Willayats", &doc.affected_areas),
        flow.text("Location Details", &doc.location_details),
    )?;

    flow.section(flow.list("Affected DMAs", &doc.affected_sub_areas))?;

    flow.twin(
        flow.text("Notification Details", &doc.notification_details),
        flow.text("Reason for Shutdown", &doc.reason_for_shutdown),
    )?;

    flow.twin(
        flow.list("Contractors", &doc.contractors),
        flow.badges("Actions Required", &doc.actions_required),
    )?;

    let extent = render_field_grid(
        &mut *flow.canvas,
        flow.measure,
        config,
        &mut flow.state,
        "Technical Details",
        &[
            ("Valve Lock", doc.valve_lock.as_str()),
            ("Pipeline Size", doc.size_of_pipeline.as_str()),
            ("Pipeline Type", doc.type_of_pipeline.as_str()),
        ],
        x,
        width,
    )?;
    flow.summary.add(extent);
    flow.space();

    let rows: Vec<Vec<&str>> = doc
        .focal_points
        .iter()
        .map(|fp| vec![fp.name.as_str(), fp.email.as_str(), fp.phone.as_str()])
        .collect();
    let extent = render_table(
        &mut *flow.canvas,
        flow.measure,
        config,
        &mut flow.state,
        "Focal Points",
        &[("Name", 3.0), ("Email", 4.0), ("Phone", 3.0)],
        &rows,
        x,
        width,
    )?;
    flow.summary.add(extent);
    flow.space();

    flow.footer(doc);
    flow.number_pages()?;

    flow.summary.pages = flow.canvas.page_count();
    Ok(flow.summary)
}

/// Lay out and serialize a notification as a PDF, set in `typeface`
pub fn generate_pdf(
    doc: &NotificationDocument,
    config: &ReportConfig,
    typeface: &Typeface,
) -> Result<Report, ReportError> {
    let started = Instant::now();

    let mut canvas = PdfCanvas::new(
        config.page_size,
        config.margins.clone(),
        config.box_style.border_width,
    );
    let summary = render_notification(&mut canvas, typeface, config, doc)?;

    let mut document = canvas.into_document();
    document.compress = config.compress;
    let mut info = config.info.clone();
    info.title(format!("Water Shutdown Notification {}", doc.event_id));
    if info.subject.is_none() {
        info.subject("Water shutdown notification");
    }
    document.set_info(info);

    let mut bytes = Vec::new();
    document.write(typeface, &mut bytes)?;

    log::info!(
        "generated shutdown notice '{}': {} pages, {} bytes in {}ms",
        doc.event_id,
        summary.pages,
        bytes.len(),
        started.elapsed().as_millis()
    );

    Ok(Report {
        file_name: report_file_name(&doc.event_id),
        bytes,
        summary,
    })
}

/// The file name a report is offered under: `Shutdown_<eventId>.pdf`. Characters that
/// can't appear in a file name are replaced with `_`.
pub fn report_file_name(event_id: &str) -> String {
    let event_id = event_id.trim();
    if event_id.is_empty() {
        return "Shutdown_unknown.pdf".to_string();
    }
    let safe: String = event_id
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect();
    format!("Shutdown_{safe}.pdf")
}

/// Write a report into `dir` under its file name, returning the path written.
///
/// The bytes go to a uniquely named temporary file in `dir` which is then renamed into
/// place, so a reader never sees a partially written report and concurrent saves never
/// share a temporary file. The temporary file is removed if anything fails.
pub fn save_report<P: AsRef<Path>>(report: &Report, dir: P) -> Result<PathBuf, ReportError> {
    let dir = dir.as_ref();
    let path = dir.join(&report.file_name);

    let mut partial = tempfile::Builder::new()
        .prefix(".shutdown-")
        .suffix(".part")
        .tempfile_in(dir)?;
    partial.write_all(&report.bytes)?;
    partial.as_file().sync_all()?;
    partial.persist(&path).map_err(|e| e.error)?;

    log::debug!("saved {} ({} bytes)", path.display(), report.bytes.len());
    Ok(path)
}
