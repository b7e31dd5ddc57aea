//! Titled, bordered boxes that grow down the page and split across pages.

use crate::layout::badges::{draw_badge_row, place_badges, BadgeRow};
use crate::layout::{Area, BadgeStyle, BoxStyle, Canvas, Measure, PageState};
use crate::units::Mm;
use crate::ReportError;

/// What a section box holds
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    /// A paragraph (or several, separated by newlines) of wrapped text
    Text(String),
    /// A bulleted list, one bullet per entry
    List(Vec<String>),
    /// Badge chips flowing left to right
    Badges(Vec<String>),
}

/// What to draw at the top of a box when its content continues on a new page
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ContinuationPolicy {
    /// Draw a condensed title bar reading `"<title> (continued)"`
    #[default]
    RepeatTitle,
    /// Carry on straight away with no header
    ContinueSilently,
}

/// A section to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub content: SectionContent,
    pub continuation: ContinuationPolicy,
    /// The first box of the section is never shorter than this
    pub min_height: Mm,
}

impl Section {
    pub fn new<S: ToString>(title: S, content: SectionContent) -> Section {
        Section {
            title: title.to_string(),
            content,
            continuation: ContinuationPolicy::default(),
            min_height: Mm(0.0),
        }
    }

    pub fn text<S: ToString, T: ToString>(title: S, text: T) -> Section {
        Section::new(title, SectionContent::Text(text.to_string()))
    }

    pub fn list<S: ToString>(title: S, items: Vec<String>) -> Section {
        Section::new(title, SectionContent::List(items))
    }

    pub fn badges<S: ToString>(title: S, badges: Vec<String>) -> Section {
        Section::new(title, SectionContent::Badges(badges))
    }

    pub fn with_continuation(mut self, continuation: ContinuationPolicy) -> Section {
        self.continuation = continuation;
        self
    }

    pub fn with_min_height(mut self, min_height: Mm) -> Section {
        self.min_height = min_height;
        self
    }
}

/// One bordered box drawn on one page. A section that spans pages draws one box per
/// page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub title: String,
    pub page: usize,
    pub x: Mm,
    pub width: Mm,
    pub start_y: Mm,
    pub end_y: Mm,
}

impl SectionBox {
    pub fn height(&self) -> Mm {
        self.end_y - self.start_y
    }

    pub fn area(&self) -> Area {
        Area::new(self.x, self.start_y, self.width, self.height())
    }
}

/// Where a rendered section ended up
#[derive(Debug, Clone, PartialEq)]
pub struct SectionExtent {
    /// Boxes in page order; more than one when the content was split
    pub boxes: Vec<SectionBox>,
    /// Total height of all boxes
    pub height: Mm,
    pub end_page: usize,
    pub end_y: Mm,
}

#[derive(Debug, Clone)]
enum Row {
    Line { text: String, bullet: bool },
    Badges(BadgeRow),
}

/// Rows that should stay on the same page if at all possible
#[derive(Debug, Clone)]
struct Block {
    rows: Vec<Row>,
    keep_together: bool,
}

/// A section whose content has been measured and broken into rows, ready to be drawn
/// at any position with the width it was prepared for
#[derive(Debug, Clone)]
pub struct PreparedSection<'s> {
    section: &'s Section,
    x: Mm,
    width: Mm,
    blocks: Vec<Block>,
}

impl<'s> PreparedSection<'s> {
    /// Measure and wrap `section` for a box `width` wide with its left edge at `x`
    pub fn prepare<M: Measure + ?Sized>(
        measure: &M,
        style: &BoxStyle,
        badge_style: &BadgeStyle,
        section: &'s Section,
        x: Mm,
        width: Mm,
    ) -> Result<PreparedSection<'s>, ReportError> {
        let inner_width = width - style.padding * 2.0;
        let body = style.body_style();

        let mut blocks: Vec<Block> = match &section.content {
            SectionContent::Text(text) => measure
                .wrap(text, inner_width, body.size, body.weight)?
                .into_iter()
                .map(|text| Block {
                    rows: vec![Row::Line {
                        text,
                        bullet: false,
                    }],
                    keep_together: false,
                })
                .collect(),
            SectionContent::List(items) => {
                let mut blocks = Vec::with_capacity(items.len());
                for item in items.iter() {
                    let lines = measure.wrap(
                        item,
                        inner_width - style.bullet_indent,
                        body.size,
                        body.weight,
                    )?;
                    if lines.is_empty() {
                        continue;
                    }
                    blocks.push(Block {
                        rows: lines
                            .into_iter()
                            .enumerate()
                            .map(|(i, text)| Row::Line { text, bullet: i == 0 })
                            .collect(),
                        keep_together: true,
                    });
                }
                blocks
            }
            SectionContent::Badges(badges) => {
                place_badges(measure, badges, inner_width, badge_style)?
                    .into_iter()
                    .map(|row| Block {
                        rows: vec![Row::Badges(row)],
                        keep_together: false,
                    })
                    .collect()
            }
        };

        if blocks.is_empty() {
            blocks.push(Block {
                rows: vec![Row::Line {
                    text: style.placeholder.clone(),
                    bullet: false,
                }],
                keep_together: false,
            });
        }

        Ok(PreparedSection {
            section,
            x,
            width,
            blocks,
        })
    }

    fn block_height(block: &Block, style: &BoxStyle, badge_style: &BadgeStyle) -> Mm {
        block
            .rows
            .iter()
            .map(|row| row_height(row, style, badge_style))
            .sum()
    }

    /// The height that has to fit below the cursor before the box is started: the
    /// title bar, the first block and the padding around it, or the minimum height if
    /// that's larger. Never more than a whole page.
    pub fn opening_height(&self, style: &BoxStyle, badge_style: &BadgeStyle, usable: Mm) -> Mm {
        let first = self
            .blocks
            .first()
            .map(|block| PreparedSection::block_height(block, style, badge_style))
            .unwrap_or_default();
        (style.title_height + style.padding * 2.0 + first)
            .max(self.min_height(style))
            .min(usable)
    }

    fn min_height(&self, style: &BoxStyle) -> Mm {
        self.section.min_height.max(style.min_height)
    }
}

fn row_height(row: &Row, style: &BoxStyle, badge_style: &BadgeStyle) -> Mm {
    match row {
        Row::Line { .. } => style.line_height,
        Row::Badges(_) => badge_style.row_height,
    }
}

fn draw_title_bar<C: Canvas + ?Sized>(
    canvas: &mut C,
    style: &BoxStyle,
    title: &str,
    x: Mm,
    y: Mm,
    width: Mm,
    height: Mm,
) {
    canvas.draw_rect(Area::new(x, y, width, height), Some(style.title_fill), None);
    canvas.draw_text(
        x + style.padding,
        y + height * 0.68,
        title,
        &style.title_style(),
    );
}

fn draw_row<C: Canvas + ?Sized>(
    canvas: &mut C,
    style: &BoxStyle,
    badge_style: &BadgeStyle,
    row: &Row,
    x: Mm,
    y: Mm,
) {
    match row {
        Row::Line { text, bullet } => {
            let baseline = style.baseline(y);
            if *bullet {
                let centre_y = baseline - style.line_height * 0.22;
                canvas.draw_circle(
                    (x + style.bullet_radius * 2.0, centre_y),
                    style.bullet_radius,
                    style.text_colour,
                );
            }
            let text_x = if *bullet { x + style.bullet_indent } else { x };
            if !text.is_empty() {
                canvas.draw_text(text_x, baseline, text, &style.body_style());
            }
        }
        Row::Badges(row) => draw_badge_row(canvas, row, x, y, badge_style),
    }
}

/// Draw the border around one page's worth of a section and record it
fn close_box<C: Canvas + ?Sized>(
    canvas: &mut C,
    style: &BoxStyle,
    section: &Section,
    state: &PageState,
    boxes: &mut Vec<SectionBox>,
    (x, width): (Mm, Mm),
    (top, bottom): (Mm, Mm),
) {
    canvas.draw_rect(
        Area::new(x, top, width, bottom - top),
        None,
        Some(style.border),
    );
    boxes.push(SectionBox {
        title: section.title.clone(),
        page: state.page_index,
        x,
        width,
        start_y: top,
        end_y: bottom,
    });
}

/// Render a prepared section at the cursor. See [render_section].
pub fn render_prepared<C: Canvas + ?Sized>(
    canvas: &mut C,
    style: &BoxStyle,
    badge_style: &BadgeStyle,
    state: &mut PageState,
    prepared: &PreparedSection,
) -> SectionExtent {
    let section = prepared.section;
    let (x, width) = (prepared.x, prepared.width);
    let inner_x = x + style.padding;

    state.activate(canvas);
    let opening = prepared.opening_height(style, badge_style, state.usable_height());
    state.check_page_break(opening, canvas);

    let mut boxes: Vec<SectionBox> = Vec::new();
    let mut segment_top = state.cursor_y;
    draw_title_bar(
        canvas,
        style,
        &section.title,
        x,
        segment_top,
        width,
        style.title_height,
    );
    let mut y = segment_top + style.title_height + style.padding;
    let mut segment_has_rows = false;

    for block in prepared.blocks.iter() {
        let block_height = PreparedSection::block_height(block, style, badge_style);
        let mut keep_together = block.keep_together;

        for row in block.rows.iter() {
            let height = row_height(row, style, badge_style);
            let needed = if keep_together { block_height } else { height };

            if segment_has_rows && y + needed + style.padding > state.limit() {
                close_box(
                    canvas,
                    style,
                    section,
                    state,
                    &mut boxes,
                    (x, width),
                    (segment_top, y + style.padding),
                );
                state.break_page(canvas);
                segment_top = state.cursor_y;
                y = match section.continuation {
                    ContinuationPolicy::RepeatTitle => {
                        draw_title_bar(
                            canvas,
                            style,
                            &format!("{} (continued)", section.title),
                            x,
                            segment_top,
                            width,
                            style.continued_title_height,
                        );
                        segment_top + style.continued_title_height + style.padding
                    }
                    ContinuationPolicy::ContinueSilently => segment_top + style.padding,
                };
            }

            draw_row(canvas, style, badge_style, row, inner_x, y);
            y += height;
            segment_has_rows = true;
            // whatever is left of a block that didn't fit on a fresh page is split
            // row by row
            keep_together = false;
        }
    }

    let mut bottom = y + style.padding;
    if boxes.is_empty() {
        bottom = bottom.max((segment_top + prepared.min_height(style)).min(state.limit()));
    }
    close_box(
        canvas,
        style,
        section,
        state,
        &mut boxes,
        (x, width),
        (segment_top, bottom),
    );
    state.cursor_y = bottom;

    let height = boxes.iter().map(SectionBox::height).sum();
    SectionExtent {
        boxes,
        height,
        end_page: state.page_index,
        end_y: bottom,
    }
}

/// Render a titled box at the cursor, `width` wide with its left edge at `x`.
///
/// The box starts on a new page if its title bar and first block don't fit. Text is
/// wrapped to the inner width; list entries get a bullet each and are kept together
/// on one page; badges flow into rows. When the next row would cross the bottom
/// margin the box is closed where it is, the cursor moves to the next page and the
/// content carries on below a continuation header (or none, depending on the
/// section's [ContinuationPolicy]). Empty content draws the placeholder line, and the
/// first box is never shorter than the section's `min_height`.
///
/// The cursor ends just below the last box.
#[allow(clippy::too_many_arguments)]
pub fn render_section<C: Canvas + ?Sized, M: Measure + ?Sized>(
    canvas: &mut C,
    measure: &M,
    style: &BoxStyle,
    badge_style: &BadgeStyle,
    state: &mut PageState,
    section: &Section,
    x: Mm,
    width: Mm,
) -> Result<SectionExtent, ReportError> {
    let prepared = PreparedSection::prepare(measure, style, badge_style, section, x, width)?;
    Ok(render_prepared(canvas, style, badge_style, state, &prepared))
}
