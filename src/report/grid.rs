//! Boxes made of cells: the technical fields grid and the focal points table.

use crate::colour::Colour;
use crate::config::ReportConfig;
use crate::layout::{
    Area, BoxStyle, Canvas, FontWeight, Measure, PageState, SectionBox, SectionExtent, TextStyle,
};
use crate::units::Mm;
use crate::ReportError;

/// One cell's worth of wrapped text
struct Cell {
    x: Mm,
    width: Mm,
    lines: Vec<String>,
}

fn wrap_cells<M: Measure + ?Sized>(
    measure: &M,
    style: &BoxStyle,
    x: Mm,
    widths: &[Mm],
    values: &[&str],
    weight: FontWeight,
) -> Result<Vec<Cell>, ReportError> {
    let mut cells = Vec::with_capacity(widths.len());
    let mut left = x;
    for (width, value) in widths.iter().zip(values.iter()) {
        let mut lines = measure.wrap(
            value,
            *width - style.padding * 2.0,
            style.body_size,
            weight,
        )?;
        if lines.is_empty() {
            lines.push(String::new());
        }
        cells.push(Cell {
            x: left,
            width: *width,
            lines,
        });
        left += *width;
    }
    Ok(cells)
}

fn with_placeholders<'a>(values: &[&'a str], style: &'a BoxStyle) -> Vec<&'a str> {
    values
        .iter()
        .map(|value| {
            if value.trim().is_empty() {
                style.placeholder.as_str()
            } else {
                *value
            }
        })
        .collect()
}

fn line_count(cells: &[Cell]) -> usize {
    cells.iter().map(|c| c.lines.len()).max().unwrap_or(1)
}

/// Height of `lines` lines of cell text plus padding above and below
fn lines_height(lines: usize, style: &BoxStyle) -> Mm {
    style.line_height * lines as f32 + style.padding
}

/// Draw lines `first..first + count` of every cell as one row `height` tall
#[allow(clippy::too_many_arguments)]
fn draw_cells<C: Canvas + ?Sized>(
    canvas: &mut C,
    style: &BoxStyle,
    cells: &[Cell],
    (first, count): (usize, usize),
    y: Mm,
    height: Mm,
    text_style: &TextStyle,
    fill: Option<Colour>,
) {
    for cell in cells.iter() {
        canvas.draw_rect(
            Area::new(cell.x, y, cell.width, height),
            fill,
            Some(style.border),
        );
        let mut row_top = y + style.padding / 2.0;
        for line in cell.lines.iter().skip(first).take(count) {
            if !line.is_empty() {
                canvas.draw_text(
                    cell.x + style.padding,
                    style.baseline(row_top),
                    line,
                    text_style,
                );
            }
            row_top += style.line_height;
        }
    }
}

fn draw_title_bar<C: Canvas + ?Sized>(
    canvas: &mut C,
    style: &BoxStyle,
    title: &str,
    area: Area,
) {
    canvas.draw_rect(area, Some(style.title_fill), None);
    canvas.draw_text(
        area.x + style.padding,
        area.y + area.height * 0.68,
        title,
        &style.title_style(),
    );
}

/// A titled box with a shaded header row, filled row by row and carried across pages.
///
/// Every page the box reaches opens with a title bar (`"<title> (continued)"` after the
/// first) and the header row. A row that doesn't fit below earlier rows moves to the
/// next page; a row too tall for a fresh page is split between lines.
struct CellBox<'a> {
    style: &'a BoxStyle,
    header_fill: Colour,
    title: &'a str,
    x: Mm,
    width: Mm,
    header: Vec<Cell>,
    boxes: Vec<SectionBox>,
    segment_top: Mm,
    body_top: Mm,
}

impl CellBox<'_> {
    fn header_height(&self) -> Mm {
        lines_height(line_count(&self.header), self.style)
    }

    /// Space the title bar, header and `first_row` need to start on this page
    fn opening_height(&self, first_row: Mm) -> Mm {
        self.style.title_height + self.header_height() + first_row
    }

    fn open<C: Canvas + ?Sized>(&mut self, canvas: &mut C, state: &mut PageState, continued: bool) {
        let style = self.style;
        let top = state.cursor_y;
        let (bar, label) = if continued {
            (
                style.continued_title_height,
                format!("{} (continued)", self.title),
            )
        } else {
            (style.title_height, self.title.to_string())
        };
        draw_title_bar(canvas, style, &label, Area::new(self.x, top, self.width, bar));

        let header_height = self.header_height();
        let header_style = TextStyle::new(style.body_size, FontWeight::Bold, style.title_colour);
        draw_cells(
            canvas,
            style,
            &self.header,
            (0, line_count(&self.header)),
            top + bar,
            header_height,
            &header_style,
            Some(self.header_fill),
        );
        self.segment_top = top;
        self.body_top = top + bar + header_height;
        state.cursor_y = self.body_top;
    }

    fn close<C: Canvas + ?Sized>(&mut self, canvas: &mut C, state: &PageState) {
        canvas.draw_rect(
            Area::new(
                self.x,
                self.segment_top,
                self.width,
                state.cursor_y - self.segment_top,
            ),
            None,
            Some(self.style.border),
        );
        self.boxes.push(SectionBox {
            title: self.title.to_string(),
            page: state.page_index,
            x: self.x,
            width: self.width,
            start_y: self.segment_top,
            end_y: state.cursor_y,
        });
    }

    fn row<C: Canvas + ?Sized>(&mut self, canvas: &mut C, state: &mut PageState, cells: &[Cell]) {
        let style = self.style;
        let total = line_count(cells);
        let mut first = 0;
        while first < total {
            let left = total - first;
            let height = lines_height(left, style);
            let count = if state.fits(height) {
                left
            } else if state.cursor_y > self.body_top {
                self.close(canvas, state);
                state.break_page(canvas);
                self.open(canvas, state, true);
                continue;
            } else {
                // at least one line, or a page too short for any would never finish
                let room = state.limit() - state.cursor_y - style.padding;
                ((room.0 / style.line_height.0).floor().max(1.0) as usize).min(left)
            };
            let height = lines_height(count, style);
            let y = state.cursor_y;
            draw_cells(
                canvas,
                style,
                cells,
                (first, count),
                y,
                height,
                &style.body_style(),
                None,
            );
            state.cursor_y = y + height;
            first += count;
        }
    }

    fn finish<C: Canvas + ?Sized>(mut self, canvas: &mut C, state: &PageState) -> SectionExtent {
        self.close(canvas, state);
        let height = self.boxes.iter().map(SectionBox::height).sum();
        SectionExtent {
            boxes: self.boxes,
            height,
            end_page: state.page_index,
            end_y: state.cursor_y,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_cells<C: Canvas + ?Sized>(
    canvas: &mut C,
    config: &ReportConfig,
    state: &mut PageState,
    title: &str,
    header: Vec<Cell>,
    body: &[Vec<Cell>],
    x: Mm,
    width: Mm,
) -> SectionExtent {
    let style = &config.box_style;
    let mut cells = CellBox {
        style,
        header_fill: config.palette.header_fill,
        title,
        x,
        width,
        header,
        boxes: Vec::new(),
        segment_top: state.cursor_y,
        body_top: state.cursor_y,
    };

    let first_row = body
        .first()
        .map(|row| lines_height(line_count(row), style))
        .unwrap_or_default();
    state.activate(canvas);
    state.check_page_break(cells.opening_height(first_row), canvas);
    cells.open(canvas, state, false);
    for row in body.iter() {
        cells.row(canvas, state, row);
    }
    cells.finish(canvas, state)
}

/// Render a titled box holding one row of equal-width cells, a shaded label above each
/// wrapped value. The value row is as tall as its tallest cell. The whole grid moves to
/// the next page if it doesn't fit; one too tall for any page is split between lines
/// under a repeated title and label row.
#[allow(clippy::too_many_arguments)]
pub fn render_field_grid<C: Canvas + ?Sized, M: Measure + ?Sized>(
    canvas: &mut C,
    measure: &M,
    config: &ReportConfig,
    state: &mut PageState,
    title: &str,
    fields: &[(&str, &str)],
    x: Mm,
    width: Mm,
) -> Result<SectionExtent, ReportError> {
    let style = &config.box_style;
    let column = width / fields.len().max(1) as f32;
    let widths = vec![column; fields.len()];
    let labels: Vec<&str> = fields.iter().map(|(label, _)| *label).collect();
    let values: Vec<&str> = fields.iter().map(|(_, value)| *value).collect();

    let labels = wrap_cells(measure, style, x, &widths, &labels, FontWeight::Bold)?;
    let values = wrap_cells(
        measure,
        style,
        x,
        &widths,
        &with_placeholders(&values, style),
        FontWeight::Regular,
    )?;
    Ok(render_cells(
        canvas,
        config,
        state,
        title,
        labels,
        &[values],
        x,
        width,
    ))
}

/// Render a titled table with a header row and one row per entry in `rows`.
///
/// A row that doesn't fit closes the table on this page; it continues on the next
/// page under a `"<title> (continued)"` bar with the header row repeated. Only a row
/// taller than a whole page is split. With no rows at all, one row of placeholders is
/// drawn.
#[allow(clippy::too_many_arguments)]
pub fn render_table<C: Canvas + ?Sized, M: Measure + ?Sized>(
    canvas: &mut C,
    measure: &M,
    config: &ReportConfig,
    state: &mut PageState,
    title: &str,
    columns: &[(&str, f32)],
    rows: &[Vec<&str>],
    x: Mm,
    width: Mm,
) -> Result<SectionExtent, ReportError> {
    let style = &config.box_style;
    let total: f32 = columns.iter().map(|(_, share)| *share).sum();
    let widths: Vec<Mm> = columns
        .iter()
        .map(|(_, share)| width * (*share / total))
        .collect();

    let headers: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    let header = wrap_cells(measure, style, x, &widths, &headers, FontWeight::Bold)?;

    let placeholder_row = vec![style.placeholder.as_str(); columns.len()];
    let rows: Vec<&[&str]> = if rows.is_empty() {
        vec![placeholder_row.as_slice()]
    } else {
        rows.iter().map(Vec::as_slice).collect()
    };
    let body = rows
        .iter()
        .map(|row| {
            wrap_cells(
                measure,
                style,
                x,
                &widths,
                &with_placeholders(row, style),
                FontWeight::Regular,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(render_cells(
        canvas, config, state, title, header, &body, x, width,
    ))
}
