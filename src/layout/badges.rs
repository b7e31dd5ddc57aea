use crate::layout::{Area, BadgeStyle, Canvas, Measure, PageState};
use crate::units::Mm;
use crate::ReportError;

/// A short text chip and its measured width (text plus padding on both sides)
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub text: String,
    pub width: Mm,
}

/// A badge placed on a row, `offset` from the row's left edge
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBadge {
    pub badge: Badge,
    pub offset: Mm,
}

/// One line of badges
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BadgeRow {
    pub badges: Vec<PlacedBadge>,
}

impl BadgeRow {
    /// Distance from the row's left edge to the right edge of its last badge
    pub fn width(&self) -> Mm {
        self.badges
            .last()
            .map(|placed| placed.offset + placed.badge.width)
            .unwrap_or_default()
    }
}

/// Flow badges left to right into rows no wider than `width`.
///
/// Badges keep their order. A badge that would cross the right edge starts a new row;
/// one that ends exactly on the edge stays. A badge wider than `width` by itself gets a
/// row of its own and is not clipped. Blank badges are skipped.
pub fn place_badges<M: Measure + ?Sized>(
    measure: &M,
    badges: &[String],
    width: Mm,
    style: &BadgeStyle,
) -> Result<Vec<BadgeRow>, ReportError> {
    let mut rows: Vec<BadgeRow> = Vec::new();
    let mut row = BadgeRow::default();
    let mut cursor_x = Mm(0.0);

    for text in badges.iter().map(|text| text.trim()).filter(|text| !text.is_empty()) {
        let text_width = measure.text_width(text, style.text_size, style.text_style().weight)?;
        let badge = Badge {
            text: text.to_string(),
            width: text_width + style.padding * 2.0,
        };

        if !row.badges.is_empty() && cursor_x + badge.width > width {
            rows.push(std::mem::take(&mut row));
            cursor_x = Mm(0.0);
        }
        if badge.width > width {
            log::warn!(
                "badge '{}' is {}mm wide and overflows its {}mm column",
                badge.text,
                badge.width,
                width
            );
        }

        let advance = badge.width + style.gap;
        row.badges.push(PlacedBadge {
            badge,
            offset: cursor_x,
        });
        cursor_x += advance;
    }

    if !row.badges.is_empty() {
        rows.push(row);
    }

    Ok(rows)
}

/// Draw one row of badges with its top edge at `y`
pub(crate) fn draw_badge_row<C: Canvas + ?Sized>(
    canvas: &mut C,
    row: &BadgeRow,
    x: Mm,
    y: Mm,
    style: &BadgeStyle,
) {
    let chip_height = style.chip_height();
    let text_style = style.text_style();
    for placed in row.badges.iter() {
        let left = x + placed.offset;
        canvas.draw_rect(
            Area::new(left, y, placed.badge.width, chip_height),
            Some(style.fill),
            None,
        );
        canvas.draw_text(
            left + style.padding,
            y + chip_height * 0.7,
            &placed.badge.text,
            &text_style,
        );
    }
}

/// Lay out and draw a run of badges at the cursor, `width` wide starting at `x`.
///
/// Rows break to a new page when they would cross the bottom margin. Returns the
/// height consumed, which is the number of rows times the row height; the cursor ends
/// up below the last row.
pub fn render_badges<C: Canvas + ?Sized, M: Measure + ?Sized>(
    canvas: &mut C,
    measure: &M,
    state: &mut PageState,
    badges: &[String],
    x: Mm,
    width: Mm,
    style: &BadgeStyle,
) -> Result<Mm, ReportError> {
    let rows = place_badges(measure, badges, width, style)?;
    state.activate(canvas);
    for row in rows.iter() {
        let y = state.advance(style.row_height, canvas);
        draw_badge_row(canvas, row, x, y, style);
    }
    Ok(style.row_height * rows.len() as f32)
}
