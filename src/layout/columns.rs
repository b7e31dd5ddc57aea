use crate::layout::section::{render_prepared, PreparedSection};
use crate::layout::{BadgeStyle, BoxStyle, Canvas, Measure, PageState, Section, SectionExtent};
use crate::units::Mm;
use crate::ReportError;

/// A section and the horizontal slot it renders into
#[derive(Debug, Clone, Copy)]
pub struct Column<'s> {
    pub section: &'s Section,
    pub x: Mm,
    pub width: Mm,
}

impl<'s> Column<'s> {
    pub fn new(section: &'s Section, x: Mm, width: Mm) -> Column<'s> {
        Column { section, x, width }
    }
}

/// Where a pair of side-by-side sections ended up
#[derive(Debug, Clone, PartialEq)]
pub struct TwinExtent {
    pub left: SectionExtent,
    pub right: SectionExtent,
    /// Page the shared cursor continues on
    pub end_page: usize,
    /// Shared cursor after the pair, spacing included
    pub end_y: Mm,
}

/// Split `width` starting at `x` into two equal columns `gap` apart
pub fn split_columns(x: Mm, width: Mm, gap: Mm) -> ((Mm, Mm), (Mm, Mm)) {
    let column = (width - gap) / 2.0;
    ((x, column), (x + column + gap, column))
}

/// Render two sections side by side, both starting at the cursor.
///
/// If either column's opening (title bar and first block) won't fit, both move to the
/// next page together so they keep a common top edge. After that each column paginates
/// on its own. The shared cursor then continues `spacing` below whichever column
/// finished further through the document, on that column's page. The other column's
/// last box stays closed where it ended.
#[allow(clippy::too_many_arguments)]
pub fn render_twin_columns<C: Canvas + ?Sized, M: Measure + ?Sized>(
    canvas: &mut C,
    measure: &M,
    style: &BoxStyle,
    badge_style: &BadgeStyle,
    state: &mut PageState,
    left: Column,
    right: Column,
    spacing: Mm,
) -> Result<TwinExtent, ReportError> {
    let left = PreparedSection::prepare(
        measure,
        style,
        badge_style,
        left.section,
        left.x,
        left.width,
    )?;
    let right = PreparedSection::prepare(
        measure,
        style,
        badge_style,
        right.section,
        right.x,
        right.width,
    )?;

    let usable = state.usable_height();
    let opening = left
        .opening_height(style, badge_style, usable)
        .max(right.opening_height(style, badge_style, usable));
    state.activate(canvas);
    state.check_page_break(opening, canvas);

    let mut left_state = *state;
    let left_extent = render_prepared(canvas, style, badge_style, &mut left_state, &left);
    let mut right_state = *state;
    let right_extent = render_prepared(canvas, style, badge_style, &mut right_state, &right);

    *state = left_state.furthest(right_state);
    state.cursor_y += spacing;
    state.activate(canvas);

    Ok(TwinExtent {
        left: left_extent,
        right: right_extent,
        end_page: state.page_index,
        end_y: state.cursor_y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::measure::tests::FixedWidth;
    use crate::layout::{Margins, RecordingCanvas, SectionContent};

    const A4: (Mm, Mm) = (Mm(210.0), Mm(297.0));

    fn measure() -> FixedWidth {
        FixedWidth {
            char_width: Mm(2.0),
        }
    }

    fn setup() -> (RecordingCanvas, PageState) {
        (
            RecordingCanvas::new(A4),
            PageState::new(A4, &Margins::all(Mm(15.0))),
        )
    }

    fn boxed(title: &str, height: Mm) -> Section {
        Section::text(title, "x").with_min_height(height)
    }

    fn render(
        canvas: &mut RecordingCanvas,
        state: &mut PageState,
        left: &Section,
        right: &Section,
    ) -> TwinExtent {
        let ((lx, lw), (rx, rw)) = split_columns(Mm(15.0), Mm(180.0), Mm(4.0));
        render_twin_columns(
            canvas,
            &measure(),
            &BoxStyle::default(),
            &BadgeStyle::default(),
            state,
            Column::new(left, lx, lw),
            Column::new(right, rx, rw),
            Mm(4.0),
        )
        .expect("can render")
    }

    #[test]
    fn columns_split_evenly() {
        let ((lx, lw), (rx, rw)) = split_columns(Mm(15.0), Mm(180.0), Mm(4.0));
        assert_eq!((lx, lw), (Mm(15.0), Mm(88.0)));
        assert_eq!((rx, rw), (Mm(107.0), Mm(88.0)));
    }

    #[test]
    fn taller_column_governs_either_way_round() {
        let short = boxed("Willayats", Mm(40.0));
        let tall = boxed("Location", Mm(90.0));

        let (mut canvas, mut state) = setup();
        state.cursor_y = Mm(50.0);
        let extent = render(&mut canvas, &mut state, &short, &tall);
        assert_eq!(extent.left.height, Mm(40.0));
        assert_eq!(extent.right.height, Mm(90.0));
        assert_eq!(state.cursor_y, Mm(50.0 + 90.0 + 4.0));

        let (mut canvas, mut state) = setup();
        state.cursor_y = Mm(50.0);
        render(&mut canvas, &mut state, &tall, &short);
        assert_eq!(state.cursor_y, Mm(50.0 + 90.0 + 4.0));
    }

    #[test]
    fn both_columns_share_a_start() {
        let (mut canvas, mut state) = setup();
        state.cursor_y = Mm(50.0);
        let extent = render(
            &mut canvas,
            &mut state,
            &boxed("Start", Mm(20.0)),
            &boxed("End", Mm(30.0)),
        );
        assert_eq!(extent.left.boxes[0].start_y, Mm(50.0));
        assert_eq!(extent.right.boxes[0].start_y, Mm(50.0));
        assert!(!extent.left.boxes[0]
            .area()
            .overlaps(&extent.right.boxes[0].area()));
    }

    #[test]
    fn continues_from_the_column_on_the_later_page() {
        let (mut canvas, mut state) = setup();
        state.cursor_y = Mm(200.0);
        let long = Section::new(
            "DMAs",
            SectionContent::List((1..=40).map(|i| format!("DMA {i}")).collect()),
        );
        let extent = render(&mut canvas, &mut state, &boxed("Reason", Mm(20.0)), &long);

        assert_eq!(extent.left.end_page, 0);
        assert_eq!(extent.left.boxes.len(), 1);
        assert_eq!(extent.right.end_page, 1);
        assert_eq!(extent.end_page, 1);
        assert_eq!(state.page_index, 1);
        assert_eq!(state.cursor_y, extent.right.end_y + Mm(4.0));
        assert_eq!(canvas.page_index(), 1);
    }

    #[test]
    fn pair_moves_together_when_one_opening_does_not_fit() {
        let (mut canvas, mut state) = setup();
        state.cursor_y = Mm(250.0);
        let extent = render(
            &mut canvas,
            &mut state,
            &boxed("Start", Mm(20.0)),
            &boxed("End", Mm(60.0)),
        );
        assert!(canvas.ops(0).is_empty());
        assert_eq!(extent.left.boxes[0].page, 1);
        assert_eq!(extent.right.boxes[0].page, 1);
        assert_eq!(extent.left.boxes[0].start_y, Mm(15.0));
    }
}
