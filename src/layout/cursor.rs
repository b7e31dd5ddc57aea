use crate::layout::{Canvas, Margins};
use crate::units::Mm;

/// The one piece of mutable layout state: which page we're on and how far down it
/// we've written.
///
/// Every renderer asks [PageState::fits] (or lets [PageState::check_page_break] ask)
/// before drawing, so nothing ever lands below `page_height - bottom_margin`. A fresh
/// state is made for every document; it is never shared between renders.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageState {
    pub page_index: usize,
    pub cursor_y: Mm,
    pub page_width: Mm,
    pub page_height: Mm,
    pub top_margin: Mm,
    pub bottom_margin: Mm,
}

impl PageState {
    /// Start writing at the top margin of the first page
    pub fn new(page_size: (Mm, Mm), margins: &Margins) -> PageState {
        PageState {
            page_index: 0,
            cursor_y: margins.top,
            page_width: page_size.0,
            page_height: page_size.1,
            top_margin: margins.top,
            bottom_margin: margins.bottom,
        }
    }

    /// The lowest y anything may be drawn at
    pub fn limit(&self) -> Mm {
        self.page_height - self.bottom_margin
    }

    /// Space left between the cursor and the bottom margin
    pub fn remaining(&self) -> Mm {
        self.limit() - self.cursor_y
    }

    /// Height available on a page between the two margins
    pub fn usable_height(&self) -> Mm {
        self.limit() - self.top_margin
    }

    pub fn fits(&self, needed: Mm) -> bool {
        self.cursor_y + needed <= self.limit()
    }

    /// Whether the cursor sits at the top of its page, where breaking would gain nothing
    pub fn at_page_top(&self) -> bool {
        self.cursor_y <= self.top_margin
    }

    /// Break to a new page if `needed` doesn't fit below the cursor. Returns whether a
    /// break happened so the caller can redraw a continuation header. Content taller
    /// than a whole page is left where it is when the cursor is already at the top.
    pub fn check_page_break<C: Canvas + ?Sized>(&mut self, needed: Mm, canvas: &mut C) -> bool {
        if self.fits(needed) || self.at_page_top() {
            return false;
        }
        self.break_page(canvas);
        true
    }

    /// Unconditionally continue on the next page, at its top margin
    pub fn break_page<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        log::debug!(
            "page break after page {} at y={}mm ({}mm left)",
            self.page_index,
            self.cursor_y,
            self.remaining()
        );
        self.page_index += 1;
        self.cursor_y = self.top_margin;
        canvas.goto_page(self.page_index);
    }

    /// Reserve `dy` of vertical space, breaking first if it would cross the bottom
    /// margin. Returns the y at which the reserved space starts.
    pub fn advance<C: Canvas + ?Sized>(&mut self, dy: Mm, canvas: &mut C) -> Mm {
        self.check_page_break(dy, canvas);
        let start = self.cursor_y;
        self.cursor_y += dy;
        start
    }

    /// Move the canvas onto this state's page
    pub fn activate<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.goto_page(self.page_index);
    }

    /// Whichever of the two write positions is further through the document
    pub fn furthest(self, other: PageState) -> PageState {
        if (other.page_index, other.cursor_y) > (self.page_index, self.cursor_y) {
            other
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RecordingCanvas;

    fn a4() -> (PageState, RecordingCanvas) {
        let size = (Mm(210.0), Mm(297.0));
        (
            PageState::new(size, &Margins::all(Mm(15.0))),
            RecordingCanvas::new(size),
        )
    }

    #[test]
    fn advancing_within_the_page_keeps_the_page() {
        let (mut state, mut canvas) = a4();
        let start = state.advance(Mm(100.0), &mut canvas);
        assert_eq!(start, Mm(15.0));
        assert_eq!(state.cursor_y, Mm(115.0));
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn filling_exactly_to_the_margin_does_not_break() {
        let (mut state, mut canvas) = a4();
        state.cursor_y = Mm(200.0);
        assert!(!state.check_page_break(Mm(82.0), &mut canvas));
        assert!(state.check_page_break(Mm(82.5), &mut canvas));
        assert_eq!(state.page_index, 1);
        assert_eq!(state.cursor_y, Mm(15.0));
        assert_eq!(canvas.page_index(), 1);
    }

    #[test]
    fn advance_breaks_before_overflowing() {
        let (mut state, mut canvas) = a4();
        state.cursor_y = Mm(270.0);
        let start = state.advance(Mm(20.0), &mut canvas);
        assert_eq!(start, Mm(15.0));
        assert_eq!(state.cursor_y, Mm(35.0));
        assert_eq!(state.page_index, 1);
    }

    #[test]
    fn oversized_content_at_the_top_does_not_loop() {
        let (mut state, mut canvas) = a4();
        assert!(!state.check_page_break(Mm(500.0), &mut canvas));
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn furthest_prefers_later_pages() {
        let (state, _) = a4();
        let mut low_on_first = state;
        low_on_first.cursor_y = Mm(250.0);
        let mut high_on_second = state;
        high_on_second.page_index = 1;
        high_on_second.cursor_y = Mm(30.0);
        assert_eq!(low_on_first.furthest(high_on_second), high_on_second);
        assert_eq!(high_on_second.furthest(low_on_first), high_on_second);
    }
}
