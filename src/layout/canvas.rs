use crate::colour::Colour;
use crate::layout::FontWeight;
use crate::units::{Mm, Pt};

/// An axis-aligned box in layout space: `(x, y)` is the top-left corner, y grows down
/// the page.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Area {
    pub x: Mm,
    pub y: Mm,
    pub width: Mm,
    pub height: Mm,
}

impl Area {
    pub fn new(x: Mm, y: Mm, width: Mm, height: Mm) -> Area {
        Area {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> Mm {
        self.x + self.width
    }

    pub fn bottom(&self) -> Mm {
        self.y + self.height
    }

    /// Whether the two areas share any interior. Touching edges do not count.
    pub fn overlaps(&self, other: &Area) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// How a piece of text is drawn
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub size: Pt,
    pub weight: FontWeight,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(size: Pt, weight: FontWeight, colour: Colour) -> TextStyle {
        TextStyle {
            size,
            weight,
            colour,
        }
    }
}

/// A drawable surface made of fixed-size pages.
///
/// Canvases never decide when to break a page; [`PageState`](crate::layout::PageState)
/// does, and moves the canvas with [`Canvas::goto_page`] / [`Canvas::new_page`] before
/// anything would be drawn past the bottom margin. Coordinates are in layout space
/// (millimetres from the top-left corner of the page); text is positioned by its
/// baseline.
pub trait Canvas {
    /// Width and height of every page
    fn page_size(&self) -> (Mm, Mm);

    /// Index of the page being drawn on
    fn page_index(&self) -> usize;

    /// Number of pages allocated so far
    fn page_count(&self) -> usize;

    /// Make `index` the current page, allocating pages up to it if they don't exist yet
    fn goto_page(&mut self, index: usize);

    /// Move to the page after the current one, allocating it if needed
    fn new_page(&mut self) {
        let next = self.page_index() + 1;
        self.goto_page(next);
    }

    fn draw_rect(&mut self, area: Area, fill: Option<Colour>, stroke: Option<Colour>);

    fn draw_text(&mut self, x: Mm, y: Mm, text: &str, style: &TextStyle);

    fn draw_line(&mut self, from: (Mm, Mm), to: (Mm, Mm), colour: Colour, width: Mm);

    fn draw_circle(&mut self, centre: (Mm, Mm), radius: Mm, fill: Colour);
}

/// One primitive recorded by a [RecordingCanvas]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        area: Area,
        fill: Option<Colour>,
        stroke: Option<Colour>,
    },
    Text {
        x: Mm,
        y: Mm,
        text: String,
        style: TextStyle,
    },
    Line {
        from: (Mm, Mm),
        to: (Mm, Mm),
        colour: Colour,
        width: Mm,
    },
    Circle {
        centre: (Mm, Mm),
        radius: Mm,
        fill: Colour,
    },
}

impl DrawOp {
    /// The lowest y this primitive reaches on its page
    pub fn max_y(&self) -> Mm {
        match self {
            DrawOp::Rect { area, .. } => area.bottom(),
            DrawOp::Text { y, .. } => *y,
            DrawOp::Line { from, to, .. } => from.1.max(to.1),
            DrawOp::Circle { centre, radius, .. } => centre.1 + *radius,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// A canvas that keeps every primitive in memory, page by page. Useful as a backend in
/// its own right (for instance to inspect a layout or to replay it onto another
/// surface) and for checking layout geometry.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    size: (Mm, Mm),
    pages: Vec<Vec<DrawOp>>,
    current: usize,
}

impl RecordingCanvas {
    /// Create a canvas with a single empty page
    pub fn new(size: (Mm, Mm)) -> RecordingCanvas {
        RecordingCanvas {
            size,
            pages: vec![Vec::new()],
            current: 0,
        }
    }

    /// All recorded pages, in page order
    pub fn pages(&self) -> &[Vec<DrawOp>] {
        &self.pages
    }

    /// The primitives drawn on one page
    pub fn ops(&self, page: usize) -> &[DrawOp] {
        self.pages.get(page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every string drawn on one page, in drawing order
    pub fn texts(&self, page: usize) -> Vec<&str> {
        self.ops(page).iter().filter_map(DrawOp::text).collect()
    }

    fn push(&mut self, op: DrawOp) {
        self.pages[self.current].push(op);
    }
}

impl Canvas for RecordingCanvas {
    fn page_size(&self) -> (Mm, Mm) {
        self.size
    }

    fn page_index(&self) -> usize {
        self.current
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn goto_page(&mut self, index: usize) {
        while self.pages.len() <= index {
            self.pages.push(Vec::new());
        }
        self.current = index;
    }

    fn draw_rect(&mut self, area: Area, fill: Option<Colour>, stroke: Option<Colour>) {
        self.push(DrawOp::Rect { area, fill, stroke });
    }

    fn draw_text(&mut self, x: Mm, y: Mm, text: &str, style: &TextStyle) {
        self.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            style: *style,
        });
    }

    fn draw_line(&mut self, from: (Mm, Mm), to: (Mm, Mm), colour: Colour, width: Mm) {
        self.push(DrawOp::Line {
            from,
            to,
            colour,
            width,
        });
    }

    fn draw_circle(&mut self, centre: (Mm, Mm), radius: Mm, fill: Colour) {
        self.push(DrawOp::Circle {
            centre,
            radius,
            fill,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;

    #[test]
    fn goto_page_allocates_missing_pages() {
        let mut canvas = RecordingCanvas::new((Mm(210.0), Mm(297.0)));
        assert_eq!(canvas.page_count(), 1);
        canvas.goto_page(2);
        assert_eq!(canvas.page_count(), 3);
        assert_eq!(canvas.page_index(), 2);

        canvas.goto_page(0);
        canvas.new_page();
        assert_eq!(canvas.page_index(), 1);
        assert_eq!(canvas.page_count(), 3);
    }

    #[test]
    fn records_onto_the_current_page() {
        let mut canvas = RecordingCanvas::new((Mm(210.0), Mm(297.0)));
        let style = TextStyle::new(Pt(9.0), FontWeight::Regular, colours::BLACK);
        canvas.draw_text(Mm(10.0), Mm(20.0), "first", &style);
        canvas.new_page();
        canvas.draw_text(Mm(10.0), Mm(20.0), "second", &style);
        assert_eq!(canvas.texts(0), vec!["first"]);
        assert_eq!(canvas.texts(1), vec!["second"]);
    }

    #[test]
    fn touching_areas_do_not_overlap() {
        let a = Area::new(Mm(0.0), Mm(0.0), Mm(10.0), Mm(10.0));
        let below = Area::new(Mm(0.0), Mm(10.0), Mm(10.0), Mm(5.0));
        let inside = Area::new(Mm(5.0), Mm(5.0), Mm(10.0), Mm(10.0));
        assert!(!a.overlaps(&below));
        assert!(a.overlaps(&inside));
    }
}
