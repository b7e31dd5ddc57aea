use crate::colour::Colour;
use crate::layout::{Area, Canvas, Margins, TextStyle};
use crate::page::{Page, Shape, ShapeLayout, SpanFont, SpanLayout};
use crate::pagesize::{self, PageSize};
use crate::rect::Rect;
use crate::units::{Mm, Pt};
use crate::Document;

/// A [Canvas] that draws onto the pages of a [Document], flipping layout space (top-left
/// origin, millimetres) into PDF space (bottom-left origin, points) as it goes.
pub struct PdfCanvas {
    document: Document,
    page_size: PageSize,
    margins: Margins,
    current: usize,
    /// Width of every stroked outline
    stroke_width: Mm,
}

impl PdfCanvas {
    /// Create a canvas holding a single empty page
    pub fn new(page_size: PageSize, margins: Margins, stroke_width: Mm) -> PdfCanvas {
        let mut document = Document::default();
        document.add_page(Page::new(page_size, Some(margins.clone())));
        PdfCanvas {
            document,
            page_size,
            margins,
            current: 0,
            stroke_width,
        }
    }

    /// Give up the canvas, keeping what was drawn
    pub fn into_document(self) -> Document {
        self.document
    }

    fn point(&self, (x, y): (Mm, Mm)) -> (Pt, Pt) {
        (Pt::from(x), self.page_size.1 - Pt::from(y))
    }

    fn rect(&self, area: Area) -> Rect {
        let (x1, y1) = self.point((area.x, area.bottom()));
        let (x2, y2) = self.point((area.right(), area.y));
        Rect { x1, y1, x2, y2 }
    }

    fn page(&mut self) -> Option<&mut Page> {
        self.document.page_mut(self.current)
    }
}

impl Canvas for PdfCanvas {
    fn page_size(&self) -> (Mm, Mm) {
        pagesize::in_mm(self.page_size)
    }

    fn page_index(&self) -> usize {
        self.current
    }

    fn page_count(&self) -> usize {
        self.document.page_count()
    }

    fn goto_page(&mut self, index: usize) {
        while self.document.page_count() <= index {
            self.document
                .add_page(Page::new(self.page_size, Some(self.margins.clone())));
        }
        self.current = index;
    }

    fn draw_rect(&mut self, area: Area, fill: Option<Colour>, stroke: Option<Colour>) {
        let shape = ShapeLayout {
            shape: Shape::Rect(self.rect(area)),
            fill,
            stroke,
            line_width: self.stroke_width.into(),
        };
        if let Some(page) = self.page() {
            page.add_shape(shape);
        }
    }

    fn draw_text(&mut self, x: Mm, y: Mm, text: &str, style: &TextStyle) {
        let span = SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                weight: style.weight,
                size: style.size,
            },
            colour: style.colour,
            coords: self.point((x, y)),
        };
        if let Some(page) = self.page() {
            page.add_span(span);
        }
    }

    fn draw_line(&mut self, from: (Mm, Mm), to: (Mm, Mm), colour: Colour, width: Mm) {
        let shape = ShapeLayout {
            shape: Shape::Line {
                from: self.point(from),
                to: self.point(to),
            },
            fill: None,
            stroke: Some(colour),
            line_width: width.into(),
        };
        if let Some(page) = self.page() {
            page.add_shape(shape);
        }
    }

    fn draw_circle(&mut self, centre: (Mm, Mm), radius: Mm, fill: Colour) {
        let shape = ShapeLayout {
            shape: Shape::Circle {
                centre: self.point(centre),
                radius: radius.into(),
            },
            fill: Some(fill),
            stroke: None,
            line_width: Pt(0.0),
        };
        if let Some(page) = self.page() {
            page.add_shape(shape);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::page::PageContents;

    fn canvas() -> PdfCanvas {
        PdfCanvas::new(pagesize::A4, Margins::all(Mm(15.0)), Mm(0.3))
    }

    #[test]
    fn flips_into_pdf_space() {
        let mut canvas = canvas();
        canvas.draw_rect(
            Area::new(Mm(0.0), Mm(0.0), Mm(25.4), Mm(25.4)),
            Some(colours::BLACK),
            None,
        );
        let document = canvas.into_document();
        let page = document.page(0).expect("first page exists");
        let PageContents::Shape(ShapeLayout {
            shape: Shape::Rect(rect),
            ..
        }) = &page.contents[0]
        else {
            panic!("expected a rectangle");
        };
        let top = pagesize::A4.1;
        assert!((rect.x1 - Pt(0.0)).abs() < 1e-3);
        assert!((rect.x2 - Pt(72.0)).abs() < 1e-3);
        assert!((rect.y2 - top).abs() < 1e-3);
        assert!((rect.y1 - (top - Pt(72.0))).abs() < 1e-3);
    }

    #[test]
    fn draws_onto_the_selected_page() {
        let mut canvas = canvas();
        canvas.goto_page(2);
        canvas.draw_circle((Mm(10.0), Mm(10.0)), Mm(1.0), colours::BLACK);
        canvas.goto_page(0);
        assert_eq!(canvas.page_count(), 3);

        let document = canvas.into_document();
        assert!(document.page(0).map(|p| p.contents.is_empty()).unwrap_or(false));
        assert_eq!(document.page(2).map(|p| p.contents.len()), Some(1));
    }
}
