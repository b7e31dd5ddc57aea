use crate::colour::Colour;
use crate::content::render_contents;
use crate::layout::{FontWeight, Margins};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::typeface::Typeface;
use crate::units::*;
use crate::ReportError;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf};

/// Which face and size a span is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub weight: FontWeight,
    pub size: Pt,
}

/// A run of text positioned on a page, in PDF space (bottom-left origin)
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    /// Start of the baseline
    pub coords: (Pt, Pt),
}

/// The geometry of a vector shape, in PDF space
#[derive(Clone, PartialEq, Debug)]
pub enum Shape {
    Rect(Rect),
    Line { from: (Pt, Pt), to: (Pt, Pt) },
    Circle { centre: (Pt, Pt), radius: Pt },
}

/// A shape and how it is painted
#[derive(Clone, PartialEq, Debug)]
pub struct ShapeLayout {
    pub shape: Shape,
    pub fill: Option<Colour>,
    pub stroke: Option<Colour>,
    pub line_width: Pt,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Shape(ShapeLayout),
}

/// A page is a single page within the document, onto which vector shapes and text can
/// be placed. Pages are laid out in PDF space, with the origin in the bottom-left corner
/// and the y axis pointing up.
#[derive(Debug, Clone)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out content, in drawing order
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new page with the given size and margins. The margins determine where
    /// the content box is placed.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let margins = margins.unwrap_or_default();
        let (width, height) = size;
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: Pt::from(margins.left),
                y1: Pt::from(margins.bottom),
                x2: width - Pt::from(margins.right),
                y2: height - Pt::from(margins.top),
            },
            contents: Vec::default(),
        }
    }

    /// Add a span of text to the page, merging it into the previous text block if there is
    /// one so that runs of text share one graphics state
    pub fn add_span(&mut self, span: SpanLayout) {
        if let Some(PageContents::Text(spans)) = self.contents.last_mut() {
            spans.push(span);
        } else {
            self.contents.push(PageContents::Text(vec![span]));
        }
    }

    pub fn add_shape(&mut self, shape: ShapeLayout) {
        self.contents.push(PageContents::Shape(shape));
    }

    fn render(&self, typeface: &Typeface) -> Result<Vec<u8>, ReportError> {
        render_contents(&self.contents, typeface)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        typeface: &Typeface,
        compress: bool,
        writer: &mut Pdf,
    ) -> Result<(), ReportError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(ReportError::PageMissing)?;
        let parent = refs
            .get(RefType::PageTree)
            .ok_or(ReportError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for weight in FontWeight::ALL {
            if let Some(font) = refs.get(RefType::Font(weight.index())) {
                resource_fonts.pair(Name(format!("F{}", weight.index()).as_bytes()), font);
            }
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = self.render(typeface)?;
        if compress {
            let compressed =
                compress_to_vec_zlib(&rendered, CompressionLevel::DefaultCompression as u8);
            writer
                .stream(content_id, compressed.as_slice())
                .filter(Filter::FlateDecode);
        } else {
            writer.stream(content_id, rendered.as_slice());
        }

        Ok(())
    }
}
