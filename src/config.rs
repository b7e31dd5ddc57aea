use crate::colour::{colours, Colour};
use crate::layout::{BadgeStyle, BoxStyle, ContinuationPolicy, Margins};
use crate::pagesize::{self, PageSize};
use crate::units::Mm;
use crate::Info;

/// Colours used outside of section boxes
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub banner_fill: Colour,
    pub banner_text: Colour,
    /// Table header rows and grid labels
    pub header_fill: Colour,
    /// Page numbers, footer text and rules
    pub muted_text: Colour,
    pub rule: Colour,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            banner_fill: colours::WATER_BLUE,
            banner_text: colours::WHITE,
            header_fill: colours::PALE_BLUE,
            muted_text: colours::GREY,
            rule: colours::LIGHT_GREY,
        }
    }
}

/// Everything about how a report looks that isn't the notification itself.
///
/// The defaults reproduce the printed shutdown notice: A4 portrait with 15mm margins
/// all round, 9pt body text on 4.5mm lines and badges on 6mm rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub page_size: PageSize,
    pub margins: Margins,
    pub box_style: BoxStyle,
    pub badge_style: BadgeStyle,
    pub palette: Palette,
    /// Height of the banner at the top of the first page
    pub banner_height: Mm,
    /// Horizontal space between twin columns and grid cells
    pub column_gap: Mm,
    /// Vertical space between consecutive sections
    pub section_spacing: Mm,
    /// Minimum height of the start / end date boxes
    pub date_box_height: Mm,
    /// Minimum height of every side-by-side pair of boxes
    pub twin_box_height: Mm,
    pub text_continuation: ContinuationPolicy,
    pub list_continuation: ContinuationPolicy,
    /// [chrono] format string used for the start and end dates
    pub date_format: String,
    /// Whether page content streams are Flate compressed
    pub compress: bool,
    /// Metadata written into every report; the title is filled in from the event id
    pub info: Info,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            page_size: pagesize::A4,
            margins: Margins::all(Mm(15.0)),
            box_style: BoxStyle::default(),
            badge_style: BadgeStyle::default(),
            palette: Palette::default(),
            banner_height: Mm(22.0),
            column_gap: Mm(4.0),
            section_spacing: Mm(4.0),
            date_box_height: Mm(18.0),
            twin_box_height: Mm(24.0),
            text_continuation: ContinuationPolicy::RepeatTitle,
            list_continuation: ContinuationPolicy::RepeatTitle,
            date_format: "%d/%m/%Y %H:%M".to_string(),
            compress: true,
            info: Info::default(),
        }
    }
}

impl ReportConfig {
    pub fn new() -> ReportConfig {
        ReportConfig::default()
    }

    /// Page size in layout units
    pub fn page_size_mm(&self) -> (Mm, Mm) {
        pagesize::in_mm(self.page_size)
    }

    /// Left edge and width of the area between the side margins
    pub fn content_span(&self) -> (Mm, Mm) {
        let (width, _) = self.page_size_mm();
        (
            self.margins.left,
            width - self.margins.left - self.margins.right,
        )
    }

    /// Set the page size, modifying `self`
    pub fn page_size(&mut self, page_size: PageSize) -> &mut Self {
        self.page_size = page_size;
        self
    }

    /// Set the page margins, modifying `self`
    pub fn margins(&mut self, margins: Margins) -> &mut Self {
        self.margins = margins;
        self
    }

    /// Set the geometry of section boxes, modifying `self`
    pub fn box_style(&mut self, box_style: BoxStyle) -> &mut Self {
        self.box_style = box_style;
        self
    }

    /// Set the geometry of badge chips, modifying `self`
    pub fn badge_style(&mut self, badge_style: BadgeStyle) -> &mut Self {
        self.badge_style = badge_style;
        self
    }

    /// Set the colours used outside of section boxes, modifying `self`
    pub fn palette(&mut self, palette: Palette) -> &mut Self {
        self.palette = palette;
        self
    }

    /// Set the space between columns, modifying `self`
    pub fn column_gap(&mut self, gap: Mm) -> &mut Self {
        self.column_gap = gap;
        self
    }

    /// Set the space between sections, modifying `self`
    pub fn section_spacing(&mut self, spacing: Mm) -> &mut Self {
        self.section_spacing = spacing;
        self
    }

    /// Set what continues a text box on a new page, modifying `self`
    pub fn text_continuation(&mut self, policy: ContinuationPolicy) -> &mut Self {
        self.text_continuation = policy;
        self
    }

    /// Set what continues a list or badge box on a new page, modifying `self`
    pub fn list_continuation(&mut self, policy: ContinuationPolicy) -> &mut Self {
        self.list_continuation = policy;
        self
    }

    /// Set the date format, modifying `self`
    pub fn date_format<S: ToString>(&mut self, format: S) -> &mut Self {
        self.date_format = format.to_string();
        self
    }

    /// Turn content stream compression on or off, modifying `self`
    pub fn compress(&mut self, compress: bool) -> &mut Self {
        self.compress = compress;
        self
    }

    /// Set the document metadata, modifying `self`
    pub fn info(&mut self, info: Info) -> &mut Self {
        self.info = info;
        self
    }
}
