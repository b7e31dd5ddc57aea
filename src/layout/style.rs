use crate::colour::{colours, Colour};
use crate::layout::{FontWeight, TextStyle};
use crate::units::{Mm, Pt};

/// Geometry and colours of a titled, bordered section box
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStyle {
    /// Height of the title bar at the top of a box
    pub title_height: Mm,
    /// Height of the condensed "(continued)" bar on follow-up pages
    pub continued_title_height: Mm,
    /// Inner padding on every side of the content
    pub padding: Mm,
    /// Height of one line of body text (and of each list row)
    pub line_height: Mm,
    /// Indent of list item text past its bullet
    pub bullet_indent: Mm,
    pub bullet_radius: Mm,
    /// No box is shorter than this, whatever its content
    pub min_height: Mm,
    pub title_size: Pt,
    pub body_size: Pt,
    pub border_width: Mm,
    pub title_fill: Colour,
    pub title_colour: Colour,
    pub border: Colour,
    pub text_colour: Colour,
    /// Drawn in place of missing or empty content
    pub placeholder: String,
}

impl Default for BoxStyle {
    fn default() -> Self {
        BoxStyle {
            title_height: Mm(7.0),
            continued_title_height: Mm(6.0),
            padding: Mm(3.0),
            line_height: Mm(4.5),
            bullet_indent: Mm(4.0),
            bullet_radius: Mm(0.6),
            min_height: Mm(0.0),
            title_size: Pt(10.0),
            body_size: Pt(9.0),
            border_width: Mm(0.3),
            title_fill: colours::PALE_BLUE,
            title_colour: colours::WATER_BLUE,
            border: colours::STEEL,
            text_colour: colours::BLACK,
            placeholder: "--".to_string(),
        }
    }
}

impl BoxStyle {
    pub fn title_style(&self) -> TextStyle {
        TextStyle::new(self.title_size, FontWeight::Bold, self.title_colour)
    }

    pub fn body_style(&self) -> TextStyle {
        TextStyle::new(self.body_size, FontWeight::Regular, self.text_colour)
    }

    /// Baseline of a line of text whose row starts at `row_top`
    pub fn baseline(&self, row_top: Mm) -> Mm {
        row_top + self.line_height * 0.75
    }
}

/// Geometry and colours of badge chips
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStyle {
    /// Height of one row of badges, including the space between rows
    pub row_height: Mm,
    /// Horizontal space between two badges on a row
    pub gap: Mm,
    /// Padding added on both sides of the text inside a badge
    pub padding: Mm,
    pub text_size: Pt,
    pub fill: Colour,
    pub text_colour: Colour,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        BadgeStyle {
            row_height: Mm(6.0),
            gap: Mm(2.0),
            padding: Mm(2.0),
            text_size: Pt(8.0),
            fill: colours::AMBER,
            text_colour: colours::DARK_AMBER,
        }
    }
}

impl BadgeStyle {
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.text_size, FontWeight::Bold, self.text_colour)
    }

    /// Height of the chip itself; the rest of the row is spacing
    pub fn chip_height(&self) -> Mm {
        self.row_height * 0.8
    }
}
