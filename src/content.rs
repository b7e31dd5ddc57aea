//! Turns page contents into PDF content stream operators.

use crate::colour::Colour;
use crate::page::{PageContents, Shape, ShapeLayout, SpanFont, SpanLayout};
use crate::typeface::Typeface;
use crate::units::Pt;
use crate::ReportError;
use std::io::Write;

/// Distance of the Bézier control points from the ends of a quarter circle, as a fraction
/// of the radius
const KAPPA: f32 = 0.552_284_8;

/// Renders page contents to a PDF content stream.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    typeface: &Typeface,
) -> Result<Vec<u8>, ReportError> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans, typeface)?;
            }
            PageContents::Shape(shape) => {
                render_shape(&mut content, shape)?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    typeface: &Typeface,
) -> Result<(), ReportError> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write_font(content, current_font)?;
    write_fill_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write_font(content, current_font)?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_fill_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for byte in typeface.encode(&span.text, span.font.weight)? {
            write!(content, "{byte:02x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_shape(content: &mut Vec<u8>, layout: &ShapeLayout) -> Result<(), ReportError> {
    if layout.fill.is_none() && layout.stroke.is_none() {
        return Ok(());
    }

    write!(content, "q\n")?;
    if let Some(fill) = layout.fill {
        write_fill_colour(content, fill)?;
    }
    if let Some(stroke) = layout.stroke {
        write_stroke_colour(content, stroke)?;
        write!(content, "{} w\n", layout.line_width)?;
    }

    match &layout.shape {
        Shape::Rect(rect) => {
            write!(
                content,
                "{} {} {} {} re\n",
                rect.x1,
                rect.y1,
                rect.width(),
                rect.height()
            )?;
        }
        Shape::Line { from, to } => {
            write!(content, "{} {} m\n", from.0, from.1)?;
            write!(content, "{} {} l\n", to.0, to.1)?;
        }
        Shape::Circle { centre, radius } => {
            write_circle(content, *centre, *radius)?;
        }
    }

    let op = match (layout.fill.is_some(), layout.stroke.is_some()) {
        (true, true) => "B",
        (true, false) => "f",
        _ => "S",
    };
    write!(content, "{op}\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

/// Four Bézier quarter arcs, anticlockwise from the rightmost point
#[allow(clippy::write_with_newline)]
fn write_circle(content: &mut Vec<u8>, (cx, cy): (Pt, Pt), r: Pt) -> Result<(), std::io::Error> {
    let k = r * KAPPA;
    write!(content, "{} {} m\n", cx + r, cy)?;
    write!(
        content,
        "{} {} {} {} {} {} c\n",
        cx + r,
        cy + k,
        cx + k,
        cy + r,
        cx,
        cy + r
    )?;
    write!(
        content,
        "{} {} {} {} {} {} c\n",
        cx - k,
        cy + r,
        cx - r,
        cy + k,
        cx - r,
        cy
    )?;
    write!(
        content,
        "{} {} {} {} {} {} c\n",
        cx - r,
        cy - k,
        cx - k,
        cy - r,
        cx,
        cy - r
    )?;
    write!(
        content,
        "{} {} {} {} {} {} c\n",
        cx + k,
        cy - r,
        cx + r,
        cy - k,
        cx + r,
        cy
    )?;
    write!(content, "h\n")
}

#[allow(clippy::write_with_newline)]
fn write_font(content: &mut Vec<u8>, font: SpanFont) -> Result<(), std::io::Error> {
    write!(content, "/F{} {} Tf\n", font.weight.index(), font.size)
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}
