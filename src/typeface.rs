use crate::{
    font::Font,
    layout::{FontWeight, Measure},
    refs::{ObjectReferences, RefType},
    standard::StandardFont,
    units::{Mm, Pt},
    ReportError,
};
use pdf_writer::{Name, Pdf};

/// The pair of faces (regular and bold) a report is set in. This is the measurement
/// provider used when producing real documents: widths measured here are the widths
/// the PDF viewer will draw.
#[derive(Default)]
pub enum Typeface {
    /// Built-in Helvetica / Helvetica-Bold; Latin-1 only, nothing embedded
    #[default]
    Helvetica,
    /// Embedded TrueType faces
    TrueType { regular: Font, bold: Font },
}

impl Typeface {
    /// Load a regular / bold pair of TrueType fonts
    pub fn load_truetype(regular: Vec<u8>, bold: Vec<u8>) -> Result<Typeface, ReportError> {
        Ok(Typeface::TrueType {
            regular: Font::load(regular)?,
            bold: Font::load(bold)?,
        })
    }

    fn standard(weight: FontWeight) -> StandardFont {
        match weight {
            FontWeight::Regular => StandardFont::Helvetica,
            FontWeight::Bold => StandardFont::HelveticaBold,
        }
    }

    /// Encode text into the byte string shown by the content stream
    pub(crate) fn encode(&self, text: &str, weight: FontWeight) -> Result<Vec<u8>, ReportError> {
        match self {
            Typeface::Helvetica => Ok(Typeface::standard(weight).encode(text)),
            Typeface::TrueType { regular, bold } => match weight {
                FontWeight::Regular => regular.encode(text),
                FontWeight::Bold => bold.encode(text),
            },
        }
    }

    /// Write both faces, registering them as `RefType::Font(weight.index())`
    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        for weight in FontWeight::ALL {
            match self {
                Typeface::Helvetica => {
                    let id = refs.gen(RefType::Font(weight.index()));
                    writer
                        .type1_font(id)
                        .base_font(Name(Typeface::standard(weight).base_font()))
                        .encoding_predefined(Name(b"WinAnsiEncoding"));
                }
                Typeface::TrueType { regular, bold } => {
                    let font = match weight {
                        FontWeight::Regular => regular,
                        FontWeight::Bold => bold,
                    };
                    font.write(refs, weight.index(), writer);
                }
            }
        }
    }
}

impl Measure for Typeface {
    fn text_width(&self, text: &str, size: Pt, weight: FontWeight) -> Result<Mm, ReportError> {
        if !size.is_finite() || *size <= 0.0 {
            return Err(ReportError::measurement(format!(
                "font size must be positive, got {size}"
            )));
        }
        let width = match self {
            Typeface::Helvetica => Typeface::standard(weight).width_of_text(text, size),
            Typeface::TrueType { regular, bold } => match weight {
                FontWeight::Regular => regular.width_of_text(text, size)?,
                FontWeight::Bold => bold.width_of_text(text, size)?,
            },
        };
        Ok(width.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helvetica_measures_in_millimetres() {
        // "Hi" at 10pt is 9.44pt wide
        let width = Typeface::Helvetica
            .text_width("Hi", Pt(10.0), FontWeight::Regular)
            .expect("can measure");
        assert!((width.0 - 9.44 * 25.4 / 72.0).abs() < 1e-4);
    }

    #[test]
    fn invalid_sizes_fail_measurement() {
        let result = Typeface::Helvetica.text_width("x", Pt(f32::NAN), FontWeight::Bold);
        assert!(matches!(result, Err(ReportError::Measurement { .. })));
        let result = Typeface::Helvetica.text_width("x", Pt(0.0), FontWeight::Regular);
        assert!(matches!(result, Err(ReportError::Measurement { .. })));
    }
}
