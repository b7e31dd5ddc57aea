use thiserror::Error;

/// All errors that the crate can generate. Any of them aborts the report being
/// generated; nothing is ever written out for a document that failed part way.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    /// An I/O error occurred while writing the finished document
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("unable to measure text: {reason}")]
    /// The measurement provider could not compute a width or a wrap
    Measurement { reason: String },

    #[error("font has no glyph for {ch:?} and no replacement glyph")]
    /// The font can neither render a character nor substitute it
    MissingGlyph { ch: char },

    #[error(transparent)]
    /// The notification document could not be parsed
    Json(#[from] serde_json::Error),

    #[error("page is missing from the document")]
    /// A page referenced by the page order no longer exists
    PageMissing,
}

impl ReportError {
    pub(crate) fn measurement<S: ToString>(reason: S) -> ReportError {
        ReportError::Measurement {
            reason: reason.to_string(),
        }
    }
}
