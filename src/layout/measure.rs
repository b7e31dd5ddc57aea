use crate::units::{Mm, Pt};
use crate::ReportError;

const TABSIZE: usize = 4;

/// The two weights reports are set in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 2] = [FontWeight::Regular, FontWeight::Bold];

    /// Index of the face in the page's font resources (`/F0`, `/F1`)
    pub fn index(&self) -> usize {
        match self {
            FontWeight::Regular => 0,
            FontWeight::Bold => 1,
        }
    }
}

/// Something that knows how wide text is. Implementations must be deterministic: the
/// same text, size and weight always measure the same, which is what makes two renders
/// of one document byte-identical.
pub trait Measure {
    /// Calculate the rendered width of `text`
    fn text_width(&self, text: &str, size: Pt, weight: FontWeight) -> Result<Mm, ReportError>;

    /// Wrap `text` into lines no wider than `max_width`. See [wrap_text].
    fn wrap(
        &self,
        text: &str,
        max_width: Mm,
        size: Pt,
        weight: FontWeight,
    ) -> Result<Vec<String>, ReportError> {
        wrap_text(self, text, max_width, size, weight)
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    fn text_width(&self, text: &str, size: Pt, weight: FontWeight) -> Result<Mm, ReportError> {
        (**self).text_width(text, size, weight)
    }
}

/// Greedily wraps text at whitespace, keeping words intact.
///
/// Newlines start a new line (blank lines are kept, so paragraphs stay apart) and tabs
/// become spaces. A word that is wider than `max_width` on its own is emitted alone on
/// its line and allowed to overflow rather than being split. Leading and trailing
/// whitespace of the whole text is dropped, so blank text wraps to no lines at all;
/// any other text produces at least one line.
pub fn wrap_text<M: Measure + ?Sized>(
    measure: &M,
    text: &str,
    max_width: Mm,
    size: Pt,
    weight: FontWeight,
) -> Result<Vec<String>, ReportError> {
    // replace tabs with spaces
    let text = text.replace('\t', &" ".repeat(TABSIZE));
    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.trim().split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }

            let candidate = format!("{line} {word}");
            if measure.text_width(&candidate, size, weight)? <= max_width {
                line = candidate;
            } else {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            }
        }

        if !line.is_empty() && measure.text_width(&line, size, weight)? > max_width {
            log::warn!("'{line}' is wider than {max_width}mm and will overflow its line");
        }
        lines.push(line);
    }

    if lines.len() == 1 && lines[0].is_empty() {
        lines.clear();
    }

    Ok(lines)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Every character is `char_width` wide, whatever the size or weight
    pub(crate) struct FixedWidth {
        pub char_width: Mm,
    }

    impl Measure for FixedWidth {
        fn text_width(&self, text: &str, _size: Pt, _weight: FontWeight) -> Result<Mm, ReportError> {
            Ok(self.char_width * text.chars().count() as f32)
        }
    }

    fn wrap(text: &str, max_width: f32) -> Vec<String> {
        FixedWidth { char_width: Mm(1.0) }
            .wrap(text, Mm(max_width), Pt(9.0), FontWeight::Regular)
            .expect("can wrap")
    }

    #[test]
    fn keeps_lines_within_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10.0);
        assert_eq!(
            lines,
            vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
        assert!(lines.iter().all(|line| line.chars().count() <= 10));
    }

    #[test]
    fn exact_fit_does_not_wrap() {
        assert_eq!(wrap("abcd efgh", 9.0), vec!["abcd efgh"]);
        assert_eq!(wrap("abcd efgh", 8.0), vec!["abcd", "efgh"]);
    }

    #[test]
    fn long_tokens_get_their_own_line() {
        let lines = wrap("a https://example.com/a/very/long/path b", 8.0);
        assert_eq!(lines, vec!["a", "https://example.com/a/very/long/path", "b"]);
    }

    #[test]
    fn newlines_split_paragraphs() {
        let lines = wrap("first\r\n\r\nsecond\tword", 40.0);
        assert_eq!(lines, vec!["first", "", "second word"]);
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(wrap("", 10.0).is_empty());
        assert!(wrap("   \n  ", 10.0).is_empty());
        assert_eq!(wrap("x", 10.0), vec!["x"]);
    }

    #[test]
    fn wrapping_is_deterministic() {
        let text = lipsum::lipsum(80);
        assert_eq!(wrap(&text, 37.0), wrap(&text, 37.0));
    }
}
