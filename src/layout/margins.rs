use crate::units::Mm;

/// Margins are used when laying out boxes on a page. The bottom margin is the hard
/// limit every renderer checks before it draws; the top margin is where the cursor
/// lands after a page break.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Mm,
    pub right: Mm,
    pub bottom: Mm,
    pub left: Mm,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Mm, right: Mm, bottom: Mm, left: Mm) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Mm>>(value: D) -> Margins {
        let value: Mm = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Mm, horizontal: Mm) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Mm(0.0))
    }
}
