//! The paginated box-model layout engine.
//!
//! Content is placed top to bottom onto fixed-size pages. A single [PageState] tracks
//! the page being written and the cursor on it; every renderer checks that what it is
//! about to draw fits above the bottom margin, and moves to the next page when it
//! doesn't. Renderers draw through the [Canvas] trait, so the same layout can be
//! recorded in memory ([RecordingCanvas]) or written out as PDF.
//!
//! Three renderers build on each other:
//!
//! - [`render_section`](crate::layout::render_section) - a titled, bordered box holding
//!   wrapped text, a bulleted list or badges, split across pages with continuation
//!   headers
//! - [`render_twin_columns`](crate::layout::render_twin_columns) - two sections side by
//!   side from a common top edge, each paginating on its own
//! - [`render_badges`](crate::layout::render_badges) - short chips flowing left to right
//!   and wrapping into rows
//!
//! Lengths are [Mm](crate::Mm) measured from the top-left corner of the page, with y
//! growing down the page.
//!
//! # Example
//!
//! ```
//! use shutdown_report::layout::{
//!     render_section, BadgeStyle, BoxStyle, Margins, PageState, RecordingCanvas, Section,
//! };
//! use shutdown_report::{Mm, Typeface};
//!
//! let size = (Mm(210.0), Mm(297.0));
//! let mut canvas = RecordingCanvas::new(size);
//! let mut state = PageState::new(size, &Margins::all(Mm(15.0)));
//!
//! let section = Section::list(
//!     "Affected DMAs",
//!     vec!["DMA-101".to_string(), "DMA-102".to_string()],
//! );
//! let extent = render_section(
//!     &mut canvas,
//!     &Typeface::Helvetica,
//!     &BoxStyle::default(),
//!     &BadgeStyle::default(),
//!     &mut state,
//!     &section,
//!     Mm(15.0),
//!     Mm(180.0),
//! )
//! .expect("can lay out");
//!
//! assert_eq!(extent.boxes.len(), 1);
//! assert_eq!(state.cursor_y, extent.end_y);
//! ```

mod badges;
mod canvas;
mod columns;
mod cursor;
mod margins;
pub(crate) mod measure;
mod section;
mod style;

pub use badges::*;
pub use canvas::*;
pub use columns::*;
pub use cursor::*;
pub use margins::*;
pub use measure::*;
pub use section::*;
pub use style::*;
