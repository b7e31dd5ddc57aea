//! Renders water shutdown notifications into printable, multi-page PDF documents.
//!
//! The heavy lifting is done by the [layout] engine, which places titled boxes, bulleted
//! lists, side-by-side columns and wrapping badge chips onto fixed-size pages without
//! overlap or clipping, breaking pages (and repeating headers) as it goes. The [report]
//! module strings those pieces together in the order of a shutdown notice and writes
//! the result out as PDF.
//!
//! # Example
//!
//! ```
//! use shutdown_report::{generate_pdf, NotificationDocument, ReportConfig, Typeface};
//!
//! let doc = NotificationDocument::from_json(
//!     r#"{"eventId": "SD-2024-0042", "affectedAreas": ["Seeb", "Bawshar"]}"#,
//! )
//! .expect("valid notification");
//!
//! let report = generate_pdf(&doc, &ReportConfig::default(), &Typeface::Helvetica)
//!     .expect("can generate report");
//! assert_eq!(report.file_name, "Shutdown_SD-2024-0042.pdf");
//! assert!(report.bytes.starts_with(b"%PDF"));
//! ```

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// The paginated box-model layout engine
pub mod layout;

mod model;
pub use model::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

pub mod report;
pub use report::{generate_pdf, render_notification, report_file_name, save_report, Report};

mod standard;
pub use standard::StandardFont;

mod typeface;
pub use typeface::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for inspecting generated objects
pub use pdf_writer;
