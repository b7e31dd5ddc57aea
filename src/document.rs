use crate::{
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    typeface::Typeface,
    ReportError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    /// Whether page content streams are Flate compressed
    pub compress: bool,
}

impl Default for Document {
    fn default() -> Self {
        Document {
            info: None,
            pages: Arena::new(),
            page_order: Vec::new(),
            compress: true,
        }
    }
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Get the page Id of a page at the given index. Returns [None] if
    /// `page_index >= self.page_order.len()`.
    pub fn id_of_page_index(&self, page_index: usize) -> Option<Id<Page>> {
        self.page_order.get(page_index).copied()
    }

    /// The page at `page_index` in document order
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.id_of_page_index(page_index)
            .and_then(|id| self.pages.get(id))
    }

    /// The page at `page_index` in document order, for adding content to
    pub fn page_mut(&mut self, page_index: usize) -> Option<&mut Page> {
        self.id_of_page_index(page_index)
            .and_then(|id| self.pages.get_mut(id))
    }

    /// Write the entire document to the writer, setting text in `typeface`. The
    /// document is rendered in memory first and only then written out, so a failure part
    /// way through never leaves a partial document in `w`.
    ///
    /// Object numbers are handed out in a fixed order, so the same pages always produce
    /// the same bytes.
    pub fn write<W: Write>(self, typeface: &Typeface, mut w: W) -> Result<(), ReportError> {
        let Document {
            info,
            pages,
            page_order,
            compress,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = page_order
            .iter()
            .enumerate()
            .map(|(i, _id)| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        typeface.write(&mut refs, &mut writer);

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(ReportError::PageMissing)?;
            page.write(&mut refs, page_index, typeface, compress, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;

    fn three_pages() -> Document {
        let mut doc = Document::default();
        for _ in 0..3 {
            doc.add_page(Page::new(pagesize::A4, None));
        }
        doc
    }

    #[test]
    fn pages_are_addressed_in_document_order() {
        let mut doc = three_pages();
        assert_eq!(doc.page_count(), 3);
        assert!(doc.page_mut(2).is_some());
        assert!(doc.page_mut(3).is_none());
    }

    #[test]
    fn writes_a_pdf() {
        let mut bytes = Vec::new();
        three_pages()
            .write(&Typeface::Helvetica, &mut bytes)
            .expect("can write");
        assert!(bytes.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 3"));
        assert!(text.contains("/Helvetica-Bold"));
    }

    #[test]
    fn output_is_reproducible() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        three_pages()
            .write(&Typeface::Helvetica, &mut first)
            .expect("can write");
        three_pages()
            .write(&Typeface::Helvetica, &mut second)
            .expect("can write");
        assert_eq!(first, second);
    }
}
