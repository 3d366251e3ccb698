use crate::model::Fragment;

/// Source of per-page positioned text, typically a rendering surface that
/// holds at most two pages at once. Pages are 1-based and must be captured
/// strictly forward; a page that never rendered yields an empty list.
pub trait SpanProvider {
    fn page_count(&self) -> usize;
    fn capture_page(&mut self, page_number: usize) -> Vec<Fragment>;
}

/// Pulls every page in order. Completion condition is explicit: the loop
/// ends when no pages remain uncaptured.
pub fn capture_all_pages(provider: &mut dyn SpanProvider) -> Vec<Vec<Fragment>> {
    let count = provider.page_count();
    let mut pages = Vec::with_capacity(count);
    for page_number in 1..=count {
        pages.push(provider.capture_page(page_number));
    }
    pages
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapturedPages {
    pages: Vec<Vec<Fragment>>,
}

impl CapturedPages {
    #[must_use]
    pub fn new(pages: Vec<Vec<Fragment>>) -> Self {
        Self { pages }
    }
}

impl SpanProvider for CapturedPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn capture_page(&mut self, page_number: usize) -> Vec<Fragment> {
        // Capturing displaces the page content, as the rendering window does.
        match self.pages.get_mut(page_number.wrapping_sub(1)) {
            Some(fragments) => std::mem::take(fragments),
            None => Vec::new(),
        }
    }
}
