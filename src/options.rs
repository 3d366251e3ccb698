pub const DEFAULT_DOCUMENT_TITLE: &str = "Lewes District Council Elections - 2 May 2019";
pub const DEFAULT_WRAP_MARKER: &str = "WARD";
pub const DEFAULT_CONTINUATION_OFFSET: f64 = 1200.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    pub document_title: String,
    pub wrap_marker: String,
    pub continuation_offset: f64,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            wrap_marker: DEFAULT_WRAP_MARKER.to_string(),
            continuation_offset: DEFAULT_CONTINUATION_OFFSET,
        }
    }
}
