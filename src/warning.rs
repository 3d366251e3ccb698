#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    EmptyPage,
    ShortBloc,
    UnmatchedVote,
    UnclassifiedFragment,
    UnnamedCandidate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseWarning {
    pub code: WarningCode,
    pub message: String,
    pub page: Option<usize>,
    pub ward: Option<String>,
}

impl ParseWarning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            page: None,
            ward: None,
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_ward(mut self, ward: impl Into<String>) -> Self {
        self.ward = Some(ward.into());
        self
    }
}
