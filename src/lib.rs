mod error;
mod json_io;
mod model;
mod options;
mod provider;
mod reconstruct;
mod stitch;
mod warning;

use std::path::Path;

use crate::json_io::{read_captured_pages, write_result_set};
use crate::reconstruct::reconstruct_ward;
use crate::stitch::stitch_pages;

pub use error::TallyError;
pub use model::{
    Bloc, BoundingBox, Candidate, DEFAULT_KNOWN_AS, DEFAULT_PARTY, Fragment, ResultSet,
    UNKNOWN_NAME, UNRESOLVED_VOTES, Ward,
};
pub use options::{
    DEFAULT_CONTINUATION_OFFSET, DEFAULT_DOCUMENT_TITLE, DEFAULT_WRAP_MARKER, ParseOptions,
};
pub use provider::{CapturedPages, SpanProvider, capture_all_pages};
pub use warning::{ParseWarning, WarningCode};

#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport {
    pub ward_count: usize,
    pub candidate_count: usize,
    pub warnings: Vec<ParseWarning>,
}

/// Stitches captured pages into blocs and reconstructs one ward per bloc.
/// Best-effort: malformed input degrades to partial data plus warnings,
/// never an error.
#[must_use]
pub fn parse_captured_pages(
    pages: Vec<Vec<Fragment>>,
    options: &ParseOptions,
) -> (ResultSet, ParseReport) {
    let mut warnings = Vec::new();

    let blocs = stitch_pages(pages, options, &mut warnings);
    let wards = blocs
        .iter()
        .map(|bloc| reconstruct_ward(bloc, &mut warnings))
        .collect::<Vec<_>>();

    let report = ParseReport {
        ward_count: wards.len(),
        candidate_count: wards.iter().map(|ward| ward.candidates.len()).sum(),
        warnings,
    };
    (ResultSet { wards }, report)
}

pub fn parse_document(
    provider: &mut dyn SpanProvider,
    options: &ParseOptions,
) -> (ResultSet, ParseReport) {
    parse_captured_pages(capture_all_pages(provider), options)
}

pub fn parse_pages_file(
    input: &Path,
    output: &Path,
    options: &ParseOptions,
) -> Result<ParseReport, TallyError> {
    validate_options(options)?;

    let pages = read_captured_pages(input)?;
    let (results, report) = parse_captured_pages(pages, options);
    write_result_set(output, &results)?;
    Ok(report)
}

fn validate_options(options: &ParseOptions) -> Result<(), TallyError> {
    if options.document_title.is_empty() {
        return Err(TallyError::InvalidOption(
            "document title must not be empty".to_string(),
        ));
    }
    if !options.continuation_offset.is_finite() || options.continuation_offset <= 0.0 {
        return Err(TallyError::InvalidOption(
            "continuation offset must be a positive number".to_string(),
        ));
    }
    Ok(())
}
