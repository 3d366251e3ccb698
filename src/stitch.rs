use tracing::debug;

use crate::model::{Bloc, Fragment};
use crate::options::ParseOptions;
use crate::warning::{ParseWarning, WarningCode};

// The renderer occasionally splits the fixed heading into three fragments
// instead of two; the stray third fragment is always exactly this text.
const SPLIT_HEADING: &str = "COUNCILLORS";

pub(crate) fn stitch_pages(
    pages: Vec<Vec<Fragment>>,
    options: &ParseOptions,
    warnings: &mut Vec<ParseWarning>,
) -> Vec<Bloc> {
    let mut blocs: Vec<Bloc> = Vec::new();
    let mut seen_content = false;

    for (index, mut fragments) in pages.into_iter().enumerate() {
        let page_number = index + 1;

        if fragments.is_empty() {
            warnings.push(
                ParseWarning::new(WarningCode::EmptyPage, "page yielded no fragments")
                    .with_page(page_number),
            );
            continue;
        }

        repair_split_heading(&mut fragments);

        let starts_bloc = !seen_content || fragments[0].text == options.document_title;
        seen_content = true;

        if starts_bloc {
            debug!(page = page_number, "page starts a new bloc");
            blocs.push(Bloc { fragments });
            continue;
        }

        let Some(open) = blocs.last_mut() else {
            blocs.push(Bloc { fragments });
            continue;
        };

        if fragments[0].text == options.wrap_marker {
            // The ward name wrapped onto this page: fold the marker back into
            // the open bloc's heading, then continue the same visual table.
            debug!(page = page_number, "continuation with wrapped ward name");
            let marker = fragments.remove(0);
            if let Some(heading) = open.fragments.get_mut(1) {
                heading.text.push_str(&marker.text);
                heading.bounding_box = heading.bounding_box.union(marker.bounding_box);
            }
            open.fragments.extend(fragments);
        } else {
            debug!(
                page = page_number,
                offset = options.continuation_offset,
                "continuation appended below prior content"
            );
            for fragment in &mut fragments {
                fragment.bounding_box.top += options.continuation_offset;
                fragment.bounding_box.bottom += options.continuation_offset;
            }
            open.fragments.extend(fragments);
        }
    }

    blocs
}

fn repair_split_heading(fragments: &mut Vec<Fragment>) {
    if fragments.len() < 3 || fragments[2].text != SPLIT_HEADING {
        return;
    }
    let split = fragments.remove(2);
    let heading = &mut fragments[1];
    heading.text.push_str(&split.text);
    heading.bounding_box = heading.bounding_box.union(split.bounding_box);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{repair_split_heading, stitch_pages};
    use crate::model::{BoundingBox, Fragment};
    use crate::options::ParseOptions;
    use crate::warning::WarningCode;

    fn frag(text: &str, top: f64, bottom: f64) -> Fragment {
        Fragment::new(
            text,
            BoundingBox {
                top,
                left: 0.0,
                bottom,
                right: 600.0,
            },
        )
    }

    fn options() -> ParseOptions {
        ParseOptions {
            document_title: "TITLE".to_string(),
            wrap_marker: "WARD".to_string(),
            continuation_offset: 1200.0,
        }
    }

    fn header_page(ward: &str) -> Vec<Fragment> {
        vec![
            frag("TITLE", 0.0, 20.0),
            frag("ELECTION OF DISTRICT COUNCILLORS", 30.0, 50.0),
            frag("THURSDAY 2 MAY 2019", 60.0, 80.0),
            frag(ward, 90.0, 110.0),
        ]
    }

    #[test]
    fn merges_three_way_split_heading() {
        let mut fragments = vec![
            frag("TITLE", 0.0, 20.0),
            frag("ELECTION OF DISTRICT ", 30.0, 50.0),
            frag("COUNCILLORS", 30.0, 52.0),
            frag("EAST WARD", 90.0, 110.0),
        ];

        repair_split_heading(&mut fragments);

        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[1].text, "ELECTION OF DISTRICT COUNCILLORS");
        assert_eq!(fragments[1].bounding_box.bottom, 52.0);
        assert_eq!(fragments[2].text, "EAST WARD");
    }

    #[test]
    fn short_page_passes_through_repair_untouched() {
        let mut fragments = vec![frag("1,500", 100.0, 120.0)];
        repair_split_heading(&mut fragments);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].text, "1,500");
    }

    #[test]
    fn single_clean_page_is_returned_unchanged() {
        let page = header_page("EAST WARD");
        let mut warnings = Vec::new();

        let blocs = stitch_pages(vec![page.clone()], &options(), &mut warnings);

        assert_eq!(blocs.len(), 1);
        assert_eq!(blocs[0].fragments, page);
        assert!(warnings.is_empty());
    }

    #[test]
    fn title_fragment_opens_a_new_bloc() {
        let mut warnings = Vec::new();
        let blocs = stitch_pages(
            vec![header_page("EAST WARD"), header_page("WEST WARD")],
            &options(),
            &mut warnings,
        );

        assert_eq!(blocs.len(), 2);
        assert_eq!(blocs[0].fragments[3].text, "EAST WARD");
        assert_eq!(blocs[1].fragments[3].text, "WEST WARD");
    }

    #[test]
    fn offset_continuation_shifts_tops_and_bottoms_by_exactly_1200() {
        let continuation = vec![frag("1,500", 100.0, 120.0), frag("987", 130.0, 150.0)];
        let mut warnings = Vec::new();

        let blocs = stitch_pages(
            vec![header_page("EAST WARD"), continuation],
            &options(),
            &mut warnings,
        );

        assert_eq!(blocs.len(), 1);
        let appended = &blocs[0].fragments[4..];
        assert_eq!(appended[0].bounding_box.top, 1300.0);
        assert_eq!(appended[0].bounding_box.bottom, 1320.0);
        assert_eq!(appended[1].bounding_box.top, 1330.0);
        assert_eq!(appended[1].bounding_box.bottom, 1350.0);
    }

    #[test]
    fn wrap_marker_merges_into_heading_and_keeps_coordinates() {
        let continuation = vec![frag("WARD", 0.0, 20.0), frag("SMITH, JOHN", 40.0, 60.0)];
        let mut warnings = Vec::new();

        let blocs = stitch_pages(
            vec![header_page("EAST"), continuation],
            &options(),
            &mut warnings,
        );

        assert_eq!(blocs.len(), 1);
        let bloc = &blocs[0];
        assert_eq!(bloc.fragments[1].text, "ELECTION OF DISTRICT COUNCILLORSWARD");
        // appended fragment keeps its own page coordinates
        let last = bloc.fragments.last().expect("bloc should not be empty");
        assert_eq!(last.text, "SMITH, JOHN");
        assert_eq!(last.bounding_box.top, 40.0);
    }

    #[test]
    fn empty_pages_are_skipped_with_a_warning() {
        let mut warnings = Vec::new();
        let blocs = stitch_pages(
            vec![Vec::new(), header_page("EAST WARD"), Vec::new()],
            &options(),
            &mut warnings,
        );

        assert_eq!(blocs.len(), 1);
        let pages: Vec<Option<usize>> = warnings.iter().map(|warning| warning.page).collect();
        assert_eq!(pages, vec![Some(1), Some(3)]);
        assert!(
            warnings
                .iter()
                .all(|warning| warning.code == WarningCode::EmptyPage)
        );
    }

    #[test]
    fn first_non_empty_page_starts_the_first_bloc() {
        let continuation_looking = vec![frag("stray", 0.0, 10.0)];
        let mut warnings = Vec::new();

        let blocs = stitch_pages(
            vec![Vec::new(), continuation_looking],
            &options(),
            &mut warnings,
        );

        assert_eq!(blocs.len(), 1);
        assert_eq!(blocs[0].fragments[0].text, "stray");
    }
}
