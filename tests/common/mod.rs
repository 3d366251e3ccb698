use ward_tally::{BoundingBox, DEFAULT_DOCUMENT_TITLE, Fragment};

pub fn frag(text: &str, top: f64, bottom: f64) -> Fragment {
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

/// Title plus the two fixed heading fragments, then the ward name: the
/// layout every ward table page opens with.
pub fn header_page(ward: &str) -> Vec<Fragment> {
    vec![
        frag(DEFAULT_DOCUMENT_TITLE, 0.0, 20.0),
        frag("ELECTION OF DISTRICT COUNCILLORS", 30.0, 50.0),
        frag("THURSDAY 2 MAY 2019", 60.0, 80.0),
        frag(ward, 90.0, 110.0),
    ]
}
