use tracing::debug;

use crate::model::{Bloc, BoundingBox, Candidate, Fragment, UNKNOWN_NAME, Ward};
use crate::warning::{ParseWarning, WarningCode};

// Fixed strings printed by the source document's template.
const CANDIDATE_LEGEND: &str = "E) : Elected";
const ELECTED_MARK: &str = "(Elected";
const ELECTED_SUFFIX: &str = "(Elected)";
const KNOWN_AS_PREFIX: &str = "Known as ";
const TALLY_MARKERS: [&str; 3] = ["TOTAL", "unmarked", "ejected"];
const PARTY_LABELS: [(&str, &str); 5] = [
    ("Liberal", "Liberal Democrat"),
    ("Labour", "Labour "),
    ("UKIP", "UKIP"),
    ("Conservative", "Conservative"),
    ("Green", "Green"),
];

// The ward name sits immediately past the three fixed header fragments.
const WARD_NAME_INDEX: usize = 3;

// Vertical extent of every fragment attributed to one candidate's
// name/knownAs/party fields. Starts empty so it contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Band {
    top: f64,
    bottom: f64,
}

impl Band {
    fn empty() -> Self {
        Self {
            top: f64::INFINITY,
            bottom: f64::NEG_INFINITY,
        }
    }

    fn cover(&mut self, bounding_box: BoundingBox) {
        self.top = self.top.min(bounding_box.top);
        self.bottom = self.bottom.max(bounding_box.bottom);
    }

    fn contains(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }
}

pub(crate) fn reconstruct_ward(bloc: &Bloc, warnings: &mut Vec<ParseWarning>) -> Ward {
    let ward_name = match bloc.fragments.get(WARD_NAME_INDEX) {
        Some(fragment) => fragment.text.clone(),
        None => {
            warnings.push(ParseWarning::new(
                WarningCode::ShortBloc,
                format!(
                    "bloc has {} fragments, fewer than the fixed header",
                    bloc.fragments.len()
                ),
            ));
            String::new()
        }
    };

    let mut scan = WardScan::new(ward_name);
    for fragment in bloc.fragments.iter().skip(WARD_NAME_INDEX + 1) {
        scan.classify(fragment, warnings);
    }
    scan.finish(warnings)
}

struct WardScan {
    ward_name: String,
    candidates: Vec<Candidate>,
    bands: Vec<Band>,
    candidates_ready: bool,
    votes_ready: bool,
    prev_text: String,
    prev_box: BoundingBox,
}

impl WardScan {
    fn new(ward_name: String) -> Self {
        Self {
            ward_name,
            candidates: vec![Candidate::default()],
            bands: vec![Band::empty()],
            candidates_ready: false,
            votes_ready: false,
            prev_text: String::new(),
            prev_box: BoundingBox::default(),
        }
    }

    // Ordered rule list; the first matching rule classifies the fragment.
    fn classify(&mut self, fragment: &Fragment, warnings: &mut Vec<ParseWarning>) {
        let text = fragment.text.as_str();
        let bounding_box = fragment.bounding_box;

        if self.votes_ready {
            self.assign_vote(fragment, warnings);
        } else if !self.candidates_ready {
            // Preamble until the candidate-listing legend appears.
            if text.contains(CANDIDATE_LEGEND) {
                self.candidates_ready = true;
            }
        } else if TALLY_MARKERS.iter().any(|marker| text.contains(marker)) {
            self.candidates_ready = false;
            self.votes_ready = true;
        } else if let Some(alias) = text.strip_prefix(KNOWN_AS_PREFIX) {
            self.current_candidate().known_as = alias.to_string();
            self.current_band().cover(bounding_box);
        } else if let Some(label) = party_label(text) {
            self.current_candidate().party = label.to_string();
            self.current_band().cover(bounding_box);
        } else if text == "-" && self.current_name().contains(self.prev_text.as_str()) {
            self.current_candidate().name.push('-');
            self.current_band().cover(bounding_box);
        } else if is_upper_case(text) {
            self.take_name_fragment(fragment);
        } else {
            warnings.push(
                ParseWarning::new(
                    WarningCode::UnclassifiedFragment,
                    format!("fragment {text:?} did not match any rule"),
                )
                .with_ward(self.ward_name.clone()),
            );
        }

        self.prev_text = fragment.text.clone();
        self.prev_box = bounding_box;
    }

    fn take_name_fragment(&mut self, fragment: &Fragment) {
        let text = fragment.text.as_str();
        let midpoint = fragment.bounding_box.vertical_midpoint();

        if self.current_name() == UNKNOWN_NAME {
            self.current_candidate().name = text.to_string();
            self.current_band().cover(fragment.bounding_box);
        } else if self.prev_box.contains_vertically(midpoint)
            && self.current_name().contains(self.prev_text.as_str())
        {
            // Wrapped continuation of the same printed name.
            self.current_candidate().name.push_str(text);
            self.current_band().cover(fragment.bounding_box);
        } else if !text.is_empty() && text != "-" {
            debug!(ward = %self.ward_name, name = text, "new candidate");
            self.candidates.push(Candidate {
                name: text.to_string(),
                ..Candidate::default()
            });
            let mut band = Band::empty();
            band.cover(fragment.bounding_box);
            self.bands.push(band);
        }
    }

    fn assign_vote(&mut self, fragment: &Fragment, warnings: &mut Vec<ParseWarning>) {
        let text = fragment.text.as_str();
        let Some(votes) = parse_vote_figure(text) else {
            return;
        };

        let midpoint = fragment.bounding_box.vertical_midpoint();
        // First candidate in scan order wins when bands overlap.
        let Some(index) = self.bands.iter().position(|band| band.contains(midpoint)) else {
            warnings.push(
                ParseWarning::new(
                    WarningCode::UnmatchedVote,
                    format!("vote figure {text:?} fell outside every candidate band"),
                )
                .with_ward(self.ward_name.clone()),
            );
            return;
        };

        self.candidates[index].votes = votes;
        if text.contains(ELECTED_MARK) {
            self.candidates[index].elected = true;
        }
    }

    fn finish(self, warnings: &mut Vec<ParseWarning>) -> Ward {
        if self
            .candidates
            .iter()
            .any(|candidate| candidate.name == UNKNOWN_NAME)
        {
            warnings.push(
                ParseWarning::new(
                    WarningCode::UnnamedCandidate,
                    "no candidate name was ever found; placeholder retained",
                )
                .with_ward(self.ward_name.clone()),
            );
        }

        Ward {
            ward_name: self.ward_name,
            candidates: self.candidates,
        }
    }

    fn current_name(&self) -> &str {
        self.candidates
            .last()
            .expect("scan always holds at least the seeded candidate")
            .name
            .as_str()
    }

    fn current_candidate(&mut self) -> &mut Candidate {
        self.candidates
            .last_mut()
            .expect("scan always holds at least the seeded candidate")
    }

    fn current_band(&mut self) -> &mut Band {
        self.bands
            .last_mut()
            .expect("bands stay in lockstep with candidates")
    }
}

fn parse_vote_figure(text: &str) -> Option<i64> {
    let without_suffix = text.replace(ELECTED_SUFFIX, "");
    let digits = without_suffix.replace(',', "");
    let trimmed = digits.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok().filter(|votes| *votes >= 0)
}

fn party_label(text: &str) -> Option<&'static str> {
    PARTY_LABELS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, label)| *label)
}

// Print-style heuristic: candidate names are set entirely in capitals.
fn is_upper_case(text: &str) -> bool {
    !text.chars().any(char::is_lowercase)
}
