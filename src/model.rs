use serde::{Deserialize, Serialize};

pub const UNKNOWN_NAME: &str = "unknown";
pub const DEFAULT_KNOWN_AS: &str = "N/A";
pub const DEFAULT_PARTY: &str = "Independent";
pub const UNRESOLVED_VOTES: i64 = -1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            top: self.top.min(other.top),
            left: self.left.min(other.left),
            bottom: self.bottom.max(other.bottom),
            right: self.right.max(other.right),
        }
    }

    #[must_use]
    pub fn vertical_midpoint(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    #[must_use]
    pub fn contains_vertically(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub text: String,
    pub bounding_box: BoundingBox,
}

impl Fragment {
    #[must_use]
    pub fn new(text: impl Into<String>, bounding_box: BoundingBox) -> Self {
        Self {
            text: text.into(),
            bounding_box,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bloc {
    pub fragments: Vec<Fragment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    pub known_as: String,
    pub party: String,
    pub votes: i64,
    pub elected: bool,
}

impl Default for Candidate {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            known_as: DEFAULT_KNOWN_AS.to_string(),
            party: DEFAULT_PARTY.to_string(),
            votes: UNRESOLVED_VOTES,
            elected: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ward {
    pub ward_name: String,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    pub wards: Vec<Ward>,
}
