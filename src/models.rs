use serde::Deserialize;

pub const PLACEHOLDER_REVIEW: &str = "No reviews yet";

/// A movie about to be inserted after the user picked a search result.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub rating: f64,
    pub ranking: i32,
    pub review: String,
    pub img_url: String,
}

/// One row of the selection page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchCandidate {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
}
