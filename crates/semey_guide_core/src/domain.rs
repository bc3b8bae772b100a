//! crates/semey_guide_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage or transport format; the
//! serde derives exist because the session snapshot and the API payloads
//! are these types verbatim.

use serde::{Deserialize, Serialize};

/// The closed set of place categories shown as map filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceCategory {
    #[serde(rename = "Food")]
    Food,
    #[serde(rename = "Hangout")]
    Hangout,
    #[serde(rename = "Daily Needs")]
    DailyNeeds,
    #[serde(rename = "Medical")]
    Medical,
    #[serde(rename = "Transport")]
    Transport,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 5] = [
        PlaceCategory::Food,
        PlaceCategory::Hangout,
        PlaceCategory::DailyNeeds,
        PlaceCategory::Medical,
        PlaceCategory::Transport,
    ];

    /// The display string, which doubles as the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceCategory::Food => "Food",
            PlaceCategory::Hangout => "Hangout",
            PlaceCategory::DailyNeeds => "Daily Needs",
            PlaceCategory::Medical => "Medical",
            PlaceCategory::Transport => "Transport",
        }
    }

    /// Parses the display string back into a category. Returns `None` for
    /// anything outside the closed enumeration.
    pub fn parse(value: &str) -> Option<PlaceCategory> {
        PlaceCategory::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

impl std::fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A short, closed-vocabulary tag summarizing community sentiment about a
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    #[serde(rename = "Student Favorite")]
    StudentFavorite,
    #[serde(rename = "Halal Friendly")]
    HalalFriendly,
    #[serde(rename = "Spice Friendly")]
    SpiceFriendly,
    #[serde(rename = "Quiet Study")]
    QuietStudy,
    #[serde(rename = "Reported Experience")]
    ReportedExperience,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::StudentFavorite => "Student Favorite",
            Signal::HalalFriendly => "Halal Friendly",
            Signal::SpiceFriendly => "Spice Friendly",
            Signal::QuietStudy => "Quiet Study",
            Signal::ReportedExperience => "Reported Experience",
        }
    }
}

/// A point of interest on the city map.
///
/// The `*_ru` fields are the optional Russian-language variants; a view
/// falls back to the primary field when the variant is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub name_ru: Option<String>,
    pub category: PlaceCategory,
    pub description: String,
    pub description_ru: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub tags: Vec<String>,
    pub signals: Vec<Signal>,
    pub university_verified: bool,
    pub address: String,
    pub address_ru: Option<String>,
    /// Canonical external link, when the place came with one.
    pub link: Option<String>,
}

/// The signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub university: String,
    pub year_of_study: String,
    pub bio: String,
}

/// One place reference returned by the discovery service.
///
/// Every field is optional: the upstream response shape is dynamic and
/// must be validated before mapping into a [`Place`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawChunk {
    pub title: Option<String>,
    pub link: Option<String>,
}

/// The full result of one discovery round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryResult {
    /// The narrative text accompanying the place references.
    pub narrative: String,
    pub chunks: Vec<RawChunk>,
}
