//! Artwork record

use serde::Deserialize;
use serde::Serialize;

use super::Identified;

/// One artwork row as returned by the artworks collection endpoint.
///
/// Only the display fields are modelled. Any field the API omits or sends as
/// `null` is `None`; the values are kept exactly as fetched and only replaced by
/// a placeholder at display time (see [`crate::model::display`]).
///
/// # Example
///
/// ```
/// use artic_lib::model::Artwork;
///
/// let json = r#"{"id": 27992, "title": "A Sunday on La Grande Jatte", "date_start": 1884}"#;
/// let artwork: Artwork = serde_json::from_str(json).unwrap();
///
/// assert_eq!(artwork.id, 27992);
/// assert_eq!(artwork.place_of_origin, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Numeric identifier, unique across the collection.
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Field names requested from the API, in column order after `id`.
    pub const FIELDS: [&'static str; 6] = [
        "id",
        "title",
        "place_of_origin",
        "artist_display",
        "date_start",
        "date_end",
    ];

    /// Creates an artwork with only an id and title set.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            place_of_origin: None,
            artist_display: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Sets the place of origin.
    pub fn with_place_of_origin(mut self, place: impl Into<String>) -> Self {
        self.place_of_origin = Some(place.into());
        self
    }

    /// Sets the artist display text.
    pub fn with_artist_display(mut self, artist: impl Into<String>) -> Self {
        self.artist_display = Some(artist.into());
        self
    }

    /// Sets the start and end years.
    pub fn with_dates(mut self, start: i32, end: i32) -> Self {
        self.date_start = Some(start);
        self.date_end = Some(end);
        self
    }
}

impl Identified for Artwork {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}
