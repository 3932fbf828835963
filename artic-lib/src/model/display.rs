//! Display formatting for table cells.
//!
//! Missing or blank values render as [`PLACEHOLDER`]. This is a view transform
//! only; the record itself is never modified.

use std::borrow::Cow;

use super::Artwork;

/// Text shown in place of a missing, empty or whitespace-only value.
pub const PLACEHOLDER: &str = "N/A";

/// A displayed column of the artworks table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Title,
    PlaceOfOrigin,
    ArtistDisplay,
    DateStart,
    DateEnd,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 5] = [
        Column::Title,
        Column::PlaceOfOrigin,
        Column::ArtistDisplay,
        Column::DateStart,
        Column::DateEnd,
    ];

    /// Returns the column header.
    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::PlaceOfOrigin => "Place of Origin",
            Column::ArtistDisplay => "Artist Display",
            Column::DateStart => "Date Start",
            Column::DateEnd => "Date End",
        }
    }

    /// Returns the display value of this column for an artwork.
    pub fn cell(self, artwork: &Artwork) -> Cow<'_, str> {
        match self {
            Column::Title => text_cell(artwork.title.as_deref()),
            Column::PlaceOfOrigin => text_cell(artwork.place_of_origin.as_deref()),
            Column::ArtistDisplay => text_cell(artwork.artist_display.as_deref()),
            Column::DateStart => number_cell(artwork.date_start),
            Column::DateEnd => number_cell(artwork.date_end),
        }
    }
}

/// Formats an optional text value, substituting the placeholder when blank.
pub fn text_cell(value: Option<&str>) -> Cow<'_, str> {
    match value {
        Some(text) if !text.trim().is_empty() => Cow::Borrowed(text),
        _ => Cow::Borrowed(PLACEHOLDER),
    }
}

/// Formats an optional number, substituting the placeholder when missing.
pub fn number_cell(value: Option<i32>) -> Cow<'static, str> {
    match value {
        Some(n) => Cow::Owned(n.to_string()),
        None => Cow::Borrowed(PLACEHOLDER),
    }
}
