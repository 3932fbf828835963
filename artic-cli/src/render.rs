//! Plain-text rendering of the table.

use std::fmt::Write;

use artic_lib::api::PageSource;
use artic_lib::model::Artwork;
use artic_lib::model::display::Column;
use artic_lib::selection::SelectionManager;
use artic_lib::session::TableSession;

fn width(column: Column) -> usize {
    match column {
        Column::Title => 32,
        Column::PlaceOfOrigin => 16,
        Column::ArtistDisplay => 36,
        Column::DateStart | Column::DateEnd => 10,
    }
}

/// Fits `text` on one line of exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let count = flat.chars().count();
    if count > width {
        let mut cut: String = flat.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{flat:<width$}")
    }
}

/// Renders the current page with a checkbox and row number per line.
pub fn page<S>(session: &TableSession<S>) -> String
where
    S: PageSource<Record = Artwork>,
{
    let mut out = String::new();

    let _ = write!(out, "      #  ");
    for column in Column::ALL {
        let _ = write!(out, " {}", fit(column.header(), width(column)));
    }
    out.push('\n');

    if session.records().is_empty() {
        out.push_str("  (no artworks on this page)\n");
    }

    for (index, artwork) in session.records().iter().enumerate() {
        let mark = if session.is_row_selected(index) { 'x' } else { ' ' };
        let _ = write!(out, "[{mark}] {:>4}  ", index + 1);
        for column in Column::ALL {
            let _ = write!(out, " {}", fit(&column.cell(artwork), width(column)));
        }
        out.push('\n');
    }

    out.push_str(&status(session));
    out
}

/// Renders the pagination and selection summary line.
pub fn status<S>(session: &TableSession<S>) -> String
where
    S: PageSource<Record = Artwork>,
{
    let selection = session.selection();
    let mut line = format!(
        "page {} / {} | {} artworks | {} per page | {} selected",
        session.page(),
        session.total_pages(),
        session.total_count().unwrap_or(0),
        session.rows_per_page(),
        selection.len(),
    );

    let pending = selection.pending_auto_select();
    if pending > 0 {
        let _ = write!(line, " | {pending} more will be selected");
        if session.auto_select_exhausted() {
            line.push_str(" (no pages left)");
        }
    }
    line
}

/// Lists every selected artwork across all pages, ordered by id.
pub fn selection(selection: &SelectionManager<Artwork>) -> String {
    if selection.is_empty() {
        return "nothing selected".to_string();
    }

    let mut artworks: Vec<&Artwork> = selection.selection().iter().collect();
    artworks.sort_by_key(|a| a.id);

    let mut out = String::new();
    for artwork in artworks {
        let _ = writeln!(
            out,
            "{:>8}  {}",
            artwork.id,
            fit(&Column::Title.cell(artwork), width(Column::Title))
        );
    }
    let _ = write!(out, "{} selected", selection.len());
    out
}
