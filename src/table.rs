// Table output: renders a list of books as borderless, whitespace-aligned
// columns.

use crate::config::OutputMode;
use crate::model::Book;
use comfy_table::{presets, ContentArrangement, Table};

/// Appended to descriptions cut at the configured width.
pub const TRUNCATION_MARKER: &str = "...";

/// Render `books` as a table. The header is always printed, even when
/// there are no rows.
pub fn render_books(books: &[Book], mode: OutputMode, description_width: usize) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled);

    match mode {
        OutputMode::Plain => {
            table.set_header(vec!["TITLE", "AUTHOR"]);
            for book in books {
                table.add_row(vec![book.title.clone(), book.author.clone()]);
            }
        }
        OutputMode::Descriptive => {
            table.set_header(vec!["TITLE", "AUTHOR", "DESCRIPTION"]);
            for book in books {
                table.add_row(vec![
                    book.title.clone(),
                    book.author.clone(),
                    truncate(&book.description, description_width),
                ]);
            }
        }
    }

    table.to_string()
}

/// Cut `text` to at most `width` characters, marking the cut. Shorter
/// text is returned unchanged.
pub fn truncate(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((idx, _)) => format!("{}{}", &text[..idx], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}
