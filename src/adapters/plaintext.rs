//! Plain-text document adapter.
//!
//! Convention: paragraphs are separated by one or more blank lines. A
//! block whose text starts with `Heading: ` is a heading paragraph (the
//! prefix is stripped). A block whose first line is exactly `TABLE` is a
//! table: every following line is a row, cells separated by `|`. Plain
//! text has no notion of sections, so [`PlainTextDocument::sections`]
//! always returns an empty list.

use crate::model::{Cell, Paragraph, Table};
use crate::orchestrator::{MemoryDocument, NoSections};

/// A document parsed from plain text. Has no sections (no headers or
/// footers) — [`crate::model::DocumentView::sections`] is always empty.
pub type PlainTextDocument = MemoryDocument<NoSections>;

const HEADING_PREFIX: &str = "Heading: ";
const TABLE_MARKER: &str = "TABLE";

/// Parse `input` into a [`PlainTextDocument`].
pub fn parse(input: &str) -> PlainTextDocument {
    let mut paragraphs = Vec::new();
    let mut tables = Vec::new();

    for block in split_blocks(input) {
        if let Some(table) = try_parse_table(block) {
            tables.push(table);
            continue;
        }
        if let Some(heading_text) = block.strip_prefix(HEADING_PREFIX) {
            paragraphs.push(Paragraph::new(join_lines(heading_text), true));
            continue;
        }
        paragraphs.push(Paragraph::new(join_lines(block), false));
    }

    PlainTextDocument {
        paragraphs,
        tables,
        sections: Vec::new(),
    }
}

/// Split on runs of one or more blank lines; trim and drop empty blocks.
fn split_blocks(input: &str) -> Vec<&str> {
    input
        .split("\n\n")
        .map(|b| b.trim_matches('\n').trim_end())
        .filter(|b| !b.trim().is_empty())
        .collect()
}

fn join_lines(block: &str) -> String {
    block
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn try_parse_table(block: &str) -> Option<Table> {
    let mut lines = block.lines();
    let first = lines.next()?.trim();
    if first != TABLE_MARKER {
        return None;
    }

    let rows: Vec<Vec<Cell>> = lines
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(row_idx, line)| {
            line.split('|')
                .enumerate()
                .map(|(col_idx, cell)| Cell::new(cell.trim().to_string(), row_idx, col_idx))
                .collect()
        })
        .collect();

    Some(Table::new(rows))
}
