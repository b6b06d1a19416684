//! Terminal redline renderer: delete = red strikethrough, insert = blue
//! bold, move_source = green strikethrough, move_dest = green (spec.md §6).
//!
//! Grounded in `compare_it::main`'s `console::style` usage for colored CLI
//! output.

use console::style;

use crate::model::{AnnotatedParagraph, Segment, SegmentKind};

/// Render a full stream to a single string, one line per annotated
/// paragraph/table row, styled for an ANSI terminal.
pub fn render(stream: &[AnnotatedParagraph]) -> String {
    stream.iter().map(render_paragraph).collect::<Vec<_>>().join("\n")
}

fn render_paragraph(para: &AnnotatedParagraph) -> String {
    let body: String = para.segments.iter().map(render_segment).collect();
    if para.is_heading {
        format!("{}", style(body).bold().underlined())
    } else {
        body
    }
}

fn render_segment(segment: &Segment) -> String {
    match segment.kind {
        SegmentKind::Equal => segment.text.clone(),
        SegmentKind::Delete => format!("{}", style(&segment.text).red().strikethrough()),
        SegmentKind::Insert => format!("{}", style(&segment.text).blue().bold()),
        SegmentKind::MoveSource => format!("{}", style(&segment.text).green().strikethrough()),
        SegmentKind::MoveDest => format!("{}", style(&segment.text).green()),
    }
}
