//! Self-contained HTML redline renderer.
//!
//! Dark-theme styling grounded in `compare_it::report`'s
//! `build_html_head` — same `:root` custom-property convention, restyled
//! for the three-color annotation scheme a redline needs instead of a
//! pie-chart dashboard.

use chrono::Local;

use crate::model::{AnnotatedParagraph, Segment, SegmentKind};

/// Build a complete, self-contained HTML document rendering `stream`.
pub fn build_html_report(stream: &[AnnotatedParagraph], title: &str) -> String {
    let mut html = String::new();
    html.push_str(&build_html_head(title));
    html.push_str("<body>\n<div class=\"container\">\n");
    html.push_str(&format!(
        "<header><h1>{}</h1><p class=\"subtitle\">Generated {}</p></header>\n",
        escape_html(title),
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    html.push_str("<div class=\"redline\">\n");

    for para in stream {
        html.push_str(&render_paragraph(para));
    }

    html.push_str("</div>\n</div>\n</body>\n</html>\n");
    html
}

fn render_paragraph(para: &AnnotatedParagraph) -> String {
    let tag = if para.is_heading {
        "h2"
    } else if para.is_table_row {
        "div class=\"table-row\""
    } else {
        "p"
    };
    let close_tag = tag.split_whitespace().next().unwrap_or(tag);

    let mut body = String::new();
    for segment in &para.segments {
        body.push_str(&render_segment(segment));
    }
    format!("<{tag}>{body}</{close_tag}>\n")
}

fn render_segment(segment: &Segment) -> String {
    let class = match segment.kind {
        SegmentKind::Equal => return escape_html(&segment.text),
        SegmentKind::Insert => "seg-insert",
        SegmentKind::Delete => "seg-delete",
        SegmentKind::MoveSource => "seg-move-source",
        SegmentKind::MoveDest => "seg-move-dest",
    };
    format!("<span class=\"{class}\">{}</span>", escape_html(&segment.text))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn build_html_head(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        :root {{
            --bg-primary: #0d1117;
            --bg-secondary: #161b22;
            --text-primary: #c9d1d9;
            --text-secondary: #8b949e;
            --accent: #58a6ff;
            --success: #3fb950;
            --danger: #f85149;
            --border: #30363d;
        }}

        * {{ box-sizing: border-box; margin: 0; padding: 0; }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
            background: var(--bg-primary);
            color: var(--text-primary);
            line-height: 1.6;
            padding: 2rem;
        }}

        .container {{ max-width: 900px; margin: 0 auto; }}
        header {{ margin-bottom: 1.5rem; }}
        h1 {{ font-size: 1.75rem; font-weight: 600; }}
        .subtitle {{ color: var(--text-secondary); font-size: 0.875rem; }}

        .redline {{
            background: var(--bg-secondary);
            border: 1px solid var(--border);
            border-radius: 8px;
            padding: 1.5rem;
        }}

        .redline p, .redline h2, .redline .table-row {{ margin-bottom: 0.75rem; }}
        .redline h2 {{ font-size: 1.2rem; font-weight: 600; }}
        .table-row {{ font-family: ui-monospace, Menlo, Consolas, monospace; }}

        .seg-insert {{ color: var(--accent); font-weight: 600; }}
        .seg-delete {{ color: var(--danger); text-decoration: line-through; }}
        .seg-move-source {{ color: var(--success); text-decoration: line-through; }}
        .seg-move-dest {{ color: var(--success); }}
    </style>
</head>
"#,
        title = escape_html(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_segment_gets_strikethrough_class() {
        let seg = Segment::new("removed", SegmentKind::Delete);
        assert_eq!(render_segment(&seg), "<span class=\"seg-delete\">removed</span>");
    }

    #[test]
    fn equal_segment_is_escaped_plain_text_with_no_span() {
        let seg = Segment::new("a < b & c", SegmentKind::Equal);
        assert_eq!(render_segment(&seg), "a &lt; b &amp; c");
    }

    #[test]
    fn heading_paragraph_renders_as_h2() {
        let para = AnnotatedParagraph::new(vec![Segment::new("Title", SegmentKind::Equal)], true, false);
        assert_eq!(render_paragraph(&para), "<h2>Title</h2>\n");
    }

    #[test]
    fn table_row_renders_as_div_with_class() {
        let para = AnnotatedParagraph::new(vec![Segment::new("a | b", SegmentKind::Equal)], false, true);
        assert_eq!(render_paragraph(&para), "<div class=\"table-row\">a | b</div>\n");
    }

    #[test]
    fn full_report_contains_title_and_segments() {
        let stream = vec![AnnotatedParagraph::new(
            vec![Segment::new("hello", SegmentKind::Insert)],
            false,
            false,
        )];
        let html = build_html_report(&stream, "Contract Redline");
        assert!(html.contains("Contract Redline"));
        assert!(html.contains("seg-insert"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
