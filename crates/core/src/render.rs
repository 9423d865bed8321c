//! Side-by-side HTML rendering of matches
//!
//! Each text is rendered in its own column. Matched regions are wrapped in a
//! highlighted `<span>` carrying the 1-based match number, which is shared by
//! the two projections of the same match so a reader can pair them up. All
//! text content, matched or not, is HTML-escaped.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write;

use crate::error::{Result, VerbatimError};
use crate::mapping::CharIndex;
use crate::matches::Match;

const DEFAULT_HIGHLIGHT_COLOR: &str = "#fff3a0";

/// One side of a match, as rendered in a single text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubMatch {
    /// First highlighted character (inclusive)
    pub start: usize,
    /// Last highlighted character (inclusive)
    pub end: usize,
    /// 1-based match number
    pub match_id: usize,
}

impl SubMatch {
    pub fn new(start: usize, end: usize, match_id: usize) -> Self {
        Self { start, end, match_id }
    }
}

/// Project a match list onto both texts, each side sorted by `start`
pub fn split_sub_matches(matches: &[Match]) -> (Vec<SubMatch>, Vec<SubMatch>) {
    let mut side1: Vec<SubMatch> = matches
        .iter()
        .enumerate()
        .map(|(i, m)| SubMatch::new(m.start1, m.end1, i + 1))
        .collect();
    let mut side2: Vec<SubMatch> = matches
        .iter()
        .enumerate()
        .map(|(i, m)| SubMatch::new(m.start2, m.end2, i + 1))
        .collect();

    side1.sort_by_key(|s| s.start);
    side2.sort_by_key(|s| s.start);
    (side1, side2)
}

/// Renders a comparison as a two-column HTML view
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    /// Heading above the first column
    pub heading1: String,
    /// Heading above the second column
    pub heading2: String,
    /// CSS color used behind highlighted regions
    pub highlight_color: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            heading1: "Text 1".to_string(),
            heading2: "Text 2".to_string(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
        }
    }

    pub fn with_headings(mut self, heading1: impl Into<String>, heading2: impl Into<String>) -> Self {
        self.heading1 = heading1.into();
        self.heading2 = heading2.into();
        self
    }

    pub fn with_highlight_color(mut self, color: impl Into<String>) -> Self {
        self.highlight_color = color.into();
        self
    }

    /// Render the two texts side by side as an HTML fragment
    pub fn render_fragment(&self, text1: &str, text2: &str, matches: &[Match]) -> Result<String> {
        let (side1, side2) = split_sub_matches(matches);
        let body1 = self.highlight(text1, &side1)?;
        let body2 = self.highlight(text2, &side2)?;

        let mut html = String::with_capacity(body1.len() + body2.len() + 512);
        html.push_str(
            "<div class=\"verbatim-comparison\" \
             style=\"display:flex;gap:1em;align-items:flex-start\">\n",
        );
        push_column(&mut html, &self.heading1, &body1);
        push_column(&mut html, &self.heading2, &body2);
        html.push_str("</div>\n");
        Ok(html)
    }

    /// Render the comparison as a complete HTML document
    pub fn render_document(
        &self,
        title: &str,
        text1: &str,
        text2: &str,
        matches: &[Match],
    ) -> Result<String> {
        let fragment = self.render_fragment(text1, text2, matches)?;
        Ok(format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n<style>\n\
             body {{ font-family: sans-serif; margin: 1em; }}\n\
             .verbatim-column h3 {{ margin-top: 0; }}\n\
             .verbatim-match {{ border-radius: 2px; }}\n\
             </style>\n</head>\n<body>\n<h1>{title}</h1>\n{fragment}</body>\n</html>\n",
            title = escape_html(title),
            fragment = fragment,
        ))
    }

    fn highlight(&self, text: &str, sub_matches: &[SubMatch]) -> Result<String> {
        build_highlighted_html_with_color(text, sub_matches, &self.highlight_color)
    }
}

fn push_column(html: &mut String, heading: &str, body: &str) {
    html.push_str(
        "<div class=\"verbatim-column\" style=\"flex:1;min-width:0\">\n<h3>",
    );
    html.push_str(&escape_html(heading));
    html.push_str(
        "</h3>\n<div class=\"verbatim-text\" style=\"max-height:80vh;overflow:auto;\
         white-space:pre-wrap;overflow-wrap:anywhere;border:1px solid #ccc;padding:0.5em\">",
    );
    html.push_str(body);
    html.push_str("</div>\n</div>\n");
}

/// Render one text with its sub-matches highlighted.
///
/// `sub_matches` must be sorted by `start` and must not overlap.
pub fn build_highlighted_html(text: &str, sub_matches: &[SubMatch]) -> Result<String> {
    build_highlighted_html_with_color(text, sub_matches, DEFAULT_HIGHLIGHT_COLOR)
}

fn build_highlighted_html_with_color(
    text: &str,
    sub_matches: &[SubMatch],
    color: &str,
) -> Result<String> {
    let index = CharIndex::new(text);
    let len = index.char_len();
    let color = escape_html(color);
    let mut html = String::with_capacity(text.len() + sub_matches.len() * 96);
    let mut cursor = 0;

    for sub in sub_matches {
        if sub.start > sub.end {
            return Err(VerbatimError::InvalidSpan {
                start: sub.start,
                end: sub.end,
            });
        }
        if sub.end >= len {
            return Err(VerbatimError::SpanOutOfRange {
                start: sub.start,
                end: sub.end,
                len,
            });
        }
        if sub.start < cursor {
            return Err(VerbatimError::OverlappingSpans {
                start: sub.start,
                previous_end: cursor - 1,
            });
        }

        html.push_str(&escape_html(index.slice_range(cursor, sub.start)?));
        // Writing into a String cannot fail
        let _ = write!(
            html,
            "<span class=\"verbatim-match\" style=\"background-color:{color}\" \
             title=\"Match {id}\" data-match-id=\"{id}\">",
            id = sub.match_id,
        );
        html.push_str(&escape_html(index.slice_range(sub.start, sub.end + 1)?));
        html.push_str("</span>");
        cursor = sub.end + 1;
    }

    html.push_str(&escape_html(index.tail(cursor)?));
    Ok(html)
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(input: &str) -> Cow<'_, str> {
    // Fast path: check if any escaping needed
    if !input
        .bytes()
        .any(|b| matches!(b, b'<' | b'>' | b'&' | b'"' | b'\''))
    {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
