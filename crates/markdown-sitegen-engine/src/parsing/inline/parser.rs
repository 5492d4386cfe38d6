use log::trace;
use regex::Regex;

use crate::error::{Error, Result};

use super::{
    kinds::{Delimiter, Image, Link},
    types::Span,
};

/// Tokenizes inline content into an ordered sequence of [`Span`]s.
///
/// # Pass Order
/// Bold, italic, code, image, link. Each pass only re-scans spans that are
/// still plain, so text claimed by an earlier pass is never re-interpreted.
///
/// # Errors
/// Returns [`Error::UnbalancedDelimiter`] as soon as a delimiter pass finds
/// an unclosed marker. The whole call fails; no partial spans are returned.
pub fn tokenize(text: &str) -> Result<Vec<Span>> {
    let mut spans = vec![Span::plain(text)];
    for delimiter in Delimiter::ORDERED {
        spans = split_delimiter(spans, delimiter)?;
    }
    spans = split_pattern(spans, Image::pattern(), Image::span);
    spans = split_pattern(spans, Link::pattern(), Link::span);
    trace!("tokenized {} bytes into {} spans", text.len(), spans.len());
    Ok(spans)
}

/// Splits every plain span on the delimiter's marker.
///
/// Pieces at even positions stay plain, odd positions take the delimiter's
/// kind. Empty pieces are kept.
pub fn split_delimiter(spans: Vec<Span>, delimiter: Delimiter) -> Result<Vec<Span>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text.split(delimiter.marker()).collect();
        // An odd piece count means every opening marker was closed.
        if pieces.len() % 2 == 0 {
            return Err(Error::UnbalancedDelimiter {
                delimiter: delimiter.marker(),
                text: span.text.clone(),
            });
        }

        out.extend(pieces.into_iter().enumerate().map(|(i, piece)| {
            if i % 2 == 0 {
                Span::plain(piece)
            } else {
                Span::new(delimiter.kind(), piece)
            }
        }));
    }
    Ok(out)
}

/// Extracts every `label`/`url` pattern match from plain spans.
///
/// Text around matches becomes plain spans (omitted when empty). Spans
/// without a match pass through unchanged.
fn split_pattern(spans: Vec<Span>, pattern: &Regex, make: fn(&str, &str) -> Span) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let mut pieces = Vec::new();
        let mut last = 0;
        for caps in pattern.captures_iter(&span.text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let label = caps.get(1).map_or("", |m| m.as_str());
            let url = caps.get(2).map_or("", |m| m.as_str());

            if whole.start() > last {
                pieces.push(Span::plain(&span.text[last..whole.start()]));
            }
            pieces.push(make(label, url));
            last = whole.end();
        }

        if pieces.is_empty() {
            out.push(span);
            continue;
        }
        if last < span.text.len() {
            pieces.push(Span::plain(&span.text[last..]));
        }
        out.extend(pieces);
    }
    out
}
