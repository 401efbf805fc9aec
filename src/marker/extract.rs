use std::ops::Range;

use crate::foundation::error::{TypewriterError, TypewriterResult};

/// Location of the first begin/end marker pair inside a text field.
///
/// All offsets are byte offsets into the text the span was extracted from. Since both markers are
/// matched as whole UTF-8 substrings, every offset falls on a character boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerSpan {
    /// Offset of the first byte of the begin marker.
    pub begin_index: usize,
    /// Offset just past the last byte of the end marker.
    pub end_index: usize,
    /// Byte range of the payload between the two markers.
    pub payload: Range<usize>,
}

impl MarkerSpan {
    /// Borrow the payload out of the text this span was extracted from.
    pub fn payload<'a>(&self, text: &'a str) -> &'a str {
        &text[self.payload.clone()]
    }

    /// Length in bytes of the region the markers cover, markers included.
    pub fn marked_len(&self) -> usize {
        self.end_index - self.begin_index
    }
}

/// Locate the first `begin` marker and the first `end` marker after it.
///
/// Returns `Ok(None)` when `begin` does not occur, or when no `end` occurs after the consumed
/// `begin`. Later marker pairs are ignored. Empty markers are rejected.
pub fn extract(text: &str, begin: &str, end: &str) -> TypewriterResult<Option<MarkerSpan>> {
    if begin.is_empty() {
        return Err(TypewriterError::validation("begin marker must not be empty"));
    }
    if end.is_empty() {
        return Err(TypewriterError::validation("end marker must not be empty"));
    }

    let Some(begin_index) = text.find(begin) else {
        return Ok(None);
    };
    let payload_start = begin_index + begin.len();

    // The search resumes after the whole begin marker, so `begin == end` pairs up as a toggle.
    let Some(rel_end) = text[payload_start..].find(end) else {
        return Ok(None);
    };
    let payload_end = payload_start + rel_end;

    Ok(Some(MarkerSpan {
        begin_index,
        end_index: payload_end + end.len(),
        payload: payload_start..payload_end,
    }))
}

/// Replace the marked region of `text` (markers included) with `rendered`.
///
/// The output buffer is sized from the actual lengths, so `rendered` may be longer than the region
/// it replaces.
pub fn splice(text: &str, span: &MarkerSpan, rendered: &str) -> String {
    let prefix = &text[..span.begin_index];
    let suffix = &text[span.end_index..];

    let mut out = String::with_capacity(prefix.len() + rendered.len() + suffix.len());
    out.push_str(prefix);
    out.push_str(rendered);
    out.push_str(suffix);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/marker/extract.rs"]
mod tests;
