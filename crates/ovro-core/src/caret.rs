//! Caret-offset to pixel-position resolution for overlay anchoring.
//!
//! Maps a char offset within the surface's text to an `(x, y)` anchor
//! just below the caret line, using a column-metric model of the
//! surface's layout: the host supplies the content box, the advance of
//! one text column, and the line height. Column counts come from
//! `unicode-width`, so wide scripts measure correctly.

use unicode_width::UnicodeWidthChar;

use crate::config::SurfaceKind;
use crate::token::byte_offset;

/// Placeholder measured in place of a space on single-line surfaces, so
/// trailing and leading spaces still occupy width.
const SPACE_SWAP: char = '.';

/// Pixel anchor for the suggestion overlay, in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaretAnchor {
    pub x: i32,
    pub y: i32,
}

/// Pixel geometry of the real text surface, queried by the host.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceGeometry {
    pub kind: SurfaceKind,
    /// Top-left of the surface in host coordinates.
    pub origin_x: i32,
    pub origin_y: i32,
    pub content_width: u32,
    pub content_height: u32,
    /// Horizontal advance of one text column.
    pub cell_width: u32,
    pub line_height: u32,
}

/// Caret position within the measurement layout, before clamping.
struct MeasuredCaret {
    line: u32,
    column_px: u32,
}

fn char_columns(c: char) -> u32 {
    UnicodeWidthChar::width(c).unwrap_or(0) as u32
}

/// Resolve the anchor for `caret` (char offset) within `text`.
///
/// The local position is clamped to the surface content box, then offset
/// by the surface origin plus `gap` pixels of vertical clearance so the
/// overlay renders below the caret line. Deterministic: same geometry,
/// text, and offset always yield the same anchor. Offsets past the end
/// of `text` clamp to end-of-content.
pub fn resolve_caret(geom: &SurfaceGeometry, text: &str, caret: usize, gap: i32) -> CaretAnchor {
    let end = byte_offset(text, caret);
    let measured = measure_prefix(geom, &text[..end]);

    let x = measured.column_px.min(geom.content_width) as i32;
    let y = (measured.line * geom.line_height).min(geom.content_height) as i32;

    CaretAnchor {
        x: x + geom.origin_x,
        y: y + geom.origin_y + gap,
    }
}

/// Measure the caret position at the end of `prefix`. The layout is a
/// local value, built and dropped within the call.
fn measure_prefix(geom: &SurfaceGeometry, prefix: &str) -> MeasuredCaret {
    match geom.kind {
        SurfaceKind::SingleLine => {
            let column_px: u32 = prefix
                .chars()
                .map(|c| if c == ' ' { SPACE_SWAP } else { c })
                .map(|c| char_columns(c) * geom.cell_width)
                .sum();
            MeasuredCaret { line: 0, column_px }
        }
        SurfaceKind::MultiLine => {
            let capacity = (geom.content_width / geom.cell_width.max(1)).max(1);
            let mut line = 0u32;
            let mut columns = 0u32;
            for c in prefix.chars() {
                if c == '\n' {
                    line += 1;
                    columns = 0;
                    continue;
                }
                let w = char_columns(c);
                if columns + w > capacity && columns > 0 {
                    line += 1;
                    columns = 0;
                }
                columns += w;
            }
            MeasuredCaret {
                line,
                column_px: columns * geom.cell_width,
            }
        }
    }
}
